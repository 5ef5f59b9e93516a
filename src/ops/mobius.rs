//! 뫼비우스 관련 연산 구현

use ndarray::Zip;
use num::{Float, One};

use super::curvature::Curvature;
use super::guard::clamp;
use crate::config::Tolerances;
use crate::error::BallResult;
use crate::manifolds::{Manifold, PoincareBall};
use crate::space::VectorSpace;
use crate::utils::numeric::{atanh, floor_denominator, safe_tanh};

/// 뫼비우스 덧셈: u ⊕_c v (기본 설정)
pub fn mobius_add<V: VectorSpace>(u: &V, v: &V, c: V::Scalar) -> BallResult<V> {
    PoincareBall::new().add(u, v, c)
}

/// 뫼비우스 스칼라 곱셈: r ⊗_c u (기본 설정)
pub fn mobius_scalar<V: VectorSpace>(u: &V, c: V::Scalar, r: V::Scalar) -> BallResult<V> {
    PoincareBall::new().scalar(u, c, r)
}

/// 뫼비우스 스칼라 곱셈 커널
///
/// n = √c‖x‖ 일 때
/// - n > ε_norm: tanh(r · atanh(min(n, 1 − ε))) · x / n
/// - n ≤ ε_norm: r · x (테일러 1차 극한)
///
/// 결과는 가드를 거친다. 유클리드 극한에서는 r · x 그대로.
pub(crate) fn scalar_kernel<V: VectorSpace>(
    x: &V,
    curvature: Curvature<V::Scalar>,
    r: V::Scalar,
    tol: &Tolerances<V::Scalar>,
) -> V {
    let (c, sqrt_c) = match curvature {
        Curvature::Hyperbolic { c, sqrt_c } => (c, sqrt_c),
        Curvature::Euclidean => return x.scale(r),
    };

    let limit = tol.boundary_limit();
    let factors = x.squared_norm().mapv(|s| {
        let n = sqrt_c * s.sqrt();
        if n > tol.norm_eps {
            safe_tanh(r * atanh(n, limit), tol.max_tanh_arg) / n
        } else {
            r
        }
    });

    clamp(&x.scale_rows(&factors), c, tol.boundary_eps)
}

/// 뫼비우스 덧셈 커널
///
/// ```text
/// num = (1 + 2c<x,y> + c|y|²) x + (1 - c|x|²) y
/// den = 1 + 2c<x,y> + c²|x|²|y|²
/// ```
///
/// den 은 부호를 유지한 채 `min_denominator` 이상으로 올린다.
pub(crate) fn add_kernel<V: VectorSpace>(
    x: &V,
    y: &V,
    curvature: Curvature<V::Scalar>,
    tol: &Tolerances<V::Scalar>,
) -> BallResult<V> {
    x.ensure_same_dims(y)?;
    let c = match curvature {
        Curvature::Hyperbolic { c, .. } => c,
        Curvature::Euclidean => return x.add(y),
    };

    let one = V::Scalar::one();
    let two = one + one;

    // x2 및 y2는 각 벡터의 제곱 노름, xy는 내적
    let x2 = x.squared_norm();
    let y2 = y.squared_norm();
    let xy = x.dot(y)?;

    let den = Zip::from(&x2)
        .and(&y2)
        .and(&xy)
        .map_collect(|&x2, &y2, &xy| {
            floor_denominator(one + two * c * xy + c * c * x2 * y2, tol.min_denominator)
        });
    let coef_x = Zip::from(&y2)
        .and(&xy)
        .and(&den)
        .map_collect(|&y2, &xy, &den| (one + two * c * xy + c * y2) / den);
    let coef_y = Zip::from(&x2)
        .and(&den)
        .map_collect(|&x2, &den| (one - c * x2) / den);

    let sum = x.combine_rows(&coef_x, y, &coef_y)?;
    Ok(clamp(&sum, c, tol.boundary_eps))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BallConfig;
    use ndarray::{arr2, Array2};

    fn hyperbolic(c: f64) -> Curvature<f64> {
        Curvature::Hyperbolic { c, sqrt_c: c.sqrt() }
    }

    fn tol() -> Tolerances<f64> {
        BallConfig::default().tolerances().unwrap()
    }

    #[test]
    fn scalar_follows_tanh_atanh_formula() {
        let x = arr2(&[[0.3_f64, 0.4]]);
        let out = scalar_kernel(&x, hyperbolic(1.0), 2.0, &tol());
        // ‖x‖ = 0.5
        let expected = (2.0 * 0.5_f64.atanh()).tanh() / 0.5;
        assert!((out[[0, 0]] - 0.3 * expected).abs() < 1e-12);
        assert!((out[[0, 1]] - 0.4 * expected).abs() < 1e-12);
    }

    #[test]
    fn scalar_near_zero_uses_linear_fallback() {
        let x = arr2(&[[1e-9_f64, 0.0]]);
        let out = scalar_kernel(&x, hyperbolic(1.0), 3.0, &tol());
        assert!((out[[0, 0]] - 3e-9).abs() < 1e-20);
    }

    #[test]
    fn scalar_large_factor_stays_inside() {
        let x = arr2(&[[0.5_f64, 0.0]]);
        let out = scalar_kernel(&x, hyperbolic(1.0), 100.0, &tol());
        assert!(out.squared_norm()[0] < 1.0 - 1e-5);
        assert!(out[[0, 0]] > 0.99);
    }

    #[test]
    fn add_matches_closed_form_on_a_line() {
        // 1차원에서 u ⊕ v = (u + v) / (1 + c u v)
        let x = arr2(&[[0.5_f64]]);
        let y = arr2(&[[0.25_f64]]);
        let out = add_kernel(&x, &y, hyperbolic(1.0), &tol()).unwrap();
        assert!((out[[0, 0]] - 0.75 / 1.125).abs() < 1e-12);
    }

    #[test]
    fn euclidean_kernels_are_plain_arithmetic() {
        let x = arr2(&[[3.0_f64, -4.0]]);
        let y = arr2(&[[1.0_f64, 1.0]]);
        assert_eq!(
            scalar_kernel(&x, Curvature::Euclidean, 0.5, &tol()),
            arr2(&[[1.5, -2.0]])
        );
        assert_eq!(
            add_kernel(&x, &y, Curvature::Euclidean, &tol()).unwrap(),
            arr2(&[[4.0, -3.0]])
        );
    }

    #[test]
    fn add_rejects_mismatched_rows() {
        let x = Array2::<f64>::zeros((2, 2));
        let y = Array2::<f64>::zeros((3, 2));
        assert!(add_kernel(&x, &y, hyperbolic(1.0), &tol()).is_err());
    }
}
