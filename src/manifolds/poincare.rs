//! 포인카레 볼 모델 구현

use ndarray::Array1;
use num::{Float, One};

use super::Manifold;
use crate::config::{BallConfig, Tolerances};
use crate::error::BallResult;
use crate::layers::{forward_kernel, gyro_inverse};
use crate::ops::guard::{clamp, enforce_invariant};
use crate::ops::{add_kernel, scalar_kernel, Curvature};
use crate::space::VectorSpace;
use crate::utils::numeric::{atanh, safe_tanh};

/// 포인카레 볼 모델 구현체
///
/// 곡률은 호출마다 받고, 수치 안정성 설정만 보관한다.
///
/// # Example
/// ```
/// use gyroball::{Manifold, PoincareBall};
/// use ndarray::arr2;
///
/// let ball = PoincareBall::new();
/// let x = arr2(&[[0.3_f64, -0.2]]);
/// let origin = arr2(&[[0.0_f64, 0.0]]);
/// let y = ball.add(&x, &origin, 1.0).unwrap();
/// assert!((y[[0, 0]] - 0.3).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PoincareBall {
    config: BallConfig,
}

impl PoincareBall {
    /// 기본 설정의 포인카레 볼
    pub fn new() -> Self {
        Self::default()
    }

    /// 검증된 설정으로 생성
    pub fn with_config(config: BallConfig) -> BallResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &BallConfig {
        &self.config
    }

    /// 곡률 `c` 를 이 설정으로 해석
    pub fn curvature<S: Float>(&self, c: S) -> BallResult<Curvature<S>> {
        Ok(self.resolve(c)?.0)
    }

    /// 순전파 변환: u ⊕ (t ⊗ (⊖u ⊕ v))
    pub fn forward<V: VectorSpace>(
        &self,
        u: &V,
        v: &V,
        c: V::Scalar,
        t: V::Scalar,
    ) -> BallResult<V> {
        u.ensure_same_dims(v)?;
        let (curvature, tol) = self.resolve(c)?;
        let out = forward_kernel(u, v, curvature, t, &tol)?;
        Ok(self.finish(out, curvature, &tol, "poincare_ball_forward", &[u, v], &[t]))
    }

    /// 경계를 넘은 행을 열린 볼 안으로 투영
    pub fn project<V: VectorSpace>(&self, x: &V, c: V::Scalar) -> BallResult<V> {
        let (curvature, tol) = self.resolve(c)?;
        Ok(match curvature {
            Curvature::Hyperbolic { c, .. } => clamp(x, c, tol.boundary_eps),
            Curvature::Euclidean => x.clone(),
        })
    }

    pub(crate) fn resolve<S: Float>(&self, c: S) -> BallResult<(Curvature<S>, Tolerances<S>)> {
        let tol = self.config.tolerances::<S>()?;
        let curvature = Curvature::resolve(c, &self.config, &tol)?;
        Ok((curvature, tol))
    }

    /// 하이퍼볼릭 경로의 결과에 불변식 검사를 적용
    pub(crate) fn finish<V: VectorSpace>(
        &self,
        out: V,
        curvature: Curvature<V::Scalar>,
        tol: &Tolerances<V::Scalar>,
        op: &'static str,
        inputs: &[&V],
        params: &[V::Scalar],
    ) -> V {
        match curvature {
            Curvature::Hyperbolic { c, .. } => {
                enforce_invariant(out, c, tol.boundary_eps, op, inputs, params)
            }
            Curvature::Euclidean => out,
        }
    }
}

impl<V: VectorSpace> Manifold<V> for PoincareBall {
    fn add(&self, u: &V, v: &V, c: V::Scalar) -> BallResult<V> {
        u.ensure_same_dims(v)?;
        let (curvature, tol) = self.resolve(c)?;
        let out = add_kernel(u, v, curvature, &tol)?;
        Ok(self.finish(out, curvature, &tol, "mobius_add", &[u, v], &[]))
    }

    fn scalar(&self, u: &V, c: V::Scalar, r: V::Scalar) -> BallResult<V> {
        let (curvature, tol) = self.resolve(c)?;
        let out = scalar_kernel(u, curvature, r, &tol);
        Ok(self.finish(out, curvature, &tol, "mobius_scalar", &[u], &[r]))
    }

    fn geodesic(&self, u: &V, v: &V, c: V::Scalar, t: V::Scalar) -> BallResult<V> {
        self.forward(u, v, c, t)
    }

    fn dist(&self, u: &V, v: &V, c: V::Scalar) -> BallResult<Array1<V::Scalar>> {
        u.ensure_same_dims(v)?;
        let (curvature, tol) = self.resolve(c)?;
        let two = V::Scalar::one() + V::Scalar::one();

        match curvature {
            // c → 0 에서 2/√c · atanh(√c‖·‖) → 2‖v − u‖
            Curvature::Euclidean => Ok(v.sub(u)?.squared_norm().mapv(|s| two * s.sqrt())),
            Curvature::Hyperbolic { sqrt_c, .. } => {
                // d(u,v) = 2/√c * atanh(√c * |−u ⊕ v|)
                let minus_u = scalar_kernel(u, curvature, gyro_inverse()?, &tol);
                let diff = add_kernel(&minus_u, v, curvature, &tol)?;
                let limit = tol.boundary_limit();
                Ok(diff
                    .squared_norm()
                    .mapv(|s| two / sqrt_c * atanh(sqrt_c * s.sqrt(), limit)))
            }
        }
    }

    fn exp_map(&self, v: &V, c: V::Scalar) -> BallResult<V> {
        let (curvature, tol) = self.resolve(c)?;
        let (c, sqrt_c) = match curvature {
            Curvature::Hyperbolic { c, sqrt_c } => (c, sqrt_c),
            Curvature::Euclidean => return Ok(v.clone()),
        };

        // tanh(√c‖v‖)/(√c‖v‖) * v
        let factors = v.squared_norm().mapv(|s| {
            let n = sqrt_c * s.sqrt();
            if n > tol.norm_eps {
                safe_tanh(n, tol.max_tanh_arg) / n
            } else {
                V::Scalar::one()
            }
        });
        let out = clamp(&v.scale_rows(&factors), c, tol.boundary_eps);
        Ok(self.finish(out, curvature, &tol, "exp_map", &[v], &[]))
    }

    fn log_map(&self, x: &V, c: V::Scalar) -> BallResult<V> {
        let (curvature, tol) = self.resolve(c)?;
        let sqrt_c = match curvature {
            Curvature::Hyperbolic { sqrt_c, .. } => sqrt_c,
            Curvature::Euclidean => return Ok(x.clone()),
        };

        // atanh(√c‖x‖)/(√c‖x‖) * x
        let limit = tol.boundary_limit();
        let factors = x.squared_norm().mapv(|s| {
            let n = sqrt_c * s.sqrt();
            if n > tol.norm_eps {
                atanh(n, limit) / n
            } else {
                V::Scalar::one()
            }
        });
        Ok(x.scale_rows(&factors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BallError;
    use ndarray::arr2;

    #[test]
    fn strict_mode_rejects_zero_curvature() {
        let ball = PoincareBall::new();
        let x = arr2(&[[0.1_f64, 0.2]]);
        assert_eq!(
            ball.scalar(&x, 0.0, 2.0),
            Err(BallError::InvalidCurvature(0.0))
        );
    }

    #[test]
    fn euclidean_limit_mode_accepts_zero_curvature() {
        let ball = PoincareBall::with_config(BallConfig::euclidean_limit()).unwrap();
        let x = arr2(&[[1.0_f64, 2.0]]);
        assert_eq!(ball.scalar(&x, 0.0, 2.0).unwrap(), arr2(&[[2.0, 4.0]]));
        assert_eq!(
            Manifold::<ndarray::Array2<f64>>::dist(&ball, &x, &arr2(&[[4.0, 6.0]]), 0.0).unwrap()[0],
            10.0
        );
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = BallConfig {
            norm_eps: 0.0,
            ..Default::default()
        };
        assert!(PoincareBall::with_config(config).is_err());
    }

    #[test]
    fn exp_and_log_are_inverse() {
        let ball = PoincareBall::new();
        let v = arr2(&[[0.7_f64, -0.4], [0.0, 0.0]]);
        let x = ball.exp_map(&v, 0.5).unwrap();
        let back = ball.log_map(&x, 0.5).unwrap();
        for (a, b) in v.iter().zip(back.iter()) {
            assert!((a - b).abs() < 1e-10);
        }
    }

    #[test]
    fn exp_map_repairs_non_finite_tangents() {
        let ball = PoincareBall::new();
        let v = arr2(&[[f64::NAN, 0.0], [f64::INFINITY, 1.0], [0.3, 0.0]]);
        let x = ball.exp_map(&v, 1.0).unwrap();
        assert!(x.is_finite());
        assert_eq!(x.row(0).to_vec(), vec![0.0, 0.0]);
        assert_eq!(x.row(1).to_vec(), vec![0.0, 0.0]);
        assert!((x[[2, 0]] - 0.3_f64.tanh()).abs() < 1e-12);
    }

    #[test]
    fn project_keeps_direction_of_huge_rows() {
        let ball = PoincareBall::new();
        let x = arr2(&[[3e19_f32, 4e19]]);
        let p = ball.project(&x, 1.0).unwrap();
        assert!((p[[0, 0]] - 0.6).abs() < 1e-4);
        assert!((p[[0, 1]] - 0.8).abs() < 1e-4);
    }

    #[test]
    fn distance_from_origin() {
        let ball = PoincareBall::new();
        let origin = arr2(&[[0.0_f64, 0.0]]);
        let x = arr2(&[[0.5_f64, 0.0]]);
        let d = ball.dist(&origin, &x, 1.0).unwrap();
        assert!((d[0] - 2.0 * 0.5_f64.atanh()).abs() < 1e-12);
    }
}
