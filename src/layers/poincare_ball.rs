//! 포인카레 볼 순전파 변환

use num::NumCast;

use crate::config::{Constants, Tolerances};
use crate::error::{BallError, BallResult};
use crate::manifolds::PoincareBall;
use crate::ops::{add_kernel, scalar_kernel, Curvature};
use crate::space::VectorSpace;

/// u 에서 v 방향으로의 자이로 평행이동 보간 (기본 설정)
///
/// `t = 0` 이면 u, `t = 1` 이면 v.
///
/// # Example
/// ```
/// use gyroball::poincare_ball_forward;
/// use ndarray::arr2;
///
/// let u = arr2(&[[0.0_f64, 0.0]]);
/// let v = arr2(&[[0.5_f64, 0.0]]);
/// let mid = poincare_ball_forward(&u, &v, 1.0, 0.5).unwrap();
/// let expected = (0.5 * 0.5_f64.atanh()).tanh();
/// assert!((mid[[0, 0]] - expected).abs() < 1e-12);
/// ```
pub fn poincare_ball_forward<V: VectorSpace>(
    u: &V,
    v: &V,
    c: V::Scalar,
    t: V::Scalar,
) -> BallResult<V> {
    PoincareBall::new().forward(u, v, c, t)
}

/// 순전파 커널
///
/// ```text
/// minus_u = (-1) ⊗ u
/// delta   = minus_u ⊕ v
/// delta_t = t ⊗ delta
/// result  = u ⊕ delta_t
/// ```
///
/// 각 단계는 가드를 거친다. 유클리드 극한에서는 (1 − t)u + tv 가 된다.
pub(crate) fn forward_kernel<V: VectorSpace>(
    u: &V,
    v: &V,
    curvature: Curvature<V::Scalar>,
    t: V::Scalar,
    tol: &Tolerances<V::Scalar>,
) -> BallResult<V> {
    u.ensure_same_dims(v)?;
    let inverse = gyro_inverse::<V::Scalar>()?;

    // -u 계산
    let minus_u = scalar_kernel(u, curvature, inverse, tol);

    // -u ⊕ v 계산
    let delta = add_kernel(&minus_u, v, curvature, tol)?;

    // t ⊗ (-u ⊕ v) 계산
    let delta_t = scalar_kernel(&delta, curvature, t, tol);

    // u ⊕ (t ⊗ (-u ⊕ v)) 계산
    add_kernel(u, &delta_t, curvature, tol)
}

pub(crate) fn gyro_inverse<S: NumCast>() -> BallResult<S> {
    <S as NumCast>::from(Constants::GYRO_INVERSE).ok_or_else(|| {
        BallError::InvalidConfig("gyro inverse is not representable".to_string())
    })
}
