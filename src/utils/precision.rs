//! 반정밀도(f16) 입출력
//!
//! 연산은 f32 로 수행하고 결과만 f16 으로 좁힌다. f16 의 상대 정밀도(2⁻¹¹)는
//! 기본 경계 여유값보다 거칠기 때문에, 좁히기 전에 더 큰 여유값으로 다시 clamp 한다.

use half::f16;
use ndarray::Array2;

use crate::error::{BallError, BallResult};
use crate::manifolds::PoincareBall;
use crate::ops::guard::clamp;
use crate::ops::Curvature;

/// f16 출력에 쓰는 경계 여유값.
///
/// clamp 후 각 좌표를 반올림해도 c‖x‖² < 1 − HALF_BOUNDARY_EPSILON / 2 가 유지된다.
pub const HALF_BOUNDARY_EPSILON: f32 = 4e-3;

pub fn widen(x: &Array2<f16>) -> Array2<f32> {
    x.mapv(f16::to_f32)
}

/// f32 결과를 볼 안에 남도록 f16 으로 변환
pub fn narrow_into_ball(x: &Array2<f32>, c: f32) -> BallResult<Array2<f16>> {
    let guarded = match PoincareBall::new().curvature(c)? {
        Curvature::Hyperbolic { c, .. } => clamp(x, c, HALF_BOUNDARY_EPSILON),
        Curvature::Euclidean => x.clone(),
    };
    let out = guarded.mapv(f16::from_f32);
    if out.iter().any(|v| !v.is_finite()) {
        return Err(BallError::HalfPrecisionOverflow);
    }
    Ok(out)
}

/// f16 순전파 변환
pub fn poincare_ball_forward_f16(
    u: &Array2<f16>,
    v: &Array2<f16>,
    c: f32,
    t: f32,
) -> BallResult<Array2<f16>> {
    if u.dim() != v.dim() {
        return Err(BallError::ShapeMismatch {
            left: u.dim(),
            right: v.dim(),
        });
    }
    let out = PoincareBall::new().forward(&widen(u), &widen(v), c, t)?;
    narrow_into_ball(&out, c)
}
