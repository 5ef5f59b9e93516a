//! 뫼비우스 연산을 조합한 레이어 변환

mod poincare_ball;

pub use poincare_ball::poincare_ball_forward;
pub(crate) use poincare_ball::{forward_kernel, gyro_inverse};
