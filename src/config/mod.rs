//! 설정과 수치 상수

mod ball;
pub mod constants;

pub use ball::{BallConfig, CurvatureMode, Tolerances};
pub use constants::Constants;
