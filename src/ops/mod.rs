//! 하이퍼볼릭 연산자 구현 모듈

pub mod curvature;
pub mod guard;
mod mobius;

pub use curvature::Curvature;
pub use guard::clamp;
pub use mobius::{mobius_add, mobius_scalar};
pub(crate) use mobius::{add_kernel, scalar_kernel};
