//! Gyroball: 포인카레 볼 위의 자이로벡터 연산 커널
//!
//! 뫼비우스 덧셈과 스칼라 곱, 그리고 이를 조합한 볼 순전파 변환을 제공합니다.
//! 모든 출력은 c‖x‖² < 1 − ε 를 만족하도록 경계 가드를 거치며,
//! 곡률이 0 으로 가면 유클리드 연산으로 수렴합니다.
//!
//! 배치 벡터는 [`VectorSpace`] 트레이트로 추상화되어 있고, 기본 구현은
//! `ndarray::Array2<f32>` / `Array2<f64>` 입니다.

pub mod config;
pub mod error;
pub mod layers;
pub mod manifolds;
pub mod maps;
pub mod ops;
pub mod space;
pub mod utils;

#[cfg(feature = "python")]
pub mod python;

pub use config::{BallConfig, Constants, CurvatureMode};
pub use error::{BallError, BallResult};
pub use layers::poincare_ball_forward;
pub use manifolds::{create_manifold, KleinModel, Manifold, ManifoldType, PoincareBall};
pub use maps::{dist, exp_map, geodesic, log_map};
pub use ops::{clamp, mobius_add, mobius_scalar, Curvature};
pub use space::VectorSpace;
pub use utils::precision::poincare_ball_forward_f16;

/// 자주 사용되는 핵심 기능들을 쉽게 가져올 수 있는 prelude 모듈
pub mod prelude {
    pub use crate::{
        clamp, create_manifold, dist, exp_map, geodesic, log_map, mobius_add, mobius_scalar,
        poincare_ball_forward, BallConfig, BallError, BallResult, KleinModel, Manifold,
        ManifoldType, PoincareBall, VectorSpace,
    };
}
