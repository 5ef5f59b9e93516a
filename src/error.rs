//! 자이로벡터 연산 에러 타입

use thiserror::Error;

/// 볼 연산 결과 타입
pub type BallResult<T> = Result<T, BallError>;

/// 볼 연산 에러
///
/// 형태와 곡률 검사는 부동소수점 연산 전에 끝나므로 부분 결과가 남지 않는다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BallError {
    /// 짝지어진 입력의 (batch, dim) 형태가 다름
    #[error("shape mismatch: {left:?} vs {right:?}")]
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    /// 곡률이 NaN/무한대/음수이거나, Strict 모드에서 0
    #[error("invalid curvature {0}: must be finite and > 0 (or 0 in Euclidean-limit mode)")]
    InvalidCurvature(f64),

    /// 설정값 검증 실패
    #[error("invalid ball configuration: {0}")]
    InvalidConfig(String),

    /// 가드를 통과한 뒤에도 비유한값 또는 볼 밖의 점이 남은 경우 (내부 전용)
    #[error("stability invariant violated in {op}: {rows} row(s) non-finite or outside the ball")]
    StabilityInvariantViolated { op: &'static str, rows: usize },

    /// f16 으로 좁히는 과정에서 오버플로우 발생
    #[error("result does not fit in half precision")]
    HalfPrecisionOverflow,
}
