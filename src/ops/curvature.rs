//! 곡률 해석: 하이퍼볼릭 경로와 유클리드 극한 경로 선택

use num::{Float, ToPrimitive};
use tracing::debug;

use crate::config::{BallConfig, CurvatureMode, Tolerances};
use crate::error::{BallError, BallResult};

/// 검증된 곡률
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Curvature<S> {
    /// c > 0, 볼 반지름 1/√c
    Hyperbolic { c: S, sqrt_c: S },
    /// c → 0⁺ 극한. 뫼비우스 연산이 일반 벡터 연산으로 환원된다.
    Euclidean,
}

impl<S: Float> Curvature<S> {
    /// 원시 곡률 `c` 를 설정에 따라 해석한다.
    ///
    /// - NaN, 무한대, 음수: `InvalidCurvature`
    /// - 0: `EuclideanLimit` 모드에서만 허용
    /// - `euclidean_threshold` 미만의 양수: 유클리드 극한
    pub fn resolve(c: S, config: &BallConfig, tol: &Tolerances<S>) -> BallResult<Self> {
        if !c.is_finite() || c < S::zero() {
            return Err(BallError::InvalidCurvature(to_f64(c)));
        }
        if c == S::zero() {
            return match config.curvature_mode {
                CurvatureMode::EuclideanLimit => Ok(Curvature::Euclidean),
                CurvatureMode::Strict => Err(BallError::InvalidCurvature(0.0)),
            };
        }
        if c < tol.euclidean_threshold {
            debug!(c = to_f64(c), "curvature below threshold, using Euclidean limit");
            return Ok(Curvature::Euclidean);
        }
        Ok(Curvature::Hyperbolic { c, sqrt_c: c.sqrt() })
    }

    /// 변환 공식에 쓰이는 곡률 값 (유클리드 극한은 0)
    #[inline]
    pub fn value(&self) -> S {
        match *self {
            Curvature::Hyperbolic { c, .. } => c,
            Curvature::Euclidean => S::zero(),
        }
    }

    #[inline]
    pub fn is_euclidean(&self) -> bool {
        matches!(self, Curvature::Euclidean)
    }
}

fn to_f64<S: ToPrimitive>(value: S) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
