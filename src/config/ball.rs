//! 포인카레 볼 설정

use num::{Float, NumCast};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::constants::Constants;
use crate::error::{BallError, BallResult};

/// 곡률 0 을 어떻게 다룰지 결정하는 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurvatureMode {
    /// c ≤ 0 은 항상 `InvalidCurvature`
    #[default]
    Strict,
    /// c == 0 을 유클리드 극한으로 허용
    EuclideanLimit,
}

/// 포인카레 볼 연산의 수치 안정성 설정
///
/// 모든 필드는 `#[serde(default)]` 이므로 일부만 지정해도 된다.
///
/// # Example
/// ```
/// use gyroball::config::BallConfig;
///
/// let config = BallConfig::default();
/// assert_eq!(config.boundary_eps, 1e-5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    /// 경계 여유값 ε, (0, 1) 구간
    pub boundary_eps: f64,
    /// 영벡터 근처 대체 경로 임계값
    pub norm_eps: f64,
    /// 뫼비우스 덧셈 분모 하한
    pub min_denominator: f64,
    /// tanh 입력 절댓값 상한
    pub max_tanh_arg: f64,
    /// 유클리드 극한으로 취급하는 곡률 상한 (미만)
    pub euclidean_threshold: f64,
    pub curvature_mode: CurvatureMode,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            boundary_eps: Constants::BOUNDARY_EPSILON,
            norm_eps: Constants::NORM_EPSILON,
            min_denominator: Constants::MIN_DENOMINATOR,
            max_tanh_arg: Constants::MAX_TANH_ARG,
            euclidean_threshold: Constants::EUCLIDEAN_CURVATURE_THRESHOLD,
            curvature_mode: CurvatureMode::Strict,
        }
    }
}

impl BallConfig {
    /// c == 0 을 허용하는 설정
    pub fn euclidean_limit() -> Self {
        Self {
            curvature_mode: CurvatureMode::EuclideanLimit,
            ..Default::default()
        }
    }

    /// 설정값 검증. 첫 번째 오류를 반환한다.
    pub fn validate(&self) -> BallResult<()> {
        if self.boundary_eps.is_nan() || self.boundary_eps <= 0.0 || self.boundary_eps >= 1.0 {
            return Err(reject(format!(
                "boundary_eps must be in open interval (0, 1), got {}",
                self.boundary_eps
            )));
        }
        if self.norm_eps.is_nan() || self.norm_eps <= 0.0 {
            return Err(reject(format!(
                "norm_eps must be positive, got {}",
                self.norm_eps
            )));
        }
        if self.min_denominator.is_nan() || self.min_denominator <= 0.0 {
            return Err(reject(format!(
                "min_denominator must be positive, got {}",
                self.min_denominator
            )));
        }
        if self.max_tanh_arg.is_nan() || self.max_tanh_arg <= 0.0 {
            return Err(reject(format!(
                "max_tanh_arg must be positive, got {}",
                self.max_tanh_arg
            )));
        }
        if !self.euclidean_threshold.is_finite() || self.euclidean_threshold < 0.0 {
            return Err(reject(format!(
                "euclidean_threshold must be finite and non-negative, got {}",
                self.euclidean_threshold
            )));
        }
        Ok(())
    }

    /// 작업 스칼라 타입으로 변환한 허용오차
    pub fn tolerances<S: Float>(&self) -> BallResult<Tolerances<S>> {
        Ok(Tolerances {
            boundary_eps: cast(self.boundary_eps, "boundary_eps")?,
            norm_eps: cast(self.norm_eps, "norm_eps")?,
            min_denominator: cast(self.min_denominator, "min_denominator")?,
            max_tanh_arg: cast(self.max_tanh_arg, "max_tanh_arg")?,
            euclidean_threshold: cast(self.euclidean_threshold, "euclidean_threshold")?,
        })
    }
}

/// 작업 스칼라 타입 `S` 로 변환된 허용오차 묶음
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances<S> {
    pub boundary_eps: S,
    pub norm_eps: S,
    pub min_denominator: S,
    pub max_tanh_arg: S,
    pub euclidean_threshold: S,
}

impl<S: Float> Tolerances<S> {
    /// 1 − ε
    #[inline]
    pub fn boundary_limit(&self) -> S {
        S::one() - self.boundary_eps
    }
}

fn cast<S: Float>(value: f64, field: &str) -> BallResult<S> {
    <S as NumCast>::from(value)
        .ok_or_else(|| BallError::InvalidConfig(format!("{field} = {value} is not representable")))
}

fn reject(message: String) -> BallError {
    warn!(%message, "rejecting ball configuration");
    BallError::InvalidConfig(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(BallConfig::default().validate().is_ok());
        assert!(BallConfig::euclidean_limit().validate().is_ok());
    }

    #[test]
    fn boundary_eps_out_of_range_is_rejected() {
        for eps in [0.0, 1.0, -1e-3, f64::NAN] {
            let config = BallConfig {
                boundary_eps: eps,
                ..Default::default()
            };
            assert!(matches!(config.validate(), Err(BallError::InvalidConfig(_))));
        }
    }

    #[test]
    fn negative_threshold_is_rejected() {
        let config = BallConfig {
            euclidean_threshold: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn tolerances_cast_to_f32() {
        let tol = BallConfig::default().tolerances::<f32>().unwrap();
        assert!((tol.boundary_eps - 1e-5).abs() < 1e-12);
        assert!(tol.boundary_limit() < 1.0);
    }
}
