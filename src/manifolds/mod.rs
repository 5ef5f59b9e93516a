//! 하이퍼볼릭 다양체(manifold) 구현 모듈

mod klein;
mod poincare;

pub use klein::KleinModel;
pub use poincare::PoincareBall;

use ndarray::Array1;

use crate::config::BallConfig;
use crate::error::BallResult;
use crate::space::VectorSpace;

/// 지원하는 다양체 유형
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifoldType {
    /// 포인카레 볼 모델
    Poincare,
    /// 클라인 모델
    Klein,
}

/// 하이퍼볼릭 다양체의 핵심 트레이트
///
/// 모든 연산은 순수 함수다. 형태/곡률 오류는 수치 연산 전에 반환된다.
pub trait Manifold<V: VectorSpace> {
    /// 뫼비우스 덧셈: u ⊕_c v
    fn add(&self, u: &V, v: &V, c: V::Scalar) -> BallResult<V>;

    /// 뫼비우스 스칼라 곱셈: r ⊗_c u
    fn scalar(&self, u: &V, c: V::Scalar, r: V::Scalar) -> BallResult<V>;

    /// 측지선(geodesic) 보간법: u ⊕ (t ⊗ (⊖u ⊕ v))
    fn geodesic(&self, u: &V, v: &V, c: V::Scalar, t: V::Scalar) -> BallResult<V>;

    /// 두 점 사이의 행별 거리
    fn dist(&self, u: &V, v: &V, c: V::Scalar) -> BallResult<Array1<V::Scalar>>;

    /// 지수 맵(exp map): 원점의 접공간 → 다양체
    fn exp_map(&self, v: &V, c: V::Scalar) -> BallResult<V>;

    /// 로그 맵(log map): 다양체 → 원점의 접공간
    fn log_map(&self, x: &V, c: V::Scalar) -> BallResult<V>;
}

/// 다양체 인스턴스 생성 팩토리 함수
pub fn create_manifold<V: VectorSpace>(
    manifold_type: ManifoldType,
    config: BallConfig,
) -> BallResult<Box<dyn Manifold<V> + Send + Sync>> {
    Ok(match manifold_type {
        ManifoldType::Poincare => Box::new(PoincareBall::with_config(config)?),
        ManifoldType::Klein => Box::new(KleinModel::with_config(config)?),
    })
}
