//! 하이퍼볼릭 맵 함수들 (log_map, exp_map 등)

use ndarray::Array1;

use crate::error::BallResult;
use crate::manifolds::{Manifold, PoincareBall};
use crate::space::VectorSpace;

/// 로그 맵 함수 (하이퍼볼릭 → 유클리드)
pub fn log_map<V: VectorSpace>(x: &V, c: V::Scalar) -> BallResult<V> {
    let manifold = PoincareBall::new();
    manifold.log_map(x, c)
}

/// 지수 맵 함수 (유클리드 → 하이퍼볼릭)
pub fn exp_map<V: VectorSpace>(v: &V, c: V::Scalar) -> BallResult<V> {
    let manifold = PoincareBall::new();
    manifold.exp_map(v, c)
}

/// 측지선 함수
pub fn geodesic<V: VectorSpace>(u: &V, v: &V, c: V::Scalar, t: V::Scalar) -> BallResult<V> {
    let manifold = PoincareBall::new();
    manifold.geodesic(u, v, c, t)
}

/// 행별 쌍곡 거리
pub fn dist<V: VectorSpace>(u: &V, v: &V, c: V::Scalar) -> BallResult<Array1<V::Scalar>> {
    let manifold = PoincareBall::new();
    manifold.dist(u, v, c)
}
