//! 배치 벡터 컨테이너 추상화
//!
//! 뫼비우스 공식은 이 트레이트만 사용하므로, 저장소(CPU 배열, 디바이스 버퍼 등)가
//! 달라도 같은 공식을 공유한다. 기본 구현은 `ndarray::Array2` 이다.

mod dense;

use std::fmt::Debug;

use ndarray::Array1;
use num::Float;

use crate::error::{BallError, BallResult};

/// (batch × feature) 실수 벡터 묶음
///
/// 행 단위 축약(`squared_norm`, `dot`)은 각 행을 인덱스 순서로 누적해야 한다.
/// 병렬 구현이라도 행 내부의 누적 순서를 바꾸면 안 된다.
pub trait VectorSpace: Clone + Sized {
    type Scalar: Float + Send + Sync + Debug;

    /// (batch, dim)
    fn dims(&self) -> (usize, usize);

    /// 모든 원소가 0 인 벡터 묶음 (볼의 원점)
    fn origin(batch: usize, dim: usize) -> Self;

    fn add(&self, other: &Self) -> BallResult<Self>;

    fn sub(&self, other: &Self) -> BallResult<Self>;

    fn scale(&self, k: Self::Scalar) -> Self;

    /// 행별 ‖x‖²
    fn squared_norm(&self) -> Array1<Self::Scalar>;

    /// 행별 ⟨x, y⟩
    fn dot(&self, other: &Self) -> BallResult<Array1<Self::Scalar>>;

    /// i 번째 행에 `factors[i]` 를 곱함
    fn scale_rows(&self, factors: &Array1<Self::Scalar>) -> Self;

    /// i 번째 행 = a[i]·self[i] + b[i]·other[i]
    fn combine_rows(
        &self,
        a: &Array1<Self::Scalar>,
        other: &Self,
        b: &Array1<Self::Scalar>,
    ) -> BallResult<Self>;

    /// 행별 max|x_i|. 제곱합이 넘칠 때 정규화에 쓴다.
    fn row_max_abs(&self) -> Array1<Self::Scalar>;

    /// 행별로 모든 원소가 유한한지
    fn row_finite_mask(&self) -> Vec<bool>;

    /// `mask[i]` 가 true 인 행을 0 으로 채움
    fn zero_rows(&mut self, mask: &[bool]);

    fn is_finite(&self) -> bool {
        self.row_finite_mask().into_iter().all(|ok| ok)
    }

    fn origin_like(&self) -> Self {
        let (batch, dim) = self.dims();
        Self::origin(batch, dim)
    }

    fn ensure_same_dims(&self, other: &Self) -> BallResult<()> {
        let (left, right) = (self.dims(), other.dims());
        if left != right {
            return Err(BallError::ShapeMismatch { left, right });
        }
        Ok(())
    }
}
