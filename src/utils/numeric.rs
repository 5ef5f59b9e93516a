//! 수치 계산 유틸리티 함수들

use ndarray::ArrayView1;
use num::Float;

/// 정의역을 [-limit, limit] 로 제한한 atanh
#[inline]
pub fn atanh<S: Float>(x: S, limit: S) -> S {
    x.max(-limit).min(limit).atanh()
}

/// 수치 안정적인 tanh 함수 구현 (오버플로우 방지)
#[inline]
pub fn safe_tanh<S: Float>(x: S, max_arg: S) -> S {
    x.max(-max_arg).min(max_arg).tanh()
}

/// 한 행의 제곱합. 항상 인덱스 순서로 누적한다.
#[inline]
pub fn row_squared_norm<S: Float>(row: ArrayView1<'_, S>) -> S {
    row.iter().fold(S::zero(), |acc, &v| acc + v * v)
}

/// 두 행의 내적. 누적 순서는 `row_squared_norm` 과 같다.
#[inline]
pub fn row_dot<S: Float>(a: ArrayView1<'_, S>, b: ArrayView1<'_, S>) -> S {
    a.iter()
        .zip(b.iter())
        .fold(S::zero(), |acc, (&x, &y)| acc + x * y)
}

/// 크기가 `min` 미만인 분모를 부호를 유지한 채 `±min` 으로 올림
#[inline]
pub fn floor_denominator<S: Float>(den: S, min: S) -> S {
    if den.abs() >= min {
        den
    } else if den < S::zero() {
        -min
    } else {
        min
    }
}
