//! 볼 경계 안정화 가드
//!
//! 부동소수점 오차로 경계에 닿거나 넘어간 점을 열린 볼 안으로 되돌린다.

use ndarray::Array1;
use num::{Float, One, Zero};
use tracing::{debug, error, trace};

use crate::error::BallError;
use crate::space::VectorSpace;

/// c‖x‖² ≥ 1 − ε 인 행을 (1 − ε)/(√c‖x‖) 배로 축소한다.
///
/// 축소된 행은 √c‖x'‖ = 1 − ε, 즉 c‖x'‖² = (1 − ε)² < 1 − ε 를 만족한다.
/// 나머지 행과 영벡터는 그대로 둔다. 유한한 입력과 c > 0 에 대해 항상 유한하다.
///
/// 제곱합이 넘치는 유한 행은 행의 최대 절댓값으로 먼저 나눈 뒤 노름을 구하므로
/// 방향이 유지된다.
pub fn clamp<V: VectorSpace>(x: &V, c: V::Scalar, eps: V::Scalar) -> V {
    let one = V::Scalar::one();
    let limit = one - eps;
    let sq = x.squared_norm();
    let finite = x.row_finite_mask();

    let overflow: Vec<bool> = finite
        .iter()
        .zip(sq.iter())
        .map(|(&ok, s)| ok && s.is_infinite())
        .collect();
    let outside = sq
        .iter()
        .zip(&overflow)
        .filter(|&(&s, &o)| o || c * s >= limit)
        .count();
    if outside == 0 {
        return x.clone();
    }
    trace!(rows = outside, "clamping rows back inside the ball");

    let sqrt_c = c.sqrt();
    if !overflow.contains(&true) {
        let factors = sq.mapv(|s| {
            let n = s.sqrt();
            if c * s >= limit && n > V::Scalar::zero() {
                limit / (sqrt_c * n)
            } else {
                one
            }
        });
        return x.scale_rows(&factors);
    }

    // 넘친 행은 x / max|x_i| 로 정규화한 뒤 다시 노름을 구한다
    let max_abs = x.row_max_abs();
    let pre: Array1<V::Scalar> = overflow
        .iter()
        .zip(max_abs.iter())
        .map(|(&o, &m)| if o { one / m } else { one })
        .collect();
    let base = x.scale_rows(&pre);
    let base_sq = base.squared_norm();
    let sqrt_limit = limit.sqrt();
    let factors: Array1<V::Scalar> = base_sq
        .iter()
        .zip(overflow.iter().zip(max_abs.iter()))
        .map(|(&s, (&o, &m))| {
            let n = s.sqrt();
            if o {
                if sqrt_c * m * n >= sqrt_limit {
                    limit / (sqrt_c * n)
                } else {
                    m
                }
            } else if c * s >= limit && n > V::Scalar::zero() {
                limit / (sqrt_c * n)
            } else {
                one
            }
        })
        .collect();
    base.scale_rows(&factors)
}

/// 연산 결과가 열린 볼 불변식을 지키는지 확인하고, 어긋나면 복구한다.
///
/// 입력이 유한하고 닫힌 볼 안에 있었는데도 위반이 나오면 가드 결함이다.
/// 디버그 빌드에서는 panic, 릴리스 빌드에서는 로그를 남기고 비유한 행을 원점으로
/// 바꾼 뒤 다시 clamp 한다.
pub(crate) fn enforce_invariant<V: VectorSpace>(
    out: V,
    c: V::Scalar,
    eps: V::Scalar,
    op: &'static str,
    inputs: &[&V],
    params: &[V::Scalar],
) -> V {
    let limit = V::Scalar::one() - eps;
    let finite = out.row_finite_mask();
    let sq = out.squared_norm();
    let violations = finite
        .iter()
        .zip(sq.iter())
        .filter(|&(&ok, &s)| !(ok && c * s < limit))
        .count();
    if violations == 0 {
        return out;
    }

    let err = BallError::StabilityInvariantViolated {
        op,
        rows: violations,
    };
    if admissible(c, inputs, params) {
        debug_assert!(false, "{err}");
        error!(%err, "repairing result after guard failure");
    } else {
        debug!(%err, "inputs outside the ball, repairing result");
    }

    let non_finite: Vec<bool> = finite.iter().map(|ok| !ok).collect();
    let mut repaired = out;
    repaired.zero_rows(&non_finite);
    clamp(&repaired, c, eps)
}

/// 모든 입력이 유한하고 닫힌 볼 (c‖x‖² ≤ 1) 안에 있는지
fn admissible<V: VectorSpace>(c: V::Scalar, inputs: &[&V], params: &[V::Scalar]) -> bool {
    params.iter().all(|p| p.is_finite())
        && inputs.iter().all(|x| {
            x.is_finite()
                && x
                    .squared_norm()
                    .iter()
                    .all(|&s| c * s <= V::Scalar::one())
        })
}
