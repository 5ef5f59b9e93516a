//! 클라인 모델 구현
use super::{Manifold, PoincareBall};
use crate::config::{BallConfig, Tolerances};
use crate::error::BallResult;
use crate::layers::forward_kernel;
use crate::ops::guard::clamp;
use crate::ops::{add_kernel, scalar_kernel, Curvature};
use crate::space::VectorSpace;
use ndarray::Array1;
use num::{Float, One, Zero};

/// 클라인 모델 구현체
///
/// 포인카레 볼과 같은 반지름 1/√c 의 볼을 쓰며, 측지선이 직선(현)이다.
/// 모든 연산은 포인카레 볼로 변환해 수행한 뒤 되돌린다.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct KleinModel {
    ball: PoincareBall,
}

impl KleinModel {
    /// 새로운 클라인 모델 인스턴스 생성
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: BallConfig) -> BallResult<Self> {
        Ok(Self {
            ball: PoincareBall::with_config(config)?,
        })
    }

    /// 클라인 → 포인카레 변환: k / (1 + √(1 − c‖k‖²))
    pub fn klein_to_poincare<V: VectorSpace>(&self, x: &V, c: V::Scalar) -> BallResult<V> {
        let (curvature, _) = self.ball.resolve(c)?;
        Ok(to_poincare(x, curvature))
    }

    /// 포인카레 → 클라인 변환: 2p / (1 + c‖p‖²)
    ///
    /// 결과는 포인카레 볼과 같은 여유값 ε 으로 clamp 된다. 기본 ε = 1e-5 에서
    /// √c‖p‖ 가 약 0.9968 을 넘는 점은 클라인 경계 쪽으로 압축되어 잘리므로,
    /// 그 구간에서는 `klein_to_poincare` 와의 왕복이 항등이 아니다 (방향은 유지).
    pub fn poincare_to_klein<V: VectorSpace>(&self, x: &V, c: V::Scalar) -> BallResult<V> {
        let (curvature, tol) = self.ball.resolve(c)?;
        Ok(to_klein(x, curvature, &tol))
    }

    /// 클라인 모델 순전파: 포인카레 볼에서 보간한 뒤 클라인 좌표로 되돌림
    pub fn klein_forward<V: VectorSpace>(
        &self,
        u: &V,
        v: &V,
        c: V::Scalar,
        t: V::Scalar,
    ) -> BallResult<V> {
        u.ensure_same_dims(v)?;
        let (curvature, tol) = self.ball.resolve(c)?;
        let poincare_u = to_poincare(u, curvature);
        let poincare_v = to_poincare(v, curvature);
        let result = forward_kernel(&poincare_u, &poincare_v, curvature, t, &tol)?;
        let out = to_klein(&result, curvature, &tol);
        Ok(self
            .ball
            .finish(out, curvature, &tol, "klein_forward", &[u, v], &[t]))
    }
}

fn to_poincare<V: VectorSpace>(x: &V, curvature: Curvature<V::Scalar>) -> V {
    let c = curvature.value();
    let one = V::Scalar::one();
    let factors = x
        .squared_norm()
        .mapv(|s| one / (one + (one - c * s).max(V::Scalar::zero()).sqrt()));
    x.scale_rows(&factors)
}

/// 클라인 좌표도 같은 볼 경계 여유값으로 제한한다.
///
/// √c‖k‖ = 2a/(1 + a²) (a = √c‖p‖) 이므로 a ≳ 1 − √ε 인 점이 잘린다.
fn to_klein<V: VectorSpace>(
    x: &V,
    curvature: Curvature<V::Scalar>,
    tol: &Tolerances<V::Scalar>,
) -> V {
    let c = curvature.value();
    let one = V::Scalar::one();
    let two = one + one;
    let factors = x.squared_norm().mapv(|s| two / (one + c * s));
    let klein = x.scale_rows(&factors);
    match curvature {
        Curvature::Hyperbolic { c, .. } => clamp(&klein, c, tol.boundary_eps),
        Curvature::Euclidean => klein,
    }
}

impl<V: VectorSpace> Manifold<V> for KleinModel {
    fn add(&self, u: &V, v: &V, c: V::Scalar) -> BallResult<V> {
        u.ensure_same_dims(v)?;
        let (curvature, tol) = self.ball.resolve(c)?;
        let sum = add_kernel(&to_poincare(u, curvature), &to_poincare(v, curvature), curvature, &tol)?;
        let out = to_klein(&sum, curvature, &tol);
        Ok(self.ball.finish(out, curvature, &tol, "klein_add", &[u, v], &[]))
    }

    fn scalar(&self, u: &V, c: V::Scalar, r: V::Scalar) -> BallResult<V> {
        let (curvature, tol) = self.ball.resolve(c)?;
        let scaled = scalar_kernel(&to_poincare(u, curvature), curvature, r, &tol);
        let out = to_klein(&scaled, curvature, &tol);
        Ok(self.ball.finish(out, curvature, &tol, "klein_scalar", &[u], &[r]))
    }

    fn geodesic(&self, u: &V, v: &V, c: V::Scalar, t: V::Scalar) -> BallResult<V> {
        self.klein_forward(u, v, c, t)
    }

    fn dist(&self, u: &V, v: &V, c: V::Scalar) -> BallResult<Array1<V::Scalar>> {
        // 클라인 모델을 포인카레 모델로 변환해 거리 계산
        u.ensure_same_dims(v)?;
        let poincare_u = self.klein_to_poincare(u, c)?;
        let poincare_v = self.klein_to_poincare(v, c)?;
        self.ball.dist(&poincare_u, &poincare_v, c)
    }

    fn exp_map(&self, v: &V, c: V::Scalar) -> BallResult<V> {
        let poincare = self.ball.exp_map(v, c)?;
        self.poincare_to_klein(&poincare, c)
    }

    fn log_map(&self, x: &V, c: V::Scalar) -> BallResult<V> {
        let poincare = self.klein_to_poincare(x, c)?;
        self.ball.log_map(&poincare, c)
    }
}
