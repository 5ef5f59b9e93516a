//! 수치 안정성을 위한 상수값 정의
//!
//! 모든 값은 f64 로 정의하고, 연산 시 작업 스칼라 타입으로 변환한다.

/// 하이퍼볼릭 기하학 연산의 수치 안정성을 위한 상수들
pub struct Constants;

impl Constants {
    /// 경계 여유값 ε. 모든 출력은 c‖x‖² < 1 − ε 를 만족한다.
    ///
    /// f32 에서도 1 − ε 가 1 과 구별되는 크기 (f32 ulp ≈ 6e-8).
    pub const BOUNDARY_EPSILON: f64 = 1e-5;

    /// √c‖x‖ 가 이 값 이하이면 스칼라 곱을 r·x 로 대체 (0/0 방지)
    pub const NORM_EPSILON: f64 = 1e-7;

    /// 뫼비우스 덧셈 분모의 최소 크기 (부호 유지)
    pub const MIN_DENOMINATOR: f64 = 1e-8;

    /// tanh 함수의 최대 입력값 제한
    pub const MAX_TANH_ARG: f64 = 15.0;

    /// 이 값보다 작은 곡률은 유클리드 극한으로 취급
    pub const EUCLIDEAN_CURVATURE_THRESHOLD: f64 = 1e-10;

    /// 자이로 역원을 만드는 스칼라 (−1 ⊗ x = ⊖x)
    pub const GYRO_INVERSE: f64 = -1.0;
}
