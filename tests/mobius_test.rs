use approx::assert_abs_diff_eq;
use gyroball::prelude::*;
use gyroball::{BallConfig, Constants};
use ndarray::{arr2, Array2};

fn assert_rows_close(actual: &Array2<f64>, expected: &Array2<f64>, tol: f64) {
    assert_eq!(actual.dim(), expected.dim());
    for (a, e) in actual.iter().zip(expected.iter()) {
        assert_abs_diff_eq!(*a, *e, epsilon = tol);
    }
}

fn sample_points() -> Array2<f64> {
    arr2(&[
        [0.1, -0.2, 0.05],
        [0.45, 0.3, -0.6],
        [0.0, 0.0, 0.0],
        [-0.7, 0.1, 0.2],
    ])
}

#[test]
fn origin_is_two_sided_identity() {
    let x = sample_points();
    let origin = Array2::<f64>::origin(4, 3);
    for c in [0.5, 1.0, 1.5] {
        assert_rows_close(&mobius_add(&x, &origin, c).unwrap(), &x, 1e-12);
        assert_rows_close(&mobius_add(&origin, &x, c).unwrap(), &x, 1e-12);
    }
}

#[test]
fn gyro_inverse_cancels() {
    let x = sample_points();
    let origin = Array2::<f64>::origin(4, 3);
    for c in [0.5, 1.0, 1.5] {
        let minus_x = mobius_scalar(&x, c, -1.0).unwrap();
        assert_rows_close(&minus_x, &x.scale(-1.0), 1e-12);
        assert_rows_close(&mobius_add(&x, &minus_x, c).unwrap(), &origin, 1e-10);
    }
}

#[test]
fn zero_scalar_maps_to_origin() {
    let x = sample_points();
    let out = mobius_scalar(&x, 1.0, 0.0).unwrap();
    assert_rows_close(&out, &Array2::<f64>::origin(4, 3), 1e-15);
}

#[test]
fn scalar_doubles_hyperbolic_distance_from_origin() {
    let ball = PoincareBall::new();
    let origin = Array2::<f64>::origin(1, 2);
    let x = arr2(&[[0.2, 0.1]]);
    let doubled = ball.scalar(&x, 1.0, 2.0).unwrap();
    let d1 = ball.dist(&origin, &x, 1.0).unwrap()[0];
    let d2 = ball.dist(&origin, &doubled, 1.0).unwrap()[0];
    assert_abs_diff_eq!(d2, 2.0 * d1, epsilon = 1e-10);
}

#[test]
fn addition_is_not_commutative() {
    let x = arr2(&[[0.5_f64, 0.0]]);
    let y = arr2(&[[0.0_f64, 0.5]]);
    let xy = mobius_add(&x, &y, 1.0).unwrap();
    let yx = mobius_add(&y, &x, 1.0).unwrap();
    assert!((xy[[0, 0]] - yx[[0, 0]]).abs() > 1e-3);
    // 노름은 같음 (자이레이션은 회전)
    assert_abs_diff_eq!(
        xy.squared_norm()[0],
        yx.squared_norm()[0],
        epsilon = 1e-12
    );
}

#[test]
fn boundary_points_stay_inside() {
    let c: f64 = 2.0;
    let radius = 1.0 / c.sqrt();
    let x = arr2(&[[radius * 0.99999, 0.0], [0.0, radius]]);
    let y = arr2(&[[radius * 0.99999, 0.0], [0.0, radius * 0.5]]);
    let sum = mobius_add(&x, &y, c).unwrap();
    for &s in sum.squared_norm().iter() {
        assert!(c * s < 1.0 - Constants::BOUNDARY_EPSILON);
    }
    let scaled = mobius_scalar(&x, c, 7.0).unwrap();
    for &s in scaled.squared_norm().iter() {
        assert!(c * s < 1.0 - Constants::BOUNDARY_EPSILON);
    }
}

#[test]
fn f32_kernels_agree_with_f64() {
    let x64 = sample_points();
    let y64 = arr2(&[
        [0.3, 0.3, 0.3],
        [-0.1, 0.2, 0.0],
        [0.5, -0.5, 0.1],
        [0.0, 0.0, 0.0],
    ]);
    let x32 = x64.mapv(|v| v as f32);
    let y32 = y64.mapv(|v| v as f32);
    let sum64 = mobius_add(&x64, &y64, 1.0).unwrap();
    let sum32 = mobius_add(&x32, &y32, 1.0).unwrap();
    for (a, b) in sum64.iter().zip(sum32.iter()) {
        assert_abs_diff_eq!(*a, *b as f64, epsilon = 1e-5);
    }
}

#[test]
fn invalid_curvature_is_reported() {
    let x = sample_points();
    assert!(matches!(
        mobius_scalar(&x, -1.0, 2.0),
        Err(BallError::InvalidCurvature(_))
    ));
    assert!(matches!(
        mobius_add(&x, &x, f64::NAN),
        Err(BallError::InvalidCurvature(_))
    ));
    assert_eq!(
        mobius_scalar(&x, 0.0, 2.0),
        Err(BallError::InvalidCurvature(0.0))
    );
}

#[test]
fn euclidean_limit_mode_reduces_to_vector_arithmetic() {
    let ball = PoincareBall::with_config(BallConfig::euclidean_limit()).unwrap();
    let x = arr2(&[[3.0, -4.0]]);
    let y = arr2(&[[10.0, 2.0]]);
    assert_eq!(ball.add(&x, &y, 0.0).unwrap(), arr2(&[[13.0, -2.0]]));
    assert_eq!(ball.scalar(&x, 0.0, -2.0).unwrap(), arr2(&[[-6.0, 8.0]]));
}

#[test]
fn add_shape_mismatch() {
    let x = Array2::<f64>::zeros((2, 2));
    let y = Array2::<f64>::zeros((2, 3));
    assert_eq!(
        mobius_add(&x, &y, 1.0),
        Err(BallError::ShapeMismatch {
            left: (2, 2),
            right: (2, 3)
        })
    );
}

#[test]
fn exp_log_maps_round_trip_through_free_functions() {
    let v = arr2(&[[0.4, -1.2], [0.0, 0.0]]);
    let x = exp_map(&v, 1.0).unwrap();
    for &s in x.squared_norm().iter() {
        assert!(s < 1.0);
    }
    assert_rows_close(&log_map(&x, 1.0).unwrap(), &v, 1e-10);
}
