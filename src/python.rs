//! 파이썬 바인딩 (pyo3 + numpy)
//!
//! 호스트 텐서 런타임에서 float32 배열로 커널을 호출한다.

use ndarray::Array2;
use numpy::{IntoPyArray, PyArray1, PyArray2, PyReadonlyArray2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::config::BallConfig;
use crate::error::BallError;
use crate::manifolds::{create_manifold, KleinModel, Manifold, ManifoldType, PoincareBall};

impl From<BallError> for PyErr {
    fn from(err: BallError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[pyfunction]
fn mobius_add<'py>(
    py: Python<'py>,
    u: PyReadonlyArray2<'py, f32>,
    v: PyReadonlyArray2<'py, f32>,
    c: f32,
) -> PyResult<&'py PyArray2<f32>> {
    let out = PoincareBall::new().add(&u.as_array().to_owned(), &v.as_array().to_owned(), c)?;
    Ok(out.into_pyarray(py))
}

#[pyfunction]
fn mobius_scalar<'py>(
    py: Python<'py>,
    u: PyReadonlyArray2<'py, f32>,
    c: f32,
    r: f32,
) -> PyResult<&'py PyArray2<f32>> {
    let out = PoincareBall::new().scalar(&u.as_array().to_owned(), c, r)?;
    Ok(out.into_pyarray(py))
}

/// 포인카레 볼 레이어 순전파
#[pyfunction]
fn poincare_ball_layer<'py>(
    py: Python<'py>,
    u: PyReadonlyArray2<'py, f32>,
    v: PyReadonlyArray2<'py, f32>,
    c: f32,
    t: f32,
) -> PyResult<&'py PyArray2<f32>> {
    let out = PoincareBall::new().forward(&u.as_array().to_owned(), &v.as_array().to_owned(), c, t)?;
    Ok(out.into_pyarray(py))
}

/// 클라인 모델 레이어 순전파
#[pyfunction]
fn klein_layer<'py>(
    py: Python<'py>,
    u: PyReadonlyArray2<'py, f32>,
    v: PyReadonlyArray2<'py, f32>,
    c: f32,
    t: f32,
) -> PyResult<&'py PyArray2<f32>> {
    let out = KleinModel::new().klein_forward(&u.as_array().to_owned(), &v.as_array().to_owned(), c, t)?;
    Ok(out.into_pyarray(py))
}

#[pyfunction]
fn project<'py>(py: Python<'py>, x: PyReadonlyArray2<'py, f32>, c: f32) -> PyResult<&'py PyArray2<f32>> {
    let out = PoincareBall::new().project(&x.as_array().to_owned(), c)?;
    Ok(out.into_pyarray(py))
}

/// 행별 거리. model 은 "poincare" 또는 "klein".
#[pyfunction]
#[pyo3(signature = (u, v, c, model = "poincare"))]
fn dist<'py>(
    py: Python<'py>,
    u: PyReadonlyArray2<'py, f32>,
    v: PyReadonlyArray2<'py, f32>,
    c: f32,
    model: &str,
) -> PyResult<&'py PyArray1<f32>> {
    let manifold_type = match model {
        "poincare" => ManifoldType::Poincare,
        "klein" => ManifoldType::Klein,
        other => return Err(PyValueError::new_err(format!("unknown model: {other}"))),
    };
    let manifold = create_manifold::<Array2<f32>>(manifold_type, BallConfig::default())?;
    let out = manifold.dist(&u.as_array().to_owned(), &v.as_array().to_owned(), c)?;
    Ok(out.into_pyarray(py))
}

#[pymodule]
fn gyroball(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(mobius_add, m)?)?;
    m.add_function(wrap_pyfunction!(mobius_scalar, m)?)?;
    m.add_function(wrap_pyfunction!(poincare_ball_layer, m)?)?;
    m.add_function(wrap_pyfunction!(klein_layer, m)?)?;
    m.add_function(wrap_pyfunction!(project, m)?)?;
    m.add_function(wrap_pyfunction!(dist, m)?)?;
    Ok(())
}
