//! `ndarray::Array2` 기반 CPU 구현

use std::fmt::Debug;

use ndarray::{Array1, Array2, ArrayView1, ArrayViewMut1, Axis, Zip};
use num::Float;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::VectorSpace;
use crate::error::BallResult;
use crate::utils::numeric::{row_dot, row_squared_norm};

impl<S> VectorSpace for Array2<S>
where
    S: Float + Send + Sync + Debug,
{
    type Scalar = S;

    fn dims(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }

    fn origin(batch: usize, dim: usize) -> Self {
        Array2::zeros((batch, dim))
    }

    fn add(&self, other: &Self) -> BallResult<Self> {
        self.ensure_same_dims(other)?;
        Ok(Zip::from(self).and(other).map_collect(|&x, &y| x + y))
    }

    fn sub(&self, other: &Self) -> BallResult<Self> {
        self.ensure_same_dims(other)?;
        Ok(Zip::from(self).and(other).map_collect(|&x, &y| x - y))
    }

    fn scale(&self, k: S) -> Self {
        self.mapv(|x| x * k)
    }

    fn squared_norm(&self) -> Array1<S> {
        let rows = Zip::from(self.rows());
        #[cfg(feature = "parallel")]
        let out = rows.par_map_collect(|row| row_squared_norm(row));
        #[cfg(not(feature = "parallel"))]
        let out = rows.map_collect(|row| row_squared_norm(row));
        out
    }

    fn dot(&self, other: &Self) -> BallResult<Array1<S>> {
        self.ensure_same_dims(other)?;
        let rows = Zip::from(self.rows()).and(other.rows());
        #[cfg(feature = "parallel")]
        let out = rows.par_map_collect(|a, b| row_dot(a, b));
        #[cfg(not(feature = "parallel"))]
        let out = rows.map_collect(|a, b| row_dot(a, b));
        Ok(out)
    }

    fn scale_rows(&self, factors: &Array1<S>) -> Self {
        debug_assert_eq!(factors.len(), self.nrows());
        let mut out = self.clone();
        let rows = Zip::from(out.rows_mut()).and(factors);
        #[cfg(feature = "parallel")]
        rows.par_for_each(|mut row, &f| row.mapv_inplace(|v| v * f));
        #[cfg(not(feature = "parallel"))]
        rows.for_each(|mut row, &f| row.mapv_inplace(|v| v * f));
        out
    }

    fn combine_rows(&self, a: &Array1<S>, other: &Self, b: &Array1<S>) -> BallResult<Self> {
        self.ensure_same_dims(other)?;
        debug_assert_eq!(a.len(), self.nrows());
        debug_assert_eq!(b.len(), self.nrows());

        let mut out = Array2::zeros(self.raw_dim());

        #[cfg(feature = "parallel")]
        out.axis_iter_mut(Axis(0))
            .into_par_iter()
            .enumerate()
            .for_each(|(i, row)| combine_row(row, a[i], self.row(i), b[i], other.row(i)));

        #[cfg(not(feature = "parallel"))]
        for (i, row) in out.axis_iter_mut(Axis(0)).enumerate() {
            combine_row(row, a[i], self.row(i), b[i], other.row(i));
        }

        Ok(out)
    }

    fn row_max_abs(&self) -> Array1<S> {
        self.outer_iter()
            .map(|row| row.iter().fold(S::zero(), |m, v| m.max(v.abs())))
            .collect()
    }

    fn row_finite_mask(&self) -> Vec<bool> {
        self.outer_iter()
            .map(|row| row.iter().all(|v| v.is_finite()))
            .collect()
    }

    fn zero_rows(&mut self, mask: &[bool]) {
        for (mut row, &zero) in self.outer_iter_mut().zip(mask) {
            if zero {
                row.fill(S::zero());
            }
        }
    }
}

#[inline]
fn combine_row<S: Float>(
    out: ArrayViewMut1<'_, S>,
    a: S,
    x: ArrayView1<'_, S>,
    b: S,
    y: ArrayView1<'_, S>,
) {
    Zip::from(out)
        .and(x)
        .and(y)
        .for_each(|o, &x, &y| *o = a * x + b * y);
}
