use crate::linalg::p_norm;
use ndarray::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Deref, Index};

/// A position in the domain of an objective function.
///
/// A `Point` is never modified by the optimizers; every perturbation or
/// update produces a new `Point` with the same dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point(Array1<f64>);

impl Point {
    pub fn new(values: Array1<f64>) -> Self {
        Point(values)
    }

    pub fn zeros(n: usize) -> Self {
        Point(Array1::zeros(n))
    }

    /// Number of coordinates
    pub fn dim(&self) -> usize {
        self.0.len()
    }

    /// Copy of this point with coordinate `i` replaced by `value`
    ///
    /// # Panics
    /// If `i` is out of bounds.
    pub fn with(&self, i: usize, value: f64) -> Self {
        let mut values = self.0.clone();
        values[i] = value;
        Point(values)
    }

    /// Copy of this point with coordinates `i` and `j` replaced
    pub fn with_pair(&self, i: usize, vi: f64, j: usize, vj: f64) -> Self {
        let mut values = self.0.clone();
        values[i] = vi;
        values[j] = vj;
        Point(values)
    }

    /// `self - scale * direction`
    pub fn step(&self, direction: &ArrayView1<f64>, scale: f64) -> Self {
        Point(&self.0 - &(direction * scale))
    }

    pub fn norm(&self, p: f64) -> f64 {
        p_norm(&self.0.view(), p)
    }

    pub fn inner(&self) -> &Array1<f64> {
        &self.0
    }

    pub fn into_inner(self) -> Array1<f64> {
        self.0
    }
}

impl Deref for Point {
    type Target = Array1<f64>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Index<usize> for Point {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.0[i]
    }
}

impl From<Array1<f64>> for Point {
    fn from(values: Array1<f64>) -> Self {
        Point(values)
    }
}

impl From<Vec<f64>> for Point {
    fn from(values: Vec<f64>) -> Self {
        Point(Array1::from_vec(values))
    }
}

impl From<&[f64]> for Point {
    fn from(values: &[f64]) -> Self {
        Point(Array1::from_vec(values.to_vec()))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, ")")
    }
}
