use crate::minimize::{MinimizerError, ObjFn};
use crate::point::Point;
use ndarray::prelude::*;
use serde::{Deserialize, Serialize};

/// Default finite-difference perturbation step
pub const DEFAULT_STEP: f64 = 1e-5;

/// Central-difference differentiation with a fixed perturbation step `h`.
///
/// Both derivatives are second-order accurate in `h` for smooth objectives.
/// Rounding error grows like `eps * |f| / h` for the gradient and
/// `eps * |f| / h^2` for the hessian, so `h` should not be made much smaller
/// than the default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumDiff {
    step: f64,
}

impl Default for NumDiff {
    fn default() -> Self {
        NumDiff { step: DEFAULT_STEP }
    }
}

impl NumDiff {
    pub fn new(step: f64) -> Result<Self, MinimizerError> {
        if !(step.is_finite() && step > 0.0) {
            return Err(MinimizerError::InvalidStepSize);
        }
        Ok(NumDiff { step })
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Approximate the gradient of `f` at `x`.
    ///
    /// `g[i] = (f(x + h e_i) - f(x - h e_i)) / 2h`, so `f` is evaluated
    /// exactly `2n` times.
    pub fn gradient<F>(&self, f: &F, x: &Point) -> Array1<f64>
    where
        F: ObjFn + ?Sized,
    {
        let h = self.step;
        Array1::from_shape_fn(x.dim(), |i| {
            let f_plus = f.call(&x.with(i, x[i] + h));
            let f_minus = f.call(&x.with(i, x[i] - h));
            (f_plus - f_minus) / (2.0 * h)
        })
    }

    /// Approximate the hessian of `f` at `x`.
    ///
    /// Diagonal entries use the central second difference with one shared
    /// evaluation of `f(x)`, off-diagonal entries the mixed central
    /// difference. Only the upper triangle is evaluated and then mirrored,
    /// giving `1 + 2n + 2n(n - 1)` evaluations of `f`.
    pub fn hessian<F>(&self, f: &F, x: &Point) -> Array2<f64>
    where
        F: ObjFn + ?Sized,
    {
        let n = x.dim();
        let h = self.step;
        let h2 = h * h;
        let fx = f.call(x);
        let mut hess = Array2::zeros((n, n));

        for i in 0..n {
            let xi = x[i];
            let f_plus = f.call(&x.with(i, xi + h));
            let f_minus = f.call(&x.with(i, xi - h));
            hess[[i, i]] = (f_plus - 2.0 * fx + f_minus) / h2;

            for j in (i + 1)..n {
                let xj = x[j];
                let f_pp = f.call(&x.with_pair(i, xi + h, j, xj + h));
                let f_pm = f.call(&x.with_pair(i, xi + h, j, xj - h));
                let f_mp = f.call(&x.with_pair(i, xi - h, j, xj + h));
                let f_mm = f.call(&x.with_pair(i, xi - h, j, xj - h));
                let value = (f_pp - f_pm - f_mp + f_mm) / (4.0 * h2);
                hess[[i, j]] = value;
                hess[[j, i]] = value;
            }
        }

        log::trace!("hessian at {}: {:?}", x, hess);
        hess
    }
}

/// Central-difference gradient of `f` at `x` using [`DEFAULT_STEP`]
pub fn numerical_gradient<F>(f: &F, x: &Point) -> Array1<f64>
where
    F: ObjFn + ?Sized,
{
    NumDiff::default().gradient(f, x)
}

/// Central-difference hessian of `f` at `x` using [`DEFAULT_STEP`]
pub fn numerical_hessian<F>(f: &F, x: &Point) -> Array2<f64>
where
    F: ObjFn + ?Sized,
{
    NumDiff::default().hessian(f, x)
}
