use crate::linalg::p_norm;
use crate::point::Point;
use ndarray::prelude::*;

pub use crate::error::MinimizerError;

pub mod config;
pub mod gradient_descent;
pub mod newton;
pub mod numdiff;
pub mod objective;
pub mod result;

pub use self::config::{MinimizerConfig, MinimizerConfigBuilder};
pub use self::gradient_descent::{GradientDescent, gradient_descent, gradient_descent_with_config};
pub use self::newton::{NewtonRaphson, newton_raphson, newton_raphson_with_config};
pub use self::numdiff::{NumDiff, numerical_gradient, numerical_hessian};
pub use self::objective::{MultiDimGradFn, MultiDimHessFn, NumDiffFn, ObjFn, ObjGradFn, ObjHessFn};
pub use self::result::{MinimizerResult, Status};

pub trait Minimizer {
    /// Minimize starting from `x0`, scaling each step by the learning rate `lambda`
    fn minimize(&self, x0: Point, lambda: f64) -> Result<MinimizerResult, MinimizerError>;
}

/// Shared argument checks for the iterative minimizers
pub(crate) fn check_start(
    x0: &Point,
    lambda: f64,
    config: &MinimizerConfig,
) -> Result<(), MinimizerError> {
    if x0.dim() == 0 {
        return Err(MinimizerError::InvalidDimension);
    }
    if !(lambda.is_finite() && lambda > 0.0) {
        return Err(MinimizerError::InvalidStepSize);
    }
    config.validate()
}

/// 2-norm of a gradient, rejecting wrong-sized or non-finite gradients
pub(crate) fn gradient_norm(grad: &Array1<f64>, n: usize) -> Result<f64, MinimizerError> {
    if grad.len() != n {
        return Err(MinimizerError::InvalidDimension);
    }
    if grad.iter().any(|g| !g.is_finite()) {
        return Err(MinimizerError::GradientEvaluationError);
    }
    Ok(p_norm(&grad.view(), 2.0))
}
