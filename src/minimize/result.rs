use crate::point::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How an iterative minimizer stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Gradient norm fell below the convergence threshold
    Converged,
    /// The iteration cap was reached first
    Exhausted,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Status::Converged => write!(f, "converged"),
            Status::Exhausted => write!(f, "exhausted"),
        }
    }
}

/// Result of a gradient descent or Newton-Raphson run.
///
/// `xmin` is the last point whose gradient was evaluated. On convergence
/// that is the point *before* the final update: the step computed from a
/// gradient already below the threshold is never taken.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinimizerResult {
    pub xmin: Point,
    pub fmin: f64,
    pub gradient_norm: f64,
    pub iters: usize,
    pub status: Status,
}

impl MinimizerResult {
    pub fn converged(&self) -> bool {
        self.status == Status::Converged
    }

    /// `(final point, iteration count)`
    pub fn into_parts(self) -> (Point, usize) {
        (self.xmin, self.iters)
    }
}

impl fmt::Display for MinimizerResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MinimizerResult( xmin: {}, fmin: {}, |grad|: {:e}, iters: {}, status: {})",
            self.xmin, self.fmin, self.gradient_norm, self.iters, self.status
        )
    }
}
