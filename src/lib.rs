//! Derivative-free unconstrained minimization.
//!
//! Gradients and hessians are approximated with central finite differences
//! and fed to two fixed-step iterative minimizers: gradient descent and
//! Newton-Raphson.
//!
//! ```
//! use numopt::prelude::*;
//!
//! let f = |x: &Point| (x[0] - 1.0).powi(2) + (x[1] + 2.0).powi(2);
//! let result = newton_raphson(f, point![0.5, 0.5], 1.0).unwrap();
//! assert!(result.converged());
//! assert!((result.xmin[0] - 1.0).abs() < 1e-3);
//! assert!((result.xmin[1] + 2.0).abs() < 1e-3);
//! ```
pub mod error;
pub mod linalg;
pub mod minimize;
pub mod point;
pub mod prelude;
#[cfg(test)]
pub(crate) mod util;

pub use crate::error::{InversionError, MinimizerError};
pub use crate::minimize::{gradient_descent, newton_raphson, numerical_gradient, numerical_hessian};
pub use crate::point::Point;

/// Create a **[`Point`]** from a list of coordinates.
///
/// ```
/// use numopt::point;
/// let x = point![1.0, -2.0, 0.5];
///
/// assert_eq!(x.dim(), 3);
/// assert_eq!(x[1], -2.0);
/// ```
#[macro_export]
macro_rules! point {
    ($($x:expr),* $(,)*) => {{
        $crate::point::Point::from(vec![$($x),*])
    }};
}
