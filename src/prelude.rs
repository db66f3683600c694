//! numopt prelude.
//!
//! This module contains the most used types, traits, functions, and macros
//! that you can import easily as a group.
//!
//! ```
//! use numopt::prelude::*;
//!
//! let f = |x: &Point| (x[0] - 3.0).powi(2) + x[1].powi(2);
//! let result = gradient_descent(f, point![0.0, 1.0], 0.1).unwrap();
//! assert!(result.converged());
//! assert!((result.xmin[0] - 3.0).abs() < 1e-3);
//! ```

#[doc(no_inline)]
pub use crate::error::{InversionError, MinimizerError};

#[doc(no_inline)]
pub use crate::linalg::{inverse, p_norm};

#[doc(no_inline)]
pub use crate::minimize::{
    GradientDescent, Minimizer, MinimizerConfig, MinimizerConfigBuilder, MinimizerResult,
    MultiDimGradFn, MultiDimHessFn, NewtonRaphson, NumDiff, NumDiffFn, ObjFn, ObjGradFn,
    ObjHessFn, Status, gradient_descent, gradient_descent_with_config, newton_raphson,
    newton_raphson_with_config, numerical_gradient, numerical_hessian,
};

#[doc(no_inline)]
pub use crate::point;
#[doc(no_inline)]
pub use crate::point::Point;
