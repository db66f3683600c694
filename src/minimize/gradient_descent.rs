use crate::minimize::{
    Minimizer, MinimizerConfig, MinimizerError, MinimizerResult, NumDiffFn, ObjGradFn, Status,
    check_start, gradient_norm,
};
use crate::point::Point;
use std::fmt;

/// Fixed-step steepest descent: `x <- x - lambda * grad f(x)`.
///
/// There is no line search and no step adaptation; a learning rate that is
/// too large diverges. Configure `max_iters` to bound such runs.
#[derive(Clone)]
pub struct GradientDescent {
    f: Box<dyn ObjGradFn>,
    config: MinimizerConfig,
}

impl GradientDescent {
    pub fn new<F>(f: F) -> Self
    where
        F: ObjGradFn + Clone + 'static,
    {
        GradientDescent {
            f: Box::new(f),
            config: MinimizerConfig::default(),
        }
    }

    pub fn new_boxed(f: Box<dyn ObjGradFn>) -> Self {
        GradientDescent {
            f,
            config: MinimizerConfig::default(),
        }
    }

    pub fn with_config(mut self, config: MinimizerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &MinimizerConfig {
        &self.config
    }

    fn finish(&self, xmin: Point, gradient_norm: f64, iters: usize, status: Status) -> MinimizerResult {
        let fmin = self.f.call(&xmin);
        MinimizerResult {
            xmin,
            fmin,
            gradient_norm,
            iters,
            status,
        }
    }
}

impl Minimizer for GradientDescent {
    fn minimize(&self, x0: Point, lambda: f64) -> Result<MinimizerResult, MinimizerError> {
        check_start(&x0, lambda, &self.config)?;
        let n = x0.dim();
        let tol = self.config.convergence_tol;

        let mut x = x0;
        let mut iters = 1;
        loop {
            let grad = self.f.grad(&x);
            let grad_norm = gradient_norm(&grad, n)?;
            log::debug!("gradient descent iter {}: |grad| = {:e}", iters, grad_norm);

            if grad_norm < tol {
                log::info!("gradient descent converged at iteration {}", iters);
                return Ok(self.finish(x, grad_norm, iters, Status::Converged));
            }

            if self.config.max_iters.is_some_and(|max| iters >= max) {
                log::warn!(
                    "gradient descent reached {} iterations with |grad| = {:e}",
                    iters,
                    grad_norm
                );
                return Ok(self.finish(x, grad_norm, iters, Status::Exhausted));
            }

            x = x.step(&grad.view(), lambda);
            iters += 1;
        }
    }
}

impl fmt::Debug for GradientDescent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GradientDescent( config: {:?} )", self.config)
    }
}

/// Gradient descent on `f` with central-difference gradients and default settings
///
/// ```
/// use numopt::{gradient_descent, point, Point};
///
/// let f = |x: &Point| x[0] * x[0] + x[1] * x[1];
/// let (xmin, iters) = gradient_descent(f, point![-10.0, -10.0], 0.01)
///     .unwrap()
///     .into_parts();
/// assert!(xmin.norm(2.0) < 1e-3);
/// assert!(iters < 2000);
/// ```
pub fn gradient_descent<F>(f: F, x0: Point, lambda: f64) -> Result<MinimizerResult, MinimizerError>
where
    F: Fn(&Point) -> f64 + Clone + 'static,
{
    gradient_descent_with_config(f, x0, lambda, MinimizerConfig::default())
}

/// Gradient descent on `f` with central-difference gradients using `config`
pub fn gradient_descent_with_config<F>(
    f: F,
    x0: Point,
    lambda: f64,
    config: MinimizerConfig,
) -> Result<MinimizerResult, MinimizerError>
where
    F: Fn(&Point) -> f64 + Clone + 'static,
{
    let obj = NumDiffFn::with_step(f, config.step)?;
    GradientDescent::new(obj).with_config(config).minimize(x0, lambda)
}
