use crate::linalg::inverse;
use crate::minimize::{
    Minimizer, MinimizerConfig, MinimizerError, MinimizerResult, NumDiffFn, ObjHessFn, Status,
    check_start, gradient_norm,
};
use crate::point::Point;
use std::fmt;

/// Damped Newton-Raphson: `x <- x - lambda * H(x)^-1 grad f(x)`.
///
/// The hessian is inverted explicitly every iteration, including the final
/// one whose step is discarded. A hessian that fails to invert ends the run
/// with [`MinimizerError::SingularHessian`]. When the
/// hessian is not positive definite the Newton direction can point uphill;
/// this is logged but not corrected.
#[derive(Clone)]
pub struct NewtonRaphson {
    f: Box<dyn ObjHessFn>,
    config: MinimizerConfig,
}

impl NewtonRaphson {
    pub fn new<F>(f: F) -> Self
    where
        F: ObjHessFn + Clone + 'static,
    {
        NewtonRaphson {
            f: Box::new(f),
            config: MinimizerConfig::default(),
        }
    }

    pub fn new_boxed(f: Box<dyn ObjHessFn>) -> Self {
        NewtonRaphson {
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

impl Minimizer for NewtonRaphson {
    fn minimize(&self, x0: Point, lambda: f64) -> Result<MinimizerResult, MinimizerError> {
        check_start(&x0, lambda, &self.config)?;
        let n = x0.dim();
        let tol = self.config.convergence_tol;

        let mut x = x0;
        let mut iters = 1;
        loop {
            let grad = self.f.grad(&x);
            let grad_norm = gradient_norm(&grad, n)?;
            log::debug!("newton-raphson iter {}: |grad| = {:e}", iters, grad_norm);

            // The update is built on every pass, so a singular hessian is
            // reported even at a point that already meets the tolerance
            let hess = self.f.hessian(&x);
            if hess.dim() != (n, n) {
                return Err(MinimizerError::InvalidDimension);
            }
            let hess_inv = inverse(&hess.view(), self.config.pivot_tol).map_err(|err| {
                log::warn!("newton-raphson iter {}: {}", iters, err);
                err
            })?;
            let direction = hess_inv.dot(&grad);

            if grad_norm < tol {
                log::info!("newton-raphson converged at iteration {}", iters);
                return Ok(self.finish(x, grad_norm, iters, Status::Converged));
            }

            if self.config.max_iters.is_some_and(|max| iters >= max) {
                log::warn!(
                    "newton-raphson reached {} iterations with |grad| = {:e}",
                    iters,
                    grad_norm
                );
                return Ok(self.finish(x, grad_norm, iters, Status::Exhausted));
            }

            if grad.dot(&direction) <= 0.0 {
                log::warn!(
                    "newton-raphson iter {}: hessian is not positive definite, step is not a descent direction",
                    iters
                );
            }

            x = x.step(&direction.view(), lambda);
            iters += 1;
        }
    }
}

impl fmt::Debug for NewtonRaphson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NewtonRaphson( config: {:?} )", self.config)
    }
}

/// Newton-Raphson on `f` with central-difference derivatives and default settings
pub fn newton_raphson<F>(f: F, x0: Point, lambda: f64) -> Result<MinimizerResult, MinimizerError>
where
    F: Fn(&Point) -> f64 + Clone + 'static,
{
    newton_raphson_with_config(f, x0, lambda, MinimizerConfig::default())
}

/// Newton-Raphson on `f` with central-difference derivatives using `config`
pub fn newton_raphson_with_config<F>(
    f: F,
    x0: Point,
    lambda: f64,
    config: MinimizerConfig,
) -> Result<MinimizerResult, MinimizerError>
where
    F: Fn(&Point) -> f64 + Clone + 'static,
{
    let obj = NumDiffFn::with_step(f, config.step)?;
    NewtonRaphson::new(obj).with_config(config).minimize(x0, lambda)
}
