use crate::linalg::DEFAULT_PIVOT_TOL;
use crate::minimize::{MinimizerError, numdiff::DEFAULT_STEP};
use serde::{Deserialize, Serialize};

/// Default gradient-norm stopping threshold
pub const DEFAULT_CONVERGENCE_TOL: f64 = 1e-5;

/// Settings shared by the iterative minimizers.
///
/// Every field has a default, so a partial table deserializes:
///
/// ```
/// use numopt::minimize::MinimizerConfig;
///
/// let config: MinimizerConfig = toml::from_str("max_iters = 500").unwrap();
/// assert_eq!(config.max_iters, Some(500));
/// assert_eq!(config.convergence_tol, 1e-5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinimizerConfig {
    /// Iteration stops once the gradient 2-norm falls below this value
    #[serde(default = "default_convergence_tol")]
    pub convergence_tol: f64,
    /// Finite-difference perturbation step
    #[serde(default = "default_step")]
    pub step: f64,
    /// Maximum number of iterations; `None` iterates until convergence
    #[serde(default)]
    pub max_iters: Option<usize>,
    /// Pivot magnitude below which the hessian is treated as singular
    #[serde(default = "default_pivot_tol")]
    pub pivot_tol: f64,
}

fn default_convergence_tol() -> f64 {
    DEFAULT_CONVERGENCE_TOL
}

fn default_step() -> f64 {
    DEFAULT_STEP
}

fn default_pivot_tol() -> f64 {
    DEFAULT_PIVOT_TOL
}

impl Default for MinimizerConfig {
    fn default() -> Self {
        Self {
            convergence_tol: default_convergence_tol(),
            step: default_step(),
            max_iters: None,
            pivot_tol: default_pivot_tol(),
        }
    }
}

impl MinimizerConfig {
    pub fn validate(&self) -> Result<(), MinimizerError> {
        if !(self.convergence_tol.is_finite() && self.convergence_tol > 0.0) {
            return Err(MinimizerError::InvalidTolerance);
        }
        if !(self.pivot_tol.is_finite() && self.pivot_tol >= 0.0) {
            return Err(MinimizerError::InvalidTolerance);
        }
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(MinimizerError::InvalidStepSize);
        }
        if self.max_iters == Some(0) {
            return Err(MinimizerError::InvalidParameters(
                "max_iters must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

pub struct MinimizerConfigBuilder {
    config: MinimizerConfig,
}

impl MinimizerConfigBuilder {
    pub fn new() -> Self {
        MinimizerConfigBuilder {
            config: MinimizerConfig::default(),
        }
    }

    pub fn convergence_tol(mut self, tol: f64) -> Self {
        self.config.convergence_tol = tol;
        self
    }

    pub fn step(mut self, step: f64) -> Self {
        self.config.step = step;
        self
    }

    pub fn max_iters(mut self, max_iters: usize) -> Self {
        self.config.max_iters = Some(max_iters);
        self
    }

    pub fn unbounded(mut self) -> Self {
        self.config.max_iters = None;
        self
    }

    pub fn pivot_tol(mut self, tol: f64) -> Self {
        self.config.pivot_tol = tol;
        self
    }

    pub fn build(self) -> MinimizerConfig {
        self.config
    }
}

impl Default for MinimizerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod minimize_config_tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MinimizerConfig::default();
        assert_eq!(config.convergence_tol, 1e-5);
        assert_eq!(config.step, 1e-5);
        assert_eq!(config.max_iters, None);
        assert_eq!(config.pivot_tol, 1e-12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = MinimizerConfigBuilder::new()
            .convergence_tol(1e-8)
            .step(1e-4)
            .max_iters(250)
            .pivot_tol(1e-10)
            .build();
        assert_eq!(config.convergence_tol, 1e-8);
        assert_eq!(config.step, 1e-4);
        assert_eq!(config.max_iters, Some(250));
        assert_eq!(config.pivot_tol, 1e-10);

        let config = MinimizerConfigBuilder::new().max_iters(3).unbounded().build();
        assert_eq!(config.max_iters, None);
    }

    #[test]
    fn test_validate() {
        let bad_tol = MinimizerConfigBuilder::new().convergence_tol(0.0).build();
        assert!(matches!(
            bad_tol.validate(),
            Err(MinimizerError::InvalidTolerance)
        ));

        let bad_step = MinimizerConfigBuilder::new().step(f64::INFINITY).build();
        assert!(matches!(
            bad_step.validate(),
            Err(MinimizerError::InvalidStepSize)
        ));

        let zero_iters = MinimizerConfigBuilder::new().max_iters(0).build();
        assert!(matches!(
            zero_iters.validate(),
            Err(MinimizerError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let config: MinimizerConfig = toml::from_str("convergence_tol = 1e-7\nmax_iters = 42\n")
            .expect("valid config");
        assert_eq!(config.convergence_tol, 1e-7);
        assert_eq!(config.max_iters, Some(42));
        assert_eq!(config.step, DEFAULT_STEP);
        assert_eq!(config.pivot_tol, DEFAULT_PIVOT_TOL);

        let empty: MinimizerConfig = toml::from_str("").expect("empty config");
        assert_eq!(empty, MinimizerConfig::default());
    }
}
