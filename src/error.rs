use std::fmt;

/// Error types for matrix inversion
#[derive(Debug, Clone, PartialEq)]
pub enum InversionError {
    NotSquare(String),
    Singular(String),
}

impl fmt::Display for InversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InversionError::NotSquare(msg) => write!(f, "Matrix is not square: {}", msg),
            InversionError::Singular(msg) => write!(f, "Matrix is singular: {}", msg),
        }
    }
}

impl std::error::Error for InversionError {}

/// Error types for optimizers
#[derive(Debug, Clone, PartialEq)]
pub enum MinimizerError {
    GradientEvaluationError,
    InvalidDimension,
    InvalidParameters(String),
    InvalidStepSize,
    InvalidTolerance,
    SingularHessian(InversionError),
}

impl fmt::Display for MinimizerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MinimizerError::GradientEvaluationError => {
                write!(f, "Gradient evaluation returned a non-finite value")
            }
            MinimizerError::InvalidDimension => write!(f, "Invalid dimension or empty vector"),
            MinimizerError::InvalidParameters(msg) => write!(f, "Invalid parameters: {}", msg),
            MinimizerError::InvalidStepSize => {
                write!(f, "Step size must be positive and finite")
            }
            MinimizerError::InvalidTolerance => write!(f, "Tolerance must be positive and finite"),
            MinimizerError::SingularHessian(err) => {
                write!(f, "Hessian is not invertible: {}", err)
            }
        }
    }
}

impl std::error::Error for MinimizerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MinimizerError::SingularHessian(err) => Some(err),
            _ => None,
        }
    }
}

impl From<InversionError> for MinimizerError {
    fn from(err: InversionError) -> Self {
        MinimizerError::SingularHessian(err)
    }
}

#[cfg(test)]
mod error_tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_singular_hessian_display() {
        let err = MinimizerError::from(InversionError::Singular("pivot 1".to_string()));
        assert_eq!(
            err.to_string(),
            "Hessian is not invertible: Matrix is singular: pivot 1"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_plain_variants_have_no_source() {
        assert!(MinimizerError::InvalidStepSize.source().is_none());
        assert!(MinimizerError::InvalidDimension.source().is_none());
    }
}
