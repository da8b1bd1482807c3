use thiserror::Error;

// Unified error type for orthovec

#[derive(Error, Debug)]
pub enum VecError {
    #[error("type not supported for random construction: {0}")]
    UnsupportedType(&'static str),
    #[error("index {index} out of range for dimension {dimension}")]
    IndexOutOfRange { index: usize, dimension: usize },
    #[error("vectors must have the same dimension ({left} != {right})")]
    DimensionMismatch { left: usize, right: usize },
    #[error("cannot divide by zero")]
    DivideByZero,
    #[error("cannot normalize zero vector")]
    ZeroVectorNormalization,
    #[error("invalid sampling bounds: low must not exceed high")]
    InvalidBounds,
    #[error("input error: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse {what} from {input:?}")]
    Parse { input: String, what: &'static str },
}

impl VecError {
    pub(crate) fn check_dims(left: usize, right: usize) -> Result<(), VecError> {
        if left != right {
            return Err(VecError::DimensionMismatch { left, right });
        }
        Ok(())
    }
}
