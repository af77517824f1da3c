use thiserror::Error;

/// Content-line emission errors.
///
/// All errors are synchronous and surface from the emitting operation.
/// A failed emit appends nothing to the buffer.
#[derive(Error, Debug)]
pub enum EmitError {
    #[error("unsupported value type: {0}")]
    UnsupportedValueType(&'static str),

    #[error("invalid parameter argument: {0}")]
    InvalidParameterArgument(String),
}

pub type EmitResult<T> = std::result::Result<T, EmitError>;
