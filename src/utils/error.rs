use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Invalid {field}: {reason}: {value}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Precondition failed: {message}")]
    PreconditionError { message: String },

    #[error("Input date is invalid: {input:?}")]
    MalformedInput { input: String },

    #[error("{field} is out of range: {value} (expected {min}..={max})")]
    OutOfRange {
        field: String,
        value: u32,
        min: u32,
        max: u32,
    },

    #[error("No zodiac found for this date: {month}-{day}")]
    NoMatch { month: u32, day: u32 },

    #[error("Configuration error in {field}: {message}")]
    ConfigError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl CalcError {
    /// True for faults caused by the values handed to a calculator, false for
    /// configuration and IO faults.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidInput { .. }
                | CalcError::PreconditionError { .. }
                | CalcError::MalformedInput { .. }
                | CalcError::OutOfRange { .. }
                | CalcError::NoMatch { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
