use thiserror::Error;

#[derive(Error, Debug)]
pub enum LadderError {
    #[error("fieldCount cannot be less than 1 (got {value})")]
    InvalidArity { value: i64 },

    #[error("Invalid ladder range: --from {from} must lie between 1 and {to}")]
    InvalidRange { from: i64, to: i64 },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl LadderError {
    /// Process exit code for the driver.
    pub fn exit_code(&self) -> i32 {
        match self {
            LadderError::InvalidArity { .. }
            | LadderError::InvalidRange { .. }
            | LadderError::ConfigError { .. }
            | LadderError::TomlError(_) => 1,
            LadderError::IoError(_) => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            LadderError::InvalidArity { .. } => "Pass a field count of 1 or more",
            LadderError::InvalidRange { .. } => "Lower --from so it does not exceed the field count",
            LadderError::ConfigError { .. } | LadderError::TomlError(_) => {
                "Check the generator configuration file"
            }
            LadderError::IoError(_) => "Check that standard output is writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, LadderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_arity_message_names_field_count() {
        let err = LadderError::InvalidArity { value: 0 };
        assert!(err.to_string().starts_with("fieldCount cannot be less than 1"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_io_error_exit_code() {
        let err: LadderError = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed").into();
        assert_eq!(err.exit_code(), 3);
    }
}
