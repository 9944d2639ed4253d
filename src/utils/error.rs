use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogoError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Base64 decode error: {0}")]
    DecodeError(#[from] base64::DecodeError),

    #[error("Invalid data URI: {reason}")]
    InvalidDataUriError { reason: String },
}

impl LogoError {
    /// Process exit code for this error. Output failures are fatal.
    pub fn exit_code(&self) -> i32 {
        match self {
            LogoError::IoError(_) => 1,
            LogoError::DecodeError(_) | LogoError::InvalidDataUriError { .. } => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, LogoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_is_fatal() {
        let err: LogoError = std::io::Error::from(std::io::ErrorKind::BrokenPipe).into();
        assert!(matches!(err, LogoError::IoError(_)));
        assert_ne!(err.exit_code(), 0);
        assert!(err.to_string().starts_with("IO error:"));
    }

    #[test]
    fn test_decode_errors_use_distinct_exit_code() {
        let err = LogoError::InvalidDataUriError {
            reason: "missing prefix".to_string(),
        };
        assert_eq!(err.exit_code(), 3);
        assert_ne!(err.exit_code(), LogoError::from(std::io::Error::other("closed")).exit_code());
    }
}
