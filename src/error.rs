use std::fmt;
use std::io;

/// Failures of the driver around a run, never of the run itself.
#[derive(Debug)]
pub enum ExecError {
    Io(io::Error),
    Json(serde_json::Error),
    UnknownOperation(String),
}

impl fmt::Display for ExecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecError::Io(err) => write!(f, "I/O error: {}", err),
            ExecError::Json(err) => write!(f, "Failed to encode report: {}", err),
            ExecError::UnknownOperation(name) => write!(
                f,
                "Unknown operation '{}': expected one of add, sub, and, or, xor, eq",
                name
            ),
        }
    }
}

impl std::error::Error for ExecError {}

impl From<io::Error> for ExecError {
    fn from(err: io::Error) -> Self {
        ExecError::Io(err)
    }
}

impl From<serde_json::Error> for ExecError {
    fn from(err: serde_json::Error) -> Self {
        ExecError::Json(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_unknown_operation() {
        let err = ExecError::UnknownOperation("mul".to_string());
        let msg = format!("{}", err);
        assert_eq!(
            msg,
            "Unknown operation 'mul': expected one of add, sub, and, or, xor, eq"
        );
    }

    #[test]
    fn test_display_io_error() {
        let io_err = io::Error::other("oh no");
        let err = ExecError::from(io_err);
        let msg = format!("{}", err);
        assert!(msg.contains("I/O error: oh no"));
    }
}
