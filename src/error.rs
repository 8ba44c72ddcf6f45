use std::fmt;

/// Custom error type for IP reporting
#[derive(Debug)]
pub enum LookupError {
    /// Transport-level error (DNS, connect, TLS, timeout)
    Transport(reqwest::Error),
    /// Response body is not valid JSON
    Parse(serde_json::Error),
    /// Response body lacks an expected field, or the field has the wrong type
    Schema(&'static str),
    /// Configuration error
    Config(String),
    /// IO error
    Io(std::io::Error),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::Transport(err) => write!(f, "Transport error: {}", err),
            LookupError::Parse(err) => write!(f, "Parse error: {}", err),
            LookupError::Schema(field) => {
                write!(f, "Schema mismatch: missing or invalid field `{}`", field)
            }
            LookupError::Config(msg) => write!(f, "Configuration error: {}", msg),
            LookupError::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for LookupError {}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        LookupError::Transport(err)
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(err: serde_json::Error) -> Self {
        LookupError::Parse(err)
    }
}

impl From<std::io::Error> for LookupError {
    fn from(err: std::io::Error) -> Self {
        LookupError::Io(err)
    }
}

pub type Result<T> = std::result::Result<T, LookupError>;
