/// Adjust process error type.
#[derive(Debug)]
pub enum AdjustError {
    /// IO error.
    IoError(crate::io::IoError),
    /// StringOnly error.
    StringOnly(String),
}
impl std::fmt::Display for AdjustError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdjustError::IoError(error) => write!(f, "IO Error:\n{}", error),
            AdjustError::StringOnly(error) => write!(f, "{}", error),
        }
    }
}
impl From<crate::io::IoError> for AdjustError {
    fn from(error: crate::io::IoError) -> Self {
        AdjustError::IoError(error)
    }
}
impl From<String> for AdjustError {
    fn from(error: String) -> Self {
        AdjustError::StringOnly(error)
    }
}

/// Result type for the `adjust` module.
pub type ProcResult<T> = std::result::Result<T, AdjustError>;

/// Create an `AdjustError::StringOnly` from a string.
pub fn err_str<T>(error_str: &str) -> ProcResult<T> {
    Err(AdjustError::StringOnly(error_str.to_string()))
}
