/// Raycast process error type.
#[derive(Debug)]
pub enum RaycastError {
    /// IO error.
    IoError(crate::io::IoError),
    /// StringOnly error.
    StringOnly(String),
}
impl std::fmt::Display for RaycastError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RaycastError::IoError(error) => write!(f, "IO Error:\n{}", error),
            RaycastError::StringOnly(error) => write!(f, "{}", error),
        }
    }
}
impl From<crate::io::IoError> for RaycastError {
    fn from(error: crate::io::IoError) -> Self {
        RaycastError::IoError(error)
    }
}
impl From<String> for RaycastError {
    fn from(error: String) -> Self {
        RaycastError::StringOnly(error)
    }
}

/// Result type for the `raycast` module.
pub type ProcResult<T> = std::result::Result<T, RaycastError>;

/// Create a `RaycastError::StringOnly` from a string.
pub fn err_str<T>(error_str: &str) -> ProcResult<T> {
    Err(RaycastError::StringOnly(error_str.to_string()))
}
