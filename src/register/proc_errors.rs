/// Registration process error type.
#[derive(Debug)]
pub enum RegisterError {
    /// IO error.
    IoError(crate::io::IoError),
    /// StringOnly error.
    StringOnly(String),
}
impl std::fmt::Display for RegisterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegisterError::IoError(error) => write!(f, "IO Error:\n{}", error),
            RegisterError::StringOnly(error) => write!(f, "{}", error),
        }
    }
}
impl From<crate::io::IoError> for RegisterError {
    fn from(error: crate::io::IoError) -> Self {
        RegisterError::IoError(error)
    }
}
impl From<String> for RegisterError {
    fn from(error: String) -> Self {
        RegisterError::StringOnly(error)
    }
}

/// Result type for the `register` module.
pub type ProcResult<T> = std::result::Result<T, RegisterError>;

/// Create a `RegisterError::StringOnly` from a string.
pub fn err_str<T>(error_str: &str) -> ProcResult<T> {
    Err(RegisterError::StringOnly(error_str.to_string()))
}
