/// Scene loading error type.
#[derive(Debug)]
pub enum SceneError {
    /// IO error.
    IoError(crate::io::IoError),
    /// StringOnly error.
    StringOnly(String),
}
impl std::fmt::Display for SceneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneError::IoError(error) => write!(f, "IO Error:\n{}", error),
            SceneError::StringOnly(error) => write!(f, "{}", error),
        }
    }
}
impl From<crate::io::IoError> for SceneError {
    fn from(error: crate::io::IoError) -> Self {
        SceneError::IoError(error)
    }
}
impl From<String> for SceneError {
    fn from(error: String) -> Self {
        SceneError::StringOnly(error)
    }
}

/// Result type for the `scene` module.
pub type ProcResult<T> = std::result::Result<T, SceneError>;

/// Create a `SceneError::StringOnly` from a string.
pub fn err_str<T>(error_str: &str) -> ProcResult<T> {
    Err(SceneError::StringOnly(error_str.to_string()))
}
