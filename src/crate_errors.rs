use crate::{
    args,
    scene,
    raycast,
    register,
    adjust,
};

/// Error-type enum for the `placard` crate.
/// Wraps the per-module process errors.
#[derive(Debug)]
pub enum PlacardError {
    ArgError(args::ArgError),
    SceneError(scene::SceneError),
    RaycastError(raycast::RaycastError),
    RegisterError(register::RegisterError),
    AdjustError(adjust::AdjustError),
    StringOnly(String),
}
impl std::fmt::Display for PlacardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlacardError::ArgError(error) => write!(f, "! ARGUMENT ERROR:\n{}", error),
            PlacardError::SceneError(error) => write!(f, "! SCENE ERROR:\n{}", error),
            PlacardError::RaycastError(error) => write!(f, "! RAYCAST ERROR:\n{}", error),
            PlacardError::RegisterError(error) => write!(f, "! REGISTRATION ERROR:\n{}", error),
            PlacardError::AdjustError(error) => write!(f, "! ADJUST ERROR:\n{}", error),
            PlacardError::StringOnly(error) => write!(f, "! PLACARD ERROR:\n- {}", error),
        }
    }
}
impl From<String> for PlacardError {
    fn from(error: String) -> Self {
        PlacardError::StringOnly(error)
    }
}
impl From<args::ArgError> for PlacardError {
    fn from(error: args::ArgError) -> Self {
        PlacardError::ArgError(error)
    }
}
impl From<scene::SceneError> for PlacardError {
    fn from(error: scene::SceneError) -> Self {
        PlacardError::SceneError(error)
    }
}
impl From<raycast::RaycastError> for PlacardError {
    fn from(error: raycast::RaycastError) -> Self {
        PlacardError::RaycastError(error)
    }
}
impl From<register::RegisterError> for PlacardError {
    fn from(error: register::RegisterError) -> Self {
        PlacardError::RegisterError(error)
    }
}
impl From<adjust::AdjustError> for PlacardError {
    fn from(error: adjust::AdjustError) -> Self {
        PlacardError::AdjustError(error)
    }
}

/// Result type for the `placard` crate.
pub type PlacardResult<T> = std::result::Result<T, PlacardError>;

/// Create a `PlacardResult` with an `Err` from a string.
/// Shorthand to avoid writing `Err(crate::PlacardError::StringOnly(error_str))`.
pub fn err_str<T>(error_str: &str) -> PlacardResult<T> {
    Err(PlacardError::StringOnly(error_str.to_string()))
}
