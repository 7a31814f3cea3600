use std::fmt;
use std::path::PathBuf;

use crate::input::Action;

/// Errors from the settings store and key-binding layer.
///
/// The simulation itself never fails; these only surface when talking to disk
/// or when a caller tries to apply an invalid binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaserDodgeError {
    Io { path: PathBuf, message: String },
    Parse { path: PathBuf, message: String },
    UnknownAction(String),
    EmptyKey(Action),
}

impl fmt::Display for LaserDodgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, message } => {
                write!(f, "settings i/o failed for {}: {message}", path.display())
            }
            Self::Parse { path, message } => {
                write!(f, "malformed settings in {}: {message}", path.display())
            }
            Self::UnknownAction(name) => write!(f, "unknown action '{name}'"),
            Self::EmptyKey(action) => {
                write!(f, "empty key name for action {}", action.as_str())
            }
        }
    }
}

impl std::error::Error for LaserDodgeError {}
