//! Crate-level error types.

use std::fmt;

/// Errors produced by the bloch crate.
#[derive(Debug)]
pub enum BlochError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// A gate name that does not map to any known gate.
    UnknownGate(String),
    /// A noise-channel name that does not map to any known channel.
    UnknownChannel(String),
    /// A challenge difficulty level that is not recognized.
    UnknownLevel(String),
    /// A challenge marker-state key that is not recognized.
    UnknownMarker(String),
    /// A trigger-surface control name that is not bound to any operation.
    UnknownControl(String),
    /// A numeric parameter outside its valid domain.
    InvalidParameter(String),
    /// The host document has no element with the requested id.
    MountPoint(String),
}

impl fmt::Display for BlochError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::UnknownGate(name) => write!(f, "gate not recognized: {name}"),
            Self::UnknownChannel(name) => {
                write!(f, "noise channel not recognized: {name}")
            }
            Self::UnknownLevel(name) => {
                write!(f, "level not recognized: {name}")
            }
            Self::UnknownMarker(name) => {
                write!(f, "state not recognized: {name}")
            }
            Self::UnknownControl(name) => {
                write!(f, "control not recognized: {name}")
            }
            Self::InvalidParameter(msg) => {
                write!(f, "invalid parameter: {msg}")
            }
            Self::MountPoint(id) => {
                write!(f, "mount point `{id}` not found in document")
            }
        }
    }
}

impl std::error::Error for BlochError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BlochError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
