use core::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The tile source is missing, unreadable, or not a JSON array.
    SourceUnavailable { path: Option<PathBuf>, reason: String },
    /// Record `index` lacks a field or holds a value of the wrong type.
    MalformedRecord { index: usize, reason: String },
    Serialize { reason: String },
    Write { path: PathBuf, reason: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceUnavailable {
                path: Some(path),
                reason,
            } => write!(f, "tile source {} unavailable: {reason}", path.display()),
            Self::SourceUnavailable { path: None, reason } => {
                write!(f, "tile source unavailable: {reason}")
            }
            Self::MalformedRecord { index, reason } => {
                write!(f, "malformed tile record {index}: {reason}")
            }
            Self::Serialize { reason } => write!(f, "serializing contours: {reason}"),
            Self::Write { path, reason } => {
                write!(f, "writing contours to {}: {reason}", path.display())
            }
        }
    }
}

impl std::error::Error for Error {}
