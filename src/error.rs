//! Crate error type
//!
//! The simulation itself never fails; errors only come from the score file,
//! the settings file and the presentation/input adapters.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// Reading or writing the score file failed
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The score file is not a `Name,Score` table
    MalformedScores { line: usize, reason: String },
    /// The settings file could not be written
    Settings(String),
    /// A presentation or input adapter fault
    Adapter(std::io::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedScores {
            line,
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::MalformedScores { line, reason } => {
                write!(f, "malformed score file at line {line}: {reason}")
            },
            Self::Settings(m) => write!(f, "settings error: {m}"),
            Self::Adapter(e) => write!(f, "adapter error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Adapter(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Adapter(e)
    }
}
