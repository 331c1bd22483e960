use crate::{config::ConfigError, html_parser::HtmlError};
use core::{
    error,
    fmt::{self, Display, Formatter},
};
use std::{io, path::PathBuf};
use tokio::task::JoinError;

/// An error.
#[derive(Debug)]
pub enum Error {
    /// Documents are not annotated yet.
    Check(usize),
    /// A configuration error.
    Config(ConfigError),
    /// An HTML error.
    Html {
        /// A document path.
        path: PathBuf,
        /// A source error.
        source: HtmlError,
    },
    /// An I/O error.
    Io(io::Error),
    /// A task join error.
    Join(JoinError),
    /// A JSON error.
    Json(serde_json::Error),
    /// A root not found.
    RootNotFound(PathBuf),
    /// A document read error.
    Read {
        /// A document path.
        path: PathBuf,
        /// A source error.
        source: io::Error,
    },
    /// A document write error.
    Write {
        /// A document path.
        path: PathBuf,
        /// A source error.
        source: io::Error,
    },
}

impl error::Error for Error {}

impl Display for Error {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Check(count) => write!(formatter, "{count} document(s) not annotated"),
            Self::Config(error) => write!(formatter, "{error}"),
            Self::Html { path, source } => {
                write!(formatter, "failed to parse {}: {source}", path.display())
            }
            Self::Io(error) => write!(formatter, "{error}"),
            Self::Join(error) => write!(formatter, "{error}"),
            Self::Json(error) => write!(formatter, "{error}"),
            Self::RootNotFound(path) => write!(formatter, "root not found: {}", path.display()),
            Self::Read { path, source } => {
                write!(formatter, "failed to read {}: {source}", path.display())
            }
            Self::Write { path, source } => {
                write!(formatter, "failed to write {}: {source}", path.display())
            }
        }
    }
}

impl From<ConfigError> for Error {
    fn from(error: ConfigError) -> Self {
        Self::Config(error)
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<JoinError> for Error {
    fn from(error: JoinError) -> Self {
        Self::Join(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}
