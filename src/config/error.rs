use core::{
    error::Error,
    fmt,
    fmt::{Display, Formatter},
};
use std::{io, path::PathBuf};

/// A configuration error.
#[derive(Debug)]
pub enum ConfigError {
    /// Circular configuration extensions.
    CircularConfigFiles(Vec<PathBuf>),
    /// An I/O error while reading configuration.
    Io(io::Error),
    /// Missing roots.
    MissingRoots,
    /// A regular expression error.
    Regex(regex::Error),
    /// A TOML deserialization error.
    TomlDeserialize(::toml::de::Error),
    /// A zero concurrency.
    ZeroConcurrency,
}

impl Display for ConfigError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::CircularConfigFiles(paths) => {
                let paths = paths
                    .iter()
                    .map(|path| path.display().to_string())
                    .collect::<Vec<_>>()
                    .join(" -> ");
                write!(formatter, "circular configuration files: {paths}")
            }
            Self::Io(error) => {
                write!(formatter, "{error}")
            }
            Self::MissingRoots => {
                write!(formatter, "no documentation roots specified")
            }
            Self::Regex(error) => {
                write!(formatter, "{error}")
            }
            Self::TomlDeserialize(error) => {
                write!(formatter, "{error}")
            }
            Self::ZeroConcurrency => {
                write!(formatter, "concurrency must be positive")
            }
        }
    }
}

impl Error for ConfigError {}

impl From<regex::Error> for ConfigError {
    fn from(error: regex::Error) -> Self {
        Self::Regex(error)
    }
}

impl From<io::Error> for ConfigError {
    fn from(error: io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<::toml::de::Error> for ConfigError {
    fn from(error: ::toml::de::Error) -> Self {
        Self::TomlDeserialize(error)
    }
}
