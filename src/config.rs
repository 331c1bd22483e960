mod error;
mod serde;
mod toml;

pub use self::{
    error::ConfigError,
    serde::{SerializableConfig, compile_config},
    toml::{load_config, read_config},
};
use core::ops::Deref;
use regex::Regex;
use rlimit::{Resource, getrlimit};
use std::path::{Path, PathBuf};

/// A default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "outlink.toml";
/// Default document file extensions.
pub const DEFAULT_EXTENSIONS: &[&str] = &["html", "htm"];

const DEFAULT_MINIMUM_CONCURRENCY: usize = 256;

/// Returns a default concurrency.
pub fn default_concurrency() -> usize {
    getrlimit(Resource::NOFILE)
        .map(|(count, _)| (count / 2) as _)
        .unwrap_or(DEFAULT_MINIMUM_CONCURRENCY)
        .max(1)
}

/// An annotation configuration.
#[derive(Clone, Debug)]
pub struct Config {
    roots: Vec<PathBuf>,
    extensions: Vec<String>,
    excluded_paths: Vec<Regex>,
    concurrency: Option<usize>,
    dry_run: bool,
}

impl Config {
    /// Creates a configuration.
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self {
            roots,
            extensions: DEFAULT_EXTENSIONS
                .iter()
                .copied()
                .map(ToOwned::to_owned)
                .collect(),
            excluded_paths: Default::default(),
            concurrency: None,
            dry_run: false,
        }
    }

    /// Returns root paths.
    pub fn roots(&self) -> impl Iterator<Item = &Path> {
        self.roots.iter().map(Deref::deref)
    }

    /// Returns document file extensions.
    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(Deref::deref)
    }

    /// Returns excluded path patterns.
    pub fn excluded_paths(&self) -> impl Iterator<Item = &Regex> {
        self.excluded_paths.iter()
    }

    /// Returns a concurrency.
    pub fn concurrency(&self) -> usize {
        self.concurrency.unwrap_or_else(default_concurrency)
    }

    /// Returns whether documents are left unwritten.
    pub const fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Returns whether a path relative to a root is excluded.
    pub fn excluded(&self, path: &Path) -> bool {
        let path = path.to_string_lossy();

        self.excluded_paths().any(|regex| regex.is_match(&path))
    }

    /// Returns whether a path has a document file extension.
    pub fn is_document(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|extension| extension.to_str())
            .map(|extension| self.extensions().any(|other| other == extension))
            .unwrap_or_default()
    }

    /// Sets root paths.
    pub fn set_roots(mut self, roots: Vec<PathBuf>) -> Self {
        self.roots = roots;
        self
    }

    /// Sets document file extensions.
    pub fn set_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    /// Sets excluded path patterns.
    pub fn set_excluded_paths(mut self, paths: Vec<Regex>) -> Self {
        self.excluded_paths = paths;
        self
    }

    /// Sets a concurrency.
    pub const fn set_concurrency(mut self, concurrency: Option<usize>) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Sets whether documents are left unwritten.
    pub const fn set_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
