use super::{Config, ConfigError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A serializable configuration.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SerializableConfig {
    extend: Option<PathBuf>,
    roots: Option<Vec<PathBuf>>,
    extensions: Option<Vec<String>>,
    excluded_paths: Option<Vec<String>>,
    concurrency: Option<usize>,
}

impl SerializableConfig {
    /// Returns a parent configuration file path.
    pub fn extend(&self) -> Option<&Path> {
        self.extend.as_deref()
    }

    /// Merges a child configuration into this one.
    ///
    /// Fields of the child configuration take precedence except `extend`.
    pub fn merge(&mut self, child: Self) {
        if child.roots.is_some() {
            self.roots = child.roots;
        }
        if child.extensions.is_some() {
            self.extensions = child.extensions;
        }
        if child.excluded_paths.is_some() {
            self.excluded_paths = child.excluded_paths;
        }
        if child.concurrency.is_some() {
            self.concurrency = child.concurrency;
        }
    }

    /// Resolves relative root paths against a directory.
    pub(crate) fn resolve_roots(&mut self, directory: &Path) {
        if let Some(roots) = &mut self.roots {
            for root in roots {
                if root.is_relative() {
                    *root = directory.join(&*root);
                }
            }
        }
    }
}

/// Compiles a configuration.
pub fn compile_config(config: SerializableConfig) -> Result<Config, ConfigError> {
    if config.concurrency == Some(0) {
        return Err(ConfigError::ZeroConcurrency);
    }

    let mut compiled = Config::new(config.roots.unwrap_or_default())
        .set_excluded_paths(
            config
                .excluded_paths
                .unwrap_or_default()
                .iter()
                .map(|path| Regex::new(path))
                .collect::<Result<_, _>>()?,
        )
        .set_concurrency(config.concurrency);

    if let Some(extensions) = config.extensions {
        compiled = compiled.set_extensions(extensions);
    }

    Ok(compiled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn compile_default() {
        let config = compile_config(Default::default()).unwrap();

        assert_eq!(config.roots().count(), 0);
        assert_eq!(config.extensions().collect::<Vec<_>>(), ["html", "htm"]);
        assert_eq!(config.excluded_paths().count(), 0);
        assert!(!config.dry_run());
    }

    #[test]
    fn compile_fields() {
        let config = compile_config(
            ::toml::from_str(indoc! {r#"
                roots = ["docs/_build/html"]
                extensions = ["xhtml"]
                excluded_paths = ["^_static/"]
                concurrency = 8
            "#})
            .unwrap(),
        )
        .unwrap();

        assert_eq!(
            config.roots().collect::<Vec<_>>(),
            [Path::new("docs/_build/html")]
        );
        assert_eq!(config.extensions().collect::<Vec<_>>(), ["xhtml"]);
        assert!(config.excluded(Path::new("_static/foo.html")));
        assert_eq!(config.concurrency(), 8);
    }

    #[test]
    fn reject_invalid_regex() {
        let result = compile_config(
            ::toml::from_str(indoc! {r#"
                excluded_paths = ["("]
            "#})
            .unwrap(),
        );

        assert!(matches!(result, Err(ConfigError::Regex(_))));
    }

    #[test]
    fn reject_zero_concurrency() {
        let result = compile_config(::toml::from_str("concurrency = 0").unwrap());

        assert!(matches!(result, Err(ConfigError::ZeroConcurrency)));
    }

    #[test]
    fn reject_unknown_fields() {
        assert!(::toml::from_str::<SerializableConfig>("foo = 42").is_err());
    }

    #[test]
    fn merge_child_fields() {
        let mut parent = ::toml::from_str::<SerializableConfig>(indoc! {r#"
            roots = ["foo"]
            concurrency = 1
        "#})
        .unwrap();

        parent.merge(
            ::toml::from_str(indoc! {r#"
                extend = "parent.toml"
                concurrency = 2
            "#})
            .unwrap(),
        );

        assert_eq!(parent.extend(), None);
        assert_eq!(parent.roots, Some(vec![PathBuf::from("foo")]));
        assert_eq!(parent.concurrency, Some(2));
    }

    #[test]
    fn resolve_relative_roots() {
        let mut config = ::toml::from_str::<SerializableConfig>(indoc! {r#"
            roots = ["html", "/absolute"]
        "#})
        .unwrap();

        config.resolve_roots(Path::new("/docs"));

        assert_eq!(
            config.roots,
            Some(vec![
                PathBuf::from("/docs/html"),
                PathBuf::from("/absolute")
            ])
        );
    }
}
