use super::{Config, ConfigError, DEFAULT_CONFIG_FILE, SerializableConfig, compile_config};
use log::debug;
use std::path::{Path, PathBuf};
use tokio::fs::{canonicalize, read_to_string, try_exists};

/// Loads a configuration.
///
/// Without an explicit file, a default configuration file in a directory is
/// read if it exists. Non-empty roots replace configured ones.
pub async fn load_config(
    path: Option<&Path>,
    directory: &Path,
    roots: Vec<PathBuf>,
) -> Result<Config, ConfigError> {
    let path = match path {
        Some(path) => Some(path.to_owned()),
        None => {
            let path = directory.join(DEFAULT_CONFIG_FILE);
            try_exists(&path).await?.then_some(path)
        }
    };

    let config = match path {
        Some(path) => {
            debug!("reading {}", path.display());
            compile_config(read_config(&path).await?)?
        }
        None => Config::new(vec![]),
    };
    let config = if roots.is_empty() {
        config
    } else {
        config.set_roots(roots)
    };

    if config.roots().next().is_none() {
        return Err(ConfigError::MissingRoots);
    }

    Ok(config)
}

/// Reads a configuration file following its `extend` chain.
///
/// Relative paths in each file are resolved against the file's directory.
pub async fn read_config(path: &Path) -> Result<SerializableConfig, ConfigError> {
    let mut path = canonicalize(path).await?;
    let mut paths = vec![path.clone()];
    let mut config = read_bare_config(&path).await?;

    while let Some(parent_path) = config.extend() {
        let parent_path = canonicalize(directory(&path).join(parent_path)).await?;

        if let Some(index) = paths.iter().position(|item| item == &parent_path) {
            paths.push(parent_path);
            return Err(ConfigError::CircularConfigFiles(paths[index..].to_vec()));
        }

        debug!("extending {} with {}", path.display(), parent_path.display());

        paths.push(parent_path.clone());
        let mut parent = read_bare_config(&parent_path).await?;
        parent.merge(config);
        config = parent;
        path = parent_path;
    }

    Ok(config)
}

async fn read_bare_config(path: &Path) -> Result<SerializableConfig, ConfigError> {
    let mut config: SerializableConfig = ::toml::from_str(&read_to_string(path).await?)?;

    config.resolve_roots(&directory(path));

    Ok(config)
}

fn directory(path: &Path) -> PathBuf {
    path.parent()
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| PathBuf::from("."))
}
