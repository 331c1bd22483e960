use crate::{
    Metrics,
    config::Config,
    document_output::DocumentOutput,
    error::Error,
    html_parser::{HtmlError, parse_html, serialize_html},
    link_annotator::annotate_links,
};
use async_recursion::async_recursion;
use futures::{Stream, StreamExt, stream};
use log::{debug, trace};
use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};
use tokio::{
    fs::{canonicalize, metadata, read, read_dir, write},
    task::spawn_blocking,
};

/// Annotates links in documents under root paths.
///
/// It returns a stream of document outputs in completion order.
pub async fn annotate_site(
    config: &Config,
) -> Result<impl Stream<Item = Result<DocumentOutput, Error>> + use<>, Error> {
    let mut paths = vec![];

    for root in config.roots() {
        collect_documents(config, root, &mut paths).await?;
    }

    paths.sort();
    paths.dedup();

    debug!("found {} document(s)", paths.len());

    let dry_run = config.dry_run();

    Ok(stream::iter(paths)
        .map(move |path| annotate_document(path, dry_run))
        .buffer_unordered(config.concurrency()))
}

async fn collect_documents(
    config: &Config,
    root: &Path,
    paths: &mut Vec<PathBuf>,
) -> Result<(), Error> {
    let metadata = metadata(root)
        .await
        .map_err(|_| Error::RootNotFound(root.into()))?;

    if metadata.is_dir() {
        let mut visited = HashSet::from([canonicalize(root).await?]);

        collect_directory_documents(config, root, root, &mut visited, paths).await
    } else {
        paths.push(root.into());
        Ok(())
    }
}

// Symbolic links are followed. Each directory and file is visited once by its
// canonical path so that link cycles terminate.
#[async_recursion]
async fn collect_directory_documents(
    config: &Config,
    root: &Path,
    directory: &Path,
    visited: &mut HashSet<PathBuf>,
    paths: &mut Vec<PathBuf>,
) -> Result<(), Error> {
    let mut entries = read_dir(directory).await.map_err(|source| Error::Read {
        path: directory.into(),
        source,
    })?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();

        if config.excluded(path.strip_prefix(root).unwrap_or(&path)) {
            trace!("excluded {}", path.display());
            continue;
        }

        let Ok(metadata) = metadata(&path).await else {
            trace!("skipped broken link {}", path.display());
            continue;
        };

        if !(metadata.is_dir() || (metadata.is_file() && config.is_document(&path))) {
            continue;
        }

        if !visited.insert(canonicalize(&path).await?) {
            trace!("skipped visited {}", path.display());
            continue;
        }

        if metadata.is_dir() {
            collect_directory_documents(config, root, &path, visited, paths).await?;
        } else {
            paths.push(path);
        }
    }

    Ok(())
}

/// Fails if any documents would change in a dry run.
pub const fn check_documents(config: &Config, metrics: &Metrics) -> Result<(), Error> {
    if config.dry_run() && metrics.has_change() {
        Err(Error::Check(metrics.changed()))
    } else {
        Ok(())
    }
}

async fn annotate_document(path: PathBuf, dry_run: bool) -> Result<DocumentOutput, Error> {
    let bytes = read(&path).await.map_err(|source| Error::Read {
        path: path.clone(),
        source,
    })?;

    let (bytes, elements) = spawn_blocking(move || {
        let dom = parse_html(&bytes)?;
        let elements = annotate_links(&dom);
        let bytes = if elements.iter().any(|element| element.changed()) {
            Some(serialize_html(&dom)?)
        } else {
            None
        };

        Ok::<_, HtmlError>((bytes, elements))
    })
    .await?
    .map_err(|source| Error::Html {
        path: path.clone(),
        source,
    })?;

    if let Some(bytes) = bytes {
        if dry_run {
            debug!("skipped writing {}", path.display());
        } else {
            write(&path, bytes).await.map_err(|source| Error::Write {
                path: path.clone(),
                source,
            })?;
            debug!("annotated {}", path.display());
        }
    }

    Ok(DocumentOutput::new(path, elements))
}
