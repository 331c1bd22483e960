use crate::{Metrics, element_output::ElementOutput};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A document output.
#[derive(Debug, Serialize)]
pub struct DocumentOutput {
    path: PathBuf,
    elements: Vec<ElementOutput>,
    metrics: Metrics,
}

impl DocumentOutput {
    /// Creates a document output.
    pub fn new(path: PathBuf, elements: Vec<ElementOutput>) -> Self {
        Self {
            path,
            metrics: Metrics::new(
                elements.iter().filter(|element| element.changed()).count(),
                elements.iter().filter(|element| !element.changed()).count(),
            ),
            elements,
        }
    }

    /// Returns a path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns elements with their annotation results in document order.
    pub fn elements(&self) -> impl ExactSizeIterator<Item = &ElementOutput> {
        self.elements.iter()
    }

    /// Returns metrics of element annotation.
    pub const fn metrics(&self) -> Metrics {
        self.metrics
    }

    /// Returns whether any elements are changed.
    pub const fn changed(&self) -> bool {
        self.metrics.has_change()
    }
}
