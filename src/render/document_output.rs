use crate::element_output::ElementOutput;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct RenderedDocumentOutput<'a> {
    path: &'a Path,
    elements: Vec<&'a ElementOutput>,
}

impl<'a> RenderedDocumentOutput<'a> {
    pub const fn path(&self) -> &'a Path {
        self.path
    }

    pub fn elements(&self) -> impl ExactSizeIterator<Item = &'a ElementOutput> {
        self.elements.iter().copied()
    }

    pub fn changed(&self) -> bool {
        self.elements.iter().any(|element| element.changed())
    }

    pub(crate) fn retain_changed(&mut self) {
        self.elements.retain(|element| element.changed());
    }
}

impl<'a> From<&'a crate::DocumentOutput> for RenderedDocumentOutput<'a> {
    fn from(output: &'a crate::DocumentOutput) -> Self {
        Self {
            path: output.path(),
            elements: output.elements().collect(),
        }
    }
}
