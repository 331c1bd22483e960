use crate::{element::Element, link::LinkKind};
use serde::Serialize;

/// An element output.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ElementOutput {
    element: Element,
    kind: Option<LinkKind>,
    changed: bool,
}

impl ElementOutput {
    /// Creates an element output.
    pub const fn new(element: Element, kind: Option<LinkKind>, changed: bool) -> Self {
        Self {
            element,
            kind,
            changed,
        }
    }

    /// Returns an element.
    pub const fn element(&self) -> &Element {
        &self.element
    }

    /// Returns a link kind.
    ///
    /// It is `None` if the element has no link.
    pub const fn kind(&self) -> Option<LinkKind> {
        self.kind
    }

    /// Returns whether the element's attributes are changed.
    pub const fn changed(&self) -> bool {
        self.changed
    }
}
