use serde::Serialize;

/// An element.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
}

impl Element {
    /// Creates an element.
    pub const fn new(name: String, attributes: Vec<(String, String)>) -> Self {
        Self { name, attributes }
    }

    /// Returns a name.
    #[allow(clippy::missing_const_for_fn)]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns attributes.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}
