use core::{
    error::Error,
    fmt::{self, Display, Formatter},
    str::{self, Utf8Error},
};
use html5ever::{
    parse_document,
    serialize::{Serialize, Serializer, TraversalScope, serialize},
    tendril::TendrilSink,
};
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use std::io;

/// Parses an HTML document.
///
/// The document tree is complete when this function returns. Documents not
/// encoded in UTF-8 are rejected rather than decoded lossily.
pub fn parse_html(mut bytes: &[u8]) -> Result<RcDom, HtmlError> {
    str::from_utf8(bytes).map_err(HtmlError::Encoding)?;

    parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut bytes)
        .map_err(HtmlError::Io)
}

/// Serializes an HTML document.
pub fn serialize_html(dom: &RcDom) -> Result<Vec<u8>, HtmlError> {
    let mut bytes = vec![];

    serialize(
        &mut bytes,
        &SerializableNode(&dom.document),
        Default::default(),
    )
    .map_err(HtmlError::Io)?;

    Ok(bytes)
}

// Unlike `markup5ever_rcdom::SerializableHandle`, this writes template contents.
struct SerializableNode<'a>(&'a Handle);

impl Serialize for SerializableNode<'_> {
    fn serialize<S: Serializer>(
        &self,
        serializer: &mut S,
        traversal_scope: TraversalScope,
    ) -> io::Result<()> {
        match traversal_scope {
            TraversalScope::IncludeNode => serialize_node(self.0, serializer),
            TraversalScope::ChildrenOnly(_) => serialize_children(self.0, serializer),
        }
    }
}

fn serialize_node<S: Serializer>(node: &Handle, serializer: &mut S) -> io::Result<()> {
    match &node.data {
        NodeData::Document => serialize_children(node, serializer),
        NodeData::Element {
            name,
            attrs,
            template_contents,
            ..
        } => {
            serializer.start_elem(
                name.clone(),
                attrs
                    .borrow()
                    .iter()
                    .map(|attribute| (&attribute.name, &*attribute.value)),
            )?;

            if let Some(contents) = &*template_contents.borrow() {
                serialize_children(contents, serializer)?;
            } else {
                serialize_children(node, serializer)?;
            }

            serializer.end_elem(name.clone())
        }
        NodeData::Doctype { name, .. } => serializer.write_doctype(name),
        NodeData::Text { contents } => serializer.write_text(&contents.borrow()),
        NodeData::Comment { contents } => serializer.write_comment(contents),
        NodeData::ProcessingInstruction { target, contents } => {
            serializer.write_processing_instruction(target, contents)
        }
    }
}

fn serialize_children<S: Serializer>(node: &Handle, serializer: &mut S) -> io::Result<()> {
    for child in node.children.borrow().iter() {
        serialize_node(child, serializer)?;
    }

    Ok(())
}

/// An HTML error.
#[derive(Debug)]
pub enum HtmlError {
    /// A document not encoded in UTF-8.
    Encoding(Utf8Error),
    /// An I/O error.
    Io(io::Error),
}

impl Error for HtmlError {}

impl Display for HtmlError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encoding(error) => write!(formatter, "document not in UTF-8: {error}"),
            Self::Io(error) => write!(formatter, "{error}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_and_serialize() {
        let html = indoc! {r#"
            <!DOCTYPE html>
            <html><head><title>foo</title></head>
            <body><a href="https://example.com">bar</a></body></html>
        "#};

        let bytes = serialize_html(&parse_html(html.as_bytes()).unwrap()).unwrap();
        let serialized = String::from_utf8(bytes).unwrap();

        assert!(serialized.starts_with("<!DOCTYPE html>"));
        assert!(serialized.contains(r#"<a href="https://example.com">bar</a>"#));
    }

    #[test]
    fn serialize_stably() {
        let html = "<!DOCTYPE html><p>foo<a href=/bar>bar</a>";

        let first = serialize_html(&parse_html(html.as_bytes()).unwrap()).unwrap();
        let second = serialize_html(&parse_html(&first).unwrap()).unwrap();

        assert_eq!(
            String::from_utf8(first).unwrap(),
            String::from_utf8(second).unwrap()
        );
    }

    #[test]
    fn serialize_comments_and_text() {
        let html = "<!DOCTYPE html><body><!-- foo --><p>bar &amp; baz</p></body>";

        let serialized =
            String::from_utf8(serialize_html(&parse_html(html.as_bytes()).unwrap()).unwrap())
                .unwrap();

        assert!(serialized.contains("<!-- foo --><p>bar &amp; baz</p>"));
    }

    #[test]
    fn serialize_template_contents() {
        let html = r#"<template><p>kept</p><a href="/foo">foo</a></template>"#;

        let serialized =
            String::from_utf8(serialize_html(&parse_html(html.as_bytes()).unwrap()).unwrap())
                .unwrap();

        assert!(serialized.contains(html), "{serialized}");
    }

    #[test]
    fn reject_non_utf8_document() {
        let html = b"<meta charset=\"iso-8859-1\"><p>caf\xe9</p>";

        assert!(matches!(parse_html(html), Err(HtmlError::Encoding(_))));
    }
}
