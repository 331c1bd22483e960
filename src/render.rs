mod document_output;
mod options;

pub use self::options::{RenderFormat, RenderOptions};
use self::document_output::RenderedDocumentOutput;
use crate::{DocumentOutput, element_output::ElementOutput, error::Error, link::LinkKind};
use colored::{ColoredString, Colorize};
use itertools::Itertools;
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Renders a document output.
pub async fn render_document(
    document: &DocumentOutput,
    options: &RenderOptions,
    writer: &mut (impl AsyncWrite + Unpin),
) -> Result<(), Error> {
    let mut document = RenderedDocumentOutput::from(document);

    if !options.verbose() {
        if !document.changed() {
            return Ok(());
        }

        document.retain_changed();
    }

    match options.format() {
        RenderFormat::Json => render_json_document(&document, writer).await,
        RenderFormat::Text => render_text_document(&document, options.color(), writer).await,
    }
}

async fn render_json_document(
    document: &RenderedDocumentOutput<'_>,
    writer: &mut (impl AsyncWrite + Unpin),
) -> Result<(), Error> {
    render_line(writer, &serde_json::to_string(document)?).await
}

async fn render_text_document(
    document: &RenderedDocumentOutput<'_>,
    color: bool,
    writer: &mut (impl AsyncWrite + Unpin),
) -> Result<(), Error> {
    render_line(
        writer,
        &paint(document.path().display().to_string().yellow(), color).to_string(),
    )
    .await?;

    for element in document.elements() {
        render_line(
            writer,
            &format!(
                "\t{}\t{}",
                paint(render_status(element), color),
                [element.element().name().to_owned()]
                    .into_iter()
                    .chain(
                        element
                            .element()
                            .attributes()
                            .map(|(key, value)| format!("{key}=\"{value}\""))
                    )
                    .join(" "),
            ),
        )
        .await?;
    }

    Ok(())
}

fn render_status(element: &ElementOutput) -> ColoredString {
    match (element.kind(), element.changed()) {
        (_, true) => "annotated".green(),
        (Some(LinkKind::External), false) => "external".cyan(),
        (Some(LinkKind::Local), false) => "local".dimmed(),
        (Some(LinkKind::Internal), false) => "internal".dimmed(),
        (None, false) => "no href".dimmed(),
    }
}

fn paint(string: ColoredString, color: bool) -> ColoredString {
    if color { string } else { string.clear() }
}

async fn render_line(writer: &mut (impl AsyncWrite + Unpin), string: &str) -> Result<(), Error> {
    writer.write_all(string.as_bytes()).await?;
    writer.write_all(b"\n").await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn document() -> DocumentOutput {
        DocumentOutput::new(
            PathBuf::from("index.html"),
            vec![
                ElementOutput::new(
                    Element::new(
                        "a".into(),
                        vec![("href".into(), "https://example.com".into())],
                    ),
                    Some(LinkKind::External),
                    true,
                ),
                ElementOutput::new(
                    Element::new("a".into(), vec![("href".into(), "/foo".into())]),
                    Some(LinkKind::Internal),
                    false,
                ),
            ],
        )
    }

    async fn render(document: &DocumentOutput, options: &RenderOptions) -> String {
        let mut buffer = vec![];

        render_document(document, options, &mut buffer)
            .await
            .unwrap();

        String::from_utf8(buffer).unwrap()
    }

    #[tokio::test]
    async fn render_json() {
        let output = render(
            &document(),
            &RenderOptions::new().set_format(RenderFormat::Json),
        )
        .await;

        assert_snapshot!(
            output.trim_end(),
            @r#"{"path":"index.html","elements":[{"element":{"name":"a","attributes":[["href","https://example.com"]]},"kind":"external","changed":true}]}"#
        );
    }

    #[tokio::test]
    async fn render_verbose_json() {
        let output = render(
            &document(),
            &RenderOptions::new()
                .set_format(RenderFormat::Json)
                .set_verbose(true),
        )
        .await;

        let value = serde_json::from_str::<serde_json::Value>(&output).unwrap();

        assert_eq!(value["elements"].as_array().unwrap().len(), 2);
        assert_eq!(value["elements"][1]["kind"], "internal");
        assert_eq!(value["elements"][1]["changed"], false);
    }

    #[tokio::test]
    async fn render_text() {
        let output = render(&document(), &RenderOptions::new()).await;

        assert_eq!(
            output,
            "index.html\n\tannotated\ta href=\"https://example.com\"\n"
        );
    }

    #[tokio::test]
    async fn render_colored_text() {
        let output = render(&document(), &RenderOptions::new().set_color(true)).await;

        assert!(output.contains("index.html"));
        assert!(output.contains("annotated"));
    }

    #[tokio::test]
    async fn skip_unchanged_document() {
        let document = DocumentOutput::new(
            PathBuf::from("index.html"),
            vec![ElementOutput::new(
                Element::new("a".into(), vec![]),
                None,
                false,
            )],
        );

        assert_eq!(render(&document, &RenderOptions::new()).await, "");
        assert!(
            !render(&document, &RenderOptions::new().set_verbose(true))
                .await
                .is_empty()
        );
    }

    #[tokio::test]
    async fn render_anchor_without_attributes() {
        let document = DocumentOutput::new(
            PathBuf::from("index.html"),
            vec![ElementOutput::new(
                Element::new("a".into(), vec![]),
                None,
                false,
            )],
        );

        assert_eq!(
            render(&document, &RenderOptions::new().set_verbose(true)).await,
            "index.html\n\tno href\ta\n"
        );
    }
}
