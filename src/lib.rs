#![doc = include_str!("../README.md")]

mod config;
mod document_output;
mod element;
mod element_output;
mod error;
mod html_parser;
mod link;
mod link_annotator;
mod metrics;
mod render;
mod site_annotator;

pub use self::{
    config::*,
    document_output::DocumentOutput,
    element::Element,
    element_output::ElementOutput,
    error::Error,
    html_parser::{HtmlError, parse_html, serialize_html},
    link::{
        EXTERNAL_PREFIXES, LOCAL_MARKERS, LinkKind, NEW_TAB_REL, NEW_TAB_TARGET, is_external,
        is_local,
    },
    link_annotator::annotate_links,
    metrics::Metrics,
    render::{RenderFormat, RenderOptions, render_document},
    site_annotator::{annotate_site, check_documents},
};
