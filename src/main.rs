#![doc = include_str!("../README.md")]

use clap::Parser;
use core::{error::Error, pin::pin};
use env_logger::Env;
use futures::StreamExt;
use outlink::{RenderFormat, RenderOptions, check_documents, load_config};
use std::{
    io::IsTerminal,
    path::{Path, PathBuf},
    process::exit,
};
use tabled::{
    Table,
    settings::{Color, Style, themes::Colorization},
};
use tokio::io::stdout;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Arguments {
    /// Documentation directories or HTML files.
    paths: Vec<PathBuf>,
    /// Sets a configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Checks if documents are annotated without writing them.
    #[arg(long)]
    check: bool,
    /// Sets an output format.
    #[arg(long, default_value = "text")]
    format: RenderFormat,
    /// Becomes verbose.
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("{error}");
        exit(1)
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let Arguments {
        paths,
        config,
        check,
        format,
        verbose,
    } = Arguments::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or(if verbose {
        "debug"
    } else {
        "warn"
    }))
    .init();

    let config = load_config(config.as_deref(), Path::new("."), paths)
        .await?
        .set_dry_run(check);
    let mut output = stdout();
    let options = RenderOptions::default()
        .set_format(format)
        .set_verbose(verbose)
        .set_color(std::io::stdout().is_terminal());
    let mut documents = pin!(outlink::annotate_site(&config).await?);
    let mut document_metrics = outlink::Metrics::default();
    let mut element_metrics = outlink::Metrics::default();

    while let Some(document) = documents.next().await {
        let document = document?;

        document_metrics.add(document.changed());
        element_metrics.merge(&document.metrics());

        outlink::render_document(&document, &options, &mut output).await?;
    }

    eprintln!();
    eprintln!(
        "{}",
        Table::from_iter(
            [vec![
                "item".into(),
                "changed".into(),
                "unchanged".into(),
                "total".into()
            ]]
            .into_iter()
            .chain(
                [("document", document_metrics), ("link", element_metrics)]
                    .into_iter()
                    .map(|(item, metrics)| vec![
                        item.to_string(),
                        metrics.changed().to_string(),
                        metrics.unchanged().to_string(),
                        metrics.total().to_string()
                    ])
            )
        )
        .with(Style::markdown())
        .with(Colorization::columns([
            Color::FG_WHITE,
            Color::FG_GREEN,
            Color::FG_WHITE,
            Color::FG_WHITE,
        ])),
    );

    Ok(check_documents(&config, &document_metrics)?)
}
