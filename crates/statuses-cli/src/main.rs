use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use statuses_core::domain::TEXT_DOMAIN;
use statuses_core::impls::{CatalogTranslator, IdentityTranslator, StaticPostTypes};
use statuses_core::{ResolverBuilder, StatusError, definitions_from_json_str};

#[derive(Parser, Debug)]
#[command(
    name = "statuses",
    about = "Apply built-in defaults to post status definitions and print the result as JSON",
    version
)]
struct Cli {
    /// JSON file with status definitions (array, or object keyed by status name)
    #[arg(short = 'd', long = "definitions", value_name = "FILE")]
    definitions: PathBuf,

    /// Registered post type (repeatable); used as the default for built-in statuses
    #[arg(short = 'p', long = "post-type", value_name = "POST_TYPE", action = clap::ArgAction::Append)]
    post_types: Vec<String>,

    /// JSON message catalog `{ "<source>": "<translation>" }` for the built-in labels
    #[arg(short = 'c', long = "catalog", value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Pretty-print the output
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<(), StatusError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // (A) 入力ファイルを読み込む
    let definitions = fs::read_to_string(&cli.definitions)?;
    let catalog = match &cli.catalog {
        Some(path) => Some(fs::read_to_string(path)?),
        None => None,
    };

    // (B) 解決して出力
    let output = render(&definitions, cli.post_types, catalog.as_deref(), cli.pretty)?;
    println!("{output}");
    Ok(())
}

/// Decodes definitions, wires the ports and serializes the resolved statuses.
fn render(
    definitions_json: &str,
    post_types: Vec<String>,
    catalog_json: Option<&str>,
    pretty: bool,
) -> Result<String, StatusError> {
    let definitions = definitions_from_json_str(definitions_json)?;
    tracing::info!(count = definitions.len(), "loaded status definitions");

    let builder = ResolverBuilder::new().post_types(StaticPostTypes::new(post_types));
    let resolver = match catalog_json {
        Some(json) => {
            let catalog = CatalogTranslator::from_json_str(TEXT_DOMAIN, json)?;
            tracing::info!(entries = catalog.len(), "loaded message catalog");
            builder.translator(catalog).build()
        }
        None => builder.translator(IdentityTranslator).build(),
    };

    let resolved = resolver.resolve_all(&definitions)?;
    let output = if pretty {
        serde_json::to_string_pretty(&resolved)?
    } else {
        serde_json::to_string(&resolved)?
    };
    Ok(output)
}
