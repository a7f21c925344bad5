//! Command line renderer for admin panel pages
//!
//! Reads a site configuration and a raw panel from JSON files, runs them through the
//! same composition and assembly pipeline a web frontend would use, and prints the
//! resulting page as JSON (or only the composed panel content) to stdout.
//!
//! Logs go to stderr; set `RUST_LOG=debug` to see composition details.

mod adapters;
mod args;
mod schemas;

use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use admin_panel_app::{AppStateBuilder, PageInputs, RenderMode};
use admin_panel_core::traits::PanelRequest;
use admin_panel_core::types::Config;
use adapters::JsonFilePanelSource;
use args::CliArgs;
use schemas::PageInputsFile;

#[tokio::main]
async fn main() -> ExitCode {
    // stdout carries the rendered output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_ansi(false),
        )
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let args = CliArgs::parse();

    match run(&args).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Render failed: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &CliArgs) -> anyhow::Result<String> {
    let config: Config = read_json(&args.config).await?;
    let state = AppStateBuilder::new()
        .config(config)
        .production(args.production)
        .build()
        .context("invalid site configuration")?;

    let mode = if args.pjax {
        RenderMode::Pjax
    } else {
        let inputs = match &args.inputs {
            Some(path) => read_json::<PageInputsFile>(path).await?.into_inputs(),
            None => PageInputs::default(),
        };
        RenderMode::Full(inputs)
    };

    let mut options = state.default_options();
    if args.no_animation {
        options = options.without_animation();
    }

    let request = PanelRequest::new(args.panel.to_string_lossy());
    let page = state
        .render_from_source(&JsonFilePanelSource::new(), &request, mode, options)
        .await?;
    tracing::info!(
        "Rendered panel '{}' ({} bytes of content)",
        page.panel.title,
        page.panel.content.len()
    );

    if args.content_only {
        Ok(page.panel.content.into_string())
    } else {
        serde_json::to_string_pretty(&page).context("failed to serialize page")
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}
