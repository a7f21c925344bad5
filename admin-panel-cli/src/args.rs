//! Command line arguments

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
#[command(name = "admin-panel-render")]
#[command(about = "Render an admin panel page from JSON inputs", long_about = None)]
#[command(version)]
pub struct CliArgs {
    /// Site configuration (JSON)
    #[arg(long, value_name = "FILE")]
    pub config: PathBuf,

    /// Raw panel to render (JSON)
    #[arg(long, value_name = "FILE")]
    pub panel: PathBuf,

    /// User, menu, assets and nav buttons of a full page (JSON)
    #[arg(long, value_name = "FILE", conflicts_with = "pjax")]
    pub inputs: Option<PathBuf>,

    /// Render only the pjax fragment
    #[arg(long)]
    pub pjax: bool,

    /// Minify the composed panel content
    #[arg(long)]
    pub production: bool,

    /// Skip the configured entrance animation
    #[arg(long)]
    pub no_animation: bool,

    /// Print the composed panel content instead of the page JSON
    #[arg(long)]
    pub content_only: bool,
}
