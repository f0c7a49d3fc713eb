use std::path::PathBuf;

use clap::Parser;

use crate::config::Viewport;
use crate::export::Format;

/// Extract design tokens and component styles from a UI screenshot.
#[derive(Parser, Debug)]
#[command(name = "style-extractor", version, about)]
pub struct Args {
    /// Image path, file:// URL or base64 data: URL
    pub image: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    pub format: Format,

    /// Write output to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Leave design tokens out of the output
    #[arg(long)]
    pub no_tokens: bool,

    /// Leave component rules out of the output
    #[arg(long)]
    pub no_components: bool,

    /// Strip whitespace from JSON output
    #[arg(long)]
    pub minify: bool,

    /// Viewport class recorded in the metadata
    #[arg(long, value_enum)]
    pub viewport: Option<Viewport>,

    /// JSON file with tolerances and viewport
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Color difference tolerance
    #[arg(long)]
    pub color_tolerance: Option<f32>,

    /// Spacing difference tolerance in pixels
    #[arg(long)]
    pub spacing_tolerance: Option<f32>,

    /// Font size difference tolerance
    #[arg(long)]
    pub typography_tolerance: Option<f32>,

    /// Border radius difference tolerance
    #[arg(long)]
    pub radius_tolerance: Option<f32>,

    /// Log pipeline progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
