use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use style_extractor::cli::Args;
use style_extractor::export::{self, ExportOptions};
use style_extractor::{extract_styles, ExtractConfig, ImageSource};

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = build_config(&args)?;
    let source = ImageSource::parse(&args.image)?;
    let styles = extract_styles(&source, &config)
        .with_context(|| format!("failed to extract styles from {}", args.image))?;

    let options = ExportOptions {
        format: args.format,
        include_tokens: !args.no_tokens,
        include_components: !args.no_components,
        minify_output: args.minify,
    };
    let exporter = export::exporter_for(options.format);

    match &args.output {
        Some(path) => {
            exporter
                .write_to(&styles, &options, path)
                .with_context(|| {
                    format!("failed to write {} to {}", exporter.name(), path.display())
                })?;
            tracing::info!(path = %path.display(), "wrote output");
        }
        None => println!("{}", exporter.render(&styles, &options)?),
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Config file values, then command-line overrides.
fn build_config(args: &Args) -> Result<ExtractConfig> {
    let mut config = match &args.config {
        Some(path) => ExtractConfig::from_json_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ExtractConfig::default(),
    };

    let t = &mut config.tolerances;
    if let Some(v) = args.color_tolerance {
        t.color = v;
    }
    if let Some(v) = args.spacing_tolerance {
        t.spacing = v;
    }
    if let Some(v) = args.typography_tolerance {
        t.typography = v;
    }
    if let Some(v) = args.radius_tolerance {
        t.border_radius = v;
    }
    if let Some(viewport) = args.viewport {
        config.viewport = viewport;
    }
    config.tolerances.validate()?;
    Ok(config)
}
