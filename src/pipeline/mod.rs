//! The extraction pipeline: decode, quantize, segment, classify, sample,
//! assemble. Every stage is a plain function of the previous stage's output.

pub mod approximate;
pub mod assemble;
pub mod classify;
pub mod detect;
pub mod extract;
pub mod sample;

use tracing::info;

use crate::config::ExtractConfig;
use crate::error::Result;
use crate::raster::PixelBuffer;
use crate::tokens::{ComponentSpec, ExtractedStyles, ImageDimensions, TokenBundle};

use self::extract::ImageSource;

/// Decode `source` and extract its styles.
pub fn extract_styles(source: &ImageSource, config: &ExtractConfig) -> Result<ExtractedStyles> {
    config.tolerances.validate()?;
    let pixels = extract::load_and_prepare(source)?;
    extract_from_pixels(&pixels, &source.reference(), config)
}

/// Extract styles from an already-decoded raster.
pub fn extract_from_pixels(
    pixels: &PixelBuffer,
    source_ref: &str,
    config: &ExtractConfig,
) -> Result<ExtractedStyles> {
    config.tolerances.validate()?;
    info!(
        width = pixels.width(),
        height = pixels.height(),
        "extracting styles"
    );

    let palette = extract::extract_palette(pixels);
    let edges = detect::detect_edges(pixels);
    let components: Vec<ComponentSpec> = detect::detect_regions(&edges)
        .into_iter()
        .enumerate()
        .map(|(i, bbox)| sample::sample_component(pixels, bbox, i))
        .collect();

    let global = TokenBundle {
        colors: palette,
        typography: approximate::global_typography(),
        spacing: approximate::global_spacing(),
        borders: Vec::new(),
        shadows: Vec::new(),
    };
    let dimensions = ImageDimensions {
        width: pixels.width(),
        height: pixels.height(),
    };
    let styles = assemble::assemble(source_ref, dimensions, global, components, config);
    Ok(styles)
}
