use tracing::debug;

use crate::pipeline::approximate;
use crate::pipeline::classify::{classify, infer_states};
use crate::pipeline::extract::extract_region_palette;
use crate::raster::PixelBuffer;
use crate::tokens::{BoundingBox, ColorToken, ComponentSpec, Measurements, TokenBundle};

/// Classify a detected region and collect its styles.
///
/// Colors are sampled from the region itself; everything else comes from
/// the [`approximate`] layer.
pub fn sample_component(pixels: &PixelBuffer, bbox: BoundingBox, index: usize) -> ComponentSpec {
    let id = format!("component-{index}");
    let name = format!("Component {}", index + 1);

    let kind = classify(&bbox);
    let colors = extract_region_palette(pixels, &bbox, &id);
    let states = infer_states(&colors);
    debug!(
        %id,
        %kind,
        ?bbox,
        colors = colors.len(),
        "sampled component"
    );

    let typography = approximate::estimate_typography(
        format!("{id}-text"),
        format!("{name} Text"),
        bbox.height,
        text_color(&colors),
    );
    let styles = TokenBundle {
        typography: vec![typography],
        spacing: vec![approximate::placeholder_spacing(
            format!("{id}-padding"),
            format!("{name} Padding"),
        )],
        borders: vec![approximate::placeholder_border(
            format!("{id}-border"),
            format!("{name} Border"),
        )],
        shadows: vec![approximate::placeholder_shadow(
            format!("{id}-shadow"),
            format!("{name} Shadow"),
        )],
        colors,
    };

    ComponentSpec {
        id,
        kind,
        name,
        bounding_box: bbox,
        states: Some(states),
        styles,
        measurements: Measurements {
            width: bbox.width,
            height: bbox.height,
            padding: approximate::padding_for(kind),
            margin: approximate::margin(),
        },
    }
}

/// Darkest sampled color, or black when the region had no opaque pixels.
fn text_color(colors: &[ColorToken]) -> String {
    colors
        .iter()
        .min_by(|a, b| a.rgb.brightness().total_cmp(&b.rgb.brightness()))
        .map(|c| c.hex.clone())
        .unwrap_or_else(|| "#000000".to_string())
}
