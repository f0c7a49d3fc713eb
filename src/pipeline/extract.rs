use std::collections::HashMap;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use tracing::debug;

use crate::color::Color;
use crate::error::{ExtractError, Result};
use crate::raster::PixelBuffer;
use crate::tokens::{BoundingBox, ColorToken, ColorUsage};

/// Palette size for a whole image.
pub const PALETTE_LIMIT: usize = 20;
/// Palette size for a single component region.
pub const REGION_PALETTE_LIMIT: usize = 5;

const SAMPLE_TARGET: usize = 10_000;
const MIN_ALPHA: u8 = 128;
const SUPPORTED_FORMATS: &str = "PNG, JPEG, WebP, BMP, TIFF, GIF";

/// Where an image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Path(PathBuf),
    /// Encoded image bytes already in memory, with a label for metadata.
    Bytes { data: Vec<u8>, reference: String },
    /// A `data:<mime>;base64,<payload>` URL.
    DataUrl(String),
}

impl ImageSource {
    /// Interpret a command-line style reference: `data:` URLs, `file://`
    /// URLs and bare paths.
    pub fn parse(reference: &str) -> Result<Self> {
        if reference.starts_with("data:") {
            return Ok(Self::DataUrl(reference.to_string()));
        }
        if let Some(path) = reference.strip_prefix("file://") {
            return Ok(Self::Path(PathBuf::from(path)));
        }
        if let Some((scheme, _)) = reference.split_once("://") {
            let reason = format!("unsupported URL scheme '{scheme}'");
            return Err(ExtractError::decode(reference, reason));
        }
        Ok(Self::Path(PathBuf::from(reference)))
    }

    /// Human-readable reference recorded in the extraction metadata.
    pub fn reference(&self) -> String {
        match self {
            ImageSource::Path(path) => path.display().to_string(),
            ImageSource::Bytes { reference, .. } => reference.clone(),
            ImageSource::DataUrl(url) => url.clone(),
        }
    }
}

/// A color found in the image with its sampled pixel count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractedColor {
    pub color: Color,
    pub frequency: u32,
}

/// Decode an image source into an RGBA pixel buffer at its native size.
pub fn load_and_prepare(source: &ImageSource) -> Result<PixelBuffer> {
    let img = match source {
        ImageSource::Path(path) => open_path(path)?,
        ImageSource::Bytes { data, reference } => decode_bytes(data, reference)?,
        ImageSource::DataUrl(url) => decode_bytes(&decode_data_url(url)?, &short_ref(url))?,
    };

    debug!(width = img.width(), height = img.height(), "decoded image");
    PixelBuffer::try_from(img.to_rgba8())
}

fn open_path(path: &Path) -> Result<image::DynamicImage> {
    image::open(path).map_err(|e| {
        let reason = if !path.exists() {
            "file not found".to_string()
        } else {
            format!("unsupported or corrupt image ({e}). Supported formats: {SUPPORTED_FORMATS}")
        };
        ExtractError::decode(path.display().to_string(), reason)
    })
}

fn decode_bytes(data: &[u8], source_ref: &str) -> Result<image::DynamicImage> {
    image::load_from_memory(data).map_err(|e| ExtractError::decode(source_ref, e))
}

fn decode_data_url(url: &str) -> Result<Vec<u8>> {
    let rest = url.strip_prefix("data:").unwrap_or(url);
    let Some((header, payload)) = rest.split_once(',') else {
        return Err(ExtractError::decode(
            short_ref(url),
            "data URL has no payload",
        ));
    };
    if !header.ends_with(";base64") {
        return Err(ExtractError::decode(
            short_ref(url),
            "only base64-encoded data URLs are supported",
        ));
    }
    BASE64
        .decode(payload.trim())
        .map_err(|e| ExtractError::decode(short_ref(url), e))
}

/// Data URLs can be megabytes long; keep error messages readable.
fn short_ref(url: &str) -> String {
    match url.char_indices().nth(48) {
        Some((i, _)) => format!("{}…", &url[..i]),
        None => url.to_string(),
    }
}

/// Pixel step that keeps the number of visited pixels around 10,000.
pub fn sample_stride(pixel_count: usize) -> usize {
    (pixel_count / SAMPLE_TARGET).max(1)
}

/// Count exact colors over every `stride`-th pixel, skipping pixels with
/// alpha below 128, and return the `limit` most frequent.
///
/// Sorted by frequency descending; ties are ordered by ascending hex so
/// repeated runs give identical output.
pub fn extract_colors(
    pixels: &PixelBuffer,
    limit: usize,
    stride: Option<usize>,
) -> Vec<ExtractedColor> {
    let stride = stride
        .unwrap_or_else(|| sample_stride(pixels.pixel_count()))
        .max(1);

    let mut counts: HashMap<Color, u32> = HashMap::new();
    for px in pixels.data().chunks_exact(4).step_by(stride) {
        if px[3] < MIN_ALPHA {
            continue;
        }
        *counts.entry(Color::new(px[0], px[1], px[2])).or_insert(0) += 1;
    }

    let mut colors: Vec<ExtractedColor> = counts
        .into_iter()
        .map(|(color, frequency)| ExtractedColor { color, frequency })
        .collect();
    colors.sort_by(|a, b| {
        b.frequency
            .cmp(&a.frequency)
            .then_with(|| a.color.cmp(&b.color))
    });
    colors.truncate(limit);

    debug!(stride, distinct = colors.len(), "quantized colors");
    colors
}

/// The global palette as color tokens with ids `color-<rank>`.
pub fn extract_palette(pixels: &PixelBuffer) -> Vec<ColorToken> {
    to_tokens(&extract_colors(pixels, PALETTE_LIMIT, None), "color")
}

/// Up to five tokens for the part of `bbox` inside the image, with ids
/// `<id_prefix>-color-<rank>`.
pub fn extract_region_palette(
    pixels: &PixelBuffer,
    bbox: &BoundingBox,
    id_prefix: &str,
) -> Vec<ColorToken> {
    match pixels.crop(bbox) {
        Some(region) => to_tokens(
            &extract_colors(&region, REGION_PALETTE_LIMIT, None),
            &format!("{id_prefix}-color"),
        ),
        None => Vec::new(),
    }
}

fn to_tokens(colors: &[ExtractedColor], id_prefix: &str) -> Vec<ColorToken> {
    colors
        .iter()
        .enumerate()
        .map(|(i, c)| {
            ColorToken::from_color(
                format!("{id_prefix}-{i}"),
                color_name(c.color),
                c.color,
                infer_usage(c.color, c.frequency),
                c.frequency,
            )
        })
        .collect()
}

/// Human-friendly name: canonical names for pure colors, a gray ramp for
/// desaturated ones, otherwise `<hue>-<shade>`.
pub fn color_name(color: Color) -> String {
    let canonical = match (color.r, color.g, color.b) {
        (255, 255, 255) => Some("white"),
        (0, 0, 0) => Some("black"),
        (255, 0, 0) => Some("red"),
        (0, 255, 0) => Some("green"),
        (0, 0, 255) => Some("blue"),
        (255, 255, 0) => Some("yellow"),
        (255, 0, 255) => Some("magenta"),
        (0, 255, 255) => Some("cyan"),
        _ => None,
    };
    if let Some(name) = canonical {
        return name.to_string();
    }

    let hsl = color.to_hsl();
    if hsl.s < 10 {
        let shade = match hsl.l {
            l if l > 90 => "50",
            l if l > 70 => "200",
            l if l > 50 => "400",
            l if l > 30 => "600",
            l if l > 10 => "800",
            _ => "900",
        };
        return format!("gray-{shade}");
    }

    const HUES: [&str; 6] = ["red", "orange", "yellow", "green", "blue", "purple"];
    // 330° and up rounds to a seventh sextant, which has no hue name.
    let sextant = (hsl.h as f32 / 60.0).round() as usize;
    let hue = HUES.get(sextant).copied().unwrap_or("gray");
    let shade = match hsl.l {
        l if l > 70 => "200",
        l if l > 50 => "500",
        l if l > 30 => "700",
        _ => "900",
    };
    format!("{hue}-{shade}")
}

/// Guess what a color is used for. First matching rule wins.
pub fn infer_usage(color: Color, frequency: u32) -> ColorUsage {
    let brightness = color.brightness();
    if frequency > 1000 && brightness > 200.0 {
        ColorUsage::Background
    } else if brightness < 100.0 {
        ColorUsage::Text
    } else if frequency > 100 && frequency < 500 {
        ColorUsage::Border
    } else {
        ColorUsage::Other
    }
}
