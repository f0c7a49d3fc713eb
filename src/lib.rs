//! Reverse-engineer a style system from a UI screenshot.
//!
//! The pipeline decodes an image, quantizes its colors, segments it into
//! rectangular regions, classifies each region as a UI component and
//! assembles colors, typography, spacing, borders and shadows into one
//! [`ExtractedStyles`] aggregate. The [`export`] module turns that aggregate
//! into JSON, CSS, SCSS or a Tailwind config.
//!
//! ```rust,no_run
//! use style_extractor::{extract_styles, export, ExtractConfig, ImageSource};
//! use style_extractor::export::ExportOptions;
//!
//! let source = ImageSource::parse("screenshot.png")?;
//! let styles = extract_styles(&source, &ExtractConfig::default())?;
//! println!("{}", export::render(&styles, &ExportOptions::default())?);
//! # Ok::<(), style_extractor::ExtractError>(())
//! ```

pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod raster;
pub mod tokens;

pub use color::Color;
pub use config::{ExtractConfig, ToleranceSettings, Viewport};
pub use error::{ExtractError, Result};
pub use pipeline::extract::ImageSource;
pub use pipeline::{extract_from_pixels, extract_styles};
pub use raster::PixelBuffer;
pub use tokens::ExtractedStyles;
