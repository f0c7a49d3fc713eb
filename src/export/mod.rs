//! Serializers that turn an [`ExtractedStyles`] aggregate into text.

pub mod css;
pub mod json;
pub mod scss;
pub mod tailwind;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::tokens::ExtractedStyles;

pub use css::CssExporter;
pub use json::JsonExporter;
pub use scss::ScssExporter;
pub use tailwind::TailwindExporter;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Json,
    Css,
    Scss,
    Tailwind,
}

/// What to export and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportOptions {
    pub format: Format,
    pub include_tokens: bool,
    pub include_components: bool,
    /// Only honored by the JSON exporter.
    pub minify_output: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: Format::Json,
            include_tokens: true,
            include_components: true,
            minify_output: false,
        }
    }
}

/// A text serialization of extracted styles.
pub trait Exporter {
    /// Human-readable format name.
    fn name(&self) -> &str;

    /// File extension without the dot.
    fn extension(&self) -> &str;

    fn render(&self, styles: &ExtractedStyles, options: &ExportOptions) -> Result<String>;

    /// File name the output is saved under when none is given.
    fn default_file_name(&self) -> String {
        format!("style-tokens.{}", self.extension())
    }

    fn write_to(
        &self,
        styles: &ExtractedStyles,
        options: &ExportOptions,
        path: &Path,
    ) -> Result<()> {
        let content = self.render(styles, options)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

pub fn exporter_for(format: Format) -> &'static dyn Exporter {
    match format {
        Format::Json => &JsonExporter,
        Format::Css => &CssExporter,
        Format::Scss => &ScssExporter,
        Format::Tailwind => &TailwindExporter,
    }
}

/// Render `styles` in the format named by `options`.
pub fn render(styles: &ExtractedStyles, options: &ExportOptions) -> Result<String> {
    exporter_for(options.format).render(styles, options)
}

/// Lowercase a token name and collapse each whitespace run into one hyphen.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_space = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
        } else {
            slug.extend(ch.to_lowercase());
            in_space = false;
        }
    }
    slug
}
