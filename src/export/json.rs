use serde::Serialize;

use super::{ExportOptions, Exporter};
use crate::error::Result;
use crate::tokens::{ComponentSpec, ExtractedStyles, Metadata, TokenBundle};

/// The aggregate as a JSON document of `metadata`, `tokens` and `components`.
pub struct JsonExporter;

#[derive(Serialize)]
struct Document<'a> {
    metadata: &'a Metadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    tokens: Option<&'a TokenBundle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    components: Option<&'a [ComponentSpec]>,
}

impl Exporter for JsonExporter {
    fn name(&self) -> &str {
        "JSON"
    }

    fn extension(&self) -> &str {
        "json"
    }

    fn render(&self, styles: &ExtractedStyles, options: &ExportOptions) -> Result<String> {
        let document = Document {
            metadata: &styles.metadata,
            tokens: options.include_tokens.then_some(&styles.tokens),
            components: options
                .include_components
                .then_some(styles.components.as_slice()),
        };
        let pretty = serde_json::to_string_pretty(&document)?;
        if !options.minify_output {
            return Ok(pretty);
        }
        minify(&pretty)
    }
}

/// Re-serialize a JSON document without whitespace.
pub fn minify(text: &str) -> Result<String> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    Ok(serde_json::to_string(&value)?)
}
