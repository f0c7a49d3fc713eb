use super::{slugify, ExportOptions, Exporter};
use crate::error::Result;
use crate::tokens::ExtractedStyles;

/// CSS custom properties on `:root` plus one rule per component.
pub struct CssExporter;

impl Exporter for CssExporter {
    fn name(&self) -> &str {
        "CSS"
    }

    fn extension(&self) -> &str {
        "css"
    }

    fn render(&self, styles: &ExtractedStyles, options: &ExportOptions) -> Result<String> {
        let mut css = String::new();

        if options.include_tokens {
            css.push_str(":root {\n");
            for color in &styles.tokens.colors {
                let slug = slugify(&color.name);
                css.push_str(&format!("  --color-{slug}: {};\n", color.hex));
            }
            for typo in &styles.tokens.typography {
                let slug = slugify(&typo.name);
                css.push_str(&format!("  --font-{slug}-family: {};\n", typo.font_family));
                css.push_str(&format!("  --font-{slug}-size: {}px;\n", typo.font_size));
                css.push_str(&format!("  --font-{slug}-weight: {};\n", typo.font_weight));
            }
            for spacing in &styles.tokens.spacing {
                css.push_str(&format!(
                    "  --spacing-{}: {};\n",
                    slugify(&spacing.name),
                    spacing.css_value()
                ));
            }
            css.push_str("}\n\n");
        }

        if options.include_components {
            for component in &styles.components {
                let m = &component.measurements;
                css.push_str(&format!(
                    ".component-{}-{} {{\n",
                    component.kind, component.id
                ));
                css.push_str(&format!("  width: {}px;\n", m.width));
                css.push_str(&format!("  height: {}px;\n", m.height));
                css.push_str(&format!("  padding: {};\n", m.padding.css_shorthand()));
                if let Some(color) = component.styles.colors.first() {
                    css.push_str(&format!("  background-color: {};\n", color.hex));
                }
                css.push_str("}\n\n");
            }
        }

        Ok(css)
    }
}
