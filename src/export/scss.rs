use super::{slugify, ExportOptions, Exporter};
use crate::error::Result;
use crate::tokens::ExtractedStyles;

/// SCSS variables and maps plus one rule per component.
pub struct ScssExporter;

impl Exporter for ScssExporter {
    fn name(&self) -> &str {
        "SCSS"
    }

    fn extension(&self) -> &str {
        "scss"
    }

    fn render(&self, styles: &ExtractedStyles, options: &ExportOptions) -> Result<String> {
        let mut scss = String::new();

        if options.include_tokens {
            scss.push_str("// Color tokens\n");
            for color in &styles.tokens.colors {
                let slug = slugify(&color.name);
                scss.push_str(&format!("$color-{slug}: {};\n", color.hex));
            }
            scss.push('\n');

            scss.push_str("// Typography tokens\n");
            for typo in &styles.tokens.typography {
                scss.push_str(&format!("$font-{}: (\n", slugify(&typo.name)));
                scss.push_str(&format!("  family: {},\n", typo.font_family));
                scss.push_str(&format!("  size: {}px,\n", typo.font_size));
                scss.push_str(&format!("  weight: {}\n", typo.font_weight));
                scss.push_str(");\n");
            }
            scss.push('\n');

            scss.push_str("// Spacing tokens\n");
            for spacing in &styles.tokens.spacing {
                scss.push_str(&format!(
                    "$spacing-{}: {};\n",
                    slugify(&spacing.name),
                    spacing.css_value()
                ));
            }
            scss.push('\n');
        }

        if options.include_components {
            for component in &styles.components {
                let m = &component.measurements;
                scss.push_str(&format!(
                    ".component-{}-{} {{\n",
                    component.kind, component.id
                ));
                scss.push_str(&format!("  width: {}px;\n", m.width));
                scss.push_str(&format!("  height: {}px;\n", m.height));
                scss.push_str(&format!("  padding: {};\n", m.padding.css_shorthand()));
                if let Some(color) = component.styles.colors.first() {
                    let slug = slugify(&color.name);
                    // Variables only exist when the token block was emitted.
                    let declared = options.include_tokens
                        && styles.tokens.colors.iter().any(|c| slugify(&c.name) == slug);
                    if declared {
                        scss.push_str(&format!("  background-color: $color-{slug};\n"));
                    } else {
                        scss.push_str(&format!("  background-color: {};\n", color.hex));
                    }
                }
                scss.push_str("}\n\n");
            }
        }

        Ok(scss)
    }
}
