use serde_json::{Map, Value};

use super::{slugify, ExportOptions, Exporter};
use crate::error::Result;
use crate::tokens::ExtractedStyles;

/// A `tailwind.config.js` module extending the theme with the tokens.
pub struct TailwindExporter;

impl Exporter for TailwindExporter {
    fn name(&self) -> &str {
        "Tailwind"
    }

    fn extension(&self) -> &str {
        "js"
    }

    fn render(&self, styles: &ExtractedStyles, options: &ExportOptions) -> Result<String> {
        let mut extend = Map::new();

        if options.include_tokens {
            let tokens = &styles.tokens;

            let colors: Map<String, Value> = tokens
                .colors
                .iter()
                .map(|c| (slugify(&c.name), Value::from(c.hex.as_str())))
                .collect();

            let mut font_family = Map::new();
            let mut font_size = Map::new();
            for typo in &tokens.typography {
                let name = slugify(&typo.name);
                font_family.insert(name.clone(), Value::from(typo.font_families()));
                font_size.insert(name, Value::from(format!("{}px", typo.font_size)));
            }

            let spacing: Map<String, Value> = tokens
                .spacing
                .iter()
                .map(|s| (slugify(&s.name), Value::from(s.css_value())))
                .collect();

            extend.insert("colors".into(), Value::Object(colors));
            extend.insert("fontFamily".into(), Value::Object(font_family));
            extend.insert("fontSize".into(), Value::Object(font_size));
            extend.insert("spacing".into(), Value::Object(spacing));
        }

        let mut theme = Map::new();
        theme.insert("extend".into(), Value::Object(extend));
        let mut config = Map::new();
        config.insert("theme".into(), Value::Object(theme));

        let body = serde_json::to_string_pretty(&Value::Object(config))?;
        Ok(format!("module.exports = {body};"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{fixtures, Format};

    fn render(include_tokens: bool) -> String {
        TailwindExporter
            .render(
                &fixtures::styles(),
                &fixtures::options(Format::Tailwind, include_tokens, true),
            )
            .unwrap()
    }

    fn config_object(out: &str) -> Value {
        let body = out
            .strip_prefix("module.exports = ")
            .and_then(|s| s.strip_suffix(';'))
            .unwrap();
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn extends_theme_with_tokens() {
        let config = config_object(&render(true));
        let extend = &config["theme"]["extend"];
        assert_eq!(extend["colors"]["primary-blue"], "#3b82f6");
        assert_eq!(
            extend["fontFamily"]["heading-large"],
            serde_json::json!(["Inter", "Arial", "sans-serif"])
        );
        assert_eq!(extend["fontSize"]["body-text"], "16px");
        assert_eq!(extend["spacing"]["space-16"], "16px");
    }

    #[test]
    fn keys_keep_insertion_order() {
        let config = config_object(&render(true));
        let keys: Vec<&String> = config["theme"]["extend"].as_object().unwrap().keys().collect();
        assert_eq!(keys, ["colors", "fontFamily", "fontSize", "spacing"]);
    }

    #[test]
    fn without_tokens_extend_is_empty() {
        assert_eq!(
            render(false),
            "module.exports = {\n  \"theme\": {\n    \"extend\": {}\n  }\n};"
        );
    }
}
