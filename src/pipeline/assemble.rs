use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use tracing::info;

use crate::config::ExtractConfig;
use crate::tokens::{ComponentSpec, ExtractedStyles, ImageDimensions, Metadata, Token, TokenBundle};

static EXTRACTION_SEQ: AtomicU64 = AtomicU64::new(0);

/// Merge image-wide tokens with every component's own tokens into one
/// aggregate. Token lists keep the first record seen for each id.
pub fn assemble(
    source_ref: &str,
    dimensions: ImageDimensions,
    global: TokenBundle,
    components: Vec<ComponentSpec>,
    config: &ExtractConfig,
) -> ExtractedStyles {
    let mut tokens = global;
    for component in &components {
        let styles = &component.styles;
        tokens.colors.extend(styles.colors.iter().cloned());
        tokens.typography.extend(styles.typography.iter().cloned());
        tokens.spacing.extend(styles.spacing.iter().cloned());
        tokens.borders.extend(styles.borders.iter().cloned());
        tokens.shadows.extend(styles.shadows.iter().cloned());
    }
    let tokens = TokenBundle {
        colors: dedup_by_id(tokens.colors),
        typography: dedup_by_id(tokens.typography),
        spacing: dedup_by_id(tokens.spacing),
        borders: dedup_by_id(tokens.borders),
        shadows: dedup_by_id(tokens.shadows),
    };

    let extracted_at = Utc::now();
    let id = format!(
        "extraction-{}-{}",
        extracted_at.timestamp_millis(),
        EXTRACTION_SEQ.fetch_add(1, Ordering::Relaxed)
    );
    info!(
        %id,
        components = components.len(),
        colors = tokens.colors.len(),
        typography = tokens.typography.len(),
        "assembled styles"
    );

    ExtractedStyles {
        id,
        source_image: source_ref.to_string(),
        components,
        tokens,
        metadata: Metadata {
            extracted_at,
            image_url: source_ref.to_string(),
            image_dimensions: dimensions,
            viewport: config.viewport,
            tolerances: config.tolerances,
        },
    }
}

fn dedup_by_id<T: Token>(items: Vec<T>) -> Vec<T> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.id().to_string()))
        .collect()
}
