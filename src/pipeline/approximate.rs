//! Fixed style estimates.
//!
//! Nothing here is measured from pixels. Typography is keyed off region
//! height, padding off component type, and the spacing, border and shadow
//! tokens are constants. Kept in one place so a real measurement step can
//! replace it wholesale.

use crate::tokens::{
    BorderStyle, BorderToken, ComponentType, ShadowKind, ShadowToken, Sides, SpacingDirection,
    SpacingKind, SpacingToken, SpacingUnit, TextAlign, TypographyToken,
};

pub const FONT_STACK: &str = "Inter, Arial, sans-serif";
pub const REGION_MARGIN: u32 = 8;
const PLACEHOLDER_PADDING: f32 = 16.0;
const SPACING_SCALE: [u32; 6] = [8, 16, 24, 32, 48, 64];

/// One representative text style for a region of the given height.
pub fn estimate_typography(
    id: String,
    name: String,
    region_height: u32,
    color: String,
) -> TypographyToken {
    let font_size = match region_height {
        h if h < 30 => 12,
        h if h < 50 => 16,
        h if h > 80 => 24,
        _ => 16,
    };
    TypographyToken {
        id,
        name,
        font_family: FONT_STACK.to_string(),
        font_size,
        font_weight: if region_height >= 40 { 600 } else { 400 },
        line_height: (font_size as f32 * 1.4).round() as u32,
        letter_spacing: 0.0,
        text_align: TextAlign::Left,
        color,
    }
}

pub fn placeholder_spacing(id: String, name: String) -> SpacingToken {
    SpacingToken {
        id,
        name,
        value: PLACEHOLDER_PADDING,
        unit: SpacingUnit::Px,
        kind: SpacingKind::Padding,
        direction: Some(SpacingDirection::All),
    }
}

pub fn placeholder_border(id: String, name: String) -> BorderToken {
    BorderToken {
        id,
        name,
        width: 1,
        style: BorderStyle::Solid,
        color: "#e5e7eb".to_string(),
        radius: 8,
    }
}

pub fn placeholder_shadow(id: String, name: String) -> ShadowToken {
    ShadowToken {
        id,
        name,
        offset_x: 0,
        offset_y: 2,
        blur_radius: 4,
        spread_radius: 0,
        color: "rgba(0, 0, 0, 0.1)".to_string(),
        kind: ShadowKind::BoxShadow,
    }
}

/// Padding by component type, top/right/bottom/left.
pub fn padding_for(kind: ComponentType) -> Sides {
    match kind {
        ComponentType::Button => Sides::new(12, 24, 12, 24),
        ComponentType::Card => Sides::uniform(24),
        ComponentType::Input => Sides::new(8, 12, 8, 12),
        _ => Sides::uniform(16),
    }
}

pub fn margin() -> Sides {
    Sides::uniform(REGION_MARGIN)
}

/// Image-wide text styles. No text is read from the image.
pub fn global_typography() -> Vec<TypographyToken> {
    vec![
        TypographyToken {
            id: "heading-1".to_string(),
            name: "Heading Large".to_string(),
            font_family: FONT_STACK.to_string(),
            font_size: 32,
            font_weight: 700,
            line_height: 40,
            letter_spacing: -0.5,
            text_align: TextAlign::Left,
            color: "#1a1a1a".to_string(),
        },
        TypographyToken {
            id: "body-text".to_string(),
            name: "Body Text".to_string(),
            font_family: FONT_STACK.to_string(),
            font_size: 16,
            font_weight: 400,
            line_height: 24,
            letter_spacing: 0.0,
            text_align: TextAlign::Left,
            color: "#4a4a4a".to_string(),
        },
    ]
}

/// A conventional spacing scale, smallest first.
pub fn global_spacing() -> Vec<SpacingToken> {
    SPACING_SCALE
        .iter()
        .enumerate()
        .map(|(i, &value)| SpacingToken {
            id: format!("spacing-{i}"),
            name: format!("Space {value}"),
            value: value as f32,
            unit: SpacingUnit::Px,
            kind: SpacingKind::Padding,
            direction: None,
        })
        .collect()
}
