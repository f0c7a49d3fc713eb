//! The token and component model produced by an extraction run.
//!
//! Every record is a plain value. Editing goes through the `with_*` /
//! `without_*` helpers on [`ExtractedStyles`], which return a new aggregate
//! and leave the receiver untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::color::{Color, HslTriple};
use crate::config::{ToleranceSettings, Viewport};

/// Anything stored in a token list, addressable by id.
pub trait Token {
    fn id(&self) -> &str;
}

macro_rules! impl_token {
    ($($ty:ty),+) => {
        $(impl Token for $ty {
            fn id(&self) -> &str {
                &self.id
            }
        })+
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorUsage {
    Background,
    Text,
    Border,
    Shadow,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorToken {
    pub id: String,
    pub name: String,
    /// Lowercase `#rrggbb`.
    pub hex: String,
    pub rgb: Color,
    pub hsl: HslTriple,
    pub usage: ColorUsage,
    /// Number of sampled pixels with this exact color.
    pub frequency: u32,
    /// Set when `hex` did not parse and `rgb`/`hsl` fell back to black.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub unparsed: bool,
}

impl ColorToken {
    pub fn from_color(
        id: impl Into<String>,
        name: impl Into<String>,
        color: Color,
        usage: ColorUsage,
        frequency: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            hex: color.to_hex(),
            rgb: color,
            hsl: color.to_hsl(),
            usage,
            frequency,
            unparsed: false,
        }
    }

    /// Rebuild a token from a hex string. Malformed hex keeps the input
    /// verbatim, derives black and sets `unparsed`.
    pub fn from_hex(
        id: impl Into<String>,
        name: impl Into<String>,
        hex: &str,
        usage: ColorUsage,
        frequency: u32,
    ) -> Self {
        let lossy = Color::from_hex_lossy(hex);
        let mut token = Self::from_color(id, name, lossy.color, usage, frequency);
        if !lossy.parsed {
            token.hex = hex.to_string();
            token.unparsed = true;
        }
        token
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyToken {
    pub id: String,
    pub name: String,
    /// Comma-separated font stack, e.g. `Inter, Arial, sans-serif`.
    pub font_family: String,
    pub font_size: u32,
    pub font_weight: u16,
    pub line_height: u32,
    pub letter_spacing: f32,
    pub text_align: TextAlign,
    pub color: String,
}

impl TypographyToken {
    /// The font stack as trimmed, ordered family names.
    pub fn font_families(&self) -> Vec<&str> {
        self.font_family.split(',').map(str::trim).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpacingUnit {
    #[default]
    #[serde(rename = "px")]
    Px,
    #[serde(rename = "rem")]
    Rem,
    #[serde(rename = "em")]
    Em,
    #[serde(rename = "%")]
    Percent,
}

impl SpacingUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            SpacingUnit::Px => "px",
            SpacingUnit::Rem => "rem",
            SpacingUnit::Em => "em",
            SpacingUnit::Percent => "%",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpacingKind {
    Padding,
    Margin,
    Gap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpacingDirection {
    Top,
    Right,
    Bottom,
    Left,
    Horizontal,
    Vertical,
    All,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpacingToken {
    pub id: String,
    pub name: String,
    pub value: f32,
    pub unit: SpacingUnit,
    #[serde(rename = "type")]
    pub kind: SpacingKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<SpacingDirection>,
}

impl SpacingToken {
    /// CSS length, e.g. `16px`.
    pub fn css_value(&self) -> String {
        format!("{}{}", self.value, self.unit.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    Solid,
    Dashed,
    Dotted,
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorderToken {
    pub id: String,
    pub name: String,
    pub width: u32,
    pub style: BorderStyle,
    pub color: String,
    pub radius: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShadowKind {
    BoxShadow,
    TextShadow,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowToken {
    pub id: String,
    pub name: String,
    pub offset_x: i32,
    pub offset_y: i32,
    pub blur_radius: u32,
    pub spread_radius: i32,
    pub color: String,
    #[serde(rename = "type")]
    pub kind: ShadowKind,
}

impl_token!(
    ColorToken,
    TypographyToken,
    SpacingToken,
    BorderToken,
    ShadowToken
);

/// The five token lists, either for a whole aggregate or scoped to one component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenBundle {
    pub colors: Vec<ColorToken>,
    pub typography: Vec<TypographyToken>,
    pub spacing: Vec<SpacingToken>,
    pub borders: Vec<BorderToken>,
    pub shadows: Vec<ShadowToken>,
}

/// A rectangle in source-image pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Widened so boxes past 65535 on both sides cannot overflow.
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentType {
    Navbar,
    Button,
    Card,
    Input,
    Accordion,
    Breadcrumb,
    Modal,
    List,
    Other,
}

impl ComponentType {
    /// Lowercase form used in ids and CSS class names.
    pub fn as_str(self) -> &'static str {
        match self {
            ComponentType::Navbar => "navbar",
            ComponentType::Button => "button",
            ComponentType::Card => "card",
            ComponentType::Input => "input",
            ComponentType::Accordion => "accordion",
            ComponentType::Breadcrumb => "breadcrumb",
            ComponentType::Modal => "modal",
            ComponentType::List => "list",
            ComponentType::Other => "other",
        }
    }
}

impl std::fmt::Display for ComponentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentState {
    Default,
    Hover,
    Active,
    Disabled,
    Focus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Sides {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Sides {
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn uniform(value: u32) -> Self {
        Self::new(value, value, value, value)
    }

    /// CSS four-value shorthand, e.g. `12px 24px 12px 24px`.
    pub fn css_shorthand(&self) -> String {
        format!(
            "{}px {}px {}px {}px",
            self.top, self.right, self.bottom, self.left
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurements {
    pub width: u32,
    pub height: u32,
    pub padding: Sides,
    pub margin: Sides,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSpec {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ComponentType,
    pub name: String,
    pub bounding_box: BoundingBox,
    /// Always starts with `Default` when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub states: Option<Vec<ComponentState>>,
    pub styles: TokenBundle,
    pub measurements: Measurements,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub extracted_at: DateTime<Utc>,
    pub image_url: String,
    pub image_dimensions: ImageDimensions,
    pub viewport: Viewport,
    pub tolerances: ToleranceSettings,
}

/// The full result of one extraction run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedStyles {
    pub id: String,
    pub source_image: String,
    pub components: Vec<ComponentSpec>,
    pub tokens: TokenBundle,
    pub metadata: Metadata,
}

fn replace_by_id<T: Token + Clone>(items: &[T], replacement: T) -> Vec<T> {
    items
        .iter()
        .map(|item| {
            if item.id() == replacement.id() {
                replacement.clone()
            } else {
                item.clone()
            }
        })
        .collect()
}

fn remove_by_id<T: Token + Clone>(items: &[T], id: &str) -> Vec<T> {
    items
        .iter()
        .filter(|item| item.id() != id)
        .cloned()
        .collect()
}

impl ExtractedStyles {
    /// Copy with the color token of the same id replaced.
    pub fn with_color(&self, token: ColorToken) -> Self {
        let mut next = self.clone();
        next.tokens.colors = replace_by_id(&self.tokens.colors, token);
        next
    }

    pub fn without_color(&self, id: &str) -> Self {
        let mut next = self.clone();
        next.tokens.colors = remove_by_id(&self.tokens.colors, id);
        next
    }

    pub fn with_typography(&self, token: TypographyToken) -> Self {
        let mut next = self.clone();
        next.tokens.typography = replace_by_id(&self.tokens.typography, token);
        next
    }

    pub fn without_typography(&self, id: &str) -> Self {
        let mut next = self.clone();
        next.tokens.typography = remove_by_id(&self.tokens.typography, id);
        next
    }

    pub fn with_component(&self, component: ComponentSpec) -> Self {
        let mut next = self.clone();
        next.components = self
            .components
            .iter()
            .map(|c| {
                if c.id == component.id {
                    component.clone()
                } else {
                    c.clone()
                }
            })
            .collect();
        next
    }

    pub fn without_component(&self, id: &str) -> Self {
        let mut next = self.clone();
        next.components.retain(|c| c.id != id);
        next
    }
}
