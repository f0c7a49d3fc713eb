use crate::tokens::{BoundingBox, ColorToken, ComponentState, ComponentType};

/// Map a region's geometry to a component type. The rules are checked in
/// order and the first match wins.
///
/// The 60px height bounds on buttons and inputs are inclusive, as is the
/// 2:1 lower aspect bound on buttons.
pub fn classify(bbox: &BoundingBox) -> ComponentType {
    if bbox.width == 0 || bbox.height == 0 {
        return ComponentType::Other;
    }
    let ratio = bbox.aspect_ratio();
    let height = bbox.height;
    let area = bbox.area();

    if bbox.y < 100 && ratio > 5.0 && height < 80 {
        ComponentType::Navbar
    } else if (2.0..8.0).contains(&ratio) && height <= 60 && area < 15_000 {
        ComponentType::Button
    } else if ratio > 0.8 && ratio < 4.0 && height > 80 && area > 10_000 {
        ComponentType::Card
    } else if ratio > 4.0 && height <= 60 {
        ComponentType::Input
    } else if ratio > 1.5 && ratio < 6.0 && height > 40 && height < 100 {
        ComponentType::Accordion
    } else if ratio > 6.0 && height < 40 {
        ComponentType::Breadcrumb
    } else if ratio > 0.5 && ratio < 2.0 && area > 30_000 {
        ComponentType::Modal
    } else if ratio < 1.5 && height > 150 {
        ComponentType::List
    } else {
        ComponentType::Other
    }
}

/// Guess which interaction states a component shows from its region palette.
///
/// A mix of light and dark colors with more than two distinct colors
/// suggests hover (and active, past three); any gray suggests disabled.
pub fn infer_states(colors: &[ColorToken]) -> Vec<ComponentState> {
    let mut states = vec![ComponentState::Default];

    let has_light = colors.iter().any(|c| c.rgb.brightness() > 128.0);
    let has_dark = colors.iter().any(|c| c.rgb.brightness() <= 128.0);
    if has_light && has_dark && colors.len() > 2 {
        states.push(ComponentState::Hover);
        if colors.len() > 3 {
            states.push(ComponentState::Active);
        }
    }

    if colors.iter().any(|c| c.rgb.is_gray()) {
        states.push(ComponentState::Disabled);
    }

    states
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::tokens::ColorUsage;

    fn bbox(x: u32, y: u32, width: u32, height: u32) -> BoundingBox {
        BoundingBox {
            x,
            y,
            width,
            height,
        }
    }

    fn token(r: u8, g: u8, b: u8) -> ColorToken {
        ColorToken::from_color("c", "c", Color::new(r, g, b), ColorUsage::Other, 1)
    }

    #[test]
    fn wide_short_bar_near_top_is_navbar() {
        assert_eq!(classify(&bbox(0, 0, 800, 60)), ComponentType::Navbar);
    }

    #[test]
    fn same_bar_lower_down_is_input() {
        assert_eq!(classify(&bbox(0, 150, 800, 60)), ComponentType::Input);
    }

    #[test]
    fn button_boundaries() {
        assert_eq!(classify(&bbox(200, 200, 118, 59)), ComponentType::Button);
        assert_eq!(classify(&bbox(200, 200, 120, 60)), ComponentType::Button);
        assert_ne!(classify(&bbox(200, 200, 122, 61)), ComponentType::Button);
        // 8:1 is past the button band
        assert_eq!(classify(&bbox(200, 200, 240, 30)), ComponentType::Input);
    }

    #[test]
    fn button_area_cap() {
        // ratio 2.5, height 60, area 9000 vs a same-shape box that is too big
        assert_eq!(classify(&bbox(200, 200, 150, 60)), ComponentType::Button);
        assert_ne!(classify(&bbox(200, 200, 260, 104)), ComponentType::Button);
    }

    #[test]
    fn card_modal_list() {
        assert_eq!(classify(&bbox(50, 120, 300, 150)), ComponentType::Card);
        // card rule catches most large boxes first; modal needs ratio <= 0.8
        assert_eq!(classify(&bbox(50, 120, 180, 240)), ComponentType::Modal);
        assert_eq!(classify(&bbox(50, 120, 100, 400)), ComponentType::List);
    }

    #[test]
    fn accordion_band_and_square_fallthrough() {
        assert_eq!(classify(&bbox(50, 300, 300, 70)), ComponentType::Accordion);
        assert_eq!(classify(&bbox(50, 300, 70, 70)), ComponentType::Other);
    }

    #[test]
    fn degenerate_boxes_are_other() {
        assert_eq!(classify(&bbox(0, 0, 0, 10)), ComponentType::Other);
        assert_eq!(classify(&bbox(0, 0, 10, 0)), ComponentType::Other);
    }

    #[test]
    fn huge_boxes_do_not_overflow() {
        assert_eq!(classify(&bbox(0, 0, 70_000, 70_000)), ComponentType::Card);
        let tall = bbox(0, 500, 84_000, 140_000);
        assert_eq!(classify(&tall), ComponentType::Modal);
    }

    #[test]
    fn classification_is_deterministic() {
        let b = bbox(12, 340, 250, 30);
        assert_eq!(classify(&b), classify(&b));
    }

    #[test]
    fn states_always_start_with_default() {
        assert_eq!(infer_states(&[]), vec![ComponentState::Default]);
    }

    #[test]
    fn two_colors_are_not_enough_for_hover() {
        let colors = [token(250, 60, 60), token(20, 20, 120)];
        assert_eq!(infer_states(&colors), vec![ComponentState::Default]);
    }

    #[test]
    fn light_dark_mix_adds_hover_and_active() {
        let three = [token(250, 200, 60), token(20, 20, 120), token(200, 40, 40)];
        assert_eq!(
            infer_states(&three),
            vec![ComponentState::Default, ComponentState::Hover]
        );

        let four = [
            token(250, 200, 60),
            token(20, 20, 120),
            token(200, 40, 40),
            token(40, 200, 40),
        ];
        assert_eq!(
            infer_states(&four),
            vec![
                ComponentState::Default,
                ComponentState::Hover,
                ComponentState::Active
            ]
        );
    }

    #[test]
    fn all_light_colors_add_no_hover() {
        let colors = [
            token(250, 200, 60),
            token(240, 240, 100),
            token(200, 250, 150),
        ];
        assert_eq!(infer_states(&colors), vec![ComponentState::Default]);
    }

    #[test]
    fn gray_adds_disabled() {
        let colors = [token(128, 128, 128)];
        assert_eq!(
            infer_states(&colors),
            vec![ComponentState::Default, ComponentState::Disabled]
        );
    }
}
