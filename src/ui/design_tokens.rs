// SPDX-License-Identifier: MPL-2.0
//! Design tokens used to draw banners.
//!
//! # Organization
//!
//! - **Palette**: category accents and neutrals
//! - **Spacing**: 4px-based spacing scale
//! - **Typography**: font sizes for title and message
//! - **Border** / **Radius** / **Shadow**: card chrome
//!
//! ```
//! use iced_banners::ui::design_tokens::{palette, spacing};
//! use iced::Color;
//!
//! let faded = Color { a: 0.5, ..palette::INFO_500 };
//! assert!(spacing::SM > spacing::XS);
//! ```

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    // Category accents
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Banner title.
    pub const BODY_LG: f32 = 16.0;

    /// Banner message.
    pub const BODY: f32 = 14.0;
}

// ============================================================================
// Border, Radius and Shadow
// ============================================================================

pub mod border {
    /// Accent border around a banner card.
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const MD: f32 = 8.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);

    assert!(typography::BODY_LG > typography::BODY);
    assert!(border::WIDTH_MD > 0.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::XS, spacing::XXS * 2.0);
        assert_eq!(spacing::MD, spacing::XS * 2.0);
    }

    #[test]
    fn accents_are_distinct() {
        let accents = [
            palette::INFO_500,
            palette::SUCCESS_500,
            palette::WARNING_500,
            palette::ERROR_500,
        ];
        for (i, a) in accents.iter().enumerate() {
            for b in &accents[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
