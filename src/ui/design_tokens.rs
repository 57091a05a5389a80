// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by every widget style.
//!
//! - **Palette**: base colors (indigo brand, cyan accent, slate surfaces)
//! - **Opacity**, **Spacing** (8px grid), **Sizing**, **Typography**
//! - **Border**, **Radius**, **Shadow**
//!
//! ```
//! use scene_montage::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let backdrop = Color { a: opacity::OVERLAY_STRONG, ..palette::BLACK };
//! let padding = spacing::MD;
//! # let _ = (backdrop, padding);
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Slate surfaces
    pub const SLATE_900: Color = Color::from_rgb(0.059, 0.090, 0.165);
    pub const SLATE_700: Color = Color::from_rgb(0.200, 0.255, 0.333);
    pub const SLATE_500: Color = Color::from_rgb(0.392, 0.455, 0.545);
    pub const SLATE_400: Color = Color::from_rgb(0.580, 0.639, 0.722);
    pub const SLATE_200: Color = Color::from_rgb(0.886, 0.910, 0.941);
    pub const SLATE_100: Color = Color::from_rgb(0.945, 0.961, 0.976);

    // Brand (indigo)
    pub const PRIMARY_400: Color = Color::from_rgb(0.506, 0.549, 0.973);
    pub const PRIMARY_500: Color = Color::from_rgb(0.388, 0.400, 0.945);
    pub const PRIMARY_600: Color = Color::from_rgb(0.310, 0.275, 0.898);
    pub const PRIMARY_700: Color = Color::from_rgb(0.263, 0.220, 0.792);

    // Accent (cyan), used by the save action
    pub const ACCENT_500: Color = Color::from_rgb(0.024, 0.714, 0.831);
    pub const ACCENT_600: Color = Color::from_rgb(0.031, 0.569, 0.698);

    // Semantic
    pub const ERROR_400: Color = Color::from_rgb(0.973, 0.443, 0.443);
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.8;
    pub const SURFACE: f32 = 0.95;
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

pub mod sizing {
    pub const ICON_XL: f32 = 48.0;

    /// Height of each drop zone.
    pub const UPLOADER_HEIGHT: f32 = 192.0;
    /// Largest height of the inline result image.
    pub const RESULT_MAX_HEIGHT: f32 = 500.0;
    /// Minimum height of the output panel.
    pub const OUTPUT_MIN_HEIGHT: f32 = 400.0;

    pub const TOAST_WIDTH: f32 = 320.0;
}

pub mod typography {
    /// App title.
    pub const TITLE_LG: f32 = 40.0;
    /// Subtitle under the app title.
    pub const TITLE_MD: f32 = 26.0;
    pub const BODY_LG: f32 = 17.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

const _: () = {
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::BODY > typography::CAPTION);
    assert!(sizing::RESULT_MAX_HEIGHT > sizing::UPLOADER_HEIGHT);
    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
