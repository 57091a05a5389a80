// SPDX-License-Identifier: MPL-2.0
//! Full-window preview overlay styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
};
use iced::widget::container;
use iced::{Background, Color, Theme};

/// Dimmed backdrop behind the preview image.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..BLACK
        })),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_is_translucent_black() {
        let style = backdrop(&Theme::Light);
        match style.background {
            Some(Background::Color(color)) => {
                assert_eq!(color.r, 0.0);
                assert!(color.a > 0.0 && color.a < 1.0);
            }
            other => panic!("unexpected background {other:?}"),
        }
    }
}
