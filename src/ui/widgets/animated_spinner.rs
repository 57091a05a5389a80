// SPDX-License-Identifier: MPL-2.0
//! Rotating arc drawn on a canvas, shown while a montage is generating.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};

/// Radians added on every animation tick.
pub const ROTATION_STEP: f32 = PI / 12.0;

const STROKE_WIDTH: f32 = 4.0;
const ARC_SEGMENTS: u16 = 30;

/// Advances a rotation angle by one step, wrapping at a full turn.
#[must_use]
pub fn next_rotation(rotation: f32) -> f32 {
    (rotation + ROTATION_STEP) % TAU
}

pub struct AnimatedSpinner {
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            rotation,
            color,
            size: sizing::ICON_XL,
        }
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH;

        frame.stroke(
            &Path::circle(center, radius),
            Stroke::default().with_width(STROKE_WIDTH).with_color(Color {
                a: 0.25,
                ..self.color
            }),
        );

        // Three-quarter arc starting at twelve o'clock plus the rotation.
        let start = self.rotation - PI / 2.0;
        let sweep = 1.5 * PI;
        let arc = Path::new(|builder| {
            let point_at = |angle: f32| {
                Point::new(
                    center.x + radius * angle.cos(),
                    center.y + radius * angle.sin(),
                )
            };
            builder.move_to(point_at(start));
            for i in 1..=ARC_SEGMENTS {
                let t = f32::from(i) / f32::from(ARC_SEGMENTS);
                builder.line_to(point_at(start + sweep * t));
            }
        });
        frame.stroke(
            &arc,
            Stroke::default()
                .with_width(STROKE_WIDTH)
                .with_color(self.color)
                .with_line_cap(canvas::LineCap::Round),
        );

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_stays_within_one_turn() {
        let mut rotation = 0.0;
        for _ in 0..100 {
            rotation = next_rotation(rotation);
            assert!((0.0..TAU).contains(&rotation));
        }
        assert!((next_rotation(TAU - ROTATION_STEP / 2.0) - ROTATION_STEP / 2.0).abs() < 1e-4);
    }
}
