// SPDX-License-Identifier: MPL-2.0
//! Loading indicator shown by an overlay while its content loads.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};

/// Radians the arc advances per spinner tick.
pub const ROTATION_STEP: f32 = 0.15;

/// Advances `rotation` by one tick, wrapping at a full turn.
#[must_use]
pub fn advance(rotation: f32) -> f32 {
    (rotation + ROTATION_STEP) % TAU
}

/// Canvas spinner: a faint ring with a half-circle arc at `rotation`.
pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            size: sizing::SPINNER,
        }
    }

    pub fn into_element<Message: 'static>(self) -> Element<'static, Message> {
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
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - 4.0;

                frame.stroke(
                    &Path::circle(center, radius),
                    Stroke::default()
                        .with_width(sizing::SPINNER_STROKE)
                        .with_color(Color {
                            a: 0.25,
                            ..self.color
                        }),
                );

                // Start at twelve o'clock.
                let start_angle = self.rotation - PI / 2.0;
                let segments = 30_u8;
                let mut arc = canvas::path::Builder::new();
                arc.move_to(point_on_circle(center, radius, start_angle));
                for i in 1..=segments {
                    let angle = start_angle + PI * f32::from(i) / f32::from(segments);
                    arc.line_to(point_on_circle(center, radius, angle));
                }

                frame.stroke(
                    &arc.build(),
                    Stroke::default()
                        .with_width(sizing::SPINNER_STROKE)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}

fn point_on_circle(center: Point, radius: f32, angle: f32) -> Point {
    Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_wraps_at_full_turn() {
        let almost_full = TAU - ROTATION_STEP / 2.0;
        let next = advance(almost_full);
        assert!(next >= 0.0 && next < ROTATION_STEP);
    }

    #[test]
    fn point_on_circle_at_zero_is_right_of_center() {
        let p = point_on_circle(Point::new(10.0, 10.0), 5.0, 0.0);
        assert!((p.x - 15.0).abs() < f32::EPSILON);
        assert!((p.y - 10.0).abs() < f32::EPSILON);
    }
}
