// SPDX-License-Identifier: MPL-2.0
//! Rotating arc used as a busy indicator.
//!
//! The widget is stateless: the application keeps the angle and advances
//! it with [`advance`] on every tick while something is loading.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, path::Arc, Canvas, Geometry, LineCap, Path, Stroke};
use iced::{mouse, Color, Element, Length, Radians, Rectangle, Renderer, Theme};
use std::f32::consts::{FRAC_PI_2, PI, TAU};

pub const ROTATION_STEP: f32 = 0.12;

const STROKE_WIDTH: f32 = 3.0;
const TRACK_ALPHA: f32 = 0.25;

#[must_use]
pub fn advance(rotation: f32) -> f32 {
    (rotation + ROTATION_STEP).rem_euclid(TAU)
}

#[derive(Debug, Clone, Copy)]
pub struct Spinner {
    rotation: f32,
    color: Color,
    size: f32,
}

impl Spinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            rotation,
            color,
            size: sizing::ICON_XL,
        }
    }

    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Start and end angle of the half-circle arc; rotation 0 starts at
    /// twelve o'clock.
    fn sweep(&self) -> (f32, f32) {
        let start = self.rotation - FRAC_PI_2;
        (start, start + PI)
    }
}

impl<'a, Message: 'a> From<Spinner> for Element<'a, Message> {
    fn from(spinner: Spinner) -> Self {
        Canvas::new(spinner)
            .width(Length::Fixed(spinner.size))
            .height(Length::Fixed(spinner.size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for Spinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let center = frame.center();
        let radius = (frame.width().min(frame.height()) - STROKE_WIDTH) / 2.0 - 1.0;

        frame.stroke(
            &Path::circle(center, radius),
            Stroke::default().with_width(STROKE_WIDTH).with_color(Color {
                a: TRACK_ALPHA,
                ..self.color
            }),
        );

        let (start, end) = self.sweep();
        let arc = Path::new(|builder| {
            builder.arc(Arc {
                center,
                radius,
                start_angle: Radians(start),
                end_angle: Radians(end),
            });
        });
        frame.stroke(
            &arc,
            Stroke::default()
                .with_width(STROKE_WIDTH)
                .with_color(self.color)
                .with_line_cap(LineCap::Round),
        );

        vec![frame.into_geometry()]
    }
}
