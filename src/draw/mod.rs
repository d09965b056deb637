//! Defines the [`Canvas`] drawing contexts implement to display the visualisation.
//!
//! The engine only ever needs two primitives: thick line segments and filled circles.
//! Everything else (control polygons, subdivision levels, the trace) is composed from them here.
use std::fmt::{Display, Formatter};

use crate::config::{CONTROL_LINE_THICKNESS, CONTROL_POINT_RADIUS, TRACE_THICKNESS};
use crate::Point;

/// 8-bit RGBA color
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel, 255 is opaque
    pub a: u8,
}

impl Color {
    /// Opaque color from its channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    /// Window background
    pub const BACKGROUND: Color = Color::rgb(245, 245, 245);
    /// Control polygon
    pub const GRAY: Color = Color::rgb(130, 130, 130);
    /// Trace and curve point
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// First subdivision level
    pub const VIOLET: Color = Color::rgb(135, 60, 190);
    /// Second subdivision level
    pub const MAROON: Color = Color::rgb(190, 33, 55);
    /// Third subdivision level
    pub const SKYBLUE: Color = Color::rgb(102, 191, 255);
    /// Fourth subdivision level
    pub const LIME: Color = Color::rgb(0, 158, 47);
    /// Fifth subdivision level
    pub const GOLD: Color = Color::rgb(255, 203, 0);
}

/// Formats as css color, usable in svg attributes
impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.a == 255 {
            write!(f, "rgb({},{},{})", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "rgba({},{},{},{:.3})",
                self.r,
                self.g,
                self.b,
                self.a as f32 / 255.0
            )
        }
    }
}

/// Colors for the subdivision levels, cycled through by depth
pub const PALETTE: [Color; 5] = [
    Color::VIOLET,
    Color::MAROON,
    Color::SKYBLUE,
    Color::LIME,
    Color::GOLD,
];

/// Color of the subdivision level at `depth`
pub fn palette(depth: usize) -> Color {
    PALETTE[depth % PALETTE.len()]
}

/// Something the visualisation can be drawn onto.
///
/// Use different crate features to enable different contexts:
/// - `draw-svg` to collect the drawing into a svg document
pub trait Canvas {
    /// Draw a straight line of width `thickness`
    fn draw_line(&mut self, from: Point, to: Point, thickness: f32, color: Color);

    /// Draw a filled circle
    fn draw_circle(&mut self, center: Point, radius: f32, color: Color);
}

/// Draws a dot on every point and connects neighbouring ones
pub fn draw_polygonal_chain<C: Canvas + ?Sized>(canvas: &mut C, points: &[Point], color: Color) {
    for (i, &point) in points.iter().enumerate() {
        canvas.draw_circle(point, CONTROL_POINT_RADIUS, color);
        if let Some(&next) = points.get(i + 1) {
            canvas.draw_line(point, next, CONTROL_LINE_THICKNESS, color);
        }
    }
}

/// Connects consecutive trace points
pub fn draw_trace<C: Canvas + ?Sized>(canvas: &mut C, points: &[Point]) {
    for pair in points.windows(2) {
        canvas.draw_line(pair[0], pair[1], TRACE_THICKNESS, Color::BLACK);
    }
}

/// A single call issued to a [`Canvas`]
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DrawCall {
    /// See [`Canvas::draw_line`]
    Line {
        /// Start of the segment
        from: Point,
        /// End of the segment
        to: Point,
        /// Stroke width
        thickness: f32,
        /// Stroke color
        color: Color,
    },
    /// See [`Canvas::draw_circle`]
    Circle {
        /// Center of the circle
        center: Point,
        /// Radius of the circle
        radius: f32,
        /// Fill color
        color: Color,
    },
}

/// Canvas remembering every call in order.
///
/// Useful to replay a frame onto another canvas later or to inspect what would have been drawn.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawList(pub Vec<DrawCall>);

impl DrawList {
    /// Issues all recorded calls to `canvas`
    pub fn replay<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        for call in self.0.iter() {
            match *call {
                DrawCall::Line {
                    from,
                    to,
                    thickness,
                    color,
                } => canvas.draw_line(from, to, thickness, color),
                DrawCall::Circle {
                    center,
                    radius,
                    color,
                } => canvas.draw_circle(center, radius, color),
            }
        }
    }
}

impl Canvas for DrawList {
    fn draw_line(&mut self, from: Point, to: Point, thickness: f32, color: Color) {
        self.0.push(DrawCall::Line {
            from,
            to,
            thickness,
            color,
        });
    }

    fn draw_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.0.push(DrawCall::Circle {
            center,
            radius,
            color,
        });
    }
}

#[cfg(feature = "draw-svg")]
pub mod svg;
