//! Draw primitives handed to the rasterizing layer

use serde::{Deserialize, Serialize};

use crate::geometry::Point2D;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const BLUE: Rgb = Rgb(0, 0, 255);
    pub const ORANGE: Rgb = Rgb(255, 165, 0);
    pub const CRIMSON: Rgb = Rgb(220, 20, 60);
    pub const LIGHT_GRAY: Rgb = Rgb(220, 220, 220);
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum DrawCommand {
    Circle {
        center: Point2D,
        radius: f32,
        color: Rgb,
    },
    Line {
        from: Point2D,
        to: Point2D,
        width: f32,
        color: Rgb,
    },
    /// Axis-aligned rectangle; `border` > 0 draws an outline of that width
    Rect {
        origin: Point2D,
        width: f32,
        height: f32,
        color: Rgb,
        border: f32,
    },
}

impl DrawCommand {
    pub fn circle(center: Point2D, radius: f32, color: Rgb) -> Self {
        DrawCommand::Circle { center, radius, color }
    }

    pub fn line(from: Point2D, to: Point2D, width: f32, color: Rgb) -> Self {
        DrawCommand::Line { from, to, width, color }
    }

    pub fn filled_rect(origin: Point2D, width: f32, height: f32, color: Rgb) -> Self {
        DrawCommand::Rect { origin, width, height, color, border: 0.0 }
    }
}
