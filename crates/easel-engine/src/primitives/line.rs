use anyhow::{Context, Result};

use crate::coords::{Point, ScaleFactor};
use crate::paint::{palette, Rgb};
use crate::surface::Surface;

use super::{Drawable, DEFAULT_STROKE_WIDTH};

/// Straight segment between two points.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub point1: Point,
    pub point2: Point,
    /// Stroke width in surface pixels. Not scaled.
    pub width: u32,
    pub id: String,
    pub color: Rgb,
}

impl Line {
    pub fn new(point1: Point, point2: Point) -> Self {
        Self {
            point1,
            point2,
            width: DEFAULT_STROKE_WIDTH,
            id: String::new(),
            color: palette::BLACK,
        }
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    /// Endpoints multiplied by `scale`.
    #[inline]
    pub fn projected(&self, scale: ScaleFactor) -> (Point, Point) {
        (self.point1.scale_by(scale), self.point2.scale_by(scale))
    }
}

impl Drawable for Line {
    fn id(&self) -> &str {
        &self.id
    }

    fn color(&self) -> Rgb {
        self.color
    }

    fn draw(&self, surface: &mut dyn Surface, scale: ScaleFactor) -> Result<()> {
        let (p1, p2) = self.projected(scale);
        surface
            .draw_line(self.color, p1.to_array(), p2.to_array(), self.width)
            .with_context(|| format!("failed to draw line {:?}", self.id))
    }
}
