use anyhow::{Context, Result};

use crate::coords::{Point, ScaleFactor, Vec2};
use crate::error::Error;
use crate::paint::{palette, Rgb};
use crate::surface::Surface;

use super::{Drawable, DEFAULT_STROKE_WIDTH};

/// Closed shape through an ordered list of vertices.
///
/// Edges join consecutive vertices and the last vertex back to the first.
/// Transforms apply the same per-axis operation to every vertex, keep vertex
/// order, and carry id, color and outline width over to the result.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub points: Vec<Point>,
    /// `0` fills the polygon; any other value strokes the edges that wide.
    pub outline_width: u32,
    pub id: String,
    pub color: Rgb,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            points,
            outline_width: DEFAULT_STROKE_WIDTH,
            id: String::new(),
            color: palette::BLACK,
        }
    }

    pub fn with_outline_width(mut self, outline_width: u32) -> Self {
        self.outline_width = outline_width;
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

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn is_filled(&self) -> bool {
        self.outline_width == 0
    }

    pub fn scale_by(&self, f: impl Into<Vec2>) -> Polygon {
        let f = f.into();
        self.map_points(|p| p.scale_by(f))
    }

    /// Fails on the first vertex whose division hits a zero axis.
    pub fn unscale_by(&self, f: impl Into<Vec2>) -> Result<Polygon, Error> {
        let f = f.into();
        let points = self
            .points
            .iter()
            .map(|p| p.unscale_by(f))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.with_points(points))
    }

    pub fn translate_by(&self, f: impl Into<Vec2>) -> Polygon {
        let f = f.into();
        self.map_points(|p| p.translate_by(f))
    }

    pub fn untranslate_by(&self, f: impl Into<Vec2>) -> Polygon {
        let f = f.into();
        self.map_points(|p| p.untranslate_by(f))
    }

    /// Vertices multiplied by `scale`, ready for a surface.
    #[inline]
    pub fn projected(&self, scale: ScaleFactor) -> Vec<[f32; 2]> {
        self.points.iter().map(|p| p.scale_by(scale).to_array()).collect()
    }

    fn map_points(&self, f: impl Fn(Point) -> Point) -> Polygon {
        self.with_points(self.points.iter().copied().map(f).collect())
    }

    fn with_points(&self, points: Vec<Point>) -> Polygon {
        Polygon {
            points,
            outline_width: self.outline_width,
            id: self.id.clone(),
            color: self.color,
        }
    }
}

impl Drawable for Polygon {
    fn id(&self) -> &str {
        &self.id
    }

    fn color(&self) -> Rgb {
        self.color
    }

    fn draw(&self, surface: &mut dyn Surface, scale: ScaleFactor) -> Result<()> {
        let vertices = self.projected(scale);
        surface
            .draw_polygon(self.color, &vertices, self.outline_width)
            .with_context(|| format!("failed to draw polygon {:?}", self.id))
    }
}
