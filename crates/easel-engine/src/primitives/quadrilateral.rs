use anyhow::Result;

use crate::coords::{Point, ScaleFactor, Vec2};
use crate::error::Error;
use crate::paint::Rgb;
use crate::surface::Surface;

use super::{Drawable, Polygon};

/// Polygon with exactly four vertices.
///
/// Draws and transforms exactly like the [`Polygon`] it wraps. Transforms
/// never change the vertex count, so their results stay quadrilaterals.
#[derive(Debug, Clone, PartialEq)]
pub struct Quadrilateral(Polygon);

impl Quadrilateral {
    pub const VERTICES: usize = 4;

    /// Fails with [`Error::InvalidArity`] unless `points` holds four vertices.
    pub fn new(points: Vec<Point>) -> Result<Self, Error> {
        Self::try_from(Polygon::new(points))
    }

    pub fn with_outline_width(self, outline_width: u32) -> Self {
        Self(self.0.with_outline_width(outline_width))
    }

    pub fn with_id(self, id: impl Into<String>) -> Self {
        Self(self.0.with_id(id))
    }

    pub fn with_color(self, color: Rgb) -> Self {
        Self(self.0.with_color(color))
    }

    #[inline]
    pub fn as_polygon(&self) -> &Polygon {
        &self.0
    }

    #[inline]
    pub fn into_polygon(self) -> Polygon {
        self.0
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        self.0.points()
    }

    pub fn scale_by(&self, f: impl Into<Vec2>) -> Quadrilateral {
        Self(self.0.scale_by(f))
    }

    pub fn unscale_by(&self, f: impl Into<Vec2>) -> Result<Quadrilateral, Error> {
        self.0.unscale_by(f).map(Self)
    }

    pub fn translate_by(&self, f: impl Into<Vec2>) -> Quadrilateral {
        Self(self.0.translate_by(f))
    }

    pub fn untranslate_by(&self, f: impl Into<Vec2>) -> Quadrilateral {
        Self(self.0.untranslate_by(f))
    }

    #[inline]
    pub fn projected(&self, scale: ScaleFactor) -> Vec<[f32; 2]> {
        self.0.projected(scale)
    }
}

impl TryFrom<Polygon> for Quadrilateral {
    type Error = Error;

    fn try_from(polygon: Polygon) -> Result<Self, Error> {
        if polygon.len() != Self::VERTICES {
            return Err(Error::InvalidArity {
                expected: Self::VERTICES,
                found: polygon.len(),
            });
        }
        Ok(Self(polygon))
    }
}

impl Drawable for Quadrilateral {
    fn id(&self) -> &str {
        self.0.id()
    }

    fn color(&self) -> Rgb {
        self.0.color()
    }

    fn draw(&self, surface: &mut dyn Surface, scale: ScaleFactor) -> Result<()> {
        self.0.draw(surface, scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::palette;
    use crate::surface::RecordingSurface;

    fn square_points() -> Vec<Point> {
        vec![
            Point::new(100.0, 100.0),
            Point::new(200.0, 100.0),
            Point::new(200.0, 200.0),
            Point::new(100.0, 200.0),
        ]
    }

    #[test]
    fn three_points_fail() {
        let mut pts = square_points();
        pts.pop();
        assert_eq!(
            Quadrilateral::new(pts),
            Err(Error::InvalidArity { expected: 4, found: 3 })
        );
    }

    #[test]
    fn five_points_fail() {
        let mut pts = square_points();
        pts.push(Point::new(150.0, 250.0));
        assert_eq!(
            Quadrilateral::new(pts),
            Err(Error::InvalidArity { expected: 4, found: 5 })
        );
    }

    #[test]
    fn empty_points_fail() {
        assert_eq!(
            Quadrilateral::new(Vec::new()),
            Err(Error::InvalidArity { expected: 4, found: 0 })
        );
    }

    #[test]
    fn four_points_succeed() {
        let quad = Quadrilateral::new(square_points()).unwrap();
        assert_eq!(quad.points(), square_points().as_slice());
    }

    #[test]
    fn try_from_polygon_checks_arity() {
        let poly = Polygon::new(square_points()).with_id("sq");
        let quad = Quadrilateral::try_from(poly.clone()).unwrap();
        assert_eq!(quad.as_polygon(), &poly);

        assert!(Quadrilateral::try_from(Polygon::new(vec![Point::new(0.0, 0.0)])).is_err());
    }

    #[test]
    fn draws_like_the_equivalent_polygon() {
        let poly = Polygon::new(square_points())
            .with_color(palette::GREEN)
            .with_outline_width(0);
        let quad = Quadrilateral::new(square_points())
            .unwrap()
            .with_color(palette::GREEN)
            .with_outline_width(0);
        let scale = ScaleFactor::new(1.5, 2.0).unwrap();

        let mut a = RecordingSurface::new();
        let mut b = RecordingSurface::new();
        poly.draw(&mut a, scale).unwrap();
        quad.draw(&mut b, scale).unwrap();

        assert_eq!(a.calls(), b.calls());
    }

    #[test]
    fn transforms_like_the_equivalent_polygon() {
        let poly = Polygon::new(square_points()).with_id("sq");
        let quad = Quadrilateral::try_from(poly.clone()).unwrap();

        assert_eq!(quad.scale_by((2.0, 3.0)).into_polygon(), poly.scale_by((2.0, 3.0)));
        assert_eq!(quad.translate_by((5.0, 5.0)).into_polygon(), poly.translate_by((5.0, 5.0)));
        assert_eq!(
            quad.untranslate_by((5.0, 5.0)).into_polygon(),
            poly.untranslate_by((5.0, 5.0))
        );
        assert_eq!(
            quad.unscale_by((2.0, 4.0)).unwrap().into_polygon(),
            poly.unscale_by((2.0, 4.0)).unwrap()
        );
    }
}
