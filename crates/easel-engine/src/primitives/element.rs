use anyhow::Result;

use crate::coords::ScaleFactor;
use crate::paint::Rgb;
use crate::surface::Surface;

use super::{Drawable, Line, Polygon, Quadrilateral};

/// Any primitive a display can register.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Line(Line),
    Polygon(Polygon),
    Quadrilateral(Quadrilateral),
}

impl Element {
    /// Short variant name for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Element::Line(_) => "line",
            Element::Polygon(_) => "polygon",
            Element::Quadrilateral(_) => "quadrilateral",
        }
    }

    fn as_drawable(&self) -> &dyn Drawable {
        match self {
            Element::Line(e) => e,
            Element::Polygon(e) => e,
            Element::Quadrilateral(e) => e,
        }
    }
}

impl Drawable for Element {
    fn id(&self) -> &str {
        self.as_drawable().id()
    }

    fn color(&self) -> Rgb {
        self.as_drawable().color()
    }

    fn draw(&self, surface: &mut dyn Surface, scale: ScaleFactor) -> Result<()> {
        self.as_drawable().draw(surface, scale)
    }
}

impl From<Line> for Element {
    fn from(e: Line) -> Self {
        Element::Line(e)
    }
}

impl From<Polygon> for Element {
    fn from(e: Polygon) -> Self {
        Element::Polygon(e)
    }
}

impl From<Quadrilateral> for Element {
    fn from(e: Quadrilateral) -> Self {
        Element::Quadrilateral(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Point;
    use crate::paint::palette;
    use crate::surface::{RecordingSurface, SurfaceCall};

    #[test]
    fn identity_is_forwarded_from_the_variant() {
        let e: Element = Line::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0))
            .with_id("axis")
            .with_color(palette::WHITE)
            .into();
        assert_eq!(e.id(), "axis");
        assert_eq!(e.color(), palette::WHITE);
        assert_eq!(e.kind(), "line");
    }

    #[test]
    fn draw_dispatches_to_the_variant() {
        let quad = Quadrilateral::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ])
        .unwrap();
        let e = Element::from(quad);
        let mut surface = RecordingSurface::new();

        e.draw(&mut surface, ScaleFactor::new(10.0, 10.0).unwrap()).unwrap();

        assert!(matches!(
            surface.calls(),
            [SurfaceCall::Polygon { vertices, outline_width: 5, .. }]
                if vertices == &vec![[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]]
        ));
    }
}
