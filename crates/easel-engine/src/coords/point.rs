use crate::error::Error;

use super::{Axis, Vec2};

/// Position in logical pixels.
///
/// Every operation returns a new point; the receiver is never modified.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// `(x * f.x, y * f.y)`
    #[inline]
    pub fn scale_by(self, f: impl Into<Vec2>) -> Point {
        let f = f.into();
        Point::new(self.x * f.x, self.y * f.y)
    }

    /// `(x / f.x, y / f.y)`.
    ///
    /// Fails with [`Error::DivideByZero`] naming the first zero axis (X before Y).
    #[inline]
    pub fn unscale_by(self, f: impl Into<Vec2>) -> Result<Point, Error> {
        let f = f.into();
        if f.x == 0.0 {
            return Err(Error::DivideByZero { axis: Axis::X });
        }
        if f.y == 0.0 {
            return Err(Error::DivideByZero { axis: Axis::Y });
        }
        Ok(Point::new(self.x / f.x, self.y / f.y))
    }

    /// `(x + f.x, y + f.y)`
    #[inline]
    pub fn translate_by(self, f: impl Into<Vec2>) -> Point {
        let f = f.into();
        Point::new(self.x + f.x, self.y + f.y)
    }

    /// `(x - f.x, y - f.y)`
    #[inline]
    pub fn untranslate_by(self, f: impl Into<Vec2>) -> Point {
        let f = f.into();
        Point::new(self.x - f.x, self.y - f.y)
    }

    /// Coordinates in `(x, y)` order, as consumed by surfaces.
    #[inline]
    pub const fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }

    #[inline]
    pub const fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl From<Point> for [f32; 2] {
    #[inline]
    fn from(p: Point) -> [f32; 2] {
        p.to_array()
    }
}

impl From<Point> for Vec2 {
    #[inline]
    fn from(p: Point) -> Vec2 {
        p.to_vec2()
    }
}

impl From<(f32, f32)> for Point {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Point::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::ScaleFactor;

    fn p(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    // ── per-axis operations ───────────────────────────────────────────────

    #[test]
    fn scale_is_per_axis() {
        assert_eq!(p(3.0, 4.0).scale_by((2.0, 0.5)), p(6.0, 2.0));
    }

    #[test]
    fn scalar_operand_applies_to_both_axes() {
        assert_eq!(p(3.0, 4.0).scale_by(2.0), p(6.0, 8.0));
        assert_eq!(p(3.0, 4.0).unscale_by(2.0), Ok(p(1.5, 2.0)));
        assert_eq!(p(3.0, 4.0).unscale_by(0.0), Err(Error::DivideByZero { axis: Axis::X }));
    }

    #[test]
    fn point_operand_acts_as_offset() {
        let offset = p(10.0, -5.0);
        assert_eq!(p(3.0, 4.0).translate_by(offset), p(13.0, -1.0));
        assert_eq!(p(13.0, -1.0).untranslate_by(offset), p(3.0, 4.0));
        assert_eq!(p(3.0, 4.0).scale_by(p(2.0, 3.0)), p(6.0, 12.0));
    }

    #[test]
    fn translate_and_untranslate_are_per_axis() {
        assert_eq!(p(3.0, 4.0).translate_by((1.0, -2.0)), p(4.0, 2.0));
        assert_eq!(p(3.0, 4.0).untranslate_by((1.0, -2.0)), p(2.0, 6.0));
    }

    #[test]
    fn unscale_is_per_axis() {
        assert_eq!(p(6.0, 2.0).unscale_by((2.0, 0.5)).unwrap(), p(3.0, 4.0));
    }

    #[test]
    fn operations_leave_receiver_untouched() {
        let original = p(1.0, 2.0);
        let _ = original.scale_by((10.0, 10.0));
        let _ = original.translate_by((10.0, 10.0));
        assert_eq!(original, p(1.0, 2.0));
    }

    // ── division by zero ──────────────────────────────────────────────────

    #[test]
    fn unscale_by_zero_x_fails() {
        assert_eq!(
            p(1.0, 1.0).unscale_by((0.0, 1.0)),
            Err(Error::DivideByZero { axis: Axis::X })
        );
    }

    #[test]
    fn unscale_by_zero_y_fails() {
        assert_eq!(
            p(1.0, 1.0).unscale_by((2.0, 0.0)),
            Err(Error::DivideByZero { axis: Axis::Y })
        );
    }

    #[test]
    fn unscale_reports_x_first_when_both_are_zero() {
        assert_eq!(
            p(1.0, 1.0).unscale_by((0.0, 0.0)),
            Err(Error::DivideByZero { axis: Axis::X })
        );
    }

    // ── round trips ───────────────────────────────────────────────────────

    #[test]
    fn scale_then_unscale_returns_original() {
        let s = ScaleFactor::new(2.0, 4.0).unwrap();
        for original in [p(100.0, 200.0), p(-3.5, 0.0), p(0.25, 7.0)] {
            assert_eq!(original.scale_by(s).unscale_by(s).unwrap(), original);
        }
    }

    #[test]
    fn translate_then_untranslate_returns_original() {
        let t = Vec2::new(-12.0, 40.0);
        let original = p(5.0, 6.0);
        assert_eq!(original.translate_by(t).untranslate_by(t), original);
    }

    // ── conversion ────────────────────────────────────────────────────────

    #[test]
    fn array_is_x_then_y() {
        assert_eq!(p(7.0, 9.0).to_array(), [7.0, 9.0]);
        let arr: [f32; 2] = p(1.0, 2.0).into();
        assert_eq!(arr, [1.0, 2.0]);
    }
}
