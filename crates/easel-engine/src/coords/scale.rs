use crate::error::Error;

use super::{Size, Vec2};

/// Per-axis scale from logical coordinates to surface pixels.
///
/// Invariant: both components are positive and finite.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScaleFactor {
    x: f32,
    y: f32,
}

impl ScaleFactor {
    pub const IDENTITY: ScaleFactor = ScaleFactor { x: 1.0, y: 1.0 };

    pub fn new(x: f32, y: f32) -> Result<Self, Error> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if valid(x) && valid(y) {
            Ok(Self { x, y })
        } else {
            Err(Error::InvalidScale { x, y })
        }
    }

    /// Ratio of `physical` to `logical`, per axis.
    pub fn between(logical: Size, physical: Size) -> Result<Self, Error> {
        if logical.is_empty() {
            return Err(Error::InvalidSize { width: logical.width, height: logical.height });
        }
        Self::new(
            physical.width as f32 / logical.width as f32,
            physical.height as f32 / logical.height as f32,
        )
    }

    #[inline]
    pub fn x(self) -> f32 {
        self.x
    }

    #[inline]
    pub fn y(self) -> f32 {
        self.y
    }

    /// Collapses both axes to the smaller component.
    ///
    /// Preserves aspect ratio; the longer axis is letterboxed.
    #[inline]
    pub fn uniform(self) -> Self {
        let m = self.x.min(self.y);
        Self { x: m, y: m }
    }

    /// `size` multiplied per axis, rounded to whole pixels.
    #[inline]
    pub fn apply_to(self, size: Size) -> Size {
        Size::new(
            (size.width as f32 * self.x).round() as u32,
            (size.height as f32 * self.y).round() as u32,
        )
    }
}

impl Default for ScaleFactor {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<ScaleFactor> for Vec2 {
    #[inline]
    fn from(s: ScaleFactor) -> Vec2 {
        Vec2::new(s.x, s.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_identity() {
        assert_eq!(ScaleFactor::default(), ScaleFactor::IDENTITY);
        assert_eq!(ScaleFactor::IDENTITY.x(), 1.0);
        assert_eq!(ScaleFactor::IDENTITY.y(), 1.0);
    }

    #[test]
    fn rejects_non_positive_components() {
        assert_eq!(ScaleFactor::new(0.0, 1.0), Err(Error::InvalidScale { x: 0.0, y: 1.0 }));
        assert_eq!(ScaleFactor::new(1.0, -2.0), Err(Error::InvalidScale { x: 1.0, y: -2.0 }));
        assert!(ScaleFactor::new(f32::INFINITY, 1.0).is_err());
        assert!(ScaleFactor::new(1.0, f32::NAN).is_err());
    }

    #[test]
    fn uniform_takes_the_smaller_axis() {
        let s = ScaleFactor::new(2.0, 3.0).unwrap();
        assert_eq!(s.uniform(), ScaleFactor::new(2.0, 2.0).unwrap());

        let s = ScaleFactor::new(0.5, 0.25).unwrap();
        assert_eq!(s.uniform(), ScaleFactor::new(0.25, 0.25).unwrap());
    }

    #[test]
    fn between_divides_physical_by_logical() {
        let s = ScaleFactor::between(Size::new(500, 500), Size::new(1000, 500)).unwrap();
        assert_eq!((s.x(), s.y()), (2.0, 1.0));
    }

    #[test]
    fn between_rejects_empty_sizes() {
        assert_eq!(
            ScaleFactor::between(Size::new(0, 500), Size::new(100, 100)),
            Err(Error::InvalidSize { width: 0, height: 500 })
        );
        assert!(ScaleFactor::between(Size::new(500, 500), Size::new(0, 100)).is_err());
    }

    #[test]
    fn apply_to_rounds_to_pixels() {
        let s = ScaleFactor::new(1.5, 0.333).unwrap();
        assert_eq!(s.apply_to(Size::new(301, 300)), Size::new(452, 100));
    }
}
