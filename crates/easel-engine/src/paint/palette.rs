//! Named colors.

use super::Rgb;

pub const BLACK: Rgb = Rgb::new(0, 0, 0);
pub const WHITE: Rgb = Rgb::new(255, 255, 255);
pub const GREEN: Rgb = Rgb::new(0, 255, 0);
