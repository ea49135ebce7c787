/// Opaque 8-bit sRGB color.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Straight sRGB components in `[0, 1]`, alpha 1.
    #[inline]
    pub fn to_srgb_f32(self) -> [f32; 4] {
        [unit(self.r), unit(self.g), unit(self.b), 1.0]
    }

    /// Linear RGBA for sRGB render targets (alpha 1, so premultiplied as well).
    #[inline]
    pub fn to_linear_f32(self) -> [f32; 4] {
        [
            srgb_to_linear(unit(self.r)),
            srgb_to_linear(unit(self.g)),
            srgb_to_linear(unit(self.b)),
            1.0,
        ]
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Rgb::new(r, g, b)
    }
}

#[inline]
fn unit(c: u8) -> f32 {
    c as f32 / 255.0
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
