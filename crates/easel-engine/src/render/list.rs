use crate::paint::Rgb;

/// Stroked segment in surface pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub color: Rgb,
    pub p1: [f32; 2],
    pub p2: [f32; 2],
    pub width: u32,
}

/// Closed polygon in surface pixels; `outline_width == 0` fills.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonCmd {
    pub color: Rgb,
    pub vertices: Vec<[f32; 2]>,
    pub outline_width: u32,
}

/// Renderer-agnostic draw command.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Line(LineCmd),
    Polygon(PolygonCmd),
}

/// Commands accumulated on a surface since its last resize.
///
/// Paint order is submission order: later commands cover earlier ones.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops recorded commands. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    #[inline]
    pub fn push_line(&mut self, color: Rgb, p1: [f32; 2], p2: [f32; 2], width: u32) {
        self.push(DrawCmd::Line(LineCmd { color, p1, p2, width }));
    }

    #[inline]
    pub fn push_polygon(&mut self, color: Rgb, vertices: &[[f32; 2]], outline_width: u32) {
        self.push(DrawCmd::Polygon(PolygonCmd {
            color,
            vertices: vertices.to_vec(),
            outline_width,
        }));
    }

    /// Commands in paint order (back-to-front).
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}
