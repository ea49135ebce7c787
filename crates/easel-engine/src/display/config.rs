use crate::coords::Size;

/// Display configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    /// Logical size; primitives are authored in this coordinate space.
    pub size: Size,
    pub caption: String,
    /// Whether the backend should let the user resize the surface.
    pub resizable: bool,
    /// Project with a uniform scale (letterboxing) instead of stretching.
    pub maintain_aspect_ratio: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            size: Size::new(500, 500),
            caption: "easel".to_string(),
            resizable: true,
            maintain_aspect_ratio: true,
        }
    }
}

impl DisplayConfig {
    pub fn new(size: impl Into<Size>, caption: impl Into<String>) -> Self {
        Self {
            size: size.into(),
            caption: caption.into(),
            ..Self::default()
        }
    }

    pub fn resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    pub fn maintain_aspect_ratio(mut self, maintain: bool) -> Self {
        self.maintain_aspect_ratio = maintain;
        self
    }
}
