/// A plain 8-bit RGB color, independent of the UI toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    /// Stock dialog/control gray used when a theme does not paint the window.
    pub const CONTROL: Rgb = Rgb::new(240, 240, 240);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend between `self` (t = 0.0) and `other` (t = 1.0).
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

/// Font of a run of text as the editing surface reports it.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub family: String,
    pub size_pt: f32,
    pub bold: bool,
    pub italic: bool,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size_pt: f32) -> Self {
        Self {
            family: family.into(),
            size_pt,
            bold: false,
            italic: false,
        }
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = family.into();
        self
    }

    pub fn with_size(mut self, size_pt: f32) -> Self {
        self.size_pt = size_pt;
        self
    }

    /// Default font for body text.
    pub fn body() -> Self {
        Self::new(BODY_FONT_FAMILY, BODY_FONT_SIZE)
    }

    /// Font the heading toggle applies.
    pub fn heading() -> Self {
        Self::new(HEADING_FONT_FAMILY, HEADING_FONT_SIZE).with_bold(true)
    }
}

pub const BODY_FONT_FAMILY: &str = "Calibri";
pub const BODY_FONT_SIZE: f32 = 11.5;
pub const BODY_COLOR: Rgb = Rgb::BLACK;

pub const HEADING_FONT_FAMILY: &str = "Segoe UI";
pub const HEADING_FONT_SIZE: f32 = 16.0;
pub const HEADING_COLOR: Rgb = Rgb::new(0, 120, 215);

/// Snapshot of the selection's font used to drive the toolbar.
/// Built fresh for every synchronization pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionFontView {
    pub font_family: String,
    pub font_size_pt: i32,
    pub bold: bool,
    pub italic: bool,
}

impl From<&FontSpec> for SelectionFontView {
    fn from(font: &FontSpec) -> Self {
        Self {
            font_family: font.family.clone(),
            // Toolbar shows whole points only
            font_size_pt: font.size_pt as i32,
            bold: font.bold,
            italic: font.italic,
        }
    }
}
