use std::path::Path;

use crate::app::domain::{FontSpec, Rgb};
use crate::app::infrastructure::error::Result;

/// How a document file is read or written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileMode {
    RichText,
    PlainText,
}

/// The formatted text box the editor is built around.
///
/// Methods take `&self`: implementations are thin handles over toolkit
/// widgets (interior mutability), and the selection controller may be
/// re-entered from inside a write while it is still on the stack.
pub trait TextSurface {
    /// Font of the current selection. Mixed selections report the font at
    /// the leading edge; `None` only if the surface cannot tell at all.
    fn selection_font(&self) -> Option<FontSpec>;
    fn set_selection_font(&self, font: &FontSpec);

    fn selection_color(&self) -> Rgb;
    fn set_selection_color(&self, color: Rgb);

    fn load_file(&self, path: &Path, mode: FileMode) -> Result<()>;
    fn save_file(&self, path: &Path) -> Result<()>;

    /// Select the first occurrence of `needle` and return its offset.
    fn find(&self, needle: &str) -> Option<usize>;

    fn clear(&self);
    fn focus(&self);

    /// Zero-based line of the insertion point.
    fn current_line(&self) -> usize;
}
