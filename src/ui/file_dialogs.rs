use std::path::PathBuf;

use fltk::dialog;

/// Rich text, plain text and (beta) Word documents.
pub const DOCUMENT_PATTERN: &str = "*.{rtf,txt,docx}";

pub fn native_open_dialog(title: &str) -> Option<PathBuf> {
    dialog::file_chooser(title, DOCUMENT_PATTERN, ".", false).map(PathBuf::from)
}

pub fn native_save_dialog(title: &str) -> Option<PathBuf> {
    dialog::file_chooser(title, DOCUMENT_PATTERN, ".", false).map(PathBuf::from)
}
