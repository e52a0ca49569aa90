use std::path::Path;

use crate::app::infrastructure::text_surface::FileMode;

/// Lines per page for the approximate page indicator.
pub const LINES_PER_PAGE: usize = 60;

/// Extract filename from a file path
///
/// Returns the filename component of a path, or "Unknown" if it can't be extracted.
pub fn extract_filename(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .filter(|s| !s.is_empty() && *s != ".")
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Find next occurrence of search string in text
///
/// Returns the byte position of the match, or None if not found.
/// Searches from start_pos onwards.
pub fn find_in_text(text: &str, search: &str, start_pos: usize, case_sensitive: bool) -> Option<usize> {
    if search.is_empty() || start_pos >= text.len() {
        return None;
    }

    let haystack = if case_sensitive {
        text[start_pos..].to_string()
    } else {
        text[start_pos..].to_lowercase()
    };

    let needle = if case_sensitive {
        search.to_string()
    } else {
        search.to_lowercase()
    };

    haystack.find(&needle).map(|pos| start_pos + pos)
}

/// Rich text only for `.rtf`; everything else is read as plain text.
pub fn file_mode_for(path: &Path) -> FileMode {
    if has_extension(path, "rtf") {
        FileMode::RichText
    } else {
        FileMode::PlainText
    }
}

/// Formats that open with a beta warning.
pub fn is_beta_format(path: &Path) -> bool {
    has_extension(path, "docx")
}

/// 1-based page holding the given 0-based line.
pub fn page_for_line(line: usize) -> usize {
    line / LINES_PER_PAGE + 1
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}
