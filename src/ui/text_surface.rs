use std::cell::{Cell, RefCell};
use std::fs;
use std::path::Path;
use std::rc::Rc;

use fltk::{
    app,
    prelude::*,
    text::{TextBuffer, TextEditor},
};

use crate::app::domain::style::BODY_COLOR;
use crate::app::domain::{FontSpec, Rgb};
use crate::app::infrastructure::buffer::{buffer_text_no_leak, style_byte_at};
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::infrastructure::text_surface::{FileMode, TextSurface};
use crate::app::services::text_ops::find_in_text;
use super::style_map::StyleMap;

/// `TextSurface` over an FLTK `TextEditor` with a parallel style buffer.
///
/// Every byte of text has one style char; the char indexes the `StyleMap`.
/// Text typed at a caret takes the pending typing style if one was set,
/// otherwise the style of the character before it.
#[derive(Clone)]
pub struct FltkTextSurface {
    editor: TextEditor,
    buffer: TextBuffer,
    styles: TextBuffer,
    map: Rc<RefCell<StyleMap>>,
    typing_style: Rc<Cell<Option<char>>>,
    last_caret: Rc<Cell<(i32, Option<(i32, i32)>)>>,
}

impl FltkTextSurface {
    pub fn new(editor: &TextEditor) -> Self {
        let mut editor = editor.clone();
        let mut buffer = TextBuffer::default();
        let styles = TextBuffer::default();
        let map = Rc::new(RefCell::new(StyleMap::new(FontSpec::body(), BODY_COLOR, app::fonts())));
        let typing_style: Rc<Cell<Option<char>>> = Rc::new(Cell::new(None));

        let mut style_buf = styles.clone();
        let typing = typing_style.clone();
        buffer.add_modify_callback(move |pos, inserted, deleted, _restyled, _deleted_text| {
            if deleted > 0 {
                style_buf.remove(pos, pos + deleted);
            }
            if inserted > 0 {
                let ch = typing
                    .get()
                    .or_else(|| preceding_style(&style_buf, pos))
                    .unwrap_or('A');
                let filler: String = std::iter::repeat(ch).take(inserted as usize).collect();
                style_buf.insert(pos, &filler);
            }
        });

        editor.set_buffer(buffer.clone());
        editor.set_highlight_data(styles.clone(), map.borrow().entries().to_vec());

        Self {
            editor,
            buffer,
            styles,
            map,
            typing_style,
            last_caret: Rc::new(Cell::new((0, None))),
        }
    }

    pub fn editor(&self) -> &TextEditor {
        &self.editor
    }

    /// True once per caret/selection move since the last call.
    pub fn poll_selection_moved(&self) -> bool {
        let now = (self.editor.insert_position(), self.buffer.selection_position());
        if now == self.last_caret.get() {
            return false;
        }
        self.last_caret.set(now);
        // A moved caret forgets formatting picked for text not typed yet
        self.typing_style.set(None);
        true
    }

    /// Non-empty selection as (start, end), ordered.
    fn selected_range(&self) -> Option<(i32, i32)> {
        match self.buffer.selection_position() {
            Some((a, b)) if a != b => Some((a.min(b), a.max(b))),
            _ => None,
        }
    }

    /// Style char describing the selection's leading edge or the caret.
    fn leading_style(&self) -> char {
        if let Some((start, _)) = self.selected_range() {
            return style_at(&self.styles, start as usize).unwrap_or('A');
        }
        if let Some(ch) = self.typing_style.get() {
            return ch;
        }
        preceding_style(&self.styles, self.editor.insert_position())
            .or_else(|| style_at(&self.styles, 0))
            .unwrap_or('A')
    }

    fn current_style(&self) -> (FontSpec, Rgb) {
        let ch = self.leading_style();
        let map = self.map.borrow();
        match map.style(ch) {
            Some((font, color)) => (font.clone(), *color),
            None => (FontSpec::body(), BODY_COLOR),
        }
    }

    /// Apply `restyle` to every character in the selection, or set the typing
    /// style when the selection is empty. A full style table is compacted
    /// once before giving up.
    fn restyle(&self, restyle: impl Fn(&FontSpec, Rgb) -> (FontSpec, Rgb)) {
        if !self.try_restyle(&restyle) {
            self.compact_styles();
            if !self.try_restyle(&restyle) {
                log::warn!("Style table full, formatting not applied");
            }
        }
        self.refresh_table();
    }

    /// False when the style table had no room; the text is left untouched.
    fn try_restyle(&self, restyle: &impl Fn(&FontSpec, Rgb) -> (FontSpec, Rgb)) -> bool {
        let Some((start, end)) = self.selected_range() else {
            let (font, color) = self.current_style();
            let (font, color) = restyle(&font, color);
            let Some(ch) = self.map.borrow_mut().get_or_insert(&font, color) else {
                return false;
            };
            self.typing_style.set(Some(ch));
            return true;
        };

        let current = buffer_text_no_leak(&self.styles);
        let mut replaced = String::with_capacity((end - start) as usize);
        {
            let mut map = self.map.borrow_mut();
            for pos in start as usize..end as usize {
                let old = style_byte_at(&current, pos).map(char::from).unwrap_or('A');
                let (font, color) = map
                    .style(old)
                    .cloned()
                    .unwrap_or_else(|| (FontSpec::body(), BODY_COLOR));
                let (font, color) = restyle(&font, color);
                let Some(ch) = map.get_or_insert(&font, color) else {
                    return false;
                };
                replaced.push(ch);
            }
        }
        let mut styles = self.styles.clone();
        styles.replace(start, end, &replaced);
        true
    }

    /// Drop style entries no text (or pending typing style) refers to.
    fn compact_styles(&self) {
        let current = buffer_text_no_leak(&self.styles);
        let mut in_use = current.clone();
        if let Some(ch) = self.typing_style.get() {
            in_use.push(ch);
        }
        let remap = self.map.borrow_mut().compact(&in_use);
        let lookup = |ch: char| {
            (ch as u32)
                .checked_sub('A' as u32)
                .and_then(|idx| remap.get(idx as usize).copied())
                .unwrap_or('A')
        };

        let remapped: String = current.chars().map(lookup).collect();
        let mut styles = self.styles.clone();
        styles.set_text(&remapped);
        self.typing_style.set(self.typing_style.get().map(lookup));
    }

    /// Fresh document: only the default style remains. Call once the text
    /// has been replaced, so no style char points past the table.
    fn reset_styles(&self) {
        self.map.borrow_mut().reset();
        self.refresh_table();
    }

    fn refresh_table(&self) {
        let mut editor = self.editor.clone();
        editor.set_highlight_data(self.styles.clone(), self.map.borrow().entries().to_vec());
        editor.redraw();
    }
}

fn style_at(styles: &TextBuffer, pos: usize) -> Option<char> {
    style_byte_at(&buffer_text_no_leak(styles), pos).map(char::from)
}

fn preceding_style(styles: &TextBuffer, pos: i32) -> Option<char> {
    if pos <= 0 {
        return None;
    }
    style_at(styles, pos as usize - 1)
}

impl TextSurface for FltkTextSurface {
    fn selection_font(&self) -> Option<FontSpec> {
        Some(self.current_style().0)
    }

    fn set_selection_font(&self, font: &FontSpec) {
        self.restyle(|_, color| (font.clone(), color));
    }

    fn selection_color(&self) -> Rgb {
        self.current_style().1
    }

    fn set_selection_color(&self, color: Rgb) {
        self.restyle(|font, _| (font.clone(), color));
    }

    fn load_file(&self, path: &Path, mode: FileMode) -> Result<()> {
        let content = fs::read_to_string(path).map_err(|e| AppError::document(path, e))?;
        log::debug!("Loading {} as {:?}", path.display(), mode);

        self.typing_style.set(None);
        let mut buffer = self.buffer.clone();
        buffer.set_text(&content);
        self.reset_styles();
        let mut editor = self.editor.clone();
        editor.set_insert_position(0);
        editor.show_insert_position();
        self.last_caret.set((0, None));
        Ok(())
    }

    fn save_file(&self, path: &Path) -> Result<()> {
        fs::write(path, buffer_text_no_leak(&self.buffer)).map_err(|e| AppError::document(path, e))
    }

    fn find(&self, needle: &str) -> Option<usize> {
        let text = buffer_text_no_leak(&self.buffer);
        let pos = find_in_text(&text, needle, 0, false)?;
        let mut buffer = self.buffer.clone();
        buffer.select(pos as i32, (pos + needle.len()) as i32);
        let mut editor = self.editor.clone();
        editor.set_insert_position((pos + needle.len()) as i32);
        editor.show_insert_position();
        Some(pos)
    }

    fn clear(&self) {
        self.typing_style.set(None);
        let mut buffer = self.buffer.clone();
        buffer.set_text("");
        self.reset_styles();
        self.last_caret.set((0, None));
    }

    fn focus(&self) {
        let mut editor = self.editor.clone();
        let _ = editor.take_focus();
    }

    fn current_line(&self) -> usize {
        self.buffer.count_lines(0, self.editor.insert_position()).max(0) as usize
    }
}
