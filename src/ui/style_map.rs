use fltk::enums::Font;
use fltk::text::StyleTableEntry;

use crate::app::domain::{FontSpec, Rgb};
use super::theme::to_color;

/// FLTK style chars run from 'A' to 'z'.
pub const MAX_STYLES: usize = 58;

/// Maps (font, color) pairs to FLTK style characters ('A', 'B', 'C', ...).
/// Keeps the requested `FontSpec` next to each entry so the surface reports
/// back exactly what was set, even when FLTK substitutes the face.
pub struct StyleMap {
    styles: Vec<(FontSpec, Rgb)>,
    entries: Vec<StyleTableEntry>,
    loaded_fonts: Vec<String>,
}

impl StyleMap {
    pub fn new(base: FontSpec, color: Rgb, loaded_fonts: Vec<String>) -> Self {
        let mut map = Self {
            styles: Vec::new(),
            entries: Vec::new(),
            loaded_fonts,
        };
        // 'A' is the default style for untouched text
        map.push(base, color);
        map
    }

    fn push(&mut self, font: FontSpec, color: Rgb) -> char {
        let ch = (b'A' + self.styles.len() as u8) as char;
        self.entries.push(StyleTableEntry {
            color: to_color(color),
            font: resolve_font(&font, &self.loaded_fonts),
            size: point_size(&font),
        });
        self.styles.push((font, color));
        ch
    }

    /// Style char for the pair, adding an entry on first use.
    /// Returns `None` when the table is full.
    pub fn get_or_insert(&mut self, font: &FontSpec, color: Rgb) -> Option<char> {
        if let Some(idx) = self.styles.iter().position(|(f, c)| f == font && *c == color) {
            return Some((b'A' + idx as u8) as char);
        }
        if self.styles.len() >= MAX_STYLES {
            log::debug!("Style table full, dropping {:?}", font);
            return None;
        }
        Some(self.push(font.clone(), color))
    }

    /// Drop every entry but the default 'A', for a fresh document.
    pub fn reset(&mut self) {
        self.styles.truncate(1);
        self.entries.truncate(1);
    }

    /// Rebuild the table from the entries `in_use` still refers to, keeping
    /// 'A'. Returns the new char for each old index; dropped ones map to 'A'.
    pub fn compact(&mut self, in_use: &str) -> Vec<char> {
        let mut used = vec![false; self.styles.len()];
        if let Some(first) = used.first_mut() {
            *first = true;
        }
        for ch in in_use.chars() {
            if let Some(slot) = style_index(ch).and_then(|idx| used.get_mut(idx)) {
                *slot = true;
            }
        }

        let old = std::mem::take(&mut self.styles);
        self.entries.clear();
        let mut remap = vec!['A'; old.len()];
        for (idx, (font, color)) in old.into_iter().enumerate() {
            if used[idx] {
                remap[idx] = self.push(font, color);
            }
        }
        log::debug!("Style table compacted to {} entries", self.styles.len());
        remap
    }

    pub fn style(&self, ch: char) -> Option<&(FontSpec, Rgb)> {
        self.styles.get(style_index(ch)?)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Get the style table entries for FLTK's set_highlight_data.
    pub fn entries(&self) -> &[StyleTableEntry] {
        &self.entries
    }
}

fn style_index(ch: char) -> Option<usize> {
    (ch as u32).checked_sub('A' as u32).map(|idx| idx as usize)
}

fn point_size(font: &FontSpec) -> i32 {
    (font.size_pt.round() as i32).max(1)
}

/// Pick the FLTK face for a font. Built-in families get their styled
/// variants; other names are looked up among the loaded system fonts, where
/// FLTK prefixes styled faces with 'B', 'I' or 'P' (bold italic).
pub fn resolve_font(font: &FontSpec, loaded: &[String]) -> Font {
    let builtin = match font.family.to_ascii_lowercase().as_str() {
        "helvetica" | "arial" | "sans" | "sans-serif" => Some([
            Font::Helvetica,
            Font::HelveticaBold,
            Font::HelveticaItalic,
            Font::HelveticaBoldItalic,
        ]),
        "courier" | "courier new" | "monospace" => Some([
            Font::Courier,
            Font::CourierBold,
            Font::CourierItalic,
            Font::CourierBoldItalic,
        ]),
        "times" | "times new roman" | "serif" => Some([
            Font::Times,
            Font::TimesBold,
            Font::TimesItalic,
            Font::TimesBoldItalic,
        ]),
        _ => None,
    };
    let variant = match (font.bold, font.italic) {
        (false, false) => 0,
        (true, false) => 1,
        (false, true) => 2,
        (true, true) => 3,
    };
    if let Some(faces) = builtin {
        return faces[variant];
    }

    let prefix = ["", "B", "I", "P"][variant];
    let styled = format!("{}{}", prefix, font.family);
    let lookup = |name: &str| loaded.iter().position(|n| n.trim() == name);
    if let Some(idx) = lookup(&styled).or_else(|| lookup(&font.family)) {
        return Font::by_index(idx);
    }
    [
        Font::Helvetica,
        Font::HelveticaBold,
        Font::HelveticaItalic,
        Font::HelveticaBoldItalic,
    ][variant]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style_is_a() {
        let mut map = StyleMap::new(FontSpec::body(), Rgb::BLACK, Vec::new());
        assert_eq!(map.get_or_insert(&FontSpec::body(), Rgb::BLACK), Some('A'));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_new_pairs_get_next_char() {
        let mut map = StyleMap::new(FontSpec::body(), Rgb::BLACK, Vec::new());
        let bold = FontSpec::body().with_bold(true);
        assert_eq!(map.get_or_insert(&bold, Rgb::BLACK), Some('B'));
        assert_eq!(map.get_or_insert(&bold, Rgb::new(200, 0, 0)), Some('C'));
        assert_eq!(map.get_or_insert(&bold, Rgb::BLACK), Some('B'));
        assert_eq!(map.entries().len(), 3);
    }

    #[test]
    fn test_style_keeps_requested_spec() {
        let mut map = StyleMap::new(FontSpec::body(), Rgb::BLACK, Vec::new());
        let ch = map.get_or_insert(&FontSpec::heading(), Rgb::new(0, 120, 215)).unwrap();
        let (font, color) = map.style(ch).unwrap();
        assert_eq!(font.family, "Segoe UI");
        assert_eq!(*color, Rgb::new(0, 120, 215));
        assert!(map.style('@').is_none());
        assert!(map.style('z').is_none());
    }

    #[test]
    fn test_table_full() {
        let mut map = StyleMap::new(FontSpec::body(), Rgb::BLACK, Vec::new());
        for i in 1..MAX_STYLES {
            assert!(map.get_or_insert(&FontSpec::new("Arial", i as f32), Rgb::BLACK).is_some());
        }
        assert_eq!(map.get_or_insert(&FontSpec::new("Arial", 99.0), Rgb::BLACK), None);
        assert_eq!(map.style('z').map(|(f, _)| f.size_pt), Some(57.0));
    }

    fn fill(map: &mut StyleMap) {
        for i in 1..MAX_STYLES {
            map.get_or_insert(&FontSpec::new("Arial", i as f32), Rgb::BLACK);
        }
    }

    #[test]
    fn test_formatting_works_after_reset_of_full_table() {
        let mut map = StyleMap::new(FontSpec::body(), Rgb::BLACK, Vec::new());
        fill(&mut map);
        let bold = FontSpec::body().with_bold(true);
        assert_eq!(map.get_or_insert(&bold, Rgb::BLACK), None);

        map.reset();
        assert_eq!(map.len(), 1);
        assert_eq!(map.entries().len(), 1);
        assert_eq!(map.get_or_insert(&bold, Rgb::BLACK), Some('B'));
        assert_eq!(map.style('A').map(|(f, _)| f.clone()), Some(FontSpec::body()));
    }

    #[test]
    fn test_compact_keeps_used_entries() {
        let mut map = StyleMap::new(FontSpec::body(), Rgb::BLACK, Vec::new());
        fill(&mut map);
        // Only 'A' and the 13pt entry ('N') are still on screen
        let remap = map.compact("AANNA");
        assert_eq!(map.len(), 2);
        assert_eq!(remap[0], 'A');
        assert_eq!(remap[13], 'B');
        assert_eq!(remap[5], 'A');
        assert_eq!(map.style('B').map(|(f, _)| f.size_pt), Some(13.0));

        let bold = FontSpec::body().with_bold(true);
        assert_eq!(map.get_or_insert(&bold, Rgb::BLACK), Some('C'));
        assert_eq!(map.entries().len(), 3);
    }

    #[test]
    fn test_resolve_builtin_variants() {
        let times = FontSpec::new("Times New Roman", 12.0).with_bold(true).with_italic(true);
        assert_eq!(resolve_font(&times, &[]), Font::TimesBoldItalic);
        assert_eq!(resolve_font(&FontSpec::new("Courier", 10.0), &[]), Font::Courier);
    }

    #[test]
    fn test_resolve_unknown_falls_back_to_helvetica() {
        let spec = FontSpec::new("Nope Sans", 12.0).with_italic(true);
        assert_eq!(resolve_font(&spec, &[]), Font::HelveticaItalic);
    }
}
