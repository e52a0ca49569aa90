//! Two-way sync between the formatting toolbar and the text selection.
//!
//! Pushing the selection's font into the toolbar can make the toolbar report
//! a change, and writing a toolbar value into the selection can make the
//! surface report a selection change. Both directions run inside one
//! `Applying` pass and anything that arrives during the pass is dropped, so
//! a single external event never turns into a second pass.

use std::cell::Cell;

use crate::app::domain::style::{FontSpec, Rgb, SelectionFontView, BODY_COLOR, HEADING_COLOR};
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::infrastructure::text_surface::TextSurface;

/// Font name, size and style toggles on the toolbar.
pub trait ToolbarControls {
    fn set_font_name(&self, name: &str);
    fn set_font_size_text(&self, text: &str);
    fn set_bold_checked(&self, checked: bool);
    fn set_italic_checked(&self, checked: bool);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    Idle,
    Applying,
}

/// A user edit on the toolbar, carrying the control's new value.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlChange {
    FontName(String),
    /// Raw text of the size control
    FontSize(String),
    Bold(bool),
    Italic(bool),
    Heading(bool),
    Color(Rgb),
    /// Whole font picked in the font dialog
    Font(FontSpec),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    Applied,
    /// Raised while a pass was already running; ignored.
    Suppressed,
    /// The surface could not report a font, nothing was changed.
    NoSelectionFont,
}

pub struct SelectionSyncController {
    state: Cell<SyncState>,
    applying_entries: Cell<u64>,
}

/// Puts the controller back to `Idle` when the pass ends, early returns included.
struct ApplyingGuard<'a> {
    state: &'a Cell<SyncState>,
}

impl Drop for ApplyingGuard<'_> {
    fn drop(&mut self) {
        self.state.set(SyncState::Idle);
    }
}

impl Default for SelectionSyncController {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionSyncController {
    pub fn new() -> Self {
        Self {
            state: Cell::new(SyncState::Idle),
            applying_entries: Cell::new(0),
        }
    }

    pub fn state(&self) -> SyncState {
        self.state.get()
    }

    /// How many passes have entered `Applying` so far.
    pub fn applying_entries(&self) -> u64 {
        self.applying_entries.get()
    }

    fn begin(&self) -> Option<ApplyingGuard<'_>> {
        if self.state.get() == SyncState::Applying {
            return None;
        }
        self.state.set(SyncState::Applying);
        self.applying_entries.set(self.applying_entries.get() + 1);
        Some(ApplyingGuard { state: &self.state })
    }

    /// Selection moved: mirror its font into the toolbar.
    pub fn selection_changed(&self, surface: &dyn TextSurface, controls: &dyn ToolbarControls) -> SyncOutcome {
        let Some(_pass) = self.begin() else {
            return SyncOutcome::Suppressed;
        };
        let Some(font) = surface.selection_font() else {
            return SyncOutcome::NoSelectionFont;
        };

        let view = SelectionFontView::from(&font);
        controls.set_font_name(&view.font_family);
        controls.set_font_size_text(&view.font_size_pt.to_string());
        controls.set_bold_checked(view.bold);
        controls.set_italic_checked(view.italic);
        SyncOutcome::Applied
    }

    /// User edited a toolbar control: write it onto the selection and hand
    /// focus back to the text.
    pub fn control_changed(&self, change: ControlChange, surface: &dyn TextSurface) -> SyncOutcome {
        let Some(_pass) = self.begin() else {
            return SyncOutcome::Suppressed;
        };

        match change {
            ControlChange::Heading(on) => {
                // Fixed fonts, independent of what the selection had
                if on {
                    surface.set_selection_font(&FontSpec::heading());
                    surface.set_selection_color(HEADING_COLOR);
                } else {
                    surface.set_selection_font(&FontSpec::body());
                    surface.set_selection_color(BODY_COLOR);
                }
            }
            ControlChange::Color(color) => surface.set_selection_color(color),
            ControlChange::Font(font) => surface.set_selection_font(&font),
            change => {
                let Some(current) = surface.selection_font() else {
                    return SyncOutcome::NoSelectionFont;
                };
                if let Some(font) = apply_attribute(current, change) {
                    surface.set_selection_font(&font);
                }
            }
        }

        surface.focus();
        SyncOutcome::Applied
    }
}

/// New selection font for a font attribute edit, or `None` to keep it.
fn apply_attribute(current: FontSpec, change: ControlChange) -> Option<FontSpec> {
    match change {
        ControlChange::FontName(name) => {
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            Some(current.with_family(name))
        }
        ControlChange::FontSize(text) => match parse_font_size(&text) {
            Ok(size) => Some(current.with_size(size)),
            Err(e) => {
                log::debug!("{}, keeping {}pt", e, current.size_pt);
                None
            }
        },
        ControlChange::Bold(bold) => Some(current.with_bold(bold)),
        ControlChange::Italic(italic) => Some(current.with_italic(italic)),
        ControlChange::Heading(_) | ControlChange::Color(_) | ControlChange::Font(_) => None,
    }
}

/// Parse the size control's text ("12", " 11.5 ").
pub fn parse_font_size(text: &str) -> Result<f32> {
    let size: f32 = text
        .trim()
        .parse()
        .map_err(|_| AppError::Parse(format!("font size '{}'", text)))?;
    if !size.is_finite() || size <= 0.0 {
        return Err(AppError::Parse(format!("font size '{}'", text)));
    }
    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::infrastructure::text_surface::FileMode;
    use std::cell::RefCell;
    use std::path::Path;
    use std::rc::Rc;

    type SurfaceHook = Box<dyn Fn(&MockSurface)>;

    struct MockSurface {
        font: RefCell<Option<FontSpec>>,
        color: Cell<Rgb>,
        focus_calls: Cell<usize>,
        font_writes: Cell<usize>,
        on_write: RefCell<Option<SurfaceHook>>,
    }

    impl MockSurface {
        fn with_font(font: FontSpec) -> Self {
            Self {
                font: RefCell::new(Some(font)),
                color: Cell::new(Rgb::BLACK),
                focus_calls: Cell::new(0),
                font_writes: Cell::new(0),
                on_write: RefCell::new(None),
            }
        }

        fn font(&self) -> Option<FontSpec> {
            self.font.borrow().clone()
        }
    }

    impl TextSurface for MockSurface {
        fn selection_font(&self) -> Option<FontSpec> {
            self.font.borrow().clone()
        }
        fn set_selection_font(&self, font: &FontSpec) {
            *self.font.borrow_mut() = Some(font.clone());
            self.font_writes.set(self.font_writes.get() + 1);
            // Real editors announce a selection change when formatting changes
            if let Some(hook) = self.on_write.borrow().as_ref() {
                hook(self);
            }
        }
        fn selection_color(&self) -> Rgb {
            self.color.get()
        }
        fn set_selection_color(&self, color: Rgb) {
            self.color.set(color);
        }
        fn load_file(&self, _path: &Path, _mode: FileMode) -> Result<()> {
            Ok(())
        }
        fn save_file(&self, _path: &Path) -> Result<()> {
            Ok(())
        }
        fn find(&self, _needle: &str) -> Option<usize> {
            None
        }
        fn clear(&self) {}
        fn focus(&self) {
            self.focus_calls.set(self.focus_calls.get() + 1);
        }
        fn current_line(&self) -> usize {
            0
        }
    }

    type ControlHook = Box<dyn Fn(ControlChange)>;

    #[derive(Default)]
    struct MockControls {
        name: RefCell<String>,
        size: RefCell<String>,
        bold: Cell<bool>,
        italic: Cell<bool>,
        on_change: RefCell<Option<ControlHook>>,
    }

    impl MockControls {
        fn fire(&self, change: ControlChange) {
            if let Some(hook) = self.on_change.borrow().as_ref() {
                hook(change);
            }
        }
    }

    impl ToolbarControls for MockControls {
        fn set_font_name(&self, name: &str) {
            *self.name.borrow_mut() = name.to_string();
            self.fire(ControlChange::FontName(name.to_string()));
        }
        fn set_font_size_text(&self, text: &str) {
            *self.size.borrow_mut() = text.to_string();
            self.fire(ControlChange::FontSize(text.to_string()));
        }
        fn set_bold_checked(&self, checked: bool) {
            self.bold.set(checked);
            self.fire(ControlChange::Bold(checked));
        }
        fn set_italic_checked(&self, checked: bool) {
            self.italic.set(checked);
            self.fire(ControlChange::Italic(checked));
        }
    }

    #[test]
    fn test_selection_pushes_view_into_controls() {
        let sync = SelectionSyncController::new();
        let surface = MockSurface::with_font(FontSpec::new("Georgia", 13.7).with_bold(true));
        let controls = MockControls::default();

        assert_eq!(sync.selection_changed(&surface, &controls), SyncOutcome::Applied);
        assert_eq!(*controls.name.borrow(), "Georgia");
        assert_eq!(*controls.size.borrow(), "13");
        assert!(controls.bold.get());
        assert!(!controls.italic.get());
        assert_eq!(sync.state(), SyncState::Idle);
    }

    #[test]
    fn test_selection_without_font_leaves_controls() {
        let sync = SelectionSyncController::new();
        let surface = MockSurface::with_font(FontSpec::body());
        *surface.font.borrow_mut() = None;
        let controls = MockControls::default();

        assert_eq!(sync.selection_changed(&surface, &controls), SyncOutcome::NoSelectionFont);
        assert!(controls.name.borrow().is_empty());
        assert_eq!(sync.state(), SyncState::Idle);
    }

    #[test]
    fn test_control_echo_is_suppressed() {
        let sync = Rc::new(SelectionSyncController::new());
        let surface = Rc::new(MockSurface::with_font(FontSpec::new("Georgia", 12.0).with_italic(true)));
        let controls = MockControls::default();
        let echoes = Rc::new(RefCell::new(Vec::new()));

        {
            let sync = sync.clone();
            let surface = surface.clone();
            let echoes = echoes.clone();
            *controls.on_change.borrow_mut() = Some(Box::new(move |change| {
                echoes.borrow_mut().push(sync.control_changed(change, &*surface));
            }));
        }

        assert_eq!(sync.selection_changed(&*surface, &controls), SyncOutcome::Applied);
        assert_eq!(sync.applying_entries(), 1);
        assert_eq!(echoes.borrow().len(), 4);
        assert!(echoes.borrow().iter().all(|o| *o == SyncOutcome::Suppressed));
        assert_eq!(surface.font_writes.get(), 0);
        assert_eq!(surface.focus_calls.get(), 0);
        assert_eq!(sync.state(), SyncState::Idle);
    }

    #[test]
    fn test_surface_echo_is_suppressed() {
        let sync = Rc::new(SelectionSyncController::new());
        let surface = MockSurface::with_font(FontSpec::body());
        let controls = Rc::new(MockControls::default());
        let echoes = Rc::new(RefCell::new(Vec::new()));

        {
            let sync = sync.clone();
            let controls = controls.clone();
            let echoes = echoes.clone();
            *surface.on_write.borrow_mut() = Some(Box::new(move |s: &MockSurface| {
                echoes.borrow_mut().push(sync.selection_changed(s, &*controls));
            }));
        }

        let outcome = sync.control_changed(ControlChange::Bold(true), &surface);
        assert_eq!(outcome, SyncOutcome::Applied);
        assert_eq!(*echoes.borrow(), vec![SyncOutcome::Suppressed]);
        assert_eq!(sync.applying_entries(), 1);
        assert!(surface.font().unwrap().bold);
        // The echo never reached the toolbar
        assert!(controls.name.borrow().is_empty());
    }

    #[test]
    fn test_each_external_event_is_one_pass() {
        let sync = SelectionSyncController::new();
        let surface = MockSurface::with_font(FontSpec::body());
        let controls = MockControls::default();

        sync.selection_changed(&surface, &controls);
        sync.control_changed(ControlChange::Italic(true), &surface);
        sync.selection_changed(&surface, &controls);
        assert_eq!(sync.applying_entries(), 3);
        assert!(controls.italic.get());
    }

    #[test]
    fn test_font_name_written_and_focus_returned() {
        let sync = SelectionSyncController::new();
        let surface = MockSurface::with_font(FontSpec::body().with_bold(true));

        let outcome = sync.control_changed(ControlChange::FontName("Georgia".to_string()), &surface);
        assert_eq!(outcome, SyncOutcome::Applied);
        let font = surface.font().unwrap();
        assert_eq!(font.family, "Georgia");
        assert_eq!(font.size_pt, 11.5);
        assert!(font.bold);
        assert_eq!(surface.focus_calls.get(), 1);
    }

    #[test]
    fn test_blank_font_name_ignored() {
        let sync = SelectionSyncController::new();
        let surface = MockSurface::with_font(FontSpec::body());

        sync.control_changed(ControlChange::FontName("   ".to_string()), &surface);
        assert_eq!(surface.font().unwrap().family, "Calibri");
        assert_eq!(surface.font_writes.get(), 0);
    }

    #[test]
    fn test_font_size_written() {
        let sync = SelectionSyncController::new();
        let surface = MockSurface::with_font(FontSpec::body());

        sync.control_changed(ControlChange::FontSize(" 24 ".to_string()), &surface);
        assert_eq!(surface.font().unwrap().size_pt, 24.0);
    }

    #[test]
    fn test_font_size_parse_failure_keeps_size() {
        let sync = SelectionSyncController::new();
        let surface = MockSurface::with_font(FontSpec::body());

        for bad in ["abc", "", "-3", "0", "NaN", "12pt"] {
            let outcome = sync.control_changed(ControlChange::FontSize(bad.to_string()), &surface);
            assert_eq!(outcome, SyncOutcome::Applied);
            assert_eq!(surface.font().unwrap().size_pt, 11.5);
        }
        assert_eq!(surface.font_writes.get(), 0);
        assert_eq!(sync.state(), SyncState::Idle);
    }

    #[test]
    fn test_bold_and_italic_set_explicitly() {
        let sync = SelectionSyncController::new();
        let surface = MockSurface::with_font(FontSpec::body());

        sync.control_changed(ControlChange::Bold(true), &surface);
        sync.control_changed(ControlChange::Italic(true), &surface);
        sync.control_changed(ControlChange::Bold(false), &surface);
        let font = surface.font().unwrap();
        assert!(!font.bold);
        assert!(font.italic);
    }

    #[test]
    fn test_heading_on_and_off() {
        let sync = SelectionSyncController::new();
        let surface = MockSurface::with_font(FontSpec::new("Georgia", 9.0).with_italic(true));

        sync.control_changed(ControlChange::Heading(true), &surface);
        assert_eq!(surface.font(), Some(FontSpec::heading()));
        assert_eq!(surface.color.get(), HEADING_COLOR);

        sync.control_changed(ControlChange::Heading(false), &surface);
        assert_eq!(surface.font(), Some(FontSpec::body()));
        assert_eq!(surface.color.get(), BODY_COLOR);
    }

    #[test]
    fn test_heading_works_without_selection_font() {
        let sync = SelectionSyncController::new();
        let surface = MockSurface::with_font(FontSpec::body());
        *surface.font.borrow_mut() = None;

        assert_eq!(sync.control_changed(ControlChange::Heading(true), &surface), SyncOutcome::Applied);
        assert_eq!(surface.font(), Some(FontSpec::heading()));
    }

    #[test]
    fn test_attribute_without_selection_font() {
        let sync = SelectionSyncController::new();
        let surface = MockSurface::with_font(FontSpec::body());
        *surface.font.borrow_mut() = None;

        let outcome = sync.control_changed(ControlChange::Bold(true), &surface);
        assert_eq!(outcome, SyncOutcome::NoSelectionFont);
        assert_eq!(surface.focus_calls.get(), 0);
        assert_eq!(sync.state(), SyncState::Idle);
    }

    #[test]
    fn test_color_change() {
        let sync = SelectionSyncController::new();
        let surface = MockSurface::with_font(FontSpec::body());

        sync.control_changed(ControlChange::Color(Rgb::new(200, 0, 0)), &surface);
        assert_eq!(surface.color.get(), Rgb::new(200, 0, 0));
        assert_eq!(surface.font(), Some(FontSpec::body()));
    }

    #[test]
    fn test_font_dialog_replaces_whole_font() {
        let sync = SelectionSyncController::new();
        let surface = MockSurface::with_font(FontSpec::body().with_bold(true));
        let picked = FontSpec::new("Georgia", 18.0).with_italic(true);

        let outcome = sync.control_changed(ControlChange::Font(picked.clone()), &surface);
        assert_eq!(outcome, SyncOutcome::Applied);
        assert_eq!(surface.font(), Some(picked));
        assert_eq!(surface.font_writes.get(), 1);
        assert_eq!(surface.focus_calls.get(), 1);
    }

    #[test]
    fn test_parse_font_size() {
        assert_eq!(parse_font_size("12").unwrap(), 12.0);
        assert_eq!(parse_font_size("11.5").unwrap(), 11.5);
        assert!(matches!(parse_font_size("big"), Err(AppError::Parse(_))));
        assert!(parse_font_size("inf").is_err());
    }
}
