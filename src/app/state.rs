use std::path::{Path, PathBuf};

use fltk::{
    app::Sender,
    dialog::{self, ColorMode},
    prelude::*,
};

use super::controllers::document::DocumentController;
use super::controllers::recent_files::RecentFilesController;
use super::controllers::selection_sync::{ControlChange, SelectionSyncController};
use super::controllers::theme::{ThemeEngine, ThemeSurfaces};
use super::domain::{EnvironmentInfo, FontSpec, Label, Language, Message, Rgb, SessionState, Theme};
use super::infrastructure::error::AppError;
use super::infrastructure::platform::Composition;
use super::infrastructure::text_surface::TextSurface;
use super::services::session_store::SessionStore;
use super::services::text_ops::{is_beta_format, page_for_line};
use crate::ui::dialogs::about::show_about_dialog;
use crate::ui::dialogs::font_dialog::show_font_dialog;
use crate::ui::dialogs::theme_picker::show_theme_picker;
use crate::ui::file_dialogs::{native_open_dialog, native_save_dialog};
use crate::ui::main_window::MainWidgets;
use crate::ui::menu::{build_menu, MenuContext};
use crate::ui::theme::WindowBackground;
use crate::ui::toolbar::font_families;

/// Owns the widgets, the session and the controllers. Widget callbacks only
/// send messages; everything happens in [`AppState::handle`].
pub struct AppState {
    pub widgets: MainWidgets,
    pub sender: Sender<Message>,
    pub session: SessionState,
    pub recent: RecentFilesController,
    pub theme: ThemeEngine,
    composition: Box<dyn Composition>,
    sync: SelectionSyncController,
    document: DocumentController,
    page: usize,
}

impl AppState {
    pub fn new(
        widgets: MainWidgets,
        sender: Sender<Message>,
        store: SessionStore,
        session: SessionState,
        env: EnvironmentInfo,
        composition: Box<dyn Composition>,
    ) -> Self {
        let recent = RecentFilesController::new(store, &session);
        let mut state = Self {
            widgets,
            sender,
            session,
            recent,
            theme: ThemeEngine::new(env),
            composition,
            sync: SelectionSyncController::new(),
            document: DocumentController::new(),
            page: 1,
        };
        state.apply_theme(state.theme.active());
        state.update_window_title();
        state
    }

    pub fn lang(&self) -> Language {
        self.session.language
    }

    /// Bind platform hooks to the native window and re-apply the theme,
    /// which may now get glass. Must be called AFTER window.show().
    pub fn attach_native_window(&mut self) {
        #[cfg(target_os = "windows")]
        self.composition.attach_window(self.widgets.wind.raw_handle() as usize);
        self.apply_theme(self.theme.active());
    }

    pub fn handle(&mut self, msg: Message) {
        match msg {
            Message::FileNew => self.file_new(),
            Message::WelcomeNew => self.start_writing(),
            Message::FileOpen => self.file_open(),
            Message::OpenRecent(path) => self.open_path(&path),
            Message::FileSave => self.file_save(),
            Message::FileQuit => self.widgets.wind.hide(),

            Message::WelcomeTheme => {
                if let Some(theme) = show_theme_picker(self.theme.active(), self.lang()) {
                    self.apply_theme(theme);
                }
            }
            Message::SetTheme(theme) => self.apply_theme(theme),
            Message::SetLanguage(lang) => self.set_language(lang),
            Message::ShowAbout => show_about_dialog(self.lang()),

            Message::ShowColorDialog => self.choose_color(),
            Message::ShowFontDialog => self.choose_font(),
            Message::ShowFind => self.find(),

            Message::FontNameChanged => {
                let name = self.widgets.toolbar.font_name_text();
                self.control_changed(ControlChange::FontName(name));
            }
            Message::FontSizeChanged => {
                let size = self.widgets.toolbar.font_size_text();
                self.control_changed(ControlChange::FontSize(size));
            }
            Message::BoldToggled => {
                let on = self.widgets.toolbar.bold.value();
                self.control_changed(ControlChange::Bold(on));
            }
            Message::ItalicToggled => {
                let on = self.widgets.toolbar.italic.value();
                self.control_changed(ControlChange::Italic(on));
            }
            Message::HeadingToggled => {
                let on = self.widgets.toolbar.heading.value();
                self.control_changed(ControlChange::Heading(on));
            }
            Message::ToggleFontControls => {
                let visible = !self.widgets.toolbar.font_controls_visible();
                self.widgets.toolbar.set_font_controls_visible(visible);
            }

            Message::SelectionChanged => {
                if self.widgets.surface.poll_selection_moved() {
                    self.sync_selection();
                }
                self.update_page();
            }
            Message::EditorScrolled => self.update_page(),
        }
    }

    // --- Theme and language ---

    pub fn apply_theme(&mut self, theme: Theme) {
        let w = &mut self.widgets;
        let mut window = WindowBackground::new(&w.wind);
        self.theme.apply(
            theme,
            ThemeSurfaces {
                menu: &mut w.menu,
                toolbar: &mut w.tool_strip,
                window: &mut window,
            },
            self.composition.as_ref(),
        );
        self.rebuild_menu();
    }

    pub fn rebuild_menu(&mut self) {
        let ctx = MenuContext {
            recent: self.recent.entries(),
            active_theme: self.theme.active(),
            font_controls_visible: self.widgets.toolbar.font_controls_visible(),
        };
        build_menu(&mut self.widgets.menu.menu, &self.sender, self.session.language, &ctx);
        self.widgets.menu.menu.redraw();
    }

    /// Switch the UI language in place and persist it.
    pub fn set_language(&mut self, lang: Language) {
        if lang == self.session.language {
            return;
        }
        self.session.language = lang;
        log::info!("Language set to {}", lang.tag());

        self.rebuild_menu();
        self.widgets.toolbar.relabel(lang);
        self.widgets.welcome.relabel(lang);
        self.widgets.status.set_status(Label::StatusReady.text(lang));
        self.widgets.status.set_page(lang, self.page);

        if let Err(e) = self.recent.store().save(&self.session) {
            self.report_settings_error(&e);
        }
    }

    // --- Documents ---

    /// Empty document, back on the welcome page.
    fn file_new(&mut self) {
        self.reset_document();
        self.widgets.show_welcome();
    }

    /// Empty document, straight into the editor.
    fn start_writing(&mut self) {
        self.reset_document();
        self.widgets.show_editor();
        self.widgets.surface.focus();
    }

    fn reset_document(&mut self) {
        self.document.new_document(&self.widgets.surface);
        self.update_window_title();
        self.set_ready();
        self.sync_selection();
        self.update_page();
    }

    fn file_open(&mut self) {
        if let Some(path) = native_open_dialog(Label::MenuOpen.text(self.lang())) {
            self.open_path(&path);
        }
    }

    /// Open `path` in the editor and move it to the top of the recent list.
    pub fn open_path(&mut self, path: &Path) {
        self.widgets.show_editor();
        if is_beta_format(path) {
            dialog::message_default(Label::DocxBeta.text(self.lang()));
        }

        match self.document.open(path, &self.widgets.surface) {
            Ok(()) => {
                self.remember(path.to_path_buf());
                self.update_window_title();
                self.sync_selection();
                self.update_page();
            }
            Err(e) => {
                log::warn!("{}", e);
                let text = format!("{}: {}", Label::OpenFailed.text(self.lang()), e);
                self.widgets.status.set_status(&text);
            }
        }
    }

    fn file_save(&mut self) {
        let Some(path) = native_save_dialog(Label::MenuSave.text(self.lang())) else {
            return;
        };
        match self.document.save_as(&path, &self.widgets.surface) {
            Ok(()) => {
                self.remember(path);
                self.update_window_title();
            }
            Err(e) => {
                log::warn!("{}", e);
                let text = format!("{}: {}", Label::SaveFailed.text(self.lang()), e);
                self.widgets.status.set_status(&text);
            }
        }
    }

    fn remember(&mut self, path: PathBuf) {
        let saved = self.recent.record_open(&mut self.session, &path);
        self.rebuild_menu();
        match saved {
            Ok(()) => self.set_ready(),
            Err(e) => self.report_settings_error(&e),
        }
    }

    fn update_window_title(&mut self) {
        self.widgets.wind.set_label(&self.document.window_title());
    }

    // --- Formatting ---

    fn sync_selection(&mut self) {
        self.sync.selection_changed(&self.widgets.surface, &self.widgets.toolbar);
    }

    fn control_changed(&mut self, change: ControlChange) {
        self.sync.control_changed(change, &self.widgets.surface);
        // Heading and color writes can change more than the edited control shows
        self.sync_selection();
    }

    fn choose_color(&mut self) {
        let title = Label::MenuColor.text(self.lang()).trim_end_matches("...");
        if let Some((r, g, b)) = dialog::color_chooser(title, ColorMode::Rgb) {
            self.control_changed(ControlChange::Color(Rgb::new(r, g, b)));
        }
    }

    fn choose_font(&mut self) {
        let current = self.widgets.surface.selection_font().unwrap_or_else(FontSpec::body);
        let families = font_families(&fltk::app::fonts());
        if let Some(font) = show_font_dialog(&current, &families, self.lang()) {
            self.widgets.show_editor();
            self.control_changed(ControlChange::Font(font));
        }
    }

    fn find(&mut self) {
        let lang = self.lang();
        let Some(needle) = dialog::input_default(Label::FindPrompt.text(lang), "") else {
            return;
        };
        if needle.is_empty() {
            return;
        }
        self.widgets.show_editor();
        match self.widgets.surface.find(&needle) {
            Some(_) => {
                self.set_ready();
                self.sync_selection();
                self.update_page();
            }
            None => {
                let text = format!("{}: '{}'", Label::NotFound.text(lang), needle);
                self.widgets.status.set_status(&text);
            }
        }
    }

    // --- Status bar ---

    fn set_ready(&mut self) {
        let text = Label::StatusReady.text(self.lang());
        self.widgets.status.set_status(text);
    }

    fn update_page(&mut self) {
        let page = page_for_line(self.widgets.surface.current_line());
        if page != self.page {
            self.page = page;
            self.widgets.status.set_page(self.session.language, page);
        }
    }

    fn report_settings_error(&mut self, e: &AppError) {
        log::warn!("{}", e);
        let text = format!("{}: {}", Label::SettingsNotSaved.text(self.lang()), e);
        self.widgets.status.set_status(&text);
    }
}
