//! User-facing strings as a function of the active language.
//!
//! Everything the shell displays goes through [`Label::text`], so switching
//! the language only needs a re-render of the affected widgets.

use super::session::Language;

pub const APP_NAME: &str = "Project Writer";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    MenuFile,
    MenuNew,
    MenuOpen,
    MenuRecent,
    MenuSave,
    MenuExit,
    MenuFormat,
    MenuColor,
    MenuFont,
    MenuSearch,
    MenuMore,
    MenuToolbarConfig,
    MenuShowFontControls,
    MenuThemeConfig,
    MenuLanguage,
    MenuAbout,
    ToolbarOpen,
    WelcomeTitle,
    WelcomeNew,
    WelcomeOpen,
    WelcomeTheme,
    StatusReady,
    PagePrefix,
    FindPrompt,
    NotFound,
    FontFamily,
    FontSize,
    FontBold,
    FontItalic,
    DocxBeta,
    OpenFailed,
    SaveFailed,
    SettingsNotSaved,
    Untitled,
}

impl Label {
    pub fn text(self, lang: Language) -> &'static str {
        match lang {
            Language::English => self.english(),
            Language::German => self.german(),
        }
    }

    fn english(self) -> &'static str {
        match self {
            Self::MenuFile => "File",
            Self::MenuNew => "New",
            Self::MenuOpen => "Open...",
            Self::MenuRecent => "Recent Files",
            Self::MenuSave => "Save...",
            Self::MenuExit => "Exit",
            Self::MenuFormat => "Format",
            Self::MenuColor => "Color Dialog...",
            Self::MenuFont => "Font Dialog...",
            Self::MenuSearch => "Search",
            Self::MenuMore => "More",
            Self::MenuToolbarConfig => "Toolbar Configuration",
            Self::MenuShowFontControls => "Show Font Controls",
            Self::MenuThemeConfig => "Theme Configuration",
            Self::MenuLanguage => "Language \\/ Sprache",
            Self::MenuAbout => "About",
            Self::ToolbarOpen => "Open",
            Self::WelcomeTitle => "Welcome to Project Writer",
            Self::WelcomeNew => "Create New Document",
            Self::WelcomeOpen => "Open Existing File...",
            Self::WelcomeTheme => "Configure Theme...",
            Self::StatusReady => "Ready",
            Self::PagePrefix => "Page: ",
            Self::FindPrompt => "Find:",
            Self::NotFound => "Not found",
            Self::FontFamily => "Font:",
            Self::FontSize => "Size:",
            Self::FontBold => "Bold",
            Self::FontItalic => "Italic",
            Self::DocxBeta => "Docx support is in Beta. Some WordArt features may be missing.",
            Self::OpenFailed => "Could not open file",
            Self::SaveFailed => "Could not save file",
            Self::SettingsNotSaved => "Settings could not be saved",
            Self::Untitled => "Untitled",
        }
    }

    fn german(self) -> &'static str {
        match self {
            Self::MenuFile => "Datei",
            Self::MenuNew => "Neu",
            Self::MenuOpen => "Öffnen...",
            Self::MenuRecent => "Zuletzt verwendet",
            Self::MenuSave => "Speichern...",
            Self::MenuExit => "Beenden",
            Self::MenuFormat => "Format",
            Self::MenuColor => "Farbe...",
            Self::MenuFont => "Schriftart...",
            Self::MenuSearch => "Suchen",
            Self::MenuMore => "Mehr",
            Self::MenuToolbarConfig => "Symbolleiste",
            Self::MenuShowFontControls => "Schriftauswahl anzeigen",
            Self::MenuThemeConfig => "Design",
            Self::MenuLanguage => "Language \\/ Sprache",
            Self::MenuAbout => "Über",
            Self::ToolbarOpen => "Öffnen",
            Self::WelcomeTitle => "Willkommen bei Project Writer",
            Self::WelcomeNew => "Neues Dokument",
            Self::WelcomeOpen => "Öffnen...",
            Self::WelcomeTheme => "Themen...",
            Self::StatusReady => "Bereit",
            Self::PagePrefix => "Seite: ",
            Self::FindPrompt => "Suchen:",
            Self::NotFound => "Nicht gefunden",
            Self::FontFamily => "Schriftart:",
            Self::FontSize => "Größe:",
            Self::FontBold => "Fett",
            Self::FontItalic => "Kursiv",
            Self::DocxBeta => "Docx-Unterstützung ist in der Beta. Einige WordArt-Funktionen fehlen eventuell.",
            Self::OpenFailed => "Datei konnte nicht geöffnet werden",
            Self::SaveFailed => "Datei konnte nicht gespeichert werden",
            Self::SettingsNotSaved => "Einstellungen konnten nicht gespeichert werden",
            Self::Untitled => "Unbenannt",
        }
    }
}

/// Text for the page indicator in the status bar.
pub fn page_label(lang: Language, page: usize) -> String {
    format!("{}{}", Label::PagePrefix.text(lang), page)
}

pub fn about_text() -> String {
    format!("{} {}\nA small rich-text writer.", APP_NAME, APP_VERSION)
}
