use std::path::PathBuf;

use super::session::Language;
use super::theme::Theme;

/// All messages that can be sent through the FLTK channel.
/// Widget callbacks only send one of these; `AppState::handle` does the work.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // File
    FileNew,
    FileOpen,
    FileSave,
    OpenRecent(PathBuf),
    FileQuit,

    // Welcome view
    WelcomeNew,
    WelcomeTheme,

    // Format
    ShowColorDialog,
    ShowFontDialog,
    ShowFind,

    // Toolbar
    FontNameChanged,
    FontSizeChanged,
    BoldToggled,
    ItalicToggled,
    HeadingToggled,
    ToggleFontControls,

    // Editor notifications
    SelectionChanged,
    EditorScrolled,

    // More
    SetTheme(Theme),
    SetLanguage(Language),
    ShowAbout,
}
