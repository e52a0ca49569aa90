use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::controllers::recent_files::RecentEntry;
use crate::app::domain::{Label, Language, Message, Theme};
use super::toolbar::escape_menu_label;

/// Everything the menus depend on besides the language.
pub struct MenuContext<'a> {
    pub recent: &'a [RecentEntry],
    pub active_theme: Theme,
    pub font_controls_visible: bool,
}

/// (Re)build the whole menu bar for `lang`.
pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>, lang: Language, ctx: &MenuContext<'_>) {
    menu.clear();
    let s = sender;
    let t = |label: Label| label.text(lang);

    // File
    let file = t(Label::MenuFile);
    menu.add(&format!("{}/{}", file, t(Label::MenuNew)), Shortcut::Ctrl | 'n', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileNew) });
    menu.add(&format!("{}/{}", file, t(Label::MenuOpen)), Shortcut::Ctrl | 'o', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileOpen) });
    if ctx.recent.is_empty() {
        menu.add(&format!("{}/{}", file, t(Label::MenuRecent)), Shortcut::None, MenuFlag::Inactive | MenuFlag::Submenu, |_| {});
    }
    for (entry, label) in ctx.recent.iter().zip(recent_item_labels(ctx.recent)) {
        let path = format!("{}/{}/{}", file, t(Label::MenuRecent), label);
        let action = entry.open_action();
        menu.add(&path, Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(action.clone()) });
    }
    menu.add(&format!("{}/{}", file, t(Label::MenuSave)), Shortcut::Ctrl | 's', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::FileSave) });
    menu.add(&format!("{}/{}", file, t(Label::MenuExit)), Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileQuit) });

    // Format
    let format = t(Label::MenuFormat);
    menu.add(&format!("{}/{}", format, t(Label::MenuColor)), Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowColorDialog) });
    menu.add(&format!("{}/{}", format, t(Label::MenuFont)), Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowFontDialog) });

    // Search
    menu.add(t(Label::MenuSearch), Shortcut::Ctrl | 'f', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowFind) });

    // More
    let more = t(Label::MenuMore);
    let fc_flag = if ctx.font_controls_visible { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle };
    menu.add(
        &format!("{}/{}/{}", more, t(Label::MenuToolbarConfig), t(Label::MenuShowFontControls)),
        Shortcut::None,
        fc_flag,
        { let s = *s; move |_| s.send(Message::ToggleFontControls) },
    );
    for theme in Theme::ALL {
        let flag = if theme == ctx.active_theme { MenuFlag::Radio | MenuFlag::Value } else { MenuFlag::Radio };
        let path = format!("{}/{}/{}", more, t(Label::MenuThemeConfig), theme.display_name());
        menu.add(&path, Shortcut::None, flag, { let s = *s; move |_| s.send(Message::SetTheme(theme)) });
    }
    for language in Language::ALL {
        let flag = if language == lang { MenuFlag::Radio | MenuFlag::Value } else { MenuFlag::Radio };
        let path = format!("{}/{}/{}", more, t(Label::MenuLanguage), language.menu_label());
        menu.add(&path, Shortcut::None, flag, { let s = *s; move |_| s.send(Message::SetLanguage(language)) });
    }
    menu.add(&format!("{}/{}", more, t(Label::MenuAbout)), Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowAbout) });
}

/// Escaped item labels for the recent list, numbered so entries sharing a
/// file name stay separate menu items.
pub fn recent_item_labels(entries: &[RecentEntry]) -> Vec<String> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| format!("{} {}", i + 1, escape_menu_label(&entry.label)))
        .collect()
}
