use fltk::{
    app::{self, Sender},
    button::{Button, ToggleButton},
    enums::{CallbackTrigger, Event, Font, Key},
    frame::Frame,
    group::{Flex, FlexType},
    misc::InputChoice,
    prelude::*,
};

use crate::app::controllers::selection_sync::ToolbarControls;
use crate::app::domain::style::{BODY_FONT_FAMILY, HEADING_FONT_FAMILY};
use crate::app::domain::{Label, Language, Message};
use super::theme::ToolStrip;

pub const TOOLBAR_HEIGHT: i32 = 32;

pub const FONT_SIZES: [u32; 12] = [8, 9, 10, 11, 12, 14, 16, 18, 24, 36, 48, 72];

/// Formatting toolbar. Cloned handles of its controls, so it can be passed
/// around as the `ToolbarControls` the selection controller writes to.
#[derive(Clone)]
pub struct Toolbar {
    pub open: Button,
    pub font_name: InputChoice,
    pub font_size: InputChoice,
    pub bold: ToggleButton,
    pub italic: ToggleButton,
    pub heading: ToggleButton,
    row: Flex,
}

pub fn build_toolbar(sender: &Sender<Message>, font_names: &[String], lang: Language) -> (ToolStrip, Toolbar) {
    let s = sender;
    let mut strip = ToolStrip::begin(TOOLBAR_HEIGHT);

    let mut row = Flex::new(0, 0, 0, TOOLBAR_HEIGHT, None);
    row.set_type(FlexType::Row);
    row.set_margin(3);
    row.set_spacing(4);

    let mut open = Button::default().with_label(Label::ToolbarOpen.text(lang));
    open.set_callback({ let s = *s; move |_| s.send(Message::FileOpen) });
    row.fixed(&open, 70);

    let mut font_name = InputChoice::default();
    for name in font_names {
        font_name.add(&escape_menu_label(name));
    }
    font_name.set_trigger(CallbackTrigger::Changed | CallbackTrigger::EnterKeyAlways);
    font_name.set_callback({
        let s = *s;
        move |_| {
            if commits_value(app::event(), app::event_key()) {
                s.send(Message::FontNameChanged);
            }
        }
    });
    row.fixed(&font_name, 180);

    let mut font_size = InputChoice::default();
    for size in FONT_SIZES {
        font_size.add(&size.to_string());
    }
    font_size.set_trigger(CallbackTrigger::Changed | CallbackTrigger::EnterKeyAlways);
    font_size.set_callback({
        let s = *s;
        move |_| {
            if commits_value(app::event(), app::event_key()) {
                s.send(Message::FontSizeChanged);
            }
        }
    });
    row.fixed(&font_size, 60);

    let mut bold = ToggleButton::default().with_label("B");
    bold.set_label_font(Font::HelveticaBold);
    bold.set_callback({ let s = *s; move |_| s.send(Message::BoldToggled) });
    row.fixed(&bold, 28);

    let mut italic = ToggleButton::default().with_label("I");
    italic.set_label_font(Font::HelveticaItalic);
    italic.set_callback({ let s = *s; move |_| s.send(Message::ItalicToggled) });
    row.fixed(&italic, 28);

    let mut heading = ToggleButton::default().with_label("H");
    heading.set_callback({ let s = *s; move |_| s.send(Message::HeadingToggled) });
    row.fixed(&heading, 28);

    // Spacer
    Frame::default();
    row.end();

    strip.track_button(&mut open);
    strip.track_button(&mut bold);
    strip.track_button(&mut italic);
    strip.track_button(&mut heading);
    strip.end();

    let toolbar = Toolbar {
        open,
        font_name,
        font_size,
        bold,
        italic,
        heading,
        row,
    };
    (strip, toolbar)
}

impl Toolbar {
    pub fn font_name_text(&self) -> String {
        self.font_name.value().unwrap_or_default()
    }

    pub fn font_size_text(&self) -> String {
        self.font_size.value().unwrap_or_default()
    }

    pub fn set_font_controls_visible(&mut self, visible: bool) {
        if visible {
            self.font_name.show();
            self.font_size.show();
            self.row.fixed(&self.font_name, 180);
            self.row.fixed(&self.font_size, 60);
        } else {
            self.font_name.hide();
            self.font_size.hide();
            self.row.fixed(&self.font_name, 0);
            self.row.fixed(&self.font_size, 0);
        }
        self.row.layout();
        self.row.redraw();
    }

    pub fn font_controls_visible(&self) -> bool {
        self.font_name.visible()
    }

    pub fn relabel(&mut self, lang: Language) {
        self.open.set_label(Label::ToolbarOpen.text(lang));
        self.open.redraw();
    }
}

impl ToolbarControls for Toolbar {
    fn set_font_name(&self, name: &str) {
        self.font_name.clone().set_value(name);
    }

    fn set_font_size_text(&self, text: &str) {
        self.font_size.clone().set_value(text);
    }

    fn set_bold_checked(&self, checked: bool) {
        self.bold.clone().set_value(checked);
    }

    fn set_italic_checked(&self, checked: bool) {
        self.italic.clone().set_value(checked);
    }
}

/// Whether a font control callback should apply its value. Keystrokes only
/// edit the text; Enter or a pick from the dropdown list commits it.
pub fn commits_value(event: Event, key: Key) -> bool {
    match event {
        Event::KeyDown | Event::Shortcut => key == Key::Enter || key == Key::KPEnter,
        _ => true,
    }
}

/// Family names for the font control: the document fonts first, then the
/// loaded faces, trimmed and without duplicates.
pub fn font_families(loaded: &[String]) -> Vec<String> {
    let mut rest: Vec<String> = loaded
        .iter()
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .collect();
    rest.sort();
    rest.dedup();

    let mut families = vec![BODY_FONT_FAMILY.to_string(), HEADING_FONT_FAMILY.to_string()];
    families.extend(rest.into_iter().filter(|n| n != BODY_FONT_FAMILY && n != HEADING_FONT_FAMILY));
    families
}

/// Menu items treat '/', '&' and '_' specially.
pub fn escape_menu_label(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '/' => out.push_str("\\/"),
            '&' => out.push_str("&&"),
            '_' => out.push_str("\\_"),
            _ => out.push(ch),
        }
    }
    out
}
