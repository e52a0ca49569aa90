use std::cell::Cell;
use std::rc::Rc;

use fltk::{
    button::{Button, RadioRoundButton},
    frame::Frame,
    group::Flex,
    prelude::*,
    window::Window,
};

use super::run_dialog;
use crate::app::domain::{Label, Language, Theme};

/// Modal theme chooser. Returns the picked theme, or None on cancel.
pub fn show_theme_picker(current: Theme, lang: Language) -> Option<Theme> {
    let mut dialog = Window::default()
        .with_size(300, 90 + 28 * Theme::ALL.len() as i32)
        .with_label(Label::MenuThemeConfig.text(lang))
        .center_screen();
    dialog.make_modal(true);

    let mut flex = Flex::new(15, 10, 270, 70 + 28 * Theme::ALL.len() as i32, None);
    flex.set_type(fltk::group::FlexType::Column);
    flex.set_spacing(4);

    let picked = Rc::new(Cell::new(current));
    for theme in Theme::ALL {
        let mut radio = RadioRoundButton::default().with_label(theme.display_name());
        radio.set_value(theme == current);
        let p = picked.clone();
        radio.set_callback(move |_| p.set(theme));
        flex.fixed(&radio, 24);
    }

    let mut _spacer = Frame::default();

    let mut buttons = Flex::default();
    buttons.set_type(fltk::group::FlexType::Row);
    buttons.set_spacing(10);
    let mut _pad = Frame::default();
    let mut ok_btn = Button::default().with_label("OK");
    buttons.fixed(&ok_btn, 80);
    let mut cancel_btn = Button::default().with_label("Cancel");
    buttons.fixed(&cancel_btn, 80);
    buttons.end();
    flex.fixed(&buttons, 30);

    flex.end();
    dialog.end();

    let confirmed = Rc::new(Cell::new(false));

    let mut d = dialog.clone();
    let c = confirmed.clone();
    ok_btn.set_callback(move |_| {
        c.set(true);
        d.hide();
    });

    let mut d = dialog.clone();
    cancel_btn.set_callback(move |_| {
        d.hide();
    });

    dialog.show();
    run_dialog(&dialog);

    confirmed.get().then(|| picked.get())
}
