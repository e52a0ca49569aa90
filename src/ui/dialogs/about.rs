use fltk::{
    button::Button,
    enums::{Align, Color, Font},
    frame::Frame,
    group::Flex,
    prelude::*,
    window::Window,
};

use super::run_dialog;
use crate::app::domain::labels::{about_text, APP_NAME};
use crate::app::domain::{Label, Language};

/// Show About dialog
pub fn show_about_dialog(lang: Language) {
    let mut dialog = Window::default()
        .with_size(380, 220)
        .with_label(&format!("{} {}", Label::MenuAbout.text(lang), APP_NAME))
        .center_screen();
    dialog.make_modal(true);

    let mut flex = Flex::new(10, 10, 360, 200, None);
    flex.set_type(fltk::group::FlexType::Column);
    flex.set_spacing(10);

    let mut title = Frame::default();
    title.set_label(APP_NAME);
    title.set_label_size(22);
    title.set_label_font(Font::HelveticaBold);
    flex.fixed(&title, 40);

    let mut info_frame = Frame::default();
    info_frame.set_label(&about_text());
    info_frame.set_label_size(12);
    info_frame.set_label_color(Color::from_rgb(100, 100, 100));
    info_frame.set_align(Align::Center | Align::Inside);

    let mut close_btn = Button::default().with_label("OK");
    flex.fixed(&close_btn, 32);

    flex.end();
    dialog.end();

    let mut dialog_close = dialog.clone();
    close_btn.set_callback(move |_| {
        dialog_close.hide();
    });

    dialog.show();
    run_dialog(&dialog);
}
