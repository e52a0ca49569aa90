use std::cell::RefCell;
use std::rc::Rc;

use fltk::{
    button::{Button, CheckButton},
    enums::Align,
    frame::Frame,
    group::{Flex, FlexType},
    misc::InputChoice,
    prelude::*,
    window::Window,
};

use super::run_dialog;
use crate::app::controllers::selection_sync::parse_font_size;
use crate::app::domain::{FontSpec, Label, Language};
use crate::ui::toolbar::{escape_menu_label, FONT_SIZES};

/// Modal font chooser seeded with `current`. Returns the picked font, or
/// None on cancel.
pub fn show_font_dialog(current: &FontSpec, families: &[String], lang: Language) -> Option<FontSpec> {
    let mut dialog = Window::default()
        .with_size(340, 190)
        .with_label(Label::MenuFont.text(lang).trim_end_matches("..."))
        .center_screen();
    dialog.make_modal(true);

    let mut flex = Flex::new(15, 10, 310, 170, None);
    flex.set_type(FlexType::Column);
    flex.set_spacing(6);

    let (family_row, mut family) = labeled_choice(Label::FontFamily.text(lang));
    for name in families {
        family.add(&escape_menu_label(name));
    }
    family.set_value(&current.family);
    flex.fixed(&family_row, 28);

    let (size_row, mut size) = labeled_choice(Label::FontSize.text(lang));
    for pt in FONT_SIZES {
        size.add(&pt.to_string());
    }
    size.set_value(&format_size(current.size_pt));
    flex.fixed(&size_row, 28);

    let mut bold = CheckButton::default().with_label(Label::FontBold.text(lang));
    bold.set_value(current.bold);
    flex.fixed(&bold, 24);
    let mut italic = CheckButton::default().with_label(Label::FontItalic.text(lang));
    italic.set_value(current.italic);
    flex.fixed(&italic, 24);

    let mut _spacer = Frame::default();

    let mut buttons = Flex::default();
    buttons.set_type(FlexType::Row);
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

    let picked: Rc<RefCell<Option<FontSpec>>> = Rc::new(RefCell::new(None));

    let mut d = dialog.clone();
    let p = picked.clone();
    let base = current.clone();
    ok_btn.set_callback(move |_| {
        let font = font_from_fields(
            &base,
            &family.value().unwrap_or_default(),
            &size.value().unwrap_or_default(),
            bold.value(),
            italic.value(),
        );
        *p.borrow_mut() = Some(font);
        d.hide();
    });

    let mut d = dialog.clone();
    cancel_btn.set_callback(move |_| {
        d.hide();
    });

    dialog.show();
    run_dialog(&dialog);

    picked.take()
}

fn labeled_choice(label: &str) -> (Flex, InputChoice) {
    let mut row = Flex::default();
    row.set_type(FlexType::Row);
    let mut caption = Frame::default().with_label(label);
    caption.set_align(Align::Left | Align::Inside);
    row.fixed(&caption, 90);
    let choice = InputChoice::default();
    row.end();
    (row, choice)
}

fn format_size(size_pt: f32) -> String {
    if size_pt.fract() == 0.0 {
        format!("{}", size_pt as u32)
    } else {
        size_pt.to_string()
    }
}

/// Font described by the dialog's fields. A blank family or an unreadable
/// size keeps the value from `base`.
pub fn font_from_fields(base: &FontSpec, family: &str, size: &str, bold: bool, italic: bool) -> FontSpec {
    let family = match family.trim() {
        "" => base.family.clone(),
        name => name.to_string(),
    };
    let size_pt = parse_font_size(size).unwrap_or(base.size_pt);
    FontSpec::new(family, size_pt).with_bold(bold).with_italic(italic)
}
