use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Color, Font},
    frame::Frame,
    group::{Flex, FlexType},
    prelude::*,
};

use crate::app::domain::{Label, Language, Message, Rgb};
use crate::app::services::render::{Canvas, Rect};
use super::theme::FltkCanvas;

const HEADER_TOP: Rgb = Rgb::new(0, 99, 177);
const HEADER_BOTTOM: Rgb = Rgb::new(0, 120, 215);

/// Landing page shown until a document is created or opened.
#[derive(Clone)]
pub struct WelcomeView {
    pub group: Flex,
    title: Frame,
    new_doc: Button,
    open: Button,
    theme: Button,
}

impl WelcomeView {
    pub fn new(sender: &Sender<Message>, lang: Language) -> Self {
        let s = sender;
        let mut group = Flex::default();
        group.set_type(FlexType::Column);
        group.set_margin(0);
        group.set_spacing(12);

        let mut title = Frame::default();
        title.set_label_size(24);
        title.set_label_font(Font::HelveticaBold);
        title.set_label_color(Color::White);
        title.set_align(Align::Center | Align::Inside);
        title.draw(|f| {
            FltkCanvas.fill_vertical_gradient(Rect::new(f.x(), f.y(), f.w(), f.h()), HEADER_TOP, HEADER_BOTTOM);
            fltk::draw::set_draw_color(f.label_color());
            fltk::draw::set_font(f.label_font(), f.label_size());
            fltk::draw::draw_text2(&f.label(), f.x(), f.y(), f.w(), f.h(), Align::Center);
        });
        group.fixed(&title, 90);

        let mut row = Flex::default();
        row.set_type(FlexType::Row);
        Frame::default();
        let mut buttons = Flex::default();
        buttons.set_type(FlexType::Column);
        buttons.set_spacing(8);
        let mut new_doc = Button::default();
        new_doc.set_callback({ let s = *s; move |_| s.send(Message::WelcomeNew) });
        buttons.fixed(&new_doc, 36);
        let mut open = Button::default();
        open.set_callback({ let s = *s; move |_| s.send(Message::FileOpen) });
        buttons.fixed(&open, 36);
        let mut theme = Button::default();
        theme.set_callback({ let s = *s; move |_| s.send(Message::WelcomeTheme) });
        buttons.fixed(&theme, 36);
        Frame::default();
        buttons.end();
        row.fixed(&buttons, 260);
        Frame::default();
        row.end();

        group.end();

        let mut view = Self {
            group,
            title,
            new_doc,
            open,
            theme,
        };
        view.relabel(lang);
        view
    }

    pub fn relabel(&mut self, lang: Language) {
        self.title.set_label(Label::WelcomeTitle.text(lang));
        self.new_doc.set_label(Label::WelcomeNew.text(lang));
        self.open.set_label(Label::WelcomeOpen.text(lang));
        self.theme.set_label(Label::WelcomeTheme.text(lang));
        self.group.redraw();
    }
}
