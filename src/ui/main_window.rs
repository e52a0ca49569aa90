use fltk::{
    app::Sender,
    enums::{Align, Color, Event, FrameType},
    frame::Frame,
    group::{Flex, FlexType},
    prelude::*,
    text::TextEditor,
    window::Window,
};

use crate::app::domain::labels::{page_label, APP_NAME};
use crate::app::domain::{Label, Language, Message};
use super::text_surface::FltkTextSurface;
use super::theme::{MenuStrip, ToolStrip};
use super::toolbar::{build_toolbar, font_families, Toolbar, TOOLBAR_HEIGHT};
use super::welcome::WelcomeView;

pub const MENU_HEIGHT: i32 = 30;
pub const STATUS_HEIGHT: i32 = 24;

pub struct StatusBar {
    pub status: Frame,
    pub page: Frame,
    pub zoom: Frame,
}

impl StatusBar {
    pub fn set_status(&mut self, text: &str) {
        self.status.set_label(text);
        self.status.redraw();
    }

    pub fn set_page(&mut self, lang: Language, page: usize) {
        self.page.set_label(&page_label(lang, page));
        self.page.redraw();
    }
}

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub menu: MenuStrip,
    pub tool_strip: ToolStrip,
    pub toolbar: Toolbar,
    pub welcome: WelcomeView,
    pub text_editor: TextEditor,
    pub surface: FltkTextSurface,
    pub status: StatusBar,
}

fn status_frame(align: Align) -> Frame {
    let mut f = Frame::default();
    f.set_frame(FrameType::FlatBox);
    f.set_label_size(12);
    f.set_align(align | Align::Inside);
    f
}

pub fn build_main_window(sender: &Sender<Message>, lang: Language, font_names: &[String]) -> MainWidgets {
    let mut wind = Window::new(100, 100, 900, 640, APP_NAME);
    wind.set_xclass("ProjectWriter");

    let mut flex = Flex::new(0, 0, 900, 640, None);
    flex.set_type(FlexType::Column);

    let menu = MenuStrip::new(MENU_HEIGHT);
    flex.fixed(&menu.group, MENU_HEIGHT);

    let (tool_strip, toolbar) = build_toolbar(sender, &font_families(font_names), lang);
    flex.fixed(&tool_strip.group, TOOLBAR_HEIGHT);

    let welcome = WelcomeView::new(sender, lang);

    let mut text_editor = TextEditor::new(0, 0, 0, 0, "");
    let surface = FltkTextSurface::new(&text_editor);
    text_editor.handle({
        let s = *sender;
        move |_, ev| {
            match ev {
                Event::KeyUp | Event::Released | Event::Drag => s.send(Message::SelectionChanged),
                Event::MouseWheel => s.send(Message::EditorScrolled),
                _ => {}
            }
            false
        }
    });
    text_editor.hide();

    let mut status_row = Flex::default();
    status_row.set_type(FlexType::Row);
    let status_text = status_frame(Align::Left);
    let page = status_frame(Align::Right);
    status_row.fixed(&page, 110);
    let mut zoom = status_frame(Align::Right);
    zoom.set_label("Zoom: 100%");
    status_row.fixed(&zoom, 100);
    status_row.end();
    flex.fixed(&status_row, STATUS_HEIGHT);

    flex.end();
    wind.resizable(&flex);
    wind.end();

    let mut status = StatusBar {
        status: status_text,
        page,
        zoom,
    };
    status.set_status(Label::StatusReady.text(lang));
    status.set_page(lang, 1);
    status.zoom.set_label_color(Color::from_rgb(90, 90, 90));

    MainWidgets {
        wind,
        flex,
        menu,
        tool_strip,
        toolbar,
        welcome,
        text_editor,
        surface,
        status,
    }
}

impl MainWidgets {
    /// Swap the landing page for the editor.
    pub fn show_editor(&mut self) {
        if self.text_editor.visible() {
            return;
        }
        self.welcome.group.hide();
        self.text_editor.show();
        self.flex.layout();
        self.wind.redraw();
    }

    pub fn show_welcome(&mut self) {
        if !self.text_editor.visible() {
            return;
        }
        self.text_editor.hide();
        self.welcome.group.show();
        self.flex.layout();
        self.wind.redraw();
    }
}
