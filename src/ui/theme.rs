//! FLTK side of theming: a canvas over `fltk::draw` and the strip widgets
//! that paint themselves through the active render strategy.

use std::cell::Cell;
use std::rc::Rc;

use fltk::{
    draw,
    enums::{Align, Color, Event, FrameType},
    frame::Frame,
    group::Group,
    menu::MenuBar,
    prelude::*,
    window::Window,
};

use crate::app::controllers::theme::{ThemedSurface, WindowSurface};
use crate::app::domain::Rgb;
use crate::app::services::render::{Canvas, Rect, RenderStrategy};

pub fn to_color(rgb: Rgb) -> Color {
    Color::from_rgb(rgb.r, rgb.g, rgb.b)
}

/// Paints straight into the widget currently being drawn.
pub struct FltkCanvas;

impl Canvas for FltkCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        draw::set_draw_color(to_color(color));
        draw::draw_rectf(rect.x, rect.y, rect.w, rect.h);
    }

    fn stroke_rect(&mut self, rect: Rect, color: Rgb) {
        draw::set_draw_color(to_color(color));
        draw::draw_rect(rect.x, rect.y, rect.w, rect.h);
    }

    fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Rgb) {
        draw::set_draw_color(to_color(color));
        draw::draw_line(x1, y1, x2, y2);
    }
}

pub type SharedStrategy = Rc<Cell<RenderStrategy>>;

fn widget_rect<W: WidgetExt>(w: &W) -> Rect {
    Rect::new(w.x(), w.y(), w.w(), w.h())
}

/// Flat frame placed first in a strip group; the strip's items sit on top of it.
fn build_backdrop(x: i32, y: i32, w: i32, h: i32, strategy: &SharedStrategy) -> Frame {
    let mut backdrop = Frame::new(x, y, w, h, None);
    backdrop.set_frame(FrameType::FlatBox);
    backdrop.set_color(to_color(Rgb::CONTROL));
    let strategy = strategy.clone();
    backdrop.draw(move |f| {
        strategy.get().draw_strip_background(&mut FltkCanvas, widget_rect(f));
    });
    backdrop
}

/// Give a toolbar button hover tracking and strategy-driven highlighting.
pub fn attach_button_renderer<B: ButtonExt + WidgetBase + 'static>(button: &mut B, strategy: &SharedStrategy) {
    let hovered = Rc::new(Cell::new(false));

    let h = hovered.clone();
    button.handle(move |b, ev| match ev {
        Event::Enter => {
            h.set(true);
            b.redraw();
            true
        }
        Event::Leave => {
            h.set(false);
            b.redraw();
            true
        }
        _ => false,
    });

    let strategy = strategy.clone();
    button.draw(move |b| {
        let bounds = widget_rect(b);
        if strategy
            .get()
            .draw_button_background(&mut FltkCanvas, bounds, hovered.get(), b.value())
        {
            // Background was painted over the default look, put the label back
            draw::set_draw_color(b.label_color());
            draw::set_font(b.label_font(), b.label_size());
            draw::draw_text2(&b.label(), bounds.x, bounds.y, bounds.w, bounds.h, Align::Center);
        }
    });
}

/// The menu bar on its themed backdrop.
#[derive(Clone)]
pub struct MenuStrip {
    pub group: Group,
    pub menu: MenuBar,
    backdrop: Frame,
    strategy: SharedStrategy,
}

impl MenuStrip {
    pub fn new(h: i32) -> Self {
        let strategy: SharedStrategy = Rc::new(Cell::new(RenderStrategy::Classic));
        let mut group = Group::new(0, 0, 0, h, None);
        let backdrop = build_backdrop(0, 0, 0, h, &strategy);
        let mut menu = MenuBar::new(0, 0, 0, h, "");
        menu.set_frame(FrameType::NoBox);
        group.end();
        group.resizable(&backdrop);
        Self { group, menu, backdrop, strategy }
    }
}

impl ThemedSurface for MenuStrip {
    fn install_strategy(&mut self, strategy: RenderStrategy) {
        self.strategy.set(strategy);
        match strategy.highlight_color() {
            Some(color) => self.menu.set_selection_color(to_color(color)),
            None => self.menu.set_selection_color(Color::Selection),
        }
    }

    fn set_foreground(&mut self, color: Rgb) {
        self.menu.set_text_color(to_color(color));
    }

    fn height(&self) -> i32 {
        self.group.h()
    }

    fn redraw(&mut self) {
        self.backdrop.redraw();
        self.menu.redraw();
    }
}

/// Toolbar strip: a backdrop plus the row of controls laid over it.
pub struct ToolStrip {
    pub group: Group,
    backdrop: Frame,
    strategy: SharedStrategy,
    label_setters: Vec<Box<dyn FnMut(Color)>>,
}

impl ToolStrip {
    /// Starts the strip group. Callers add their row, then call [`ToolStrip::end`].
    pub fn begin(h: i32) -> Self {
        let strategy: SharedStrategy = Rc::new(Cell::new(RenderStrategy::Classic));
        let group = Group::new(0, 0, 0, h, None);
        let backdrop = build_backdrop(0, 0, 0, h, &strategy);
        Self {
            group,
            backdrop,
            strategy,
            label_setters: Vec::new(),
        }
    }

    pub fn end(&mut self) {
        self.group.end();
        self.group.resizable(&self.backdrop);
    }

    /// Register a button for foreground updates and themed highlighting.
    pub fn track_button<B: ButtonExt + WidgetBase + Clone + 'static>(&mut self, button: &mut B) {
        attach_button_renderer(button, &self.strategy);
        let mut handle = button.clone();
        self.label_setters.push(Box::new(move |color| handle.set_label_color(color)));
    }
}

impl ThemedSurface for ToolStrip {
    fn install_strategy(&mut self, strategy: RenderStrategy) {
        self.strategy.set(strategy);
    }

    fn set_foreground(&mut self, color: Rgb) {
        for set_label_color in &mut self.label_setters {
            set_label_color(to_color(color));
        }
    }

    fn height(&self) -> i32 {
        self.group.h()
    }

    fn redraw(&mut self) {
        self.group.redraw();
    }
}

/// The main window's client background.
pub struct WindowBackground {
    wind: Window,
}

impl WindowBackground {
    pub fn new(wind: &Window) -> Self {
        Self { wind: wind.clone() }
    }
}

impl WindowSurface for WindowBackground {
    fn set_background(&mut self, color: Rgb) {
        self.wind.set_color(to_color(color));
    }

    fn redraw(&mut self) {
        self.wind.redraw();
    }
}
