//! Draw rules for menu and toolbar strips.
//!
//! A surface keeps the current [`RenderStrategy`] and calls its two hooks on
//! every paint. Strategies carry no state, so switching themes only swaps
//! the value the surface holds.

use crate::app::domain::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }
}

/// Minimal drawing backend the strategies paint onto.
pub trait Canvas {
    fn fill_rect(&mut self, rect: Rect, color: Rgb);
    fn stroke_rect(&mut self, rect: Rect, color: Rgb);
    fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Rgb);

    /// Top-to-bottom gradient, painted one row at a time.
    fn fill_vertical_gradient(&mut self, rect: Rect, top: Rgb, bottom: Rgb) {
        if rect.is_empty() {
            return;
        }
        let span = (rect.h - 1).max(1) as f32;
        for row in 0..rect.h {
            let color = top.lerp(bottom, row as f32 / span);
            self.fill_rect(Rect::new(rect.x, rect.y + row, rect.w, 1), color);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStrategy {
    /// Amber highlight for hovered or checked buttons
    StateAware,
    Luna,
    BlueGradient2009,
    Uwp,
    UwpDark,
    /// Toolkit defaults everywhere
    Classic,
}

const AMBER_TOP: Rgb = Rgb::new(255, 240, 190);
const AMBER_BOTTOM: Rgb = Rgb::new(255, 210, 80);
const AMBER_BORDER: Rgb = Rgb::new(230, 160, 50);
const LUNA_TOP: Rgb = Rgb::new(0, 70, 213);
const LUNA_BOTTOM: Rgb = Rgb::new(110, 160, 255);
const LUNA_HIGHLIGHT: Rgb = Rgb::new(61, 149, 38);
const BLUE_TOP: Rgb = Rgb::new(215, 230, 250);
const BLUE_BOTTOM: Rgb = Rgb::new(170, 195, 230);
const UWP_HAIRLINE: Rgb = Rgb::new(230, 230, 230);
const UWP_HIGHLIGHT: Rgb = Rgb::new(230, 240, 255);
const DARK_STRIP: Rgb = Rgb::new(45, 45, 45);
const DARK_HIGHLIGHT: Rgb = Rgb::new(80, 80, 80);

impl RenderStrategy {
    /// Paint the strip behind menu or toolbar items.
    /// Returns false when the toolkit default should be used instead.
    pub fn draw_strip_background(&self, canvas: &mut dyn Canvas, bounds: Rect) -> bool {
        match self {
            Self::Luna => {
                canvas.fill_vertical_gradient(bounds, LUNA_TOP, LUNA_BOTTOM);
                true
            }
            Self::BlueGradient2009 => {
                canvas.fill_vertical_gradient(bounds, BLUE_TOP, BLUE_BOTTOM);
                true
            }
            Self::Uwp => {
                canvas.fill_rect(bounds, Rgb::WHITE);
                let bottom = bounds.y + bounds.h - 1;
                canvas.line(bounds.x, bottom, bounds.x + bounds.w, bottom, UWP_HAIRLINE);
                true
            }
            Self::UwpDark => {
                canvas.fill_rect(bounds, DARK_STRIP);
                true
            }
            Self::StateAware | Self::Classic => false,
        }
    }

    /// Paint a button's background. `hovered` and `checked` are passed apart
    /// because the dark strategy only reacts to hover.
    pub fn draw_button_background(
        &self,
        canvas: &mut dyn Canvas,
        bounds: Rect,
        hovered: bool,
        checked: bool,
    ) -> bool {
        let active = hovered || checked;
        match self {
            Self::StateAware if active => {
                canvas.fill_vertical_gradient(bounds, AMBER_TOP, AMBER_BOTTOM);
                canvas.stroke_rect(bounds, AMBER_BORDER);
                true
            }
            Self::Luna if active => {
                canvas.fill_rect(bounds, LUNA_HIGHLIGHT);
                canvas.stroke_rect(bounds, Rgb::WHITE);
                true
            }
            Self::Uwp if active => {
                canvas.fill_rect(bounds, UWP_HIGHLIGHT);
                true
            }
            Self::UwpDark if hovered => {
                canvas.fill_rect(bounds, DARK_HIGHLIGHT);
                true
            }
            _ => false,
        }
    }

    /// Solid color closest to the button highlight, for widgets that can only
    /// take a selection color (menu item hover).
    pub fn highlight_color(&self) -> Option<Rgb> {
        match self {
            Self::StateAware => Some(AMBER_BOTTOM),
            Self::Luna => Some(LUNA_HIGHLIGHT),
            Self::Uwp => Some(UWP_HIGHLIGHT),
            Self::UwpDark => Some(DARK_HIGHLIGHT),
            Self::BlueGradient2009 | Self::Classic => None,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Op {
        Fill(Rect, Rgb),
        Stroke(Rect, Rgb),
        Line(i32, i32, i32, i32, Rgb),
    }

    /// Canvas that records every primitive for assertions.
    #[derive(Default)]
    pub struct RecordingCanvas {
        pub ops: Vec<Op>,
    }

    impl Canvas for RecordingCanvas {
        fn fill_rect(&mut self, rect: Rect, color: Rgb) {
            self.ops.push(Op::Fill(rect, color));
        }
        fn stroke_rect(&mut self, rect: Rect, color: Rgb) {
            self.ops.push(Op::Stroke(rect, color));
        }
        fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Rgb) {
            self.ops.push(Op::Line(x1, y1, x2, y2, color));
        }
    }

    const STRIP: Rect = Rect::new(0, 0, 100, 24);
    const BUTTON: Rect = Rect::new(4, 2, 20, 20);

    #[test]
    fn test_gradient_spans_rows() {
        let mut canvas = RecordingCanvas::default();
        canvas.fill_vertical_gradient(Rect::new(0, 0, 10, 3), Rgb::BLACK, Rgb::WHITE);
        assert_eq!(
            canvas.ops,
            vec![
                Op::Fill(Rect::new(0, 0, 10, 1), Rgb::BLACK),
                Op::Fill(Rect::new(0, 1, 10, 1), Rgb::new(128, 128, 128)),
                Op::Fill(Rect::new(0, 2, 10, 1), Rgb::WHITE),
            ]
        );
    }

    #[test]
    fn test_gradient_skips_empty_rect() {
        let mut canvas = RecordingCanvas::default();
        canvas.fill_vertical_gradient(Rect::new(0, 0, 0, 10), Rgb::BLACK, Rgb::WHITE);
        assert!(canvas.ops.is_empty());
    }

    #[test]
    fn test_luna_strip_gradient() {
        let mut canvas = RecordingCanvas::default();
        assert!(RenderStrategy::Luna.draw_strip_background(&mut canvas, STRIP));
        assert_eq!(canvas.ops.len(), 24);
        assert_eq!(canvas.ops[0], Op::Fill(Rect::new(0, 0, 100, 1), LUNA_TOP));
        assert_eq!(canvas.ops[23], Op::Fill(Rect::new(0, 23, 100, 1), LUNA_BOTTOM));
    }

    #[test]
    fn test_uwp_strip_has_bottom_hairline() {
        let mut canvas = RecordingCanvas::default();
        assert!(RenderStrategy::Uwp.draw_strip_background(&mut canvas, STRIP));
        assert_eq!(
            canvas.ops,
            vec![Op::Fill(STRIP, Rgb::WHITE), Op::Line(0, 23, 100, 23, UWP_HAIRLINE)]
        );
    }

    #[test]
    fn test_default_strips_not_handled() {
        for strategy in [RenderStrategy::StateAware, RenderStrategy::Classic] {
            let mut canvas = RecordingCanvas::default();
            assert!(!strategy.draw_strip_background(&mut canvas, STRIP));
            assert!(canvas.ops.is_empty());
        }
    }

    #[test]
    fn test_state_aware_highlights_checked_button() {
        let mut canvas = RecordingCanvas::default();
        assert!(RenderStrategy::StateAware.draw_button_background(&mut canvas, BUTTON, false, true));
        assert_eq!(canvas.ops.last(), Some(&Op::Stroke(BUTTON, AMBER_BORDER)));
    }

    #[test]
    fn test_idle_buttons_use_default() {
        let all = [
            RenderStrategy::StateAware,
            RenderStrategy::Luna,
            RenderStrategy::BlueGradient2009,
            RenderStrategy::Uwp,
            RenderStrategy::UwpDark,
            RenderStrategy::Classic,
        ];
        for strategy in all {
            let mut canvas = RecordingCanvas::default();
            assert!(!strategy.draw_button_background(&mut canvas, BUTTON, false, false));
            assert!(canvas.ops.is_empty());
        }
    }

    #[test]
    fn test_dark_highlights_hover_only() {
        let mut canvas = RecordingCanvas::default();
        assert!(!RenderStrategy::UwpDark.draw_button_background(&mut canvas, BUTTON, false, true));
        assert!(RenderStrategy::UwpDark.draw_button_background(&mut canvas, BUTTON, true, false));
        assert_eq!(canvas.ops, vec![Op::Fill(BUTTON, DARK_HIGHLIGHT)]);
    }

    #[test]
    fn test_blue_gradient_keeps_default_highlight() {
        let mut canvas = RecordingCanvas::default();
        assert!(!RenderStrategy::BlueGradient2009.draw_button_background(&mut canvas, BUTTON, true, true));
        assert_eq!(RenderStrategy::BlueGradient2009.highlight_color(), None);
    }
}
