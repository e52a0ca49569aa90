use crate::app::domain::style::Rgb;
use crate::app::services::render::RenderStrategy;

/// Visual themes the shell can switch between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Aero,
    Luna,
    BlueGradient2009,
    Uwp,
    UwpDark,
    Classic,
}

/// Window background of Aero when glass is active.
pub const AERO_GLASS_BACKGROUND: Rgb = Rgb::BLACK;
/// Window background of Aero when glass is unavailable.
pub const AERO_FLAT_BACKGROUND: Rgb = Rgb::new(200, 220, 240);

impl Theme {
    pub const ALL: [Theme; 6] = [
        Theme::Uwp,
        Theme::UwpDark,
        Theme::Aero,
        Theme::Luna,
        Theme::BlueGradient2009,
        Theme::Classic,
    ];

    /// Name shown in the theme menu
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Uwp => "Windows 10 (UWP)",
            Self::UwpDark => "UWP Dark Mode",
            Self::Aero => "Aero (Glass)",
            Self::Luna => "Luna (XP)",
            Self::BlueGradient2009 => "Classic (2009)",
            Self::Classic => "Classic",
        }
    }

    /// Window background for the theme. Aero reports its flat fallback;
    /// the glass background is decided by the engine at apply time.
    pub fn window_background(&self) -> Rgb {
        match self {
            Self::Aero => AERO_FLAT_BACKGROUND,
            Self::Luna => Rgb::new(163, 189, 227),
            Self::BlueGradient2009 => Rgb::CONTROL,
            Self::Uwp => Rgb::WHITE,
            Self::UwpDark => Rgb::new(32, 32, 32),
            Self::Classic => Rgb::CONTROL,
        }
    }

    pub fn strategy(&self) -> RenderStrategy {
        match self {
            Self::Aero => RenderStrategy::StateAware,
            Self::Luna => RenderStrategy::Luna,
            Self::BlueGradient2009 => RenderStrategy::BlueGradient2009,
            Self::Uwp => RenderStrategy::Uwp,
            Self::UwpDark => RenderStrategy::UwpDark,
            Self::Classic => RenderStrategy::Classic,
        }
    }

    /// Label color for menu bar items.
    pub fn menu_foreground(&self) -> Rgb {
        match self {
            Self::UwpDark => Rgb::WHITE,
            _ => Rgb::BLACK,
        }
    }

    /// Label color for toolbar items. Only the menu is recolored in dark mode.
    pub fn toolbar_foreground(&self) -> Rgb {
        Rgb::BLACK
    }
}
