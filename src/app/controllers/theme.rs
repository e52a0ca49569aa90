use crate::app::domain::theme::{Theme, AERO_FLAT_BACKGROUND, AERO_GLASS_BACKGROUND};
use crate::app::domain::{EnvironmentInfo, Rgb};
use crate::app::infrastructure::platform::Composition;
use crate::app::services::render::RenderStrategy;

/// A menu bar or toolbar that paints itself through a render strategy.
pub trait ThemedSurface {
    fn install_strategy(&mut self, strategy: RenderStrategy);
    fn set_foreground(&mut self, color: Rgb);
    fn height(&self) -> i32;
    fn redraw(&mut self);
}

/// The main window's client area.
pub trait WindowSurface {
    fn set_background(&mut self, color: Rgb);
    fn redraw(&mut self);
}

/// Everything a theme touches in one apply.
pub struct ThemeSurfaces<'a> {
    pub menu: &'a mut dyn ThemedSurface,
    pub toolbar: &'a mut dyn ThemedSurface,
    pub window: &'a mut dyn WindowSurface,
}

/// Chooses and applies the visual theme. Exactly one theme is active at a time.
pub struct ThemeEngine {
    env: EnvironmentInfo,
    active: Theme,
    glass_active: bool,
}

impl ThemeEngine {
    pub fn new(env: EnvironmentInfo) -> Self {
        Self {
            env,
            active: Self::select_default(&env),
            glass_active: false,
        }
    }

    /// Default theme for a host. First match wins.
    pub fn select_default(env: &EnvironmentInfo) -> Theme {
        let version = env.os_version();
        if env.is_luna_release() {
            Theme::Luna
        } else if version >= 10.0 {
            if env.dark_mode_preferred {
                Theme::UwpDark
            } else {
                Theme::Uwp
            }
        } else if version >= 6.0 {
            Theme::Aero
        } else {
            Theme::Classic
        }
    }

    pub fn active(&self) -> Theme {
        self.active
    }

    /// Whether the last apply extended glass into the window.
    pub fn glass_active(&self) -> bool {
        self.glass_active
    }

    pub fn environment(&self) -> &EnvironmentInfo {
        &self.env
    }

    /// Apply `theme` to the surfaces. Always succeeds: Aero without a usable
    /// compositor falls back to a flat background but keeps its highlight.
    pub fn apply(&mut self, theme: Theme, surfaces: ThemeSurfaces<'_>, composition: &dyn Composition) {
        let ThemeSurfaces { menu, toolbar, window } = surfaces;

        let strategy = theme.strategy();
        menu.install_strategy(strategy);
        toolbar.install_strategy(strategy);
        menu.set_foreground(theme.menu_foreground());
        toolbar.set_foreground(theme.toolbar_foreground());

        let glass = theme == Theme::Aero && self.try_extend_glass(menu.height() + toolbar.height(), composition);
        let background = match (theme, glass) {
            (Theme::Aero, true) => AERO_GLASS_BACKGROUND,
            (Theme::Aero, false) => AERO_FLAT_BACKGROUND,
            _ => theme.window_background(),
        };
        window.set_background(background);
        composition.set_dark_title_bar(theme == Theme::UwpDark);

        menu.redraw();
        toolbar.redraw();
        window.redraw();

        self.active = theme;
        self.glass_active = glass;
        log::debug!("Applied theme {:?} (glass: {})", theme, glass);
    }

    fn try_extend_glass(&self, top_inset: i32, composition: &dyn Composition) -> bool {
        if self.env.os_version() >= 10.0 || !composition.supports_composition() {
            return false;
        }
        match composition.extend_into_client_area(top_inset) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("Glass unavailable, using flat Aero: {}", e);
                false
            }
        }
    }
}
