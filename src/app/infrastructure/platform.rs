use crate::app::domain::EnvironmentInfo;
use crate::app::infrastructure::error::{AppError, Result};

/// Optional OS compositor capability (glass / blur-behind).
///
/// Implementations must never panic; failures are reported as
/// `AppError::PlatformUnavailable` and callers treat them as "no glass".
pub trait Composition {
    fn supports_composition(&self) -> bool;
    fn extend_into_client_area(&self, top_inset_px: i32) -> Result<()>;

    /// Bind to the native window. Must be called AFTER window.show().
    fn attach_window(&self, _raw_handle: usize) {}

    /// Dark or light title bar, where the host draws one.
    fn set_dark_title_bar(&self, _dark: bool) {}
}

/// Composition for hosts without any glass support.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoComposition;

impl Composition for NoComposition {
    fn supports_composition(&self) -> bool {
        false
    }

    fn extend_into_client_area(&self, _top_inset_px: i32) -> Result<()> {
        Err(AppError::PlatformUnavailable("no compositor on this platform".to_string()))
    }
}

/// DWM-backed composition. The window handle is attached once the window
/// has been shown, before that every extension request is refused.
#[cfg(target_os = "windows")]
#[derive(Debug, Default)]
pub struct DwmComposition {
    hwnd: std::cell::Cell<usize>,
}

#[cfg(target_os = "windows")]
impl DwmComposition {
    pub fn new() -> Self {
        Self::default()
    }

    fn hwnd(&self) -> Option<windows::Win32::Foundation::HWND> {
        match self.hwnd.get() {
            0 => None,
            raw => Some(windows::Win32::Foundation::HWND(raw as *mut std::ffi::c_void)),
        }
    }
}

#[cfg(target_os = "windows")]
impl Composition for DwmComposition {
    fn supports_composition(&self) -> bool {
        use windows::Win32::Graphics::Dwm::DwmIsCompositionEnabled;

        if detect_os_version().0 < 6 {
            return false;
        }
        // SAFETY: plain query without pointers owned by us
        match unsafe { DwmIsCompositionEnabled() } {
            Ok(enabled) => enabled.as_bool(),
            Err(e) => {
                log::debug!("DwmIsCompositionEnabled failed: {}", e);
                false
            }
        }
    }

    fn extend_into_client_area(&self, top_inset_px: i32) -> Result<()> {
        use windows::Win32::Graphics::Dwm::DwmExtendFrameIntoClientArea;
        use windows::Win32::UI::Controls::MARGINS;

        let Some(hwnd) = self.hwnd() else {
            return Err(AppError::PlatformUnavailable("window not shown yet".to_string()));
        };
        let margins = MARGINS {
            cxLeftWidth: 0,
            cxRightWidth: 0,
            cyTopHeight: top_inset_px,
            cyBottomHeight: 0,
        };
        // SAFETY: hwnd comes from a live FLTK window and margins outlives the call
        unsafe { DwmExtendFrameIntoClientArea(hwnd, &margins) }
            .map_err(|e| AppError::PlatformUnavailable(e.to_string()))
    }

    fn attach_window(&self, raw_handle: usize) {
        self.hwnd.set(raw_handle);
    }

    /// Windows 10 build 1809+
    fn set_dark_title_bar(&self, dark: bool) {
        use std::mem::size_of;
        use std::ptr::from_ref;
        use windows::Win32::Graphics::Dwm::{DwmSetWindowAttribute, DWMWINDOWATTRIBUTE};

        let Some(hwnd) = self.hwnd() else {
            return;
        };
        let on: i32 = if dark { 1 } else { 0 };
        // SAFETY: hwnd is live and `on` outlives both calls
        unsafe {
            // DWMWA_USE_IMMERSIVE_DARK_MODE (Windows 10 2004+)
            let _ = DwmSetWindowAttribute(hwnd, DWMWINDOWATTRIBUTE(20), from_ref(&on).cast(), size_of::<i32>() as u32);
            // Same attribute before 2004
            let _ = DwmSetWindowAttribute(hwnd, DWMWINDOWATTRIBUTE(19), from_ref(&on).cast(), size_of::<i32>() as u32);
        }
    }
}

/// Composition implementation for the current platform.
pub fn platform_composition() -> Box<dyn Composition> {
    #[cfg(target_os = "windows")]
    {
        Box::new(DwmComposition::new())
    }
    #[cfg(not(target_os = "windows"))]
    {
        Box::new(NoComposition)
    }
}

/// Probe the host once at startup.
pub fn probe_environment(composition: &dyn Composition) -> EnvironmentInfo {
    let (major, minor) = detect_os_version();
    let env = EnvironmentInfo::new(major, minor)
        .with_dark_mode(detect_system_dark_mode())
        .with_glass(composition.supports_composition());
    log::info!(
        "Host environment: os {:.1}, dark mode {}, glass {}",
        env.os_version(),
        env.dark_mode_preferred,
        env.glass_available
    );
    env
}

/// Host OS version as (major, minor).
///
/// Only Windows versions carry meaning for theme selection; every other
/// host reports 10.0 and follows the flat theme branch.
pub fn detect_os_version() -> (u32, u32) {
    #[cfg(target_os = "windows")]
    {
        use winreg::RegKey;
        use winreg::enums::HKEY_LOCAL_MACHINE;

        if let Ok(key) = RegKey::predef(HKEY_LOCAL_MACHINE)
            .open_subkey("SOFTWARE\\Microsoft\\Windows NT\\CurrentVersion")
        {
            // Windows 10+ keeps the real numbers here, CurrentVersion is frozen at 6.3
            if let Ok(major) = key.get_value::<u32, _>("CurrentMajorVersionNumber") {
                let minor = key.get_value::<u32, _>("CurrentMinorVersionNumber").unwrap_or(0);
                return (major, minor);
            }
            if let Ok(version) = key.get_value::<String, _>("CurrentVersion") {
                if let Some(parsed) = parse_os_version(&version) {
                    return parsed;
                }
            }
        }
        (6, 0)
    }

    #[cfg(not(target_os = "windows"))]
    {
        (10, 0)
    }
}

/// Parse "major.minor" version strings such as "6.1".
pub fn parse_os_version(version: &str) -> Option<(u32, u32)> {
    let mut parts = version.trim().split('.');
    let major = parts.next()?.parse().ok()?;
    let minor = match parts.next() {
        Some(m) => m.parse().ok()?,
        None => 0,
    };
    Some((major, minor))
}

/// Host locale such as `de-DE`, if the OS reports one.
pub fn host_locale() -> Option<String> {
    sys_locale::get_locale()
}

pub fn detect_system_dark_mode() -> bool {
    // Windows: Check registry for dark mode preference
    #[cfg(target_os = "windows")]
    {
        use winreg::RegKey;
        use winreg::enums::HKEY_CURRENT_USER;

        if let Ok(hkcu) = RegKey::predef(HKEY_CURRENT_USER)
            .open_subkey("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize")
        {
            // AppsUseLightTheme: 0 = dark mode, 1 = light mode
            if let Ok(value) = hkcu.get_value::<u32, _>("AppsUseLightTheme") {
                return value == 0;
            }
        }
    }

    // Linux: GNOME exposes either a dark GTK theme or a color-scheme preference
    #[cfg(target_os = "linux")]
    {
        use std::process::Command;

        if let Ok(output) = Command::new("gsettings")
            .args(["get", "org.gnome.desktop.interface", "gtk-theme"])
            .output()
        {
            let theme = String::from_utf8_lossy(&output.stdout).to_lowercase();
            if theme.contains("dark") {
                return true;
            }
        }

        if let Ok(output) = Command::new("gsettings")
            .args(["get", "org.gnome.desktop.interface", "color-scheme"])
            .output()
        {
            let scheme = String::from_utf8_lossy(&output.stdout);
            if scheme.contains("prefer-dark") {
                return true;
            }
        }
    }

    #[cfg(target_os = "macos")]
    {
        use std::process::Command;

        if let Ok(output) = Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
        {
            if output.status.success() {
                let style = String::from_utf8_lossy(&output.stdout).to_lowercase();
                if style.contains("dark") {
                    return true;
                }
            }
        }
    }

    false
}
