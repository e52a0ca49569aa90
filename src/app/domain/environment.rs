/// Facts about the host, probed once at startup and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvironmentInfo {
    pub os_major: u32,
    pub os_minor: u32,
    pub dark_mode_preferred: bool,
    pub glass_available: bool,
}

impl EnvironmentInfo {
    pub fn new(os_major: u32, os_minor: u32) -> Self {
        Self {
            os_major,
            os_minor,
            dark_mode_preferred: false,
            glass_available: false,
        }
    }

    pub fn with_dark_mode(mut self, dark: bool) -> Self {
        self.dark_mode_preferred = dark;
        self
    }

    pub fn with_glass(mut self, glass: bool) -> Self {
        self.glass_available = glass;
        self
    }

    /// OS version as `major.minorTenths`, e.g. 6.1 or 10.0.
    pub fn os_version(&self) -> f64 {
        self.os_major as f64 + self.os_minor as f64 / 10.0
    }

    /// True for the one release that ships the Luna look (5.1).
    pub fn is_luna_release(&self) -> bool {
        self.os_major == 5 && self.os_minor == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_version_decimal() {
        assert_eq!(EnvironmentInfo::new(6, 1).os_version(), 6.1);
        assert_eq!(EnvironmentInfo::new(10, 0).os_version(), 10.0);
        assert_eq!(EnvironmentInfo::new(5, 1).os_version(), 5.1);
    }

    #[test]
    fn test_luna_release() {
        assert!(EnvironmentInfo::new(5, 1).is_luna_release());
        assert!(!EnvironmentInfo::new(5, 2).is_luna_release());
        assert!(!EnvironmentInfo::new(6, 1).is_luna_release());
    }
}
