use std::path::PathBuf;

/// Most-recently-used list never grows beyond this.
pub const MAX_RECENT_FILES: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    German,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::German];

    pub fn tag(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::German => "de",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Language> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Self::English),
            "de" => Some(Self::German),
            _ => None,
        }
    }

    /// Match a host locale such as `de-DE`, `de_AT.UTF-8` or `en`.
    pub fn from_locale(locale: &str) -> Option<Language> {
        let primary = locale
            .split(['-', '_', '.'])
            .next()
            .unwrap_or_default();
        Self::from_tag(primary)
    }

    /// Entry in the language menu
    pub fn menu_label(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::German => "Deutsch (Beta)",
        }
    }
}

/// State that survives restarts: UI language and recent files.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    pub language: Language,
    /// Most recent first, unique, at most `MAX_RECENT_FILES`.
    pub recent_files: Vec<PathBuf>,
}

impl SessionState {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            recent_files: Vec::new(),
        }
    }

    /// Move `path` to the front of the recent list, dropping any older
    /// occurrence and anything past the cap.
    pub fn push_recent(&mut self, path: PathBuf) {
        self.recent_files.retain(|p| *p != path);
        self.recent_files.insert(0, path);
        self.recent_files.truncate(MAX_RECENT_FILES);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_tags() {
        assert_eq!(Language::English.tag(), "en");
        assert_eq!(Language::German.tag(), "de");
        assert_eq!(Language::from_tag("de"), Some(Language::German));
        assert_eq!(Language::from_tag(" EN "), Some(Language::English));
        assert_eq!(Language::from_tag("fr"), None);
    }

    #[test]
    fn test_language_from_locale() {
        assert_eq!(Language::from_locale("de-DE"), Some(Language::German));
        assert_eq!(Language::from_locale("de_AT.UTF-8"), Some(Language::German));
        assert_eq!(Language::from_locale("en"), Some(Language::English));
        assert_eq!(Language::from_locale("pt-BR"), None);
        assert_eq!(Language::from_locale(""), None);
    }

    #[test]
    fn test_push_recent_moves_to_front() {
        let mut state = SessionState::default();
        state.push_recent(PathBuf::from("a"));
        state.push_recent(PathBuf::from("b"));
        state.push_recent(PathBuf::from("a"));
        assert_eq!(state.recent_files, vec![PathBuf::from("a"), PathBuf::from("b")]);
    }

    #[test]
    fn test_push_recent_caps_length() {
        let mut state = SessionState::default();
        for i in 0..25 {
            state.push_recent(PathBuf::from(format!("/f/{}", i)));
        }
        assert_eq!(state.recent_files.len(), MAX_RECENT_FILES);
        assert_eq!(state.recent_files[0], PathBuf::from("/f/24"));
        assert_eq!(state.recent_files[9], PathBuf::from("/f/15"));
    }
}
