use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::app::domain::session::{Language, SessionState, MAX_RECENT_FILES};
use crate::app::infrastructure::error::{AppError, Result};

pub const SESSION_FILE_NAME: &str = "project.dat";

/// Line-oriented session file: language tag on line 1, recent files after.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
    host_locale: Option<String>,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            host_locale: None,
        }
    }

    /// Store at the per-user config location, seeded with the host locale.
    pub fn open_default() -> Self {
        Self::new(Self::default_path()).with_host_locale(crate::app::infrastructure::platform::host_locale())
    }

    /// Locale used to pick the language on first run.
    pub fn with_host_locale(mut self, locale: Option<String>) -> Self {
        self.host_locale = locale;
        self
    }

    /// Get session file path (cross-platform)
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("project-writer");
        path.push(SESSION_FILE_NAME);
        path
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the session, or synthesize defaults when there is none yet.
    /// Never fails: an unreadable file degrades to defaults.
    pub fn load(&self) -> SessionState {
        match fs::read_to_string(&self.path) {
            Ok(contents) => parse_session(&contents, self.first_run_language()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("No session at {}, starting fresh", self.path.display());
                self.defaults()
            }
            Err(e) => {
                log::warn!("{}. Using defaults.", AppError::storage(&self.path, e));
                self.defaults()
            }
        }
    }

    /// Write the session through to disk.
    pub fn save(&self, state: &SessionState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| AppError::storage(&self.path, e))?;
            }
        }
        fs::write(&self.path, serialize_session(state)).map_err(|e| AppError::storage(&self.path, e))?;
        log::debug!(
            "Saved session ({} recent files) to {}",
            state.recent_files.len(),
            self.path.display()
        );
        Ok(())
    }

    fn defaults(&self) -> SessionState {
        SessionState::new(self.first_run_language())
    }

    fn first_run_language(&self) -> Language {
        self.host_locale
            .as_deref()
            .and_then(Language::from_locale)
            .unwrap_or_default()
    }
}

/// Parse session file contents. Blank and duplicate paths are dropped and the
/// list is capped, so a hand-edited file cannot break the list invariants.
pub fn parse_session(contents: &str, fallback: Language) -> SessionState {
    let mut lines = contents.lines();
    let language = lines
        .next()
        .and_then(Language::from_tag)
        .unwrap_or(fallback);

    let mut recent_files: Vec<PathBuf> = Vec::new();
    for line in lines {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        let path = PathBuf::from(line);
        if recent_files.contains(&path) {
            continue;
        }
        recent_files.push(path);
        if recent_files.len() == MAX_RECENT_FILES {
            break;
        }
    }

    SessionState {
        language,
        recent_files,
    }
}

pub fn serialize_session(state: &SessionState) -> String {
    let mut out = String::new();
    out.push_str(state.language.tag());
    out.push('\n');
    for path in &state.recent_files {
        out.push_str(&path.to_string_lossy());
        out.push('\n');
    }
    out
}
