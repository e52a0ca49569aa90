use std::path::{Path, PathBuf};

use crate::app::domain::{Message, SessionState};
use crate::app::infrastructure::error::Result;
use crate::app::services::session_store::SessionStore;
use crate::app::services::text_ops::extract_filename;

/// One entry of the Recent Files menu.
#[derive(Debug, Clone, PartialEq)]
pub struct RecentEntry {
    pub label: String,
    pub path: PathBuf,
}

impl RecentEntry {
    /// Message the menu item sends: show the editor, then open `path`.
    pub fn open_action(&self) -> Message {
        Message::OpenRecent(self.path.clone())
    }
}

/// Keeps the bounded MRU list and its persisted copy in step.
pub struct RecentFilesController {
    store: SessionStore,
    entries: Vec<RecentEntry>,
}

impl RecentFilesController {
    pub fn new(store: SessionStore, state: &SessionState) -> Self {
        Self {
            store,
            entries: Self::materialize(state),
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Current menu entries, most recent first.
    pub fn entries(&self) -> &[RecentEntry] {
        &self.entries
    }

    /// Record that `path` was opened or saved.
    ///
    /// The in-memory list and the menu entries are updated even if writing
    /// the session fails; the storage error is returned for the status line.
    pub fn record_open(&mut self, state: &mut SessionState, path: impl AsRef<Path>) -> Result<()> {
        state.push_recent(path.as_ref().to_path_buf());
        self.entries = Self::materialize(state);
        self.store.save(state)
    }

    pub fn materialize(state: &SessionState) -> Vec<RecentEntry> {
        state
            .recent_files
            .iter()
            .map(|path| RecentEntry {
                label: extract_filename(path),
                path: path.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::{Language, MAX_RECENT_FILES};
    use crate::app::infrastructure::error::AppError;

    fn paths(state: &SessionState) -> Vec<String> {
        state
            .recent_files
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_reopen_moves_to_front() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = SessionState::default();
        let mut recent = RecentFilesController::new(SessionStore::new(dir.path().join("project.dat")), &state);

        recent.record_open(&mut state, "a").unwrap();
        recent.record_open(&mut state, "b").unwrap();
        recent.record_open(&mut state, "a").unwrap();
        assert_eq!(paths(&state), vec!["a", "b"]);
    }

    #[test]
    fn test_invariants_over_many_opens() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = SessionState::default();
        let mut recent = RecentFilesController::new(SessionStore::new(dir.path().join("project.dat")), &state);

        // Deterministic mix of new files and re-opens
        for i in 0..200u32 {
            let name = format!("/docs/{}.rtf", (i * 7 + i / 3) % 17);
            recent.record_open(&mut state, &name).unwrap();

            assert!(state.recent_files.len() <= MAX_RECENT_FILES);
            assert_eq!(state.recent_files[0], PathBuf::from(&name));
            let mut unique = state.recent_files.clone();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), state.recent_files.len());
        }
    }

    #[test]
    fn test_record_writes_through() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("project.dat"));
        let mut state = SessionState::new(Language::German);
        let mut recent = RecentFilesController::new(store.clone(), &state);

        recent.record_open(&mut state, "/docs/a.rtf").unwrap();
        assert_eq!(store.load(), state);
    }

    #[test]
    fn test_entries_use_base_name() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = SessionState::default();
        let mut recent = RecentFilesController::new(SessionStore::new(dir.path().join("project.dat")), &state);

        recent.record_open(&mut state, "/docs/letters/a.rtf").unwrap();
        recent.record_open(&mut state, "/tmp/b.txt").unwrap();

        let labels: Vec<&str> = recent.entries().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["b.txt", "a.rtf"]);
        assert_eq!(
            recent.entries()[1].open_action(),
            Message::OpenRecent(PathBuf::from("/docs/letters/a.rtf"))
        );
    }

    #[test]
    fn test_storage_failure_keeps_memory_state() {
        let dir = tempfile::tempdir().unwrap();
        // Directory in place of the file makes every save fail
        let mut state = SessionState::default();
        let mut recent = RecentFilesController::new(SessionStore::new(dir.path()), &state);

        let err = recent.record_open(&mut state, "/docs/a.rtf").unwrap_err();
        assert!(matches!(err, AppError::Storage { .. }));
        assert_eq!(paths(&state), vec!["/docs/a.rtf"]);
        assert_eq!(recent.entries().len(), 1);
    }

    #[test]
    fn test_new_materializes_loaded_state() {
        let state = SessionState {
            language: Language::English,
            recent_files: vec![PathBuf::from("/x/one.rtf"), PathBuf::from("/x/two.txt")],
        };
        let recent = RecentFilesController::new(SessionStore::new("unused.dat"), &state);
        assert_eq!(recent.entries().len(), 2);
        assert_eq!(recent.entries()[0].label, "one.rtf");
    }
}
