use std::fs;
use std::path::PathBuf;

use project_writer::app::{Language, RecentFilesController, SessionStore};

#[test]
fn test_first_run_german_host_then_three_opens() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("project-writer").join("project.dat");
    let store = SessionStore::new(&file).with_host_locale(Some("de".to_string()));

    let mut session = store.load();
    assert_eq!(session.language, Language::German);
    assert!(session.recent_files.is_empty());
    assert!(!file.exists());

    let mut recent = RecentFilesController::new(store.clone(), &session);
    for path in ["/docs/a.rtf", "/docs/b.rtf", "/docs/a.rtf"] {
        recent.record_open(&mut session, path).unwrap();
    }

    assert_eq!(fs::read_to_string(&file).unwrap(), "de\n/docs/a.rtf\n/docs/b.rtf\n");
    assert_eq!(
        session.recent_files,
        vec![PathBuf::from("/docs/a.rtf"), PathBuf::from("/docs/b.rtf")]
    );
}

#[test]
fn test_restart_restores_language_and_list() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("project.dat");

    {
        let store = SessionStore::new(&file).with_host_locale(Some("en-US".to_string()));
        let mut session = store.load();
        session.language = Language::German;
        let mut recent = RecentFilesController::new(store, &session);
        recent.record_open(&mut session, "/docs/notes.txt").unwrap();
    }

    // Host locale only matters on first run
    let store = SessionStore::new(&file).with_host_locale(Some("en-US".to_string()));
    let session = store.load();
    assert_eq!(session.language, Language::German);

    let recent = RecentFilesController::new(store, &session);
    assert_eq!(recent.entries().len(), 1);
    assert_eq!(recent.entries()[0].label, "notes.txt");
}
