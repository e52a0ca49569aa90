use std::path::PathBuf;

use clap::Parser;
use fltk::{app, prelude::*};

use project_writer::app::domain::Message;
use project_writer::app::infrastructure::platform::{platform_composition, probe_environment};
use project_writer::app::services::session_store::SessionStore;
use project_writer::app::state::AppState;
use project_writer::ui::main_window::build_main_window;

/// Rich-text writer with a themed toolbar and recent files
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Document to open (if not provided, starts on the welcome page)
    input: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let app = app::App::default().load_system_fonts();
    let (sender, receiver) = app::channel::<Message>();

    let store = SessionStore::open_default();
    let session = store.load();
    let composition = platform_composition();
    let env = probe_environment(composition.as_ref());

    let widgets = build_main_window(&sender, session.language, &app::fonts());
    let mut state = AppState::new(widgets, sender, store, session, env, composition);

    state.widgets.wind.show();
    state.attach_native_window();

    match args.input {
        Some(path) if path.is_file() => state.open_path(&path),
        Some(path) => log::warn!("{} not found, starting on the welcome page", path.display()),
        None => {}
    }

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            state.handle(msg);
        }
    }
}
