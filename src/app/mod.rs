//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Theme, SessionState, FontSpec, Messages)
//! - `controllers/` - Orchestration (ThemeEngine, SelectionSyncController, recent files)
//! - `services/` - Business operations (session store, render strategies, text_ops)
//! - `infrastructure/` - External integrations (FLTK buffer, platform, text surface, error)
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use controllers::recent_files::RecentFilesController;
pub use controllers::selection_sync::SelectionSyncController;
pub use controllers::theme::ThemeEngine;
pub use domain::{Language, Message, SessionState, Theme};
pub use infrastructure::error::{AppError, Result};
pub use services::session_store::SessionStore;
