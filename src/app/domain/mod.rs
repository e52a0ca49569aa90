//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Themes and the host environment they are chosen from
//! - Session state (language, recent files)
//! - Font and color values exchanged with the text surface
//! - Localized labels and the message types for the event system

pub mod environment;
pub mod labels;
pub mod messages;
pub mod session;
pub mod style;
pub mod theme;

pub use environment::EnvironmentInfo;
pub use labels::Label;
pub use messages::Message;
pub use session::{Language, SessionState, MAX_RECENT_FILES};
pub use style::{FontSpec, Rgb, SelectionFontView};
pub use theme::Theme;
