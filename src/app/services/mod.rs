//! Services layer - business operations and utilities.
//!
//! This module contains business logic and operations:
//! - Session persistence
//! - Theme draw rules
//! - Text and path helpers

pub mod render;
pub mod session_store;
pub mod text_ops;
