//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that coordinate between
//! domain models, services, and the UI:
//! - Theme selection and application
//! - Toolbar/selection synchronization
//! - Recent files
//! - The open document

pub mod document;
pub mod recent_files;
pub mod selection_sync;
pub mod theme;
