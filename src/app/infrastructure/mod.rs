//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - FLTK buffer utilities
//! - Platform detection and the composition capability
//! - The text surface capability
//! - Error types

pub mod buffer;
pub mod error;
pub mod platform;
pub mod text_surface;
