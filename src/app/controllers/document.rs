use std::path::{Path, PathBuf};

use crate::app::domain::labels::APP_NAME;
use crate::app::infrastructure::error::Result;
use crate::app::infrastructure::text_surface::TextSurface;
use crate::app::services::text_ops::{extract_filename, file_mode_for};

/// Tracks the single open document and routes load/save through the surface.
#[derive(Debug, Default)]
pub struct DocumentController {
    current: Option<PathBuf>,
}

impl DocumentController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.current.as_deref()
    }

    /// Load `path` into the surface. On failure nothing changes.
    pub fn open(&mut self, path: &Path, surface: &dyn TextSurface) -> Result<()> {
        surface.load_file(path, file_mode_for(path))?;
        self.current = Some(path.to_path_buf());
        log::info!("Opened {}", path.display());
        Ok(())
    }

    /// Save the surface to `path`. The current path only moves on success.
    pub fn save_as(&mut self, path: &Path, surface: &dyn TextSurface) -> Result<()> {
        surface.save_file(path)?;
        self.current = Some(path.to_path_buf());
        log::info!("Saved {}", path.display());
        Ok(())
    }

    pub fn new_document(&mut self, surface: &dyn TextSurface) {
        surface.clear();
        self.current = None;
    }

    pub fn window_title(&self) -> String {
        match &self.current {
            Some(path) => format!("{} - {}", APP_NAME, extract_filename(path)),
            None => APP_NAME.to_string(),
        }
    }
}
