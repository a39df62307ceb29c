//! File I/O operations (save, load) for designer state.

use std::path::Path;

use sketchy_core::Result;

use super::DesignerState;
use crate::serialization::DrawingFile;

impl DesignerState {
    /// Save the drawing to file. The canvas is left untouched.
    pub fn save(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let design = DrawingFile::from_canvas(&self.canvas);
        design.save_to_file(path)?;
        tracing::info!(
            "Saved {} objects to {}",
            design.records.len(),
            path.display()
        );

        self.current_file_path = Some(path.to_path_buf());
        self.is_modified = false;
        Ok(())
    }

    /// Load a drawing from file, replacing the canvas and clearing history.
    ///
    /// The file is decoded completely before anything is touched, so a
    /// malformed file leaves the current drawing as it was.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let design = DrawingFile::load_from_file(path).inspect_err(|err| {
            tracing::warn!("Failed to load {}: {}", path.display(), err);
        })?;

        self.end_gesture();
        design.restore(&mut self.canvas);
        self.history.clear();
        tracing::info!(
            "Loaded {} objects from {}",
            design.records.len(),
            path.display()
        );

        self.current_file_path = Some(path.to_path_buf());
        self.is_modified = false;
        Ok(())
    }
}
