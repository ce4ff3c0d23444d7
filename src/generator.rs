//! The size/output driver.
//!
//! Iterates the fixed slot table, renders each size, and persists the
//! results under the output directory. Each output is independent and the
//! renderer is a pure function of size, so reruns overwrite the same files
//! with identical bytes.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::IconError;
use crate::glyph;
use crate::manifest::Manifest;
use crate::slots::{APP_ICON_SLOTS, IconSlot};

/// Writes the camera icon set into an `.appiconset` directory.
pub struct Generator {
    out_dir: PathBuf,
}

impl Generator {
    /// The conventional asset-catalog location for the icon set.
    pub const DEFAULT_OUT_DIR: &'static str = "Assets.xcassets/AppIcon.appiconset";

    /// Creates a generator targeting the given output directory.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    /// Creates a generator targeting [`DEFAULT_OUT_DIR`](Self::DEFAULT_OUT_DIR).
    pub fn with_default_out_dir() -> Self {
        Self::new(Self::DEFAULT_OUT_DIR)
    }

    /// The output directory this generator writes into.
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Creates the output directory (and parents) if absent.
    pub fn ensure_out_dir(&self) -> Result<(), IconError> {
        fs::create_dir_all(&self.out_dir).map_err(|source| IconError::CreateDir {
            path: self.out_dir.clone(),
            source,
        })
    }

    /// Renders one slot and writes its PNG. Returns the written path.
    pub fn write_slot(&self, slot: &IconSlot) -> Result<PathBuf, IconError> {
        let path = self.out_dir.join(slot.file_name());
        let icon = glyph::render(slot.pixels());
        icon.save(&path).map_err(|source| IconError::SaveIcon {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }

    /// Writes the `Contents.json` manifest for the slot table.
    pub fn write_manifest(&self) -> Result<PathBuf, IconError> {
        let path = self.out_dir.join("Contents.json");
        let json = Manifest::for_slots(&APP_ICON_SLOTS).to_json_pretty()?;
        fs::write(&path, json).map_err(|source| IconError::WriteManifest {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }

    /// Runs the whole set: creates the directory, writes every slot in
    /// table order, then the manifest. Returns all written paths. Aborts
    /// on the first failure.
    pub fn generate_all(&self) -> Result<Vec<PathBuf>, IconError> {
        self.ensure_out_dir()?;
        let mut written = Vec::with_capacity(APP_ICON_SLOTS.len() + 1);
        for slot in &APP_ICON_SLOTS {
            written.push(self.write_slot(slot)?);
        }
        written.push(self.write_manifest()?);
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_out_dir_is_the_asset_catalog_path() {
        let generator = Generator::with_default_out_dir();
        assert_eq!(
            generator.out_dir(),
            Path::new("Assets.xcassets/AppIcon.appiconset")
        );
    }

    #[test]
    fn write_slot_fails_without_a_directory() {
        let generator = Generator::new("/nonexistent/appiconset-test");
        let err = generator.write_slot(&APP_ICON_SLOTS[0]).unwrap_err();
        assert!(matches!(err, IconError::SaveIcon { .. }));
    }
}
