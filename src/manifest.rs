//! The Xcode asset-catalog manifest for the icon set.
//!
//! An `.appiconset` directory is only usable by Xcode when it carries a
//! `Contents.json` describing each image. This module builds that manifest
//! from the slot table and serializes it with serde.

use serde::{Deserialize, Serialize};

use crate::slots::IconSlot;

/// One image entry in `Contents.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestImage {
    pub filename: String,
    pub idiom: String,
    pub scale: String,
    pub size: String,
}

impl ManifestImage {
    /// Builds the manifest entry for one icon slot.
    pub fn for_slot(slot: &IconSlot) -> Self {
        Self {
            filename: slot.file_name(),
            idiom: slot.idiom.as_str().to_string(),
            scale: slot.scale_label(),
            size: slot.size_label(),
        }
    }
}

/// The `info` block Xcode writes into every asset-catalog manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestInfo {
    pub author: String,
    pub version: u32,
}

impl Default for ManifestInfo {
    fn default() -> Self {
        Self {
            author: "xcode".to_string(),
            version: 1,
        }
    }
}

/// The full `Contents.json` document for the icon set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub images: Vec<ManifestImage>,
    pub info: ManifestInfo,
}

impl Manifest {
    /// Builds the manifest for a slot table, preserving table order.
    pub fn for_slots(slots: &[IconSlot]) -> Self {
        Self {
            images: slots.iter().map(ManifestImage::for_slot).collect(),
            info: ManifestInfo::default(),
        }
    }

    /// Serializes the manifest to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parses a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
