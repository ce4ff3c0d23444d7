//! camera-appicon: procedural iOS app icon generation
//!
//! This crate draws a stylized camera glyph at the fixed iOS app-icon
//! resolutions and writes each as a PNG (plus the asset-catalog
//! `Contents.json`) into an `.appiconset` directory.
//!
//! # Example
//!
//! ```
//! use camera_appicon::glyph;
//!
//! // Render the marketing icon in memory.
//! let icon = glyph::render(1024);
//! assert_eq!(icon.dimensions(), (1024, 1024));
//! ```
//!
//! Writing the full set to disk goes through [`Generator`]:
//!
//! ```no_run
//! use camera_appicon::Generator;
//!
//! let generator = Generator::with_default_out_dir();
//! let written = generator.generate_all()?;
//! assert_eq!(written.len(), 10); // nine PNGs + Contents.json
//! # Ok::<(), camera_appicon::IconError>(())
//! ```

mod canvas;
mod error;
mod generator;
pub mod geometry;
pub mod glyph;
mod manifest;
mod slots;

pub use canvas::Canvas;
pub use error::IconError;
pub use generator::Generator;
pub use manifest::{Manifest, ManifestImage, ManifestInfo};
pub use slots::{APP_ICON_SLOTS, IconSlot, Idiom};
