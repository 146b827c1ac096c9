//! poster-composer: print-poster composition library
//!
//! This crate composites photos onto a fixed-size colored background canvas,
//! previews the result as a thumbnail, and exports a print-ready A3 JPEG at
//! 300 DPI. Photos are ingested in batches, each batch replacing the last,
//! and every render places the photo scaled and centered with the selected
//! color filling the margins.
//!
//! # Example
//!
//! ```
//! use poster_composer::{Composer, MemorySink, RawFile};
//!
//! let mut composer = Composer::new();
//! composer.select_color("#0000ff".parse().unwrap());
//!
//! // Hosts hand over raw bytes with the declared name and MIME type.
//! let report = composer.ingest(vec![
//!     RawFile::new("notes.txt", "text/plain", b"not an image".to_vec()),
//! ]);
//! assert_eq!(report.loaded, 0);
//! assert_eq!(report.rejected.len(), 1);
//!
//! // Exporting an empty collection saves nothing and is not an error.
//! let mut sink = MemorySink::new();
//! assert!(composer.export_all(&mut sink).unwrap().is_empty());
//! ```
//!
//! # Serializable Settings
//!
//! For host/frontend communication, use [`ComposerSettings`] with the
//! [`Configurable`] trait:
//!
//! ```
//! use poster_composer::{Composer, ComposerSettings, Configurable};
//!
//! let mut composer = Composer::new();
//!
//! let settings = ComposerSettings::new().with_background("#00ff00");
//! composer.apply_settings(&settings);
//!
//! let exported = composer.export_settings();
//! let json = exported.to_json().unwrap();
//! assert!(json.contains("#00ff00"));
//! ```

mod color;
mod compose;
mod composer;
mod error;
mod export;
mod geometry;
mod ingest;
mod photo;
mod settings;

#[cfg(feature = "canvas")]
mod canvas;

#[cfg(feature = "canvas")]
pub use canvas::CanvasComposer;
pub use color::BackgroundColor;
pub use compose::{encode_jpeg, render, CanvasSpec};
pub use composer::{Composer, Configurable};
pub use error::Error;
pub use export::{export_all, export_filename, export_one, DirectorySink, ExportSink, MemorySink};
pub use geometry::{fit_centered, Placement};
pub use ingest::{
    decode, ingest_batch, is_image_mime, DecodeFailurePolicy, IngestReport, RawFile, Rejection,
    RejectionReason,
};
pub use photo::{Photo, PhotoCollection, SizePx};
pub use settings::ComposerSettings;
