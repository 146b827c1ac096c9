//! Top-level composition engine owning the batch and selection state.

use image::RgbaImage;

use crate::color::BackgroundColor;
use crate::compose::{self, CanvasSpec};
use crate::error::Error;
use crate::export::{self, ExportSink};
use crate::ingest::{self, DecodeFailurePolicy, IngestReport, RawFile};
use crate::photo::PhotoCollection;
use crate::settings::ComposerSettings;

// ============================================================================
// Configurable Trait
// ============================================================================

/// Trait for types that can be configured from [`ComposerSettings`].
pub trait Configurable {
    /// Applies a settings snapshot to this instance.
    ///
    /// Unset fields keep their current value. A background string that fails
    /// to parse is ignored, so a malformed message from a host cannot knock
    /// over an otherwise valid selection.
    fn apply_settings(&mut self, settings: &ComposerSettings);

    /// Exports the current selection state as a settings snapshot.
    fn export_settings(&self) -> ComposerSettings;
}

// ============================================================================
// Composer
// ============================================================================

/// Main composition engine.
///
/// `Composer` owns the photo collection and the selected background color.
/// Hosts feed it batches of [`RawFile`]s, read previews at thumbnail size,
/// and trigger full-resolution exports through an [`ExportSink`]. All state
/// lives here; the render and pipeline functions underneath are pure.
///
/// # Example
///
/// ```
/// use poster_composer::{Composer, MemorySink};
///
/// let mut composer = Composer::new();
/// composer.select_color("#0000ff".parse().unwrap());
///
/// // Nothing ingested yet: exporting everything saves zero files.
/// let mut sink = MemorySink::new();
/// let saved = composer.export_all(&mut sink).unwrap();
/// assert!(saved.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Composer {
    photos: PhotoCollection,
    background: BackgroundColor,
    decode_failures: DecodeFailurePolicy,
}

impl Composer {
    /// Creates a composer with an empty collection and the default red
    /// background.
    pub fn new() -> Self {
        Self::default()
    }

    // ---- Selection state ----

    /// Selects the background color used by every render from now on.
    pub fn select_color(&mut self, color: BackgroundColor) {
        self.background = color;
    }

    /// Returns the currently selected background color.
    pub fn background(&self) -> BackgroundColor {
        self.background
    }

    /// Sets how decode failures are surfaced during ingestion.
    pub fn set_decode_failure_policy(&mut self, policy: DecodeFailurePolicy) {
        self.decode_failures = policy;
    }

    // ---- Collection state ----

    /// Returns the current photo collection.
    pub fn photos(&self) -> &PhotoCollection {
        &self.photos
    }

    /// Returns the number of photos in the current batch.
    pub fn count(&self) -> usize {
        self.photos.len()
    }

    /// Removes the photo at the given position. Out of bounds is a no-op.
    pub fn remove_at(&mut self, index: usize) -> bool {
        self.photos.remove_at(index)
    }

    /// Clears the current batch.
    pub fn clear(&mut self) {
        self.photos.clear();
    }

    // ---- Pipelines ----

    /// Ingests a batch of files, replacing the current collection.
    ///
    /// See [`ingest_batch`](crate::ingest_batch) for batch semantics. The
    /// report's rejections are what the host should surface to the user.
    pub fn ingest(&mut self, files: Vec<RawFile>) -> IngestReport {
        ingest::ingest_batch(&mut self.photos, files, self.decode_failures)
    }

    /// Renders the thumbnail preview for the photo at `index`.
    ///
    /// Returns `None` for an out-of-bounds index.
    pub fn preview(&self, index: usize) -> Option<RgbaImage> {
        self.photos
            .get(index)
            .map(|photo| compose::render(photo, CanvasSpec::THUMBNAIL, self.background))
    }

    /// Renders thumbnail previews for the whole collection, in order.
    pub fn previews(&self) -> Vec<RgbaImage> {
        self.photos
            .iter()
            .map(|photo| compose::render(photo, CanvasSpec::THUMBNAIL, self.background))
            .collect()
    }

    /// Exports the photo at `index` at full A3 resolution.
    ///
    /// Out of bounds is a no-op returning `Ok(None)`.
    pub fn export_one(
        &self,
        index: usize,
        sink: &mut dyn ExportSink,
    ) -> Result<Option<String>, Error> {
        export::export_one(&self.photos, index, self.background, sink)
    }

    /// Exports every photo in the current batch.
    ///
    /// The background color is snapshotted once for the whole batch, so all
    /// posters of one call share the same color even if the selection
    /// changes concurrently in the host UI.
    pub fn export_all(&self, sink: &mut dyn ExportSink) -> Result<Vec<String>, Error> {
        export::export_all(&self.photos, self.background, sink)
    }
}

impl Configurable for Composer {
    fn apply_settings(&mut self, settings: &ComposerSettings) {
        if let Some(ref color) = settings.background {
            match color.parse() {
                Ok(parsed) => self.background = parsed,
                Err(_) => log::warn!("ignoring unrecognized background color {color:?}"),
            }
        }
        if let Some(report) = settings.report_decode_failures {
            self.decode_failures = if report {
                DecodeFailurePolicy::Report
            } else {
                DecodeFailurePolicy::Silent
            };
        }
    }

    fn export_settings(&self) -> ComposerSettings {
        ComposerSettings::new()
            .with_background(self.background.to_hex())
            .with_report_decode_failures(self.decode_failures == DecodeFailurePolicy::Report)
    }
}

// ============================================================================
// Tests
// ============================================================================
