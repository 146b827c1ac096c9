//! Full-resolution export of composed posters.
//!
//! Exports render at [`CanvasSpec::A3_PORTRAIT_300DPI`], encode as JPEG, and
//! hand the bytes to an [`ExportSink`] together with a filename derived from
//! the photo's original name.

use std::fs;
use std::path::PathBuf;

use crate::color::BackgroundColor;
use crate::compose::{self, CanvasSpec};
use crate::error::Error;
use crate::photo::PhotoCollection;

// ============================================================================
// ExportSink
// ============================================================================

/// Destination for exported JPEG bytes.
///
/// This is the seam between composition and the host's notion of "saving a
/// file": a download in a browser, a write to disk on a desktop, a buffer in
/// tests.
pub trait ExportSink {
    /// Persists one encoded poster under the given filename.
    fn save(&mut self, filename: &str, bytes: &[u8]) -> Result<(), Error>;
}

/// Sink that writes each export into a directory on disk.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Creates a sink writing into `dir`. The directory must already exist.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ExportSink for DirectorySink {
    fn save(&mut self, filename: &str, bytes: &[u8]) -> Result<(), Error> {
        fs::write(self.dir.join(filename), bytes).map_err(|source| Error::Save {
            filename: filename.to_string(),
            source,
        })
    }
}

/// Sink that keeps exports in memory.
///
/// Useful for embedding hosts that forward bytes elsewhere, and for tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    /// Saved `(filename, bytes)` pairs in save order.
    pub saved: Vec<(String, Vec<u8>)>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ExportSink for MemorySink {
    fn save(&mut self, filename: &str, bytes: &[u8]) -> Result<(), Error> {
        self.saved.push((filename.to_string(), bytes.to_vec()));
        Ok(())
    }
}

// ============================================================================
// Filename derivation
// ============================================================================

/// Derives the output filename for a photo's original name.
///
/// The extension (everything after the last `.`, if that segment is
/// non-empty and contains no path separator) is stripped, then the fixed
/// prefix and `.jpg` extension are applied, regardless of the input format.
///
/// # Example
///
/// ```
/// use poster_composer::export_filename;
///
/// assert_eq!(export_filename("holiday.png"), "converted_holiday.jpg");
/// assert_eq!(export_filename("archive.tar.gz"), "converted_archive.tar.jpg");
/// assert_eq!(export_filename("noext"), "converted_noext.jpg");
/// ```
pub fn export_filename(original: &str) -> String {
    format!("converted_{}.jpg", strip_extension(original))
}

fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) => {
            let tail = &name[idx + 1..];
            if !tail.is_empty() && !tail.contains('/') {
                &name[..idx]
            } else {
                name
            }
        }
        None => name,
    }
}

// ============================================================================
// Export operations
// ============================================================================

/// Exports the photo at `index` as a full-resolution A3 poster.
///
/// An out-of-bounds index is a no-op returning `Ok(None)`, so a stale UI
/// reference to a removed entry can never fail the host. On success, returns
/// the filename the sink saved under.
pub fn export_one(
    collection: &PhotoCollection,
    index: usize,
    background: BackgroundColor,
    sink: &mut dyn ExportSink,
) -> Result<Option<String>, Error> {
    let Some(photo) = collection.get(index) else {
        return Ok(None);
    };

    let canvas = compose::render(photo, CanvasSpec::A3_PORTRAIT_300DPI, background);
    let bytes = compose::encode_jpeg(&canvas)?;

    let filename = export_filename(&photo.name);
    sink.save(&filename, &bytes)?;
    log::debug!("exported {:?} ({} bytes)", filename, bytes.len());

    Ok(Some(filename))
}

/// Exports every photo in the collection.
///
/// The count and the background color are both fixed at call time: `background`
/// is taken by value, so a color change elsewhere cannot produce mixed-color
/// output within one call. An empty collection performs zero saves and is not
/// an error. Returns the saved filenames in collection order.
pub fn export_all(
    collection: &PhotoCollection,
    background: BackgroundColor,
    sink: &mut dyn ExportSink,
) -> Result<Vec<String>, Error> {
    let mut saved = Vec::with_capacity(collection.len());
    for index in 0..collection.len() {
        if let Some(filename) = export_one(collection, index, background, sink)? {
            saved.push(filename);
        }
    }
    Ok(saved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::photo::Photo;
    use image::{Rgba, RgbaImage};

    fn collection_with(names: &[&str]) -> PhotoCollection {
        let mut photos = PhotoCollection::new();
        for name in names {
            photos.append(Photo::new(
                RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 255])),
                *name,
            ));
        }
        photos
    }

    #[test]
    fn filename_strips_extension_and_adds_prefix() {
        assert_eq!(export_filename("photo.png"), "converted_photo.jpg");
        assert_eq!(export_filename("photo.jpeg"), "converted_photo.jpg");
        assert_eq!(export_filename("my.photo.webp"), "converted_my.photo.jpg");
        assert_eq!(export_filename("noext"), "converted_noext.jpg");
        assert_eq!(export_filename(".png"), "converted_.jpg");
        assert_eq!(export_filename("trailing."), "converted_trailing..jpg");
    }

    #[test]
    fn export_one_saves_under_derived_filename() {
        let photos = collection_with(&["holiday.png"]);
        let mut sink = MemorySink::new();

        let filename = export_one(&photos, 0, BackgroundColor::default(), &mut sink)
            .unwrap()
            .unwrap();

        assert_eq!(filename, "converted_holiday.jpg");
        assert_eq!(sink.saved.len(), 1);
        assert_eq!(sink.saved[0].0, "converted_holiday.jpg");
        assert_eq!(&sink.saved[0].1[..2], &[0xff, 0xd8]);
    }

    #[test]
    fn export_one_out_of_bounds_is_noop() {
        let photos = collection_with(&["a.png"]);
        let mut sink = MemorySink::new();

        let result = export_one(&photos, 5, BackgroundColor::default(), &mut sink).unwrap();

        assert!(result.is_none());
        assert!(sink.saved.is_empty());
    }

    #[test]
    fn export_all_on_empty_collection_saves_nothing() {
        let photos = PhotoCollection::new();
        let mut sink = MemorySink::new();

        let saved = export_all(&photos, BackgroundColor::default(), &mut sink).unwrap();

        assert!(saved.is_empty());
        assert!(sink.saved.is_empty());
    }

    #[test]
    fn export_all_saves_every_photo_in_order() {
        let photos = collection_with(&["a.png", "b.png"]);
        let mut sink = MemorySink::new();

        let saved = export_all(&photos, BackgroundColor::default(), &mut sink).unwrap();

        assert_eq!(saved, ["converted_a.jpg", "converted_b.jpg"]);
        assert_eq!(sink.saved.len(), 2);
    }

    #[test]
    fn exported_poster_is_a3_with_background_margins() {
        // One 400x300 photo on a green background. The photo fills the full
        // width, so the canvas corners sit in the margins above and below it.
        let mut photos = PhotoCollection::new();
        photos.append(Photo::new(
            RgbaImage::from_pixel(400, 300, Rgba([255, 255, 255, 255])),
            "wide.png",
        ));
        let green: BackgroundColor = "#00ff00".parse().unwrap();
        let mut sink = MemorySink::new();

        let filename = export_one(&photos, 0, green, &mut sink).unwrap().unwrap();
        assert_eq!(filename, "converted_wide.jpg");

        let decoded = image::load_from_memory(&sink.saved[0].1).unwrap().to_rgb8();
        assert_eq!((decoded.width(), decoded.height()), (3508, 4961));

        // JPEG is lossy, so sample the corners with a small tolerance.
        for (x, y) in [(0, 0), (3507, 0), (0, 4960), (3507, 4960)] {
            let [r, g, b] = decoded.get_pixel(x, y).0;
            assert!(r < 40, "corner ({x},{y}) red channel too high: {r}");
            assert!(g > 215, "corner ({x},{y}) green channel too low: {g}");
            assert!(b < 40, "corner ({x},{y}) blue channel too high: {b}");
        }
    }

    #[test]
    fn directory_sink_writes_files() {
        let dir = std::env::temp_dir().join(format!(
            "poster-composer-test-{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();

        let photos = collection_with(&["disk.png"]);
        let mut sink = DirectorySink::new(&dir);
        export_one(&photos, 0, BackgroundColor::default(), &mut sink)
            .unwrap()
            .unwrap();

        let written = std::fs::read(dir.join("converted_disk.jpg")).unwrap();
        assert_eq!(&written[..2], &[0xff, 0xd8]);

        std::fs::remove_dir_all(&dir).ok();
    }
}
