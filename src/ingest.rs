//! Batch ingestion of user-selected files into the photo collection.
//!
//! A batch fully replaces the previous collection. Inputs whose declared
//! MIME type is not `image/*` are rejected and reported; inputs that fail to
//! decode are dropped silently unless the host opts into reporting them.

use std::fmt;

use image::RgbaImage;

use crate::error::Error;
use crate::photo::{Photo, PhotoCollection};

// ============================================================================
// RawFile
// ============================================================================

/// A user-selected file before decoding.
///
/// Hosts produce these from whatever their file-selection surface yields:
/// a picker, a drop event, or raw bytes handed over a wasm boundary.
#[derive(Debug, Clone)]
pub struct RawFile {
    /// The declared file name, extension included.
    pub name: String,

    /// The declared MIME type, e.g. `image/png`.
    pub mime: String,

    /// The raw, undecoded file contents.
    pub bytes: Vec<u8>,
}

impl RawFile {
    /// Creates a raw file from its declared name, MIME type, and contents.
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            bytes,
        }
    }
}

/// Returns true if the declared MIME type indicates an image.
pub fn is_image_mime(mime: &str) -> bool {
    mime.starts_with("image/")
}

// ============================================================================
// Ingestion outcome
// ============================================================================

/// What to do when a file with an image MIME type fails to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeFailurePolicy {
    /// Drop the file without surfacing anything to the user.
    #[default]
    Silent,

    /// Record the failure in the ingest report alongside MIME rejections.
    Report,
}

/// Why a file was left out of the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    /// The declared MIME type is not `image/*`.
    UnsupportedType(String),

    /// The bytes could not be decoded as an image.
    DecodeFailed(String),
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedType(mime) => write!(f, "not an image file (type {mime:?})"),
            Self::DecodeFailed(detail) => f.write_str(detail),
        }
    }
}

/// A single file left out of the batch, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub name: String,
    pub reason: RejectionReason,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.reason)
    }
}

/// The outcome of one ingestion batch.
///
/// `rejected` holds the entries the host should surface to the user. With
/// [`DecodeFailurePolicy::Silent`] it only ever contains MIME rejections.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IngestReport {
    /// Number of photos appended to the collection.
    pub loaded: usize,

    /// Files left out of the batch, in input order.
    pub rejected: Vec<Rejection>,
}

// ============================================================================
// Ingestion
// ============================================================================

/// Decodes raw file bytes into RGBA pixels.
pub fn decode(bytes: &[u8]) -> Result<RgbaImage, Error> {
    image::load_from_memory(bytes)
        .map(|img| img.to_rgba8())
        .map_err(Error::Decode)
}

/// Ingests a batch of files, replacing the current collection.
///
/// An empty input is a no-op and leaves the previous batch in place.
/// Otherwise the collection is cleared first, every input is decoded, and
/// the successes are appended in input order, so the resulting positions are
/// deterministic regardless of how the host gathered the files.
///
/// Inputs without an `image/*` MIME type are recorded in the report and
/// skipped without aborting the batch. Decode failures follow `policy`.
pub fn ingest_batch(
    collection: &mut PhotoCollection,
    files: Vec<RawFile>,
    policy: DecodeFailurePolicy,
) -> IngestReport {
    if files.is_empty() {
        return IngestReport::default();
    }

    collection.clear();

    let mut report = IngestReport::default();
    for file in files {
        if !is_image_mime(&file.mime) {
            log::warn!("rejected {:?}: declared type {:?}", file.name, file.mime);
            report.rejected.push(Rejection {
                name: file.name,
                reason: RejectionReason::UnsupportedType(file.mime),
            });
            continue;
        }

        match decode(&file.bytes) {
            Ok(data) => {
                collection.append(Photo::new(data, file.name));
                report.loaded += 1;
            }
            Err(err) => {
                log::debug!("dropped {:?}: {err}", file.name);
                if policy == DecodeFailurePolicy::Report {
                    report.rejected.push(Rejection {
                        name: file.name,
                        reason: RejectionReason::DecodeFailed(err.to_string()),
                    });
                }
            }
        }
    }

    log::debug!(
        "ingested batch: {} loaded, {} rejected",
        report.loaded,
        report.rejected.len()
    );
    report
}
