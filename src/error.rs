//! Unified error type for composition, encoding, and export failures.

use std::io;

/// Errors produced while composing, encoding, or saving posters.
///
/// Per-file ingestion problems (a non-image MIME type, bytes that fail to
/// decode) are additionally reported through
/// [`IngestReport`](crate::IngestReport) so one bad input never aborts the
/// rest of a batch.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A color string could not be parsed as hex or as a CSS color name.
    #[error("unrecognized color {0:?}")]
    InvalidColor(String),

    /// Image bytes could not be decoded.
    #[error("failed to decode image data: {0}")]
    Decode(image::ImageError),

    /// The composed canvas could not be encoded as JPEG.
    #[error("failed to encode JPEG output: {0}")]
    Encode(image::ImageError),

    /// An export sink failed to persist the encoded output.
    #[error("failed to save {filename:?}: {source}")]
    Save {
        filename: String,
        source: io::Error,
    },
}
