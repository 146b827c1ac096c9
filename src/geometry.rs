//! Fit-and-center placement of a source image inside a target canvas.

use crate::photo::SizePx;

// ============================================================================
// Placement
// ============================================================================

/// The computed placement of a scaled source image within a target canvas.
///
/// Produced by [`fit_centered`]. `width` and `height` are the scaled source
/// dimensions in whole pixels, and `(x, y)` is the top-left corner at which
/// the scaled image should be drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// The uniform scale factor applied to the source.
    pub scale: f64,

    /// Horizontal offset of the scaled image within the target.
    pub x: i64,

    /// Vertical offset of the scaled image within the target.
    pub y: i64,

    /// Width of the scaled image in pixels.
    pub width: u32,

    /// Height of the scaled image in pixels.
    pub height: u32,
}

// ============================================================================
// fit_centered
// ============================================================================

/// Computes the uniform scale-to-fit placement of `source` within `target`.
///
/// The scale is `min(target.width / source.width, target.height /
/// source.height)`, so the aspect ratio is preserved and the scaled image
/// never exceeds either target dimension. The image is centered, leaving
/// symmetric margins on the non-binding axis.
///
/// Scaled dimensions are rounded to whole pixels, clamped to the target so
/// rounding can never overshoot, and kept at a minimum of one pixel so
/// extreme aspect ratios still draw something.
///
/// Source and target dimensions must be positive. Zero-sized inputs are a
/// caller contract violation; the ingestion pipeline never produces an empty
/// photo, and both canvas presets are fixed.
///
/// # Example
///
/// ```
/// use poster_composer::{fit_centered, SizePx};
///
/// let placement = fit_centered(SizePx::new(400, 300), SizePx::new(200, 200));
/// assert_eq!(placement.scale, 0.5);
/// assert_eq!((placement.width, placement.height), (200, 150));
/// assert_eq!((placement.x, placement.y), (0, 25));
/// ```
pub fn fit_centered(source: SizePx, target: SizePx) -> Placement {
    debug_assert!(
        source.width > 0 && source.height > 0,
        "source dimensions must be positive"
    );
    debug_assert!(
        target.width > 0 && target.height > 0,
        "target dimensions must be positive"
    );

    let scale = f64::min(
        target.width as f64 / source.width as f64,
        target.height as f64 / source.height as f64,
    );

    let width = ((source.width as f64 * scale).round() as u32).clamp(1, target.width);
    let height = ((source.height as f64 * scale).round() as u32).clamp(1, target.height);

    Placement {
        scale,
        x: ((target.width - width) / 2) as i64,
        y: ((target.height - height) / 2) as i64,
        width,
        height,
    }
}
