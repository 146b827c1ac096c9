//! Composition rendering: photo over a solid background, plus JPEG encoding.
//!
//! Every render allocates a fresh output buffer sized to the requested
//! [`CanvasSpec`], fills it with the background color, and draws the photo
//! scaled and centered on top. There is no shared drawing surface, so
//! renders can never leak pixels into one another.

use image::codecs::jpeg::JpegEncoder;
use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbaImage};

use crate::color::BackgroundColor;
use crate::error::Error;
use crate::geometry::fit_centered;
use crate::photo::{Photo, SizePx};

/// Fixed quality for JPEG output. Not user-configurable.
const JPEG_QUALITY: u8 = 90;

/// Resampling filter for scaling photos onto the canvas.
///
/// Bilinear matches the smoothing a browser canvas applies when drawing a
/// scaled image.
const RESIZE_FILTER: FilterType = FilterType::Triangle;

// ============================================================================
// CanvasSpec
// ============================================================================

/// Target dimensions for one render call.
///
/// Two presets exist: [`THUMBNAIL`](Self::THUMBNAIL) for preview grids and
/// [`A3_PORTRAIT_300DPI`](Self::A3_PORTRAIT_300DPI) for print export. A spec
/// is chosen per call and never stored as state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSpec {
    pub width: u32,
    pub height: u32,
}

impl CanvasSpec {
    /// Preview thumbnail canvas.
    pub const THUMBNAIL: Self = Self {
        width: 200,
        height: 200,
    };

    /// A3 portrait at 300 DPI, the print-ready export size.
    pub const A3_PORTRAIT_300DPI: Self = Self {
        width: 3508,
        height: 4961,
    };

    /// Creates a spec with the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns the spec as a [`SizePx`].
    pub fn size(&self) -> SizePx {
        SizePx::new(self.width, self.height)
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Composes a photo onto a fresh canvas of the given spec.
///
/// The canvas is filled edge to edge with `background` at full opacity, then
/// the photo is drawn scaled and centered per [`fit_centered`]. Photos with
/// an alpha channel are composited over the background. Margins left where
/// the aspect ratios differ stay flat background color, producing the poster
/// border effect.
///
/// Neither the photo nor any selection state is modified.
///
/// # Example
///
/// ```
/// use image::{Rgba, RgbaImage};
/// use poster_composer::{render, BackgroundColor, CanvasSpec, Photo};
///
/// let photo = Photo::new(
///     RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 255])),
///     "white.png",
/// );
/// let canvas = render(&photo, CanvasSpec::new(8, 8), BackgroundColor::default());
/// assert_eq!((canvas.width(), canvas.height()), (8, 8));
/// ```
pub fn render(photo: &Photo, spec: CanvasSpec, background: BackgroundColor) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(spec.width, spec.height, background.to_rgba());

    let placement = fit_centered(photo.dimensions(), spec.size());
    let scaled = imageops::resize(&photo.data, placement.width, placement.height, RESIZE_FILTER);
    imageops::overlay(&mut canvas, &scaled, placement.x, placement.y);

    canvas
}

/// Encodes a composed canvas as JPEG at the fixed output quality.
///
/// JPEG carries no alpha channel. The canvas is already fully opaque, so the
/// conversion to RGB only drops the constant alpha plane.
pub fn encode_jpeg(canvas: &RgbaImage) -> Result<Vec<u8>, Error> {
    let rgb = DynamicImage::ImageRgba8(canvas.clone()).to_rgb8();

    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY)
        .encode_image(&rgb)
        .map_err(Error::Encode)?;

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn solid_photo(width: u32, height: u32, rgba: [u8; 4]) -> Photo {
        Photo::new(RgbaImage::from_pixel(width, height, Rgba(rgba)), "test.png")
    }

    #[test]
    fn canvas_matches_spec_dimensions() {
        let photo = solid_photo(4, 4, [255, 255, 255, 255]);
        let canvas = render(&photo, CanvasSpec::new(10, 20), BackgroundColor::default());
        assert_eq!((canvas.width(), canvas.height()), (10, 20));
    }

    #[test]
    fn margins_are_flat_background() {
        // A 4x2 photo in an 8x8 canvas occupies the middle rows only.
        let photo = solid_photo(4, 2, [255, 255, 255, 255]);
        let green: BackgroundColor = "#00ff00".parse().unwrap();
        let canvas = render(&photo, CanvasSpec::new(8, 8), green);

        // Top and bottom margins.
        assert_eq!(canvas.get_pixel(0, 0).0, [0, 255, 0, 255]);
        assert_eq!(canvas.get_pixel(7, 0).0, [0, 255, 0, 255]);
        assert_eq!(canvas.get_pixel(0, 7).0, [0, 255, 0, 255]);
        assert_eq!(canvas.get_pixel(7, 7).0, [0, 255, 0, 255]);

        // Center belongs to the photo.
        assert_eq!(canvas.get_pixel(4, 4).0, [255, 255, 255, 255]);
    }

    #[test]
    fn photo_is_centered() {
        let photo = solid_photo(2, 2, [0, 0, 255, 255]);
        let red = BackgroundColor::default();
        let canvas = render(&photo, CanvasSpec::new(8, 4), red);

        // Scaled to 4x4, centered horizontally at x=2..6.
        assert_eq!(canvas.get_pixel(1, 2).0, [255, 0, 0, 255]);
        assert_eq!(canvas.get_pixel(2, 2).0, [0, 0, 255, 255]);
        assert_eq!(canvas.get_pixel(5, 2).0, [0, 0, 255, 255]);
        assert_eq!(canvas.get_pixel(6, 2).0, [255, 0, 0, 255]);
    }

    #[test]
    fn transparent_pixels_show_background() {
        let photo = solid_photo(4, 4, [255, 255, 255, 0]);
        let green: BackgroundColor = "#00ff00".parse().unwrap();
        let canvas = render(&photo, CanvasSpec::new(4, 4), green);

        assert_eq!(canvas.get_pixel(2, 2).0, [0, 255, 0, 255]);
    }

    #[test]
    fn output_is_fully_opaque() {
        let photo = solid_photo(4, 4, [10, 20, 30, 128]);
        let canvas = render(&photo, CanvasSpec::new(6, 6), BackgroundColor::default());

        assert!(canvas.pixels().all(|p| p.0[3] == 255));
    }

    #[test]
    fn encode_jpeg_produces_decodable_output() {
        let photo = solid_photo(4, 4, [255, 255, 255, 255]);
        let canvas = render(&photo, CanvasSpec::new(16, 16), BackgroundColor::default());

        let bytes = encode_jpeg(&canvas).unwrap();
        // JPEG start-of-image marker.
        assert_eq!(&bytes[..2], &[0xff, 0xd8]);

        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (16, 16));
    }
}
