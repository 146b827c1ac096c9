//! HTML Canvas rendering for WASM environments.
//!
//! This module provides [`CanvasComposer`], a wrapper around [`Composer`]
//! that ingests files from JavaScript byte arrays, renders previews directly
//! to an HTML canvas element, and hands back encoded JPEG bytes for the host
//! to turn into a download.
//!
//! # Feature Flag
//!
//! This module is only available with the `canvas` feature enabled:
//!
//! ```toml
//! [dependencies]
//! poster-composer = { version = "0.1", features = ["canvas"] }
//! ```
//!
//! # Example (JavaScript/TypeScript)
//!
//! ```javascript
//! import init, { CanvasComposer } from 'poster-composer';
//!
//! await init();
//!
//! const composer = new CanvasComposer();
//!
//! // One batch of files read from an <input type="file"> or a drop event.
//! const rejections = composer.ingestFiles(names, mimes, buffers);
//! rejections.forEach(msg => alert(msg));
//!
//! composer.selectColor('#00ff00');
//!
//! const canvas = document.getElementById('preview-canvas');
//! composer.renderPreviewToCanvas(0, canvas);
//!
//! // Download the full-resolution poster.
//! const bytes = composer.exportJpeg(0);
//! const name = composer.exportFilename(0);
//! ```

use wasm_bindgen::prelude::*;
use wasm_bindgen::Clamped;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData};

use crate::compose::{self, CanvasSpec};
use crate::composer::Composer;
use crate::ingest::RawFile;

// ============================================================================
// CanvasComposer
// ============================================================================

/// A wrapper around [`Composer`] for browser hosts.
///
/// This type is exposed to JavaScript via wasm-bindgen and provides a simple
/// API for batch upload, live preview, and JPEG download.
#[wasm_bindgen]
#[derive(Default)]
pub struct CanvasComposer {
    composer: Composer,
}

#[wasm_bindgen]
impl CanvasComposer {
    /// Creates a composer with an empty collection and the default red
    /// background.
    #[wasm_bindgen(constructor)]
    pub fn new() -> CanvasComposer {
        Self::default()
    }

    // ---- Ingestion ----

    /// Ingests one batch of files, replacing the current collection.
    ///
    /// # Arguments
    ///
    /// * `names` - Array of file name strings
    /// * `mimes` - Array of declared MIME type strings
    /// * `buffers` - Array of `Uint8Array` file contents
    ///
    /// All three arrays must have the same length. Returns an array of
    /// human-readable rejection messages for the host to surface.
    #[wasm_bindgen(js_name = "ingestFiles")]
    pub fn ingest_files(
        &mut self,
        names: js_sys::Array,
        mimes: js_sys::Array,
        buffers: js_sys::Array,
    ) -> Result<js_sys::Array, JsError> {
        if names.length() != mimes.length() || names.length() != buffers.length() {
            return Err(JsError::new("names, mimes, and buffers must have equal length"));
        }

        let mut files = Vec::with_capacity(names.length() as usize);
        for i in 0..names.length() {
            let name = names
                .get(i)
                .as_string()
                .ok_or_else(|| JsError::new(&format!("expected string name at index {}", i)))?;
            let mime = mimes
                .get(i)
                .as_string()
                .ok_or_else(|| JsError::new(&format!("expected string MIME type at index {}", i)))?;
            let buffer: js_sys::Uint8Array = buffers
                .get(i)
                .dyn_into()
                .map_err(|_| JsError::new(&format!("expected Uint8Array at index {}", i)))?;

            files.push(RawFile::new(name, mime, buffer.to_vec()));
        }

        let report = self.composer.ingest(files);

        let messages = js_sys::Array::new();
        for rejection in &report.rejected {
            messages.push(&JsValue::from_str(&rejection.to_string()));
        }
        Ok(messages)
    }

    // ---- Selection and collection state ----

    /// Selects the background color from a hex string or CSS color name.
    #[wasm_bindgen(js_name = "selectColor")]
    pub fn select_color(&mut self, color: &str) -> Result<(), JsError> {
        let parsed = color
            .parse()
            .map_err(|_| JsError::new(&format!("unrecognized color: {}", color)))?;
        self.composer.select_color(parsed);
        Ok(())
    }

    /// Returns the number of photos in the current batch.
    pub fn count(&self) -> u32 {
        self.composer.count() as u32
    }

    /// Removes the photo at the given position.
    ///
    /// Returns false without effect if the index is out of bounds.
    #[wasm_bindgen(js_name = "removeAt")]
    pub fn remove_at(&mut self, index: u32) -> bool {
        self.composer.remove_at(index as usize)
    }

    /// Clears the current batch.
    pub fn clear(&mut self) {
        self.composer.clear();
    }

    // ---- Rendering ----

    /// Renders the thumbnail preview for one photo into a canvas element.
    ///
    /// The canvas is resized to the thumbnail dimensions.
    #[wasm_bindgen(js_name = "renderPreviewToCanvas")]
    pub fn render_preview_to_canvas(
        &self,
        index: u32,
        canvas: &HtmlCanvasElement,
    ) -> Result<(), JsError> {
        let preview = self
            .composer
            .preview(index as usize)
            .ok_or_else(|| JsError::new("no photo at requested index"))?;

        let width = preview.width();
        let height = preview.height();
        canvas.set_width(width);
        canvas.set_height(height);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .map_err(|_| JsError::new("Failed to get 2d context"))?
            .ok_or_else(|| JsError::new("Canvas 2d context is null"))?
            .dyn_into()
            .map_err(|_| JsError::new("Failed to cast to CanvasRenderingContext2d"))?;

        let raw_pixels: Vec<u8> = preview.into_raw();
        let image_data =
            ImageData::new_with_u8_clamped_array_and_sh(Clamped(&raw_pixels), width, height)
                .map_err(|_| JsError::new("Failed to create ImageData"))?;

        ctx.put_image_data(&image_data, 0.0, 0.0)
            .map_err(|_| JsError::new("Failed to put image data"))?;

        Ok(())
    }

    // ---- Export ----

    /// Composes the photo at `index` at full A3 resolution and returns the
    /// encoded JPEG bytes.
    #[wasm_bindgen(js_name = "exportJpeg")]
    pub fn export_jpeg(&self, index: u32) -> Result<js_sys::Uint8Array, JsError> {
        let photo = self
            .composer
            .photos()
            .get(index as usize)
            .ok_or_else(|| JsError::new("no photo at requested index"))?;

        let canvas = compose::render(
            photo,
            CanvasSpec::A3_PORTRAIT_300DPI,
            self.composer.background(),
        );
        let bytes = compose::encode_jpeg(&canvas)
            .map_err(|e| JsError::new(&format!("Failed to encode JPEG: {}", e)))?;

        let array = js_sys::Uint8Array::new_with_length(bytes.len() as u32);
        array.copy_from(&bytes);
        Ok(array)
    }

    /// Returns the download filename for the photo at `index`.
    #[wasm_bindgen(js_name = "exportFilename")]
    pub fn export_filename(&self, index: u32) -> Option<String> {
        self.composer
            .photos()
            .get(index as usize)
            .map(|photo| crate::export::export_filename(&photo.name))
    }
}
