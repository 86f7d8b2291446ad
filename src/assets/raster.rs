use std::{borrow::Cow, path::Path, sync::Arc};

use anyhow::Context;

use crate::foundation::core::Canvas;
use crate::foundation::error::{InkError, InkResult};

/// Premultiplied RGBA8 image, row-major, tightly packed.
///
/// Pixel storage is shared: cloning a raster is cheap and never copies pixels, which is what
/// lets erase layers freeze a snapshot without duplicating the background.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    pub width: u32,
    pub height: u32,
    pub rgba8_premul: Arc<Vec<u8>>,
}

impl Raster {
    pub fn new(width: u32, height: u32, rgba8_premul: Vec<u8>) -> InkResult<Self> {
        let expected = (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4);
        if rgba8_premul.len() != expected {
            return Err(InkError::validation(format!(
                "raster {width}x{height} expects {expected} bytes, got {}",
                rgba8_premul.len()
            )));
        }
        Ok(Self {
            width,
            height,
            rgba8_premul: Arc::new(rgba8_premul),
        })
    }

    pub fn transparent(canvas: Canvas) -> Self {
        Self::filled(canvas, [0, 0, 0, 0])
    }

    /// Uniform raster of an already premultiplied color.
    pub fn filled(canvas: Canvas, premul: [u8; 4]) -> Self {
        let mut data = Vec::with_capacity(canvas.pixel_count() * 4);
        for _ in 0..canvas.pixel_count() {
            data.extend_from_slice(&premul);
        }
        Self {
            width: canvas.width,
            height: canvas.height,
            rgba8_premul: Arc::new(data),
        }
    }

    /// Decode encoded image bytes (PNG, JPEG, ...).
    pub fn decode(bytes: &[u8]) -> InkResult<Self> {
        crate::assets::decode::decode_image(bytes)
    }

    /// Read and decode an encoded image file (PNG, JPEG, ...).
    pub fn open(path: impl AsRef<Path>) -> InkResult<Self> {
        let path = path.as_ref();
        let bytes =
            std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
        Self::decode(&bytes)
    }

    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    pub fn data(&self) -> &[u8] {
        self.rgba8_premul.as_slice()
    }

    /// Premultiplied pixel at `(x, y)`, or `None` outside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = &self.rgba8_premul[i..i + 4];
        Some([px[0], px[1], px[2], px[3]])
    }

    pub fn shares_pixels_with(&self, other: &Raster) -> bool {
        Arc::ptr_eq(&self.rgba8_premul, &other.rgba8_premul)
    }

    /// Stretch to `canvas`, borrowing when the size already matches.
    pub fn fit_to(&self, canvas: Canvas) -> InkResult<Cow<'_, Raster>> {
        if self.canvas() == canvas {
            return Ok(Cow::Borrowed(self));
        }
        let src = image::RgbaImage::from_raw(self.width, self.height, self.data().to_vec())
            .ok_or_else(|| InkError::render("raster byte length mismatch"))?;
        let resized = image::imageops::resize(
            &src,
            canvas.width,
            canvas.height,
            image::imageops::FilterType::Triangle,
        );
        Ok(Cow::Owned(Raster::new(
            canvas.width,
            canvas.height,
            resized.into_raw(),
        )?))
    }

    /// Un-premultiplied copy of the pixels, suitable for encoders.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut out = self.data().to_vec();
        for px in out.chunks_exact_mut(4) {
            let a = u32::from(px[3]);
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u32::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> InkResult<()> {
        let path = path.as_ref();
        image::save_buffer_with_format(
            path,
            &self.to_straight_rgba8(),
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/raster.rs"]
mod tests;
