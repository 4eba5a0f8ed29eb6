// Copyright 2026 the Text Texture Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transient RGBA pixel storage.

use alloc::vec::Vec;
use core::fmt;

use crate::TextureDimensions;
use crate::error::Error;

/// A single RGBA8888 pixel.
pub type Rgba8 = [u8; 4];

/// An RGBA8888 buffer that text is rasterized into before upload.
///
/// Rows are stored top to bottom without padding. The buffer lives only for the
/// duration of one rasterize-and-upload call.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    dimensions: TextureDimensions,
    pixels: Vec<Rgba8>,
}

impl PixelBuffer {
    /// Allocates a fully transparent buffer.
    ///
    /// Allocation failure is reported instead of aborting.
    pub fn new(dimensions: TextureDimensions) -> Result<Self, Error> {
        let len = dimensions.area();
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(len)
            .map_err(|err| Error::allocation(dimensions, err))?;
        pixels.resize(len, [0; 4]);
        Ok(Self { dimensions, pixels })
    }

    /// Allocated size of the buffer.
    pub fn dimensions(&self) -> TextureDimensions {
        self.dimensions
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.dimensions.height
    }

    /// Number of bytes in one row.
    pub fn stride(&self) -> usize {
        self.dimensions.width as usize * 4
    }

    /// Returns the pixel at `(x, y)`, or `None` if it is out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.dimensions.width || y >= self.dimensions.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.dimensions.width as usize + x as usize)
            .copied()
    }

    /// Pixels in row-major order.
    pub fn pixels(&self) -> &[Rgba8] {
        &self.pixels
    }

    /// Mutable pixels in row-major order.
    pub fn pixels_mut(&mut self) -> &mut [Rgba8] {
        &mut self.pixels
    }

    /// Raw bytes, four per pixel in R, G, B, A order.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Mutable raw bytes, four per pixel in R, G, B, A order.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        bytemuck::cast_slice_mut(&mut self.pixels)
    }

    /// Returns `true` if every pixel is fully transparent black.
    pub fn is_clear(&self) -> bool {
        self.pixels.iter().all(|pixel| *pixel == [0; 4])
    }
}

impl fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("dimensions", &self.dimensions)
            .field("pixels", &format_args!("[{} pixels]", self.pixels.len()))
            .finish()
    }
}
