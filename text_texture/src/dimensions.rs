// Copyright 2026 the Text Texture Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Texture sizes and the packed result code.

use core::fmt;

/// Largest content dimension that fits in one half of a [`ResultCode`].
pub const MAX_CONTENT_DIMENSION: u32 = 0xFFFF;

/// Returns the smallest power of two that is at least `value`.
///
/// Zero is returned unchanged, as are values that are already a power of two.
/// Values above `1 << 31` have no such power in `u32` and also map to zero.
///
/// ```
/// use text_texture::next_power_of_two;
///
/// assert_eq!(next_power_of_two(128), 128);
/// assert_eq!(next_power_of_two(129), 256);
/// assert_eq!(next_power_of_two(0), 0);
/// ```
pub fn next_power_of_two(value: u32) -> u32 {
    if value == 0 {
        return 0;
    }
    value.checked_next_power_of_two().unwrap_or(0)
}

/// The allocated size of a texture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TextureDimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl TextureDimensions {
    /// Creates new dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Rounds each content dimension up to the next power of two.
    pub fn for_content(width: u32, height: u32) -> Self {
        Self {
            width: next_power_of_two(width),
            height: next_power_of_two(height),
        }
    }

    /// Returns `true` if either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of pixels covered by these dimensions.
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Unrounded content size packed as `width | (height << 16)`.
///
/// A zero code means nothing was uploaded and the texture must not be sampled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct ResultCode(u32);

impl ResultCode {
    /// The code returned when no texture was produced.
    pub const EMPTY: Self = Self(0);

    /// Packs a content size.
    ///
    /// Returns `None` if either dimension exceeds [`MAX_CONTENT_DIMENSION`].
    pub fn new(width: u32, height: u32) -> Option<Self> {
        if width > MAX_CONTENT_DIMENSION || height > MAX_CONTENT_DIMENSION {
            return None;
        }
        Some(Self(width | (height << 16)))
    }

    /// Wraps a raw packed value.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Returns the raw packed value.
    pub const fn to_bits(self) -> u32 {
        self.0
    }

    /// Unrounded content width.
    pub const fn width(self) -> u32 {
        self.0 & 0xFFFF
    }

    /// Unrounded content height.
    pub const fn height(self) -> u32 {
        self.0 >> 16
    }

    /// Returns `true` if no texture was produced.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Power-of-two size of the texture the content was uploaded into.
    pub fn texture_size(self) -> TextureDimensions {
        TextureDimensions::for_content(self.width(), self.height())
    }

    /// Texture coordinates of the bottom-right corner of the visible content.
    ///
    /// The visible text occupies `(0, 0)..uv_extent()` of the uploaded texture.
    /// Returns `(0.0, 0.0)` for an empty code.
    pub fn uv_extent(self) -> (f32, f32) {
        let size = self.texture_size();
        if size.is_empty() {
            return (0.0, 0.0);
        }
        (
            self.width() as f32 / size.width as f32,
            self.height() as f32 / size.height as f32,
        )
    }
}

impl From<ResultCode> for u32 {
    fn from(code: ResultCode) -> Self {
        code.0
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width(), self.height())
    }
}
