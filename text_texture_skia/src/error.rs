// Copyright 2026 the Text Texture Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

/// Error raised by [`SkiaPainter`](crate::SkiaPainter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// Name of the typeface in use.
    typeface: String,

    /// Description of the failure reported by the font or raster library.
    detail: String,
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Name of the typeface that was being rendered.
    pub fn typeface(&self) -> &str {
        &self.typeface
    }

    pub(crate) fn new(kind: ErrorKind, typeface: &str, detail: impl fmt::Display) -> Self {
        Self {
            kind,
            typeface: typeface.into(),
            detail: alloc::format!("{detail}"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.kind {
            ErrorKind::InvalidFont => "invalid font data",
            ErrorKind::PixelBuffer => "cannot draw into pixel buffer",
            ErrorKind::Outline => "cannot draw glyph outline",
        };
        write!(f, "{what} for typeface {:?}", self.typeface)?;
        if !self.detail.is_empty() {
            write!(f, ": {}", self.detail)?;
        }
        Ok(())
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The typeface's font data could not be parsed.
    InvalidFont,

    /// The pixel buffer could not be wrapped for drawing.
    PixelBuffer,

    /// A glyph outline could not be drawn.
    Outline,
}
