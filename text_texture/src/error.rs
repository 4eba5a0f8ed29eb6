// Copyright 2026 the Text Texture Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::collections::TryReserveError;
use core::fmt;

use crate::TextureDimensions;

/// Boxed error produced by a collaborator.
pub type BoxError = Box<dyn core::error::Error + Send + Sync + 'static>;

/// Error raised while rasterizing or uploading a text texture.
///
/// Carries a non-exhaustive [`ErrorKind`] plus the failing collaborator's error,
/// available through [`source`](core::error::Error::source).
#[derive(Debug)]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// Texture or content size involved in the failure, when it was known.
    dimensions: Option<TextureDimensions>,

    /// The underlying failure.
    source: Option<BoxError>,
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Size involved in the failure, when it was known.
    ///
    /// This is the power-of-two texture size for allocation, draw and upload
    /// failures, and the unrounded content size for [`ErrorKind::DimensionsOverflow`].
    pub fn dimensions(&self) -> Option<TextureDimensions> {
        self.dimensions
    }

    pub(crate) fn new(kind: ErrorKind, source: impl Into<BoxError>) -> Self {
        Self {
            kind,
            dimensions: None,
            source: Some(source.into()),
        }
    }

    pub(crate) fn allocation(dimensions: TextureDimensions, source: TryReserveError) -> Self {
        Self {
            kind: ErrorKind::Allocation,
            dimensions: Some(dimensions),
            source: Some(Box::new(source)),
        }
    }

    pub(crate) fn dimensions_overflow(width: u32, height: u32) -> Self {
        Self {
            kind: ErrorKind::DimensionsOverflow,
            dimensions: Some(TextureDimensions::new(width, height)),
            source: None,
        }
    }

    pub(crate) fn with_dimensions(mut self, dimensions: TextureDimensions) -> Self {
        self.dimensions = Some(dimensions);
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::Metrics => f.write_str("failed to query font metrics")?,
            ErrorKind::Measure => f.write_str("failed to measure text")?,
            ErrorKind::Draw => f.write_str("failed to draw text")?,
            ErrorKind::Upload => f.write_str("failed to upload texture")?,
            ErrorKind::Allocation => f.write_str("failed to allocate pixel buffer")?,
            ErrorKind::DimensionsOverflow => {
                return match self.dimensions {
                    Some(size) => write!(
                        f,
                        "text content {}x{} does not fit in a result code",
                        size.width, size.height
                    ),
                    None => f.write_str("text content does not fit in a result code"),
                };
            }
        }
        if let Some(size) = self.dimensions {
            write!(f, " ({}x{} texture)", size.width, size.height)?;
        }
        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }
        Ok(())
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn core::error::Error + 'static))
    }
}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The font metrics primitive failed.
    Metrics,

    /// The text measurement primitive failed.
    Measure,

    /// The rasterization primitive failed.
    Draw,

    /// The GPU texture upload primitive failed.
    Upload,

    /// The pixel buffer could not be allocated.
    Allocation,

    /// The measured content is too large to be packed into a result code.
    DimensionsOverflow,
}
