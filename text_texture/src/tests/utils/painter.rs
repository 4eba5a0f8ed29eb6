// Copyright 2026 the Text Texture Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendering collaborators that record how they were used.

use core::fmt;

use crate::{
    Alignment, FontMetrics, PixelBuffer, Rgba8, TextPaint, TextPainter, TextureDimensions,
    TextureUploader,
};

use super::MockTypeface;

/// Failure raised by the mock collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MockFailure(pub(crate) &'static str);

impl fmt::Display for MockFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl core::error::Error for MockFailure {}

/// One recorded [`TextPainter::draw_text`] call.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DrawCall {
    pub(crate) line: String,
    pub(crate) x: f32,
    pub(crate) y: f32,
    pub(crate) align: Alignment,
    pub(crate) color: Rgba8,
    pub(crate) antialias: bool,
    pub(crate) buffer: TextureDimensions,
}

/// Painter with fixed metrics where every `char` advances by the same amount.
///
/// Drawing a line marks the pixel at its origin with the paint color so the
/// uploaded buffer can be inspected.
#[derive(Debug)]
pub(crate) struct MockPainter {
    metrics: FontMetrics,
    advance: f32,
    fail_metrics: bool,
    fail_draw_at: Option<usize>,
    pub(crate) measured: Vec<String>,
    pub(crate) draws: Vec<DrawCall>,
    pub(crate) typefaces: Vec<MockTypeface>,
}

impl MockPainter {
    /// `ascent` is negative, above the baseline.
    pub(crate) fn new(ascent: f32, descent: f32, advance: f32) -> Self {
        Self {
            metrics: FontMetrics { ascent, descent },
            advance,
            fail_metrics: false,
            fail_draw_at: None,
            measured: Vec::new(),
            draws: Vec::new(),
            typefaces: Vec::new(),
        }
    }

    /// A font with a 24 pixel line height and 10 pixel advances.
    pub(crate) fn standard() -> Self {
        Self::new(-18.5, 5.25, 10.0)
    }

    pub(crate) fn failing_metrics(mut self) -> Self {
        self.fail_metrics = true;
        self
    }

    /// Fails the `index`th draw call.
    pub(crate) fn failing_draw_at(mut self, index: usize) -> Self {
        self.fail_draw_at = Some(index);
        self
    }
}

impl TextPainter for MockPainter {
    type Typeface = MockTypeface;
    type Error = MockFailure;

    fn font_metrics(
        &mut self,
        paint: &TextPaint<'_, MockTypeface>,
    ) -> Result<FontMetrics, MockFailure> {
        self.typefaces.push(paint.typeface.clone());
        if self.fail_metrics {
            return Err(MockFailure("no metrics"));
        }
        Ok(self.metrics)
    }

    fn measure_text(
        &mut self,
        _paint: &TextPaint<'_, MockTypeface>,
        line: &str,
    ) -> Result<f32, MockFailure> {
        self.measured.push(line.to_string());
        Ok(line.chars().count() as f32 * self.advance)
    }

    fn draw_text(
        &mut self,
        buffer: &mut PixelBuffer,
        line: &str,
        x: f32,
        y: f32,
        paint: &TextPaint<'_, MockTypeface>,
    ) -> Result<(), MockFailure> {
        if self.fail_draw_at == Some(self.draws.len()) {
            return Err(MockFailure("draw failed"));
        }
        self.draws.push(DrawCall {
            line: line.to_string(),
            x,
            y,
            align: paint.align,
            color: paint.color,
            antialias: paint.antialias,
            buffer: buffer.dimensions(),
        });
        let width = buffer.width() as usize;
        let index = y as usize * width + x as usize;
        if let Some(pixel) = buffer.pixels_mut().get_mut(index) {
            *pixel = paint.color;
        }
        Ok(())
    }
}

/// One recorded upload.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Upload {
    pub(crate) dimensions: TextureDimensions,
    pub(crate) mip_level: u32,
    pub(crate) pixels: PixelBuffer,
}

/// Uploader that keeps a copy of every uploaded buffer.
#[derive(Debug, Default)]
pub(crate) struct MockUploader {
    fail: bool,
    pub(crate) uploads: Vec<Upload>,
}

impl MockUploader {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            uploads: Vec::new(),
        }
    }
}

impl TextureUploader for MockUploader {
    type Error = MockFailure;

    fn upload_texture_2d(
        &mut self,
        buffer: &PixelBuffer,
        mip_level: u32,
    ) -> Result<(), MockFailure> {
        if self.fail {
            return Err(MockFailure("context lost"));
        }
        self.uploads.push(Upload {
            dimensions: buffer.dimensions(),
            mip_level,
            pixels: buffer.clone(),
        });
        Ok(())
    }
}
