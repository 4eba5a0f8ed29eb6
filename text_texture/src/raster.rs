// Copyright 2026 the Text Texture Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout, rasterization and upload of text textures.

use core::fmt;

use crate::error::{BoxError, Error, ErrorKind};
use crate::{PixelBuffer, ResultCode, Rgba8, TextureDimensions};

/// Fill color of every text texture: opaque white.
///
/// Tinting is left to whatever samples the texture.
pub const TEXT_COLOR: Rgba8 = [0xFF; 4];

/// Horizontal placement of each line relative to its origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// The origin is the left edge of the line.
    #[default]
    Start,
    /// The origin is the horizontal center of the line.
    Center,
}

impl Alignment {
    /// Returns [`Alignment::Center`] if `center` is true, otherwise [`Alignment::Start`].
    pub fn from_center(center: bool) -> Self {
        if center { Self::Center } else { Self::Start }
    }
}

/// Vertical font metrics at a given size, relative to the baseline.
///
/// Distances above the baseline are negative, so `ascent` is normally negative
/// and `descent` positive.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FontMetrics {
    /// Distance from the baseline to the top of the tallest glyphs.
    pub ascent: f32,
    /// Distance from the baseline to the bottom of the lowest glyphs.
    pub descent: f32,
}

impl FontMetrics {
    /// Height of one line: `ceil(-ascent + descent)`.
    pub fn line_height(&self) -> u32 {
        ceil_to_u32(-self.ascent + self.descent)
    }
}

/// Text rendering state handed to every [`TextPainter`] call.
#[derive(Clone, Copy, Debug)]
pub struct TextPaint<'a, T> {
    /// Typeface to render with.
    pub typeface: &'a T,
    /// Font size in pixels.
    pub size: f32,
    /// Placement of each line relative to its origin.
    pub align: Alignment,
    /// Whether glyph edges are antialiased.
    pub antialias: bool,
    /// Fill color, not premultiplied.
    pub color: Rgba8,
}

impl<'a, T> TextPaint<'a, T> {
    /// Creates an antialiased white paint.
    pub fn new(typeface: &'a T, size: f32, align: Alignment) -> Self {
        Self {
            typeface,
            size,
            align,
            antialias: true,
            color: TEXT_COLOR,
        }
    }
}

/// Text measurement and rasterization primitives.
pub trait TextPainter {
    /// Handle identifying the typeface to render with.
    type Typeface;

    /// Error raised by the primitives.
    type Error: Into<BoxError>;

    /// Returns the vertical metrics of the paint's typeface at its size.
    fn font_metrics(
        &mut self,
        paint: &TextPaint<'_, Self::Typeface>,
    ) -> Result<FontMetrics, Self::Error>;

    /// Returns the advance width of `line`.
    fn measure_text(
        &mut self,
        paint: &TextPaint<'_, Self::Typeface>,
        line: &str,
    ) -> Result<f32, Self::Error>;

    /// Draws `line` into `buffer` with its baseline origin at `(x, y)`.
    ///
    /// `x` is interpreted according to the paint's [`Alignment`].
    fn draw_text(
        &mut self,
        buffer: &mut PixelBuffer,
        line: &str,
        x: f32,
        y: f32,
        paint: &TextPaint<'_, Self::Typeface>,
    ) -> Result<(), Self::Error>;
}

/// GPU texture upload primitive.
///
/// Implementations upload into whatever texture object is currently bound in
/// the graphics context they drive, and must be called on the thread that owns
/// that context.
pub trait TextureUploader {
    /// Error raised by the upload.
    type Error: Into<BoxError>;

    /// Specifies a 2D RGBA8888 texture image of the buffer's size at `mip_level`.
    fn upload_texture_2d(
        &mut self,
        buffer: &PixelBuffer,
        mip_level: u32,
    ) -> Result<(), Self::Error>;
}

/// Measured extent of a block of text.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutMetrics {
    /// Vertical font metrics.
    pub font: FontMetrics,
    /// Height of every line.
    pub line_height: u32,
    /// Width of the widest line, rounded up to whole pixels.
    pub width: u32,
    /// Sum of all line heights.
    pub height: u32,
    /// Number of lines.
    pub line_count: usize,
}

/// Renders text into power-of-two textures.
pub struct TextRasterizer<P, U> {
    painter: P,
    uploader: U,
}

impl<P, U> TextRasterizer<P, U>
where
    P: TextPainter,
    U: TextureUploader,
{
    /// Creates a rasterizer that draws with `painter` and uploads with `uploader`.
    pub fn new(painter: P, uploader: U) -> Self {
        Self { painter, uploader }
    }

    /// Measures `text` without drawing it.
    ///
    /// The text is split on `'\n'`. Trailing newlines add no lines, and an empty
    /// string is a single empty line.
    pub fn measure(
        &mut self,
        text: &str,
        typeface: &P::Typeface,
        size: f32,
        align: Alignment,
    ) -> Result<LayoutMetrics, Error> {
        let paint = TextPaint::new(typeface, size, align);
        self.layout(text, &paint)
    }

    /// Rasterizes `text` and uploads it as mip level 0 of the bound texture.
    ///
    /// Returns the unrounded content size packed into a [`ResultCode`], or
    /// [`ResultCode::EMPTY`] without drawing or uploading anything when the text
    /// covers no area.
    pub fn rasterize_and_upload(
        &mut self,
        text: &str,
        typeface: &P::Typeface,
        size: f32,
        align: Alignment,
    ) -> Result<ResultCode, Error> {
        let paint = TextPaint::new(typeface, size, align);
        let metrics = self.layout(text, &paint)?;

        log::trace!(
            "text {}x{} in {} lines",
            metrics.width,
            metrics.height,
            metrics.line_count
        );
        if metrics.width == 0 || metrics.height == 0 {
            return Ok(ResultCode::EMPTY);
        }
        // Checked before rounding, which maps sizes above `1 << 31` to zero.
        let code = ResultCode::new(metrics.width, metrics.height)
            .ok_or_else(|| Error::dimensions_overflow(metrics.width, metrics.height))?;
        let dimensions = TextureDimensions::for_content(metrics.width, metrics.height);

        let mut buffer = PixelBuffer::new(dimensions)?;

        let origin_x = match align {
            Alignment::Center => (metrics.width / 2) as f32,
            Alignment::Start => 0.0,
        };
        let mut origin_y = -metrics.font.ascent;
        for line in lines(text) {
            self.painter
                .draw_text(&mut buffer, line, origin_x, origin_y, &paint)
                .map_err(|err| Error::new(ErrorKind::Draw, err).with_dimensions(dimensions))?;
            origin_y += metrics.line_height as f32;
        }

        self.uploader
            .upload_texture_2d(&buffer, 0)
            .map_err(|err| Error::new(ErrorKind::Upload, err).with_dimensions(dimensions))?;

        Ok(code)
    }

    /// The text painter.
    pub fn painter(&self) -> &P {
        &self.painter
    }

    /// The text painter, mutably.
    pub fn painter_mut(&mut self) -> &mut P {
        &mut self.painter
    }

    /// The texture uploader.
    pub fn uploader(&self) -> &U {
        &self.uploader
    }

    /// The texture uploader, mutably.
    pub fn uploader_mut(&mut self) -> &mut U {
        &mut self.uploader
    }

    /// Consumes the rasterizer, returning its collaborators.
    pub fn into_parts(self) -> (P, U) {
        (self.painter, self.uploader)
    }

    fn layout(
        &mut self,
        text: &str,
        paint: &TextPaint<'_, P::Typeface>,
    ) -> Result<LayoutMetrics, Error> {
        let font = self
            .painter
            .font_metrics(paint)
            .map_err(|err| Error::new(ErrorKind::Metrics, err))?;
        let line_height = font.line_height();

        let mut metrics = LayoutMetrics {
            font,
            line_height,
            ..LayoutMetrics::default()
        };
        for line in lines(text) {
            let advance = self
                .painter
                .measure_text(paint, line)
                .map_err(|err| Error::new(ErrorKind::Measure, err))?;
            metrics.width = metrics.width.max(ceil_to_u32(advance));
            metrics.height = metrics.height.saturating_add(line_height);
            metrics.line_count += 1;
        }
        Ok(metrics)
    }
}

impl<P, U> fmt::Debug for TextRasterizer<P, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextRasterizer").finish_non_exhaustive()
    }
}

/// Splits text into lines on `'\n'`.
///
/// Trailing empty lines are dropped, but any text yields at least one line.
fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.trim_end_matches('\n').split('\n')
}

/// Rounds up to whole pixels; negative and NaN values become zero.
fn ceil_to_u32(value: f32) -> u32 {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "float to int casts saturate and map NaN to zero"
    )]
    let rounded = value.ceil() as u32;
    rounded
}
