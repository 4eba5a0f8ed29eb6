// Copyright 2026 the Text Texture Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph measurement with Skrifa and rasterization with Tiny-Skia.

use skrifa::instance::{LocationRef, Size};
use skrifa::outline::{DrawSettings, OutlinePen};
use skrifa::raw::FontRef;
use skrifa::{GlyphId, MetadataProvider, OutlineGlyph};
use text_texture::{Alignment, FontMetrics, PixelBuffer, TextPaint, TextPainter};
use tiny_skia::{FillRule, Paint, PathBuilder, PixmapMut, Stroke, Transform};

use crate::error::{Error, ErrorKind};
use crate::library::SkiaTypeface;

/// Stroke width of synthetic bold, as a fraction of the font size.
const EMBOLDEN_STRENGTH: f32 = 1.0 / 24.0;

/// A [`TextPainter`] for [`SkiaTypeface`]s.
///
/// Typefaces without font data have zero metrics and draw nothing, so text
/// set in them produces an empty texture.
#[derive(Debug, Default)]
pub struct SkiaPainter {
    _private: (),
}

impl SkiaPainter {
    /// Creates a new painter.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TextPainter for SkiaPainter {
    type Typeface = SkiaTypeface;
    type Error = Error;

    fn font_metrics(&mut self, paint: &TextPaint<'_, SkiaTypeface>) -> Result<FontMetrics, Error> {
        let Some(font) = font_ref(paint.typeface)? else {
            return Ok(FontMetrics::default());
        };
        let metrics = font.metrics(Size::new(paint.size), LocationRef::default());
        // Skrifa measures upwards from the baseline.
        Ok(FontMetrics {
            ascent: -metrics.ascent,
            descent: -metrics.descent,
        })
    }

    fn measure_text(
        &mut self,
        paint: &TextPaint<'_, SkiaTypeface>,
        line: &str,
    ) -> Result<f32, Error> {
        let Some(font) = font_ref(paint.typeface)? else {
            return Ok(0.0);
        };
        let size = Size::new(paint.size);
        let charmap = font.charmap();
        let glyph_metrics = font.glyph_metrics(size, LocationRef::default());
        let advance: f32 = line
            .chars()
            .map(|ch| {
                let glyph_id = charmap.map(ch).unwrap_or(GlyphId::NOTDEF);
                glyph_metrics.advance_width(glyph_id).unwrap_or_default()
            })
            .sum();
        if line.is_empty() {
            return Ok(advance);
        }
        let ascent = font.metrics(size, LocationRef::default()).ascent;
        Ok(advance + synthetic_overhang(paint.typeface, paint.size, ascent))
    }

    fn draw_text(
        &mut self,
        buffer: &mut PixelBuffer,
        line: &str,
        x: f32,
        y: f32,
        paint: &TextPaint<'_, SkiaTypeface>,
    ) -> Result<(), Error> {
        let typeface = paint.typeface;
        let Some(font) = font_ref(typeface)? else {
            return Ok(());
        };
        let mut x = x;
        if paint.align == Alignment::Center {
            x -= self.measure_text(paint, line)? / 2.0;
        }
        // Keeps the left half of a synthetic bold stroke inside the measured extent.
        x += stroke_width(typeface, paint.size) / 2.0;

        let (width, height) = (buffer.width(), buffer.height());
        let pixmap = PixmapMut::from_bytes(buffer.as_bytes_mut(), width, height).ok_or_else(
            || Error::new(ErrorKind::PixelBuffer, typeface.name(), format!("{width}x{height}")),
        )?;
        let mut pen = GlyphPen::new(pixmap, paint);
        pen.skew = typeface.skew().map_or(0.0, slant);

        let size = Size::new(paint.size);
        let charmap = font.charmap();
        let glyph_metrics = font.glyph_metrics(size, LocationRef::default());
        let outlines = font.outline_glyphs();
        for ch in line.chars() {
            let glyph_id = charmap.map(ch).unwrap_or(GlyphId::NOTDEF);
            if let Some(outline) = outlines.get(glyph_id) {
                pen.set_origin(x, y);
                pen.draw_glyph(&outline, size)
                    .map_err(|err| Error::new(ErrorKind::Outline, typeface.name(), err))?;
            }
            x += glyph_metrics.advance_width(glyph_id).unwrap_or_default();
        }
        Ok(())
    }
}

/// Stroke width of synthetic bold, or zero.
fn stroke_width(typeface: &SkiaTypeface, size: f32) -> f32 {
    if typeface.embolden() {
        size * EMBOLDEN_STRENGTH
    } else {
        0.0
    }
}

/// Horizontal shift per unit of height for a skew in degrees.
fn slant(degrees: f32) -> f32 {
    degrees.to_radians().tan()
}

/// Extra width that synthetic styles paint past the advance of a line.
///
/// The bold stroke adds its full width, and the italic slant shifts the top
/// of the tallest glyphs right by `ascent * tan(skew)`. `ascent` is measured
/// upwards from the baseline.
fn synthetic_overhang(typeface: &SkiaTypeface, size: f32, ascent: f32) -> f32 {
    let skew = typeface
        .skew()
        .map_or(0.0, |degrees| ascent.max(0.0) * slant(degrees));
    stroke_width(typeface, size) + skew
}

fn font_ref(typeface: &SkiaTypeface) -> Result<Option<FontRef<'_>>, Error> {
    let Some(source) = typeface.font() else {
        return Ok(None);
    };
    FontRef::from_index(source.data.as_ref(), source.index)
        .map(Some)
        .map_err(|err| Error::new(ErrorKind::InvalidFont, typeface.name(), err))
}

/// Accumulates glyph outlines into a path and paints it into a pixmap.
struct GlyphPen<'a> {
    pixmap: PixmapMut<'a>,
    x: f32,
    y: f32,
    /// Horizontal shift per unit of height, for synthetic italics.
    skew: f32,
    stroke: Option<Stroke>,
    paint: Paint<'static>,
    open_path: PathBuilder,
}

impl<'a> GlyphPen<'a> {
    fn new(pixmap: PixmapMut<'a>, text_paint: &TextPaint<'_, SkiaTypeface>) -> Self {
        let [r, g, b, a] = text_paint.color;
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = text_paint.antialias;
        let stroke = text_paint.typeface.embolden().then(|| Stroke {
            width: stroke_width(text_paint.typeface, text_paint.size),
            ..Stroke::default()
        });
        Self {
            pixmap,
            x: 0.0,
            y: 0.0,
            skew: 0.0,
            stroke,
            paint,
            open_path: PathBuilder::new(),
        }
    }

    fn set_origin(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    fn draw_glyph(
        &mut self,
        glyph: &OutlineGlyph<'_>,
        size: Size,
    ) -> Result<(), skrifa::outline::DrawError> {
        let settings = DrawSettings::unhinted(size, LocationRef::default());
        glyph.draw(settings, &mut *self)?;
        self.fill();
        Ok(())
    }

    /// Paints and clears the accumulated path.
    fn fill(&mut self) {
        let builder = core::mem::replace(&mut self.open_path, PathBuilder::new());
        let Some(path) = builder.finish() else {
            return;
        };
        self.pixmap.fill_path(
            &path,
            &self.paint,
            FillRule::Winding,
            Transform::identity(),
            None,
        );
        if let Some(stroke) = &self.stroke {
            self.pixmap
                .stroke_path(&path, &self.paint, stroke, Transform::identity(), None);
        }
    }

    fn point(&self, x: f32, y: f32) -> (f32, f32) {
        (self.x + x + y * self.skew, self.y - y)
    }
}

impl OutlinePen for GlyphPen<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.point(x, y);
        self.open_path.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.point(x, y);
        self.open_path.line_to(x, y);
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        let (cx0, cy0) = self.point(cx0, cy0);
        let (x, y) = self.point(x, y);
        self.open_path.quad_to(cx0, cy0, x, y);
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        let (cx0, cy0) = self.point(cx0, cy0);
        let (cx1, cy1) = self.point(cx1, cy1);
        let (x, y) = self.point(x, y);
        self.open_path.cubic_to(cx0, cy0, cx1, cy1, x, y);
    }

    fn close(&mut self) {
        self.open_path.close();
    }
}
