// Copyright 2026 the Text Texture Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

mod fonts;
mod painter;

pub(crate) use fonts::{MockFonts, MockTypeface};
pub(crate) use painter::{DrawCall, MockPainter, MockUploader, Upload};
