// Copyright 2026 the Text Texture Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text Texture renders strings into power-of-two RGBA textures.
//!
//! The pipeline has two halves:
//!
//! - [`TypefaceResolver`] turns a font identifier into a typeface handle. An
//!   identifier is either the path of a bundled font file or a symbolic
//!   `"<FAMILY>.<STYLE>"` token such as `"SERIF.BOLD_ITALIC"`. Resolved handles
//!   are memoized in a [`TypefaceCache`] owned by the caller.
//! - [`TextRasterizer`] measures the text, rounds the bounding box up to
//!   power-of-two dimensions, draws each line into a transparent
//!   [`PixelBuffer`] and hands the buffer to a [`TextureUploader`].
//!
//! Glyph rendering and texture upload are provided by the caller through the
//! [`TypefaceFactory`], [`FontAssets`], [`TextPainter`] and [`TextureUploader`]
//! traits. [`TextTextureContext`] wires everything together:
//!
//! ```ignore
//! let cache = TypefaceCache::new();
//! let mut cx = TextTextureContext::from_parts(factory, assets, &cache, painter, uploader);
//! let code = cx.create_sys_txt_texture("Hi\nWorld", "SANS_SERIF.BOLD", 20.0, false)?;
//! let (u, v) = code.uv_extent();
//! ```
//!
//! The returned [`ResultCode`] packs the unrounded content size, which callers
//! use to find the part of the texture that holds text.

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

mod cache;
mod context;
mod dimensions;
mod error;
mod pixels;
mod raster;
mod resolve;
mod typeface;

#[cfg(test)]
mod tests;

pub use cache::TypefaceCache;
pub use context::TextTextureContext;
pub use dimensions::{MAX_CONTENT_DIMENSION, ResultCode, TextureDimensions, next_power_of_two};
pub use error::{BoxError, Error, ErrorKind};
pub use pixels::{PixelBuffer, Rgba8};
pub use raster::{
    Alignment, FontMetrics, LayoutMetrics, TEXT_COLOR, TextPaint, TextPainter, TextRasterizer,
    TextureUploader,
};
pub use resolve::{FontAssets, ResolverOptions, TypefaceFactory, TypefaceResolver};
pub use typeface::{Family, Style, SymbolicTypeface};
