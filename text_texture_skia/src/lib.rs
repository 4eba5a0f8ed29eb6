// Copyright 2026 the Text Texture Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text Texture collaborators built on real fonts.
//!
//! - [`FontLibrary`] resolves the built-in families through a Fontique
//!   [`Collection`](fontique::Collection), optionally backed by system fonts,
//!   and loads bundled font files relative to an assets directory. It
//!   implements both [`FontAssets`](text_texture::FontAssets) and
//!   [`TypefaceFactory`](text_texture::TypefaceFactory).
//! - [`SkiaPainter`] measures text with Skrifa and fills glyph outlines into
//!   the pixel buffer with Tiny-Skia.
//!
//! Styles a font family has no face for are synthesized: bold by stroking the
//! outline, italic by slanting it.
//!
//! ```no_run
//! use text_texture::{TextTextureContext, TextureUploader, TypefaceCache, PixelBuffer};
//! use text_texture_skia::{FontLibrary, LibraryOptions, SkiaPainter};
//!
//! struct Discard;
//!
//! impl TextureUploader for Discard {
//!     type Error = core::convert::Infallible;
//!
//!     fn upload_texture_2d(&mut self, _: &PixelBuffer, _: u32) -> Result<(), Self::Error> {
//!         Ok(())
//!     }
//! }
//!
//! let library = FontLibrary::new(LibraryOptions::default());
//! let cache = TypefaceCache::new();
//! let mut cx =
//!     TextTextureContext::from_parts(&library, &library, &cache, SkiaPainter::new(), Discard);
//! let code = cx.create_sys_txt_texture("Ready", "SERIF.BOLD", 24.0, true).unwrap();
//! println!("{code}");
//! ```

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

mod error;
mod library;
mod painter;

pub use error::{Error, ErrorKind};
pub use library::{FontLibrary, LibraryOptions, SkiaTypeface};
pub use painter::SkiaPainter;
