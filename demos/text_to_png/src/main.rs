// Copyright 2026 the Text Texture Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders a text texture and writes it to a PNG file.
//!
//! ```text
//! text_to_png [TEXT] [FONT_IDENTIFIER] [SIZE] [OUTPUT]
//! ```
//!
//! `\n` in the text argument starts a new line. Font identifiers ending in
//! `.ttf` are loaded relative to the current directory; anything else is read
//! as a symbolic `FAMILY.STYLE` token.

use std::path::PathBuf;

use text_texture::{BoxError, PixelBuffer, TextTextureContext, TextureUploader, TypefaceCache};
use text_texture_skia::{FontLibrary, LibraryOptions, SkiaPainter};
use tiny_skia::{IntSize, Pixmap};

/// Saves each uploaded mip level as a PNG.
struct PngUploader {
    output: PathBuf,
}

impl TextureUploader for PngUploader {
    type Error = BoxError;

    fn upload_texture_2d(&mut self, buffer: &PixelBuffer, mip_level: u32) -> Result<(), BoxError> {
        let size = IntSize::from_wh(buffer.width(), buffer.height())
            .ok_or("texture has no pixels")?;
        let pixmap =
            Pixmap::from_vec(buffer.as_bytes().to_vec(), size).ok_or("pixel buffer size mismatch")?;
        let path = if mip_level == 0 {
            self.output.clone()
        } else {
            self.output.with_extension(format!("mip{mip_level}.png"))
        };
        pixmap.save_png(&path)?;
        log::info!("wrote {}", path.display());
        Ok(())
    }
}

fn main() -> Result<(), BoxError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let text = args
        .next()
        .map_or_else(|| "Text\nTexture".to_owned(), |text| text.replace("\\n", "\n"));
    let font_identifier = args.next().unwrap_or_else(|| "SANS_SERIF.BOLD".to_owned());
    let size: f32 = match args.next() {
        Some(size) => size.parse()?,
        None => 32.0,
    };
    let output = args.next().map_or_else(|| PathBuf::from("text_texture.png"), PathBuf::from);

    let library = FontLibrary::new(LibraryOptions::default());
    let cache = TypefaceCache::new();
    let mut cx = TextTextureContext::from_parts(
        &library,
        &library,
        &cache,
        SkiaPainter::new(),
        PngUploader { output },
    );

    let code = cx.create_sys_txt_texture(&text, &font_identifier, size, true)?;
    if code.is_empty() {
        log::warn!("nothing to draw for {text:?} in {font_identifier:?}");
        return Ok(());
    }
    let texture = code.texture_size();
    let (u, v) = code.uv_extent();
    log::info!(
        "result code {:#010x}: {code} content in a {}x{} texture, uv extent ({u:.3}, {v:.3})",
        code.to_bits(),
        texture.width,
        texture.height,
    );
    Ok(())
}
