// Copyright 2026 the Text Texture Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::Arc;

use crate::{Alignment, Family, TextTextureContext, TextureDimensions, TypefaceCache};

use super::utils::{MockFonts, MockPainter, MockUploader};

#[test]
fn sys_txt_texture_end_to_end() {
    let fonts = MockFonts::new();
    let cache = TypefaceCache::new();
    let mut cx = TextTextureContext::from_parts(
        &fonts,
        &fonts,
        &cache,
        MockPainter::standard(),
        MockUploader::new(),
    );

    let code = cx
        .create_sys_txt_texture("Hi\nWorld", "", 20.0, false)
        .unwrap();

    assert_eq!(u32::from(code), 50 | (48 << 16));
    assert_eq!(code.texture_size(), TextureDimensions::new(64, 64));
    assert_eq!(code.uv_extent(), (50.0 / 64.0, 0.75));

    let painter = cx.rasterizer().painter();
    assert!(Arc::ptr_eq(&painter.typefaces[0], fonts.base(Family::Default)));
    assert_eq!(cx.rasterizer().uploader().uploads.len(), 1);
}

#[test]
fn sys_txt_texture_resolves_through_cache() {
    let fonts = MockFonts::new().with_asset("fonts/hud.ttf");
    let cache = TypefaceCache::new();
    let mut cx = TextTextureContext::from_parts(
        &fonts,
        &fonts,
        &cache,
        MockPainter::standard(),
        MockUploader::new(),
    );

    cx.create_sys_txt_texture("3", "fonts/hud.ttf", 16.0, true)
        .unwrap();
    cx.create_sys_txt_texture("2", "fonts/hud.ttf", 16.0, true)
        .unwrap();
    cx.create_sys_txt_texture("1", "SERIF.ITALIC", 16.0, true)
        .unwrap();
    cx.create_sys_txt_texture("GO", "SERIF.ITALIC", 16.0, true)
        .unwrap();

    assert_eq!(fonts.asset_load_count("fonts/hud.ttf"), 1);
    assert_eq!(fonts.creation_count(), 1);
    assert_eq!(cache.len(), 2);

    let painter = cx.rasterizer().painter();
    let names: Vec<&str> = painter
        .typefaces
        .iter()
        .map(|typeface| typeface.name.as_str())
        .collect();
    assert_eq!(
        names,
        ["fonts/hud.ttf", "fonts/hud.ttf", "SERIF.ITALIC", "SERIF.ITALIC"]
    );
    assert!(painter.draws.iter().all(|draw| draw.align == Alignment::Center));
}

#[test]
fn txt_texture_uses_given_typeface() {
    let fonts = MockFonts::new();
    let cache = TypefaceCache::new();
    let mut cx = TextTextureContext::from_parts(
        &fonts,
        &fonts,
        &cache,
        MockPainter::standard(),
        MockUploader::new(),
    );
    let typeface = fonts.bold().clone();

    let code = cx
        .create_txt_texture("Score", &typeface, 20.0, false)
        .unwrap();

    assert_eq!((code.width(), code.height()), (50, 24));
    assert!(Arc::ptr_eq(&cx.rasterizer().painter().typefaces[0], &typeface));
    assert!(cache.is_empty());
}

#[test]
fn degenerate_text_skips_upload() {
    let fonts = MockFonts::new();
    let cache = TypefaceCache::new();
    let mut cx = TextTextureContext::from_parts(
        &fonts,
        &fonts,
        &cache,
        MockPainter::standard(),
        MockUploader::new(),
    );

    let code = cx.create_sys_txt_texture("", "SERIF", 20.0, true).unwrap();

    assert!(code.is_empty());
    assert!(cx.rasterizer().uploader().uploads.is_empty());
}
