// Copyright 2026 the Text Texture Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Entry points combining typeface resolution and rasterization.

use core::fmt;

use crate::{
    Alignment, Error, FontAssets, ResultCode, TextPainter, TextRasterizer, TextureUploader,
    TypefaceCache, TypefaceFactory, TypefaceResolver,
};

/// Creates text textures from font identifiers or resolved typefaces.
///
/// The context borrows the [`TypefaceCache`] it resolves through, so the owner
/// of the cache decides how long resolved typefaces live and which contexts
/// share them.
pub struct TextTextureContext<'a, F, A, P, U>
where
    F: TypefaceFactory,
{
    resolver: TypefaceResolver<'a, F, A>,
    rasterizer: TextRasterizer<P, U>,
}

impl<'a, F, A, P, U> TextTextureContext<'a, F, A, P, U>
where
    F: TypefaceFactory,
    F::Typeface: Clone,
    A: FontAssets<Typeface = F::Typeface>,
    P: TextPainter<Typeface = F::Typeface>,
    U: TextureUploader,
{
    /// Creates a context from its two components.
    pub fn new(resolver: TypefaceResolver<'a, F, A>, rasterizer: TextRasterizer<P, U>) -> Self {
        Self {
            resolver,
            rasterizer,
        }
    }

    /// Creates a context directly from its collaborators.
    pub fn from_parts(
        factory: F,
        assets: A,
        cache: &'a TypefaceCache<F::Typeface>,
        painter: P,
        uploader: U,
    ) -> Self {
        Self::new(
            TypefaceResolver::new(factory, assets, cache),
            TextRasterizer::new(painter, uploader),
        )
    }

    /// Resolves `font_identifier` and renders `text` with it.
    ///
    /// See [`TypefaceResolver::resolve`] and
    /// [`TextRasterizer::rasterize_and_upload`].
    pub fn create_sys_txt_texture(
        &mut self,
        text: &str,
        font_identifier: &str,
        size: f32,
        align_center: bool,
    ) -> Result<ResultCode, Error> {
        let typeface = self.resolver.resolve(font_identifier);
        self.create_txt_texture(text, &typeface, size, align_center)
    }

    /// Renders `text` with an already resolved typeface.
    pub fn create_txt_texture(
        &mut self,
        text: &str,
        typeface: &F::Typeface,
        size: f32,
        align_center: bool,
    ) -> Result<ResultCode, Error> {
        self.rasterizer
            .rasterize_and_upload(text, typeface, size, Alignment::from_center(align_center))
    }

    /// The typeface resolver.
    pub fn resolver(&self) -> &TypefaceResolver<'a, F, A> {
        &self.resolver
    }

    /// The text rasterizer.
    pub fn rasterizer(&self) -> &TextRasterizer<P, U> {
        &self.rasterizer
    }

    /// The text rasterizer, mutably.
    pub fn rasterizer_mut(&mut self) -> &mut TextRasterizer<P, U> {
        &mut self.rasterizer
    }
}

impl<F, A, P, U> fmt::Debug for TextTextureContext<'_, F, A, P, U>
where
    F: TypefaceFactory,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextTextureContext")
            .field("resolver", &self.resolver)
            .field("rasterizer", &self.rasterizer)
            .finish()
    }
}
