// Copyright 2026 the Text Texture Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolution of font identifiers into typeface handles.

use alloc::borrow::Cow;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::{Family, Style, SymbolicTypeface, TypefaceCache};

/// Loader for font files bundled with the application.
pub trait FontAssets {
    /// Handle produced for a loaded font.
    type Typeface;

    /// Loads the font file at `path`.
    ///
    /// Returns `None` if the asset is missing or cannot be read as a font.
    fn load_font_asset(&self, path: &str) -> Option<Self::Typeface>;
}

/// Source of the platform's built-in typefaces.
pub trait TypefaceFactory {
    /// Handle produced by this factory.
    type Typeface;

    /// Returns the base (normal style) typeface of a built-in family.
    fn family(&self, family: Family) -> Self::Typeface;

    /// Returns the platform's pre-baked bold variant of the default family.
    fn default_bold(&self) -> Self::Typeface;

    /// Creates a styled variant of a family's base typeface.
    ///
    /// Returns `None` if the platform cannot produce the variant.
    fn create(&self, base: &Self::Typeface, style: Style) -> Option<Self::Typeface>;
}

impl<T: FontAssets + ?Sized> FontAssets for &T {
    type Typeface = T::Typeface;

    fn load_font_asset(&self, path: &str) -> Option<Self::Typeface> {
        (**self).load_font_asset(path)
    }
}

impl<T: TypefaceFactory + ?Sized> TypefaceFactory for &T {
    type Typeface = T::Typeface;

    fn family(&self, family: Family) -> Self::Typeface {
        (**self).family(family)
    }

    fn default_bold(&self) -> Self::Typeface {
        (**self).default_bold()
    }

    fn create(&self, base: &Self::Typeface, style: Style) -> Option<Self::Typeface> {
        (**self).create(base, style)
    }
}

/// Options for a [`TypefaceResolver`].
#[derive(Clone, Debug)]
pub struct ResolverOptions {
    /// Identifiers ending in one of these suffixes are loaded as font assets.
    ///
    /// Matching is exact, including case.
    ///
    /// The default value is `[".ttf"]`.
    pub font_file_suffixes: Vec<Cow<'static, str>>,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            font_file_suffixes: vec![Cow::Borrowed(".ttf")],
        }
    }
}

/// Resolves font identifiers into typeface handles.
///
/// Identifiers are either paths to bundled font files or symbolic
/// `"<FAMILY>.<STYLE>"` tokens (see [`SymbolicTypeface::parse`]). Resolution
/// never fails: anything that cannot be resolved degrades to the default
/// family.
pub struct TypefaceResolver<'a, F, A>
where
    F: TypefaceFactory,
{
    factory: F,
    assets: A,
    cache: &'a TypefaceCache<F::Typeface>,
    options: ResolverOptions,
}

impl<'a, F, A> TypefaceResolver<'a, F, A>
where
    F: TypefaceFactory,
    F::Typeface: Clone,
    A: FontAssets<Typeface = F::Typeface>,
{
    /// Creates a resolver backed by `cache`.
    pub fn new(factory: F, assets: A, cache: &'a TypefaceCache<F::Typeface>) -> Self {
        Self::with_options(factory, assets, cache, ResolverOptions::default())
    }

    /// Creates a resolver backed by `cache` with the given options.
    pub fn with_options(
        factory: F,
        assets: A,
        cache: &'a TypefaceCache<F::Typeface>,
        options: ResolverOptions,
    ) -> Self {
        Self {
            factory,
            assets,
            cache,
            options,
        }
    }

    /// Returns the typeface for `identifier`.
    pub fn resolve(&self, identifier: &str) -> F::Typeface {
        if let Some(typeface) = self.cache.get(identifier) {
            log::trace!("typeface cache hit for {identifier:?}");
            return typeface;
        }

        if self.is_font_file(identifier) {
            // The lock is not held while loading.
            match self.assets.load_font_asset(identifier) {
                Some(typeface) => {
                    self.cache.insert(identifier, typeface.clone());
                    return typeface;
                }
                None => {
                    log::debug!("font asset {identifier:?} unavailable, using symbolic fallback");
                }
            }
        }

        let symbolic = SymbolicTypeface::parse(identifier);
        match (symbolic.family, symbolic.style) {
            (Family::Default, Style::Bold) => self.factory.default_bold(),
            (family, Style::Normal) => self.factory.family(family),
            (family, style) => {
                let base = self.factory.family(family);
                match self.factory.create(&base, style) {
                    Some(typeface) => {
                        self.cache.insert(identifier, typeface.clone());
                        typeface
                    }
                    None => {
                        log::debug!("cannot synthesize {symbolic} for {identifier:?}");
                        base
                    }
                }
            }
        }
    }

    /// The cache this resolver reads and fills.
    pub fn cache(&self) -> &'a TypefaceCache<F::Typeface> {
        self.cache
    }

    /// The typeface factory.
    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// The font asset loader.
    pub fn assets(&self) -> &A {
        &self.assets
    }

    fn is_font_file(&self, identifier: &str) -> bool {
        self.options
            .font_file_suffixes
            .iter()
            .any(|suffix| identifier.ends_with(suffix.as_ref()))
    }
}

impl<F, A> fmt::Debug for TypefaceResolver<'_, F, A>
where
    F: TypefaceFactory,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypefaceResolver")
            .field("cached", &self.cache.len())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
