// Copyright 2026 the Text Texture Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font lookup backed by a Fontique collection.

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, PoisonError};

use fontique::{
    Blob, Collection, CollectionOptions, FontInfo, FontStyle, FontWeight, FontWidth,
    GenericFamily, SourceCache,
};
use hashbrown::HashMap;
use text_texture::{Family, FontAssets, Style, SymbolicTypeface, TypefaceFactory};

/// Font data and synthesis settings for one typeface.
///
/// Handles are cheap to clone; clones compare equal to each other and to
/// nothing else.
#[derive(Clone)]
pub struct SkiaTypeface(Arc<TypefaceData>);

struct TypefaceData {
    name: String,
    family: Option<Family>,
    font: Option<FontSource>,
    embolden: bool,
    skew: Option<f32>,
}

#[derive(Clone)]
pub(crate) struct FontSource {
    pub(crate) data: Blob<u8>,
    pub(crate) index: u32,
}

impl SkiaTypeface {
    pub(crate) fn new(
        name: String,
        family: Option<Family>,
        font: Option<FontSource>,
        embolden: bool,
        skew: Option<f32>,
    ) -> Self {
        Self(Arc::new(TypefaceData {
            name,
            family,
            font,
            embolden,
            skew,
        }))
    }

    /// Human readable name, for diagnostics.
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// The built-in family this typeface was matched for, if any.
    pub fn family(&self) -> Option<Family> {
        self.0.family
    }

    /// Returns `true` if font data was found for this typeface.
    ///
    /// Typefaces without font data measure as zero and draw nothing.
    pub fn has_font(&self) -> bool {
        self.0.font.is_some()
    }

    /// Returns `true` if glyphs are emboldened because the font has no bold face.
    pub fn embolden(&self) -> bool {
        self.0.embolden
    }

    /// Synthetic slant in degrees, applied when the font has no italic face.
    pub fn skew(&self) -> Option<f32> {
        self.0.skew
    }

    pub(crate) fn font(&self) -> Option<&FontSource> {
        self.0.font.as_ref()
    }

    /// Copy of a typeface with extra synthesis for `style`.
    fn synthesized(&self, style: Style) -> Self {
        Self::new(
            alloc::format!("{} {style}", self.0.name),
            self.0.family,
            self.0.font.clone(),
            self.0.embolden || style.is_bold(),
            if style.is_italic() {
                Some(self.0.skew.unwrap_or(SYNTHETIC_ITALIC_DEGREES))
            } else {
                self.0.skew
            },
        )
    }
}

impl PartialEq for SkiaTypeface {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for SkiaTypeface {}

impl fmt::Debug for SkiaTypeface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SkiaTypeface")
            .field("name", &self.0.name)
            .field("family", &self.0.family)
            .field("has_font", &self.has_font())
            .field("embolden", &self.0.embolden)
            .field("skew", &self.0.skew)
            .finish()
    }
}

/// Slant used when a font without italic faces is asked for one.
const SYNTHETIC_ITALIC_DEGREES: f32 = 14.0;

/// Options for a [`FontLibrary`].
#[derive(Clone, Debug)]
pub struct LibraryOptions {
    /// Directory that font asset paths are relative to.
    ///
    /// The default value is the current directory.
    pub assets_root: PathBuf,

    /// If true, the built-in families are looked up among the system fonts.
    ///
    /// Without system fonts the built-in families only contain fonts loaded
    /// as assets, and typefaces for empty families have no font data.
    ///
    /// The default value is true.
    pub system_fonts: bool,
}

impl Default for LibraryOptions {
    fn default() -> Self {
        Self {
            assets_root: PathBuf::new(),
            system_fonts: true,
        }
    }
}

/// Provides typefaces from bundled font files and the system font collection.
///
/// Implements both [`FontAssets`] and [`TypefaceFactory`], so one library can be
/// shared by reference for both roles of a
/// [`TypefaceResolver`](text_texture::TypefaceResolver).
pub struct FontLibrary {
    assets_root: PathBuf,
    state: Mutex<LibraryState>,
}

struct LibraryState {
    collection: Collection,
    source_cache: SourceCache,
    /// Base families and the default bold face, which are stable for the
    /// lifetime of the library.
    builtins: HashMap<SymbolicTypeface, SkiaTypeface>,
}

impl FontLibrary {
    /// Creates a library with the given options.
    pub fn new(options: LibraryOptions) -> Self {
        let collection = Collection::new(CollectionOptions {
            shared: false,
            system_fonts: options.system_fonts,
        });
        Self {
            assets_root: options.assets_root,
            state: Mutex::new(LibraryState {
                collection,
                source_cache: SourceCache::default(),
                builtins: HashMap::new(),
            }),
        }
    }

    /// Registers a font file from the assets directory with a built-in family.
    ///
    /// This is how fonts are supplied when system fonts are unavailable.
    /// Returns `false` if the file could not be read or holds no fonts.
    pub fn register_family_font(&self, family: Family, path: &str) -> bool {
        let Some(data) = self.read_asset(path) else {
            return false;
        };
        let mut state = self.lock();
        let registered = state.collection.register_fonts(data, None);
        let ids: Vec<_> = registered.iter().map(|(id, _)| *id).collect();
        if ids.is_empty() {
            log::debug!("no fonts in {path:?}");
            return false;
        }
        for &generic in generic_families(family) {
            state
                .collection
                .append_generic_families(generic, ids.iter().copied());
        }
        // Built-in handles may have been created before the family had fonts.
        state.builtins.clear();
        true
    }

    fn read_asset(&self, path: &str) -> Option<Blob<u8>> {
        let full_path = self.assets_root.join(path);
        match std::fs::read(&full_path) {
            Ok(bytes) => Some(Blob::new(Arc::new(bytes))),
            Err(err) => {
                log::debug!("cannot read font asset {}: {err}", full_path.display());
                None
            }
        }
    }

    fn builtin(&self, symbolic: SymbolicTypeface) -> SkiaTypeface {
        let mut state = self.lock();
        if let Some(typeface) = state.builtins.get(&symbolic) {
            return typeface.clone();
        }
        let typeface = state.match_family(symbolic);
        state.builtins.insert(symbolic, typeface.clone());
        typeface
    }

    fn lock(&self) -> MutexGuard<'_, LibraryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LibraryState {
    /// Finds the best font for a family and style among the generic families
    /// the built-in family maps to.
    fn match_family(&mut self, symbolic: SymbolicTypeface) -> SkiaTypeface {
        let (style, weight) = attributes(symbolic.style);
        for &generic in generic_families(symbolic.family) {
            let ids: Vec<_> = self.collection.generic_families(generic).collect();
            for id in ids {
                let Some(family) = self.collection.family(id) else {
                    continue;
                };
                let Some(font) = family.match_font(FontWidth::NORMAL, style, weight, true) else {
                    continue;
                };
                let Some(source) = load(font, &mut self.source_cache) else {
                    continue;
                };
                let synthesis = font.synthesis(FontWidth::NORMAL, style, weight);
                return SkiaTypeface::new(
                    alloc::format!("{} {}", family.name(), symbolic.style),
                    Some(symbolic.family),
                    Some(source),
                    synthesis.embolden(),
                    synthesis.skew(),
                );
            }
        }
        log::debug!("no font available for {symbolic}");
        SkiaTypeface::new(symbolic.to_string(), Some(symbolic.family), None, false, None)
    }
}

impl fmt::Debug for FontLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontLibrary")
            .field("assets_root", &self.assets_root)
            .finish_non_exhaustive()
    }
}

impl Default for FontLibrary {
    fn default() -> Self {
        Self::new(LibraryOptions::default())
    }
}

impl FontAssets for FontLibrary {
    type Typeface = SkiaTypeface;

    fn load_font_asset(&self, path: &str) -> Option<SkiaTypeface> {
        let data = self.read_asset(path)?;
        let mut state = self.lock();
        let LibraryState {
            collection,
            source_cache,
            ..
        } = &mut *state;
        let registered = collection.register_fonts(data, None);
        let Some(font) = registered.iter().find_map(|(_, fonts)| fonts.first()) else {
            log::debug!("font asset {path:?} contains no fonts");
            return None;
        };
        let source = load(font, source_cache)?;
        Some(SkiaTypeface::new(path.into(), None, Some(source), false, None))
    }
}

impl TypefaceFactory for FontLibrary {
    type Typeface = SkiaTypeface;

    fn family(&self, family: Family) -> SkiaTypeface {
        self.builtin(SymbolicTypeface::new(family, Style::Normal))
    }

    fn default_bold(&self) -> SkiaTypeface {
        self.builtin(SymbolicTypeface::new(Family::Default, Style::Bold))
    }

    fn create(&self, base: &SkiaTypeface, style: Style) -> Option<SkiaTypeface> {
        match base.family() {
            Some(family) => {
                let typeface = self.lock().match_family(SymbolicTypeface::new(family, style));
                typeface.has_font().then_some(typeface)
            }
            None => Some(base.synthesized(style)),
        }
    }
}

fn load(font: &FontInfo, source_cache: &mut SourceCache) -> Option<FontSource> {
    let data = font.load(Some(source_cache))?;
    Some(FontSource {
        data,
        index: font.index(),
    })
}

/// Generic families searched for a built-in family, in order.
fn generic_families(family: Family) -> &'static [GenericFamily] {
    match family {
        Family::Default => &[GenericFamily::SansSerif, GenericFamily::SystemUi],
        Family::Monospace => &[GenericFamily::Monospace],
        Family::SansSerif => &[GenericFamily::SansSerif],
        Family::Serif => &[GenericFamily::Serif],
    }
}

fn attributes(style: Style) -> (FontStyle, FontWeight) {
    let font_style = if style.is_italic() {
        FontStyle::Italic
    } else {
        FontStyle::Normal
    };
    let weight = if style.is_bold() {
        FontWeight::BOLD
    } else {
        FontWeight::NORMAL
    };
    (font_style, weight)
}
