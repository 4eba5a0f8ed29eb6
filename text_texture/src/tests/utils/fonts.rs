// Copyright 2026 the Text Texture Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font collaborators that record how they were used.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::{Family, FontAssets, Style, TypefaceFactory};

/// A typeface handle. Identity is the `Arc` allocation.
pub(crate) type MockTypeface = Arc<MockTypefaceInfo>;

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct MockTypefaceInfo {
    pub(crate) name: String,
}

fn typeface(name: impl Into<String>) -> MockTypeface {
    Arc::new(MockTypefaceInfo { name: name.into() })
}

/// Built-in families, bundled assets and synthesis with call counters.
///
/// Built-in handles are created once, so repeated lookups of the same family
/// return the same allocation.
#[derive(Debug)]
pub(crate) struct MockFonts {
    families: Vec<MockTypeface>,
    default_bold: MockTypeface,
    assets: Vec<(String, MockTypeface)>,
    synthesis_fails: bool,
    pub(crate) asset_loads: Mutex<Vec<String>>,
    pub(crate) creations: AtomicUsize,
}

impl MockFonts {
    pub(crate) fn new() -> Self {
        Self {
            families: Family::all()
                .iter()
                .map(|family| typeface(family.to_string()))
                .collect(),
            default_bold: typeface("DEFAULT_BOLD"),
            assets: Vec::new(),
            synthesis_fails: false,
            asset_loads: Mutex::new(Vec::new()),
            creations: AtomicUsize::new(0),
        }
    }

    /// Adds a bundled font file.
    pub(crate) fn with_asset(mut self, path: &str) -> Self {
        self.assets.push((path.to_string(), typeface(path)));
        self
    }

    /// Makes every synthesis request fail.
    pub(crate) fn with_failing_synthesis(mut self) -> Self {
        self.synthesis_fails = true;
        self
    }

    pub(crate) fn base(&self, family: Family) -> &MockTypeface {
        &self.families[family as usize]
    }

    pub(crate) fn bold(&self) -> &MockTypeface {
        &self.default_bold
    }

    pub(crate) fn asset_load_count(&self, path: &str) -> usize {
        self.asset_loads
            .lock()
            .unwrap()
            .iter()
            .filter(|loaded| *loaded == path)
            .count()
    }

    pub(crate) fn creation_count(&self) -> usize {
        self.creations.load(Ordering::SeqCst)
    }
}

impl TypefaceFactory for MockFonts {
    type Typeface = MockTypeface;

    fn family(&self, family: Family) -> MockTypeface {
        self.base(family).clone()
    }

    fn default_bold(&self) -> MockTypeface {
        self.default_bold.clone()
    }

    fn create(&self, base: &MockTypeface, style: Style) -> Option<MockTypeface> {
        self.creations.fetch_add(1, Ordering::SeqCst);
        if self.synthesis_fails {
            return None;
        }
        Some(typeface(format!("{}.{style}", base.name)))
    }
}

impl FontAssets for MockFonts {
    type Typeface = MockTypeface;

    fn load_font_asset(&self, path: &str) -> Option<MockTypeface> {
        self.asset_loads.lock().unwrap().push(path.to_string());
        self.assets
            .iter()
            .find(|(asset, _)| asset == path)
            .map(|(_, typeface)| typeface.clone())
    }
}
