// Copyright 2026 the Text Texture Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Symbolic typeface descriptors.

use core::fmt;

/// Built-in font families that can be named by a symbolic font identifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Family {
    /// The platform default family.
    #[default]
    Default = 0,
    /// All glyphs have the same fixed width.
    Monospace = 1,
    /// Glyphs have stroke endings that are plain.
    SansSerif = 2,
    /// Glyphs have finishing strokes, flared or tapering ends, or actual serifed endings.
    Serif = 3,
}

impl Family {
    /// Parses a family from its identifier token.
    ///
    /// ```
    /// use text_texture::Family;
    ///
    /// assert_eq!(Family::parse("SANS_SERIF"), Some(Family::SansSerif));
    /// assert_eq!(Family::parse("sans-serif"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "DEFAULT" => Self::Default,
            "MONOSPACE" => Self::Monospace,
            "SANS_SERIF" => Self::SansSerif,
            "SERIF" => Self::Serif,
            _ => return None,
        })
    }

    /// Returns a slice containing all family variants.
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::Monospace, Self::SansSerif, Self::Serif]
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Default => "DEFAULT",
            Self::Monospace => "MONOSPACE",
            Self::SansSerif => "SANS_SERIF",
            Self::Serif => "SERIF",
        };
        f.write_str(name)
    }
}

/// Built-in styles that can be named by a symbolic font identifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Style {
    /// Upright, regular weight.
    #[default]
    Normal = 0,
    /// Upright, bold weight.
    Bold = 1,
    /// Slanted, regular weight.
    Italic = 2,
    /// Slanted, bold weight.
    BoldItalic = 3,
}

impl Style {
    /// Parses a style from its identifier token.
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "NORMAL" => Self::Normal,
            "BOLD" => Self::Bold,
            "ITALIC" => Self::Italic,
            "BOLD_ITALIC" => Self::BoldItalic,
            _ => return None,
        })
    }

    /// Returns `true` for the bold styles.
    pub fn is_bold(self) -> bool {
        matches!(self, Self::Bold | Self::BoldItalic)
    }

    /// Returns `true` for the italic styles.
    pub fn is_italic(self) -> bool {
        matches!(self, Self::Italic | Self::BoldItalic)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Normal => "NORMAL",
            Self::Bold => "BOLD",
            Self::Italic => "ITALIC",
            Self::BoldItalic => "BOLD_ITALIC",
        };
        f.write_str(name)
    }
}

/// A family and style pair parsed from a `"<FAMILY>.<STYLE>"` identifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SymbolicTypeface {
    /// The requested family.
    pub family: Family,
    /// The requested style.
    pub style: Style,
}

impl SymbolicTypeface {
    /// Creates a new descriptor.
    pub fn new(family: Family, style: Style) -> Self {
        Self { family, style }
    }

    /// Parses a symbolic font identifier.
    ///
    /// The identifier is split on `.`: the first segment names the family and the
    /// second the style. Segments past the second are ignored. Missing, empty or
    /// unrecognized segments fall back to [`Family::Default`] and [`Style::Normal`].
    ///
    /// A lone `"BOLD"` segment is read as the style, so `"BOLD"` and `".BOLD"`
    /// are equivalent. Other lone style names are unrecognized families.
    ///
    /// ```
    /// use text_texture::{Family, Style, SymbolicTypeface};
    ///
    /// let parsed = SymbolicTypeface::parse("SERIF.ITALIC");
    /// assert_eq!(parsed, SymbolicTypeface::new(Family::Serif, Style::Italic));
    /// assert_eq!(SymbolicTypeface::parse(""), SymbolicTypeface::default());
    /// ```
    pub fn parse(identifier: &str) -> Self {
        let mut parts = identifier.split('.');
        let first = parts.next().unwrap_or_default();
        let second = parts.next();

        let family = Family::parse(first);
        let style = match second {
            Some(token) => Style::parse(token),
            None if first == "BOLD" => Some(Style::Bold),
            None => None,
        };
        Self {
            family: family.unwrap_or_default(),
            style: style.unwrap_or_default(),
        }
    }
}

impl fmt::Display for SymbolicTypeface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.family, self.style)
    }
}
