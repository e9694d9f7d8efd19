//! Style values and lookup: Rgba, Font, StyleMap, StyleChain.
//!
//! Each component carries its own [`StyleMap`]. Lookups go through a
//! [`StyleChain`]: the component's own map first, then the tree-wide theme
//! under a `"<Widget>.<key>"` name, then the theme under the bare key. There is
//! no inheritance from parent components.

use std::collections::HashMap;

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Rgba
// ---------------------------------------------------------------------------

/// A color with each channel in `0.0..=1.0`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };
    pub const WHITE: Rgba = Rgba { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };
    pub const TRANSPARENT: Rgba = Rgba { r: 0.0, g: 0.0, b: 0.0, a: 0.0 };

    /// Create a color, rejecting channels outside `0.0..=1.0`.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Result<Self> {
        for (name, value) in [("r", r), ("g", g), ("b", b), ("a", a)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidArgument {
                    name,
                    reason: format!("must be between 0 and 1, got {value}"),
                });
            }
        }
        Ok(Self { r, g, b, a })
    }

    /// Same color with a different alpha, clamped into range.
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a: a.clamp(0.0, 1.0), ..self }
    }
}

// ---------------------------------------------------------------------------
// Font
// ---------------------------------------------------------------------------

/// A font reference. Loading the face is the graphics backend's business.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    pub family: String,
}

impl Font {
    pub fn new(family: impl Into<String>) -> Self {
        Self { family: family.into() }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new("Sans")
    }
}

// ---------------------------------------------------------------------------
// StyleMap
// ---------------------------------------------------------------------------

/// Named colors and fonts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleMap {
    colors: HashMap<String, Rgba>,
    fonts: HashMap<String, Font>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a color (builder).
    pub fn with_color(mut self, key: impl Into<String>, color: Rgba) -> Self {
        self.colors.insert(key.into(), color);
        self
    }

    /// Set a font (builder).
    pub fn with_font(mut self, key: impl Into<String>, font: Font) -> Self {
        self.fonts.insert(key.into(), font);
        self
    }

    pub fn color(&self, key: &str) -> Option<Rgba> {
        self.colors.get(key).copied()
    }

    pub fn font(&self, key: &str) -> Option<&Font> {
        self.fonts.get(key)
    }

    /// Store a color. Returns `true` if the stored value changed.
    pub fn set_color(&mut self, key: impl Into<String>, color: Rgba) -> bool {
        self.colors.insert(key.into(), color) != Some(color)
    }

    /// Remove a color. Returns `true` if one was present.
    pub fn clear_color(&mut self, key: &str) -> bool {
        self.colors.remove(key).is_some()
    }

    /// Store a font. Returns `true` if the stored value changed.
    pub fn set_font(&mut self, key: impl Into<String>, font: Font) -> bool {
        let key = key.into();
        if self.fonts.get(&key) == Some(&font) {
            return false;
        }
        self.fonts.insert(key, font);
        true
    }

    /// Remove a font. Returns `true` if one was present.
    pub fn clear_font(&mut self, key: &str) -> bool {
        self.fonts.remove(key).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty() && self.fonts.is_empty()
    }
}

// ---------------------------------------------------------------------------
// StyleLookup / StyleChain
// ---------------------------------------------------------------------------

/// Read-only access to resolved style values.
pub trait StyleLookup {
    fn color(&self, key: &str) -> Option<Rgba>;
    fn font(&self, key: &str) -> Option<&Font>;
}

impl StyleLookup for StyleMap {
    fn color(&self, key: &str) -> Option<Rgba> {
        StyleMap::color(self, key)
    }

    fn font(&self, key: &str) -> Option<&Font> {
        StyleMap::font(self, key)
    }
}

/// Resolves a key against a component's own styles, then the theme.
#[derive(Clone, Copy, Debug)]
pub struct StyleChain<'a> {
    own: &'a StyleMap,
    theme: &'a StyleMap,
    prefix: &'a str,
}

impl<'a> StyleChain<'a> {
    /// `prefix` is the widget name used for `"<prefix>.<key>"` theme entries.
    pub fn new(own: &'a StyleMap, theme: &'a StyleMap, prefix: &'a str) -> Self {
        Self { own, theme, prefix }
    }

    fn lookup<T>(&self, key: &str, get: impl Fn(&'a StyleMap, &str) -> Option<T>) -> Option<T> {
        get(self.own, key)
            .or_else(|| {
                if self.prefix.is_empty() {
                    None
                } else {
                    get(self.theme, &format!("{}.{key}", self.prefix))
                }
            })
            .or_else(|| get(self.theme, key))
    }
}

impl StyleLookup for StyleChain<'_> {
    fn color(&self, key: &str) -> Option<Rgba> {
        self.lookup(key, |map, k| map.color(k))
    }

    fn font(&self, key: &str) -> Option<&Font> {
        self.lookup(key, |map, k| map.font(k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> Rgba {
        Rgba::new(1.0, 0.0, 0.0, 1.0).unwrap()
    }

    #[test]
    fn rgba_rejects_out_of_range() {
        assert!(Rgba::new(1.5, 0.0, 0.0, 1.0).is_err());
        assert!(Rgba::new(0.0, 0.0, 0.0, -0.1).is_err());
        assert_eq!(red().with_alpha(2.0).a, 1.0);
    }

    #[test]
    fn set_reports_change() {
        let mut map = StyleMap::new();
        assert!(map.set_color("background", red()));
        assert!(!map.set_color("background", red()));
        assert!(map.set_color("background", Rgba::WHITE));

        assert!(map.set_font("text", Font::new("Mono")));
        assert!(!map.set_font("text", Font::new("Mono")));

        assert!(map.clear_color("background"));
        assert!(!map.clear_color("background"));
        assert!(map.clear_font("text"));
        assert!(map.is_empty());
    }

    #[test]
    fn chain_prefers_own_then_prefixed_then_bare() {
        let own = StyleMap::new().with_color("text", red());
        let theme = StyleMap::new()
            .with_color("text", Rgba::BLACK)
            .with_color("Label.background", Rgba::WHITE)
            .with_color("background", Rgba::TRANSPARENT)
            .with_font("text", Font::new("Serif"));

        let chain = StyleChain::new(&own, &theme, "Label");
        assert_eq!(chain.color("text"), Some(red()));
        assert_eq!(chain.color("background"), Some(Rgba::WHITE));
        assert_eq!(chain.font("text"), Some(&Font::new("Serif")));
        assert_eq!(chain.color("border"), None);

        let other = StyleChain::new(&own, &theme, "Panel");
        assert_eq!(other.color("background"), Some(Rgba::TRANSPARENT));
    }
}
