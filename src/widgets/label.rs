//! Label widget: a single run of measured text.
//!
//! The text extent comes from the [`Measure`](crate::graphics::Measure)
//! capability, using the font resolved from the `text` style key. Both size
//! hints equal the extent plus padding; change the text through
//! [`ComponentTree::update_ui`](crate::tree::ComponentTree::update_ui) so the
//! label is invalidated.

use std::any::Any;

use crate::error::Result;
use crate::geometry::{Dimension, Insets, Point};
use crate::graphics::{Graphics, Measure};
use crate::style::{Font, StyleChain, StyleLookup};
use crate::widget::{ComponentUi, DrawContext, SizeContext};

// ---------------------------------------------------------------------------
// TextAlign
// ---------------------------------------------------------------------------

/// Where text sits along one axis of the label.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAlign {
    Begin,
    #[default]
    Center,
    End,
}

impl TextAlign {
    fn ratio(self) -> f64 {
        match self {
            Self::Begin => 0.0,
            Self::Center => 0.5,
            Self::End => 1.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Label
// ---------------------------------------------------------------------------

/// Displays one line of text.
///
/// # Examples
///
/// ```ignore
/// let label = tree.insert(Label::new("Hello").with_text_size(14.0).into_component());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    text: String,
    text_size: f64,
    align: TextAlign,
    vertical_align: TextAlign,
    padding: Insets,
}

impl Label {
    pub const DEFAULT_TEXT_SIZE: f64 = 10.0;

    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            text_size: Self::DEFAULT_TEXT_SIZE,
            align: TextAlign::default(),
            vertical_align: TextAlign::default(),
            padding: Insets::ZERO,
        }
    }

    /// Set the text size (builder).
    ///
    /// # Panics
    ///
    /// Panics if `size` is negative or NaN.
    pub fn with_text_size(mut self, size: f64) -> Self {
        assert!(size >= 0.0, "text size must be zero or a positive number, got {size}");
        self.text_size = size;
        self
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn with_vertical_align(mut self, align: TextAlign) -> Self {
        self.vertical_align = align;
        self
    }

    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn text_size(&self) -> f64 {
        self.text_size
    }

    pub fn align(&self) -> TextAlign {
        self.align
    }

    pub fn vertical_align(&self) -> TextAlign {
        self.vertical_align
    }

    pub fn padding(&self) -> Insets {
        self.padding
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Ignores negative and NaN sizes.
    pub fn set_text_size(&mut self, size: f64) {
        if size >= 0.0 {
            self.text_size = size;
        }
    }

    pub fn set_align(&mut self, align: TextAlign) {
        self.align = align;
    }

    pub fn set_vertical_align(&mut self, align: TextAlign) {
        self.vertical_align = align;
    }

    pub fn set_padding(&mut self, padding: Insets) {
        self.padding = padding;
    }

    fn font(style: &StyleChain<'_>) -> Font {
        style.font("text").cloned().unwrap_or_default()
    }

    fn extent<M: Measure + ?Sized>(&self, measure: &M, style: &StyleChain<'_>) -> Dimension {
        measure.text_extent(&self.text, &Self::font(style), self.text_size)
    }
}

impl Default for Label {
    fn default() -> Self {
        Self::new("")
    }
}

impl ComponentUi for Label {
    fn name(&self) -> &str {
        "Label"
    }

    fn minimum_size(&self, cx: &SizeContext<'_>) -> Dimension {
        self.extent(cx.measure, &cx.style) + self.padding.size()
    }

    fn preferred_size(&self, cx: &SizeContext<'_>) -> Dimension {
        self.minimum_size(cx)
    }

    /// Draws at the text baseline, so the location's `y` is the bottom of
    /// the text extent. Nothing is drawn unless a `text` color resolves.
    fn draw(&self, g: &mut dyn Graphics, cx: &DrawContext<'_>) -> Result<()> {
        let Some(color) = cx.style.color("text") else { return Ok(()) };

        let extent = self.extent(&*g, &cx.style);
        let p = self.padding;
        let x = (cx.size.width - extent.width - p.width()) * self.align.ratio() + p.left;
        let y = (cx.size.height - extent.height - p.height()) * self.vertical_align.ratio() + extent.height + p.top;

        g.set_color(color);
        g.draw_text(&self.text, self.text_size, Point::new(x, y));
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
