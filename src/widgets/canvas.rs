//! Canvas widget: an image scaled into the padded bounds.
//!
//! The image is referred to by name and sized through the
//! [`Measure`](crate::graphics::Measure) capability; loading it is the
//! backend's business.

use std::any::Any;

use crate::error::Result;
use crate::geometry::{Dimension, Insets};
use crate::graphics::Graphics;
use crate::style::StyleLookup;
use crate::widget::{ComponentUi, DrawContext, SizeContext};

/// Displays an optional image, with a `background` fill behind it.
///
/// # Examples
///
/// ```ignore
/// let logo = tree.insert(Canvas::new("logo.png").with_padding(Insets::all(4.0)).into_component());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Canvas {
    image: Option<String>,
    padding: Insets,
}

impl Canvas {
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            image: Some(image.into()),
            padding: Insets::ZERO,
        }
    }

    /// A canvas with nothing to show; it still takes up its padding.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn padding(&self) -> Insets {
        self.padding
    }

    pub fn set_image(&mut self, image: Option<String>) {
        self.image = image;
    }

    pub fn set_padding(&mut self, padding: Insets) {
        self.padding = padding;
    }
}

impl ComponentUi for Canvas {
    fn name(&self) -> &str {
        "Canvas"
    }

    fn preferred_size(&self, cx: &SizeContext<'_>) -> Dimension {
        let image = self.image.as_deref().map_or(Dimension::ZERO, |name| cx.measure.image_size(name));
        image + self.padding.size()
    }

    /// Skips the image when it or the padded area has no area.
    fn draw(&self, g: &mut dyn Graphics, cx: &DrawContext<'_>) -> Result<()> {
        if let Some(color) = cx.style.color("background") {
            g.set_color(color);
            g.fill_rect(cx.size.to_bounds());
        }

        let Some(image) = self.image.as_deref() else { return Ok(()) };
        let natural = g.image_size(image);
        let area = cx.size.to_bounds() - self.padding;
        if natural.width > 0.0 && natural.height > 0.0 && area.width > 0.0 && area.height > 0.0 {
            g.draw_image(image, area);
        }
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
