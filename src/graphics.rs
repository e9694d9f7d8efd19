//! Rendering boundary: the `Measure` and `Graphics` capabilities.
//!
//! The layout engine only ever measures. Drawing happens through
//! [`Graphics`], which a backend implements; this crate ships no backend apart
//! from the recording one in [`crate::testing`].

use crate::geometry::{Bounds, Dimension, Point};
use crate::style::{Font, Rgba};

/// Text and image measurement.
pub trait Measure {
    /// The extent of `text` rendered with `font` at `size`.
    fn text_extent(&self, text: &str, font: &Font, size: f64) -> Dimension;

    /// The natural size of a named image.
    fn image_size(&self, image: &str) -> Dimension;
}

/// A drawing surface.
///
/// `offset` translates every coordinate passed to the draw calls, and `clip`
/// (when set) is expressed in surface coordinates, i.e. already offset.
pub trait Graphics: Measure {
    fn set_color(&mut self, color: Rgba);

    fn fill_rect(&mut self, bounds: Bounds);

    fn draw_text(&mut self, text: &str, size: f64, location: Point);

    /// Paint a named image scaled to fill `bounds`.
    fn draw_image(&mut self, image: &str, bounds: Bounds);

    fn offset(&self) -> Point;

    fn set_offset(&mut self, offset: Point);

    fn clip(&self) -> Option<Bounds>;

    fn set_clip(&mut self, clip: Option<Bounds>);
}
