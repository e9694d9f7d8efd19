//! A headless [`Graphics`] that records what was drawn.
//!
//! Operations are stored in screen space: the current offset is applied and
//! rectangles are cut to the current clip. [`RecordingGraphics::render`]
//! turns the log into one line per operation, which reads well in inline
//! snapshots.

use std::collections::HashMap;
use std::fmt;

use crate::geometry::{Bounds, Dimension, Point};
use crate::graphics::{Graphics, Measure};
use crate::style::{Font, Rgba};

// ---------------------------------------------------------------------------
// DrawOp
// ---------------------------------------------------------------------------

/// One recorded drawing call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Color(Rgba),
    FillRect(Bounds),
    Text { text: String, size: f64, location: Point },
    Image { image: String, bounds: Bounds },
}

impl fmt::Display for DrawOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(c) => write!(f, "color {},{},{},{}", c.r, c.g, c.b, c.a),
            Self::FillRect(b) => write!(f, "fill {},{} {}x{}", b.x, b.y, b.width, b.height),
            Self::Text { text, size, location } => {
                write!(f, "text {text:?} {size} at {},{}", location.x, location.y)
            }
            Self::Image { image, bounds: b } => write!(f, "image {image:?} {},{} {}x{}", b.x, b.y, b.width, b.height),
        }
    }
}

// ---------------------------------------------------------------------------
// RecordingGraphics
// ---------------------------------------------------------------------------

/// Records drawing calls and measures text with a fixed-width rule: every
/// character is half the text size wide, and a line is the text size tall.
/// Images are zero-sized unless registered with
/// [`with_image`](Self::with_image).
#[derive(Clone, Debug, Default)]
pub struct RecordingGraphics {
    ops: Vec<DrawOp>,
    images: HashMap<String, Dimension>,
    offset: Point,
    clip: Option<Bounds>,
}

impl RecordingGraphics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Give `image` a natural size (builder).
    pub fn with_image(mut self, image: impl Into<String>, size: Dimension) -> Self {
        self.images.insert(image.into(), size);
        self
    }

    fn visible(&self, bounds: Bounds) -> Option<Bounds> {
        let absolute = bounds.move_by(self.offset);
        match self.clip {
            Some(clip) => clip.intersection(absolute),
            None => Some(absolute),
        }
    }

    /// Everything recorded so far.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Return the recorded operations and start a fresh log.
    pub fn take(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }

    /// One line per operation, joined with `'\n'`.
    pub fn render(&self) -> String {
        self.ops.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n")
    }
}

impl Measure for RecordingGraphics {
    fn text_extent(&self, text: &str, _font: &Font, size: f64) -> Dimension {
        Dimension::new(text.chars().count() as f64 * size / 2.0, size)
    }

    fn image_size(&self, image: &str) -> Dimension {
        self.images.get(image).copied().unwrap_or(Dimension::ZERO)
    }
}

impl Graphics for RecordingGraphics {
    fn set_color(&mut self, color: Rgba) {
        self.ops.push(DrawOp::Color(color));
    }

    fn fill_rect(&mut self, bounds: Bounds) {
        if let Some(rect) = self.visible(bounds) {
            self.ops.push(DrawOp::FillRect(rect));
        }
    }

    fn draw_text(&mut self, text: &str, size: f64, location: Point) {
        self.ops.push(DrawOp::Text {
            text: text.to_owned(),
            size,
            location: location + self.offset,
        });
    }

    /// Records the full destination, not the clipped part, since clipping
    /// an image changes its scale.
    fn draw_image(&mut self, image: &str, bounds: Bounds) {
        if self.visible(bounds).is_some() {
            self.ops.push(DrawOp::Image {
                image: image.to_owned(),
                bounds: bounds.move_by(self.offset),
            });
        }
    }

    fn offset(&self) -> Point {
        self.offset
    }

    fn set_offset(&mut self, offset: Point) {
        self.offset = offset;
    }

    fn clip(&self) -> Option<Bounds> {
        self.clip
    }

    fn set_clip(&mut self, clip: Option<Bounds>) {
        self.clip = clip;
    }
}
