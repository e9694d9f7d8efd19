//! Headless testing helpers: a recording graphics backend and a counting
//! delegate.
//!
//! Use [`RecordingGraphics`] both as the [`Measure`](crate::graphics::Measure)
//! for validation and as the draw target, then compare
//! [`RecordingGraphics::render`] against an inline snapshot.
//! [`draw_to_string`] does all of that in one call.

pub mod fixed;
pub mod recording;

pub use fixed::FixedSize;
pub use recording::{DrawOp, RecordingGraphics};

use crate::error::Result;
use crate::tree::{ComponentId, ComponentTree};

/// Validate and draw `id`, returning the recorded operations as text.
///
/// # Examples
///
/// ```ignore
/// let output = draw_to_string(&mut tree, window)?;
/// insta::assert_snapshot!(output, @"fill 0,0 100x50");
/// ```
pub fn draw_to_string(tree: &mut ComponentTree, id: ComponentId) -> Result<String> {
    let mut g = RecordingGraphics::new();
    tree.validate(id, &g)?;
    tree.draw(id, &mut g)?;
    Ok(g.render())
}
