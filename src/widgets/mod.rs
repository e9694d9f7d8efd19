//! Built-in delegates: Panel, Label, Canvas.

pub mod canvas;
pub mod label;
pub mod panel;

pub use canvas::Canvas;
pub use label::{Label, TextAlign};
pub use panel::Panel;
