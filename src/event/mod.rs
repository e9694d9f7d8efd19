//! Event system: mouse input and bubbling dispatch through the tree.

pub mod handler;
pub mod input;

pub use handler::MouseHandler;
pub use input::{MouseAction, MouseButton, MouseEvent};
