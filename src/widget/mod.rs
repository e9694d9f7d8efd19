//! Widget system: the visual delegate trait and its contexts.

pub mod traits;

pub use traits::{Blank, ComponentUi, ComponentUiExt, DrawContext, SizeContext};
