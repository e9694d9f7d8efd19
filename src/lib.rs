//! # trellis-ui
//!
//! The core of a retained-mode widget toolkit: a tree of visual components,
//! a size-negotiation engine, and a family of pluggable layouts.
//!
//! Components report a minimum and a preferred size. Containers combine the
//! sizes of their children through a [`Layout`](layout::Layout) and hand the
//! available space back down as bounds. Property changes only mark things
//! stale; sizes and arrangement are recomputed lazily right before drawing.
//!
//! ## Core Systems
//!
//! - **[`geometry`]**: Point, Dimension, Bounds, Insets
//! - **[`tree`]**: Slotmap-backed component arena, validation engine, hit testing, drawing
//! - **[`layout`]**: Absolute, Fill, Box, Border, Anchor and Stack layouts
//! - **[`widget`]**: The `ComponentUi` visual delegate trait
//! - **[`widgets`]**: Built-in delegates: Panel, Label, Canvas
//! - **[`event`]**: Mouse events bubbling from the hit target to its window
//! - **[`style`]**: Colors, fonts, per-component styles with a theme fallback
//! - **[`graphics`]**: The measurement and drawing capabilities a backend provides
//! - **[`context`]**: Per-frame processing and configuration
//! - **[`testing`]**: A recording backend for headless tests
//!
//! ## Example
//!
//! ```ignore
//! use trellis_ui::prelude::*;
//!
//! let mut tree = ComponentTree::new();
//! let window = tree.insert(
//!     Panel.into_container(BoxLayout::horizontal().with_spacing(4.0))
//!         .with_bounds(Bounds::new(0.0, 0.0, 200.0, 40.0)),
//! );
//! let label = tree.insert(Label::new("Hello").into_component());
//! tree.add(window, label)?;
//! tree.add_window(window)?;
//! ```

// Foundation
pub mod error;
pub mod geometry;
pub mod graphics;
pub mod style;

// Core systems
pub mod layout;
pub mod tree;

// Widget system
pub mod widget;
pub mod widgets;

// Events
pub mod event;

// Host integration
pub mod context;
pub mod testing;

/// The names most programs need.
pub mod prelude {
    pub use crate::context::{Context, ContextBuilder, EventLoopAware, InputSource};
    pub use crate::error::{Error, Result};
    pub use crate::event::{MouseAction, MouseButton, MouseEvent};
    pub use crate::geometry::{Bounds, Dimension, Insets, Point};
    pub use crate::graphics::{Graphics, Measure};
    pub use crate::layout::{
        AnchorLayout, Anchors, BorderLayout, BorderRegion, BoxAlign, BoxDirection, BoxLayout, FillLayout,
        Layout, LayoutConstraint, Orientation, StackLayout,
    };
    pub use crate::style::{Font, Rgba, StyleLookup, StyleMap};
    pub use crate::tree::{ComponentData, ComponentId, ComponentTree};
    pub use crate::widget::{Blank, ComponentUi, ComponentUiExt, DrawContext, SizeContext};
    pub use crate::widgets::{Canvas, Label, Panel, TextAlign};
}
