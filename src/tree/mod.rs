//! Component tree: arena-backed storage for components and containers.
//!
//! Uses slotmap for O(1) insert, remove, and lookup by [`ComponentId`].
//! Ownership flows from a container to its children only; the parent link is
//! a lookup in a secondary map.

mod draw;
mod hit;
pub mod node;
#[allow(clippy::module_inception)]
mod tree;
mod validate;

pub use node::{ComponentData, ComponentId, ContainerState};
pub use tree::ComponentTree;
