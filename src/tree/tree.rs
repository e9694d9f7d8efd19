//! Tree operations: insert, add, remove, dispose, walk, and property setters.
//!
//! Every setter that can change a component's size hints ends in
//! [`ComponentTree::invalidate`]; setters that only move things request a
//! layout from the parent instead. Nothing is recomputed eagerly.

use std::collections::VecDeque;
use std::mem;
use std::ops::Index;

use slotmap::{SecondaryMap, SlotMap};
use tracing::debug;

use super::node::{ComponentData, ComponentId};
use crate::error::{default_error_handler, Error, ErrorHandler, Result};
use crate::event::MouseHandler;
use crate::geometry::{Bounds, Dimension, Point};
use crate::layout::{Layout, LayoutConstraint};
use crate::style::{Font, Rgba, StyleMap};
use crate::widget::ComponentUi;

/// Empty slice constant for returning when a component has no children.
const EMPTY_CHILDREN: &[ComponentId] = &[];

/// The component tree, backed by a slotmap arena.
///
/// All components live in a single `SlotMap`. Parent/child relationships are
/// stored in secondary maps; the parent link is a lookup, never ownership.
/// Top-level windows are kept in z-order (last is topmost).
pub struct ComponentTree {
    pub(crate) nodes: SlotMap<ComponentId, ComponentData>,
    children: SecondaryMap<ComponentId, Vec<ComponentId>>,
    parent: SecondaryMap<ComponentId, ComponentId>,
    pub(crate) windows: Vec<ComponentId>,
    /// Window sizes as last requested, before the minimum-size clamp.
    pub(crate) requested: SecondaryMap<ComponentId, Dimension>,
    pub(crate) handlers: SecondaryMap<ComponentId, Vec<MouseHandler>>,
    /// Components whose handlers were cleared since their dispatch began.
    pub(crate) cleared: SecondaryMap<ComponentId, ()>,
    pub(crate) theme: StyleMap,
    error_handler: ErrorHandler,
}

impl ComponentTree {
    /// Create an empty tree that logs reported errors.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            children: SecondaryMap::new(),
            parent: SecondaryMap::new(),
            windows: Vec::new(),
            requested: SecondaryMap::new(),
            handlers: SecondaryMap::new(),
            cleared: SecondaryMap::new(),
            theme: StyleMap::new(),
            error_handler: default_error_handler(),
        }
    }

    // -----------------------------------------------------------------------
    // Errors and theme
    // -----------------------------------------------------------------------

    /// Replace the handler that receives layout, draw and input failures.
    pub fn set_error_handler(&mut self, handler: ErrorHandler) {
        self.error_handler = handler;
    }

    /// Hand a recoverable error to the error handler.
    pub fn report(&mut self, error: &Error) {
        (self.error_handler)(error);
    }

    /// The fallback styles consulted after a component's own.
    pub fn theme(&self) -> &StyleMap {
        &self.theme
    }

    /// Replace the theme. Every component is invalidated.
    pub fn set_theme(&mut self, theme: StyleMap) {
        self.theme = theme;
        for (_, data) in self.nodes.iter_mut() {
            data.valid = false;
            if let Some(state) = data.container.as_mut() {
                state.layout_pending = true;
            }
        }
    }

    // -----------------------------------------------------------------------
    // Structure
    // -----------------------------------------------------------------------

    /// Insert a detached component. It shows up once added to a container
    /// or registered as a window.
    pub fn insert(&mut self, data: ComponentData) -> ComponentId {
        let id = self.nodes.insert(data);
        self.children.insert(id, Vec::new());
        id
    }

    /// Make `child` the last child of `parent`, using the child's stored
    /// constraint.
    pub fn add(&mut self, parent: ComponentId, child: ComponentId) -> Result<()> {
        let constraint = self.data(child)?.constraint.clone();
        self.add_with(parent, child, constraint)
    }

    /// Make `child` the last child of `parent` under `constraint`.
    ///
    /// A child that already has a parent is moved; re-adding to the same
    /// parent moves it to the end of the z-order.
    pub fn add_with(
        &mut self,
        parent: ComponentId,
        child: ComponentId,
        constraint: impl Into<LayoutConstraint>,
    ) -> Result<()> {
        let constraint = constraint.into();
        self.data(child)?;
        let layout = self.data(parent)?.layout().ok_or(Error::NotAContainer(parent))?;

        if parent == child || self.ancestors(parent).contains(&child) {
            return Err(Error::Cycle { parent, child });
        }
        layout.check_constraint(&constraint)?;

        self.detach(child);
        self.windows.retain(|&w| w != child);
        self.requested.remove(child);

        self.nodes[child].constraint = constraint.clone();
        self.parent.insert(child, parent);
        if let Some(siblings) = self.children.get_mut(parent) {
            siblings.push(child);
        }
        if let Some(state) = self.nodes[parent].container.as_mut() {
            state.layout.attach(child, &constraint);
        }

        debug!(?parent, ?child, "component added");
        self.invalidate_from(parent);
        Ok(())
    }

    /// Detach `child` from its parent. The component stays alive and may be
    /// added again; a component without a parent is left as is.
    pub fn remove(&mut self, child: ComponentId) -> Result<()> {
        self.data(child)?;
        if let Some(parent) = self.detach(child) {
            debug!(?parent, ?child, "component removed");
            self.invalidate_from(parent);
        }
        Ok(())
    }

    /// Unlink `child` from its parent's children and layout.
    fn detach(&mut self, child: ComponentId) -> Option<ComponentId> {
        let parent = self.parent.remove(child)?;
        if let Some(siblings) = self.children.get_mut(parent) {
            siblings.retain(|&c| c != child);
        }
        if let Some(state) = self.nodes.get_mut(parent).and_then(|d| d.container.as_mut()) {
            state.layout.detach(child);
        }
        self.invalidate_from(parent);
        Some(parent)
    }

    /// Destroy a component and its whole subtree.
    ///
    /// Returns the `ComponentData` of `id` itself.
    pub fn dispose(&mut self, id: ComponentId) -> Result<ComponentData> {
        self.data(id)?;
        self.detach(id);

        let mut to_remove = VecDeque::new();
        to_remove.push_back(id);
        let mut removed = None;

        while let Some(current) = to_remove.pop_front() {
            if let Some(kids) = self.children.remove(current) {
                to_remove.extend(kids);
            }
            self.parent.remove(current);
            self.handlers.remove(current);
            self.cleared.remove(current);
            self.requested.remove(current);
            self.windows.retain(|&w| w != current);

            let data = self.nodes.remove(current);
            if current == id {
                removed = data;
            }
        }

        debug!(?id, "component disposed");
        removed.ok_or(Error::UnknownComponent(id))
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Immutable access to a component's data.
    pub fn get(&self, id: ComponentId) -> Option<&ComponentData> {
        self.nodes.get(id)
    }

    pub(crate) fn data(&self, id: ComponentId) -> Result<&ComponentData> {
        self.nodes.get(id).ok_or(Error::UnknownComponent(id))
    }

    pub(crate) fn data_mut(&mut self, id: ComponentId) -> Result<&mut ComponentData> {
        self.nodes.get_mut(id).ok_or(Error::UnknownComponent(id))
    }

    /// The parent of a component, if it has one.
    pub fn parent(&self, id: ComponentId) -> Option<ComponentId> {
        self.parent.get(id).copied()
    }

    /// Children in z-order. Empty for leaves and unknown ids.
    pub fn children(&self, id: ComponentId) -> &[ComponentId] {
        self.children.get(id).map(Vec::as_slice).unwrap_or(EMPTY_CHILDREN)
    }

    /// Ancestors from the immediate parent up to the root.
    pub fn ancestors(&self, id: ComponentId) -> Vec<ComponentId> {
        let mut result = Vec::new();
        let mut current = id;
        while let Some(p) = self.parent.get(current).copied() {
            result.push(p);
            current = p;
        }
        result
    }

    /// The top of the tree containing `id`.
    pub fn root_of(&self, id: ComponentId) -> ComponentId {
        self.ancestors(id).last().copied().unwrap_or(id)
    }

    /// Number of live components.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: ComponentId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Pre-order depth-first traversal starting from `start`.
    pub fn walk_depth_first(&self, start: ComponentId) -> Vec<ComponentId> {
        let mut result = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if !self.nodes.contains_key(current) {
                continue;
            }
            result.push(current);
            // Reverse so the first child is visited first.
            stack.extend(self.children(current).iter().rev());
        }
        result
    }

    // -----------------------------------------------------------------------
    // Geometry setters
    // -----------------------------------------------------------------------

    /// Assign new bounds. A top-level window never shrinks below its
    /// minimum size; the requested size is remembered and re-applied when
    /// the minimum changes.
    pub fn set_bounds(&mut self, id: ComponentId, bounds: Bounds) -> Result<()> {
        let minimum = self.data(id)?.minimum_size;
        let bounds = if self.is_window(id) {
            self.requested.insert(id, bounds.size());
            bounds.with_size(bounds.size().max(minimum))
        } else {
            bounds
        };
        self.apply_bounds(id, bounds);
        Ok(())
    }

    pub fn move_to(&mut self, id: ComponentId, location: Point) -> Result<()> {
        let bounds = self.data(id)?.bounds;
        self.apply_bounds(id, bounds.move_to(location));
        Ok(())
    }

    pub fn move_by(&mut self, id: ComponentId, offset: Point) -> Result<()> {
        let bounds = self.data(id)?.bounds;
        self.apply_bounds(id, bounds.move_by(offset));
        Ok(())
    }

    /// Store bounds without the window clamp. Used by layouts and setters.
    pub(crate) fn apply_bounds(&mut self, id: ComponentId, bounds: Bounds) {
        let Some(data) = self.nodes.get_mut(id) else { return };
        if data.bounds == bounds {
            return;
        }

        let resized = data.bounds.size() != bounds.size();
        let tracks_size = matches!(data.layout(), Some(Layout::Absolute));
        data.bounds = bounds;
        if resized {
            // An absolute container prefers whatever size it currently has.
            if tracks_size {
                self.invalidate_from(id);
            }
            self.request_layout(id);
        }
        if let Some(parent) = self.parent(id) {
            self.request_layout(parent);
        }
    }

    // -----------------------------------------------------------------------
    // Property setters
    // -----------------------------------------------------------------------

    /// Show or hide a component. Hidden components take no space.
    pub fn set_visible(&mut self, id: ComponentId, visible: bool) -> Result<()> {
        let data = self.data_mut(id)?;
        if data.visible != visible {
            data.visible = visible;
            self.invalidate_from(id);
        }
        Ok(())
    }

    pub fn set_minimum_size_override(&mut self, id: ComponentId, size: Option<Dimension>) -> Result<()> {
        let data = self.data_mut(id)?;
        if data.minimum_size_override != size {
            data.minimum_size_override = size;
            self.invalidate_from(id);
        }
        Ok(())
    }

    pub fn set_preferred_size_override(&mut self, id: ComponentId, size: Option<Dimension>) -> Result<()> {
        let data = self.data_mut(id)?;
        if data.preferred_size_override != size {
            data.preferred_size_override = size;
            self.invalidate_from(id);
        }
        Ok(())
    }

    pub fn set_color(&mut self, id: ComponentId, key: &str, color: Rgba) -> Result<()> {
        if self.data_mut(id)?.style.set_color(key, color) {
            self.invalidate_from(id);
        }
        Ok(())
    }

    pub fn clear_color(&mut self, id: ComponentId, key: &str) -> Result<()> {
        if self.data_mut(id)?.style.clear_color(key) {
            self.invalidate_from(id);
        }
        Ok(())
    }

    pub fn set_font(&mut self, id: ComponentId, key: &str, font: Font) -> Result<()> {
        if self.data_mut(id)?.style.set_font(key, font) {
            self.invalidate_from(id);
        }
        Ok(())
    }

    pub fn clear_font(&mut self, id: ComponentId, key: &str) -> Result<()> {
        if self.data_mut(id)?.style.clear_font(key) {
            self.invalidate_from(id);
        }
        Ok(())
    }

    /// Mutate the delegate as its concrete type, then invalidate.
    pub fn update_ui<T: ComponentUi>(&mut self, id: ComponentId, f: impl FnOnce(&mut T)) -> Result<()> {
        let data = self.data_mut(id)?;
        let name = data.ui.name().to_owned();
        let ui = data.ui.as_any_mut().downcast_mut::<T>().ok_or_else(|| Error::InvalidArgument {
            name: "ui",
            reason: format!("component is driven by a '{name}' delegate of another type"),
        })?;
        f(ui);
        self.invalidate_from(id);
        Ok(())
    }

    /// Change the parameters of a container's layout, then invalidate.
    ///
    /// The layout kind is fixed at construction; a closure that swaps the
    /// variant is rolled back and rejected.
    pub fn update_layout(&mut self, id: ComponentId, f: impl FnOnce(&mut Layout)) -> Result<()> {
        let state = self.data_mut(id)?.container.as_mut().ok_or(Error::NotAContainer(id))?;

        let before = state.layout.clone();
        f(&mut state.layout);

        if mem::discriminant(&before) != mem::discriminant(&state.layout) {
            let attempted = mem::replace(&mut state.layout, before);
            return Err(Error::InvalidArgument {
                name: "layout",
                reason: format!(
                    "cannot change a {} layout into a {} layout",
                    state.layout.name(),
                    attempted.name()
                ),
            });
        }

        self.invalidate_from(id);
        Ok(())
    }
}

impl Default for ComponentTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<ComponentId> for ComponentTree {
    type Output = ComponentData;

    /// # Panics
    ///
    /// Panics if `id` is not a live component.
    fn index(&self, id: ComponentId) -> &ComponentData {
        &self.nodes[id]
    }
}
