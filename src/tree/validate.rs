//! Validation engine: dirty flags going up, sizes and arrangement pulled down.
//!
//! A mutation marks the component and its ancestors invalid. Nothing is
//! recomputed until [`ComponentTree::validate`] runs, which walks children
//! first so that a container always sees fresh child sizes. Arrangement is
//! tracked separately by `layout_pending` and carried out by
//! [`ComponentTree::perform_layout`] under the `layout_running` guard.

use scopeguard::guard;
use tracing::{debug, trace};

use super::node::ComponentId;
use super::tree::ComponentTree;
use crate::error::{Error, Result};
use crate::geometry::Dimension;
use crate::graphics::Measure;
use crate::layout::LayoutItem;
use crate::style::StyleChain;
use crate::widget::SizeContext;

impl ComponentTree {
    // -----------------------------------------------------------------------
    // Invalidation
    // -----------------------------------------------------------------------

    /// Mark a component stale, together with every ancestor up to the first
    /// container that is in the middle of its own layout pass.
    pub fn invalidate(&mut self, id: ComponentId) -> Result<()> {
        self.data(id)?;
        self.invalidate_from(id);
        Ok(())
    }

    pub(crate) fn invalidate_from(&mut self, id: ComponentId) {
        let mut current = Some(id);
        while let Some(cid) = current {
            let Some(data) = self.nodes.get_mut(cid) else { break };
            if data.is_layout_running() {
                trace!(id = ?cid, "invalidation stopped at running layout");
                break;
            }
            data.valid = false;
            if let Some(state) = data.container.as_mut() {
                state.layout_pending = true;
            }
            current = self.parent(cid);
        }
    }

    /// Ask a container to re-arrange its children before it next draws.
    /// Ignored while the container is already arranging.
    pub fn request_layout(&mut self, id: ComponentId) {
        if let Some(state) = self.nodes.get_mut(id).and_then(|d| d.container.as_mut()) {
            if !state.layout_running {
                state.layout_pending = true;
            }
        }
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    /// Bring the cached sizes of `id` and its visible descendants up to date.
    ///
    /// Valid components are not recomputed, so calling this twice in a row
    /// does not consult any delegate the second time.
    pub fn validate(&mut self, id: ComponentId, measure: &dyn Measure) -> Result<()> {
        self.data(id)?;
        self.validate_inner(id, measure, false);
        Ok(())
    }

    /// Like [`validate`](Self::validate), but recomputes every visible
    /// component regardless of its flag.
    pub fn validate_forced(&mut self, id: ComponentId, measure: &dyn Measure) -> Result<()> {
        self.data(id)?;
        self.validate_inner(id, measure, true);
        Ok(())
    }

    fn validate_inner(&mut self, id: ComponentId, measure: &dyn Measure, force: bool) {
        let Some(data) = self.nodes.get(id) else { return };
        // Hidden components keep their stale sizes and take no space.
        if !data.visible {
            return;
        }

        for child in self.children(id).to_vec() {
            self.validate_inner(child, measure, force);
        }

        if self.nodes[id].valid && !force {
            return;
        }

        let (minimum, preferred) = self.compute_sizes(id, measure);
        let data = &mut self.nodes[id];
        data.minimum_size = minimum;
        data.preferred_size = preferred;
        data.valid = true;
        debug!(?id, ui = data.ui.name(), ?minimum, ?preferred, "validated");

        if let Some(parent) = self.parent(id) {
            self.request_layout(parent);
        }
        if self.is_window(id) {
            self.clamp_window(id);
        }
    }

    /// `(minimum, preferred)`, overrides first, preferred never below minimum.
    fn compute_sizes(&self, id: ComponentId, measure: &dyn Measure) -> (Dimension, Dimension) {
        let data = &self.nodes[id];

        let (minimum, preferred) = match data.container.as_ref() {
            Some(state) => {
                let items = self.layout_items(id);
                let minimum = data
                    .minimum_size_override
                    .unwrap_or_else(|| state.layout.minimum_size(&items));
                let preferred = data
                    .preferred_size_override
                    .unwrap_or_else(|| state.layout.preferred_size(&items, data.bounds.size()));
                (minimum, preferred)
            }
            None => {
                let cx = SizeContext {
                    measure,
                    style: StyleChain::new(&data.style, &self.theme, data.ui.name()),
                };
                let minimum = data.minimum_size_override.unwrap_or_else(|| data.ui.minimum_size(&cx));
                let preferred = data.preferred_size_override.unwrap_or_else(|| data.ui.preferred_size(&cx));
                (minimum, preferred)
            }
        };

        (minimum, preferred.max(minimum))
    }

    /// Re-apply `max(requested, minimum)` to a top-level window.
    pub(crate) fn clamp_window(&mut self, id: ComponentId) {
        let Some(data) = self.nodes.get(id) else { return };
        let requested = self.requested.get(id).copied().unwrap_or(data.bounds.size());
        let effective = requested.max(data.minimum_size);
        if effective != data.bounds.size() {
            let bounds = data.bounds.with_size(effective);
            self.apply_bounds(id, bounds);
        }
    }

    // -----------------------------------------------------------------------
    // Layout
    // -----------------------------------------------------------------------

    /// Snapshot the children of `id` for its layout.
    pub fn layout_items(&self, id: ComponentId) -> Vec<LayoutItem> {
        self.children(id)
            .iter()
            .filter_map(|&child| {
                let data = self.nodes.get(child)?;
                Some(LayoutItem {
                    id: child,
                    visible: data.visible,
                    minimum_size: data.minimum_size,
                    preferred_size: data.preferred_size,
                    bounds: data.bounds,
                    constraint: data.constraint.clone(),
                })
            })
            .collect()
    }

    /// Re-arrange the children of a pending container.
    ///
    /// A failing layout is reported to the error handler and the children
    /// keep their previous bounds. The pending flag and the running guard
    /// are cleared on every exit path.
    pub fn perform_layout(&mut self, id: ComponentId) -> Result<()> {
        let data = self.data(id)?;
        let state = data.container.as_ref().ok_or(Error::NotAContainer(id))?;
        if !state.layout_pending || state.layout_running {
            return Ok(());
        }

        let area = data.bounds.size().to_bounds();
        let items = self.layout_items(id);
        if let Some(state) = self.nodes[id].container.as_mut() {
            state.layout_running = true;
        }

        let mut tree = guard(self, move |tree| {
            if let Some(state) = tree.nodes.get_mut(id).and_then(|d| d.container.as_mut()) {
                state.layout_pending = false;
                state.layout_running = false;
            }
        });

        let result = match tree.nodes[id].layout() {
            Some(layout) => layout.perform(id, &items, area),
            None => Ok(Vec::new()),
        };

        match result {
            Ok(assignments) => {
                debug!(?id, count = assignments.len(), "layout performed");
                for (child, bounds) in assignments {
                    // Layouts only ever place the items they were given.
                    if tree.parent(child) == Some(id) {
                        tree.apply_bounds(child, bounds);
                    }
                }
            }
            Err(err) => tree.report(&err),
        }
        Ok(())
    }

    /// Validate `root`, then arrange every pending visible container below
    /// it, parents before children.
    pub fn arrange(&mut self, root: ComponentId, measure: &dyn Measure) -> Result<()> {
        self.validate(root, measure)?;
        self.arrange_inner(root);
        Ok(())
    }

    fn arrange_inner(&mut self, id: ComponentId) {
        let Some(data) = self.nodes.get(id) else { return };
        if !data.visible || !data.is_container() {
            return;
        }
        if let Err(err) = self.perform_layout(id) {
            self.report(&err);
        }
        for child in self.children(id).to_vec() {
            self.arrange_inner(child);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::geometry::{Bounds, Insets};
    use crate::layout::{BorderLayout, BorderRegion, BoxLayout, FillLayout, LayoutConstraint};
    use crate::testing::{FixedSize, RecordingGraphics};
    use crate::widget::{Blank, ComponentUiExt};

    fn fixed(tree: &mut ComponentTree, min: (f64, f64), pref: (f64, f64)) -> ComponentId {
        let ui = FixedSize::new(Dimension::new(min.0, min.1), Dimension::new(pref.0, pref.1));
        tree.insert(ui.into_component())
    }

    #[test]
    fn validate_computes_leaf_and_container_sizes() {
        let g = RecordingGraphics::new();
        let mut tree = ComponentTree::new();
        let root = tree.insert(Blank.into_container(BoxLayout::horizontal().with_spacing(5.0)));
        let a = fixed(&mut tree, (10.0, 5.0), (30.0, 20.0));
        let b = fixed(&mut tree, (20.0, 8.0), (40.0, 10.0));
        tree.add(root, a).unwrap();
        tree.add(root, b).unwrap();

        tree.validate(root, &g).unwrap();
        assert!(tree[root].is_valid());
        assert_eq!(tree[a].preferred_size(), Dimension::new(30.0, 20.0));
        assert_eq!(tree[root].minimum_size(), Dimension::new(35.0, 8.0));
        assert_eq!(tree[root].preferred_size(), Dimension::new(75.0, 20.0));
    }

    #[test]
    fn preferred_never_below_minimum() {
        let g = RecordingGraphics::new();
        let mut tree = ComponentTree::new();
        let leaf = fixed(&mut tree, (50.0, 50.0), (10.0, 80.0));
        tree.validate(leaf, &g).unwrap();
        assert_eq!(tree[leaf].preferred_size(), Dimension::new(50.0, 80.0));

        tree.set_preferred_size_override(leaf, Some(Dimension::new(5.0, 5.0))).unwrap();
        tree.validate(leaf, &g).unwrap();
        assert_eq!(tree[leaf].preferred_size(), Dimension::new(50.0, 50.0));
    }

    #[test]
    fn overrides_skip_the_delegate() {
        let g = RecordingGraphics::new();
        let mut tree = ComponentTree::new();
        let ui = FixedSize::new(Dimension::new(1.0, 1.0), Dimension::new(2.0, 2.0));
        let calls = ui.calls();
        let leaf = tree.insert(
            ui.into_component()
                .with_minimum_size(Dimension::new(3.0, 3.0))
                .with_preferred_size(Dimension::new(4.0, 4.0)),
        );
        tree.validate(leaf, &g).unwrap();
        assert_eq!(calls.get(), 0);
        assert_eq!(tree[leaf].minimum_size(), Dimension::new(3.0, 3.0));
        assert_eq!(tree[leaf].preferred_size(), Dimension::new(4.0, 4.0));
    }

    #[test]
    fn validate_is_idempotent() {
        let g = RecordingGraphics::new();
        let mut tree = ComponentTree::new();
        let ui = FixedSize::new(Dimension::new(1.0, 1.0), Dimension::new(2.0, 2.0));
        let calls = ui.calls();
        let leaf = tree.insert(ui.into_component());

        tree.validate(leaf, &g).unwrap();
        let after_first = calls.get();
        tree.validate(leaf, &g).unwrap();
        assert_eq!(calls.get(), after_first);

        tree.validate_forced(leaf, &g).unwrap();
        assert_eq!(calls.get(), after_first * 2);
    }

    #[test]
    fn invalidation_propagates_to_the_root() {
        let g = RecordingGraphics::new();
        let mut tree = ComponentTree::new();
        let root = tree.insert(Blank.into_container(FillLayout::default()));
        let mid = tree.insert(Blank.into_container(FillLayout::default()));
        let leaf = fixed(&mut tree, (1.0, 1.0), (1.0, 1.0));
        tree.add(root, mid).unwrap();
        tree.add(mid, leaf).unwrap();
        tree.arrange(root, &g).unwrap();
        assert!(!tree[root].is_layout_pending());

        tree.invalidate(leaf).unwrap();
        assert!(!tree[leaf].is_valid());
        assert!(!tree[mid].is_valid());
        assert!(!tree[root].is_valid());
        assert!(tree[mid].is_layout_pending());
        assert!(tree[root].is_layout_pending());
    }

    #[test]
    fn invalidation_stops_at_running_layout() {
        let mut tree = ComponentTree::new();
        let root = tree.insert(Blank.into_container(FillLayout::default()));
        let leaf = tree.insert(Blank.into_component());
        tree.add(root, leaf).unwrap();
        tree.nodes[root].valid = true;
        if let Some(state) = tree.nodes[root].container.as_mut() {
            state.layout_pending = false;
            state.layout_running = true;
        }

        tree.invalidate(leaf).unwrap();
        assert!(!tree[leaf].is_valid());
        assert!(tree[root].is_valid());
        tree.request_layout(root);
        assert!(!tree[root].is_layout_pending());
    }

    #[test]
    fn child_resize_requests_parent_layout() {
        let g = RecordingGraphics::new();
        let mut tree = ComponentTree::new();
        let root = tree.insert(Blank.into_container(FillLayout::default()).with_bounds(Bounds::new(0.0, 0.0, 50.0, 50.0)));
        let leaf = fixed(&mut tree, (1.0, 1.0), (1.0, 1.0));
        tree.add(root, leaf).unwrap();
        tree.arrange(root, &g).unwrap();
        assert_eq!(tree[leaf].bounds(), Bounds::new(0.0, 0.0, 50.0, 50.0));

        tree.set_bounds(leaf, Bounds::new(0.0, 0.0, 10.0, 10.0)).unwrap();
        assert!(tree[root].is_layout_pending());
        tree.perform_layout(root).unwrap();
        assert_eq!(tree[leaf].bounds(), Bounds::new(0.0, 0.0, 50.0, 50.0));
        assert!(!tree[root].is_layout_pending());
    }

    #[test]
    fn perform_layout_clears_pending_and_guard() {
        let g = RecordingGraphics::new();
        let mut tree = ComponentTree::new();
        let root = tree.insert(
            Blank.into_container(FillLayout::new(Insets::all(10.0))).with_bounds(Bounds::new(0.0, 0.0, 100.0, 100.0)),
        );
        let leaf = fixed(&mut tree, (5.0, 5.0), (5.0, 5.0));
        tree.add(root, leaf).unwrap();
        tree.validate(root, &g).unwrap();
        tree.perform_layout(root).unwrap();

        assert_eq!(tree[leaf].bounds(), Bounds::new(10.0, 10.0, 80.0, 80.0));
        assert!(!tree[root].is_layout_pending());
        assert!(!tree[root].is_layout_running());
    }

    #[test]
    fn failed_layout_is_reported_and_released() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let g = RecordingGraphics::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut tree = ComponentTree::new();
        tree.set_error_handler(Box::new(move |e| sink.borrow_mut().push(e.to_string())));

        let root = tree.insert(Blank.into_container(BorderLayout::new()).with_bounds(Bounds::new(0.0, 0.0, 100.0, 100.0)));
        let leaf = tree.insert(Blank.into_component());
        tree.add_with(root, leaf, LayoutConstraint::border(BorderRegion::Top)).unwrap();
        tree.validate(root, &g).unwrap();

        // Corrupt the region table behind the tree's back.
        let stranger = tree.insert(Blank.into_component());
        if let Some(state) = tree.nodes[root].container.as_mut() {
            state.layout.attach(stranger, &LayoutConstraint::border(BorderRegion::Center));
        }

        tree.perform_layout(root).unwrap();
        assert_eq!(seen.borrow().len(), 1);
        assert!(!tree[root].is_layout_running());
        assert!(!tree[root].is_layout_pending());
        assert_eq!(tree[leaf].bounds(), Bounds::EMPTY);
    }

    #[test]
    fn hidden_children_are_skipped() {
        let g = RecordingGraphics::new();
        let mut tree = ComponentTree::new();
        let root = tree.insert(Blank.into_container(BoxLayout::horizontal()).with_bounds(Bounds::new(0.0, 0.0, 100.0, 20.0)));
        let a = fixed(&mut tree, (10.0, 10.0), (40.0, 20.0));
        let b = fixed(&mut tree, (10.0, 10.0), (40.0, 20.0));
        tree.add(root, a).unwrap();
        tree.add(root, b).unwrap();
        tree.arrange(root, &g).unwrap();
        assert_eq!(tree[root].preferred_size(), Dimension::new(80.0, 20.0));
        let a_bounds = tree[a].bounds();

        tree.set_visible(b, false).unwrap();
        tree.arrange(root, &g).unwrap();
        assert_eq!(tree[root].preferred_size(), Dimension::new(40.0, 20.0));
        assert!(!tree[b].is_valid());
        assert_eq!(tree[a].bounds().size(), a_bounds.size());
    }

    #[test]
    fn perform_layout_on_a_leaf() {
        let mut tree = ComponentTree::new();
        let leaf = tree.insert(Blank.into_component());
        assert!(matches!(tree.perform_layout(leaf).unwrap_err(), Error::NotAContainer(_)));
    }
}
