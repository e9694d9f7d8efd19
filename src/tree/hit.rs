//! Top-level windows, hit testing, and coordinate translation.
//!
//! Bounds are parent-local. A window's bounds are in screen coordinates, so
//! the absolute position of a component is the sum of its own location and
//! those of all its ancestors.

use tracing::debug;

use super::node::ComponentId;
use super::tree::ComponentTree;
use crate::error::Result;
use crate::geometry::Point;

impl ComponentTree {
    // -----------------------------------------------------------------------
    // Windows
    // -----------------------------------------------------------------------

    /// Register `id` as the topmost window. A component that sits inside a
    /// container is detached from it first; an existing window is raised.
    pub fn add_window(&mut self, id: ComponentId) -> Result<()> {
        let size = self.data(id)?.bounds.size();
        self.remove(id)?;
        self.windows.retain(|&w| w != id);
        self.windows.push(id);
        self.requested.insert(id, size);
        debug!(?id, "window added");
        self.clamp_window(id);
        Ok(())
    }

    /// Stop treating `id` as a window. The component stays alive.
    pub fn remove_window(&mut self, id: ComponentId) -> Result<()> {
        self.data(id)?;
        self.windows.retain(|&w| w != id);
        self.requested.remove(id);
        Ok(())
    }

    /// Windows in z-order, bottom first.
    pub fn windows(&self) -> &[ComponentId] {
        &self.windows
    }

    pub fn is_window(&self, id: ComponentId) -> bool {
        self.windows.contains(&id)
    }

    // -----------------------------------------------------------------------
    // Hit testing
    // -----------------------------------------------------------------------

    /// The deepest visible component under `point`, starting at `id`.
    ///
    /// `point` is in the coordinate space of `id`'s parent (screen space for
    /// a window). Edges count as inside. Later children are on top.
    pub fn component_at(&self, id: ComponentId, point: Point) -> Option<ComponentId> {
        let data = self.nodes.get(id)?;
        if !data.visible || !data.bounds.contains(point) {
            return None;
        }

        let local = point - data.bounds.location();
        self.children(id)
            .iter()
            .rev()
            .find_map(|&child| self.component_at(child, local))
            .or(Some(id))
    }

    /// The topmost visible window containing the screen `point`.
    pub fn window_at(&self, point: Point) -> Option<ComponentId> {
        self.windows.iter().rev().copied().find(|&w| {
            self.nodes
                .get(w)
                .is_some_and(|data| data.visible && data.bounds.contains(point))
        })
    }

    // -----------------------------------------------------------------------
    // Coordinates
    // -----------------------------------------------------------------------

    /// Screen position of the top-left corner of `id`.
    pub fn offset_of(&self, id: ComponentId) -> Result<Point> {
        let own = self.data(id)?.bounds.location();
        Ok(self
            .ancestors(id)
            .into_iter()
            .filter_map(|a| self.nodes.get(a))
            .fold(own, |acc, data| acc + data.bounds.location()))
    }

    /// Translate a screen point into the local space of `id`.
    pub fn position_of(&self, id: ComponentId, point: Point) -> Result<Point> {
        Ok(point - self.offset_of(id)?)
    }

    /// Whether `point` (screen space) is inside `id`. Fails for unknown ids.
    pub fn hits(&self, id: ComponentId, point: Point) -> Result<bool> {
        let local = self.position_of(id, point)?;
        let size = self.data(id)?.bounds.size();
        Ok(size.to_bounds().contains(local))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::geometry::{Bounds, Dimension};
    use crate::layout::{Layout, StackLayout};
    use crate::testing::RecordingGraphics;
    use crate::widget::{Blank, ComponentUiExt};

    fn window_with_children() -> (ComponentTree, ComponentId, ComponentId, ComponentId) {
        let mut tree = ComponentTree::new();
        let window = tree.insert(
            Blank.into_container(Layout::Absolute).with_bounds(Bounds::new(100.0, 50.0, 200.0, 100.0)),
        );
        let a = tree.insert(Blank.into_component().with_bounds(Bounds::new(10.0, 10.0, 50.0, 50.0)));
        let b = tree.insert(Blank.into_component().with_bounds(Bounds::new(40.0, 40.0, 50.0, 50.0)));
        tree.add(window, a).unwrap();
        tree.add(window, b).unwrap();
        tree.add_window(window).unwrap();
        (tree, window, a, b)
    }

    #[test]
    fn later_children_win() {
        let (tree, window, a, b) = window_with_children();
        // Overlap of a and b: (140..160, 90..110) in screen space.
        assert_eq!(tree.component_at(window, Point::new(150.0, 100.0)), Some(b));
        assert_eq!(tree.component_at(window, Point::new(115.0, 65.0)), Some(a));
        assert_eq!(tree.component_at(window, Point::new(290.0, 140.0)), Some(window));
        assert_eq!(tree.component_at(window, Point::new(10.0, 10.0)), None);
    }

    #[test]
    fn edges_are_inside() {
        let (tree, window, a, _b) = window_with_children();
        assert_eq!(tree.component_at(window, Point::new(110.0, 60.0)), Some(a));
        assert_eq!(tree.component_at(window, Point::new(300.0, 150.0)), Some(window));
    }

    #[test]
    fn hidden_components_are_not_hit() {
        let (mut tree, window, a, b) = window_with_children();
        tree.set_visible(b, false).unwrap();
        assert_eq!(tree.component_at(window, Point::new(150.0, 100.0)), Some(a));
    }

    #[test]
    fn window_at_prefers_topmost() {
        let (mut tree, window, ..) = window_with_children();
        let over = tree.insert(Blank.into_component().with_bounds(Bounds::new(0.0, 0.0, 150.0, 150.0)));
        tree.add_window(over).unwrap();
        assert_eq!(tree.windows(), &[window, over]);
        assert_eq!(tree.window_at(Point::new(120.0, 60.0)), Some(over));
        assert_eq!(tree.window_at(Point::new(250.0, 60.0)), Some(window));
        assert_eq!(tree.window_at(Point::new(500.0, 500.0)), None);

        tree.add_window(window).unwrap();
        assert_eq!(tree.windows(), &[over, window]);
        assert_eq!(tree.window_at(Point::new(120.0, 60.0)), Some(window));
    }

    #[test]
    fn offsets_translate_points() {
        let (tree, _window, a, _b) = window_with_children();
        assert_eq!(tree.offset_of(a).unwrap(), Point::new(110.0, 60.0));
        assert_eq!(tree.position_of(a, Point::new(115.0, 70.0)).unwrap(), Point::new(5.0, 10.0));
        assert!(tree.hits(a, Point::new(160.0, 110.0)).unwrap());
        assert!(!tree.hits(a, Point::new(161.0, 110.0)).unwrap());
    }

    #[test]
    fn window_is_clamped_to_minimum() {
        let g = RecordingGraphics::new();
        let mut tree = ComponentTree::new();
        let window = tree.insert(
            Blank.into_container(StackLayout::default())
                .with_bounds(Bounds::new(0.0, 0.0, 100.0, 100.0))
                .with_minimum_size(Dimension::new(500.0, 300.0)),
        );
        tree.add_window(window).unwrap();
        tree.validate(window, &g).unwrap();
        assert_eq!(tree[window].bounds().size(), Dimension::new(500.0, 300.0));

        tree.set_minimum_size_override(window, Some(Dimension::new(50.0, 50.0))).unwrap();
        tree.validate(window, &g).unwrap();
        assert_eq!(tree[window].bounds().size(), Dimension::new(100.0, 100.0));

        tree.set_bounds(window, Bounds::new(0.0, 0.0, 20.0, 400.0)).unwrap();
        assert_eq!(tree[window].bounds().size(), Dimension::new(50.0, 400.0));
    }

    #[test]
    fn add_detaches_from_windows() {
        let (mut tree, window, ..) = window_with_children();
        let host = tree.insert(Blank.into_container(StackLayout::default()));
        tree.add(host, window).unwrap();
        assert!(tree.windows().is_empty());
        assert!(!tree.is_window(window));
    }

    #[test]
    fn unknown_ids_fail() {
        let (mut tree, _window, a, _b) = window_with_children();
        tree.dispose(a).unwrap();
        assert!(matches!(tree.offset_of(a).unwrap_err(), Error::UnknownComponent(_)));
        assert_eq!(tree.component_at(a, Point::ORIGIN), None);
    }
}
