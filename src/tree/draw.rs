//! Recursive drawing with per-component offset and clip.

use super::node::ComponentId;
use super::tree::ComponentTree;
use crate::error::Result;
use crate::geometry::Bounds;
use crate::graphics::Graphics;
use crate::style::StyleChain;
use crate::widget::DrawContext;

impl ComponentTree {
    /// Draw `id` and its visible descendants, parents under children.
    ///
    /// Pending containers are arranged right before their children are
    /// drawn. A delegate that fails to draw is reported and skipped; its
    /// children and siblings still draw. The graphics offset and clip are
    /// restored on return.
    pub fn draw(&mut self, id: ComponentId, g: &mut dyn Graphics) -> Result<()> {
        self.data(id)?;
        self.draw_inner(id, g);
        Ok(())
    }

    fn draw_inner(&mut self, id: ComponentId, g: &mut dyn Graphics) {
        let Some(data) = self.nodes.get(id) else { return };
        if !data.visible {
            return;
        }
        if data.is_container() {
            if let Err(err) = self.perform_layout(id) {
                self.report(&err);
            }
        }

        let data = &self.nodes[id];
        let saved_offset = g.offset();
        let saved_clip = g.clip();

        let offset = saved_offset + data.bounds.location();
        let area = Bounds::from_parts(offset, data.bounds.size());
        let clip = match saved_clip {
            Some(outer) => outer.intersection(area),
            None => Some(area),
        };
        // Nothing of this subtree can show.
        let Some(clip) = clip else { return };

        g.set_offset(offset);
        g.set_clip(Some(clip));

        let cx = DrawContext {
            size: data.bounds.size(),
            style: StyleChain::new(&data.style, &self.theme, data.ui.name()),
        };
        let result = data.ui.draw(g, &cx);
        if let Err(err) = result {
            self.report(&err);
        }

        for child in self.children(id).to_vec() {
            self.draw_inner(child, g);
        }

        g.set_offset(saved_offset);
        g.set_clip(saved_clip);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::Error;
    use crate::geometry::{Dimension, Insets, Point};
    use crate::layout::{FillLayout, Layout};
    use crate::style::{Rgba, StyleMap};
    use crate::testing::RecordingGraphics;
    use crate::widget::{Blank, ComponentUi, ComponentUiExt};
    use crate::widgets::Panel;

    struct Broken;

    impl ComponentUi for Broken {
        fn name(&self) -> &str {
            "Broken"
        }

        fn draw(&self, _g: &mut dyn Graphics, _cx: &DrawContext<'_>) -> Result<()> {
            Err(Error::Draw("no paint".into()))
        }

        fn as_any(&self) -> &dyn std::any::Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
            self
        }
    }

    #[test]
    fn children_draw_in_order_with_offsets() {
        let mut g = RecordingGraphics::new();
        let mut tree = ComponentTree::new();
        tree.set_theme(StyleMap::new().with_color("background", Rgba::WHITE));

        let window = tree.insert(Panel.into_container(FillLayout::new(Insets::all(10.0))).with_bounds(Bounds::new(5.0, 5.0, 60.0, 40.0)));
        let inner = tree.insert(Panel.into_container(Layout::Absolute));
        let leaf = tree.insert(Panel.into_component().with_bounds(Bounds::new(2.0, 3.0, 10.0, 10.0)));
        tree.add(window, inner).unwrap();
        tree.add(inner, leaf).unwrap();
        tree.add_window(window).unwrap();
        tree.validate(window, &g).unwrap();
        tree.draw(window, &mut g).unwrap();

        insta::assert_snapshot!(g.render(), @r"
        color 1,1,1,1
        fill 5,5 60x40
        color 1,1,1,1
        fill 15,15 40x20
        color 1,1,1,1
        fill 17,18 10x10
        ");
        assert_eq!(g.offset(), Point::ORIGIN);
        assert_eq!(g.clip(), None);
    }

    #[test]
    fn children_are_clipped_to_the_parent() {
        let mut g = RecordingGraphics::new();
        let mut tree = ComponentTree::new();
        tree.set_theme(StyleMap::new().with_color("background", Rgba::BLACK));
        let window = tree.insert(Blank.into_container(Layout::Absolute).with_bounds(Bounds::new(0.0, 0.0, 20.0, 20.0)));
        let leaf = tree.insert(Panel.into_component().with_bounds(Bounds::new(10.0, 10.0, 30.0, 30.0)));
        let outside = tree.insert(Panel.into_component().with_bounds(Bounds::new(50.0, 50.0, 5.0, 5.0)));
        tree.add(window, leaf).unwrap();
        tree.add(window, outside).unwrap();
        tree.draw(window, &mut g).unwrap();

        insta::assert_snapshot!(g.render(), @r"
        color 0,0,0,1
        fill 10,10 10x10
        ");
    }

    #[test]
    fn hidden_components_do_not_draw() {
        let mut g = RecordingGraphics::new();
        let mut tree = ComponentTree::new();
        let panel = tree.insert(
            Panel.into_component()
                .with_bounds(Bounds::new(0.0, 0.0, 10.0, 10.0))
                .with_style(StyleMap::new().with_color("background", Rgba::WHITE))
                .visible(false),
        );
        tree.draw(panel, &mut g).unwrap();
        assert!(g.ops().is_empty());
    }

    #[test]
    fn draw_failure_is_reported_and_children_still_draw() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut g = RecordingGraphics::new();
        let mut tree = ComponentTree::new();
        tree.set_error_handler(Box::new(move |e| sink.borrow_mut().push(e.to_string())));

        let root = tree.insert(Broken.into_container(FillLayout::default()).with_bounds(Bounds::new(0.0, 0.0, 10.0, 10.0)));
        let child = tree.insert(Panel.into_component().with_style(StyleMap::new().with_color("background", Rgba::WHITE)));
        tree.add(root, child).unwrap();
        tree.validate(root, &g).unwrap();
        tree.draw(root, &mut g).unwrap();

        assert_eq!(seen.borrow().as_slice(), ["draw failed: no paint"]);
        assert_eq!(g.ops().len(), 2);
        assert_eq!(tree[child].bounds().size(), Dimension::new(10.0, 10.0));
    }
}
