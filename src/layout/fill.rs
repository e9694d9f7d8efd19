//! Fill layout: every visible child gets the whole padded content area.

use crate::geometry::{Bounds, Dimension, Insets};

use super::{max_size, visible, Assignments, LayoutItem};

/// Overlays all children on the content area.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FillLayout {
    padding: Insets,
}

impl FillLayout {
    pub fn new(padding: Insets) -> Self {
        Self { padding }
    }

    pub fn padding(&self) -> Insets {
        self.padding
    }

    pub fn set_padding(&mut self, padding: Insets) {
        self.padding = padding;
    }

    pub(crate) fn size(&self, items: &[LayoutItem], size: impl Fn(&LayoutItem) -> Dimension) -> Dimension {
        max_size(items, size) + self.padding.size()
    }

    pub(crate) fn perform(&self, items: &[LayoutItem], area: Bounds) -> Assignments {
        let content = area - self.padding;
        visible(items).map(|item| (item.id, content)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn child_gets_padded_area() {
        let id = ids(1)[0];
        let items = vec![item(id, (5.0, 7.0), (30.0, 30.0))];
        let layout = FillLayout::new(Insets::all(10.0));

        let result = layout.perform(&items, Bounds::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(result, vec![(id, Bounds::new(10.0, 10.0, 80.0, 80.0))]);

        assert_eq!(layout.size(&items, |i| i.minimum_size), Dimension::new(25.0, 27.0));
        assert_eq!(layout.size(&items, |i| i.preferred_size), Dimension::new(50.0, 50.0));
    }

    #[test]
    fn uneven_padding_uses_left_and_top() {
        let id = ids(1)[0];
        let items = vec![item(id, (0.0, 0.0), (0.0, 0.0))];
        let layout = FillLayout::new(Insets::new(1.0, 2.0, 3.0, 4.0));

        let result = layout.perform(&items, Bounds::new(0.0, 0.0, 50.0, 40.0));
        assert_eq!(result[0].1, Bounds::new(4.0, 1.0, 44.0, 36.0));
    }

    #[test]
    fn content_floors_at_zero() {
        let id = ids(1)[0];
        let items = vec![item(id, (0.0, 0.0), (0.0, 0.0))];
        let layout = FillLayout::new(Insets::all(10.0));

        let result = layout.perform(&items, Bounds::new(0.0, 0.0, 15.0, 15.0));
        assert_eq!(result[0].1.size(), Dimension::ZERO);
    }

    #[test]
    fn size_is_max_over_visible_children() {
        let ids = ids(3);
        let items = vec![
            item(ids[0], (0.0, 0.0), (30.0, 10.0)),
            item(ids[1], (0.0, 0.0), (10.0, 40.0)),
            item(ids[2], (0.0, 0.0), (99.0, 99.0)).hidden(),
        ];
        let layout = FillLayout::default();
        assert_eq!(layout.size(&items, |i| i.preferred_size), Dimension::new(30.0, 40.0));
        assert_eq!(layout.perform(&items, Bounds::new(0.0, 0.0, 5.0, 5.0)).len(), 2);
    }

    #[test]
    fn no_children_is_the_padding_box() {
        let layout = FillLayout::new(Insets::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(layout.size(&[], |i| i.minimum_size), Dimension::new(6.0, 4.0));
    }
}
