//! Stack layout: children share the content area, filling it or centred in it.

use crate::geometry::{Bounds, Dimension, Insets};

use super::{max_size, visible, Assignments, LayoutConstraint, LayoutItem};

/// Stacks children on top of each other.
///
/// A child with `LayoutConstraint::Stack { fill: false }` keeps its preferred
/// size (clamped to the content area) and is centred; any other child fills.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StackLayout {
    padding: Insets,
}

impl StackLayout {
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

        visible(items)
            .map(|item| {
                let fill = !matches!(item.constraint, LayoutConstraint::Stack { fill: false });
                if fill {
                    return (item.id, content);
                }

                let width = item.preferred_size.width.min(content.width);
                let height = item.preferred_size.height.min(content.height);
                let x = content.x + (content.width - width) / 2.0;
                let y = content.y + (content.height - height) / 2.0;
                (item.id, Bounds::new(x, y, width, height))
            })
            .collect()
    }
}
