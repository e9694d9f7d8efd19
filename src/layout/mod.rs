//! Layout family: the `Layout` sum type, layout items, and per-child constraints.
//!
//! A layout is a pure function of its parameters and the children's cached
//! sizes. It never touches the tree: [`Layout::perform`] returns a list of
//! `(child, bounds)` assignments which the tree then applies under its
//! reentrancy guard.

pub mod anchor;
pub mod border;
pub mod boxes;
pub mod fill;
pub(crate) mod shrink;
pub mod stack;

pub use anchor::{AnchorLayout, Anchors};
pub use border::{BorderArea, BorderLayout, BorderRegion};
pub use boxes::{BoxAlign, BoxDirection, BoxLayout, Orientation};
pub use fill::FillLayout;
pub use stack::StackLayout;

use crate::error::{Error, Result};
use crate::geometry::{Bounds, Dimension, Insets};
use crate::tree::ComponentId;

/// Bounds to assign, one entry per placed child.
pub type Assignments = Vec<(ComponentId, Bounds)>;

// ---------------------------------------------------------------------------
// LayoutConstraint
// ---------------------------------------------------------------------------

/// Per-child placement data, interpreted by the parent's layout.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LayoutConstraint {
    /// No constraint; every layout accepts it.
    #[default]
    None,
    /// Border region plus the padding kept around the child.
    Border { region: BorderRegion, padding: Insets },
    /// Edge distances for an anchor layout.
    Anchors(Anchors),
    /// Whether a stacked child fills the content area.
    Stack { fill: bool },
}

impl LayoutConstraint {
    /// A border region without padding.
    pub fn border(region: BorderRegion) -> Self {
        Self::Border { region, padding: Insets::ZERO }
    }

    pub fn stack(fill: bool) -> Self {
        Self::Stack { fill }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "empty",
            Self::Border { .. } => "border",
            Self::Anchors(_) => "anchor",
            Self::Stack { .. } => "stack",
        }
    }
}

impl From<Anchors> for LayoutConstraint {
    fn from(anchors: Anchors) -> Self {
        Self::Anchors(anchors)
    }
}

// ---------------------------------------------------------------------------
// LayoutItem
// ---------------------------------------------------------------------------

/// A snapshot of one child, as seen by its parent's layout.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutItem {
    pub id: ComponentId,
    pub visible: bool,
    pub minimum_size: Dimension,
    pub preferred_size: Dimension,
    pub bounds: Bounds,
    pub constraint: LayoutConstraint,
}

impl LayoutItem {
    /// A visible item with the given sizes and no constraint.
    pub fn new(id: ComponentId, minimum_size: Dimension, preferred_size: Dimension) -> Self {
        Self {
            id,
            visible: true,
            minimum_size,
            preferred_size: preferred_size.max(minimum_size),
            bounds: Bounds::EMPTY,
            constraint: LayoutConstraint::None,
        }
    }

    /// Set the constraint (builder).
    pub fn with_constraint(mut self, constraint: impl Into<LayoutConstraint>) -> Self {
        self.constraint = constraint.into();
        self
    }

    /// Mark the item hidden (builder).
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

/// Visible items only.
pub(crate) fn visible(items: &[LayoutItem]) -> impl Iterator<Item = &LayoutItem> {
    items.iter().filter(|item| item.visible)
}

/// Component-wise max over visible items.
pub(crate) fn max_size(items: &[LayoutItem], size: impl Fn(&LayoutItem) -> Dimension) -> Dimension {
    visible(items).map(size).fold(Dimension::ZERO, Dimension::max)
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// The layout strategy of a container. The variant is fixed for the life of
/// the container; its parameters may change.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Layout {
    /// Children keep the bounds they were given.
    #[default]
    Absolute,
    Fill(FillLayout),
    Box(BoxLayout),
    Border(BorderLayout),
    Anchor(AnchorLayout),
    Stack(StackLayout),
}

impl Layout {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Absolute => "absolute",
            Self::Fill(_) => "fill",
            Self::Box(_) => "box",
            Self::Border(_) => "border",
            Self::Anchor(_) => "anchor",
            Self::Stack(_) => "stack",
        }
    }

    /// Reject constraints this layout cannot interpret.
    pub fn check_constraint(&self, constraint: &LayoutConstraint) -> Result<()> {
        match (self, constraint) {
            (_, LayoutConstraint::None)
            | (Self::Border(_), LayoutConstraint::Border { .. })
            | (Self::Stack(_), LayoutConstraint::Stack { .. }) => Ok(()),
            (Self::Anchor(_), LayoutConstraint::Anchors(anchors)) => anchors.validate(),
            _ => Err(Error::ConstraintMismatch {
                layout: self.name(),
                constraint: constraint.name(),
            }),
        }
    }

    /// Minimum size of the container, from its visible children.
    pub fn minimum_size(&self, items: &[LayoutItem]) -> Dimension {
        match self {
            Self::Absolute => Dimension::ZERO,
            Self::Fill(layout) => layout.size(items, |i| i.minimum_size),
            Self::Box(layout) => layout.size(items, |i| i.minimum_size),
            Self::Border(layout) => layout.minimum_size(items),
            Self::Anchor(layout) => layout.size(items, |i| i.minimum_size),
            Self::Stack(layout) => layout.size(items, |i| i.minimum_size),
        }
    }

    /// Preferred size of the container. `current` is the container's own
    /// size, which is what an absolute layout reports.
    pub fn preferred_size(&self, items: &[LayoutItem], current: Dimension) -> Dimension {
        match self {
            Self::Absolute => current,
            Self::Fill(layout) => layout.size(items, |i| i.preferred_size),
            Self::Box(layout) => layout.size(items, |i| i.preferred_size),
            Self::Border(layout) => layout.preferred_size(items),
            Self::Anchor(layout) => layout.size(items, |i| i.preferred_size),
            Self::Stack(layout) => layout.size(items, |i| i.preferred_size),
        }
    }

    /// Arrange the visible children inside `area`.
    ///
    /// `container` is only used to label errors.
    pub fn perform(
        &self,
        container: ComponentId,
        items: &[LayoutItem],
        area: Bounds,
    ) -> Result<Assignments> {
        match self {
            Self::Absolute => Ok(Vec::new()),
            Self::Fill(layout) => Ok(layout.perform(items, area)),
            Self::Box(layout) => Ok(layout.perform(items, area)),
            Self::Border(layout) => layout.perform(container, items, area),
            Self::Anchor(layout) => Ok(layout.perform(items, area)),
            Self::Stack(layout) => Ok(layout.perform(items, area)),
        }
    }

    /// Record a newly added child. Returns a child that lost its place.
    pub(crate) fn attach(
        &mut self,
        child: ComponentId,
        constraint: &LayoutConstraint,
    ) -> Option<ComponentId> {
        match (self, constraint) {
            (Self::Border(layout), LayoutConstraint::Border { region, padding }) => {
                layout.place(child, *region, *padding)
            }
            (Self::Border(layout), _) => layout.place(child, BorderRegion::Center, Insets::ZERO),
            _ => None,
        }
    }

    /// Forget a removed child.
    pub(crate) fn detach(&mut self, child: ComponentId) {
        if let Self::Border(layout) = self {
            layout.release(child);
        }
    }
}

impl From<FillLayout> for Layout {
    fn from(layout: FillLayout) -> Self {
        Self::Fill(layout)
    }
}

impl From<BoxLayout> for Layout {
    fn from(layout: BoxLayout) -> Self {
        Self::Box(layout)
    }
}

impl From<BorderLayout> for Layout {
    fn from(layout: BorderLayout) -> Self {
        Self::Border(layout)
    }
}

impl From<AnchorLayout> for Layout {
    fn from(layout: AnchorLayout) -> Self {
        Self::Anchor(layout)
    }
}

impl From<StackLayout> for Layout {
    fn from(layout: StackLayout) -> Self {
        Self::Stack(layout)
    }
}

// ===========================================================================
// Test support
// ===========================================================================


// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn absolute_defers_to_current_size() {
        let id = ids(1)[0];
        let items = vec![item(id, (10.0, 10.0), (50.0, 50.0))];
        let layout = Layout::Absolute;
        assert_eq!(layout.minimum_size(&items), Dimension::ZERO);
        assert_eq!(layout.preferred_size(&items, Dimension::new(300.0, 200.0)), Dimension::new(300.0, 200.0));
        assert!(layout.perform(id, &items, Bounds::new(0.0, 0.0, 10.0, 10.0)).unwrap().is_empty());
    }

    #[test]
    fn constraint_checks() {
        let fill = Layout::from(FillLayout::default());
        assert!(fill.check_constraint(&LayoutConstraint::None).is_ok());
        let err = fill.check_constraint(&LayoutConstraint::stack(false)).unwrap_err();
        assert!(matches!(err, Error::ConstraintMismatch { layout: "fill", constraint: "stack" }));

        let border = Layout::from(BorderLayout::new());
        assert!(border.check_constraint(&LayoutConstraint::border(BorderRegion::Top)).is_ok());
        assert!(border.check_constraint(&Anchors::new().with_left(0.0).into()).is_err());

        let anchor = Layout::from(AnchorLayout);
        assert!(anchor.check_constraint(&Anchors::new().with_left(5.0).into()).is_ok());
        let err = anchor.check_constraint(&Anchors::new().with_top(-1.0).into()).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { name: "top", .. }));

        let stack = Layout::from(StackLayout::default());
        assert!(stack.check_constraint(&LayoutConstraint::stack(true)).is_ok());
    }

    #[test]
    fn item_preferred_never_below_minimum() {
        let id = ids(1)[0];
        let it = item(id, (30.0, 10.0), (20.0, 20.0));
        assert_eq!(it.preferred_size, Dimension::new(30.0, 20.0));
    }

    #[test]
    fn attach_places_border_children() {
        let ids = ids(2);
        let mut layout = Layout::from(BorderLayout::new());
        assert_eq!(layout.attach(ids[0], &LayoutConstraint::None), None);
        assert_eq!(layout.attach(ids[1], &LayoutConstraint::None), Some(ids[0]));

        let Layout::Border(border) = &layout else { unreachable!() };
        assert_eq!(border.region_of(ids[1]), Some(BorderRegion::Center));

        layout.detach(ids[1]);
        let Layout::Border(border) = &layout else { unreachable!() };
        assert_eq!(border.area(BorderRegion::Center), None);
    }
}
