//! Node types: ComponentId, ComponentData, ContainerState.

use std::fmt;

use slotmap::new_key_type;

use crate::geometry::{Bounds, Dimension};
use crate::layout::{Layout, LayoutConstraint};
use crate::style::StyleMap;
use crate::widget::ComponentUi;

new_key_type! {
    /// Unique identifier for a component. Copy, lightweight (u64).
    pub struct ComponentId;
}

/// Layout bookkeeping carried by containers only.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerState {
    pub(crate) layout: Layout,
    /// Children need new bounds.
    pub(crate) layout_pending: bool,
    /// A layout pass is in progress; invalidation stops here.
    pub(crate) layout_running: bool,
}

impl ContainerState {
    fn new(layout: Layout) -> Self {
        Self { layout, layout_pending: true, layout_running: false }
    }
}

/// Data associated with a single component.
pub struct ComponentData {
    pub(crate) bounds: Bounds,
    pub(crate) visible: bool,
    pub(crate) minimum_size_override: Option<Dimension>,
    pub(crate) preferred_size_override: Option<Dimension>,
    pub(crate) minimum_size: Dimension,
    pub(crate) preferred_size: Dimension,
    pub(crate) valid: bool,
    pub(crate) ui: Box<dyn ComponentUi>,
    pub(crate) style: StyleMap,
    pub(crate) constraint: LayoutConstraint,
    pub(crate) container: Option<ContainerState>,
}

impl ComponentData {
    /// A leaf component driven by `ui`.
    pub fn new(ui: impl ComponentUi) -> Self {
        Self {
            bounds: Bounds::EMPTY,
            visible: true,
            minimum_size_override: None,
            preferred_size_override: None,
            minimum_size: Dimension::ZERO,
            preferred_size: Dimension::ZERO,
            valid: false,
            ui: Box::new(ui),
            style: StyleMap::new(),
            constraint: LayoutConstraint::None,
            container: None,
        }
    }

    /// A container whose children are arranged by `layout`.
    pub fn container(ui: impl ComponentUi, layout: impl Into<Layout>) -> Self {
        Self {
            container: Some(ContainerState::new(layout.into())),
            ..Self::new(ui)
        }
    }

    /// Set the initial bounds (builder).
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Set the initial visibility (builder).
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Override the computed minimum size (builder).
    pub fn with_minimum_size(mut self, size: Dimension) -> Self {
        self.minimum_size_override = Some(size);
        self
    }

    /// Override the computed preferred size (builder).
    pub fn with_preferred_size(mut self, size: Dimension) -> Self {
        self.preferred_size_override = Some(size);
        self
    }

    /// Set the constraint used when the component is added (builder).
    pub fn with_constraint(mut self, constraint: impl Into<LayoutConstraint>) -> Self {
        self.constraint = constraint.into();
        self
    }

    /// Set the component's own styles (builder).
    pub fn with_style(mut self, style: StyleMap) -> Self {
        self.style = style;
        self
    }

    /// Position and size in parent-local coordinates.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Cached minimum size, as of the last validation.
    pub fn minimum_size(&self) -> Dimension {
        self.minimum_size
    }

    /// Cached preferred size, as of the last validation. Never smaller than
    /// [`minimum_size`](Self::minimum_size).
    pub fn preferred_size(&self) -> Dimension {
        self.preferred_size
    }

    pub fn minimum_size_override(&self) -> Option<Dimension> {
        self.minimum_size_override
    }

    pub fn preferred_size_override(&self) -> Option<Dimension> {
        self.preferred_size_override
    }

    /// Whether the cached sizes reflect the current inputs.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn ui(&self) -> &dyn ComponentUi {
        self.ui.as_ref()
    }

    pub fn style(&self) -> &StyleMap {
        &self.style
    }

    pub fn constraint(&self) -> &LayoutConstraint {
        &self.constraint
    }

    pub fn is_container(&self) -> bool {
        self.container.is_some()
    }

    pub fn layout(&self) -> Option<&Layout> {
        self.container.as_ref().map(|c| &c.layout)
    }

    /// Whether the children are waiting for new bounds.
    pub fn is_layout_pending(&self) -> bool {
        self.container.as_ref().is_some_and(|c| c.layout_pending)
    }

    pub(crate) fn is_layout_running(&self) -> bool {
        self.container.as_ref().is_some_and(|c| c.layout_running)
    }
}

impl fmt::Debug for ComponentData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentData")
            .field("ui", &self.ui.name())
            .field("bounds", &self.bounds)
            .field("visible", &self.visible)
            .field("minimum_size", &self.minimum_size)
            .field("preferred_size", &self.preferred_size)
            .field("valid", &self.valid)
            .field("constraint", &self.constraint)
            .field("container", &self.container)
            .finish_non_exhaustive()
    }
}
