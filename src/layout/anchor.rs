//! Anchor layout: children pinned to container edges by fixed distances.

use crate::error::{Error, Result};
use crate::geometry::{Bounds, Dimension};

use super::{visible, Assignments, LayoutConstraint, LayoutItem};

// ---------------------------------------------------------------------------
// Anchors
// ---------------------------------------------------------------------------

/// Distances from each container edge. `None` leaves the edge free.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Anchors {
    pub top: Option<f64>,
    pub right: Option<f64>,
    pub bottom: Option<f64>,
    pub left: Option<f64>,
}

impl Anchors {
    /// No edge anchored: the child is centred on both axes.
    pub fn new() -> Self {
        Self::default()
    }

    /// All four edges at the same distance.
    pub fn all(distance: f64) -> Self {
        Self {
            top: Some(distance),
            right: Some(distance),
            bottom: Some(distance),
            left: Some(distance),
        }
    }

    pub fn with_top(mut self, distance: f64) -> Self {
        self.top = Some(distance);
        self
    }

    pub fn with_right(mut self, distance: f64) -> Self {
        self.right = Some(distance);
        self
    }

    pub fn with_bottom(mut self, distance: f64) -> Self {
        self.bottom = Some(distance);
        self
    }

    pub fn with_left(mut self, distance: f64) -> Self {
        self.left = Some(distance);
        self
    }

    /// Every anchored distance must be zero or positive.
    pub fn validate(&self) -> Result<()> {
        let edges = [("top", self.top), ("right", self.right), ("bottom", self.bottom), ("left", self.left)];
        for (name, distance) in edges {
            if let Some(d) = distance {
                if d.is_nan() || d < 0.0 {
                    return Err(Error::InvalidArgument {
                        name,
                        reason: format!("distance must be zero or a positive number, got {d}"),
                    });
                }
            }
        }
        Ok(())
    }

    /// Sum of the anchored distances on each axis.
    fn margins(&self) -> Dimension {
        Dimension {
            width: self.left.unwrap_or(0.0) + self.right.unwrap_or(0.0),
            height: self.top.unwrap_or(0.0) + self.bottom.unwrap_or(0.0),
        }
    }
}

/// Resolve one axis: `(position, extent)`.
fn resolve_axis(
    extent: f64,
    begin: Option<f64>,
    end: Option<f64>,
    minimum: f64,
    preferred: f64,
) -> (f64, f64) {
    match (begin, end) {
        (Some(begin), Some(end)) => {
            let span = extent - begin - end;
            if span >= minimum {
                (begin, span)
            } else {
                (begin + (span - minimum) / 2.0, minimum)
            }
        }
        (Some(begin), None) => (begin, preferred.min(extent - begin).max(0.0)),
        (None, Some(end)) => {
            let limit = extent - end;
            let size = preferred.min(limit).max(0.0);
            (limit - size, size)
        }
        (None, None) => {
            let size = preferred.min(extent).max(0.0);
            ((extent - size) / 2.0, size)
        }
    }
}

// ---------------------------------------------------------------------------
// AnchorLayout
// ---------------------------------------------------------------------------

/// Places each child by its [`Anchors`] constraint.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnchorLayout;

impl AnchorLayout {
    fn anchors(item: &LayoutItem) -> Anchors {
        match item.constraint {
            LayoutConstraint::Anchors(anchors) => anchors,
            _ => Anchors::default(),
        }
    }

    pub(crate) fn size(&self, items: &[LayoutItem], size: impl Fn(&LayoutItem) -> Dimension) -> Dimension {
        visible(items)
            .map(|item| size(item) + Self::anchors(item).margins())
            .fold(Dimension::ZERO, Dimension::max)
    }

    pub(crate) fn perform(&self, items: &[LayoutItem], area: Bounds) -> Assignments {
        visible(items)
            .map(|item| {
                let anchors = Self::anchors(item);
                let (min, pref) = (item.minimum_size, item.preferred_size);

                let (x, width) = resolve_axis(area.width, anchors.left, anchors.right, min.width, pref.width);
                let (y, height) = resolve_axis(area.height, anchors.top, anchors.bottom, min.height, pref.height);

                (item.id, Bounds::new(area.x + x, area.y + y, width, height))
            })
            .collect()
    }
}
