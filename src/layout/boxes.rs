//! Box layout: children in a single row or column.
//!
//! Visible children are laid end to end along the main axis with uniform
//! spacing. When their preferred extents do not fit, the deficit is shared out
//! with the equal-share shrink (see [`super::shrink`]) so nobody drops below
//! its minimum. The cross axis is governed by [`BoxAlign`].

use crate::error::{Error, Result};
use crate::geometry::{Bounds, Dimension, Insets};

use super::shrink::{self, Extent};
use super::{visible, Assignments, LayoutItem};

// ---------------------------------------------------------------------------
// Orientation
// ---------------------------------------------------------------------------

/// The main axis of a box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Extent of `size` along the main axis.
    #[inline]
    pub fn main(self, size: Dimension) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Extent of `size` along the cross axis.
    #[inline]
    pub fn cross(self, size: Dimension) -> f64 {
        match self {
            Self::Horizontal => size.height,
            Self::Vertical => size.width,
        }
    }

    /// Build a dimension from main/cross extents.
    #[inline]
    pub(crate) fn dimension(self, main: f64, cross: f64) -> Dimension {
        match self {
            Self::Horizontal => Dimension { width: main, height: cross },
            Self::Vertical => Dimension { width: cross, height: main },
        }
    }

    /// Build bounds from main/cross positions and extents.
    #[inline]
    pub(crate) fn bounds(self, main_pos: f64, cross_pos: f64, main: f64, cross: f64) -> Bounds {
        match self {
            Self::Horizontal => Bounds::new(main_pos, cross_pos, main, cross),
            Self::Vertical => Bounds::new(cross_pos, main_pos, cross, main),
        }
    }

    fn origin(self, area: Bounds) -> (f64, f64) {
        match self {
            Self::Horizontal => (area.x, area.y),
            Self::Vertical => (area.y, area.x),
        }
    }
}

/// Cross-axis placement of box children.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoxAlign {
    Begin,
    #[default]
    Center,
    End,
    /// Fill the whole cross extent of the content area.
    Stretch,
}

/// Which edge the first child is placed against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoxDirection {
    #[default]
    Forward,
    Reverse,
}

// ---------------------------------------------------------------------------
// BoxLayout
// ---------------------------------------------------------------------------

/// Horizontal or vertical box layout.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxLayout {
    orientation: Orientation,
    spacing: f64,
    padding: Insets,
    align: BoxAlign,
    direction: BoxDirection,
}

impl BoxLayout {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            spacing: 0.0,
            padding: Insets::ZERO,
            align: BoxAlign::default(),
            direction: BoxDirection::default(),
        }
    }

    /// Children in a row.
    pub fn horizontal() -> Self {
        Self::new(Orientation::Horizontal)
    }

    /// Children in a column.
    pub fn vertical() -> Self {
        Self::new(Orientation::Vertical)
    }

    /// Set the gap between adjacent children (builder).
    ///
    /// # Panics
    ///
    /// Panics if `spacing` is negative or NaN.
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        assert!(spacing >= 0.0, "argument 'spacing' must be zero or a positive number, got {spacing}");
        self.spacing = spacing;
        self
    }

    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_align(mut self, align: BoxAlign) -> Self {
        self.align = align;
        self
    }

    pub fn with_direction(mut self, direction: BoxDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    pub fn padding(&self) -> Insets {
        self.padding
    }

    pub fn align(&self) -> BoxAlign {
        self.align
    }

    pub fn direction(&self) -> BoxDirection {
        self.direction
    }

    /// Change the gap between adjacent children.
    pub fn set_spacing(&mut self, spacing: f64) -> Result<()> {
        if spacing.is_nan() || spacing < 0.0 {
            return Err(Error::InvalidArgument {
                name: "spacing",
                reason: format!("must be zero or a positive number, got {spacing}"),
            });
        }
        self.spacing = spacing;
        Ok(())
    }

    pub fn set_padding(&mut self, padding: Insets) {
        self.padding = padding;
    }

    pub fn set_align(&mut self, align: BoxAlign) {
        self.align = align;
    }

    pub fn set_direction(&mut self, direction: BoxDirection) {
        self.direction = direction;
    }

    fn total_spacing(&self, count: usize) -> f64 {
        self.spacing * count.saturating_sub(1) as f64
    }

    /// Sum along the main axis, max across, plus spacing and padding.
    pub(crate) fn size(&self, items: &[LayoutItem], size: impl Fn(&LayoutItem) -> Dimension) -> Dimension {
        let o = self.orientation;
        let mut count = 0;
        let (main, cross) = visible(items).map(&size).fold((0.0, 0.0_f64), |(main, cross), s| {
            count += 1;
            (main + o.main(s), cross.max(o.cross(s)))
        });

        o.dimension(main + self.total_spacing(count), cross) + self.padding.size()
    }

    pub(crate) fn perform(&self, items: &[LayoutItem], area: Bounds) -> Assignments {
        let o = self.orientation;
        let content = area - self.padding;
        let children: Vec<&LayoutItem> = visible(items).collect();

        let available = o.main(content.size()) - self.total_spacing(children.len());
        let needed: f64 = children.iter().map(|c| o.main(c.preferred_size)).sum();
        let deficit = (needed - available).max(0.0);

        let extents: Vec<Extent> = children
            .iter()
            .map(|c| Extent::new(o.main(c.minimum_size), o.main(c.preferred_size)))
            .collect();
        let reductions = shrink::reductions(&extents, deficit);

        let mut offset = match self.direction {
            BoxDirection::Forward => 0.0,
            BoxDirection::Reverse => o.main(content.size()),
        };

        let mut assignments = Vec::with_capacity(children.len());
        for (child, reduction) in children.iter().zip(reductions) {
            let size = (o.main(child.preferred_size) - reduction).max(0.0);

            if self.direction == BoxDirection::Reverse {
                offset -= size;
            }

            assignments.push((child.id, self.child_bounds(size, offset, child.preferred_size, content)));

            match self.direction {
                BoxDirection::Forward => offset += size + self.spacing,
                BoxDirection::Reverse => offset -= self.spacing,
            }
        }

        assignments
    }

    fn child_bounds(&self, size: f64, offset: f64, preferred: Dimension, content: Bounds) -> Bounds {
        let o = self.orientation;
        let (main_origin, cross_origin) = o.origin(content);
        let extent = o.cross(content.size());
        let natural = o.cross(preferred);

        let (cross_pos, cross) = match self.align {
            BoxAlign::Begin => (cross_origin, natural),
            BoxAlign::End => (cross_origin + extent - natural, natural),
            BoxAlign::Stretch => (cross_origin, extent),
            BoxAlign::Center => (cross_origin + (extent - natural) / 2.0, natural),
        };

        o.bounds(main_origin + offset, cross_pos, size, cross)
    }
}

impl Default for BoxLayout {
    fn default() -> Self {
        Self::horizontal()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::super::test_support::*;
    use super::*;

    fn area(w: f64, h: f64) -> Bounds {
        Bounds::new(0.0, 0.0, w, h)
    }

    #[test]
    fn shrinks_evenly_when_short_of_space() {
        let ids = ids(2);
        let items = vec![item(ids[0], (20.0, 10.0), (60.0, 10.0)), item(ids[1], (20.0, 10.0), (60.0, 10.0))];

        let result = BoxLayout::horizontal().perform(&items, area(100.0, 10.0));
        assert_eq!(
            result,
            vec![(ids[0], Bounds::new(0.0, 0.0, 50.0, 10.0)), (ids[1], Bounds::new(50.0, 0.0, 50.0, 10.0))]
        );
    }

    #[test]
    fn preferred_sizes_when_space_allows() {
        let ids = ids(2);
        let items = vec![item(ids[0], (0.0, 0.0), (30.0, 10.0)), item(ids[1], (0.0, 0.0), (20.0, 30.0))];

        let layout = BoxLayout::horizontal().with_spacing(5.0).with_align(BoxAlign::Begin);
        let result = layout.perform(&items, area(200.0, 40.0));
        assert_eq!(
            result,
            vec![(ids[0], Bounds::new(0.0, 0.0, 30.0, 10.0)), (ids[1], Bounds::new(35.0, 0.0, 20.0, 30.0))]
        );
    }

    #[test]
    fn overflows_only_below_sum_of_minimums() {
        let ids = ids(2);
        let items = vec![item(ids[0], (20.0, 0.0), (60.0, 0.0)), item(ids[1], (20.0, 0.0), (60.0, 0.0))];

        let result = BoxLayout::horizontal().perform(&items, area(30.0, 10.0));
        assert_eq!(bounds_of(&result, ids[0]).unwrap().width, 20.0);
        assert_eq!(bounds_of(&result, ids[1]).unwrap(), Bounds::new(20.0, 5.0, 20.0, 0.0));
    }

    #[test]
    fn cross_axis_alignment() {
        let id = ids(1)[0];
        let items = vec![item(id, (0.0, 0.0), (10.0, 20.0))];
        let run = |align| BoxLayout::horizontal().with_align(align).perform(&items, area(100.0, 100.0))[0].1;

        assert_eq!(run(BoxAlign::Begin), Bounds::new(0.0, 0.0, 10.0, 20.0));
        assert_eq!(run(BoxAlign::Center), Bounds::new(0.0, 40.0, 10.0, 20.0));
        assert_eq!(run(BoxAlign::End), Bounds::new(0.0, 80.0, 10.0, 20.0));
        assert_eq!(run(BoxAlign::Stretch), Bounds::new(0.0, 0.0, 10.0, 100.0));
    }

    #[test]
    fn reverse_starts_at_the_trailing_edge() {
        let ids = ids(2);
        let items = vec![item(ids[0], (0.0, 0.0), (10.0, 10.0)), item(ids[1], (0.0, 0.0), (20.0, 10.0))];

        let layout = BoxLayout::horizontal()
            .with_direction(BoxDirection::Reverse)
            .with_spacing(5.0)
            .with_align(BoxAlign::Stretch);
        let result = layout.perform(&items, area(100.0, 10.0));
        assert_eq!(
            result,
            vec![(ids[0], Bounds::new(90.0, 0.0, 10.0, 10.0)), (ids[1], Bounds::new(65.0, 0.0, 20.0, 10.0))]
        );
    }

    #[test]
    fn vertical_with_padding() {
        let ids = ids(2);
        let items = vec![item(ids[0], (0.0, 0.0), (30.0, 10.0)), item(ids[1], (0.0, 0.0), (50.0, 20.0))];

        let layout = BoxLayout::vertical()
            .with_padding(Insets::new(5.0, 10.0, 5.0, 10.0))
            .with_spacing(2.0)
            .with_align(BoxAlign::Stretch);
        let result = layout.perform(&items, area(100.0, 100.0));
        assert_eq!(
            result,
            vec![(ids[0], Bounds::new(10.0, 5.0, 80.0, 10.0)), (ids[1], Bounds::new(10.0, 17.0, 80.0, 20.0))]
        );

        assert_eq!(layout.size(&items, |i| i.preferred_size), Dimension::new(70.0, 42.0));
        assert_eq!(layout.size(&items, |i| i.minimum_size), Dimension::new(20.0, 12.0));
    }

    #[test]
    fn hidden_children_are_skipped() {
        let ids = ids(3);
        let items = vec![
            item(ids[0], (0.0, 0.0), (10.0, 10.0)),
            item(ids[1], (0.0, 0.0), (40.0, 40.0)).hidden(),
            item(ids[2], (0.0, 0.0), (10.0, 10.0)),
        ];

        let layout = BoxLayout::horizontal().with_spacing(3.0);
        let result = layout.perform(&items, area(100.0, 10.0));
        assert_eq!(result.len(), 2);
        assert_eq!(bounds_of(&result, ids[2]).unwrap().x, 13.0);
        assert_eq!(bounds_of(&result, ids[1]), None);
        assert_eq!(layout.size(&items, |i| i.preferred_size), Dimension::new(23.0, 10.0));
    }

    #[test]
    fn empty_box_is_the_padding() {
        let layout = BoxLayout::horizontal().with_spacing(10.0).with_padding(Insets::all(4.0));
        assert_eq!(layout.size(&[], |i| i.preferred_size), Dimension::new(8.0, 8.0));
        assert!(layout.perform(&[], area(10.0, 10.0)).is_empty());
    }

    #[test]
    fn set_spacing_rejects_negative() {
        let mut layout = BoxLayout::vertical();
        assert!(layout.set_spacing(-1.0).is_err());
        assert!(layout.set_spacing(4.0).is_ok());
        assert_eq!(layout.spacing(), 4.0);
    }

    #[test]
    #[should_panic(expected = "spacing")]
    fn with_spacing_panics_on_negative() {
        let _ = BoxLayout::horizontal().with_spacing(-2.0);
    }
}
