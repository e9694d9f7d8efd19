//! Border layout: five regions arranged as nested strips.
//!
//! The arrangement is a vertical strip `[Top, middle, Bottom]` whose middle
//! slot is a horizontal strip `[Left, Center, Right]`. Each strip shrinks its
//! visible slots with the equal-share algorithm; edge slots keep their
//! (reduced) preferred extent and the centre slot takes whatever is left.

use tracing::warn;

use crate::error::{Error, Result};
use crate::geometry::{Bounds, Dimension, Insets};
use crate::tree::ComponentId;

use super::boxes::Orientation;
use super::shrink::{self, Extent};
use super::{Assignments, LayoutItem};

// ---------------------------------------------------------------------------
// Regions
// ---------------------------------------------------------------------------

/// A region of a border layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BorderRegion {
    #[default]
    Center,
    Top,
    Right,
    Bottom,
    Left,
}

impl BorderRegion {
    pub const ALL: [BorderRegion; 5] = [Self::Center, Self::Top, Self::Right, Self::Bottom, Self::Left];

    fn index(self) -> usize {
        self as usize
    }
}

/// The child occupying a region, with the padding kept around it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BorderArea {
    pub component: ComponentId,
    pub padding: Insets,
}

// ---------------------------------------------------------------------------
// Strips
// ---------------------------------------------------------------------------

/// A region resolved against the current children.
#[derive(Clone, Copy, Debug)]
struct Cell {
    id: ComponentId,
    visible: bool,
    padding: Insets,
    minimum: Dimension,
    preferred: Dimension,
}

#[derive(Debug)]
enum Slot {
    Empty,
    Cell(Cell),
    Strip(Box<Strip>),
}

impl Slot {
    fn visible(&self) -> bool {
        match self {
            Self::Empty => false,
            Self::Cell(cell) => cell.visible,
            Self::Strip(strip) => strip.visible(),
        }
    }

    fn minimum_size(&self) -> Dimension {
        match self {
            Self::Empty => Dimension::ZERO,
            Self::Cell(cell) => cell.minimum + cell.padding.size(),
            Self::Strip(strip) => strip.size(Slot::minimum_size),
        }
    }

    fn preferred_size(&self) -> Dimension {
        match self {
            Self::Empty => Dimension::ZERO,
            Self::Cell(cell) => cell.preferred + cell.padding.size(),
            Self::Strip(strip) => strip.size(Slot::preferred_size),
        }
    }

    fn place(&self, bounds: Bounds, out: &mut Assignments) {
        match self {
            Self::Empty => {}
            Self::Cell(cell) => out.push((cell.id, bounds - cell.padding)),
            Self::Strip(strip) => strip.place(bounds, out),
        }
    }
}

/// Three slots along one axis: begin, center, end.
#[derive(Debug)]
struct Strip {
    orientation: Orientation,
    slots: [Slot; 3],
}

impl Strip {
    const BEGIN: usize = 0;
    const CENTER: usize = 1;
    const END: usize = 2;

    fn visible(&self) -> bool {
        self.slots.iter().any(Slot::visible)
    }

    fn size(&self, size: fn(&Slot) -> Dimension) -> Dimension {
        let o = self.orientation;
        let (main, cross) = self
            .slots
            .iter()
            .filter(|slot| slot.visible())
            .map(size)
            .fold((0.0, 0.0_f64), |(main, cross), s| (main + o.main(s), cross.max(o.cross(s))));
        o.dimension(main, cross)
    }

    fn place(&self, bounds: Bounds, out: &mut Assignments) {
        let o = self.orientation;
        let visible: Vec<usize> = (0..3).filter(|&i| self.slots[i].visible()).collect();

        let available = o.main(bounds.size());
        let needed: f64 = visible.iter().map(|&i| o.main(self.slots[i].preferred_size())).sum();
        let deficit = (needed - available).max(0.0);

        let extents: Vec<Extent> = visible
            .iter()
            .map(|&i| {
                let slot = &self.slots[i];
                Extent::new(o.main(slot.minimum_size()), o.main(slot.preferred_size()))
            })
            .collect();
        let mut reduced = [0.0; 3];
        for (&i, r) in visible.iter().zip(shrink::reductions(&extents, deficit)) {
            reduced[i] = r;
        }

        let edge = |i: usize| o.main(self.slots[i].preferred_size()) - reduced[i];
        let mut offset = 0.0;
        let mut remaining = available;

        if self.slots[Self::BEGIN].visible() {
            let size = edge(Self::BEGIN);
            self.slots[Self::BEGIN].place(self.begin_bounds(size, bounds), out);
            offset = size;
            remaining -= size;
        }

        if self.slots[Self::END].visible() {
            let size = edge(Self::END);
            self.slots[Self::END].place(self.end_bounds(size, bounds), out);
            remaining -= size;
        }

        if self.slots[Self::CENTER].visible() {
            let size = remaining.max(0.0);
            self.slots[Self::CENTER].place(self.center_bounds(size, offset, bounds), out);
        }
    }

    fn begin_bounds(&self, size: f64, area: Bounds) -> Bounds {
        match self.orientation {
            Orientation::Horizontal => Bounds::new(area.x, area.y, size, area.height),
            Orientation::Vertical => Bounds::new(area.x, area.y, area.width, size),
        }
    }

    fn center_bounds(&self, size: f64, offset: f64, area: Bounds) -> Bounds {
        match self.orientation {
            Orientation::Horizontal => Bounds::new(area.x + offset, area.y, size, area.height),
            Orientation::Vertical => Bounds::new(area.x, area.y + offset, area.width, size),
        }
    }

    fn end_bounds(&self, size: f64, area: Bounds) -> Bounds {
        match self.orientation {
            Orientation::Horizontal => Bounds::new(area.right() - size, area.y, size, area.height),
            Orientation::Vertical => Bounds::new(area.x, area.bottom() - size, area.width, size),
        }
    }
}

// ---------------------------------------------------------------------------
// BorderLayout
// ---------------------------------------------------------------------------

/// Arranges up to five children around a centre.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BorderLayout {
    areas: [Option<BorderArea>; 5],
}

impl BorderLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// The occupant of `region`.
    pub fn area(&self, region: BorderRegion) -> Option<BorderArea> {
        self.areas[region.index()]
    }

    /// The region `child` occupies, if any.
    pub fn region_of(&self, child: ComponentId) -> Option<BorderRegion> {
        BorderRegion::ALL
            .into_iter()
            .find(|r| self.areas[r.index()].is_some_and(|a| a.component == child))
    }

    /// Put `child` into `region`, moving it out of any region it held.
    ///
    /// Returns the previous occupant of `region`, which stays a child of the
    /// container but is no longer placed.
    pub fn place(&mut self, child: ComponentId, region: BorderRegion, padding: Insets) -> Option<ComponentId> {
        self.release(child);

        let previous = self.areas[region.index()]
            .replace(BorderArea { component: child, padding })
            .map(|area| area.component);

        if let Some(displaced) = previous {
            warn!(?region, ?displaced, ?child, "border region already occupied; replacing");
        }
        previous
    }

    /// Clear the region held by `child`.
    pub fn release(&mut self, child: ComponentId) -> Option<BorderRegion> {
        let region = self.region_of(child)?;
        self.areas[region.index()] = None;
        Some(region)
    }

    /// Resolve the regions against `items`. The second value is the first
    /// region occupant that is not among the items.
    fn row(&self, items: &[LayoutItem]) -> (Strip, Option<ComponentId>) {
        let mut missing = None;
        let mut slot = |region: BorderRegion| match self.area(region) {
            None => Slot::Empty,
            Some(area) => match items.iter().find(|item| item.id == area.component) {
                Some(item) => Slot::Cell(Cell {
                    id: item.id,
                    visible: item.visible,
                    padding: area.padding,
                    minimum: item.minimum_size,
                    preferred: item.preferred_size,
                }),
                None => {
                    missing.get_or_insert(area.component);
                    Slot::Empty
                }
            },
        };

        let column = Strip {
            orientation: Orientation::Horizontal,
            slots: [slot(BorderRegion::Left), slot(BorderRegion::Center), slot(BorderRegion::Right)],
        };
        let row = Strip {
            orientation: Orientation::Vertical,
            slots: [slot(BorderRegion::Top), Slot::Strip(Box::new(column)), slot(BorderRegion::Bottom)],
        };

        (row, missing)
    }

    pub(crate) fn minimum_size(&self, items: &[LayoutItem]) -> Dimension {
        self.row(items).0.size(Slot::minimum_size)
    }

    pub(crate) fn preferred_size(&self, items: &[LayoutItem]) -> Dimension {
        self.row(items).0.size(Slot::preferred_size)
    }

    pub(crate) fn perform(&self, container: ComponentId, items: &[LayoutItem], area: Bounds) -> Result<Assignments> {
        let (row, missing) = self.row(items);

        if let Some(component) = missing {
            return Err(Error::Layout {
                container,
                reason: format!("border region refers to {component:?}, which is not a child"),
            });
        }

        let mut assignments = Vec::new();
        if row.visible() {
            row.place(area, &mut assignments);
        }
        Ok(assignments)
    }
}
