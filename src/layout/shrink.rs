//! Equal-share deficit distribution, shared by box and border layouts.
//!
//! Given each child's extent along one axis and a deficit to absorb, hand out
//! equal shares to every child that still has slack (preferred minus minimum),
//! capping each at its slack, and repeat with whatever is left. Children never
//! go below their minimum: if the total slack is smaller than the deficit the
//! excess simply overflows.

/// Deficits smaller than this are treated as consumed.
const EPSILON: f64 = 1e-9;

/// A child's extent along the axis being shrunk.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Extent {
    pub minimum: f64,
    pub preferred: f64,
}

impl Extent {
    pub fn new(minimum: f64, preferred: f64) -> Self {
        Self { minimum, preferred }
    }

    fn slack(self) -> f64 {
        (self.preferred - self.minimum).max(0.0)
    }
}

/// How much to take off each child's preferred extent. The result is parallel
/// to `extents`.
pub(crate) fn reductions(extents: &[Extent], deficit: f64) -> Vec<f64> {
    let mut reduced = vec![0.0; extents.len()];
    let mut remaining = deficit;
    let mut active: Vec<usize> = (0..extents.len()).collect();

    let slack_left = |reduced: &[f64], i: usize| extents[i].slack() - reduced[i];

    while remaining > EPSILON && !active.is_empty() {
        let share = remaining / active.len() as f64;
        let mut next = Vec::with_capacity(active.len());

        for &i in &active {
            let available = slack_left(&reduced, i);
            let taken = share.min(available);
            reduced[i] += taken;
            remaining -= taken;
            if available > share {
                next.push(i);
            }
        }

        active = next;
    }

    // Rounding can leave a sliver behind; the last child that can still
    // shrink absorbs it.
    if remaining > 0.0 {
        if let Some(i) = (0..extents.len()).rev().find(|&i| slack_left(&reduced, i) > 0.0) {
            let taken = remaining.min(slack_left(&reduced, i));
            reduced[i] += taken;
        }
    }

    reduced
}
