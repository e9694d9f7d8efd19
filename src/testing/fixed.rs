//! A delegate with fixed size hints that counts how often it is asked.

use std::any::Any;
use std::cell::Cell;
use std::rc::Rc;

use crate::geometry::Dimension;
use crate::widget::{ComponentUi, SizeContext};

/// Reports the same minimum and preferred size every time.
///
/// Each call to `minimum_size` or `preferred_size` bumps a shared counter, so
/// tests can check that valid components are not recomputed.
#[derive(Clone, Debug)]
pub struct FixedSize {
    minimum: Dimension,
    preferred: Dimension,
    calls: Rc<Cell<usize>>,
}

impl FixedSize {
    pub fn new(minimum: Dimension, preferred: Dimension) -> Self {
        Self {
            minimum,
            preferred,
            calls: Rc::new(Cell::new(0)),
        }
    }

    /// A handle on the call counter that outlives moving `self` into a tree.
    pub fn calls(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.calls)
    }

    pub fn set_minimum(&mut self, minimum: Dimension) {
        self.minimum = minimum;
    }

    pub fn set_preferred(&mut self, preferred: Dimension) {
        self.preferred = preferred;
    }
}

impl ComponentUi for FixedSize {
    fn name(&self) -> &str {
        "Fixed"
    }

    fn minimum_size(&self, _cx: &SizeContext<'_>) -> Dimension {
        self.calls.set(self.calls.get() + 1);
        self.minimum
    }

    fn preferred_size(&self, _cx: &SizeContext<'_>) -> Dimension {
        self.calls.set(self.calls.get() + 1);
        self.preferred
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
