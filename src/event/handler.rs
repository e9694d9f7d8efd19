//! Mouse dispatch: hit test, then bubble from the target up to its window.
//!
//! Handlers are registered per component and receive the tree itself, so a
//! handler may mutate properties (and thereby invalidate) in response to
//! input. While a component's handlers run they are taken out of the tree;
//! handlers registered during the call are kept after the existing ones,
//! unless a handler cleared the component's handlers, in which case only
//! those registered after the clear survive.

use tracing::trace;

use super::input::MouseEvent;
use crate::error::Result;
use crate::tree::{ComponentId, ComponentTree};

/// Callback for mouse events. Receives the tree, the component the handler
/// is registered on, and the event.
pub type MouseHandler = Box<dyn FnMut(&mut ComponentTree, ComponentId, &mut MouseEvent)>;

impl ComponentTree {
    /// Register a mouse handler on `id`. Handlers run in registration order.
    pub fn on_mouse(
        &mut self,
        id: ComponentId,
        handler: impl FnMut(&mut ComponentTree, ComponentId, &mut MouseEvent) + 'static,
    ) -> Result<()> {
        self.data(id)?;
        match self.handlers.get_mut(id) {
            Some(list) => list.push(Box::new(handler)),
            None => {
                self.handlers.insert(id, vec![Box::new(handler)]);
            }
        }
        Ok(())
    }

    /// Drop every mouse handler on `id`.
    pub fn clear_handlers(&mut self, id: ComponentId) -> Result<()> {
        self.data(id)?;
        self.handlers.remove(id);
        self.cleared.insert(id, ());
        Ok(())
    }

    /// `[start, parent, grandparent, ..., root]`, or empty for an unknown id.
    pub fn bubble_path(&self, start: ComponentId) -> Vec<ComponentId> {
        if !self.contains(start) {
            return Vec::new();
        }
        let mut path = vec![start];
        path.extend(self.ancestors(start));
        path
    }

    /// Deliver `event` to the deepest visible component under its position
    /// and then to each ancestor, until a handler stops propagation.
    ///
    /// Returns the target, or `None` if no window is under the pointer.
    pub fn dispatch_mouse(&mut self, event: &mut MouseEvent) -> Option<ComponentId> {
        let window = self.window_at(event.position)?;
        let target = self.component_at(window, event.position)?;
        trace!(?target, kind = ?event.kind, "dispatching mouse event");

        for id in self.bubble_path(target) {
            // An earlier handler may have disposed part of the path.
            let Ok(local) = self.position_of(id, event.position) else { continue };
            let Some(mut handlers) = self.handlers.remove(id) else { continue };

            event.local = local;
            self.cleared.remove(id);
            for handler in handlers.iter_mut() {
                handler(self, id, event);
            }

            if self.contains(id) && self.cleared.remove(id).is_none() {
                if let Some(added) = self.handlers.remove(id) {
                    handlers.extend(added);
                }
                self.handlers.insert(id, handlers);
            }

            if event.is_propagation_stopped() {
                break;
            }
        }

        Some(target)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
