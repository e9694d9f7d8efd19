//! Context: ties the tree to a graphics backend and input sources.
//!
//! The host owns the draw loop and calls [`EventLoopAware::process`] once per
//! frame. A frame polls every input source and dispatches the events, then
//! validates and draws each window, bottom first.

use std::sync::mpsc;

use tracing::debug;

use crate::error::{Error, ErrorHandler, Result};
use crate::event::MouseEvent;
use crate::graphics::Graphics;
use crate::style::StyleMap;
use crate::tree::ComponentTree;

// ---------------------------------------------------------------------------
// Host-facing traits
// ---------------------------------------------------------------------------

/// Something the host calls once per frame.
pub trait EventLoopAware {
    fn process(&mut self);
}

/// A pollable source of mouse events.
pub trait InputSource {
    /// Events that arrived since the last poll, oldest first.
    fn poll(&mut self) -> Result<Vec<MouseEvent>>;
}

/// Drains whatever has been sent so far. A disconnected sender simply stops
/// producing events.
impl InputSource for mpsc::Receiver<MouseEvent> {
    fn poll(&mut self) -> Result<Vec<MouseEvent>> {
        Ok(self.try_iter().collect())
    }
}

// ---------------------------------------------------------------------------
// ContextBuilder
// ---------------------------------------------------------------------------

/// Configuration for a [`Context`].
#[derive(Default)]
pub struct ContextBuilder {
    error_handler: Option<ErrorHandler>,
    inputs: Vec<Box<dyn InputSource>>,
    theme: StyleMap,
}

impl ContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route layout, draw and input failures here instead of the log.
    pub fn with_error_handler(mut self, handler: impl FnMut(&Error) + 'static) -> Self {
        self.error_handler = Some(Box::new(handler));
        self
    }

    /// Add an input source (builder). Sources are polled in the order added.
    pub fn with_input(mut self, input: impl InputSource + 'static) -> Self {
        self.inputs.push(Box::new(input));
        self
    }

    /// Set the fallback styles (builder).
    pub fn with_theme(mut self, theme: StyleMap) -> Self {
        self.theme = theme;
        self
    }

    pub fn build<G: Graphics>(self, graphics: G) -> Context<G> {
        let mut tree = ComponentTree::new();
        tree.set_theme(self.theme);
        if let Some(handler) = self.error_handler {
            tree.set_error_handler(handler);
        }
        Context {
            tree,
            graphics,
            inputs: self.inputs,
        }
    }
}

// ---------------------------------------------------------------------------
// Context
// ---------------------------------------------------------------------------

/// One component tree rendered through one graphics backend.
pub struct Context<G: Graphics> {
    tree: ComponentTree,
    graphics: G,
    inputs: Vec<Box<dyn InputSource>>,
}

impl<G: Graphics> Context<G> {
    /// A context with default configuration.
    pub fn new(graphics: G) -> Self {
        ContextBuilder::new().build(graphics)
    }

    pub fn tree(&self) -> &ComponentTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut ComponentTree {
        &mut self.tree
    }

    pub fn graphics(&self) -> &G {
        &self.graphics
    }

    pub fn graphics_mut(&mut self) -> &mut G {
        &mut self.graphics
    }

    /// Poll every source and dispatch the events. A failing source is
    /// reported and skipped for this frame.
    pub fn process_inputs(&mut self) {
        let mut events = Vec::new();
        for input in &mut self.inputs {
            match input.poll() {
                Ok(polled) => events.extend(polled),
                Err(err) => self.tree.report(&err),
            }
        }

        for mut event in events {
            self.tree.dispatch_mouse(&mut event);
        }
    }

    /// Validate and draw every window, bottom first.
    pub fn process_draw(&mut self) {
        let windows = self.tree.windows().to_vec();
        debug!(count = windows.len(), "drawing windows");
        for window in windows {
            let result = self
                .tree
                .validate(window, &self.graphics)
                .and_then(|()| self.tree.draw(window, &mut self.graphics));
            if let Err(err) = result {
                self.tree.report(&err);
            }
        }
    }
}

impl<G: Graphics> EventLoopAware for Context<G> {
    fn process(&mut self) {
        self.process_inputs();
        self.process_draw();
    }
}
