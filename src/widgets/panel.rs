//! Panel: a plain component that paints its background.

use std::any::Any;

use crate::error::Result;
use crate::graphics::Graphics;
use crate::style::StyleLookup;
use crate::widget::{ComponentUi, DrawContext};

/// Fills its bounds with the `background` color, when one resolves.
///
/// Usually the delegate of a container: `Panel.into_container(layout)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Panel;

impl ComponentUi for Panel {
    fn name(&self) -> &str {
        "Panel"
    }

    fn draw(&self, g: &mut dyn Graphics, cx: &DrawContext<'_>) -> Result<()> {
        if let Some(color) = cx.style.color("background") {
            g.set_color(color);
            g.fill_rect(cx.size.to_bounds());
        }
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
