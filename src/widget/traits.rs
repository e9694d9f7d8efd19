//! Visual delegate trait: size hints and the draw hook.
//!
//! A [`ComponentUi`] is the per-component delegate that knows how big the
//! component wants to be and how to paint it. The tree owns one boxed delegate
//! per component and consults it during validation and drawing. The
//! [`ComponentUiExt`] trait adds builder-style helpers for turning a delegate
//! into [`ComponentData`].

use std::any::Any;

use crate::error::Result;
use crate::geometry::Dimension;
use crate::graphics::{Graphics, Measure};
use crate::layout::Layout;
use crate::style::StyleChain;
use crate::tree::ComponentData;

// ---------------------------------------------------------------------------
// Contexts
// ---------------------------------------------------------------------------

/// What a delegate may consult while computing its size hints.
pub struct SizeContext<'a> {
    /// Text and image measurement.
    pub measure: &'a dyn Measure,
    /// The component's resolved styles.
    pub style: StyleChain<'a>,
}

/// What a delegate may consult while drawing.
///
/// The graphics offset is already positioned at the component's top-left
/// corner, so the delegate draws in local coordinates `(0, 0)..size`.
pub struct DrawContext<'a> {
    pub size: Dimension,
    pub style: StyleChain<'a>,
}

// ---------------------------------------------------------------------------
// ComponentUi trait
// ---------------------------------------------------------------------------

/// The visual delegate of a component.
///
/// Object-safe: the tree stores `Box<dyn ComponentUi>`. Containers usually
/// return zero size hints, since their layout supplies the real numbers.
pub trait ComponentUi: Any {
    /// Widget name, used as the theme lookup prefix (e.g. "Label").
    fn name(&self) -> &str;

    /// Smallest size the content can live with.
    fn minimum_size(&self, _cx: &SizeContext<'_>) -> Dimension {
        Dimension::ZERO
    }

    /// Natural size of the content.
    fn preferred_size(&self, _cx: &SizeContext<'_>) -> Dimension {
        Dimension::ZERO
    }

    /// Paint the component. Children are drawn by the tree afterwards.
    fn draw(&self, _g: &mut dyn Graphics, _cx: &DrawContext<'_>) -> Result<()> {
        Ok(())
    }

    /// Downcast to `&dyn Any` for runtime type inspection.
    fn as_any(&self) -> &dyn Any;

    /// Downcast to `&mut dyn Any` for typed updates.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

// ---------------------------------------------------------------------------
// ComponentUiExt
// ---------------------------------------------------------------------------

/// Builder helpers, implemented for every sized delegate.
pub trait ComponentUiExt: ComponentUi + Sized {
    /// A leaf component driven by this delegate.
    fn into_component(self) -> ComponentData {
        ComponentData::new(self)
    }

    /// A container component driven by this delegate and `layout`.
    fn into_container(self, layout: impl Into<Layout>) -> ComponentData {
        ComponentData::container(self, layout)
    }
}

impl<T: ComponentUi> ComponentUiExt for T {}

// ---------------------------------------------------------------------------
// Blank
// ---------------------------------------------------------------------------

/// A delegate that draws nothing and has no size opinion.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blank;

impl ComponentUi for Blank {
    fn name(&self) -> &str {
        "Component"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::FillLayout;
    use crate::style::{Font, StyleMap};

    struct NullMeasure;

    impl Measure for NullMeasure {
        fn text_extent(&self, _text: &str, _font: &Font, _size: f64) -> Dimension {
            Dimension::ZERO
        }

        fn image_size(&self, _image: &str) -> Dimension {
            Dimension::ZERO
        }
    }

    struct Fixed(Dimension);

    impl ComponentUi for Fixed {
        fn name(&self) -> &str {
            "Fixed"
        }

        fn preferred_size(&self, _cx: &SizeContext<'_>) -> Dimension {
            self.0
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    #[test]
    fn default_size_hints_are_zero() {
        let style = StyleMap::new();
        let cx = SizeContext { measure: &NullMeasure, style: StyleChain::new(&style, &style, "") };
        assert_eq!(Blank.minimum_size(&cx), Dimension::ZERO);
        assert_eq!(Blank.preferred_size(&cx), Dimension::ZERO);

        let fixed = Fixed(Dimension::new(3.0, 4.0));
        assert_eq!(fixed.minimum_size(&cx), Dimension::ZERO);
        assert_eq!(fixed.preferred_size(&cx), Dimension::new(3.0, 4.0));
    }

    #[test]
    fn downcast_through_any() {
        let mut ui: Box<dyn ComponentUi> = Box::new(Fixed(Dimension::ZERO));
        assert!(ui.as_any().downcast_ref::<Fixed>().is_some());
        assert!(ui.as_any().downcast_ref::<Blank>().is_none());

        ui.as_any_mut().downcast_mut::<Fixed>().unwrap().0 = Dimension::new(1.0, 1.0);
        assert_eq!(ui.as_any().downcast_ref::<Fixed>().unwrap().0, Dimension::new(1.0, 1.0));
    }

    #[test]
    fn ext_builds_leaf_and_container() {
        let leaf = Blank.into_component();
        assert!(!leaf.is_container());
        assert_eq!(leaf.ui().name(), "Component");

        let container = Blank.into_container(FillLayout::default());
        assert!(container.is_container());
        assert_eq!(container.layout().map(Layout::name), Some("fill"));
    }
}
