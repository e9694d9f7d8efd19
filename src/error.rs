//! Error type, result alias, and the tree-wide error handler.
//!
//! Precondition violations come back as `Err` from the call that caused them.
//! Failures inside a layout pass, a draw call, or input polling are instead
//! routed to an [`ErrorHandler`] so that one broken container never stops the
//! rest of the frame.

use crate::tree::ComponentId;

/// Errors produced by the toolkit.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An argument was out of range (negative size, negative anchor distance...).
    #[error("invalid argument '{name}': {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// The id does not refer to a live component.
    #[error("unknown component {0:?}")]
    UnknownComponent(ComponentId),

    /// A child was added to, or a layout requested from, a leaf component.
    #[error("component {0:?} is not a container")]
    NotAContainer(ComponentId),

    /// The operation would make a component its own ancestor.
    #[error("adding {child:?} under {parent:?} would create a cycle")]
    Cycle { parent: ComponentId, child: ComponentId },

    /// A layout constraint that the container's layout does not understand.
    #[error("{layout} layout does not accept a {constraint} constraint")]
    ConstraintMismatch {
        layout: &'static str,
        constraint: &'static str,
    },

    /// A layout pass could not produce an arrangement.
    #[error("layout of {container:?} failed: {reason}")]
    Layout { container: ComponentId, reason: String },

    /// A visual delegate failed to draw.
    #[error("draw failed: {0}")]
    Draw(String),

    /// An input source failed while polling.
    #[error("input failed: {0}")]
    Input(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Receives errors that are reported rather than returned.
pub type ErrorHandler = Box<dyn FnMut(&Error)>;

/// The handler installed when none is configured: log and carry on.
pub fn default_error_handler() -> ErrorHandler {
    Box::new(|err| tracing::error!(error = %err, "recoverable failure"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let err = Error::InvalidArgument {
            name: "width",
            reason: "must be zero or a positive number, got -1".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid argument 'width': must be zero or a positive number, got -1"
        );

        let err = Error::ConstraintMismatch { layout: "box", constraint: "border" };
        assert_eq!(err.to_string(), "box layout does not accept a border constraint");
    }

    #[test]
    fn default_handler_does_not_panic() {
        let mut handler = default_error_handler();
        handler(&Error::Draw("boom".into()));
    }
}
