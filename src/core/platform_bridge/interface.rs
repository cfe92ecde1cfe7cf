//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Platform-to-core interface types (events and errors).
//
// Defines the contract for communication between the platform (window)
// thread and the core logic thread.
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::error::{EventLoopError, OsError};

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;

//=== PlatformEvent =======================================================

/// Events sent from platform to core over the bounded channel.
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformEvent {
    /// Input events gathered during one platform frame, in arrival order.
    Inputs(Vec<InputEvent>),

    /// Window close requested.
    WindowClosed,
}

//=== PlatformError =======================================================

/// Platform initialization and runtime errors. The winit error is kept as
/// the source.
#[derive(Debug)]
pub enum PlatformError {
    /// Event loop creation failed (OS-level issue).
    EventLoopCreation(EventLoopError),

    /// Event loop execution error.
    EventLoopExecution(EventLoopError),

    /// The window could not be created.
    WindowCreation(OsError),
}

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
            Self::WindowCreation(e) => write!(f, "Window creation failed: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EventLoopCreation(e) | Self::EventLoopExecution(e) => Some(e),
            Self::WindowCreation(e) => Some(e),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use std::error::Error;

    #[test]
    fn errors_describe_their_cause() {
        let error = PlatformError::EventLoopExecution(EventLoopError::ExitFailure(3));
        assert!(error.to_string().starts_with("Event loop error: "));
        assert!(error.to_string().contains('3'));

        let error = PlatformError::EventLoopCreation(EventLoopError::RecreationAttempt);
        assert!(error.to_string().starts_with("Event loop creation failed: "));
    }

    #[test]
    fn winit_error_is_kept_as_source() {
        let error = PlatformError::EventLoopExecution(EventLoopError::ExitFailure(3));
        let source = error.source().map(ToString::to_string);
        assert_eq!(source, Some(EventLoopError::ExitFailure(3).to_string()));
    }
}
