//! Platform-delivered scene and render-session signals
//!
//! These are the raw signal types the platform reports as the immersive
//! rendering surface and the 2D window move through their lifecycles. They
//! carry platform intent, not user intent: the render-session signal is the
//! final authority on whether the immersive session is actually running.

/// Status of the immersive rendering surface as reported by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderSessionSignal {
    /// The rendering surface was torn down (possibly system-initiated)
    Invalidated,
    /// The rendering surface is paused mid-transition
    Paused,
    /// The rendering surface is live and producing frames
    Running,
}

/// Scene phase of the 2D window surface
///
/// Marked non-exhaustive because the platform may grow additional phases;
/// anything unrecognized must map to the safe default (window closed,
/// focus lost).
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowPhase {
    /// Window is frontmost and receiving input
    Active,
    /// Window is visible but not receiving input
    Inactive,
    /// Window is not visible
    Background,
}

/// Outcome of an asynchronous immersive-session open attempt
///
/// Non-exhaustive: the presentation layer may report outcomes this crate
/// does not know about, and an unrecognized outcome is treated as a failed
/// open.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// The immersive session was presented
    Opened,
    /// The user declined the system confirmation
    UserCancelled,
    /// The platform failed to present the session
    Error,
}
