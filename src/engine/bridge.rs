//! Entry points consumed on the native engine side
//!
//! The engine is an external collaborator reached through a small set of
//! foreign calls. The host application implements this trait over its real
//! engine linkage; everything in this crate talks to the engine exclusively
//! through it. All calls are fire-and-forget with no acknowledgement; if
//! the engine cannot keep up it drops or coalesces on its side.

use crate::engine::record::SpatialEventRecord;

/// Foreign calls into the native engine
///
/// Implementations must be callable from both the owner execution context
/// (focus and tracking notifications) and the platform input context
/// (spatial events), hence `Send + Sync`.
pub trait EngineBridge: Send + Sync {
    /// Pushes one normalized spatial input event, by reference
    fn handle_spatial_event(&self, record: &SpatialEventRecord);

    /// Notifies the engine that window focus was gained or lost
    fn raise_focus_changed(&self, focused: bool);

    /// Starts the engine's world-tracking provider
    ///
    /// Invoked once the immersive render surface is handed over by the
    /// presentation layer.
    fn begin_world_tracking(&self);
}
