//! Fixed-layout spatial event record shared with the native engine
//!
//! The record crosses the foreign boundary by reference, so its field order
//! and size must stay stable. All types here are `#[repr(C)]` with explicit
//! discriminants; changing them breaks the engine-side struct definition.

/// Which hand produced a spatial input event
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handedness {
    Left = 0,
    Right = 1,
}

/// Phase of a spatial input event within its gesture
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpatialPhase {
    /// Gesture is in progress
    Active = 0,
    /// Gesture was cancelled by the system
    Cancelled = 1,
    /// Gesture completed normally
    Ended = 2,
}

/// 4x4 pose transform in column-major order, double precision
pub type PoseMatrix = [[f64; 4]; 4];

/// Identity pose, used to zero the forwarding buffer before first use
pub const IDENTITY_POSE: PoseMatrix = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// One normalized spatial input event as consumed by the native engine
///
/// The `id` field is always forwarded as 0; the engine assigns event
/// identity downstream.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialEventRecord {
    pub id: i32,
    pub handedness: Handedness,
    pub phase: SpatialPhase,
    pub transform: PoseMatrix,
}

impl SpatialEventRecord {
    /// Creates an empty record suitable as a reusable forwarding buffer
    pub fn empty() -> Self {
        Self {
            id: 0,
            handedness: Handedness::Left,
            phase: SpatialPhase::Active,
            transform: IDENTITY_POSE,
        }
    }
}
