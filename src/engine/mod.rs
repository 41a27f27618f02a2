pub mod bridge;
pub mod record;

pub use bridge::EngineBridge;
pub use record::{Handedness, PoseMatrix, SpatialEventRecord, SpatialPhase, IDENTITY_POSE};
