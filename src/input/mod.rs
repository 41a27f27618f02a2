pub mod spatial;

pub use spatial::{RawSpatialEvent, SpatialEventBridge};
