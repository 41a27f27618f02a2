//! Spatial input bridging to the native engine
//!
//! Hand/controller pose samples arrive from the platform in per-frame
//! batches and are pushed straight across the foreign boundary, one
//! normalized record at a time. Threading notes:
//! - batch delivery runs on the platform input context, never on the
//!   owner thread; session state is not touched here
//! - deliveries for a given source are serialized by the platform, so the
//!   single forwarding buffer needs no locking
//! - forwarding is fire-and-forget with no backpressure; an engine that
//!   cannot keep up drops or coalesces on its side

use std::sync::Arc;

use crate::engine::{EngineBridge, Handedness, PoseMatrix, SpatialEventRecord, SpatialPhase};

/// One raw spatial input event as delivered by the platform
///
/// Handedness and pose are both optional on the platform side; an event
/// missing either cannot be expressed to the engine and is dropped
/// individually.
#[derive(Debug, Clone, Copy)]
pub struct RawSpatialEvent {
    pub handedness: Option<Handedness>,
    pub phase: SpatialPhase,
    pub pose: Option<PoseMatrix>,
}

/// Normalizes raw platform events and pushes them to the engine
pub struct SpatialEventBridge {
    engine: Arc<dyn EngineBridge>,
    // Single-record forwarding buffer, reused per event. No queuing.
    buffer: SpatialEventRecord,
}

impl SpatialEventBridge {
    pub fn new(engine: Arc<dyn EngineBridge>) -> Self {
        Self {
            engine,
            buffer: SpatialEventRecord::empty(),
        }
    }

    /// Forwards a batch of events in the order received
    ///
    /// Events missing handedness or pose are skipped per-event; the rest
    /// of the batch continues. Returns the number of records forwarded
    /// (diagnostic only).
    pub fn forward_batch(&mut self, events: &[RawSpatialEvent]) -> usize {
        let mut forwarded = 0;

        for event in events {
            let (Some(handedness), Some(pose)) = (event.handedness, event.pose) else {
                log::debug!("spatial event missing handedness or pose, dropped");
                continue;
            };

            // Identity is assigned by the engine downstream.
            self.buffer.id = 0;
            self.buffer.handedness = handedness;
            self.buffer.phase = event.phase;
            self.buffer.transform = pose;

            self.engine.handle_spatial_event(&self.buffer);
            forwarded += 1;
        }

        forwarded
    }
}
