//! Session lifecycle coordination for a spatial-computing shell
//!
//! This crate is the control layer between a host application's
//! presentation layer and a native rendering engine. It hands control back
//! and forth between a flat 2D window and an immersive rendering session,
//! and relays hand/controller spatial input to the engine.
//!
//! Layering:
//! - `app`: session state machines, transition protocol, lifecycle
//!   notifications, and the registry backing the foreign entry points
//! - `platform`: owner execution context plus the signal types the
//!   platform delivers
//! - `engine`: the foreign boundary toward the native engine, including
//!   the fixed-layout spatial event record
//! - `input`: the spatial event bridge (platform input to engine)
//! - `config`: render-layer configuration negotiation
//!
//! The host wires it together at startup: create a [`SessionContext`],
//! hand it to a [`Dispatcher`], install the dispatcher's handle into a
//! [`SessionRegistry`], then attach presentation action handles and the
//! engine linkage as they become available. Entry points invoked before
//! wiring completes are harmless no-ops.

pub mod app;
pub mod config;
pub mod engine;
pub mod input;
pub mod platform;

pub use app::{ImmersiveState, SessionContext, SessionRegistry, StateChange, WindowState};
pub use engine::{EngineBridge, Handedness, SpatialEventRecord, SpatialPhase};
pub use input::SpatialEventBridge;
pub use platform::{Dispatcher, OpenOutcome, RenderSessionSignal, WindowPhase};
