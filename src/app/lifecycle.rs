//! Window and immersive-scene lifecycle notifications
//!
//! Maps platform scene-phase changes onto window state and relays focus
//! transitions to the native engine. Each phase change is raised
//! immediately and exactly once; there is no buffering.

use crate::app::session::SessionContext;
use crate::app::state::{self, ImmersiveState};
use crate::platform::scene::WindowPhase;

/// Applies a window scene-phase change
///
/// Active opens the window and raises focus-gained; every other phase
/// (including ones this crate does not know) closes it and raises
/// focus-lost.
pub fn handle_window_phase(ctx: &mut SessionContext, phase: WindowPhase) {
    let (next, focused) = state::window_phase_transition(phase);
    ctx.set_window(next);

    match ctx.engine() {
        Some(engine) => engine.raise_focus_changed(focused),
        None => log::debug!("engine not attached, focus change dropped"),
    }
}

/// Commits the immersive session as closed once its presentation has
/// actually disappeared
///
/// Several code paths lead to closing (user toggle, window re-open,
/// system teardown); all of them converge here, so this is the only place
/// a close is committed.
pub fn handle_immersive_disappeared(ctx: &mut SessionContext) {
    ctx.set_immersive(ImmersiveState::Closed);
}

/// Reacts to the immersive render surface being handed over by the
/// presentation layer by starting the engine's world tracking
pub fn handle_render_surface_ready(ctx: &mut SessionContext) {
    match ctx.engine() {
        Some(engine) => engine.begin_world_tracking(),
        None => log::debug!("engine not attached, world tracking not started"),
    }
}
