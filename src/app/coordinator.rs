//! Session transition protocol
//!
//! Effectful transitions between window and immersive presentation. Every
//! function here runs on the owner thread with exclusive access to the
//! context; asynchronous action outcomes are marshaled back through the
//! dispatch handle as fresh tasks.
//!
//! Final states are committed by outcome, never preemptively: Open only
//! once the renderer reports Running, Closed only once the presentation
//! layer confirms disappearance. The render signal is the final authority
//! and intentionally stays so even when a user-initiated close overlaps a
//! system-initiated teardown.

use crate::app::session::SessionContext;
use crate::app::state::{self, ImmersiveState};
use crate::platform::dispatch::DispatchHandle;
use crate::platform::scene::{OpenOutcome, RenderSessionSignal};

/// Toggles the immersive session in response to user intent
///
/// While a transition is in flight the request is ignored, not queued; the
/// UI is expected to have disabled the toggle control during InTransition.
pub fn toggle_immersive(ctx: &mut SessionContext, remote: &DispatchHandle) {
    match ctx.immersive() {
        ImmersiveState::Open => {
            ctx.set_immersive(ImmersiveState::InTransition);
            ctx.actions.invoke_close_immersive();
            // Closed is committed by the disappearance notification, not
            // here: multiple code paths lead to closing.
        }
        ImmersiveState::Closed => {
            if ctx.actions.open_immersive.is_none() {
                // A missing capability must not wedge the machine in
                // InTransition with no resolution path.
                log::debug!("open-immersive handle not attached, toggle ignored");
                return;
            }

            ctx.set_immersive(ImmersiveState::InTransition);
            let remote = remote.clone();
            ctx.actions.invoke_open_immersive(Box::new(move |outcome| {
                remote.dispatch(move |ctx, _| open_finished(ctx, outcome));
            }));
        }
        ImmersiveState::InTransition => {
            log::debug!("toggle ignored while transition in flight");
        }
    }
}

/// Resolves a finished open attempt
///
/// Runs on the owner thread once the presentation layer reports the
/// outcome of OpenImmersive.
pub fn open_finished(ctx: &mut SessionContext, outcome: OpenOutcome) {
    match outcome {
        OpenOutcome::Opened => {
            // Stay InTransition; the Running render signal commits Open.
            ctx.actions.invoke_close_window();
        }
        _ => {
            // Cancelled, failed, or unrecognized: the session did not open.
            ctx.set_immersive(ImmersiveState::Closed);
        }
    }
}

/// Applies a render-session signal reported by the platform
///
/// This is the authoritative path for confirming the immersive session is
/// actually running or has been torn down, independent of user-initiated
/// requests. A system-initiated teardown additionally closes the session
/// best-effort and brings the 2D window back.
pub fn handle_render_signal(ctx: &mut SessionContext, signal: RenderSessionSignal) {
    let Some(next) = state::render_signal_transition(ctx.immersive(), signal) else {
        return;
    };

    ctx.set_immersive(next);

    if signal == RenderSessionSignal::Invalidated {
        ctx.actions.invoke_close_immersive();
        ctx.actions.invoke_open_window();
    }
}
