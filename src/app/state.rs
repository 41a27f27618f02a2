//! Session state machines
//!
//! Defines the two independent state machines governing the immersive
//! rendering session and the 2D window surface, plus the pure transition
//! functions driven by platform signals. Effectful transitions (invoking
//! presentation-layer actions) live in the coordinator.

use crate::platform::scene::{RenderSessionSignal, WindowPhase};

/// State of the immersive rendering session
///
/// InTransition is mandatory during any asynchronous open or close and is
/// never skipped: it doubles as the re-entrancy guard that rejects a second
/// toggle request arriving mid-flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImmersiveState {
    /// No immersive session is presented
    Closed,
    /// An open or close is in flight, awaiting platform confirmation
    InTransition,
    /// The renderer confirmed the session is running
    Open,
}

impl Default for ImmersiveState {
    fn default() -> Self {
        Self::Closed
    }
}

/// State of the 2D window surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowState {
    Closed,
    InTransition,
    Open,
}

impl Default for WindowState {
    fn default() -> Self {
        Self::Closed
    }
}

/// Maps a render-session signal onto the immersive state machine
///
/// Returns the state to commit, or None when the signal requires no state
/// change. Running and Invalidated are guarded against the current state so
/// repeated signals commit (and notify observers) at most once; Paused
/// always re-commits InTransition.
pub fn render_signal_transition(
    current: ImmersiveState,
    signal: RenderSessionSignal,
) -> Option<ImmersiveState> {
    match signal {
        RenderSessionSignal::Invalidated => {
            (current != ImmersiveState::Closed).then_some(ImmersiveState::Closed)
        }
        RenderSessionSignal::Paused => Some(ImmersiveState::InTransition),
        RenderSessionSignal::Running => {
            (current != ImmersiveState::Open).then_some(ImmersiveState::Open)
        }
    }
}

/// Maps a window scene phase to window state plus focus flag
///
/// Anything other than Active is the safe default: window closed, focus
/// lost. Unrecognized future phases land there too.
pub fn window_phase_transition(phase: WindowPhase) -> (WindowState, bool) {
    match phase {
        WindowPhase::Active => (WindowState::Open, true),
        _ => (WindowState::Closed, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_states_are_closed() {
        assert_eq!(ImmersiveState::default(), ImmersiveState::Closed);
        assert_eq!(WindowState::default(), WindowState::Closed);
    }

    #[test]
    fn invalidated_closes_from_any_non_closed_state() {
        assert_eq!(
            render_signal_transition(ImmersiveState::Open, RenderSessionSignal::Invalidated),
            Some(ImmersiveState::Closed)
        );
        assert_eq!(
            render_signal_transition(
                ImmersiveState::InTransition,
                RenderSessionSignal::Invalidated
            ),
            Some(ImmersiveState::Closed)
        );
    }

    #[test]
    fn invalidated_is_idempotent_when_already_closed() {
        assert_eq!(
            render_signal_transition(ImmersiveState::Closed, RenderSessionSignal::Invalidated),
            None
        );
    }

    #[test]
    fn paused_always_commits_in_transition() {
        for current in [
            ImmersiveState::Closed,
            ImmersiveState::InTransition,
            ImmersiveState::Open,
        ] {
            assert_eq!(
                render_signal_transition(current, RenderSessionSignal::Paused),
                Some(ImmersiveState::InTransition)
            );
        }
    }

    #[test]
    fn running_opens_only_when_not_already_open() {
        assert_eq!(
            render_signal_transition(ImmersiveState::InTransition, RenderSessionSignal::Running),
            Some(ImmersiveState::Open)
        );
        assert_eq!(
            render_signal_transition(ImmersiveState::Closed, RenderSessionSignal::Running),
            Some(ImmersiveState::Open)
        );
        assert_eq!(
            render_signal_transition(ImmersiveState::Open, RenderSessionSignal::Running),
            None
        );
    }

    #[test]
    fn active_phase_opens_window_with_focus() {
        assert_eq!(
            window_phase_transition(WindowPhase::Active),
            (WindowState::Open, true)
        );
    }

    #[test]
    fn non_active_phases_close_window_and_drop_focus() {
        assert_eq!(
            window_phase_transition(WindowPhase::Inactive),
            (WindowState::Closed, false)
        );
        assert_eq!(
            window_phase_transition(WindowPhase::Background),
            (WindowState::Closed, false)
        );
    }
}
