//! Foreign-boundary entry points
//!
//! The native engine and the platform call into the session through a
//! `SessionRegistry` the host creates at startup and keeps for the process
//! lifetime. The registry holds the dispatch handle of the owner context
//! once the session is up; entry points invoked before that (or after
//! teardown) log and do nothing; none of them can fail.
//!
//! Spatial event batches do not go through the registry: they never touch
//! session state, so the host wires the platform input callback directly
//! to a `SpatialEventBridge`.

use std::sync::Mutex;

use crate::app::{coordinator, lifecycle};
use crate::app::session::SessionContext;
use crate::platform::dispatch::DispatchHandle;
use crate::platform::scene::{RenderSessionSignal, WindowPhase};

/// Explicit context object through which foreign entry points reach the
/// current session
pub struct SessionRegistry {
    slot: Mutex<Option<DispatchHandle>>,
}

impl SessionRegistry {
    /// Creates an empty registry; entry points are safe no-ops until
    /// `install` is called
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// Installs the owner-context handle, arming the entry points
    pub fn install(&self, handle: DispatchHandle) {
        if let Ok(mut guard) = self.slot.lock() {
            *guard = Some(handle);
        }
    }

    /// Disarms the entry points, e.g. ahead of dispatcher shutdown
    pub fn clear(&self) {
        if let Ok(mut guard) = self.slot.lock() {
            *guard = None;
        }
    }

    pub fn is_installed(&self) -> bool {
        self.slot.lock().map(|guard| guard.is_some()).unwrap_or(false)
    }

    /// User intent to enter or leave the immersive session
    pub fn request_toggle_immersive(&self) {
        self.dispatch("toggle-immersive", coordinator::toggle_immersive);
    }

    /// Render-session status reported by the platform's rendering layer
    pub fn on_render_session_signal(&self, signal: RenderSessionSignal) {
        self.dispatch("render-session-signal", move |ctx, _| {
            coordinator::handle_render_signal(ctx, signal);
        });
    }

    /// Scene-phase change of the 2D window
    pub fn on_window_lifecycle_phase(&self, phase: WindowPhase) {
        self.dispatch("window-lifecycle-phase", move |ctx, _| {
            lifecycle::handle_window_phase(ctx, phase);
        });
    }

    /// The immersive presentation has disappeared
    pub fn on_immersive_disappeared(&self) {
        self.dispatch("immersive-disappeared", |ctx, _| {
            lifecycle::handle_immersive_disappeared(ctx);
        });
    }

    /// The immersive render surface was handed over by the presentation
    /// layer
    pub fn on_render_surface_ready(&self) {
        self.dispatch("render-surface-ready", |ctx, _| {
            lifecycle::handle_render_surface_ready(ctx);
        });
    }

    fn dispatch<F>(&self, entry: &str, task: F)
    where
        F: FnOnce(&mut SessionContext, &DispatchHandle) + Send + 'static,
    {
        let Ok(guard) = self.slot.lock() else {
            log::warn!("session registry poisoned, {entry} ignored");
            return;
        };

        match guard.as_ref() {
            Some(handle) => {
                handle.dispatch(task);
            }
            None => log::warn!("session not installed, {entry} ignored"),
        }
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{ImmersiveState, WindowState};
    use crate::platform::dispatch::Dispatcher;

    #[test]
    fn entry_points_before_install_are_harmless() {
        let registry = SessionRegistry::new();
        assert!(!registry.is_installed());

        registry.request_toggle_immersive();
        registry.on_render_session_signal(RenderSessionSignal::Running);
        registry.on_window_lifecycle_phase(WindowPhase::Active);
        registry.on_immersive_disappeared();
        registry.on_render_surface_ready();
    }

    #[test]
    fn installed_registry_routes_to_the_owner_context() {
        let registry = SessionRegistry::new();
        let mut dispatcher = Dispatcher::spawn(SessionContext::new()).unwrap();
        registry.install(dispatcher.handle());
        assert!(registry.is_installed());

        registry.on_render_session_signal(RenderSessionSignal::Running);
        registry.on_window_lifecycle_phase(WindowPhase::Active);

        let ctx = dispatcher.stop().unwrap();
        assert_eq!(ctx.immersive(), ImmersiveState::Open);
        assert_eq!(ctx.window(), WindowState::Open);
    }

    #[test]
    fn cleared_registry_ignores_entry_points_again() {
        let registry = SessionRegistry::new();
        let mut dispatcher = Dispatcher::spawn(SessionContext::new()).unwrap();
        registry.install(dispatcher.handle());
        registry.clear();

        registry.on_render_session_signal(RenderSessionSignal::Running);

        let ctx = dispatcher.stop().unwrap();
        assert_eq!(ctx.immersive(), ImmersiveState::Closed);
    }
}
