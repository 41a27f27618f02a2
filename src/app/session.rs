//! Shared session context
//!
//! `SessionContext` is the single shared state object for the process: the
//! two lifecycle state machines, the capability slots supplied by the
//! presentation layer, the engine linkage, and the observer list that
//! replaces implicit UI re-render on mutation. It is owned by the
//! dispatcher thread and only ever touched from there.

use std::sync::Arc;

use crate::app::state::{ImmersiveState, WindowState};
use crate::engine::EngineBridge;
use crate::platform::scene::OpenOutcome;

/// Scene identifier the host registers its immersive space under
pub const IMMERSIVE_SPACE_ID: &str = "ImmersiveSpace";

/// Scene identifier the host registers its main 2D window under
pub const MAIN_WINDOW_ID: &str = "MainWindow";

/// Completion callback resolving an asynchronous open attempt
pub type OpenCompletion = Box<dyn FnOnce(OpenOutcome) + Send>;

/// Suspending open action: presents the immersive session and reports the
/// outcome through the completion callback once the user/system decides
pub type OpenImmersiveAction = Box<dyn Fn(OpenCompletion) + Send>;

/// Fire-and-forget presentation action (close immersive, open/close window)
///
/// Closing the immersive session has no completion of its own: the close is
/// only committed when the platform delivers the disappearance
/// notification, because multiple code paths lead to closing.
pub type PresentationAction = Box<dyn Fn() + Send>;

/// Capability slots supplied by the presentation layer once it initializes
///
/// Handles are attached lazily, possibly several ticks after the context is
/// created. Invoking an unset slot is a harmless, debug-logged no-op so that
/// entry points racing ahead of presentation wiring stay safe.
#[derive(Default)]
pub struct ActionHandles {
    pub open_immersive: Option<OpenImmersiveAction>,
    pub close_immersive: Option<PresentationAction>,
    pub open_window: Option<PresentationAction>,
    pub close_window: Option<PresentationAction>,
}

impl ActionHandles {
    /// Invokes the open-immersive handle, if attached
    ///
    /// Returns false (without consuming the completion) when the handle is
    /// missing, so the caller can avoid wedging the state machine in
    /// InTransition with no resolution path.
    pub fn invoke_open_immersive(&self, completion: OpenCompletion) -> bool {
        match &self.open_immersive {
            Some(action) => {
                action(completion);
                true
            }
            None => {
                log::debug!("open-immersive handle not attached, skipping");
                false
            }
        }
    }

    pub fn invoke_close_immersive(&self) {
        match &self.close_immersive {
            Some(action) => action(),
            None => log::debug!("close-immersive handle not attached, skipping"),
        }
    }

    pub fn invoke_open_window(&self) {
        match &self.open_window {
            Some(action) => action(),
            None => log::debug!("open-window handle not attached, skipping"),
        }
    }

    pub fn invoke_close_window(&self) {
        match &self.close_window {
            Some(action) => action(),
            None => log::debug!("close-window handle not attached, skipping"),
        }
    }
}

/// State mutation delivered to registered observers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChange {
    Immersive(ImmersiveState),
    Window(WindowState),
}

/// Observer callback, notified on every committed state mutation
pub type StateObserver = Box<dyn Fn(StateChange) + Send>;

/// The single shared application state object
pub struct SessionContext {
    immersive: ImmersiveState,
    window: WindowState,
    /// Presentation-layer capabilities, attached lazily by the host
    pub actions: ActionHandles,
    engine: Option<Arc<dyn EngineBridge>>,
    observers: Vec<StateObserver>,
}

impl SessionContext {
    /// Creates a fresh context with both state machines Closed and no
    /// capabilities attached
    pub fn new() -> Self {
        Self {
            immersive: ImmersiveState::default(),
            window: WindowState::default(),
            actions: ActionHandles::default(),
            engine: None,
            observers: Vec::new(),
        }
    }

    pub fn immersive(&self) -> ImmersiveState {
        self.immersive
    }

    pub fn window(&self) -> WindowState {
        self.window
    }

    /// Commits a new immersive state and notifies observers
    ///
    /// Call sites guard against redundant commits where the protocol
    /// requires it (repeated Running signals); this method itself notifies
    /// on every call.
    pub fn set_immersive(&mut self, state: ImmersiveState) {
        log::info!("immersive state {:?} -> {:?}", self.immersive, state);
        self.immersive = state;
        self.notify(StateChange::Immersive(state));
    }

    /// Commits a new window state and notifies observers
    pub fn set_window(&mut self, state: WindowState) {
        log::info!("window state {:?} -> {:?}", self.window, state);
        self.window = state;
        self.notify(StateChange::Window(state));
    }

    /// Attaches the engine linkage once the host has it available
    pub fn attach_engine(&mut self, engine: Arc<dyn EngineBridge>) {
        self.engine = Some(engine);
    }

    /// Engine linkage, if attached
    pub fn engine(&self) -> Option<&Arc<dyn EngineBridge>> {
        self.engine.as_ref()
    }

    /// Registers an observer for committed state mutations
    pub fn add_observer(&mut self, observer: StateObserver) {
        self.observers.push(observer);
    }

    fn notify(&self, change: StateChange) {
        for observer in &self.observers {
            observer(change);
        }
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}
