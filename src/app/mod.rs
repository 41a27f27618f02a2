pub mod coordinator;
pub mod lifecycle;
pub mod registry;
pub mod session;
pub mod state;

pub use registry::SessionRegistry;
pub use session::{
    ActionHandles, OpenCompletion, OpenImmersiveAction, PresentationAction, SessionContext,
    StateChange, StateObserver,
};
pub use state::{ImmersiveState, WindowState};
