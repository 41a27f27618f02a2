pub mod dispatch;
pub mod scene;

pub use dispatch::{DispatchError, DispatchHandle, Dispatcher, SessionTask};
pub use scene::{OpenOutcome, RenderSessionSignal, WindowPhase};
