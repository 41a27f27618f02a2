//! Owner execution context for session state
//!
//! All session state mutation happens on one logical thread. The dispatcher
//! owns the `SessionContext` on a dedicated thread and drains a queue of
//! discrete tasks; foreign and background callbacks marshal onto it through
//! a cloneable `DispatchHandle` instead of touching state directly. Tasks
//! run strictly sequentially, so at most one transition is ever in flight
//! and no locking is needed around the context itself.

use std::sync::mpsc::{self, Sender};
use std::thread::{self, JoinHandle};

use crate::app::session::SessionContext;

/// A discrete unit of work run on the owner thread
///
/// Tasks receive the context plus a handle for re-entrant scheduling, which
/// is how asynchronous action completions find their way back onto the
/// owner thread.
pub type SessionTask = Box<dyn FnOnce(&mut SessionContext, &DispatchHandle) + Send>;

enum Message {
    Task(SessionTask),
    Shutdown,
}

/// Dispatcher lifecycle errors
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Failed to spawn owner thread")]
    SpawnFailed,

    #[error("Dispatcher not running")]
    NotRunning,

    #[error("Thread join failed")]
    ThreadJoinFailed,
}

/// Cloneable sender used to marshal tasks onto the owner thread
#[derive(Clone)]
pub struct DispatchHandle {
    sender: Sender<Message>,
}

impl DispatchHandle {
    /// Schedules a task on the owner thread
    ///
    /// Returns false when the owner thread is gone; the task is dropped in
    /// that case, which only happens during shutdown.
    pub fn dispatch<F>(&self, task: F) -> bool
    where
        F: FnOnce(&mut SessionContext, &DispatchHandle) + Send + 'static,
    {
        match self.sender.send(Message::Task(Box::new(task))) {
            Ok(()) => true,
            Err(_) => {
                log::warn!("owner context stopped, dropping task");
                false
            }
        }
    }
}

/// Owns the session context on a dedicated thread and runs tasks against it
pub struct Dispatcher {
    thread_handle: Option<JoinHandle<SessionContext>>,
    handle: DispatchHandle,
}

impl Dispatcher {
    /// Takes ownership of the context and starts the owner thread
    pub fn spawn(ctx: SessionContext) -> Result<Self, DispatchError> {
        let (sender, receiver) = mpsc::channel();
        let handle = DispatchHandle { sender };
        let loop_handle = handle.clone();

        let thread_handle = thread::Builder::new()
            .name("session-owner".into())
            .spawn(move || {
                let mut ctx = ctx;
                while let Ok(message) = receiver.recv() {
                    match message {
                        Message::Task(task) => task(&mut ctx, &loop_handle),
                        Message::Shutdown => break,
                    }
                }
                ctx
            })
            .map_err(|_| DispatchError::SpawnFailed)?;

        Ok(Self {
            thread_handle: Some(thread_handle),
            handle,
        })
    }

    /// Handle for scheduling tasks from any thread
    pub fn handle(&self) -> DispatchHandle {
        self.handle.clone()
    }

    /// Check if the owner thread is still running
    pub fn is_running(&self) -> bool {
        self.thread_handle.is_some()
    }

    /// Stops the owner thread after draining already-queued tasks and
    /// returns the final context
    pub fn stop(&mut self) -> Result<SessionContext, DispatchError> {
        let thread = self.thread_handle.take().ok_or(DispatchError::NotRunning)?;

        // Queued tasks ahead of the shutdown message still run.
        let _ = self.handle.sender.send(Message::Shutdown);

        thread.join().map_err(|_| DispatchError::ThreadJoinFailed)
    }
}

impl Drop for Dispatcher {
    fn drop(&mut self) {
        // Ensure clean shutdown
        let _ = self.stop();
    }
}
