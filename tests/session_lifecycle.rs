//! End-to-end lifecycle coverage through the public wiring: registry entry
//! points marshaling onto the owner context, presentation handles supplied
//! by a fake host, and a recording engine on the far side of the foreign
//! boundary.

use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, Mutex};

use spatial_shell::app::session::SessionContext;
use spatial_shell::app::StateChange;
use spatial_shell::engine::{EngineBridge, Handedness, SpatialEventRecord};
use spatial_shell::input::{RawSpatialEvent, SpatialEventBridge};
use spatial_shell::platform::Dispatcher;
use spatial_shell::{
    ImmersiveState, OpenOutcome, RenderSessionSignal, SessionRegistry, SpatialPhase, WindowPhase,
    WindowState,
};

#[derive(Default)]
struct RecordingEngine {
    focus_changes: Mutex<Vec<bool>>,
    tracking_starts: Mutex<u32>,
    spatial_events: Mutex<Vec<SpatialEventRecord>>,
}

impl EngineBridge for RecordingEngine {
    fn handle_spatial_event(&self, record: &SpatialEventRecord) {
        self.spatial_events.lock().unwrap().push(*record);
    }

    fn raise_focus_changed(&self, focused: bool) {
        self.focus_changes.lock().unwrap().push(focused);
    }

    fn begin_world_tracking(&self) {
        *self.tracking_starts.lock().unwrap() += 1;
    }
}

struct Harness {
    registry: SessionRegistry,
    dispatcher: Dispatcher,
    engine: Arc<RecordingEngine>,
    calls: Arc<Mutex<Vec<&'static str>>>,
    changes: Receiver<StateChange>,
    window_closed: Receiver<()>,
}

/// Wires a session the way a host application would at startup: context,
/// owner thread, registry, presentation handles, engine linkage.
fn start_session(open_outcome: OpenOutcome) -> Harness {
    let engine = Arc::new(RecordingEngine::default());
    let calls = Arc::new(Mutex::new(Vec::new()));
    let (changes_tx, changes) = mpsc::channel();
    let (window_closed_tx, window_closed) = mpsc::channel();

    let mut ctx = SessionContext::new();
    ctx.attach_engine(engine.clone());
    ctx.add_observer(Box::new(move |change| {
        changes_tx.send(change).ok();
    }));

    ctx.actions.open_immersive = Some(Box::new(move |completion| completion(open_outcome)));
    let sink = Arc::clone(&calls);
    ctx.actions.close_immersive = Some(Box::new(move || {
        sink.lock().unwrap().push("close_immersive");
    }));
    let sink = Arc::clone(&calls);
    ctx.actions.open_window = Some(Box::new(move || {
        sink.lock().unwrap().push("open_window");
    }));
    let sink = Arc::clone(&calls);
    ctx.actions.close_window = Some(Box::new(move || {
        sink.lock().unwrap().push("close_window");
        window_closed_tx.send(()).ok();
    }));

    let dispatcher = Dispatcher::spawn(ctx).unwrap();
    let registry = SessionRegistry::new();
    registry.install(dispatcher.handle());

    Harness {
        registry,
        dispatcher,
        engine,
        calls,
        changes,
        window_closed,
    }
}

#[test]
fn full_window_to_immersive_handoff_and_back() {
    let mut harness = start_session(OpenOutcome::Opened);

    // Window comes up frontmost.
    harness
        .registry
        .on_window_lifecycle_phase(WindowPhase::Active);
    assert_eq!(
        harness.changes.recv().unwrap(),
        StateChange::Window(WindowState::Open)
    );

    // User toggles into the immersive session; open resolves Opened, which
    // dismisses the window but leaves the machine awaiting the renderer.
    harness.registry.request_toggle_immersive();
    assert_eq!(
        harness.changes.recv().unwrap(),
        StateChange::Immersive(ImmersiveState::InTransition)
    );
    harness.window_closed.recv().unwrap();

    // Renderer confirms: now the session is Open.
    harness
        .registry
        .on_render_session_signal(RenderSessionSignal::Running);
    assert_eq!(
        harness.changes.recv().unwrap(),
        StateChange::Immersive(ImmersiveState::Open)
    );

    // Toggle back out: close is requested, Closed commits only on the
    // disappearance notification.
    harness.registry.request_toggle_immersive();
    assert_eq!(
        harness.changes.recv().unwrap(),
        StateChange::Immersive(ImmersiveState::InTransition)
    );
    harness.registry.on_immersive_disappeared();
    assert_eq!(
        harness.changes.recv().unwrap(),
        StateChange::Immersive(ImmersiveState::Closed)
    );

    let ctx = harness.dispatcher.stop().unwrap();
    assert_eq!(ctx.immersive(), ImmersiveState::Closed);
    assert_eq!(
        *harness.calls.lock().unwrap(),
        vec!["close_window", "close_immersive"]
    );
    assert_eq!(*harness.engine.focus_changes.lock().unwrap(), vec![true]);
}

#[test]
fn cancelled_open_leaves_the_window_alone() {
    let mut harness = start_session(OpenOutcome::UserCancelled);

    harness.registry.request_toggle_immersive();
    assert_eq!(
        harness.changes.recv().unwrap(),
        StateChange::Immersive(ImmersiveState::InTransition)
    );
    assert_eq!(
        harness.changes.recv().unwrap(),
        StateChange::Immersive(ImmersiveState::Closed)
    );

    let ctx = harness.dispatcher.stop().unwrap();
    assert_eq!(ctx.immersive(), ImmersiveState::Closed);
    assert!(harness.calls.lock().unwrap().is_empty());
}

#[test]
fn system_teardown_reopens_the_window() {
    let mut harness = start_session(OpenOutcome::Opened);

    harness
        .registry
        .on_render_session_signal(RenderSessionSignal::Running);
    assert_eq!(
        harness.changes.recv().unwrap(),
        StateChange::Immersive(ImmersiveState::Open)
    );

    // Unprompted invalidation, e.g. the system tore the session down.
    harness
        .registry
        .on_render_session_signal(RenderSessionSignal::Invalidated);
    assert_eq!(
        harness.changes.recv().unwrap(),
        StateChange::Immersive(ImmersiveState::Closed)
    );

    let ctx = harness.dispatcher.stop().unwrap();
    assert_eq!(ctx.immersive(), ImmersiveState::Closed);
    assert_eq!(
        *harness.calls.lock().unwrap(),
        vec!["close_immersive", "open_window"]
    );
}

#[test]
fn surface_ready_starts_world_tracking() {
    let mut harness = start_session(OpenOutcome::Opened);

    harness.registry.on_render_surface_ready();

    harness.dispatcher.stop().unwrap();
    assert_eq!(*harness.engine.tracking_starts.lock().unwrap(), 1);
}

#[test]
fn spatial_events_reach_the_engine_alongside_the_session() {
    let harness = start_session(OpenOutcome::Opened);

    // The input path bypasses the registry entirely.
    let mut bridge = SpatialEventBridge::new(harness.engine.clone());
    let pose = spatial_shell::engine::IDENTITY_POSE;
    let forwarded = bridge.forward_batch(&[
        RawSpatialEvent {
            handedness: Some(Handedness::Left),
            phase: SpatialPhase::Active,
            pose: Some(pose),
        },
        RawSpatialEvent {
            handedness: Some(Handedness::Right),
            phase: SpatialPhase::Ended,
            pose: None,
        },
    ]);

    assert_eq!(forwarded, 1);
    let records = harness.engine.spatial_events.lock().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].handedness, Handedness::Left);
}
