// Host-side tests for the render-loop state machine and viewport record.
// The root crate is wasm-only, so these exercise the pure core crate directly.

use app_core::{LoopState, RenderLoop, Viewport};

#[test]
fn loop_starts_exactly_once() {
    let mut rl = RenderLoop::new();
    assert_eq!(rl.state(), LoopState::Idle);
    assert!(!rl.is_running());

    assert!(rl.start());
    assert_eq!(rl.state(), LoopState::Running);
    assert!(rl.is_running());

    assert!(!rl.start(), "a running loop must not restart");
    assert_eq!(rl.state(), LoopState::Running);
}

#[test]
fn cancel_is_idempotent_and_terminal() {
    let mut rl = RenderLoop::new();
    rl.start();
    rl.cancel();
    assert_eq!(rl.state(), LoopState::Cancelled);
    assert!(!rl.is_running(), "no tick may run after cancellation");

    // A second cancel is a no-op, not an error.
    rl.cancel();
    assert_eq!(rl.state(), LoopState::Cancelled);

    // Cancelled is terminal: start() must not resurrect the loop.
    assert!(!rl.start());
    assert_eq!(rl.state(), LoopState::Cancelled);
}

#[test]
fn cancel_before_start_skips_running_entirely() {
    let mut rl = RenderLoop::new();
    rl.cancel();
    assert!(!rl.start());
    assert!(!rl.is_running());
    assert_eq!(rl.state(), LoopState::Cancelled);
}

#[test]
fn viewport_apply_reports_changes_only_once() {
    let mut vp = Viewport::new(1920, 1080);
    assert!(!vp.apply(1920, 1080), "identical dimensions propagate nothing");
    assert!(vp.apply(800, 1200));
    assert!(!vp.apply(800, 1200));
    assert_eq!((vp.width, vp.height), (800, 1200));
}

#[test]
fn viewport_rejects_zero_area() {
    let mut vp = Viewport::new(1920, 1080);
    assert!(!vp.apply(0, 500));
    assert!(!vp.apply(500, 0));
    assert_eq!((vp.width, vp.height), (1920, 1080));
}

#[test]
fn viewport_aspect_flips_with_orientation() {
    let mut vp = Viewport::new(1920, 1080);
    assert!(vp.aspect() > 1.0);
    vp.apply(800, 1200);
    assert!(vp.aspect() < 1.0);
}
