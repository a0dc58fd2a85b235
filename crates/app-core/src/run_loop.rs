//! Render-loop lifecycle as an explicit state machine.
//!
//! The scheduler itself is host-specific (requestAnimationFrame on the web,
//! the winit event loop natively); this machine is the part both share.
//! Cancelled is terminal: a torn-down loop never restarts.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopState {
    #[default]
    Idle,
    Running,
    Cancelled,
}

#[derive(Debug, Default)]
pub struct RenderLoop {
    state: LoopState,
}

impl RenderLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idle -> Running. Returns false (and changes nothing) from any other
    /// state.
    pub fn start(&mut self) -> bool {
        if self.state == LoopState::Idle {
            self.state = LoopState::Running;
            true
        } else {
            false
        }
    }

    /// Transition to Cancelled. Safe to call repeatedly and from teardown.
    pub fn cancel(&mut self) {
        self.state = LoopState::Cancelled;
    }

    /// Whether the next scheduled tick should run its body and reschedule.
    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn state(&self) -> LoopState {
        self.state
    }
}
