//! Per-frame driver: advance particles, update the camera, draw; scheduled
//! against requestAnimationFrame until cancelled.

use crate::render::GpuState;
use app_core::{CameraRig, ParticleSet, RenderLoop, Viewport};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub particles: ParticleSet,
    pub camera: CameraRig,
    pub viewport: Viewport,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<GpuState>,
    pub started_at: Instant,
}

impl FrameContext {
    /// One tick. Particle advancement happens before the camera update,
    /// which happens before the draw call.
    pub fn frame(&mut self) {
        let now_ms = self.started_at.elapsed().as_secs_f64() * 1000.0;
        self.particles.advance(now_ms);
        self.camera.update(now_ms);
        // Pick up backing-size changes that landed between resize events.
        let (w, h) = (self.canvas.width(), self.canvas.height());
        if self.viewport.apply(w, h) {
            self.camera.on_resize(w, h);
        }
        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(w, h);
            if let Err(e) = g.render(&self.particles, self.camera.view_proj()) {
                log::error!("render error: {:?}", e);
            }
        }
    }

    /// Apply freshly measured surface dimensions (the resize event path).
    /// Identical dimensions propagate nothing.
    pub fn handle_resize(&mut self, width: u32, height: u32) {
        if !self.viewport.apply(width, height) {
            return;
        }
        self.camera.on_resize(width, height);
        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(width, height);
        }
    }

    /// Drop the renderable and simulation state ahead of the final Rc
    /// release, so teardown frees the GPU immediately instead of waiting for
    /// the last closure to unwind.
    pub fn release(&mut self) {
        self.gpu = None;
        self.particles.clear();
    }
}

/// Owns the self-rescheduling animation-frame closure and its loop state.
pub struct FrameLoop {
    run: Rc<RefCell<RenderLoop>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    raf_id: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    /// Start ticking `ctx` once per display refresh.
    pub fn start(ctx: Rc<RefCell<FrameContext>>) -> Self {
        let run = Rc::new(RefCell::new(RenderLoop::new()));
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

        let run_tick = run.clone();
        let tick_clone = tick.clone();
        let raf_tick = raf_id.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !run_tick.borrow().is_running() {
                // Cancelled between scheduling and delivery: skip the body
                // and do not reschedule.
                raf_tick.set(None);
                return;
            }
            ctx.borrow_mut().frame();
            raf_tick.set(request_frame(tick_clone.borrow().as_ref()));
        }) as Box<dyn FnMut()>));

        let started = run.borrow_mut().start();
        debug_assert!(started);
        raf_id.set(request_frame(tick.borrow().as_ref()));
        Self { run, tick, raf_id }
    }

    /// Shared loop state, for teardown-race guards elsewhere.
    pub fn run_state(&self) -> Rc<RefCell<RenderLoop>> {
        self.run.clone()
    }

    /// Cancel the loop: no further tick runs or reschedules, the pending
    /// animation frame is withdrawn, and the closure is released. Idempotent
    /// and safe to call from teardown.
    pub fn cancel(&self) {
        self.run.borrow_mut().cancel();
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn request_frame(tick: Option<&Closure<dyn FnMut()>>) -> Option<i32> {
    let tick = tick?;
    let w = web::window()?;
    w.request_animation_frame(tick.as_ref().unchecked_ref()).ok()
}
