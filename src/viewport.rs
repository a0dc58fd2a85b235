//! Resize observation for the mount surface.

use crate::dom;
use crate::frame::FrameContext;
use app_core::RenderLoop;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Window resize listener feeding new surface dimensions to the camera and
/// renderer. Holds the frame context weakly: a resize delivered mid-teardown
/// upgrades to nothing and is ignored.
pub struct ResizeHook {
    closure: Option<Closure<dyn FnMut()>>,
}

impl ResizeHook {
    pub fn install(
        canvas: web::HtmlCanvasElement,
        ctx: Weak<RefCell<FrameContext>>,
        run: Rc<RefCell<RenderLoop>>,
    ) -> Self {
        let closure = Closure::wrap(Box::new(move || {
            let Some(ctx) = ctx.upgrade() else { return };
            if !run.borrow().is_running() {
                // Teardown already began; leave everything alone.
                return;
            }
            let (w, h) = dom::sync_canvas_backing_size(&canvas);
            ctx.borrow_mut().handle_resize(w, h);
        }) as Box<dyn FnMut()>);
        if let Some(window) = web::window() {
            _ = window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        }
        Self {
            closure: Some(closure),
        }
    }

    /// Deregister the listener. Idempotent; also runs on drop.
    pub fn remove(&mut self) {
        if let Some(closure) = self.closure.take() {
            if let Some(window) = web::window() {
                _ = window
                    .remove_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            }
        }
    }
}

impl Drop for ResizeHook {
    fn drop(&mut self) {
        self.remove();
    }
}
