#![cfg(target_arch = "wasm32")]
//! Web front-end for the TechFlow landing hero: mounts the WebGPU
//! infinity-tube particle animation into the page and tears it down without
//! leaving timers, listeners, or GPU resources behind.

use app_core::{CameraRig, CurveParameters, HeroContent, ParticleSet, SetupError, Viewport};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod frame;
mod render;
mod viewport;

const DEFAULT_MOUNT_ID: &str = "hero-mount";

thread_local! {
    // Handle for the auto-mounted, page-lifetime hero.
    static PAGE_HERO: RefCell<Option<HeroHandle>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("app-web starting");

    spawn_local(async move {
        let handle = mount(DEFAULT_MOUNT_ID.to_owned()).await;
        if handle.is_mounted() {
            PAGE_HERO.with(|slot| *slot.borrow_mut() = Some(handle));
        }
    });
    Ok(())
}

/// Mount the hero animation into the element with id `mount_id`, using the
/// default copy. Never throws: setup failures log and return an inert handle
/// so the page keeps its static hero.
#[wasm_bindgen]
pub async fn mount(mount_id: String) -> HeroHandle {
    mount_with(mount_id, HeroContent::default()).await
}

/// Mount with page-supplied copy (company name, tagline, description).
#[wasm_bindgen]
pub async fn mount_with_content(
    mount_id: String,
    company_name: String,
    tagline: String,
    description: String,
) -> HeroHandle {
    mount_with(
        mount_id,
        HeroContent {
            company_name,
            tagline,
            description,
        },
    )
    .await
}

async fn mount_with(mount_id: String, content: HeroContent) -> HeroHandle {
    match mount_into(&mount_id, content).await {
        Ok(handle) => handle,
        Err(e) => {
            log::warn!("[hero] setup failed, leaving static hero: {e:?}");
            HeroHandle { inner: None }
        }
    }
}

/// Live hero animation plus everything needed to unwind it.
struct HeroInstance {
    canvas: web::HtmlCanvasElement,
    ctx: Rc<RefCell<frame::FrameContext>>,
    frame_loop: frame::FrameLoop,
    resize: viewport::ResizeHook,
}

impl HeroInstance {
    fn teardown(mut self) {
        // Order matters: stop ticking, stop listening, release the GPU, then
        // detach the surface from the page.
        self.frame_loop.cancel();
        self.resize.remove();
        self.ctx.borrow_mut().release();
        dom::detach_canvas(&self.canvas);
        log::info!("[hero] unmounted");
    }
}

/// Owner handle exported to the page. Dropping it does nothing; call
/// [`HeroHandle::unmount`] to tear the animation down.
#[wasm_bindgen]
pub struct HeroHandle {
    inner: Option<HeroInstance>,
}

#[wasm_bindgen]
impl HeroHandle {
    /// Tear the animation down. Safe to call more than once.
    pub fn unmount(&mut self) {
        if let Some(inst) = self.inner.take() {
            inst.teardown();
        }
    }

    /// Whether this handle still owns a live animation.
    pub fn is_mounted(&self) -> bool {
        self.inner.is_some()
    }
}

async fn mount_into(mount_id: &str, content: HeroContent) -> anyhow::Result<HeroHandle> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let mount = dom::find_mount(&document, mount_id)
        .ok_or_else(|| SetupError::MountMissing(mount_id.to_owned()))?;
    let (mount_w, mount_h) = dom::mount_size(&mount);
    if mount_w == 0 || mount_h == 0 {
        // Layout has not settled; the page keeps its static hero.
        return Err(SetupError::ZeroSizedSurface {
            width: mount_w,
            height: mount_h,
        }
        .into());
    }

    dom::inject_content(&document, &content);

    let canvas = dom::attach_canvas(&document, &mount)
        .ok_or_else(|| anyhow::anyhow!("canvas creation failed"))?;
    let (width, height) = dom::sync_canvas_backing_size(&canvas);

    let params = CurveParameters::default();
    let seed = js_sys::Date::now() as u64;
    let particles = ParticleSet::new(&params, seed)?;
    let camera = CameraRig::new(params.scale, width, height);

    let gpu = match render::GpuState::new(&canvas, params.particle_count).await {
        Ok(g) => g,
        Err(e) => {
            log::warn!("[hero] WebGPU unavailable, static hero: {e:?}");
            dom::detach_canvas(&canvas);
            return Ok(HeroHandle { inner: None });
        }
    };

    let ctx = Rc::new(RefCell::new(frame::FrameContext {
        particles,
        camera,
        viewport: Viewport::new(width, height),
        canvas: canvas.clone(),
        gpu: Some(gpu),
        started_at: Instant::now(),
    }));

    let frame_loop = frame::FrameLoop::start(ctx.clone());
    let resize =
        viewport::ResizeHook::install(canvas.clone(), Rc::downgrade(&ctx), frame_loop.run_state());

    log::info!(
        "[hero] mounted {}x{} with {} particles",
        width,
        height,
        params.particle_count
    );
    Ok(HeroHandle {
        inner: Some(HeroInstance {
            canvas,
            ctx,
            frame_loop,
            resize,
        }),
    })
}
