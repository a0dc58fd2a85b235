//! DOM plumbing for the hero mount: canvas attach/detach, backing-size sync,
//! and copy injection.

use app_core::{HeroContent, DESCRIPTION_DELAY_SEC};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Locate the hero mount region by element id.
pub fn find_mount(document: &web::Document, mount_id: &str) -> Option<web::Element> {
    document.get_element_by_id(mount_id)
}

/// Create the rendering canvas and attach it to the mount element.
pub fn attach_canvas(
    document: &web::Document,
    mount: &web::Element,
) -> Option<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document.create_element("canvas").ok()?.dyn_into().ok()?;
    let style = canvas.style();
    _ = style.set_property("width", "100%");
    _ = style.set_property("height", "100%");
    _ = style.set_property("display", "block");
    mount.append_child(&canvas).ok()?;
    Some(canvas)
}

/// Remove the rendering canvas from its mount again.
pub fn detach_canvas(canvas: &web::HtmlCanvasElement) {
    if let Some(parent) = canvas.parent_element() {
        _ = parent.remove_child(canvas);
    }
}

/// Measure the mount element in physical pixels without touching the canvas.
pub fn mount_size(mount: &web::Element) -> (u32, u32) {
    let dpr = web::window().map_or(1.0, |w| w.device_pixel_ratio());
    let rect = mount.get_bounding_client_rect();
    ((rect.width() * dpr) as u32, (rect.height() * dpr) as u32)
}

/// Match the canvas backing store to its CSS size times devicePixelRatio and
/// return the resulting pixel dimensions.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
    (canvas.width(), canvas.height())
}

/// Write the hero copy into the page and stagger the tagline fragments.
///
/// Expects `#hero-name`, `#hero-tagline` and `#hero-description`; absent
/// elements are skipped, leaving whatever copy the page shipped.
pub fn inject_content(document: &web::Document, content: &HeroContent) {
    if let Some(el) = document.get_element_by_id("hero-name") {
        el.set_text_content(Some(&content.company_name));
    }
    if let Some(el) = document.get_element_by_id("hero-tagline") {
        el.set_text_content(None);
        for (i, phrase) in content.tagline_phrases().iter().enumerate() {
            let Ok(span) = document.create_element("span") else {
                continue;
            };
            span.set_text_content(Some(&format!("{phrase}.")));
            if let Some(he) = span.dyn_ref::<web::HtmlElement>() {
                _ = he.style().set_property("display", "block");
                _ = he.style().set_property(
                    "transition-delay",
                    &format!("{:.2}s", HeroContent::entrance_delay_sec(i)),
                );
            }
            _ = el.append_child(&span);
        }
        _ = el.class_list().add_1("hero-enter");
    }
    if let Some(el) = document.get_element_by_id("hero-description") {
        el.set_text_content(Some(&content.description));
        if let Some(he) = el.dyn_ref::<web::HtmlElement>() {
            _ = he
                .style()
                .set_property("transition-delay", &format!("{DESCRIPTION_DELAY_SEC:.2}s"));
        }
    }
}
