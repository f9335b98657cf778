pub mod canvas;
pub mod dom;
pub mod images;
pub mod runner;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

pub use canvas::CanvasSurface;
pub use images::ImageStore;
pub use runner::GalaxyRunner;

thread_local! {
    static RUNNER: RefCell<Option<GalaxyRunner>> = const { RefCell::new(None) };
}

/// Run `f` on the runner. Calls made before `galaxy_init` are dropped.
fn with_runner<R>(op: &str, f: impl FnOnce(&mut GalaxyRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| match cell.borrow_mut().as_mut() {
        Some(runner) => Some(f(runner)),
        None => {
            log::warn!("{op} before galaxy_init; ignored");
            None
        }
    })
}

#[wasm_bindgen]
pub fn galaxy_init(canvas_id: &str, config_json: Option<String>, manifest_json: Option<String>) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    match GalaxyRunner::new(canvas_id, config_json.as_deref(), manifest_json.as_deref()) {
        Ok(runner) => {
            RUNNER.with(|cell| *cell.borrow_mut() = Some(runner));
            log::info!("galaxy: initialized on #{canvas_id}");
        }
        Err(e) => log::error!("galaxy: init failed: {e}"),
    }
}

/// Advance and draw one frame. Drive from `requestAnimationFrame`.
#[wasm_bindgen]
pub fn galaxy_frame(dt_ms: f64) {
    with_runner("galaxy_frame", |r| r.frame(dt_ms));
}

#[wasm_bindgen]
pub fn galaxy_resize(width: u32, height: u32) {
    with_runner("galaxy_resize", |r| r.resize(width, height));
}

#[wasm_bindgen]
pub fn galaxy_click() -> bool {
    with_runner("galaxy_click", |r| r.click()).unwrap_or(false)
}

#[wasm_bindgen]
pub fn galaxy_unlock() -> bool {
    with_runner("galaxy_unlock", |r| r.unlock()).unwrap_or(false)
}

#[wasm_bindgen]
pub fn galaxy_set_focus(section_id: &str) {
    with_runner("galaxy_set_focus", |r| r.set_focus(section_id));
}

/// Intersection-observer callback: `ratio` of `section_id` is on screen.
#[wasm_bindgen]
pub fn galaxy_section_visible(section_id: &str, ratio: f32) {
    with_runner("galaxy_section_visible", |r| r.section_visible(section_id, ratio));
}

#[wasm_bindgen]
pub fn galaxy_zoom() -> f32 {
    with_runner("galaxy_zoom", |r| r.zoom()).unwrap_or(0.0)
}

#[wasm_bindgen]
pub fn galaxy_is_browsing() -> bool {
    with_runner("galaxy_is_browsing", |r| r.is_browsing()).unwrap_or(false)
}
