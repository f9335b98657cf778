use galaxy_engine::SceneEvent;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

pub const FLASH_ID: &str = "transition-flash";
pub const FLASH_CLASS: &str = "flash-bang";
pub const INTERFACE_ID: &str = "main-interface";
pub const INTRO_LAYER_ID: &str = "intro-layer";

/// Apply the page-level side effect of a scene event. Every missing
/// element or rejected call is logged and skipped.
pub fn apply(event: SceneEvent) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("{event:?}: no document");
        return;
    };
    match event {
        SceneEvent::UnlockStarted => start_flash(&document),
        SceneEvent::InterfaceRevealed => reveal_interface(&document),
    }
}

fn element(document: &Document, id: &str) -> Option<Element> {
    let found = document.get_element_by_id(id);
    if found.is_none() {
        log::warn!("#{id} not found; skipping");
    }
    found
}

fn start_flash(document: &Document) {
    if let Some(flash) = element(document, FLASH_ID) {
        if let Err(e) = flash.class_list().add_1(FLASH_CLASS) {
            log::warn!("#{FLASH_ID}: {e:?}");
        }
    }
}

fn reveal_interface(document: &Document) {
    match document.body() {
        Some(body) => {
            if let Err(e) = body.style().set_property("overflow-y", "auto") {
                log::warn!("body overflow: {e:?}");
            }
        }
        None => log::warn!("no body; skipping scroll unlock"),
    }

    if let Some(interface) = element(document, INTERFACE_ID) {
        let classes = interface.class_list();
        if let Err(e) = classes.remove_1("hidden").and_then(|_| classes.add_1("visible")) {
            log::warn!("#{INTERFACE_ID}: {e:?}");
        }
    }

    if let Some(intro) = element(document, INTRO_LAYER_ID) {
        match intro.dyn_into::<HtmlElement>() {
            Ok(intro) => {
                if let Err(e) = intro.style().set_property("pointer-events", "none") {
                    log::warn!("#{INTRO_LAYER_ID}: {e:?}");
                }
            }
            Err(_) => log::warn!("#{INTRO_LAYER_ID} is not an HTML element"),
        }
    }
    log::info!("interface revealed");
}
