use crate::constants::VISIBLE_CLASS;
use crate::visibility::{reveal_change, section_from_attr};
use vropay_core::SectionId;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn section_el(document: &web::Document, section: SectionId) -> Option<web::Element> {
    document
        .query_selector(&format!("section[data-section=\"{}\"]", section.index()))
        .ok()
        .flatten()
}

#[inline]
fn set_shown(el: &web::Element, shown: bool) {
    let _ = el.class_list().toggle_with_force(VISIBLE_CLASS, shown);
}

pub fn show(document: &web::Document, section: SectionId) {
    if let Some(el) = section_el(document, section) {
        set_shown(&el, true);
    }
}

/// Toggles section reveals as sections enter and leave the viewport.
/// Dropping it disconnects the observer.
pub struct RevealObserver {
    observer: web::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl RevealObserver {
    /// Observe every generated `<section data-section>` in `document`.
    pub fn observe(document: &web::Document) -> anyhow::Result<Self> {
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(section) = target
                    .get_attribute("data-section")
                    .as_deref()
                    .and_then(section_from_attr)
                else {
                    continue;
                };
                if let Some(shown) = reveal_change(section, entry.is_intersecting()) {
                    log::debug!("[reveal] {} shown={}", section.label(), shown);
                    set_shown(&target, shown);
                }
            }
        }) as Box<dyn FnMut(js_sys::Array)>);

        let init = web::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(0.0));
        let observer =
            web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;

        let mut observed = 0;
        for section in SectionId::ALL {
            if let Some(el) = section_el(document, section) {
                observer.observe(&el);
                observed += 1;
            }
        }
        log::info!("[reveal] observing {} sections", observed);
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
        log::debug!("[reveal] observer disconnected");
    }
}
