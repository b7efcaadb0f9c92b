//! Section dots, the top progress bar and keyboard section jumps.

use crate::constants::*;
use crate::dom::{self, Listener};
use crate::scroll::WindowScroller;
use crate::style;
use std::cell::RefCell;
use std::rc::Rc;
use vropay_core::{section_for_key, NavigationDispatcher, ScrollSnapshot, SectionId, ViewState};
use wasm_bindgen::JsCast;
use web_sys as web;

/// One button per section inside `#section-nav`; clicking requests a smooth
/// scroll to that section's jump target.
pub fn build_dots(
    document: &web::Document,
    nav: NavigationDispatcher,
    scroller: Rc<WindowScroller>,
) -> anyhow::Result<Vec<Listener>> {
    let root = document
        .get_element_by_id(NAV_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{NAV_ID}"))?;
    root.set_inner_html("");
    let mut listeners = Vec::with_capacity(SectionId::ALL.len());
    for section in SectionId::ALL {
        let button = dom::create(document, "button", "nav-dot")?;
        let _ = button.set_attribute("type", "button");
        let _ = button.set_attribute("data-section", &section.index().to_string());
        let _ = button.set_attribute("aria-label", &format!("Navigate to {}", section.label()));
        let label = dom::create(document, "span", "nav-label")?;
        label.set_text_content(Some(section.label()));
        dom::append(&button, &label)?;
        let dot = dom::create(document, "span", "dot")?;
        dom::append(&button, &dot)?;
        dom::append(&root, &button)?;

        let scroller = scroller.clone();
        listeners.push(dom::add_click_listener(&button, move || {
            nav.navigate(section, scroller.extent(), &*scroller);
        })?);
    }
    Ok(listeners)
}

pub fn set_active(document: &web::Document, active: SectionId) {
    let Ok(dots) = document.query_selector_all(".nav-dot") else {
        return;
    };
    for i in 0..dots.length() {
        let Some(el) = dots.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let is_active = el.get_attribute("data-section").as_deref()
            == Some(active.index().to_string().as_str());
        let _ = el.class_list().toggle_with_force(ACTIVE_CLASS, is_active);
        let _ = el.set_attribute("aria-current", if is_active { "true" } else { "false" });
    }
}

pub fn set_progress(document: &web::Document, global: f32) {
    if let Some(bar) = document.get_element_by_id(PROGRESS_BAR_ID) {
        let _ = bar.set_attribute("style", &style::progress_width(global));
    }
}

/// Progress bar every time; dots only when the section changes.
pub fn sync(document: &web::Document, snapshot: &ScrollSnapshot, section_changed: bool) {
    set_progress(document, snapshot.global);
    if section_changed {
        set_active(document, snapshot.section);
    }
}

/// Global keydown: arrows/page keys step, Home/End and 1-4 jump.
pub fn wire_keyboard(
    window: &web::Window,
    nav: NavigationDispatcher,
    scroller: Rc<WindowScroller>,
    view: Rc<RefCell<ViewState>>,
) -> anyhow::Result<Listener> {
    Listener::new(window, "keydown", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::KeyboardEvent>() else {
            return;
        };
        if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
            return;
        }
        // Leave typing in form fields alone.
        if let Some(target) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) {
            if matches!(target.tag_name().as_str(), "INPUT" | "TEXTAREA" | "SELECT") {
                return;
            }
        }
        let current = view.borrow().snapshot.section;
        if let Some(section) = section_for_key(&ev.key(), current) {
            log::debug!("[keys] {} -> {}", ev.key(), section.label());
            nav.navigate(section, scroller.extent(), &*scroller);
            ev.prevent_default();
        }
    })
}
