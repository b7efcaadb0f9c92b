use crate::style;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

/// Look up `#id` and cast it to the expected element type.
pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("#{id} has unexpected type: {:?}", e))
}

pub fn create(document: &web::Document, tag: &str, class: &str) -> anyhow::Result<web::Element> {
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{tag}>: {:?}", e))?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    Ok(el)
}

pub fn append(parent: &web::Element, child: &web::Element) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("append_child: {:?}", e))
}

/// Event subscription that unsubscribes when dropped.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("add {event} listener: {:?}", e))?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        log::debug!("[dom] removed {} listener", self.event);
    }
}

#[inline]
pub fn add_click_listener(
    element: &web::Element,
    mut handler: impl FnMut() + 'static,
) -> anyhow::Result<Listener> {
    Listener::new(element, "click", move |_| handler())
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Requested theme: `?theme=` first, then `<html data-theme>`.
pub fn requested_theme(window: &web::Window, document: &web::Document) -> Option<String> {
    let from_query = window
        .location()
        .search()
        .ok()
        .and_then(|s| style::theme_from_query(&s).map(str::to_owned));
    from_query.or_else(|| {
        document
            .document_element()
            .and_then(|html| html.get_attribute("data-theme"))
    })
}

/// Mirror the active theme onto `<html>` so the stylesheet can follow it.
pub fn apply_theme_attrs(document: &web::Document, name: &str, background: [f32; 3]) {
    if let Some(html) = document.document_element() {
        let _ = html.set_attribute("data-theme", name);
        if let Some(html) = html.dyn_ref::<web::HtmlElement>() {
            let _ = html
                .style()
                .set_property("--page-bg", &style::css_hex(background));
        }
    }
}
