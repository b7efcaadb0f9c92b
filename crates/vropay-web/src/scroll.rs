use crate::dom::Listener;
use std::cell::RefCell;
use std::rc::Rc;
use vropay_core::{ScrollSnapshot, SmoothScroll, ViewState};
use web_sys as web;

/// `(scroll_y, scroll_height - inner_height)` of the page.
pub fn scroll_metrics(window: &web::Window) -> (f64, f64) {
    let offset = window.scroll_y().unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let content = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    (offset, content - viewport)
}

#[inline]
pub fn scrollable_extent(window: &web::Window) -> f64 {
    scroll_metrics(window).1
}

/// `window.scrollTo({ top, behavior })`.
pub struct WindowScroller {
    window: web::Window,
}

impl WindowScroller {
    pub fn new(window: web::Window) -> Self {
        Self { window }
    }

    pub fn extent(&self) -> f64 {
        scrollable_extent(&self.window)
    }
}

impl SmoothScroll for WindowScroller {
    fn scroll_to(&self, offset: f64, smooth: bool) {
        let opts = web::ScrollToOptions::new();
        opts.set_top(offset);
        opts.set_behavior(if smooth {
            web::ScrollBehavior::Smooth
        } else {
            web::ScrollBehavior::Instant
        });
        self.window.scroll_to_with_scroll_to_options(&opts);
    }
}

/// Feed the current scroll position into `view` once, then on every `scroll`
/// event. `on_change` sees each fresh snapshot synchronously.
pub fn subscribe(
    window: &web::Window,
    view: Rc<RefCell<ViewState>>,
    clock: impl Fn() -> f64 + 'static,
    mut on_change: impl FnMut(ScrollSnapshot) + 'static,
) -> anyhow::Result<Listener> {
    let (offset, extent) = scroll_metrics(window);
    let initial = view.borrow_mut().sync(offset, extent);
    on_change(initial);

    let win = window.clone();
    Listener::new(window, "scroll", move |_| {
        let (offset, extent) = scroll_metrics(&win);
        let snapshot = view.borrow_mut().on_scroll(offset, extent, clock());
        on_change(snapshot);
    })
}
