#![cfg(target_arch = "wasm32")]
use anyhow::Context;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use vropay_core::{FrameAnimator, SectionId, Theme, ViewState};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod content;
mod dom;
mod frame;
mod nav;
mod pack;
mod render;
mod reveal;
mod scroll;
mod style;
mod visibility;

use constants::*;

static STARTED: AtomicBool = AtomicBool::new(false);

/// Everything that must be released to tear the page down.
struct App {
    _listeners: Vec<dom::Listener>,
    _reveals: reveal::RevealObserver,
    _frame_loop: frame::LoopHandle,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("vropay-web starting");

    if STARTED.swap(true, Ordering::SeqCst) {
        log::warn!("[start] already running; ignoring");
        return Ok(());
    }
    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
            STARTED.store(false, Ordering::SeqCst);
        }
    });
    Ok(())
}

/// Remove every listener and stop the animation loop.
#[wasm_bindgen]
pub fn stop() {
    let app = APP.with(|slot| slot.borrow_mut().take());
    if app.is_some() {
        drop(app);
        log::info!("vropay-web stopped");
    }
    STARTED.store(false, Ordering::SeqCst);
}

fn resolve_theme(window: &web::Window, document: &web::Document) -> Theme {
    match dom::requested_theme(window, document) {
        Some(name) => Theme::by_name(&name).unwrap_or_else(|| {
            log::warn!(
                "[theme] unknown theme {:?}; expected one of {:?}",
                name,
                Theme::NAMES
            );
            Theme::default()
        }),
        None => Theme::default(),
    }
}

async fn init() -> anyhow::Result<()> {
    let (window, document) =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;

    let theme = resolve_theme(&window, &document);
    theme
        .validate()
        .with_context(|| format!("theme {:?} failed validation", theme.name))?;
    log::info!("[theme] {}", theme.name);
    dom::apply_theme_attrs(&document, theme.name, theme.background);

    content::render(&document, &theme)?;

    let mut listeners = Vec::new();
    let navigation = theme.navigation();
    let scroller = Rc::new(scroll::WindowScroller::new(window.clone()));
    listeners.extend(nav::build_dots(&document, navigation, scroller.clone())?);

    // Hero content animates in on load and stays; the rest follow the viewport.
    reveal::show(&document, SectionId::Hero);
    let reveals = reveal::RevealObserver::observe(&document)?;

    let start = Instant::now();
    let view = Rc::new(RefCell::new(ViewState::new(theme.sections)));
    {
        let document = document.clone();
        let mut last: Option<SectionId> = None;
        listeners.push(scroll::subscribe(
            &window,
            view.clone(),
            move || frame::seconds_since(start),
            move |snapshot| {
                let changed = last != Some(snapshot.section);
                nav::sync(&document, &snapshot, changed);
                last = Some(snapshot.section);
            },
        )?);
    }
    listeners.push(nav::wire_keyboard(
        &window,
        navigation,
        scroller,
        view.clone(),
    )?);

    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, CANVAS_ID)?;
    dom::sync_canvas_backing_size(&canvas);
    {
        let canvas = canvas.clone();
        listeners.push(dom::Listener::new(&window, "resize", move |_| {
            dom::sync_canvas_backing_size(&canvas);
        })?);
    }

    let gpu = frame::init_gpu(&canvas, theme.background).await;
    if gpu.is_none() {
        log::warn!("[gpu] WebGPU unavailable; showing page without 3D backgrounds");
    }
    // Without a GPU the loop still runs so scroll activity settles back to idle.
    let ctx = frame::FrameContext::new(view, FrameAnimator::new(&theme), gpu, canvas, start);
    let frame_loop = frame::start_loop(Rc::new(RefCell::new(ctx)));

    // stop() may have run while the adapter request was pending.
    if !STARTED.load(Ordering::SeqCst) {
        log::info!("[init] stopped during setup; releasing");
        return Ok(());
    }
    APP.with(|slot| {
        *slot.borrow_mut() = Some(App {
            _listeners: listeners,
            _reveals: reveals,
            _frame_loop: frame_loop,
        });
    });
    log::info!("[init] ready");
    Ok(())
}
