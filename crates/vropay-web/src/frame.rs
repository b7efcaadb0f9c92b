use crate::render;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use vropay_core::{FrameAnimator, FrameInput, SceneBuffer, ViewState};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub view: Rc<RefCell<ViewState>>,
    pub animator: FrameAnimator,
    pub graph: SceneBuffer,
    pub gpu: Option<render::GpuState<'a>>,
    pub canvas: web::HtmlCanvasElement,
    pub start: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        view: Rc<RefCell<ViewState>>,
        animator: FrameAnimator,
        gpu: Option<render::GpuState<'a>>,
        canvas: web::HtmlCanvasElement,
        start: Instant,
    ) -> Self {
        Self {
            view,
            animator,
            graph: SceneBuffer::new(),
            gpu,
            canvas,
            start,
        }
    }

    #[inline]
    pub fn elapsed(&self) -> f64 {
        seconds_since(self.start)
    }

    pub fn frame(&mut self) {
        let now = self.elapsed();
        let snapshot = {
            let mut view = self.view.borrow_mut();
            if view.settle(now) {
                log::debug!("[frame] scroll settled");
            }
            view.snapshot
        };
        let Some(g) = &mut self.gpu else {
            return;
        };

        // Only the active section's scene is mounted.
        if self.graph.section() != Some(snapshot.section) {
            self.graph.mount(self.animator.scene(snapshot.section));
            log::debug!(
                "[frame] mounted {} ({} elements)",
                snapshot.section.label(),
                self.graph.len()
            );
        }

        let input = FrameInput {
            snapshot,
            elapsed: now as f32,
        };
        self.animator.tick(&input, &mut self.graph);

        g.resize_if_needed(self.canvas.width(), self.canvas.height());
        let spec = self.animator.scene(snapshot.section);
        match g.render(&self.graph, spec, now as f32) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[frame] surface lost; reconfiguring");
                g.reconfigure();
            }
            Err(e) => log::error!("[frame] render error: {:?}", e),
        }
    }
}

/// Shared clock for scroll timestamps and frame time.
#[inline]
pub fn seconds_since(start: Instant) -> f64 {
    start.elapsed().as_secs_f64()
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    background: [f32; 3],
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, background).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Running requestAnimationFrame loop. Dropping it cancels the pending frame
/// and releases the closure.
pub struct LoopHandle {
    tick: Tick,
    pending: Rc<Cell<i32>>,
}

impl Drop for LoopHandle {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            let _ = w.cancel_animation_frame(self.pending.get());
        }
        // Breaks the closure -> tick Rc cycle.
        self.tick.borrow_mut().take();
        log::debug!("[frame] loop stopped");
    }
}

fn request(tick: &Tick, pending: &Cell<i32>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        if let Ok(id) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            pending.set(id);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) -> LoopHandle {
    let tick: Tick = Rc::new(RefCell::new(None));
    let pending = Rc::new(Cell::new(0));
    let tick_clone = tick.clone();
    let pending_clone = pending.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request(&tick_clone, &pending_clone);
    }) as Box<dyn FnMut()>));
    request(&tick, &pending);
    LoopHandle { tick, pending }
}
