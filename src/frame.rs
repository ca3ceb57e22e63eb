use crate::commit::QueuedCommits;
use crate::constants::FPS_LOG_INTERVAL_SECS;
use crate::dom;
use crate::overlay::PromptOverlay;
use crate::render;
use instant::Instant;
use pose_core::{FrameScheduler, PoseWidget, RenderLoop};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// requestAnimationFrame as a frame source. Holds the tick closure that the
/// loop re-registers every frame.
pub struct RafScheduler {
    tick: Tick,
}

impl RafScheduler {
    pub fn new(tick: Tick) -> Self {
        Self { tick }
    }
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn schedule(&mut self) -> Option<i32> {
        let window = web::window()?;
        let tick = self.tick.borrow();
        let cb = tick.as_ref()?;
        window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .ok()
    }

    fn cancel(&mut self, handle: i32) {
        if let Some(window) = web::window() {
            _ = window.cancel_animation_frame(handle);
        }
    }
}

pub struct FrameContext {
    pub widget: PoseWidget<QueuedCommits>,
    pub gpu: Option<render::GpuState>,
    pub overlay: Option<PromptOverlay>,
    pub canvas: web::HtmlCanvasElement,

    pub last_instant: Instant,
    fps_frames: u32,
    fps_elapsed: f32,
}

impl FrameContext {
    pub fn new(
        widget: PoseWidget<QueuedCommits>,
        gpu: render::GpuState,
        overlay: Option<PromptOverlay>,
        canvas: web::HtmlCanvasElement,
    ) -> Self {
        Self {
            widget,
            gpu: Some(gpu),
            overlay,
            canvas,
            last_instant: Instant::now(),
            fps_frames: 0,
            fps_elapsed: 0.0,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        self.track_fps(dt_sec);

        let (w, h) = dom::sync_canvas_backing_size(&self.canvas);
        self.widget.set_viewport(w, h);
        let frame = self.widget.frame();
        if let Some(overlay) = self.overlay.as_mut() {
            overlay.set_text(&frame.prompt);
        }

        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };
        gpu.resize_if_needed(w, h);
        match gpu.render(&frame, self.widget.scene()) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::debug!("[gpu] surface lost; reconfiguring");
                gpu.reconfigure();
            }
            Err(e) => log::warn!("[gpu] frame skipped: {:?}", e),
        }
    }

    fn track_fps(&mut self, dt_sec: f32) {
        self.fps_frames += 1;
        self.fps_elapsed += dt_sec;
        if self.fps_elapsed >= FPS_LOG_INTERVAL_SECS {
            log::debug!(
                "[loop] {:.1} fps",
                self.fps_frames as f32 / self.fps_elapsed
            );
            self.fps_frames = 0;
            self.fps_elapsed = 0.0;
        }
    }

    /// Release everything the page can see or the GPU holds.
    pub fn release(&mut self) {
        if let Some(overlay) = self.overlay.take() {
            overlay.detach();
        }
        self.gpu = None;
    }
}

pub type SharedLoop = Rc<RefCell<RenderLoop<RafScheduler>>>;

/// Build the tick closure and start the loop. The returned cell owns the
/// closure; emptying it breaks the loop <-> closure cycle.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> (SharedLoop, Tick) {
    let tick: Tick = Rc::new(RefCell::new(None));
    let render_loop: SharedLoop = Rc::new(RefCell::new(RenderLoop::new(RafScheduler::new(
        tick.clone(),
    ))));
    let loop_tick = render_loop.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        loop_tick
            .borrow_mut()
            .run_frame(|| frame_ctx.borrow_mut().frame());
    }) as Box<dyn FnMut()>));
    if !render_loop.borrow_mut().start() {
        log::warn!("[loop] could not schedule the first frame");
    }
    (render_loop, tick)
}
