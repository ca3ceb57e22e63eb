#![cfg(target_arch = "wasm32")]
use pose_core::{placeholder_texture, Pose, PoseWidget, WidgetConfig, PLACEHOLDER_SIZE};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod commit;
mod constants;
mod dom;
mod events;
mod frame;
mod image;
mod input;
mod overlay;
mod render;

use commit::QueuedCommits;
use constants::{DEFAULT_CANVAS_ID, DEFAULT_IMAGE_ATTR};
use events::{Listeners, PointerWiring};
use frame::{FrameContext, SharedLoop, Tick};

thread_local! {
    // the page-level demo widget lives for the lifetime of the page
    static AUTO_MOUNTED: RefCell<Option<CameraWidget>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("pose-widget-web starting");

    let Some(document) = dom::window_document() else {
        return Ok(());
    };
    let Some(el) = document.get_element_by_id(DEFAULT_CANVAS_ID) else {
        return Ok(());
    };
    let image_url = el.get_attribute(DEFAULT_IMAGE_ATTR);
    spawn_local(async move {
        match mount(DEFAULT_CANVAS_ID, None).await {
            Ok(widget) => {
                if image_url.is_some() {
                    widget.set_source_image(image_url);
                }
                AUTO_MOUNTED.with(|slot| *slot.borrow_mut() = Some(widget));
            }
            Err(e) => log::error!("init error: {:?}", e),
        }
    });
    Ok(())
}

/// Mount a widget on the canvas with id `canvas_id`. `on_commit` is called
/// with `(azimuth, elevation, distance)` once per completed drag.
#[wasm_bindgen]
pub async fn mount_widget(
    canvas_id: String,
    on_commit: Option<js_sys::Function>,
) -> Result<CameraWidget, JsValue> {
    mount(&canvas_id, on_commit)
        .await
        .map_err(|e| JsValue::from_str(&format!("{:#}", e)))
}

/// Prompt text (trigger token plus descriptor) for the snapped pose.
#[wasm_bindgen]
pub fn pose_prompt(azimuth: f32, elevation: f32, distance: f32) -> String {
    pose_core::trigger_prompt(&Pose::new(azimuth, elevation, distance))
}

/// Edit instruction sentence for the snapped pose.
#[wasm_bindgen]
pub fn edit_instruction(azimuth: f32, elevation: f32, distance: f32) -> String {
    pose_core::edit_instruction(&Pose::new(azimuth, elevation, distance))
}

async fn mount(canvas_id: &str, on_commit: Option<js_sys::Function>) -> anyhow::Result<CameraWidget> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::find_canvas(&document, canvas_id)?;
    dom::prepare_canvas(&canvas);
    let (width, height) = dom::sync_canvas_backing_size(&canvas);

    let commits = QueuedCommits::default();
    let mut widget = PoseWidget::new(WidgetConfig::default(), Pose::default(), commits.clone())?;
    widget.set_viewport(width, height);

    let placeholder = placeholder_texture(PLACEHOLDER_SIZE);
    let gpu = render::GpuState::new(&canvas, widget.scene(), &placeholder).await?;
    let overlay = overlay::PromptOverlay::attach(&document, &canvas);
    if overlay.is_none() {
        log::warn!("[mount] prompt overlay unavailable");
    }
    let ctx = Rc::new(RefCell::new(FrameContext::new(
        widget,
        gpu,
        overlay,
        canvas.clone(),
    )));

    let listeners = events::wire_pointer_handlers(&PointerWiring {
        canvas,
        ctx: ctx.clone(),
        commits,
        on_commit,
        active_pointer: Rc::new(Cell::new(None)),
    });
    let (render_loop, tick) = frame::start_loop(ctx.clone());
    log::info!("[mount] #{} {}x{}", canvas_id, width, height);

    Ok(CameraWidget {
        ctx,
        render_loop,
        tick,
        listeners,
        alive: Rc::new(Cell::new(true)),
        image_generation: Rc::new(Cell::new(0)),
    })
}

#[wasm_bindgen]
pub struct CameraWidget {
    ctx: Rc<RefCell<FrameContext>>,
    render_loop: SharedLoop,
    tick: Tick,
    listeners: Listeners,
    alive: Rc<Cell<bool>>,
    // bumped per source image request so only the latest load lands
    image_generation: Rc<Cell<u32>>,
}

#[wasm_bindgen]
impl CameraWidget {
    /// Supply the owner's canonical pose. Out of range values are wrapped or
    /// clamped; a drag in progress is unaffected until it ends.
    pub fn set_pose(&self, azimuth: f32, elevation: f32, distance: f32) {
        if !self.alive.get() {
            return;
        }
        self.ctx
            .borrow_mut()
            .widget
            .set_canonical_pose(Pose::new(azimuth, elevation, distance));
    }

    /// Texture the subject plane from `url`, or go back to the placeholder
    /// when `None`. Loads asynchronously; a failed load keeps the current
    /// texture.
    pub fn set_source_image(&self, url: Option<String>) {
        if !self.alive.get() {
            return;
        }
        let generation = self.image_generation.get().wrapping_add(1);
        self.image_generation.set(generation);

        let Some(url) = url.filter(|u| !u.is_empty()) else {
            if let Some(gpu) = self.ctx.borrow_mut().gpu.as_mut() {
                gpu.set_subject_texture(&placeholder_texture(PLACEHOLDER_SIZE));
            }
            return;
        };
        let ctx = self.ctx.clone();
        let alive = self.alive.clone();
        let latest = self.image_generation.clone();
        spawn_local(async move {
            let result = image::load_rgba(&url).await;
            if !alive.get() || latest.get() != generation {
                log::debug!("[texture] dropping stale load of {}", url);
                return;
            }
            match result {
                Ok(tex) => {
                    if let Some(gpu) = ctx.borrow_mut().gpu.as_mut() {
                        gpu.set_subject_texture(&tex);
                    }
                }
                Err(e) => log::warn!("[texture] keeping current texture: {:#}", e),
            }
        });
    }

    /// Stop rendering and unhook from the page. Does not commit a drag in
    /// progress. Safe to call more than once.
    pub fn destroy(&mut self) {
        if !self.alive.replace(false) {
            return;
        }
        self.render_loop.borrow_mut().teardown();
        // drop the tick closure; it holds the loop and the frame context
        self.tick.borrow_mut().take();
        self.listeners.detach();
        self.ctx.borrow_mut().release();
        log::info!("[mount] widget destroyed");
    }
}

impl Drop for CameraWidget {
    fn drop(&mut self) {
        self.destroy();
    }
}
