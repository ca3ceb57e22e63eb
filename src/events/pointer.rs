use super::Listeners;
use crate::commit::QueuedCommits;
use crate::dom;
use crate::frame::FrameContext;
use crate::input;
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: Rc<RefCell<FrameContext>>,
    pub commits: QueuedCommits,
    pub on_commit: Option<js_sys::Function>,
    // pointer that started the current drag; others are ignored until it ends
    pub active_pointer: Rc<Cell<Option<i32>>>,
}

impl PointerWiring {
    fn ndc(&self, ev: &web::PointerEvent) -> Option<Vec2> {
        input::pointer_ndc(
            ev.client_x() as f64,
            ev.client_y() as f64,
            dom::canvas_rect(&self.canvas),
        )
    }

    fn set_cursor(&self, dragging: bool, hovered: bool) {
        _ = self
            .canvas
            .style()
            .set_property("cursor", input::cursor_for(dragging, hovered));
    }

    /// Implicit release: the drag commits as if the pointer went up.
    fn cancel(&self, reason: &str) {
        self.active_pointer.set(None);
        let committed = self.ctx.borrow_mut().widget.pointer_cancel();
        if committed.is_some() {
            log::info!("[drag] {} ended the drag", reason);
        }
        self.set_cursor(false, false);
        self.commits.deliver(self.on_commit.as_ref());
    }
}

pub fn wire_pointer_handlers(w: &PointerWiring) -> Listeners {
    let mut listeners = Listeners::default();
    let Some(window) = web::window() else {
        log::warn!("[input] no window; pointer input disabled");
        return listeners;
    };
    let canvas: &web::EventTarget = w.canvas.as_ref();
    let page: &web::EventTarget = window.as_ref();

    wire_pointerdown(&mut listeners, canvas, w);
    wire_pointermove(&mut listeners, page, w);
    wire_pointerup(&mut listeners, page, w);
    for name in ["pointercancel", "lostpointercapture"] {
        let w = w.clone();
        listeners.add(canvas, name, move |ev: web::Event| {
            let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
                return;
            };
            // another finger going away must not end this drag
            if input::ends_drag(w.active_pointer.get(), ev.pointer_id()) {
                w.cancel(name);
            }
        });
    }
    {
        let w = w.clone();
        listeners.add(page, "blur", move |_| w.cancel("blur"));
    }
    log::info!("[input] wired {} pointer listeners", listeners.len());
    listeners
}

fn wire_pointerdown(listeners: &mut Listeners, target: &web::EventTarget, w: &PointerWiring) {
    let w = w.clone();
    listeners.add(target, "pointerdown", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        if !input::is_primary_button(ev.button()) || w.active_pointer.get().is_some() {
            return;
        }
        let Some(ndc) = w.ndc(ev) else {
            return;
        };
        let picked = w.ctx.borrow_mut().widget.pointer_down(ndc);
        if picked.is_some() {
            w.active_pointer.set(Some(ev.pointer_id()));
            _ = w.canvas.set_pointer_capture(ev.pointer_id());
            ev.prevent_default();
            w.set_cursor(true, true);
        }
    });
}

fn wire_pointermove(listeners: &mut Listeners, target: &web::EventTarget, w: &PointerWiring) {
    let w = w.clone();
    listeners.add(target, "pointermove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        if !input::accepts_move(w.active_pointer.get(), ev.pointer_id()) {
            return;
        }
        let Some(ndc) = w.ndc(ev) else {
            return;
        };
        let (dragging, hovered) = {
            let mut ctx = w.ctx.borrow_mut();
            ctx.widget.pointer_move(ndc);
            (ctx.widget.is_dragging(), ctx.widget.hovered().is_some())
        };
        w.set_cursor(dragging, hovered);
    });
}

fn wire_pointerup(listeners: &mut Listeners, target: &web::EventTarget, w: &PointerWiring) {
    let w = w.clone();
    listeners.add(target, "pointerup", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        if !input::ends_drag(w.active_pointer.get(), ev.pointer_id()) {
            return;
        }
        w.active_pointer.set(None);
        _ = w.canvas.release_pointer_capture(ev.pointer_id());
        w.ctx.borrow_mut().widget.pointer_up();
        w.set_cursor(false, false);
        w.commits.deliver(w.on_commit.as_ref());
    });
}
