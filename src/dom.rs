use crate::constants::CANVAS_STYLE;
use crate::input;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn find_canvas(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("#{} is not a canvas: {:?}", id, e)))
}

/// Match the canvas backing store to its CSS size times the (capped) device
/// pixel ratio. Returns the new size.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let rect = canvas.get_bounding_client_rect();
    let (w_px, h_px) = input::backing_size(rect.width(), rect.height(), dpr);
    if canvas.width() != w_px {
        canvas.set_width(w_px);
    }
    if canvas.height() != h_px {
        canvas.set_height(h_px);
    }
    (w_px, h_px)
}

#[inline]
pub fn canvas_rect(canvas: &web::HtmlCanvasElement) -> [f64; 4] {
    let r = canvas.get_bounding_client_rect();
    [r.left(), r.top(), r.width(), r.height()]
}

/// Apply the inline styles the widget relies on for pointer input.
pub fn prepare_canvas(canvas: &web::HtmlCanvasElement) {
    let style = canvas.style();
    for (name, value) in CANVAS_STYLE {
        if let Err(e) = style.set_property(name, value) {
            log::warn!("[input] could not set {} on canvas: {:?}", name, e);
        }
    }
}
