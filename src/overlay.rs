use crate::constants::{OVERLAY_ID_SUFFIX, OVERLAY_STYLE};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Descriptor line shown under the canvas.
pub struct PromptOverlay {
    el: web::HtmlElement,
    // true when we inserted the element and must remove it on teardown
    owned: bool,
    last: String,
}

impl PromptOverlay {
    /// Reuse `#<canvas id>-prompt` when the page provides one, otherwise
    /// insert a styled element right after the canvas.
    pub fn attach(document: &web::Document, canvas: &web::HtmlCanvasElement) -> Option<Self> {
        let id = format!("{}{}", canvas.id(), OVERLAY_ID_SUFFIX);
        if let Some(el) = document.get_element_by_id(&id) {
            let el = el.dyn_into::<web::HtmlElement>().ok()?;
            return Some(Self {
                el,
                owned: false,
                last: String::new(),
            });
        }
        let el = document
            .create_element("div")
            .ok()?
            .dyn_into::<web::HtmlElement>()
            .ok()?;
        el.set_id(&id);
        _ = el.set_attribute("style", OVERLAY_STYLE);
        _ = canvas.after_with_node_1(&el);
        Some(Self {
            el,
            owned: true,
            last: String::new(),
        })
    }

    /// Write the text only when it differs from what is shown.
    pub fn set_text(&mut self, text: &str) {
        if self.last != text {
            self.el.set_text_content(Some(text));
            self.last.clear();
            self.last.push_str(text);
        }
    }

    pub fn detach(&self) {
        if self.owned {
            self.el.remove();
        }
    }
}
