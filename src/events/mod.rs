mod pointer;

pub use pointer::{wire_pointer_handlers, PointerWiring};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Handler = Closure<dyn FnMut(web::Event)>;

/// Registered DOM listeners. Detaching unhooks them from the page but keeps
/// the closures alive until this value drops, so a handler may trigger the
/// detach itself.
#[derive(Default)]
pub struct Listeners {
    entries: Vec<(web::EventTarget, &'static str, Handler)>,
    attached: bool,
}

impl Listeners {
    pub fn add<F>(&mut self, target: &web::EventTarget, name: &'static str, f: F)
    where
        F: FnMut(web::Event) + 'static,
    {
        let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut(web::Event)>);
        match target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref()) {
            Ok(()) => {
                self.entries.push((target.clone(), name, closure));
                self.attached = true;
            }
            Err(e) => log::warn!("[input] could not listen for {}: {:?}", name, e),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        for (target, name, closure) in &self.entries {
            _ = target
                .remove_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        }
        self.attached = false;
        log::debug!("[input] removed {} listeners", self.entries.len());
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        self.detach();
    }
}
