use pose_core::{CommitSink, Pose};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;

/// Collects commits while the widget is borrowed; the event handler hands
/// them to the page once it has let go, so the page callback may call back
/// into the widget.
#[derive(Clone, Default)]
pub struct QueuedCommits(Rc<RefCell<Vec<Pose>>>);

impl CommitSink for QueuedCommits {
    fn pose_committed(&mut self, pose: Pose) {
        self.0.borrow_mut().push(pose);
    }
}

impl QueuedCommits {
    pub fn deliver(&self, on_commit: Option<&js_sys::Function>) {
        let poses = std::mem::take(&mut *self.0.borrow_mut());
        for pose in poses {
            log::info!("[commit] {}", pose_core::describe(&pose));
            let Some(cb) = on_commit else {
                continue;
            };
            if let Err(e) = cb.call3(
                &JsValue::NULL,
                &JsValue::from_f64(pose.azimuth as f64),
                &JsValue::from_f64(pose.elevation as f64),
                &JsValue::from_f64(pose.distance as f64),
            ) {
                log::warn!("[commit] callback threw: {:?}", e);
            }
        }
    }
}
