//! Lifecycle of the per-widget animation loop.
//!
//! The loop itself is platform-free: a [`FrameScheduler`] supplies the host's
//! frame source (requestAnimationFrame in the browser) and the host calls
//! [`RenderLoop::run_frame`] from its frame callback.

/// Host frame source.
pub trait FrameScheduler {
    type Handle;

    /// Request one callback on the next frame. `None` when the host refused.
    fn schedule(&mut self) -> Option<Self::Handle>;

    fn cancel(&mut self, handle: Self::Handle);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
    /// Terminal: no frame runs and the loop cannot restart.
    TornDown,
}

pub struct RenderLoop<S: FrameScheduler> {
    scheduler: S,
    state: LoopState,
    pending: Option<S::Handle>,
    frames: u64,
}

impl<S: FrameScheduler> RenderLoop<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            state: LoopState::Idle,
            pending: None,
            frames: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn has_pending_frame(&self) -> bool {
        self.pending.is_some()
    }

    /// Frames rendered so far.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Begin scheduling frames. Returns false when torn down, already running
    /// or the host refused the first frame.
    pub fn start(&mut self) -> bool {
        if self.state != LoopState::Idle {
            return false;
        }
        self.state = LoopState::Running;
        self.reschedule()
    }

    /// Called from the host's frame callback. Runs `f` only while running and
    /// then requests the next frame.
    pub fn run_frame<F: FnOnce()>(&mut self, f: F) -> bool {
        // the frame we were waiting for has fired
        self.pending = None;
        if self.state != LoopState::Running {
            return false;
        }
        f();
        self.frames += 1;
        self.reschedule();
        true
    }

    /// Pause without tearing down; `start` resumes.
    pub fn stop(&mut self) {
        if self.state == LoopState::Running {
            self.cancel_pending();
            self.state = LoopState::Idle;
        }
    }

    pub fn teardown(&mut self) {
        if self.state == LoopState::TornDown {
            return;
        }
        self.cancel_pending();
        self.state = LoopState::TornDown;
        log::debug!("[loop] torn down after {} frames", self.frames);
    }

    fn reschedule(&mut self) -> bool {
        self.cancel_pending();
        match self.scheduler.schedule() {
            Some(h) => {
                self.pending = Some(h);
                true
            }
            None => {
                log::warn!("[loop] host refused to schedule a frame; stopping");
                self.state = LoopState::Idle;
                false
            }
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(h) = self.pending.take() {
            self.scheduler.cancel(h);
        }
    }
}

impl<S: FrameScheduler> Drop for RenderLoop<S> {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
