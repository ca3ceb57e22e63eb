// Render loop lifecycle against a recording scheduler.

use pose_core::{FrameScheduler, LoopState, RenderLoop};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct Log {
    scheduled: Vec<u32>,
    cancelled: Vec<u32>,
    next: u32,
    refuse: bool,
}

#[derive(Clone, Default)]
struct FakeScheduler(Rc<RefCell<Log>>);

impl FrameScheduler for FakeScheduler {
    type Handle = u32;

    fn schedule(&mut self) -> Option<u32> {
        let mut log = self.0.borrow_mut();
        if log.refuse {
            return None;
        }
        log.next += 1;
        let id = log.next;
        log.scheduled.push(id);
        Some(id)
    }

    fn cancel(&mut self, handle: u32) {
        self.0.borrow_mut().cancelled.push(handle);
    }
}

#[test]
fn start_schedules_and_frames_reschedule() {
    let sched = FakeScheduler::default();
    let mut lp = RenderLoop::new(sched.clone());
    assert_eq!(lp.state(), LoopState::Idle);
    assert!(lp.start());
    assert!(!lp.start());
    assert_eq!(sched.0.borrow().scheduled, vec![1]);

    let mut drawn = 0;
    assert!(lp.run_frame(|| drawn += 1));
    assert!(lp.run_frame(|| drawn += 1));
    assert_eq!(drawn, 2);
    assert_eq!(lp.frame_count(), 2);
    assert_eq!(sched.0.borrow().scheduled, vec![1, 2, 3]);
    assert!(sched.0.borrow().cancelled.is_empty());
}

#[test]
fn no_frame_runs_after_teardown() {
    let sched = FakeScheduler::default();
    let mut lp = RenderLoop::new(sched.clone());
    lp.start();
    lp.run_frame(|| {});
    lp.teardown();
    assert_eq!(lp.state(), LoopState::TornDown);
    assert_eq!(sched.0.borrow().cancelled, vec![2]);
    assert!(!lp.has_pending_frame());

    // a callback already queued by the host fires anyway
    let mut ran = false;
    assert!(!lp.run_frame(|| ran = true));
    assert!(!ran);
    assert!(!lp.start());
    assert_eq!(sched.0.borrow().scheduled, vec![1, 2]);
}

#[test]
fn stop_pauses_and_start_resumes() {
    let sched = FakeScheduler::default();
    let mut lp = RenderLoop::new(sched.clone());
    lp.start();
    lp.stop();
    assert_eq!(lp.state(), LoopState::Idle);
    assert_eq!(sched.0.borrow().cancelled, vec![1]);
    assert!(!lp.run_frame(|| panic!("stopped loop drew")));
    assert!(lp.start());
    assert!(lp.is_running());
}

#[test]
fn refused_schedule_drops_back_to_idle() {
    let sched = FakeScheduler::default();
    sched.0.borrow_mut().refuse = true;
    let mut lp = RenderLoop::new(sched.clone());
    assert!(!lp.start());
    assert_eq!(lp.state(), LoopState::Idle);
}

#[test]
fn dropping_the_loop_cancels_the_pending_frame() {
    let sched = FakeScheduler::default();
    {
        let mut lp = RenderLoop::new(sched.clone());
        lp.start();
    }
    assert_eq!(sched.0.borrow().cancelled, vec![1]);
}
