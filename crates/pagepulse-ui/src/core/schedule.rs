//! Deferred task seam used by the notifier.
//!
//! # Design
//! - A scheduled task is owned through its handle; dropping the handle cancels it.
//! - The browser build backs this with `gloo-timers`; tests drive a manual clock.

use std::time::Duration;

/// Task queued for later execution.
pub type Task = Box<dyn FnOnce()>;

/// Schedules one-shot tasks on the page's event loop.
pub trait Scheduler {
    /// Cancellation handle; dropping it cancels the task if it has not run yet.
    type Handle;

    /// Run `task` once after `delay`.
    fn schedule(&self, delay: Duration, task: Task) -> Self::Handle;
}

#[cfg(test)]
pub(crate) mod manual {
    //! Manual clock used to drive scheduled tasks in tests.

    use super::{Scheduler, Task};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::time::Duration;

    struct Pending {
        at: Duration,
        seq: u64,
        cancelled: Rc<Cell<bool>>,
        task: Task,
    }

    #[derive(Default)]
    struct Clock {
        now: Cell<Duration>,
        seq: Cell<u64>,
        pending: RefCell<Vec<Pending>>,
    }

    /// Scheduler whose time only moves when a test advances it.
    #[derive(Clone, Default)]
    pub(crate) struct ManualScheduler {
        clock: Rc<Clock>,
    }

    /// Handle returned by [`ManualScheduler`].
    pub(crate) struct ManualHandle {
        cancelled: Rc<Cell<bool>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.cancelled.set(true);
        }
    }

    impl ManualScheduler {
        pub(crate) fn now(&self) -> Duration {
            self.clock.now.get()
        }

        /// Tasks that are queued and not cancelled.
        pub(crate) fn live_tasks(&self) -> usize {
            self.clock
                .pending
                .borrow()
                .iter()
                .filter(|pending| !pending.cancelled.get())
                .count()
        }

        /// Move the clock forward, running due tasks in deadline order.
        pub(crate) fn advance(&self, by: Duration) {
            let target = self.clock.now.get() + by;
            while let Some(pending) = self.next_due(target) {
                self.clock.now.set(pending.at);
                if !pending.cancelled.get() {
                    (pending.task)();
                }
            }
            self.clock.now.set(target);
        }

        fn next_due(&self, target: Duration) -> Option<Pending> {
            let mut pending = self.clock.pending.borrow_mut();
            let index = pending
                .iter()
                .enumerate()
                .filter(|(_, item)| item.at <= target)
                .min_by_key(|(_, item)| (item.at, item.seq))
                .map(|(index, _)| index)?;
            Some(pending.remove(index))
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, delay: Duration, task: Task) -> ManualHandle {
            let cancelled = Rc::new(Cell::new(false));
            let seq = self.clock.seq.get();
            self.clock.seq.set(seq + 1);
            self.clock.pending.borrow_mut().push(Pending {
                at: self.clock.now.get() + delay,
                seq,
                cancelled: Rc::clone(&cancelled),
                task,
            });
            ManualHandle { cancelled }
        }
    }

    mod tests {
        use super::*;

        #[test]
        fn tasks_run_in_deadline_order() {
            let scheduler = ManualScheduler::default();
            let log = Rc::new(RefCell::new(Vec::new()));
            let late = {
                let log = Rc::clone(&log);
                scheduler.schedule(
                    Duration::from_millis(20),
                    Box::new(move || log.borrow_mut().push("late")),
                )
            };
            let early = {
                let log = Rc::clone(&log);
                scheduler.schedule(
                    Duration::from_millis(10),
                    Box::new(move || log.borrow_mut().push("early")),
                )
            };
            scheduler.advance(Duration::from_millis(25));
            assert_eq!(*log.borrow(), vec!["early", "late"]);
            assert_eq!(scheduler.now(), Duration::from_millis(25));
            drop((late, early));
        }

        #[test]
        fn dropping_handle_cancels_task() {
            let scheduler = ManualScheduler::default();
            let fired = Rc::new(Cell::new(false));
            let handle = {
                let fired = Rc::clone(&fired);
                scheduler.schedule(Duration::from_millis(5), Box::new(move || fired.set(true)))
            };
            assert_eq!(scheduler.live_tasks(), 1);
            drop(handle);
            assert_eq!(scheduler.live_tasks(), 0);
            scheduler.advance(Duration::from_millis(10));
            assert!(!fired.get());
        }
    }
}
