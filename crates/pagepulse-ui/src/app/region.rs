//! Browser bindings for the notifier: yewdux-backed region and gloo timers.
//!
//! # Design
//! - The region is the `ToastStore`; the toast host re-renders from it.
//! - `Timeout` clears itself on drop, which is exactly the cancellation the notifier needs.

use crate::core::config::MAX_TIMER_DELAY;
use crate::core::notify::{Notifier, ToastSurface};
use crate::core::schedule::{Scheduler, Task};
use crate::core::store::ToastStore;
use crate::models::{Toast, ToastId};
use gloo_timers::callback::Timeout;
use std::time::Duration;
use yewdux::prelude::Dispatch;

/// Notifier wired to the page region and the browser event loop.
pub(crate) type PageNotifier = Notifier<StoreSurface, GlooScheduler>;

/// Region surface dispatching reducers to the shared toast store.
#[derive(Clone)]
pub(crate) struct StoreSurface {
    dispatch: Dispatch<ToastStore>,
}

impl StoreSurface {
    pub(crate) fn new() -> Self {
        Self {
            dispatch: Dispatch::<ToastStore>::new(),
        }
    }
}

impl ToastSurface for StoreSurface {
    fn mount(&self, toast: Toast) {
        self.dispatch.reduce_mut(|store| {
            store.replace(toast);
        });
    }

    fn begin_exit(&self, id: ToastId) -> bool {
        let mut started = false;
        self.dispatch.reduce_mut(|store| {
            started = store.begin_exit(id);
        });
        started
    }

    fn detach(&self, id: ToastId) -> bool {
        let mut detached = false;
        self.dispatch.reduce_mut(|store| {
            detached = store.detach(id);
        });
        detached
    }

    fn is_attached(&self, id: ToastId) -> bool {
        self.dispatch.get().is_attached(id)
    }
}

/// Scheduler running tasks through `setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct GlooScheduler;

impl Scheduler for GlooScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay: Duration, task: Task) -> Timeout {
        let millis = u32::try_from(delay.min(MAX_TIMER_DELAY).as_millis()).unwrap_or(0);
        Timeout::new(millis, task)
    }
}
