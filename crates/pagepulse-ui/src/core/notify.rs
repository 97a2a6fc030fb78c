//! Notification lifecycle: replace, auto-dismiss, exit animation, detach.
//!
//! # Design
//! - At most one notification is attached; `show` replaces whatever is there.
//! - Auto-dismiss and detach are scheduled tasks owned by the notifier, so
//!   closing or replacing a notification cancels its pending timers.
//! - Timer tasks hold a weak reference; a dropped notifier never fires.

use crate::core::config::ToastTiming;
use crate::core::schedule::Scheduler;
use crate::models::{Severity, Toast, ToastId};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// The page region a notifier renders into.
pub trait ToastSurface {
    /// Attach `toast`, detaching any notification already displayed.
    fn mount(&self, toast: Toast);
    /// Start the exit animation. Returns `false` if `id` is detached or already leaving.
    fn begin_exit(&self, id: ToastId) -> bool;
    /// Detach `id`. Returns `false` if it was not attached.
    fn detach(&self, id: ToastId) -> bool;
    /// Whether `id` is still attached.
    fn is_attached(&self, id: ToastId) -> bool;
}

struct Pending<H> {
    id: ToastId,
    auto_dismiss: Option<H>,
    removal: Option<H>,
}

struct NotifierState<S, C: Scheduler> {
    surface: S,
    scheduler: C,
    timing: ToastTiming,
    last_id: ToastId,
    pending: Option<Pending<C::Handle>>,
}

/// Shows transient notifications in a single-slot region.
pub struct Notifier<S, C: Scheduler> {
    state: Rc<RefCell<NotifierState<S, C>>>,
}

impl<S, C: Scheduler> Clone for Notifier<S, C> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<S, C> Notifier<S, C>
where
    S: ToastSurface + 'static,
    C: Scheduler + 'static,
    C::Handle: 'static,
{
    /// Create a notifier rendering into `surface`.
    #[must_use]
    pub fn new(surface: S, scheduler: C, timing: ToastTiming) -> Self {
        Self {
            state: Rc::new(RefCell::new(NotifierState {
                surface,
                scheduler,
                timing,
                last_id: 0,
                pending: None,
            })),
        }
    }

    /// Display `message`, replacing the current notification.
    pub fn show(&self, message: impl Into<String>, severity: Severity) -> ToastId {
        let mut guard = self.state.borrow_mut();
        let state = &mut *guard;
        state.last_id += 1;
        let id = state.last_id;
        state.pending = None;
        state.surface.mount(Toast::new(id, message, severity));
        let weak = Rc::downgrade(&self.state);
        let auto_dismiss = state.scheduler.schedule(
            state.timing.auto_dismiss,
            Box::new(move || {
                if let Some(notifier) = Self::upgrade(&weak) {
                    notifier.auto_dismiss(id);
                }
            }),
        );
        state.pending = Some(Pending {
            id,
            auto_dismiss: Some(auto_dismiss),
            removal: None,
        });
        id
    }

    /// Display `message` with the default severity.
    pub fn info(&self, message: impl Into<String>) -> ToastId {
        self.show(message, Severity::default())
    }

    /// Close `id` through its close affordance.
    ///
    /// Unknown, replaced, or already leaving notifications are ignored.
    pub fn close(&self, id: ToastId) {
        self.begin_removal(id);
    }

    /// Identifier of the notification the notifier is tracking, if any.
    #[must_use]
    pub fn active(&self) -> Option<ToastId> {
        self.state.borrow().pending.as_ref().map(|pending| pending.id)
    }

    fn upgrade(weak: &Weak<RefCell<NotifierState<S, C>>>) -> Option<Self> {
        weak.upgrade().map(|state| Self { state })
    }

    fn auto_dismiss(&self, id: ToastId) {
        let attached = self.state.borrow().surface.is_attached(id);
        if attached {
            self.begin_removal(id);
            return;
        }
        let mut state = self.state.borrow_mut();
        if state.pending.as_ref().is_some_and(|pending| pending.id == id) {
            state.pending = None;
        }
    }

    fn begin_removal(&self, id: ToastId) {
        let mut guard = self.state.borrow_mut();
        let state = &mut *guard;
        let Some(pending) = state.pending.as_mut().filter(|pending| pending.id == id) else {
            return;
        };
        if pending.removal.is_some() || !state.surface.begin_exit(id) {
            return;
        }
        pending.auto_dismiss = None;
        let weak = Rc::downgrade(&self.state);
        pending.removal = Some(state.scheduler.schedule(
            state.timing.exit_animation,
            Box::new(move || {
                if let Some(notifier) = Self::upgrade(&weak) {
                    notifier.finish_removal(id);
                }
            }),
        ));
    }

    fn finish_removal(&self, id: ToastId) {
        let mut guard = self.state.borrow_mut();
        let state = &mut *guard;
        if state.pending.as_ref().is_some_and(|pending| pending.id == id) {
            state.surface.detach(id);
            state.pending = None;
        }
    }
}

#[cfg(test)]
pub(crate) mod local {
    //! In-memory surface backed by a [`ToastStore`].

    use super::ToastSurface;
    use crate::core::store::ToastStore;
    use crate::models::{Toast, ToastId};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Surface that records every mount so tests can count notifications.
    #[derive(Clone, Default)]
    pub(crate) struct LocalSurface {
        store: Rc<RefCell<ToastStore>>,
        mounted: Rc<RefCell<Vec<Toast>>>,
    }

    impl LocalSurface {
        pub(crate) fn current(&self) -> Option<Toast> {
            self.store.borrow().current().cloned()
        }

        pub(crate) fn mounted(&self) -> Vec<Toast> {
            self.mounted.borrow().clone()
        }
    }

    impl ToastSurface for LocalSurface {
        fn mount(&self, toast: Toast) {
            self.mounted.borrow_mut().push(toast.clone());
            self.store.borrow_mut().replace(toast);
        }

        fn begin_exit(&self, id: ToastId) -> bool {
            self.store.borrow_mut().begin_exit(id)
        }

        fn detach(&self, id: ToastId) -> bool {
            self.store.borrow_mut().detach(id)
        }

        fn is_attached(&self, id: ToastId) -> bool {
            self.store.borrow().is_attached(id)
        }
    }
}
