//! Notification region store.
//!
//! # Design
//! - The page owns exactly one notification slot; `replace` is the only way in.
//! - Reducers are plain methods so the store can be driven without a DOM.

use crate::models::{Toast, ToastId, ToastPhase};
use yewdux::store::Store;

/// Single-slot notification region rendered by the toast host.
#[derive(Clone, Debug, Default, PartialEq, Eq, Store)]
pub struct ToastStore {
    current: Option<Toast>,
}

impl ToastStore {
    /// Notification currently attached to the page, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Swap in a new notification, detaching whatever was displayed.
    ///
    /// Returns the identifier of the detached notification.
    pub fn replace(&mut self, toast: Toast) -> Option<ToastId> {
        self.current.replace(toast).map(|previous| previous.id)
    }

    /// Whether the notification `id` is still attached.
    #[must_use]
    pub fn is_attached(&self, id: ToastId) -> bool {
        self.current.as_ref().is_some_and(|toast| toast.id == id)
    }

    /// Start the exit animation for `id`.
    ///
    /// Returns `false` when `id` is detached or already leaving.
    pub fn begin_exit(&mut self, id: ToastId) -> bool {
        match self.current.as_mut() {
            Some(toast) if toast.id == id && toast.phase == ToastPhase::Visible => {
                toast.phase = ToastPhase::Leaving;
                true
            }
            _ => false,
        }
    }

    /// Remove `id` from the page. Returns `false` when it was not attached.
    pub fn detach(&mut self, id: ToastId) -> bool {
        if self.is_attached(id) {
            self.current = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;

    #[test]
    fn replace_keeps_single_notification() {
        let mut store = ToastStore::default();
        assert_eq!(store.replace(Toast::new(1, "first", Severity::Info)), None);
        assert_eq!(
            store.replace(Toast::new(2, "second", Severity::Warning)),
            Some(1)
        );
        let current = store.current().map(|toast| toast.message.as_str());
        assert_eq!(current, Some("second"));
        assert!(!store.is_attached(1));
        assert!(store.is_attached(2));
    }

    #[test]
    fn begin_exit_only_applies_once_to_attached_toast() {
        let mut store = ToastStore::default();
        store.replace(Toast::new(7, "bye", Severity::Success));
        assert!(!store.begin_exit(8));
        assert!(store.begin_exit(7));
        assert!(!store.begin_exit(7));
        assert_eq!(
            store.current().map(|toast| toast.phase),
            Some(ToastPhase::Leaving)
        );
    }

    #[test]
    fn detach_ignores_stale_ids() {
        let mut store = ToastStore::default();
        store.replace(Toast::new(1, "one", Severity::Info));
        store.replace(Toast::new(2, "two", Severity::Info));
        assert!(!store.detach(1));
        assert!(store.detach(2));
        assert!(store.current().is_none());
        assert!(!store.detach(2));
    }
}
