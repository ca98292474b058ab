//! Session-wide key listener registry.
//!
//! # Responsibility
//! - Hold every mounted key listener for one viewer session.
//! - Deliver key bursts to all mounted listeners in mount order.
//!
//! # Invariants
//! - Registration lives exactly as long as its [`ListenerGuard`].
//! - Listeners must not mount or unmount listeners while being dispatched;
//!   a re-entrant dispatch is dropped and logged.

use log::{debug, warn};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};
use std::rc::{Rc, Weak};

use super::key::Key;

type Handler = Box<dyn FnMut(&[Key])>;

/// Opaque registration id, monotonically increasing per registry.
pub type ListenerId = u64;

struct Registration {
    name: &'static str,
    handler: Handler,
}

#[derive(Default)]
struct ListenerTable {
    next_id: ListenerId,
    entries: BTreeMap<ListenerId, Registration>,
}

/// Shared handle to one session's listener table.
#[derive(Clone, Default)]
pub struct KeyListeners {
    table: Rc<RefCell<ListenerTable>>,
}

impl KeyListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mounts `handler` and returns the guard that keeps it mounted.
    pub fn subscribe<F>(&self, name: &'static str, handler: F) -> ListenerGuard
    where
        F: FnMut(&[Key]) + 'static,
    {
        let mut table = self.table.borrow_mut();
        let id = table.next_id;
        table.next_id += 1;
        table.entries.insert(
            id,
            Registration {
                name,
                handler: Box::new(handler),
            },
        );
        debug!(
            "event=key_listener_mount module=input status=ok listener={} id={} mounted={}",
            name,
            id,
            table.entries.len()
        );

        ListenerGuard {
            id,
            name,
            table: Rc::downgrade(&self.table),
        }
    }

    /// Delivers one key burst to every mounted listener.
    ///
    /// Returns how many listeners received the burst.
    pub fn dispatch(&self, keys: &[Key]) -> usize {
        if keys.is_empty() {
            return 0;
        }
        let Ok(mut table) = self.table.try_borrow_mut() else {
            warn!(
                "event=key_dispatch module=input status=dropped reason=reentrant keys={}",
                keys.len()
            );
            return 0;
        };

        for registration in table.entries.values_mut() {
            (registration.handler)(keys);
        }
        table.entries.len()
    }

    pub fn len(&self) -> usize {
        self.table.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Names of mounted listeners in mount order.
    pub fn names(&self) -> Vec<&'static str> {
        self.table
            .borrow()
            .entries
            .values()
            .map(|registration| registration.name)
            .collect()
    }
}

impl Debug for KeyListeners {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyListeners")
            .field("mounted", &self.names())
            .finish()
    }
}

/// Scoped registration; unmounts its listener on drop.
#[must_use = "dropping the guard unmounts the listener immediately"]
pub struct ListenerGuard {
    id: ListenerId,
    name: &'static str,
    table: Weak<RefCell<ListenerTable>>,
}

impl ListenerGuard {
    pub fn id(&self) -> ListenerId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Debug for ListenerGuard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerGuard")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish()
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let Some(table) = self.table.upgrade() else {
            return;
        };
        let Ok(mut table) = table.try_borrow_mut() else {
            warn!(
                "event=key_listener_unmount module=input status=error reason=reentrant listener={} id={}",
                self.name, self.id
            );
            return;
        };
        table.entries.remove(&self.id);
        debug!(
            "event=key_listener_unmount module=input status=ok listener={} id={} mounted={}",
            self.name,
            self.id,
            table.entries.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::KeyListeners;
    use crate::input::key::Key;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn guard_drop_unmounts_listener() {
        let listeners = KeyListeners::new();
        let seen = Rc::new(RefCell::new(0usize));

        let counter = Rc::clone(&seen);
        let guard = listeners.subscribe("counter", move |keys| {
            *counter.borrow_mut() += keys.len();
        });
        assert_eq!(listeners.len(), 1);
        assert_eq!(listeners.dispatch(&Key::typed("ab")), 1);

        drop(guard);
        assert!(listeners.is_empty());
        assert_eq!(listeners.dispatch(&Key::typed("c")), 0);
        assert_eq!(*seen.borrow(), 2);
    }

    #[test]
    fn remount_never_duplicates_listeners() {
        let listeners = KeyListeners::new();
        let mut guard = listeners.subscribe("page_digits", |_| {});
        for _ in 0..3 {
            drop(guard);
            guard = listeners.subscribe("page_digits", |_| {});
            assert_eq!(listeners.len(), 1);
        }
        assert_eq!(guard.name(), "page_digits");
    }

    #[test]
    fn guard_outliving_registry_is_harmless() {
        let listeners = KeyListeners::new();
        let guard = listeners.subscribe("orphan", |_| {});
        drop(listeners);
        drop(guard);
    }

    #[test]
    fn empty_burst_is_not_dispatched() {
        let listeners = KeyListeners::new();
        let _guard = listeners.subscribe("noop", |_| {});
        assert_eq!(listeners.dispatch(&[]), 0);
    }
}
