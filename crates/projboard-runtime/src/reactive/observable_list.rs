#![forbid(unsafe_code)]

//! Observable list with full-snapshot change notification.
//!
//! # Design
//!
//! [`ObservableList<T>`] owns an ordered `Vec<T>` in shared,
//! reference-counted storage (`Rc<RefCell<..>>`). Every mutation takes an
//! immutable [`Snapshot`] of the whole sequence and hands it to every
//! registered listener, in registration order.
//!
//! # Performance
//!
//! | Operation        | Complexity                         |
//! |------------------|------------------------------------|
//! | `add()`          | O(N + L) where N = items, L = listeners |
//! | `replace()`      | O(N + L)                           |
//! | `add_listener()` | O(1) amortized                     |
//! | `snapshot()`     | O(N)                               |
//!
//! Snapshots are `Rc<[T]>`, so a notification round copies the sequence
//! once no matter how many listeners receive it.
//!
//! # Failure Modes
//!
//! - **Failing listener**: a listener registered through
//!   [`add_fallible_listener`](ObservableList::add_fallible_listener) that
//!   returns `Err` is logged at `warn` and skipped. Later listeners still run.
//! - **Re-entrant mutation**: calling `add()`/`replace()` from inside a
//!   listener applies the change immediately and queues its snapshot. The
//!   queued snapshot is delivered once the current round has reached every
//!   listener, so dispatch never nests.
//! - **Panicking listener**: the round is abandoned and the panic propagates
//!   to the caller of the mutation. Snapshots queued during that round stay
//!   queued and are delivered, oldest first, by the next mutation.
//! - **Closures touching the list**: the predicate and builder passed to
//!   `replace()`, and the closure passed to `with()`, run while the list is
//!   borrowed and must not access it.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::error::RuntimeError;

type ListenerRc<T> = Rc<dyn Fn(&Snapshot<T>) -> Result<(), RuntimeError>>;

/// Immutable point-in-time copy of an [`ObservableList`].
///
/// Cloning is cheap (shared `Rc`). The contents never change, regardless of
/// later mutations to the list it came from.
pub struct Snapshot<T> {
    items: Rc<[T]>,
    version: u64,
}

impl<T> Snapshot<T> {
    /// Version of the list at the moment the snapshot was taken.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> Clone for Snapshot<T> {
    fn clone(&self) -> Self {
        Self {
            items: Rc::clone(&self.items),
            version: self.version,
        }
    }
}

impl<T> Deref for Snapshot<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T: fmt::Debug> fmt::Debug for Snapshot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Snapshot")
            .field("version", &self.version)
            .field("items", &&*self.items)
            .finish()
    }
}

/// Shared interior for [`ObservableList<T>`].
struct ListInner<T> {
    items: Vec<T>,
    version: u64,
    listeners: Vec<ListenerRc<T>>,
    /// Snapshots waiting to be delivered, oldest first.
    pending: VecDeque<Snapshot<T>>,
    /// True while a notification round is running.
    dispatching: bool,
}

/// An ordered, shared sequence that broadcasts a [`Snapshot`] on mutation.
///
/// Cloning an `ObservableList` creates a new handle to the **same** list.
/// Hand clones to every view that needs to read or mutate it.
///
/// # Invariants
///
/// 1. `version` increments by exactly 1 per applied mutation.
/// 2. Listeners are notified in registration order.
/// 3. Every registered listener receives every later snapshot exactly once.
/// 4. Listeners are never removed.
pub struct ObservableList<T> {
    inner: Rc<RefCell<ListInner<T>>>,
}

// Manual Clone: shares the same Rc.
impl<T> Clone for ObservableList<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ObservableList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ObservableList")
            .field("items", &inner.items)
            .field("version", &inner.version)
            .field("listener_count", &inner.listeners.len())
            .finish()
    }
}

impl<T: Clone + 'static> Default for ObservableList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + 'static> ObservableList<T> {
    /// Create an empty list at version 0 with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::from_items(Vec::new())
    }

    /// Create a list pre-populated with `items`. No notification is sent.
    #[must_use]
    pub fn from_items(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ListInner {
                items: items.into_iter().collect(),
                version: 0,
                listeners: Vec::new(),
                pending: VecDeque::new(),
                dispatching: false,
            })),
        }
    }

    /// Register a listener. It receives every subsequent snapshot.
    pub fn add_listener(&self, listener: impl Fn(&Snapshot<T>) + 'static) {
        self.add_fallible_listener(move |snapshot| {
            listener(snapshot);
            Ok(())
        });
    }

    /// Register a listener that may fail.
    ///
    /// A failure is logged and the round continues with the next listener.
    pub fn add_fallible_listener(
        &self,
        listener: impl Fn(&Snapshot<T>) -> Result<(), RuntimeError> + 'static,
    ) {
        self.inner.borrow_mut().listeners.push(Rc::new(listener));
    }

    /// Append `item` and notify every listener with the new snapshot.
    pub fn add(&self, item: T) {
        self.mutate(|items| {
            items.push(item);
            true
        });
    }

    /// Replace the first item matching `pred` with `build(&old)`.
    ///
    /// Returns `false` without notifying if no item matched.
    pub fn replace(&self, pred: impl Fn(&T) -> bool, build: impl FnOnce(&T) -> T) -> bool {
        self.mutate(|items| match items.iter().position(pred) {
            Some(index) => {
                items[index] = build(&items[index]);
                true
            }
            None => false,
        })
    }

    /// Take a snapshot of the current contents.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<T> {
        let inner = self.inner.borrow();
        Snapshot {
            items: Rc::from(inner.items.as_slice()),
            version: inner.version,
        }
    }

    /// Access the current items by reference without copying.
    pub fn with<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        f(&self.inner.borrow().items)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().items.is_empty()
    }

    /// Current version number. Increments by 1 on each applied mutation.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Apply `f` to the canonical sequence; queue a snapshot if it changed
    /// anything and run the dispatch loop unless one is already running.
    fn mutate(&self, f: impl FnOnce(&mut Vec<T>) -> bool) -> bool {
        {
            let mut inner = self.inner.borrow_mut();
            if !f(&mut inner.items) {
                return false;
            }
            inner.version += 1;
            let snapshot = Snapshot {
                items: Rc::from(inner.items.as_slice()),
                version: inner.version,
            };
            inner.pending.push_back(snapshot);
            if inner.dispatching {
                debug!(
                    version = inner.version,
                    queued = inner.pending.len(),
                    "mutation during notification; snapshot deferred"
                );
                return true;
            }
            inner.dispatching = true;
        }
        self.dispatch();
        true
    }

    /// Drain the pending queue, one full round per snapshot.
    fn dispatch(&self) {
        let _guard = DispatchGuard {
            inner: &self.inner,
        };
        loop {
            // Collect listeners first, so none of them runs under a borrow.
            let (snapshot, listeners) = {
                let mut inner = self.inner.borrow_mut();
                match inner.pending.pop_front() {
                    Some(snapshot) => (snapshot, inner.listeners.clone()),
                    None => return,
                }
            };

            debug!(
                version = snapshot.version(),
                items = snapshot.len(),
                listeners = listeners.len(),
                "notifying listeners"
            );
            for (index, listener) in listeners.iter().enumerate() {
                if let Err(error) = listener(&snapshot) {
                    warn!(
                        listener = index,
                        version = snapshot.version(),
                        %error,
                        "listener failed; skipping"
                    );
                }
            }
        }
    }
}

/// Clears the dispatching flag when the dispatch loop exits, including by
/// unwinding out of a panicking listener. Pending snapshots are kept.
struct DispatchGuard<'a, T> {
    inner: &'a Rc<RefCell<ListInner<T>>>,
}

impl<T> Drop for DispatchGuard<'_, T> {
    fn drop(&mut self) {
        if let Ok(mut inner) = self.inner.try_borrow_mut() {
            inner.dispatching = false;
            if std::thread::panicking() && !inner.pending.is_empty() {
                warn!(
                    queued = inner.pending.len(),
                    "listener panicked; queued snapshots wait for the next mutation"
                );
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
