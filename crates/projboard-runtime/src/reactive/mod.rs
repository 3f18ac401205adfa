#![forbid(unsafe_code)]

//! Reactive list primitives.
//!
//! - [`ObservableList`]: a shared, version-tracked sequence that notifies
//!   listeners with a full [`Snapshot`] after every mutation.
//! - [`RenderBinding`]: derives a filtered, projected view from each
//!   snapshot and pushes it to a [`RenderTarget`].
//!
//! # Architecture
//!
//! `ObservableList<T>` uses `Rc<RefCell<..>>` for single-threaded shared
//! ownership. Listeners are held strongly for the lifetime of the list;
//! there is no unsubscribe.
//!
//! # Invariants
//!
//! 1. Version increments exactly once per applied mutation.
//! 2. Listeners are notified in registration order.
//! 3. Every listener sees every snapshot, in mutation order.
//! 4. A snapshot never changes after it has been taken.
//! 5. Mutations issued from inside a listener are queued and delivered
//!    after the current notification round completes.

pub mod binding;
pub mod observable_list;

pub use binding::{RenderBinding, RenderTarget};
pub use observable_list::{ObservableList, Snapshot};
