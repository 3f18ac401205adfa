#![forbid(unsafe_code)]

//! Reactive core for projboard.
//!
//! - [`ObservableList`]: an ordered, shared list that broadcasts an immutable
//!   [`Snapshot`] to every listener after each mutation.
//! - [`RenderBinding`]: subscribes to a list, filters and projects each
//!   snapshot, and clear-and-rebuilds a [`RenderTarget`].
//! - [`ItemId`]: process-unique identifiers for list items.

pub mod error;
pub mod id;
pub mod reactive;

pub use error::{Result, RuntimeError};
pub use id::ItemId;
pub use reactive::{ObservableList, RenderBinding, RenderTarget, Snapshot};
