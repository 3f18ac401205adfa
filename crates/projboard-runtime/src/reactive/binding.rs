#![forbid(unsafe_code)]

//! Render bindings: derive a view from an [`ObservableList`] and push it to
//! a [`RenderTarget`].
//!
//! A [`RenderBinding<V>`] is built from three plain values: a filter that
//! picks the relevant items, a projection that turns each kept item into a
//! per-item view `V`, and the target that displays the resulting slice.
//!
//! # Usage
//!
//! ```
//! use projboard_runtime::{ObservableList, RenderBinding, RenderTarget, Result};
//!
//! struct Lines(Vec<String>);
//!
//! impl RenderTarget<String> for Lines {
//!     fn render(&mut self, items: &[String]) -> Result<()> {
//!         self.0 = items.to_vec();
//!         Ok(())
//!     }
//! }
//!
//! let numbers = ObservableList::new();
//! let evens = RenderBinding::bind(
//!     &numbers,
//!     |n: &i32| n % 2 == 0,
//!     |n: &i32| format!("#{n}"),
//!     Lines(Vec::new()),
//! );
//!
//! numbers.add(1);
//! numbers.add(2);
//! numbers.add(4);
//! assert_eq!(evens.rendered(), vec!["#2".to_string(), "#4".to_string()]);
//! ```
//!
//! # Invariants
//!
//! 1. Each notification replaces the whole rendered output (clear-and-rebuild).
//! 2. Per-item views are built fresh on every render and never reused.
//! 3. Rendered items keep the relative order of the source list.
//! 4. The binding renders the list's current contents once when bound.
//!
//! # Failure Modes
//!
//! - Target error: the derived view is still recorded, the error is returned
//!   to the list, which logs it and moves on to the next listener.
//! - Target reading its own binding: allowed. The new view is recorded
//!   before the target runs and only a shared borrow is held while it does.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::warn;

use super::observable_list::{ObservableList, Snapshot};
use crate::error::RuntimeError;

/// Destination for a binding's derived view.
pub trait RenderTarget<V> {
    /// Replace everything previously shown with `items`.
    fn render(&mut self, items: &[V]) -> Result<(), RuntimeError>;
}

impl<V, F> RenderTarget<V> for F
where
    F: FnMut(&[V]) -> Result<(), RuntimeError>,
{
    fn render(&mut self, items: &[V]) -> Result<(), RuntimeError> {
        self(items)
    }
}

struct BindingState<V> {
    rendered: Vec<V>,
    renders: u64,
}

/// A view bound to an [`ObservableList`] through a filter and a projection.
///
/// Cloning yields another handle to the same binding state.
pub struct RenderBinding<V> {
    state: Rc<RefCell<BindingState<V>>>,
}

impl<V> Clone for RenderBinding<V> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for RenderBinding<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("RenderBinding")
            .field("rendered", &state.rendered)
            .field("renders", &state.renders)
            .finish_non_exhaustive()
    }
}

impl<V: 'static> RenderBinding<V> {
    /// Subscribe to `list` and render its current contents immediately.
    pub fn bind<T, F, P, R>(list: &ObservableList<T>, filter: F, project: P, target: R) -> Self
    where
        T: Clone + 'static,
        F: Fn(&T) -> bool + 'static,
        P: Fn(&T) -> V + 'static,
        R: RenderTarget<V> + 'static,
    {
        let state = Rc::new(RefCell::new(BindingState {
            rendered: Vec::new(),
            renders: 0,
        }));
        let target = RefCell::new(target);

        let shared = Rc::clone(&state);
        let refresh = Rc::new(move |snapshot: &Snapshot<T>| -> Result<(), RuntimeError> {
            let views: Vec<V> = snapshot
                .iter()
                .filter(|item| filter(item))
                .map(&project)
                .collect();

            {
                let mut state = shared.borrow_mut();
                state.rendered = views;
                state.renders += 1;
            }
            let state = shared.borrow();
            target.borrow_mut().render(&state.rendered)
        });

        if let Err(error) = refresh(&list.snapshot()) {
            warn!(%error, "initial render failed");
        }

        let listener = Rc::clone(&refresh);
        list.add_fallible_listener(move |snapshot| listener(snapshot));

        Self { state }
    }

    /// Number of renders so far, including the initial one.
    #[must_use]
    pub fn render_count(&self) -> u64 {
        self.state.borrow().renders
    }

    /// Access the last rendered view without cloning.
    pub fn with_rendered<R>(&self, f: impl FnOnce(&[V]) -> R) -> R {
        f(&self.state.borrow().rendered)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.state.borrow().rendered.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.borrow().rendered.is_empty()
    }
}

impl<V: Clone + 'static> RenderBinding<V> {
    /// Clone of the last rendered view.
    #[must_use]
    pub fn rendered(&self) -> Vec<V> {
        self.state.borrow().rendered.clone()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
