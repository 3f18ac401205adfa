//! Property-based invariant tests for the observable list and render bindings.
//!
//! 1. Broadcast completeness: one `add` reaches all N listeners with the same
//!    contents.
//! 2. Snapshot immutability: delivered snapshots keep their contents forever.
//! 3. Filter correctness: a binding renders exactly the matching items.
//! 4. Ordering: rendered items keep insertion order.
//! 5. Version counts applied mutations.
//! 6. Re-entrant mutations are all delivered, in order, to every listener.

use std::cell::RefCell;
use std::rc::Rc;

use projboard_runtime::{ObservableList, RenderBinding, RuntimeError, Snapshot};
use proptest::prelude::*;

// ── Strategies ────────────────────────────────────────────────────────────

fn items_strategy(max_len: usize) -> impl Strategy<Value = Vec<(u32, bool)>> {
    proptest::collection::vec((0u32..1_000, any::<bool>()), 0..=max_len)
}

fn discard(_: &[u32]) -> Result<(), RuntimeError> {
    Ok(())
}

proptest! {
    #[test]
    fn every_listener_sees_every_add(
        listener_count in 1usize..8,
        values in proptest::collection::vec(any::<i64>(), 1..20),
    ) {
        let list = ObservableList::new();
        let logs: Vec<Rc<RefCell<Vec<Vec<i64>>>>> =
            (0..listener_count).map(|_| Rc::new(RefCell::new(Vec::new()))).collect();
        for log in &logs {
            let log = Rc::clone(log);
            list.add_listener(move |snapshot: &Snapshot<i64>| log.borrow_mut().push(snapshot.to_vec()));
        }

        for value in &values {
            list.add(*value);
        }

        for log in &logs {
            let log = log.borrow();
            prop_assert_eq!(log.len(), values.len());
            for (round, seen) in log.iter().enumerate() {
                prop_assert_eq!(seen.as_slice(), &values[..=round]);
            }
        }
        prop_assert_eq!(list.version(), values.len() as u64);
    }

    #[test]
    fn delivered_snapshots_never_change(values in proptest::collection::vec(any::<u16>(), 1..30)) {
        let list = ObservableList::new();
        let kept: Rc<RefCell<Vec<Snapshot<u16>>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&kept);
        list.add_listener(move |snapshot| sink.borrow_mut().push(snapshot.clone()));

        for value in &values {
            list.add(*value);
        }
        // Rewrite every item; old snapshots must stay untouched.
        for value in &values {
            list.replace(|v| v == value, |v| v.wrapping_add(1));
        }

        for (round, snapshot) in kept.borrow().iter().take(values.len()).enumerate() {
            prop_assert_eq!(snapshot.as_slice(), &values[..=round]);
            prop_assert_eq!(snapshot.version(), round as u64 + 1);
        }
    }

    #[test]
    fn binding_renders_matching_items_in_insertion_order(items in items_strategy(40)) {
        let list = ObservableList::new();
        let active = RenderBinding::bind(&list, |item: &(u32, bool)| item.1, |item: &(u32, bool)| item.0, discard);
        let finished = RenderBinding::bind(&list, |item: &(u32, bool)| !item.1, |item: &(u32, bool)| item.0, discard);

        for item in &items {
            list.add(*item);
        }

        let expected_active: Vec<u32> = items.iter().filter(|i| i.1).map(|i| i.0).collect();
        let expected_finished: Vec<u32> = items.iter().filter(|i| !i.1).map(|i| i.0).collect();
        prop_assert_eq!(active.rendered(), expected_active);
        prop_assert_eq!(finished.rendered(), expected_finished);
        prop_assert_eq!(active.render_count(), items.len() as u64 + 1);
    }

    #[test]
    fn reentrant_adds_are_delivered_in_order(extra in 1usize..10) {
        let list: ObservableList<usize> = ObservableList::new();
        let handle = list.clone();
        // The first listener keeps adding until `extra` follow-ups exist.
        list.add_listener(move |snapshot| {
            if snapshot.len() <= extra {
                handle.add(snapshot.len());
            }
        });
        let lengths = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&lengths);
        list.add_listener(move |snapshot| sink.borrow_mut().push(snapshot.len()));

        list.add(0);

        let expected: Vec<usize> = (1..=extra + 1).collect();
        prop_assert_eq!(lengths.borrow().clone(), expected);
        prop_assert_eq!(list.len(), extra + 1);
    }
}
