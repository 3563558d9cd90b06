// SPDX-License-Identifier: GPL-3.0-only

use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;

use super::*;

#[derive(Debug, Clone, PartialEq)]
struct Item {
    id: u32,
}

/// Pages requested so far, in call order
#[derive(Clone, Default)]
struct Calls(Arc<Mutex<Vec<u32>>>);

impl Calls {
    fn pages(&self) -> Vec<u32> {
        self.0.lock().unwrap().clone()
    }
}

/// Controller whose callback returns `[page * 10, page * 10 + 1]`, failing
/// with "timeout" for the pages in `failing`
fn controller(
    initial_page: u32,
    show_controls: bool,
    failing: &'static [u32],
) -> (Paginated<Item>, PendingFetch<Item>, Calls) {
    let calls = Calls::default();
    let recorder = calls.clone();

    let (paginated, pending) = Paginated::new(
        move |page| {
            recorder.0.lock().unwrap().push(page);
            async move {
                if failing.contains(&page) {
                    Err(String::from("timeout"))
                } else {
                    Ok(vec![Item { id: page * 10 }, Item { id: page * 10 + 1 }])
                }
            }
        },
        initial_page,
        show_controls,
    );

    (paginated, pending, calls)
}

#[test]
fn activation_fetches_initial_page_once() {
    for page in [1, 2, 7, 120] {
        let (paginated, pending, calls) = controller(page, false, &[]);

        assert_eq!(calls.pages(), vec![page]);
        assert_eq!(pending.ticket().page(), page);
        assert_eq!(paginated.page(), page);
        assert!(paginated.loading());
        assert_eq!(paginated.error(), None);
        assert!(paginated.data().is_empty());
    }
}

#[test]
fn initial_page_zero_starts_at_one() {
    let (paginated, pending, calls) = controller(0, false, &[]);

    assert_eq!(paginated.page(), 1);
    assert_eq!(pending.ticket().page(), 1);
    assert_eq!(calls.pages(), vec![1]);
}

#[tokio::test]
async fn success_replaces_data_in_order() {
    let (mut paginated, pending, _calls) = controller(3, false, &[]);

    assert!(paginated.resolve(pending.run().await));

    assert_eq!(paginated.data(), &[Item { id: 30 }, Item { id: 31 }]);
    assert!(!paginated.loading());
    assert_eq!(paginated.error(), None);

    let pending = paginated.next();
    assert!(paginated.resolve(pending.run().await));

    assert_eq!(paginated.data(), &[Item { id: 40 }, Item { id: 41 }]);
}

#[tokio::test]
async fn failure_keeps_previous_data() {
    let (mut paginated, pending, _calls) = controller(1, false, &[2]);
    paginated.resolve(pending.run().await);

    let pending = paginated.next();
    assert!(paginated.resolve(pending.run().await));

    assert_eq!(paginated.page(), 2);
    assert_eq!(paginated.error(), Some("timeout"));
    assert!(!paginated.loading());
    assert_eq!(paginated.data(), &[Item { id: 10 }, Item { id: 11 }]);
}

#[tokio::test]
async fn new_attempt_clears_error() {
    let (mut paginated, pending, _calls) = controller(2, false, &[2]);
    paginated.resolve(pending.run().await);
    assert_eq!(paginated.error(), Some("timeout"));

    let pending = paginated.previous().expect("page 2 can go back");

    assert!(paginated.loading());
    assert_eq!(paginated.error(), None);

    paginated.resolve(pending.run().await);
    assert_eq!(paginated.error(), None);
    assert_eq!(paginated.data(), &[Item { id: 10 }, Item { id: 11 }]);
}

#[tokio::test]
async fn previous_on_first_page_is_a_no_op() {
    let (mut paginated, pending, calls) = controller(1, true, &[]);
    paginated.resolve(pending.run().await);
    let before = paginated.state().clone();

    assert!(paginated.previous().is_none());
    assert!(paginated.update(PaginationAction::Back).is_none());

    assert_eq!(paginated.state(), &before);
    assert_eq!(calls.pages(), vec![1]);
}

#[tokio::test]
async fn previous_goes_back_one_page() {
    let (mut paginated, pending, calls) = controller(2, true, &[]);
    paginated.resolve(pending.run().await);

    let pending = paginated.previous().expect("page 2 can go back");

    assert_eq!(paginated.page(), 1);
    assert_eq!(pending.ticket().page(), 1);
    assert_eq!(calls.pages(), vec![2, 1]);
}

#[test]
fn next_always_advances() {
    let (mut paginated, _pending, calls) = controller(1, false, &[]);

    for expected in 2..=5 {
        let pending = paginated.update(PaginationAction::Forward).expect("next always fetches");
        assert_eq!(paginated.page(), expected);
        assert_eq!(pending.ticket().page(), expected);
    }

    assert_eq!(calls.pages(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn next_saturates_at_last_page() {
    let (mut paginated, _pending, calls) = controller(u32::MAX, false, &[]);

    let pending = paginated.next();

    assert_eq!(paginated.page(), u32::MAX);
    assert_eq!(pending.ticket().page(), u32::MAX);
    assert_eq!(calls.pages(), vec![u32::MAX, u32::MAX]);
}

#[tokio::test]
async fn stale_pages_are_dropped() {
    let (mut paginated, first, _calls) = controller(1, false, &[]);
    let second = paginated.next();

    let first = first.run().await;
    let second = second.run().await;

    // The page 1 response arrives while page 2 is still loading
    assert!(!paginated.resolve(first.clone()));
    assert!(paginated.loading());
    assert!(paginated.data().is_empty());

    assert!(paginated.resolve(second));
    assert_eq!(paginated.page(), 2);
    assert_eq!(paginated.data(), &[Item { id: 20 }, Item { id: 21 }]);

    // And once more after page 2 has landed
    assert!(!paginated.resolve(first));
    assert_eq!(paginated.data(), &[Item { id: 20 }, Item { id: 21 }]);
}

#[tokio::test]
async fn outcome_is_applied_once() {
    let (mut paginated, pending, _calls) = controller(1, false, &[]);
    let fetched = pending.run().await;

    assert_eq!(fetched.ticket().page(), 1);
    assert!(paginated.resolve(fetched.clone()));
    assert!(!paginated.resolve(fetched));
}

#[tokio::test]
async fn first_page_with_controls() {
    let calls = Calls::default();
    let recorder = calls.clone();

    let (mut paginated, pending) = Paginated::new(
        move |page| {
            recorder.0.lock().unwrap().push(page);
            async { Ok::<_, String>(vec![Item { id: 1 }]) }
        },
        1,
        true,
    );
    paginated.resolve(pending.run().await);

    assert_eq!(paginated.data(), &[Item { id: 1 }]);
    assert!(!paginated.loading());
    assert_eq!(paginated.error(), None);
    assert_eq!(paginated.page(), 1);
    assert_eq!(calls.pages(), vec![1]);

    let control = paginated.control(|action| action).expect("controls enabled");
    assert_eq!(*control.on_previous(), PaginationAction::Back);
    assert_eq!(*control.on_next(), PaginationAction::Forward);
}

#[test]
fn no_control_when_disabled() {
    let (paginated, _pending, _calls) = controller(1, false, &[]);
    assert!(paginated.control(|action| action).is_none());
}
