use std::cell::Cell;
use std::rc::Rc;

use super::*;

/// Handle that records when it is dropped, standing in for a timer.
struct DropCounter(Rc<Cell<u32>>);

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

fn counter() -> Rc<Cell<u32>> {
    Rc::new(Cell::new(0))
}

#[test]
fn new_slots_are_empty() {
    let tasks: PendingTasks<&str, DropCounter> = PendingTasks::new();
    assert!(tasks.is_empty());
    assert_eq!(tasks.len(), 0);
}

#[test]
fn replace_cancels_previous_handle_for_same_key() {
    let first = counter();
    let second = counter();
    let mut tasks = PendingTasks::new();
    assert!(!tasks.replace("modal", DropCounter(Rc::clone(&first))));
    assert!(tasks.replace("modal", DropCounter(Rc::clone(&second))));
    assert_eq!(first.get(), 1);
    assert_eq!(second.get(), 0);
    assert_eq!(tasks.len(), 1);
}

#[test]
fn keys_are_independent() {
    let a = counter();
    let b = counter();
    let mut tasks = PendingTasks::new();
    tasks.replace(0_usize, DropCounter(Rc::clone(&a)));
    tasks.replace(1_usize, DropCounter(Rc::clone(&b)));
    assert!(tasks.cancel(&0));
    assert_eq!(a.get(), 1);
    assert_eq!(b.get(), 0);
    assert!(tasks.contains(&1));
    assert!(!tasks.contains(&0));
}

#[test]
fn cancel_missing_key_is_false() {
    let mut tasks: PendingTasks<usize, DropCounter> = PendingTasks::new();
    assert!(!tasks.cancel(&7));
}

#[test]
fn cancel_all_and_drop_release_every_handle() {
    let hits = counter();
    let mut tasks = PendingTasks::new();
    tasks.replace(1, DropCounter(Rc::clone(&hits)));
    tasks.replace(2, DropCounter(Rc::clone(&hits)));
    tasks.cancel_all();
    assert_eq!(hits.get(), 2);
    assert!(tasks.is_empty());

    tasks.replace(3, DropCounter(Rc::clone(&hits)));
    drop(tasks);
    assert_eq!(hits.get(), 3);
}
