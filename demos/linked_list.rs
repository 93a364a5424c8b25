//! Minimal API surface for the singly linked list.
//! Shows construction, traversal, insertion at every position, and both
//! deletion flavors in one file.

use primer::data_structures::singly_linked_list::SinglyLinkedList;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .init();

    // ── 1. Build 1 -> 7 -> 8 -> 6 -> 4 ───────────────────────────────────────
    let mut list = SinglyLinkedList::new();
    list.push_back(6);
    let seven = list.push_front(7);
    list.push_front(1);
    list.push_back(4);
    list.insert_after(seven, 8)?;
    println!("[1] created list:       {:?}", list.iter().collect::<Vec<_>>());

    // ── 2. Delete by value ───────────────────────────────────────────────────
    let mut by_value = SinglyLinkedList::new();
    for v in [7, 1, 3, 2] {
        by_value.push_front(v);
    }
    println!("[2] before deletion:    {:?}", by_value.iter().collect::<Vec<_>>());
    by_value.remove_value(&1);
    println!("    after deleting 1:   {:?}", by_value.iter().collect::<Vec<_>>());
    by_value.remove_value(&42);
    println!("    absent key, no-op:  {:?}", by_value.iter().collect::<Vec<_>>());

    // ── 3. Delete by position ────────────────────────────────────────────────
    let mut by_position = SinglyLinkedList::new();
    for v in [7, 1, 3, 2, 8] {
        by_position.push_front(v);
    }
    println!("[3] before deletion:    {:?}", by_position.iter().collect::<Vec<_>>());
    by_position.remove_at(4);
    println!("    after deleting [4]: {:?}", by_position.iter().collect::<Vec<_>>());

    // ── 4. A removed node's handle is refused ────────────────────────────────
    let mut refused = SinglyLinkedList::new();
    let stale = refused.push_front(10);
    refused.pop_front();
    let err = refused.insert_after(stale, 11).unwrap_err();
    println!("[4] stale handle:       {err}");

    Ok(())
}
