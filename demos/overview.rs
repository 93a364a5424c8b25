//! Standalone runner that demonstrates every module in `primer/src`

use primer::computation_map::PRIMER_COMPUTATION_MAP;
use primer::data_structures::singly_linked_list::SinglyLinkedList;
use primer::divide_and_conquer::min_max::{find_max, find_min};

fn main() {
    println!("=== Primer Computation Map ===");
    for (path, comp_type, determinism) in PRIMER_COMPUTATION_MAP.iter() {
        println!("{:<45} | {:<28} | {}", path, comp_type, determinism);
    }

    println!("\n=== Sanity Check Examples ===");

    // Divide and conquer examples
    {
        let values = [70, 250, 50, 80, 140, 12, 14];
        println!("Min example: {:?}", find_min(&values, 0));
        println!("Max example: {:?}", find_max(&values, 0));
    }

    // Data structure examples
    {
        let mut list = SinglyLinkedList::new();
        for v in [3, 2, 1] {
            list.push_front(v);
        }
        list.push_back(4);
        println!("Linked list example: {:?}", list.iter().collect::<Vec<_>>());
    }
}
