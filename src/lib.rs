//! # Primer Crate
//!
//! Introductory algorithm library organized by category.
//!
//! ## Modules
//!
//! - `divide_and_conquer` – Recursive split/combine strategies (suffix min/max scan)
//! - `data_structures` – Core structural containers (singly linked list)
//!
//! ---
//!
//! ## Usage Example
//!
//! ```rust
//! use primer::divide_and_conquer::min_max::{find_max, find_min};
//!
//! let values = [70, 250, 50, 80, 140, 12, 14];
//! assert_eq!(find_max(&values, 0), 250);
//! assert_eq!(find_min(&values, 0), 12);
//! ```
//!
//! ---
//!
//! Designed as a teaching-first computational foundation layer.

pub mod computation_map;
pub mod data_structures;
pub mod divide_and_conquer;
