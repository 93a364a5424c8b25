//! Divide-and-conquer scan over the classic worked array.
//! Shows the single-branch recursion producing both order statistics.

use primer::divide_and_conquer::min_max::{find_max, find_min};

fn main() {
    let values = [70, 250, 50, 80, 140, 12, 14];

    let min = find_min(&values, 0);
    let max = find_max(&values, 0);

    println!("Input array: {values:?}");
    println!("The minimum number in a given array is : {min}");
    println!("The maximum number in a given array is : {max}");
}
