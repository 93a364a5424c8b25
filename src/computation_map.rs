/// Mapping of modules in primer/src to type of computation
/// and whether deterministic or stochastic
pub const PRIMER_COMPUTATION_MAP: &[(&str, &str, &str)] = &[
    (
        "divide_and_conquer/min_max.rs",
        "Order statistics",
        "Deterministic",
    ),
    (
        "data_structures/singly_linked_list.rs",
        "Data structure operations",
        "Deterministic",
    ),
];
