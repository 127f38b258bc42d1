use itertools::Itertools;

// solvers never sort the caller's slice in place, they work on a deduplicated copy
pub fn sorted_ascending(pack_sizes: &[u64]) -> Vec<u64> {
    pack_sizes.iter().copied().sorted().dedup().collect()
}

pub fn sorted_descending(pack_sizes: &[u64]) -> Vec<u64> {
    pack_sizes
        .iter()
        .copied()
        .sorted_by(|a, b| b.cmp(a))
        .dedup()
        .collect()
}

pub fn ceil_div(quantity: u64, size: u64) -> u64 {
    quantity / size + if quantity % size == 0 { 0 } else { 1 }
}

// caller contract, the solvers divide by every size
pub fn debug_check_pack_sizes(pack_sizes: &[u64]) {
    debug_assert!(!pack_sizes.is_empty(), "pack size set must not be empty");
    debug_assert!(
        pack_sizes.iter().all(|&size| size > 0),
        "pack sizes must be positive"
    );
}
