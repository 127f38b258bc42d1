use super::{
    utils::{ceil_div, debug_check_pack_sizes, sorted_ascending},
    Configuration, Problem, Solution, SolverTrait,
};
use tracing::debug;

/// Ships the order with packs of one size only.
#[derive(Debug, Clone)]
pub struct SingleSizeSolver();

impl SolverTrait for SingleSizeSolver {
    fn construction(&self, problem: &Problem) -> Solution {
        debug_check_pack_sizes(&problem.pack_sizes);
        let sizes = sorted_ascending(&problem.pack_sizes);
        let (size, count, overhead) = construction_single_size_inner(problem.quantity, &sizes);
        debug!(quantity = problem.quantity, size, count, %overhead, "single size");
        Solution {
            configuration: Configuration::single(size, count),
            overhead,
        }
    }
}

// returns (size, count, overhead); sizes must be ascending so the smallest size wins ties
pub fn construction_single_size_inner(quantity: u64, sizes: &[u64]) -> (u64, u64, u128) {
    sizes
        .iter()
        .map(|&size| {
            let count = ceil_div(quantity, size);
            let overhead = size as u128 * count as u128 - quantity as u128;
            (size, count, overhead)
        })
        .min_by_key(|&(size, count, overhead)| (overhead, count, size))
        .unwrap_or((0, 0, 0))
}
