use super::{
    merge::merge_packs,
    utils::{debug_check_pack_sizes, sorted_descending},
    Configuration, Problem, Solution, SolverTrait,
};
use tracing::debug;

/// Largest packs first, then one smallest pack for whatever is left, then
/// smaller packs are merged into bigger ones.
#[derive(Debug, Clone)]
pub struct GreedySolver();

impl SolverTrait for GreedySolver {
    fn construction(&self, problem: &Problem) -> Solution {
        debug_check_pack_sizes(&problem.pack_sizes);
        let sizes = sorted_descending(&problem.pack_sizes);
        let mut configuration = construction_greedy_inner(problem.quantity, &sizes);
        merge_packs(problem.quantity, &sizes, &mut configuration);
        let solution = Solution::new(configuration, problem.quantity);
        debug!(
            quantity = problem.quantity,
            overhead = %solution.overhead,
            packs = %solution.configuration.pack_count(),
            "greedy"
        );
        solution
    }
}

// sizes must be descending
pub fn construction_greedy_inner(quantity: u64, sizes: &[u64]) -> Configuration {
    let (mut configuration, rest) = sizes.iter().fold(
        (Configuration::default(), quantity),
        |(mut configuration, rest), &size| {
            if rest >= size {
                configuration.add(size, rest / size);
                (configuration, rest % size)
            } else {
                (configuration, rest)
            }
        },
    );
    // rest is smaller than every size now
    if rest > 0 {
        if let Some(&smallest) = sizes.last() {
            configuration.add(smallest, 1);
        }
    }
    configuration
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_PACK_SIZES;

    fn divide(quantity: u64, sizes: &[u64]) -> Vec<(u64, u64)> {
        construction_greedy_inner(quantity, &sorted_descending(sizes))
            .pack_list()
            .into_iter()
            .map(|p| (p.size, p.count))
            .collect()
    }

    #[test]
    fn divides_largest_first() {
        assert_eq!(
            divide(12001, &DEFAULT_PACK_SIZES),
            vec![(5000, 2), (2000, 1), (250, 1)]
        );
        assert_eq!(
            divide(7750, &DEFAULT_PACK_SIZES),
            vec![(5000, 1), (2000, 1), (500, 1), (250, 1)]
        );
    }

    #[test]
    fn pads_remainder_with_smallest_pack() {
        assert_eq!(divide(1, &DEFAULT_PACK_SIZES), vec![(250, 1)]);
        // 500 + 250 + one more 250 for the last unit
        assert_eq!(divide(751, &DEFAULT_PACK_SIZES), vec![(500, 1), (250, 2)]);
        assert_eq!(divide(1499, &[250, 600]), vec![(600, 2), (250, 2)]);
    }

    #[test]
    fn exact_quantity_has_no_padding() {
        assert_eq!(divide(3000, &DEFAULT_PACK_SIZES), vec![(2000, 1), (1000, 1)]);
    }

    #[test]
    fn construction_merges_after_dividing() {
        let solution = GreedySolver().construction(&Problem::new(751, &DEFAULT_PACK_SIZES));
        assert_eq!(solution.configuration.pack_list().len(), 1);
        assert_eq!(solution.configuration.count(1000), 1);
        assert_eq!(solution.overhead, 249);
    }

    #[test]
    fn construction_does_not_reorder_callers_sizes() {
        let problem = Problem::new(501, &[1000, 250, 500]);
        GreedySolver().construction(&problem);
        assert_eq!(problem.pack_sizes, vec![1000, 250, 500]);
    }
}
