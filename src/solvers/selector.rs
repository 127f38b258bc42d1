use super::{
    greedy::GreedySolver, single_size::SingleSizeSolver, PackList, Problem, Solution, SolverTrait,
};
use tracing::debug;

/// Runs both the single size and the greedy strategy and keeps the one
/// shipping less; the greedy one wins on equal overhead.
#[derive(Debug, Clone)]
pub struct SelectorSolver();

impl SolverTrait for SelectorSolver {
    fn construction(&self, problem: &Problem) -> Solution {
        let single = SingleSizeSolver().construction(problem);
        let greedy = GreedySolver().construction(problem);
        if greedy.overhead > single.overhead {
            debug!(quantity = problem.quantity, "single size wins");
            single
        } else {
            greedy
        }
    }
}

pub fn select_packs(problem: &Problem) -> PackList {
    SelectorSolver().construction(problem).pack_list()
}
