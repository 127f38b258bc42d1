pub mod utils;
pub use utils::*;

mod single_size;
use single_size::SingleSizeSolver;

mod greedy;
use greedy::GreedySolver;

mod merge;
pub use merge::merge_packs;

mod selector;
use selector::SelectorSolver;
pub use selector::select_packs;

use enum_dispatch::enum_dispatch;

use super::DisplayError;
pub use super::{Configuration, PackList, Problem, Solution};

#[enum_dispatch]
#[derive(Debug, Clone)]
pub enum Solver {
    SingleSize(SingleSizeSolver),
    Greedy(GreedySolver),
    Selector(SelectorSolver),
}
pub use Solver::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Methods {
    SingleSize,
    Greedy,
    Selector,
}

use itertools::Itertools;
use std::str::FromStr;

const METHODS: [(&str, Methods); 3] = [
    ("single-size", Methods::SingleSize),
    ("greedy", Methods::Greedy),
    ("selector", Methods::Selector),
];

impl FromStr for Methods {
    type Err = DisplayError;
    fn from_str(name: &str) -> Result<Methods, DisplayError> {
        METHODS
            .iter()
            .find(|(method_name, _)| *method_name == name)
            .map(|(_, method)| *method)
            .ok_or_else(|| {
                format!(
                    "Method {:?} not found, following are valid: {}.",
                    name,
                    METHODS.iter().map(|x| x.0).join(", ")
                )
                .into()
            })
    }
}

#[enum_dispatch(Solver)]
pub trait SolverTrait {
    fn construction(&self, problem: &Problem) -> Solution;

    fn pack_list(&self, problem: &Problem) -> PackList {
        self.construction(problem).pack_list()
    }
}

impl Solver {
    pub fn from_method(method: Methods) -> Solver {
        match method {
            Methods::SingleSize => SingleSize(SingleSizeSolver()),
            Methods::Greedy => Greedy(GreedySolver()),
            Methods::Selector => Selector(SelectorSolver()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SingleSize(_) => "single-size",
            Greedy(_) => "greedy",
            Selector(_) => "selector",
        }
    }
}

impl Default for Solver {
    fn default() -> Solver {
        Selector(SelectorSolver())
    }
}
