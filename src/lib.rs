pub mod ioutils;
pub mod service;
pub mod solvers;
pub mod store;

use derive_more::Display;
use itertools::Itertools;
use std::collections::BTreeMap;

/// Pack sizes handed out for products without their own configuration.
pub const DEFAULT_PACK_SIZES: [u64; 5] = [250, 500, 1000, 2000, 5000];

#[derive(Display, Debug, Clone, PartialEq, Eq)]
#[display(fmt = "{}", _0)]
pub struct DisplayError(pub String);

impl std::error::Error for DisplayError {}

impl From<String> for DisplayError {
    fn from(s: String) -> DisplayError {
        DisplayError(s)
    }
}

impl From<&str> for DisplayError {
    fn from(s: &str) -> DisplayError {
        DisplayError(s.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub quantity: u64,
    // caller order, may be unsorted; solvers sort their own copy
    pub pack_sizes: Vec<u64>,
}

impl Problem {
    pub fn new(quantity: u64, pack_sizes: &[u64]) -> Problem {
        Problem {
            quantity,
            pack_sizes: pack_sizes.to_vec(),
        }
    }
}

/// Pack size -> number of packs. Zero counts may be present while a solver
/// is still working on it, they are dropped by [`Configuration::pack_list`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration(pub BTreeMap<u64, u64>);

impl Configuration {
    pub fn single(size: u64, count: u64) -> Configuration {
        Configuration(std::iter::once((size, count)).collect())
    }

    pub fn count(&self, size: u64) -> u64 {
        self.0.get(&size).copied().unwrap_or(0)
    }

    pub fn add(&mut self, size: u64, count: u64) {
        *self.0.entry(size).or_insert(0) += count;
    }

    pub fn set(&mut self, size: u64, count: u64) {
        self.0.insert(size, count);
    }

    // u128 so that ceil(q / s) * s never wraps for quantities near u64::MAX
    pub fn shipped(&self) -> u128 {
        self.0
            .iter()
            .map(|(&size, &count)| size as u128 * count as u128)
            .sum()
    }

    pub fn pack_count(&self) -> u128 {
        self.0.values().map(|&count| count as u128).sum()
    }

    pub fn covers(&self, quantity: u64) -> bool {
        self.shipped() >= quantity as u128
    }

    pub fn overhead(&self, quantity: u64) -> u128 {
        debug_assert!(self.covers(quantity), "configuration ships less than ordered");
        self.shipped().saturating_sub(quantity as u128)
    }

    /// Sizes with at least one pack, largest first.
    pub fn pack_list(&self) -> PackList {
        self.0
            .iter()
            .rev()
            .filter(|(_, &count)| count > 0)
            .map(|(&size, &count)| PackConfig { size, count })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub configuration: Configuration,
    pub overhead: u128,
}

impl Solution {
    pub fn new(configuration: Configuration, quantity: u64) -> Solution {
        let overhead = configuration.overhead(quantity);
        Solution {
            configuration,
            overhead,
        }
    }

    pub fn pack_list(&self) -> PackList {
        self.configuration.pack_list()
    }
}

#[derive(Display, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[display(fmt = "{} x {}", count, size)]
pub struct PackConfig {
    pub size: u64,
    pub count: u64,
}

pub type PackList = Vec<PackConfig>;

pub fn format_pack_list(packs: &[PackConfig]) -> String {
    packs.iter().join(", ")
}
