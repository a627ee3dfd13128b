use std::fmt;

use anyhow::{bail, Result};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use rayon::prelude::*;

use limbadd_core::add_to_vec;
use limbadd_helpers::{
    boundary_cases, check_result_length, random_limbs, verify_sum, VERIFY_LENGTHS,
};

use crate::resolve_seed;

/// Cross-checks the kernel against num-bigint for every ordered pair of operand lengths.
#[derive(Parser, Debug, Clone)]
#[command(about = "Check sums against a reference big integer library")]
pub struct LimbaddVerify {
    /// Operand lengths in limbs, combined in every order
    #[clap(
        short = 'l',
        long,
        value_delimiter = ',',
        env = "LIMBADD_VERIFY_LENGTHS",
        default_values_t = VERIFY_LENGTHS
    )]
    pub lengths: Vec<usize>,

    /// Random operand pairs per length pair
    #[clap(short = 'r', long, env = "LIMBADD_ROUNDS", default_value_t = 8)]
    pub rounds: usize,

    /// Seed for operand generation
    #[clap(short = 's', long, env = "LIMBADD_SEED")]
    pub seed: Option<u64>,
}

impl Default for LimbaddVerify {
    fn default() -> Self {
        Self { lengths: VERIFY_LENGTHS.to_vec(), rounds: 8, seed: None }
    }
}

/// A sum that disagreed with the reference or broke the length contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub left_len: usize,
    pub right_len: usize,
    pub source: MismatchSource,
}

/// Where the failing operands came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MismatchSource {
    /// Index into the fixed boundary case list.
    Boundary { case: usize },
    /// Random round within one length pair.
    Random { round: usize },
}

impl fmt::Display for MismatchSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MismatchSource::Boundary { case } => write!(f, "boundary case {case}"),
            MismatchSource::Random { round } => write!(f, "round {round}"),
        }
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mismatch left_len:{} right_len:{} {}", self.left_len, self.right_len, self.source)
    }
}

impl LimbaddVerify {
    pub fn run(&self) -> Result<()> {
        let seed = resolve_seed(self.seed);
        let mut failures = self.check_boundaries();
        failures.extend(self.check_random(seed));

        if !failures.is_empty() {
            for f in &failures {
                tracing::error!("{f}");
            }
            bail!("{} sums disagreed with the reference (seed {seed})", failures.len());
        }

        tracing::info!(
            "All sums verified ({} length pairs x {} rounds)",
            self.lengths.len() * self.lengths.len(),
            self.rounds
        );
        Ok(())
    }

    pub fn check_boundaries(&self) -> Vec<Mismatch> {
        boundary_cases()
            .iter()
            .enumerate()
            .filter(|(_, (left, right))| !check_pair(left, right))
            .map(|(case, (left, right))| Mismatch {
                left_len: left.len(),
                right_len: right.len(),
                source: MismatchSource::Boundary { case },
            })
            .collect()
    }

    pub fn check_random(&self, seed: u64) -> Vec<Mismatch> {
        let pairs: Vec<(usize, usize)> = self
            .lengths
            .iter()
            .flat_map(|&l| self.lengths.iter().map(move |&r| (l, r)))
            .collect();

        pairs
            .par_iter()
            .enumerate()
            .flat_map_iter(|(index, &(left_len, right_len))| {
                let mut rng = StdRng::seed_from_u64(seed.wrapping_add(index as u64));
                tracing::debug!("Checking left_len:{left_len} right_len:{right_len}");
                (0..self.rounds)
                    .filter_map(|round| {
                        let left = random_limbs(&mut rng, left_len);
                        let right = random_limbs(&mut rng, right_len);
                        (!check_pair(&left, &right)).then_some(Mismatch {
                            left_len,
                            right_len,
                            source: MismatchSource::Random { round },
                        })
                    })
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}

fn check_pair(left: &[u64], right: &[u64]) -> bool {
    let sum = add_to_vec(left, right);
    verify_sum(left, right, &sum)
        && check_result_length(left.len(), right.len(), &sum)
        && add_to_vec(right, left) == sum
}
