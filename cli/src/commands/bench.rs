use std::{fs, path::PathBuf, time::Instant};

use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;

use limbadd_core::{add, sum_capacity};
use limbadd_helpers::{limbs_to_biguint, random_limbs, BENCH_LENGTHS};

use crate::resolve_seed;

/// Times the kernel against num-bigint for every ordered pair of operand lengths.
#[derive(Parser, Debug, Clone)]
#[command(about = "Compare addition timings with a reference big integer library")]
pub struct LimbaddBench {
    /// Operand lengths in limbs, combined in every order
    #[clap(
        short = 'l',
        long,
        value_delimiter = ',',
        env = "LIMBADD_BENCH_LENGTHS",
        default_values_t = BENCH_LENGTHS
    )]
    pub lengths: Vec<usize>,

    /// Timed additions per length pair; the fastest one is reported
    #[clap(short = 'n', long, env = "LIMBADD_SAMPLES", default_value_t = 300)]
    pub samples: usize,

    /// Seed for operand generation
    #[clap(short = 's', long, env = "LIMBADD_SEED")]
    pub seed: Option<u64>,

    /// Write the plain text table to this file
    #[clap(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Write the rows as JSON to this file
    #[clap(short = 'j', long)]
    pub json: Option<PathBuf>,
}

impl Default for LimbaddBench {
    fn default() -> Self {
        Self { lengths: BENCH_LENGTHS.to_vec(), samples: 300, seed: None, output: None, json: None }
    }
}

/// Fastest observed addition time for one length pair, in nanoseconds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchRow {
    pub left_length: usize,
    pub right_length: usize,
    pub reference_ns: u128,
    pub kernel_ns: u128,
}

impl BenchRow {
    /// Kernel time relative to the reference, in percent.
    pub fn percent(&self) -> u128 {
        self.kernel_ns * 100 / self.reference_ns.max(1)
    }
}

impl LimbaddBench {
    pub fn run(&self) -> Result<()> {
        if self.samples == 0 {
            bail!("samples must be at least 1");
        }
        let seed = resolve_seed(self.seed);
        let mut rng = StdRng::seed_from_u64(seed);

        let mut rows = Vec::with_capacity(self.lengths.len() * self.lengths.len());
        for &left_length in &self.lengths {
            for &right_length in &self.lengths {
                let row = self.measure(&mut rng, left_length, right_length)?;
                tracing::debug!(
                    "left_length:{left_length} right_length:{right_length} reference:{}ns kernel:{}ns",
                    row.reference_ns,
                    row.kernel_ns
                );
                rows.push(row);
            }
        }

        print_table(&rows);

        if let Some(path) = &self.output {
            fs::write(path, render_table(&rows))
                .with_context(|| format!("Failed to write table to {}", path.display()))?;
            tracing::info!("Table written to {}", path.display());
        }
        if let Some(path) = &self.json {
            let json = serde_json::to_string_pretty(&rows)?;
            fs::write(path, json)
                .with_context(|| format!("Failed to write JSON report to {}", path.display()))?;
            tracing::info!("JSON report written to {}", path.display());
        }
        Ok(())
    }

    fn measure(
        &self,
        rng: &mut StdRng,
        left_length: usize,
        right_length: usize,
    ) -> Result<BenchRow> {
        let mut reference_ns = u128::MAX;
        let mut kernel_ns = u128::MAX;
        let mut out = vec![0; sum_capacity(left_length, right_length)];

        for _ in 0..self.samples {
            let left = random_limbs(rng, left_length);
            let right = random_limbs(rng, right_length);
            let b1 = limbs_to_biguint(&left);
            let b2 = limbs_to_biguint(&right);

            let start = Instant::now();
            let expected = &b1 + &b2;
            reference_ns = reference_ns.min(start.elapsed().as_nanos());

            let start = Instant::now();
            let len = add(&left, &right, &mut out)?;
            kernel_ns = kernel_ns.min(start.elapsed().as_nanos());

            if limbs_to_biguint(&out[..len]) != expected {
                bail!("Sum mismatch for left_length:{left_length} right_length:{right_length}");
            }
        }

        Ok(BenchRow { left_length, right_length, reference_ns, kernel_ns })
    }
}

const HEADER: [&str; 5] = ["leftLength", "rightLength", "reference(ns)", "kernel(ns)", "Percent"];

pub fn render_table(rows: &[BenchRow]) -> String {
    let mut table = format!(
        "{:<20}{:<20}{:<20}{:<20}{}\n",
        HEADER[0], HEADER[1], HEADER[2], HEADER[3], HEADER[4]
    );
    for row in rows {
        table += &format!(
            "{:<20}{:<20}{:<20}{:<20}{}%\n",
            row.left_length,
            row.right_length,
            row.reference_ns,
            row.kernel_ns,
            row.percent()
        );
    }
    table
}

fn print_table(rows: &[BenchRow]) {
    println!(
        "{:<20}{:<20}{:<20}{:<20}{}",
        HEADER[0].bold(),
        HEADER[1].bold(),
        HEADER[2].bold(),
        HEADER[3].bold(),
        HEADER[4].bold()
    );
    for row in rows {
        let percent = format!("{}%", row.percent());
        let percent = if row.percent() <= 100 { percent.green() } else { percent.red() };
        println!(
            "{:<20}{:<20}{:<20}{:<20}{}",
            row.left_length, row.right_length, row.reference_ns, row.kernel_ns, percent
        );
    }
}
