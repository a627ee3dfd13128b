use anyhow::Result;
use clap::Parser;

use limbadd_helpers::{decimal_digits, saturated_limbs};

/// Prints how many decimal digits a number of the given limb lengths can reach.
#[derive(Parser, Debug, Clone)]
#[command(about = "Show decimal sizes of saturated limb sequences")]
pub struct LimbaddInfo {
    /// Limb lengths to describe
    #[clap(
        short = 'l',
        long,
        value_delimiter = ',',
        default_values_t = [64usize, 128, 256, 512, 1024, 2048]
    )]
    pub lengths: Vec<usize>,

    /// Value stored in every limb
    #[clap(long, default_value_t = u64::MAX)]
    pub limb: u64,
}

impl LimbaddInfo {
    pub fn run(&self) -> Result<()> {
        println!("{:<20}{:<20}", "limbs", "digits");
        for (length, digits) in self.digits() {
            println!("{length:<20}{digits:<20}");
        }
        Ok(())
    }

    pub fn digits(&self) -> Vec<(usize, usize)> {
        self.lengths
            .iter()
            .map(|&length| (length, decimal_digits(&saturated_limbs(length, self.limb))))
            .collect()
    }
}
