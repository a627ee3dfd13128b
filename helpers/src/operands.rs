use rand::{rngs::StdRng, Rng, SeedableRng};

/// Limb lengths swept by the correctness checks, zero-length operands included.
pub const VERIFY_LENGTHS: [usize; 5] = [0, 1, 2, 64, 65536];

/// Limb lengths swept by the timing comparison.
pub const BENCH_LENGTHS: [usize; 8] = [64, 128, 256, 512, 1024, 2048, 32768, 65536];

/// Uniformly random limbs.
pub fn random_limbs<R: Rng>(rng: &mut R, len: usize) -> Vec<u64> {
    (0..len).map(|_| rng.random()).collect()
}

/// `len` limbs all equal to `value`.
pub fn saturated_limbs(len: usize, value: u64) -> Vec<u64> {
    vec![value; len]
}

/// Deterministic generator when a seed is given, OS entropy otherwise.
pub fn operand_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Fixed operand pairs exercising carry boundaries: saturation, early carry termination,
/// carry propagation into the tail and zero-length operands.
pub fn boundary_cases() -> Vec<(Vec<u64>, Vec<u64>)> {
    let max = u64::MAX;
    vec![
        (vec![3, 1], vec![5, 2]),
        (vec![max, max], vec![max, max]),
        (vec![5, 3], vec![2]),
        (vec![2], vec![5, 3]),
        (vec![max, max], vec![max]),
        (vec![max], vec![max, max]),
        (vec![max, max, 5], vec![1]),
        (vec![max, max, max], vec![1]),
        (saturated_limbs(64, max), vec![1]),
        (saturated_limbs(64, max), saturated_limbs(64, max)),
        (vec![], vec![]),
        (vec![], vec![max, 7]),
        (vec![max, 7], vec![]),
    ]
}
