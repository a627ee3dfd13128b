pub mod commands;
pub mod logging;

pub const LIMBADD_VERSION_MESSAGE: &str = env!("CARGO_PKG_VERSION");

/// Resolves the operand seed, drawing one from OS entropy when none was configured so that
/// every run can be replayed with `--seed`.
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    let seed = seed.unwrap_or_else(rand::random);
    tracing::info!("Operand seed: {seed}");
    seed
}
