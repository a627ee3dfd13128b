mod bigint;
mod operands;

pub use bigint::*;
pub use operands::*;
