//! Carry-propagating addition of little-endian `u64` limb sequences.
//!
//! The kernel is pure and allocation-free: callers supply the output buffer, sized with
//! [`sum_capacity`], and read back the prefix whose length the kernel returns.

mod add;
mod error;
mod limb;

pub use add::*;
pub use error::*;
pub use limb::*;
