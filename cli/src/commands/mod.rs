mod bench;
mod info;
mod verify;

pub use bench::*;
pub use info::*;
pub use verify::*;
