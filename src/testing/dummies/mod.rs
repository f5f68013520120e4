mod artifacts;

pub use artifacts::*;
