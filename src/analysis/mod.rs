// src/analysis/mod.rs
//
// Pure batch → batch / batch → series transforms. Nothing here mutates its
// input; every function builds a new value.

pub mod aggregate;
pub mod capping;
pub mod cleaning;
pub mod stats;

pub use aggregate::{aggregate, GroupKey, GroupValue, ValueKey};
pub use capping::{cap, Bounds, Capped};
pub use cleaning::clean;
