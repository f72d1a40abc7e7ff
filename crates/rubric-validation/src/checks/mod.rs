//! Check families.
//!
//! `structure` runs first and alone. The remaining checks assume a
//! structurally valid record and are independent of each other.

pub mod distribution;
pub mod evidence;
pub mod narrative;
pub mod structure;
