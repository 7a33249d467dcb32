//! Transport loop and k-eff estimation for 1-D slab problems
//!
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod config;
mod error;
mod simulation;

// Inline anything important for a nice public API
#[doc(inline)]
pub use config::Config;

#[doc(inline)]
pub use simulation::{CycleResult, RunSummary, Simulation, Termination};

#[doc(inline)]
pub use error::{Error, Result};
