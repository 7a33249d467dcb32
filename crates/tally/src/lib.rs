//! Track-length flux tally over the slab
//!
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod error;
mod flux;
mod writer;

// Inline anything important for a nice public API
#[doc(inline)]
pub use flux::{FluxTally, NUM_BINS};

#[doc(inline)]
pub use writer::write_flux;

#[doc(inline)]
pub use error::{Error, Result};
