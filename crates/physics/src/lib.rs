//! Cross sections and collision physics for 1-D slab transport
//!
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod cross_section;
mod error;
mod sampling;
mod slab;

// Inline anything important for a nice public API
#[doc(inline)]
pub use cross_section::CrossSections;

#[doc(inline)]
pub use slab::{Region, Slab};

#[doc(inline)]
pub use sampling::{
    sample_absorption, sample_flight_distance, sample_interaction, sample_outcome, sample_scatter,
    Absorption, Interaction, Outcome, Scatter,
};

#[doc(inline)]
pub use error::{Error, Result};
