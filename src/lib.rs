//! `mcslab` is a one-dimensional Monte Carlo neutron transport simulator
//! for slab criticality studies
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use mcslab_physics as physics;

#[cfg(feature = "tally")]
#[cfg_attr(docsrs, doc(cfg(feature = "tally")))]
#[doc(inline)]
pub use mcslab_tally as tally;

#[cfg(feature = "transport")]
#[cfg_attr(docsrs, doc(cfg(feature = "transport")))]
#[doc(inline)]
pub use mcslab_transport as transport;
