//! Result and Error types for mcslab-physics

/// Type alias for Result<T, physics::Error>
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `mcslab-physics` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("position {0} is outside the slab [0, 1)")]
    PositionOutsideSlab(f64),

    #[error("slab must contain at least one region")]
    EmptySlab,

    #[error("region bounds [{lower}, {upper}) are invalid")]
    InvalidRegionBounds { lower: f64, upper: f64 },

    #[error("regions do not tile the slab (expected lower bound {expected}, found {found})")]
    RegionCoverageGap { expected: f64, found: f64 },

    #[error("negative or non-finite cross section in region [{lower}, {upper})")]
    InvalidCrossSection { lower: f64, upper: f64 },

    #[error("degenerate cross sections in region [{lower}, {upper}), absorption + scattering must be positive")]
    DegenerateCrossSections { lower: f64, upper: f64 },
}
