//! Region geometry for the two-region slab

// crate modules
use crate::cross_section::CrossSections;
use crate::error::{Error, Result};

// external crates
use serde::{Deserialize, Serialize};

/// A homogeneous region over the half-open interval `[lower, upper)`
///
/// Region bounds follow the half-open convention throughout, so a position
/// exactly on a shared boundary always belongs to the region above it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Inclusive lower bound of the region
    pub lower: f64,
    /// Exclusive upper bound of the region
    pub upper: f64,
    /// Macroscopic cross sections of the region material
    pub cross_sections: CrossSections,
}

impl Region {
    /// Collect bounds and material data into a new region
    pub const fn new(lower: f64, upper: f64, cross_sections: CrossSections) -> Self {
        Self {
            lower,
            upper,
            cross_sections,
        }
    }

    /// True for any position in `[lower, upper)`
    pub fn contains(&self, position: f64) -> bool {
        self.lower <= position && position < self.upper
    }
}

/// Slab geometry, an ordered set of regions tiling `[0, 1)`
///
/// The constructor validates the geometry once so that lookups during
/// transport never see undefined cross sections:
///
/// - regions are contiguous from 0.0 up to 1.0
/// - every cross section is finite and non-negative
/// - every region has a positive total cross section
///
/// The default slab is the baseline two-region problem:
///
/// | Region     | Interval   | σa   | σs   | σf   |
/// | ---------- | ---------- | ---- | ---- | ---- |
/// | A          | [0.0, 0.5) | 0.12 | 0.05 | 0.15 |
/// | B          | [0.5, 1.0) | 0.10 | 0.05 | 0.12 |
///
/// ```rust
/// # use mcslab_physics::Slab;
/// let slab = Slab::default();
///
/// // boundary positions resolve to the region above them
/// assert_eq!(slab.lookup(0.5).unwrap().absorption, 0.10);
///
/// // positions outside the slab are an explicit error
/// assert!(slab.lookup(1.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Region>", into = "Vec<Region>")]
pub struct Slab {
    regions: Vec<Region>,
}

impl Slab {
    /// Build a slab from an ordered list of regions
    ///
    /// Fails if the regions do not tile `[0, 1)` exactly or any region
    /// carries unusable cross sections.
    pub fn new(regions: Vec<Region>) -> Result<Self> {
        if regions.is_empty() {
            return Err(Error::EmptySlab);
        }

        let mut expected = 0.0;
        for region in &regions {
            if region.lower != expected {
                return Err(Error::RegionCoverageGap {
                    expected,
                    found: region.lower,
                });
            }
            if !(region.lower < region.upper) || !region.upper.is_finite() {
                return Err(Error::InvalidRegionBounds {
                    lower: region.lower,
                    upper: region.upper,
                });
            }

            let xs = region.cross_sections;
            let values = [xs.absorption, xs.scattering, xs.fission];
            if values.iter().any(|s| !s.is_finite() || *s < 0.0) {
                return Err(Error::InvalidCrossSection {
                    lower: region.lower,
                    upper: region.upper,
                });
            }
            // precondition for the interaction sampler
            if xs.total() <= 0.0 {
                return Err(Error::DegenerateCrossSections {
                    lower: region.lower,
                    upper: region.upper,
                });
            }

            expected = region.upper;
        }

        if expected != 1.0 {
            return Err(Error::RegionCoverageGap {
                expected: 1.0,
                found: expected,
            });
        }

        Ok(Self { regions })
    }

    /// Cross sections of the region covering `position`
    ///
    /// Positions outside `[0, 1)` are never assigned a region and return
    /// [Error::PositionOutsideSlab] rather than stale values.
    pub fn lookup(&self, position: f64) -> Result<CrossSections> {
        self.regions
            .iter()
            .find(|region| region.contains(position))
            .map(|region| region.cross_sections)
            .ok_or(Error::PositionOutsideSlab(position))
    }

    /// Ordered list of the slab regions
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }
}

impl Default for Slab {
    fn default() -> Self {
        // the baseline constants are valid by inspection, skip revalidation
        Self {
            regions: vec![
                Region::new(0.0, 0.5, CrossSections::new(0.12, 0.05, 0.15)),
                Region::new(0.5, 1.0, CrossSections::new(0.10, 0.05, 0.12)),
            ],
        }
    }
}

impl TryFrom<Vec<Region>> for Slab {
    type Error = Error;

    fn try_from(regions: Vec<Region>) -> Result<Self> {
        Self::new(regions)
    }
}

impl From<Slab> for Vec<Region> {
    fn from(slab: Slab) -> Self {
        slab.regions
    }
}
