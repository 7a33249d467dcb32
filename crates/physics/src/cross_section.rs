//! Macroscopic cross-section data

// external crates
use serde::{Deserialize, Serialize};

/// Macroscopic cross sections for a homogeneous material
///
/// All values are macroscopic cross sections in units of inverse length,
/// i.e. the probability per unit path length that the named interaction
/// occurs.
///
/// The interaction sampler only ever distinguishes scattering from
/// absorption, so the total used for free-flight sampling is
/// `absorption + scattering`. Fission is a property of an absorption event
/// and contributes through the expected neutron yield rather than the
/// collision rate.
///
/// ```rust
/// # use mcslab_physics::CrossSections;
/// let xs = CrossSections::new(0.12, 0.05, 0.15);
///
/// assert_eq!(xs.total(), 0.12 + 0.05);
/// assert_eq!(xs.expected_yield(), 1.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrossSections {
    /// Absorption cross section [1/cm]
    pub absorption: f64,
    /// Scattering cross section [1/cm]
    pub scattering: f64,
    /// Fission cross section [1/cm]
    pub fission: f64,
}

impl CrossSections {
    /// Collect the three cross sections into a new set
    pub const fn new(absorption: f64, scattering: f64, fission: f64) -> Self {
        Self {
            absorption,
            scattering,
            fission,
        }
    }

    /// Total collision cross section, `absorption + scattering`
    pub fn total(&self) -> f64 {
        self.absorption + self.scattering
    }

    /// Probability that a collision is a scattering event
    ///
    /// Exact ratio of the scattering to total cross section. The slab
    /// constructor guarantees a positive total for every region, so this is
    /// well defined anywhere a transported neutron can be.
    pub fn scattering_probability(&self) -> f64 {
        self.scattering / self.total()
    }

    /// Expected number of fission neutrons per absorption, `fission / absorption`
    pub fn expected_yield(&self) -> f64 {
        self.fission / self.absorption
    }
}
