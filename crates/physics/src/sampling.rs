//! Stochastic sampling of collision events
//!
//! Analog sampling only. Every function consumes draws from the caller's
//! random number stream in a fixed order, so a seeded generator reproduces
//! an identical event sequence.

// crate modules
use crate::cross_section::CrossSections;

// external crates
use rand::Rng;

/// Classification of the next collision event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// The neutron scatters and continues its history
    Scatter,
    /// The neutron is absorbed, possibly producing fission neutrons
    Absorb,
}

/// Sampled consequence of a scattering event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scatter {
    /// Free-flight distance to the next collision
    pub distance: f64,
    /// Cosine of the scattering angle, uniform on [-1, 1]
    pub angle_cosine: f64,
}

/// Sampled consequence of an absorption event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Absorption {
    /// Number of fission neutrons produced
    pub neutron_yield: u64,
    /// Free-flight distance to the notional next collision
    pub distance: f64,
}

/// Either sampled collision outcome
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// A scattering event
    Scatter(Scatter),
    /// An absorption event
    Absorb(Absorption),
}

/// Classify the next collision as scattering or absorption
///
/// The classification probability is the exact ratio of the scattering to
/// total cross section, and every call is independent of any previous draw.
///
/// The caller must guarantee `total() > 0`, which [Slab](crate::Slab)
/// construction enforces for every region.
pub fn sample_interaction<R: Rng + ?Sized>(xs: &CrossSections, rng: &mut R) -> Interaction {
    if rng.gen::<f64>() < xs.scattering_probability() {
        Interaction::Scatter
    } else {
        Interaction::Absorb
    }
}

/// Exponential free-flight distance for a total cross section `sigma_t`
///
/// Standard analog sampling of the distance to the next collision,
/// `-ln(1-u)/sigma_t` for uniform u. Drawing u from [0, 1) keeps the
/// logarithm argument in (0, 1], which excludes the ln(0) singularity.
pub fn sample_flight_distance<R: Rng + ?Sized>(sigma_t: f64, rng: &mut R) -> f64 {
    -(1.0 - rng.gen::<f64>()).ln() / sigma_t
}

/// Sample the consequence of a scattering event
///
/// Draws the free-flight distance to the next collision and the cosine of
/// the scattering angle, uniform on [-1, 1]. The sign of the cosine is the
/// direction of travel in the 1-D model.
pub fn sample_scatter<R: Rng + ?Sized>(xs: &CrossSections, rng: &mut R) -> Scatter {
    Scatter {
        distance: sample_flight_distance(xs.total(), rng),
        angle_cosine: 2.0 * rng.gen::<f64>() - 1.0,
    }
}

/// Sample the consequence of an absorption event
///
/// The expected fission yield `fission / absorption` is generally not an
/// integer, so the integer neutron count is drawn by stochastic rounding:
/// floor the expectation and promote by one with probability equal to the
/// fractional remainder. The sample mean then converges to the expectation.
///
/// ```rust
/// # use mcslab_physics::{sample_absorption, CrossSections};
/// # use rand::rngs::StdRng;
/// # use rand::SeedableRng;
/// let xs = CrossSections::new(0.12, 0.05, 0.15);
/// let mut rng = StdRng::seed_from_u64(1);
///
/// // expectation 1.25, so every draw yields either 1 or 2 neutrons
/// let absorption = sample_absorption(&xs, &mut rng);
/// assert!(absorption.neutron_yield == 1 || absorption.neutron_yield == 2);
/// ```
pub fn sample_absorption<R: Rng + ?Sized>(xs: &CrossSections, rng: &mut R) -> Absorption {
    let expected = xs.expected_yield();
    let base = expected.floor();
    let remainder = expected - base;

    let neutron_yield = if rng.gen::<f64>() < remainder {
        base as u64 + 1
    } else {
        base as u64
    };

    Absorption {
        neutron_yield,
        distance: sample_flight_distance(xs.total(), rng),
    }
}

/// Classify and sample the next collision in one step
///
/// Convenience for the transport loop: one call per collision, consuming
/// the classification draw followed by the outcome draws.
pub fn sample_outcome<R: Rng + ?Sized>(xs: &CrossSections, rng: &mut R) -> Outcome {
    match sample_interaction(xs, rng) {
        Interaction::Scatter => Outcome::Scatter(sample_scatter(xs, rng)),
        Interaction::Absorb => Outcome::Absorb(sample_absorption(xs, rng)),
    }
}
