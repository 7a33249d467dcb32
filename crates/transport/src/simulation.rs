//! The transport loop driver

// standard library
use std::path::Path;

// crate modules
use crate::config::Config;
use crate::error::{Error, Result};

// mcslab modules
use mcslab_physics::{sample_outcome, Outcome};
use mcslab_tally::{write_flux, FluxTally};

// external crates
use log::{debug, trace, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Distance beyond which a free flight leaves the slab entirely
const ESCAPE_DISTANCE: f64 = 1.0;

/// How a single neutron history ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Absorbed in the slab, possibly producing fission neutrons
    Absorbed,
    /// Left the slab before its next collision
    Escaped,
    /// Retired by the per-history collision guard
    CollisionLimit,
    /// Retired because no region covered its position
    Unassigned,
}

/// k-eff result for a single cycle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleResult {
    /// Cycle index, counted from zero
    pub cycle: usize,
    /// Histories transported this cycle, initial batch plus fission progeny
    pub histories: u64,
    /// Fission neutrons produced this cycle
    pub produced: u64,
    /// Cycle k-eff, `produced / histories`
    pub keff: f64,
}

/// Results of a complete transport run
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Per-cycle results in cycle order
    pub cycles: Vec<CycleResult>,
    /// Histories retired by the collision guard or an unassigned region
    pub anomalies: u64,
}

impl RunSummary {
    /// k-eff of the final cycle, the historical reported estimate
    pub fn final_keff(&self) -> f64 {
        self.cycles.last().map(|c| c.keff).unwrap_or_default()
    }

    /// k-eff averaged over all cycles
    pub fn average_keff(&self) -> f64 {
        let total: f64 = self.cycles.iter().map(|c| c.keff).sum();
        total / self.cycles.len() as f64
    }
}

/// Result of transporting one neutron history
#[derive(Debug, Clone, Copy)]
struct History {
    termination: Termination,
    /// Fission neutrons produced over the history
    produced: u64,
}

/// Monte Carlo transport of neutron histories through the slab
///
/// Owns all mutable state of a run: the configuration, the flux tally and
/// the single random number stream. Draws are consumed in strict call
/// order, so a seeded configuration gives byte-identical output.
///
/// ```rust
/// # use mcslab_transport::{Config, Simulation};
/// let mut config = Config::default();
/// config.cycles = 1;
/// config.histories_per_cycle = 1000;
/// config.seed = Some(1);
///
/// let mut simulation = Simulation::new(config).unwrap();
/// let summary = simulation.run();
///
/// assert_eq!(summary.cycles.len(), 1);
/// assert!(summary.final_keff() >= 0.0);
/// ```
#[derive(Debug)]
pub struct Simulation {
    config: Config,
    tally: FluxTally,
    rng: StdRng,
}

impl Simulation {
    /// Set up a run from a validated configuration
    ///
    /// Fails on a zero cycle or history count, which would make the k-eff
    /// ratio meaningless.
    pub fn new(config: Config) -> Result<Self> {
        if config.cycles == 0 {
            return Err(Error::InvalidConfig("cycles must be positive".into()));
        }
        if config.histories_per_cycle == 0 {
            return Err(Error::InvalidConfig(
                "histories_per_cycle must be positive".into(),
            ));
        }

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            config,
            tally: FluxTally::new(),
            rng,
        })
    }

    /// Transport every cycle and collect the per-cycle k-eff results
    pub fn run(&mut self) -> RunSummary {
        let mut cycles = Vec::with_capacity(self.config.cycles);
        let mut anomalies = 0;

        for cycle in 0..self.config.cycles {
            let result = self.run_cycle(cycle, &mut anomalies);
            debug!(
                "cycle {} : {} histories, {} produced, keff {}",
                result.cycle, result.histories, result.produced, result.keff
            );
            cycles.push(result);
        }

        if anomalies > 0 {
            warn!("{anomalies} histories retired abnormally");
        }

        RunSummary { cycles, anomalies }
    }

    /// Transport one cycle of histories, including fission progeny
    ///
    /// The population starts at the configured batch size and grows as
    /// absorptions produce fission neutrons, each of which is transported
    /// as a fresh history later in the same cycle. Multiplicity resets
    /// every cycle.
    fn run_cycle(&mut self, cycle: usize, anomalies: &mut u64) -> CycleResult {
        let mut population = self.config.histories_per_cycle as u64;
        let mut produced: u64 = 0;
        let mut history: u64 = 0;

        while history < population {
            let outcome = self.transport_history();
            produced += outcome.produced;
            population += outcome.produced;

            match outcome.termination {
                Termination::CollisionLimit | Termination::Unassigned => *anomalies += 1,
                Termination::Absorbed | Termination::Escaped => (),
            }
            history += 1;
        }

        CycleResult {
            cycle,
            histories: population,
            produced,
            keff: produced as f64 / population as f64,
        }
    }

    /// Random walk of a single neutron from birth to termination
    fn transport_history(&mut self) -> History {
        // birth position uniform across the slab
        let mut position = self.rng.gen::<f64>();

        for _ in 0..self.config.max_collisions {
            let xs = match self.config.slab.lookup(position) {
                Ok(xs) => xs,
                Err(error) => {
                    // fail this history alone, never the run
                    warn!("history retired: {error}");
                    return History {
                        termination: Termination::Unassigned,
                        produced: 0,
                    };
                }
            };

            match sample_outcome(&xs, &mut self.rng) {
                Outcome::Scatter(scatter) => {
                    if scatter.distance > ESCAPE_DISTANCE {
                        return History {
                            termination: Termination::Escaped,
                            produced: 0,
                        };
                    }

                    // direction is the sign of the sampled angle cosine
                    position += scatter.angle_cosine.signum() * scatter.distance;
                    if !(0.0..1.0).contains(&position) {
                        return History {
                            termination: Termination::Escaped,
                            produced: 0,
                        };
                    }

                    trace!("scatter to {position}");
                    self.tally.record(position, scatter.distance, 1.0);
                }
                Outcome::Absorb(absorption) => {
                    if absorption.distance > ESCAPE_DISTANCE {
                        return History {
                            termination: Termination::Escaped,
                            produced: 0,
                        };
                    }

                    // absorption is terminal, the flight only places the score
                    position = absorption.distance;
                    trace!("absorbed at {position} yielding {}", absorption.neutron_yield);
                    self.tally
                        .record(position, absorption.distance, absorption.neutron_yield as f64);

                    return History {
                        termination: Termination::Absorbed,
                        produced: absorption.neutron_yield,
                    };
                }
            }
        }

        History {
            termination: Termination::CollisionLimit,
            produced: 0,
        }
    }

    /// The accumulated flux tally
    pub fn tally(&self) -> &FluxTally {
        &self.tally
    }

    /// The run configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Write the accumulated flux to a text file, one bin per line
    pub fn write_flux<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        write_flux(&self.tally, path)?;
        Ok(())
    }
}
