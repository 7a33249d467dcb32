//! Module for the track-length flux estimator

/// Number of equal-width spatial bins across the slab
pub const NUM_BINS: usize = 10;

/// Track-length flux estimator over the slab `[0, 1)`
///
/// Each collision inside the slab scores
/// `weight * track_length / bin_width` into the bin covering the collision
/// position, where the weight is the statistical multiplicity carried by
/// the event (1 for a scattered neutron, the fission yield for an
/// absorption).
///
/// Bins are half-open `[lower, upper)` intervals of width 0.1, consistent
/// with the region convention, so a position exactly on a bin boundary
/// scores into the bin above it. Positions outside the slab score nothing.
///
/// Scores are never normalised or reset within a run.
///
/// ```rust
/// # use mcslab_tally::FluxTally;
/// let mut tally = FluxTally::new();
/// tally.record(0.05, 1.0, 1.0);
///
/// assert_eq!(tally.bins()[0], 10.0);
/// assert_eq!(tally.bins()[1..], [0.0; 9]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FluxTally {
    bins: [f64; NUM_BINS],
    bin_width: f64,
}

impl Default for FluxTally {
    fn default() -> Self {
        Self::new()
    }
}

impl FluxTally {
    /// An empty tally with all bins at zero
    pub fn new() -> Self {
        Self {
            bins: [0.0; NUM_BINS],
            bin_width: 1.0 / NUM_BINS as f64,
        }
    }

    /// Index of the bin covering `position`, `None` outside `[0, 1)`
    pub fn bin_index(&self, position: f64) -> Option<usize> {
        if (0.0..1.0).contains(&position) {
            // clamp guards float rounding just below an upper boundary
            Some(((position / self.bin_width) as usize).min(NUM_BINS - 1))
        } else {
            None
        }
    }

    /// Score a track-length segment into the bin covering `position`
    ///
    /// Adds `weight * track_length / bin_width` to the covering bin. A
    /// position outside the slab is silently ignored, as the transport loop
    /// has already retired any history that leaves the slab.
    pub fn record(&mut self, position: f64, track_length: f64, weight: f64) {
        if let Some(index) = self.bin_index(position) {
            self.bins[index] += weight * track_length / self.bin_width;
        }
    }

    /// Accumulated scores in bin order
    pub fn bins(&self) -> &[f64; NUM_BINS] {
        &self.bins
    }

    /// Sum over all bins
    pub fn total(&self) -> f64 {
        self.bins.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn single_record_scores_exactly_one_bin() {
        let mut tally = FluxTally::new();
        tally.record(0.05, 1.0, 1.0);

        assert_eq!(tally.bins()[0], 10.0);
        for bin in &tally.bins()[1..] {
            assert_eq!(*bin, 0.0);
        }
    }

    #[test]
    fn weight_scales_the_score() {
        let mut tally = FluxTally::new();
        tally.record(0.45, 0.2, 3.0);

        assert_eq!(tally.bins()[4], 3.0 * 0.2 / 0.1);
    }

    #[rstest]
    #[case(0.0, Some(0))] // case 1
    #[case(0.05, Some(0))] // case 2
    #[case(0.1, Some(1))] // case 3
    #[case(0.55, Some(5))] // case 4
    #[case(0.95, Some(9))] // case 5
    #[case(0.999999, Some(9))] // case 6
    #[case(1.0, None)] // case 7
    #[case(-0.2, None)] // case 8
    fn bin_indices_follow_half_open_convention(
        #[case] position: f64,
        #[case] expected: Option<usize>,
    ) {
        assert_eq!(FluxTally::new().bin_index(position), expected);
    }

    #[test]
    fn out_of_slab_positions_score_nothing() {
        let mut tally = FluxTally::new();
        tally.record(1.2, 1.0, 1.0);
        tally.record(-0.3, 1.0, 1.0);

        assert_eq!(tally.total(), 0.0);
    }

    #[test]
    fn scores_accumulate() {
        let mut tally = FluxTally::new();
        tally.record(0.25, 0.1, 1.0);
        tally.record(0.26, 0.1, 1.0);

        assert_eq!(tally.bins()[2], 2.0);
    }
}
