//! Write operations for flux tally data

// standard library
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

// crate modules
use crate::error::Result;
use crate::flux::FluxTally;

// external crates
use log::debug;

/// Write the accumulated flux to a plain text file
///
/// Produces exactly one line per bin in bin order, each the raw accumulated
/// score for that spatial interval. This is the stable interchange format
/// consumed by external plotting of the spatial flux profile.
///
/// ```no_run
/// # use mcslab_tally::{write_flux, FluxTally};
/// let mut tally = FluxTally::new();
/// tally.record(0.05, 1.0, 1.0);
///
/// write_flux(&tally, "flux_output.txt").unwrap();
/// ```
pub fn write_flux<P: AsRef<Path>>(tally: &FluxTally, path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);

    for value in tally.bins() {
        writeln!(writer, "{value}")?;
    }
    writer.flush()?;

    debug!("Flux tally written to {}", path.as_ref().display());
    Ok(())
}
