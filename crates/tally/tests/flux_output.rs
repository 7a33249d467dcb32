//! Integration tests for the flux output format

use mcslab_tally::{write_flux, FluxTally, NUM_BINS};

use std::fs;
use std::path::PathBuf;

fn scratch_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(name)
}

#[test]
fn output_has_one_line_per_bin() {
    let mut tally = FluxTally::new();
    tally.record(0.05, 1.0, 1.0);
    tally.record(0.95, 0.5, 2.0);

    let path = scratch_file("mcslab_tally_lines.txt");
    write_flux(&tally, &path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), NUM_BINS);

    // every line parses back to the accumulated value
    for (line, bin) in lines.iter().zip(tally.bins()) {
        assert_eq!(line.parse::<f64>().unwrap(), *bin);
    }

    fs::remove_file(&path).unwrap();
}

#[test]
fn empty_tally_writes_ten_zero_lines() {
    let path = scratch_file("mcslab_tally_empty.txt");
    write_flux(&FluxTally::new(), &path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), NUM_BINS);
    assert!(content.lines().all(|line| line == "0"));

    fs::remove_file(&path).unwrap();
}

#[test]
fn unwritable_destination_is_an_error() {
    let tally = FluxTally::new();
    assert!(write_flux(&tally, "/nonexistent/path/flux.txt").is_err());
}
