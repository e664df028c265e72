// calib-dump: load a calibration file and show what the host would see
//
// The library's default load path is silent by contract, which makes a
// half-matching file hard to debug from inside a running game. This
// binary runs the same scan through the diagnostic path and reports how
// far it got.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use instability_bridge::{ScanReport, StateStore};

#[derive(Parser, Debug)]
#[command(
    name = "calib-dump",
    about = "Load a calibration file and dump the resulting state"
)]
struct Cli {
    /// Calibration file to load
    path: PathBuf,
    /// Emit the state as JSON instead of the readable listing
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    instability_bridge::init_logging();
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut store = StateStore::new();
    let report = match store.try_load(&cli.path) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("{err}");
            return Ok(ExitCode::from(2));
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(store.get())?);
    } else {
        print_state(&report, &store);
    }

    // Nonzero exit on partial scans so scripts can catch bad files
    Ok(if report.is_complete() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(3)
    })
}

fn print_state(report: &ScanReport, store: &StateStore) {
    let state = store.get();
    println!("fields applied: {}/4", report.fields_applied);
    println!("instability: {}", state.instability);
    println!("saturation:  {}", state.saturation);
    println!("resistance:  {}", state.resistance);
    println!("epoch:       {}", state.epoch);
}
