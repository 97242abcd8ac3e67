//! Re-verifies every stored counterexample below a directory.
//!
//! Exits with 0 if all files hold up, otherwise with the code of the
//! first failing file: 1 it contains an empty substructure, 2 a random
//! point can be added, 3 a stronger filter still finds nothing.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use garments::{check_dir, AugmentConfig, CheckConfig, CheckOutcome};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Directory searched recursively for `*.csv` point files
    dir: PathBuf,

    /// Random points to try adding to each instance
    #[arg(long, default_value_t = 10)]
    attempts: usize,

    /// Draw the added points on the integer grid
    #[arg(long)]
    grid: bool,

    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<ExitCode> {
    garments::logging::init();
    let args = Args::parse();
    anyhow::ensure!(args.dir.is_dir(), "{} is not a directory", args.dir.display());

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let config = CheckConfig { augment_attempts: args.attempts, augment: AugmentConfig { integer_grid: args.grid } };
    let reports = check_dir(&args.dir, &config, &mut rng)?;

    if let Some(last) = reports.last() {
        match last.outcome {
            CheckOutcome::Verified => {}
            CheckOutcome::ContainsEmpty(ref f) => {
                info!("File {} contains an empty {} of color {}.", last.path.display(), f.kind, f.color);
                return Ok(ExitCode::from(last.outcome.exit_code()));
            }
            CheckOutcome::Augmentable(ref aug) => {
                let (x, y) = aug.point.x_y();
                info!(
                    "Adding {} point ({}, {}) to file {} still yields no empty {} structure.",
                    aug.color,
                    x,
                    y,
                    last.path.display(),
                    last.filter
                );
                return Ok(ExitCode::from(last.outcome.exit_code()));
            }
            CheckOutcome::Strengthenable(ref s) => {
                info!(
                    "Strengthening the filter from {} to {} for file {} still yields no empty structure.",
                    last.filter,
                    s.filter,
                    last.path.display()
                );
                return Ok(ExitCode::from(last.outcome.exit_code()));
            }
        }
    }

    info!("Checked {} files:", reports.len());
    for r in &reports {
        info!("\t{} with {} points ({}) contains no empty {}", r.path.display(), r.points, r.stats, r.filter);
    }
    Ok(ExitCode::SUCCESS)
}
