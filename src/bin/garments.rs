//! Lists the empty monochromatic substructures of a point file as JSON
//! lines on stdout, then optionally minimizes or grows the instance.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use garments::{augment, minimize, read_points, search, write_points, AugmentConfig, KindFilter, SubstructureKind};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Point file with one `x,y,color` row per point
    file: PathBuf,

    /// Only look for these substructures (repeatable)
    #[arg(short, long = "only", value_name = "KIND")]
    only: Vec<SubstructureKind>,

    /// If the instance has no empty substructure, write it with one
    /// removable point removed to this file
    #[arg(short, long, value_name = "OUT", conflicts_with = "add")]
    minimal: Option<PathBuf>,

    /// If the instance has no empty substructure, add a random point and
    /// check again
    #[arg(short, long)]
    add: bool,

    /// Write the enlarged instance here if it still has no empty substructure
    #[arg(long, value_name = "OUT", requires = "add")]
    keep: Option<PathBuf>,

    /// Draw the added point on the integer grid
    #[arg(long, requires = "add")]
    grid: bool,

    /// Seed for the random point
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    garments::logging::init();
    let args = Args::parse();

    let points = read_points(&args.file).with_context(|| format!("reading {}", args.file.display()))?;
    let filter = KindFilter::only(args.only.iter().copied());
    info!("Set contains {} points ({}), looking for {}.", points.len(), points.stats(), filter);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut found = 0;
    for finding in search(&points, filter) {
        let finding = finding?;
        found += 1;
        serde_json::to_writer(&mut out, &finding)?;
        writeln!(out)?;
    }
    out.flush()?;
    info!("Found {} empty monochromatic substructures.", found);

    if let Some(path) = args.minimal {
        if found > 0 {
            warn!("Cannot check minimality as the points already contain {} empty substructures", found);
            return Ok(());
        }
        match minimize(&points, filter)? {
            Some(removal) => {
                info!(
                    "Removing {} point {} ({}, {}) also yields no empty substructures",
                    removal.color,
                    removal.index,
                    removal.point.x(),
                    removal.point.y()
                );
                write_points(&removal.reduced, &path).with_context(|| format!("writing {}", path.display()))?;
            }
            None => info!("Instance is minimal!"),
        }
    } else if args.add {
        if found > 0 {
            warn!("Cannot add anything as the points already contain {} empty substructures", found);
            return Ok(());
        }
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let config = AugmentConfig { integer_grid: args.grid };
        let aug = augment(&points, filter, &config, &mut rng)?;
        let (x, y) = aug.point.x_y();
        if aug.empty_free {
            info!("Found larger counterexample! Adding {} point ({}, {}) yields no empty substructure", aug.color, x, y);
            if let Some(path) = args.keep {
                write_points(&aug.enlarged, &path).with_context(|| format!("writing {}", path.display()))?;
            }
        } else {
            info!("Adding {} point ({}, {}) already yields an empty substructure", aug.color, x, y);
        }
    }
    Ok(())
}
