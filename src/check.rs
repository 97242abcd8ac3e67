//! Batch self-check of stored counterexamples.
//!
//! A counterexample file is named after the kinds it avoids, e.g.
//! `cravat_skirt_n23.csv`. Each file is verified to be free of empty
//! substructures, then it is checked that it can neither be grown by a
//! random point nor survive a stronger filter; either would mean a better
//! counterexample exists.

use std::path::{Path, PathBuf};

use rand::Rng;
use tracing::{info, warn};
use walkdir::WalkDir;

use crate::augment::{try_augment, AugmentConfig, Augmentation};
use crate::error::Result;
use crate::io::read_points;
use crate::kind::{KindFilter, SubstructureKind};
use crate::points::ColoredPointSet;
use crate::search::{first_empty_substructure, Finding};
use crate::strengthen::{try_strengthen, Strengthening};

/// File name tokens that carry no kind.
const IGNORED_TOKENS: [&str; 3] = ["c2", "no", "mc"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckConfig {
    /// Random points to try adding, each to the original instance.
    pub augment_attempts: usize,
    pub augment: AugmentConfig,
}

impl Default for CheckConfig {
    fn default() -> Self {
        CheckConfig { augment_attempts: 10, augment: AugmentConfig::default() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CheckOutcome {
    /// The stored instance is not a counterexample at all.
    ContainsEmpty(Finding),
    /// A random point could be added without creating an empty substructure.
    Augmentable(Augmentation),
    /// The instance is also free of empty substructures under a stronger filter.
    Strengthenable(Strengthening),
    Verified,
}

impl CheckOutcome {
    pub fn is_verified(&self) -> bool {
        matches!(self, CheckOutcome::Verified)
    }

    /// Process exit code of the check binary.
    pub fn exit_code(&self) -> u8 {
        match self {
            CheckOutcome::Verified => 0,
            CheckOutcome::ContainsEmpty(_) => 1,
            CheckOutcome::Augmentable(_) => 2,
            CheckOutcome::Strengthenable(_) => 3,
        }
    }
}

/// Kinds named by the `_`-separated tokens of a file stem, ignoring the
/// point count token `n<point_count>` and the markers `c2`, `no`, `mc`.
pub fn filter_from_stem(stem: &str, point_count: usize) -> Result<KindFilter> {
    let count_token = format!("n{}", point_count);
    let kinds = stem
        .split('_')
        .filter(|t| !t.is_empty() && *t != count_token && !IGNORED_TOKENS.contains(t))
        .map(str::parse::<SubstructureKind>)
        .collect::<Result<Vec<_>>>()?;
    Ok(KindFilter::only(kinds))
}

pub fn check_instance<R: Rng + ?Sized>(
    points: &ColoredPointSet,
    filter: KindFilter,
    config: &CheckConfig,
    rng: &mut R,
) -> Result<CheckOutcome> {
    if let Some(finding) = first_empty_substructure(points, filter)? {
        warn!(color = %finding.color, kind = %finding.kind, "instance contains an empty substructure");
        return Ok(CheckOutcome::ContainsEmpty(finding));
    }
    for attempt in 0..config.augment_attempts {
        let aug = try_augment(points, filter, &config.augment, rng)?;
        if aug.empty_free {
            warn!(attempt, color = %aug.color, "adding a point still yields no empty substructure");
            return Ok(CheckOutcome::Augmentable(aug));
        }
    }
    for s in try_strengthen(points, filter)? {
        if s.empty_free {
            warn!(to = %s.filter, "strengthened filter still yields no empty substructure");
            return Ok(CheckOutcome::Strengthenable(s));
        }
    }
    Ok(CheckOutcome::Verified)
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileReport {
    pub path: PathBuf,
    pub points: usize,
    pub stats: String,
    pub filter: KindFilter,
    pub outcome: CheckOutcome,
}

pub fn check_file<R: Rng + ?Sized>(path: &Path, config: &CheckConfig, rng: &mut R) -> Result<FileReport> {
    let points = read_points(path)?;
    let stem = path.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
    let filter = filter_from_stem(&stem, points.len())?;
    let stats = points.stats();
    info!(path = %path.display(), points = points.len(), %stats, %filter, "checking");
    let outcome = check_instance(&points, filter, config, rng)?;
    Ok(FileReport { path: path.to_owned(), points: points.len(), stats, filter, outcome })
}

/// All `*.csv` files below `dir`, sorted.
pub fn csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(std::io::Error::from)?;
        if entry.file_type().is_file() && entry.path().extension().map_or(false, |e| e == "csv") {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Checks every file below `dir`, stopping after the first file that is
/// not verified. That file's report is the last one returned.
pub fn check_dir<R: Rng + ?Sized>(dir: &Path, config: &CheckConfig, rng: &mut R) -> Result<Vec<FileReport>> {
    let mut reports = Vec::new();
    for path in csv_files(dir)? {
        let report = check_file(&path, config, rng)?;
        let verified = report.outcome.is_verified();
        reports.push(report);
        if !verified {
            break;
        }
    }
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use SubstructureKind::*;

    #[test]
    fn stem_tokens_become_the_filter() {
        assert_eq!(filter_from_stem("cravat_skirt_n23", 23).unwrap(), KindFilter::only([Cravat, Skirt]));
        assert_eq!(filter_from_stem("no_mc_c2_bowtie", 9).unwrap(), KindFilter::only([Bowtie]));
        assert!(filter_from_stem("n12", 12).unwrap().is_all());
        assert!(filter_from_stem("cravat_n12", 13).is_err());
    }

    #[test]
    fn instance_with_empty_substructure_is_reported() {
        let set = ColoredPointSet::from_raw(
            [(0., 0.), (2., 0.), (2., 2.), (0., 2.)].map(|(x, y)| (Point::new(x, y), "red")),
        );
        let mut rng = StdRng::seed_from_u64(3);
        let outcome = check_instance(&set, KindFilter::all(), &CheckConfig::default(), &mut rng).unwrap();
        assert_eq!(outcome.exit_code(), 1);
    }

    #[test]
    fn growable_instance_is_reported() {
        // one more point leaves every color with fewer than four points
        let set = ColoredPointSet::from_raw(vec![
            (Point::new(0., 0.), "red"),
            (Point::new(5., 0.), "red"),
            (Point::new(0., 5.), "blue"),
            (Point::new(5., 5.), "blue"),
        ]);
        let config = CheckConfig { augment_attempts: 1, ..CheckConfig::default() };
        let mut rng = StdRng::seed_from_u64(3);
        match check_instance(&set, KindFilter::all(), &config, &mut rng).unwrap() {
            CheckOutcome::Augmentable(aug) => assert_eq!(aug.enlarged.len(), 5),
            other => panic!("unexpected outcome {:?}", other),
        }
    }
}
