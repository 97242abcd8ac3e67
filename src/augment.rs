//! Growing a counterexample by one random point.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::info;

use crate::error::{Error, Result};
use crate::kind::KindFilter;
use crate::points::{bounding_box, Change, ColoredPointSet, Trial};
use crate::search::{ensure_empty_free, has_empty_substructure};
use crate::Point;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AugmentConfig {
    /// Draw integer coordinates only, as hand-made instances use. A range
    /// without an integer in it is sampled as usual.
    pub integer_grid: bool,
}

/// Outcome of adding one random point.
#[derive(Debug, Clone, PartialEq)]
pub struct Augmentation {
    pub color: String,
    pub point: Point,
    /// The instance with the point added. Keeping it is up to the caller.
    pub enlarged: ColoredPointSet,
    /// Whether `enlarged` still has no empty substructure.
    pub empty_free: bool,
}

fn sample<R: Rng + ?Sized>(lo: f64, hi: f64, integer_grid: bool, rng: &mut R) -> f64 {
    if integer_grid {
        let (a, b) = (lo.ceil(), hi.floor());
        if a <= b {
            return rng.gen_range(a as i64..=b as i64) as f64;
        }
        // no integer in range, stay inside it
    }
    rng.gen_range(lo..=hi)
}

/// A uniformly random point in the bounding box of `points`, grown on each
/// side by the average spacing (extent divided by the number of points).
pub fn random_point<R: Rng + ?Sized>(
    points: &ColoredPointSet,
    config: &AugmentConfig,
    rng: &mut R,
) -> Result<Point> {
    let all: Vec<Point> = points.iter().map(|(p, _)| p).collect();
    let bb = bounding_box(&all).ok_or(Error::EmptyPointSet)?;
    let n = all.len() as f64;
    let (dx, dy) = (bb.width() / n, bb.height() / n);
    let x = sample(bb.min_x - dx, bb.max_x + dx, config.integer_grid, rng);
    let y = sample(bb.min_y - dy, bb.max_y + dy, config.integer_grid, rng);
    Ok(Point::new(x, y))
}

/// Adds a random point of a random existing color and searches again.
///
/// The instance must not have empty substructures to begin with.
/// `points` itself is left as is.
pub fn augment<R: Rng + ?Sized>(
    points: &ColoredPointSet,
    filter: KindFilter,
    config: &AugmentConfig,
    rng: &mut R,
) -> Result<Augmentation> {
    ensure_empty_free(points, filter, "augment")?;
    try_augment(points, filter, config, rng)
}

/// [`augment`] without re-checking the precondition.
pub(crate) fn try_augment<R: Rng + ?Sized>(
    points: &ColoredPointSet,
    filter: KindFilter,
    config: &AugmentConfig,
    rng: &mut R,
) -> Result<Augmentation> {
    let point = random_point(points, config, rng)?;
    let colors: Vec<&str> = points.colors().collect();
    let color = *colors.choose(rng).ok_or(Error::EmptyPointSet)?;

    let trial = Trial::new(points, Change::Add { color, point });
    let empty_free = !has_empty_substructure(&trial, filter)?;
    info!(color, x = point.x(), y = point.y(), empty_free, "added point");
    Ok(Augmentation { color: color.to_owned(), point, enlarged: trial.apply(), empty_free })
}
