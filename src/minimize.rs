//! Single-point removal minimization.

use tracing::{debug, info};

use crate::error::Result;
use crate::kind::KindFilter;
use crate::points::{Change, ColoredPointSet, Trial};
use crate::search::{ensure_empty_free, has_empty_substructure};
use crate::Point;

/// A point whose removal keeps the instance free of empty substructures.
#[derive(Debug, Clone, PartialEq)]
pub struct Removal {
    pub color: String,
    /// Position of the removed point among the points of its color.
    pub index: usize,
    pub point: Point,
    pub reduced: ColoredPointSet,
}

/// Finds the first point (colors in set order, points in their original
/// order) that can be dropped without creating an empty substructure.
///
/// `Ok(None)` means the instance is minimal with respect to removing a
/// single point. The instance must not have empty substructures to begin
/// with, otherwise this fails with `PreconditionViolation`. `points` is
/// never modified; each removal is evaluated on a [`Trial`].
pub fn minimize(points: &ColoredPointSet, filter: KindFilter) -> Result<Option<Removal>> {
    ensure_empty_free(points, filter, "minimize")?;

    for (color, group) in points.groups() {
        info!(color, points = group.len(), "minimizing");
        for (index, &point) in group.iter().enumerate() {
            let trial = Trial::new(points, Change::Remove { color, index });
            if has_empty_substructure(&trial, filter)? {
                debug!(color, index, "removal creates an empty substructure");
                continue;
            }
            info!(color, index, x = point.x(), y = point.y(), "point can be removed");
            return Ok(Some(Removal { color: color.to_owned(), index, point, reduced: trial.apply() }));
        }
    }
    info!("instance is minimal");
    Ok(None)
}
