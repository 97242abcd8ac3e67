//! Re-verification under the directly stronger filters of the lattice.

use tracing::info;

use crate::error::Result;
use crate::kind::{FilterLevel, KindFilter};
use crate::points::Coloring;
use crate::search::{ensure_empty_free, has_empty_substructure};

/// Result of searching under one stronger filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strengthening {
    pub level: FilterLevel,
    pub filter: KindFilter,
    /// The instance has no empty substructure under `filter` either.
    pub empty_free: bool,
}

/// The filters one lattice step above `filter`.
pub fn stronger_filters(filter: &KindFilter) -> Vec<(FilterLevel, KindFilter)> {
    FilterLevel::of(filter).successors().into_iter().map(|l| (l, l.filter())).collect()
}

/// Searches `points` under every direct successor of `filter` in the
/// filter lattice.
///
/// `points` must be free of empty substructures under `filter` itself,
/// otherwise this fails with `PreconditionViolation`. A filter admitting
/// every kind is the top of the lattice and has no successors.
pub fn strengthen<S: Coloring + ?Sized>(points: &S, filter: KindFilter) -> Result<Vec<Strengthening>> {
    ensure_empty_free(points, filter, "strengthen")?;
    try_strengthen(points, filter)
}

pub(crate) fn try_strengthen<S: Coloring + ?Sized>(points: &S, filter: KindFilter) -> Result<Vec<Strengthening>> {
    let mut results = Vec::with_capacity(2);
    for (level, stronger) in stronger_filters(&filter) {
        let empty_free = !has_empty_substructure(points, stronger)?;
        info!(from = %filter, to = %stronger, %level, empty_free, "strengthened filter");
        results.push(Strengthening { level, filter: stronger, empty_free });
    }
    Ok(results)
}
