//! The exhaustive search for empty monochromatic substructures.

use serde::ser::{Serialize, Serializer};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::kind::{KindFilter, SubstructureKind};
use crate::points::Coloring;
use crate::quad::Quad;
use crate::region::{is_empty, Region};
use crate::subsets::{binomial, SubsetIter};
use crate::substructures::Substructures;
use crate::Point;

/// An empty monochromatic substructure.
///
/// Serializes to `{"color", "type", "points", "shape"}` with the shape as
/// WKT text.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Finding {
    pub color: String,
    #[serde(rename = "type")]
    pub kind: SubstructureKind,
    #[serde(serialize_with = "serialize_points")]
    pub points: [Point; 4],
    #[serde(rename = "shape", serialize_with = "serialize_region")]
    pub region: Region,
}

fn serialize_points<S: Serializer>(points: &[Point; 4], s: S) -> Result<S::Ok, S::Error> {
    points.map(|p| p.x_y()).serialize(s)
}

fn serialize_region<S: Serializer>(region: &Region, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&region.to_wkt())
}

/// The quads of one color, with the other colors snapshotted once.
struct ColorPass {
    color: String,
    same: Vec<Point>,
    others: Vec<Point>,
    subsets: SubsetIter,
    current: Option<([Point; 4], Substructures)>,
}

impl ColorPass {
    fn new<S: Coloring + ?Sized>(points: &S, color: &str) -> ColorPass {
        let same = points.points_of(color).into_owned();
        let others = points.others_of(color);
        info!(
            color,
            points = same.len(),
            others = others.len(),
            quads = binomial(same.len(), 4),
            "processing 4-tuples"
        );
        ColorPass {
            color: color.to_owned(),
            subsets: SubsetIter::new(same.len(), 4),
            same,
            others,
            current: None,
        }
    }

    fn next_finding(&mut self, filter: KindFilter, examined: &mut u64) -> Option<Result<Finding>> {
        loop {
            if let Some((quad, ref mut regions)) = self.current {
                for (kind, region) in regions.by_ref() {
                    if is_empty(&region, &self.others) {
                        debug!(color = %self.color, %kind, points = ?quad, "empty substructure");
                        return Some(Ok(Finding { color: self.color.clone(), kind, points: quad, region }));
                    }
                }
                self.current = None;
            }
            let idx = self.subsets.next()?;
            let points = [self.same[idx[0]], self.same[idx[1]], self.same[idx[2]], self.same[idx[3]]];
            *examined += 1;
            match Quad::classify(points) {
                Ok(quad) => self.current = Some((points, Substructures::new(&quad, filter))),
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

/// Lazy search over all 4-subsets of every color.
///
/// Colors are visited in the order of [`Coloring::colors`], subsets of a
/// color in lexicographic index order, and the substructures of a quad in
/// kind order. Nothing is computed ahead of the item being pulled, so
/// `search(..).next().is_some()` stops at the first empty substructure.
///
/// A degenerate quad yields one `Err(MalformedQuad)` and ends the search.
pub struct Search<'a, S: Coloring + ?Sized> {
    points: &'a S,
    filter: KindFilter,
    colors: Vec<&'a str>,
    next_color: usize,
    pass: Option<ColorPass>,
    examined: u64,
    done: bool,
}

impl<'a, S: Coloring + ?Sized> Search<'a, S> {
    pub fn new(points: &'a S, filter: KindFilter) -> Search<'a, S> {
        Search {
            colors: points.colors(),
            points,
            filter,
            next_color: 0,
            pass: None,
            examined: 0,
            done: false,
        }
    }

    /// Number of quads classified so far.
    pub fn quads_examined(&self) -> u64 {
        self.examined
    }
}

impl<S: Coloring + ?Sized> std::fmt::Debug for Search<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Search")
            .field("filter", &self.filter)
            .field("colors", &self.colors)
            .field("next_color", &self.next_color)
            .field("examined", &self.examined)
            .field("done", &self.done)
            .finish()
    }
}

impl<S: Coloring + ?Sized> Iterator for Search<'_, S> {
    type Item = Result<Finding>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let pass = match self.pass {
                Some(ref mut pass) => pass,
                None => {
                    match self.colors.get(self.next_color) {
                        Some(&color) => self.pass = Some(ColorPass::new(self.points, color)),
                        None => self.done = true,
                    }
                    self.next_color += 1;
                    continue;
                }
            };
            match pass.next_finding(self.filter, &mut self.examined) {
                Some(Ok(finding)) => return Some(Ok(finding)),
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(e));
                }
                None => self.pass = None,
            }
        }
        None
    }
}

impl<S: Coloring + ?Sized> std::iter::FusedIterator for Search<'_, S> {}

/// All empty substructures of `points` of the kinds in `filter`.
pub fn search<S: Coloring + ?Sized>(points: &S, filter: KindFilter) -> Search<'_, S> {
    Search::new(points, filter)
}

/// The first empty substructure, if any.
pub fn first_empty_substructure<S: Coloring + ?Sized>(points: &S, filter: KindFilter) -> Result<Option<Finding>> {
    search(points, filter).next().transpose()
}

pub fn has_empty_substructure<S: Coloring + ?Sized>(points: &S, filter: KindFilter) -> Result<bool> {
    Ok(first_empty_substructure(points, filter)?.is_some())
}

pub fn count_empty_substructures<S: Coloring + ?Sized>(points: &S, filter: KindFilter) -> Result<usize> {
    let mut n = 0;
    for finding in search(points, filter) {
        finding?;
        n += 1;
    }
    Ok(n)
}

/// Fails with [`Error::PreconditionViolation`] if `points` already has an
/// empty substructure.
pub(crate) fn ensure_empty_free<S: Coloring + ?Sized>(
    points: &S,
    filter: KindFilter,
    operation: &'static str,
) -> Result<()> {
    match first_empty_substructure(points, filter)? {
        None => Ok(()),
        Some(found) => {
            warn!(operation, color = %found.color, kind = %found.kind, "instance already has an empty substructure");
            Err(Error::PreconditionViolation {
                operation,
                found: format!("{} of color {}", found.kind, found.color).into(),
            })
        }
    }
}
