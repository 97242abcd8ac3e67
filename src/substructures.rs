//! Generation of the candidate regions of a classified quad.
//!
//! For a convex quad with hull vertices `v0..v3`, `T(i)` is the triangle
//! on `v(i), v(i+1), v(i+2)` (indices mod 4):
//!
//! * cravat: the hull;
//! * necklace: `T(i) ∪ T(i+1)` for `i` in `0..4`;
//! * bowtie: `T(i) △ T(i+1)` for `i` in `0..2`, the two ways of crossing
//!   the diagonals.
//!
//! For a triangle `h0, h1, h2` with interior point `p`:
//!
//! * skirt: the triangle;
//! * pant: `h(i), p, h(i+1), h(i+2)` for `i` in `0..3`, i.e. `p` pushed
//!   into one of the three edges.

use geo::{BooleanOps, LineString, Polygon};

use crate::kind::{KindFilter, SubstructureKind};
use crate::quad::{HullShape, Quad};
use crate::region::Region;
use crate::Point;

fn triangle(hull: &[Point; 4], i: usize) -> Polygon<f64> {
    let vertices = vec![hull[i % 4], hull[(i + 1) % 4], hull[(i + 2) % 4]];
    Polygon::new(LineString::from(vertices), vec![])
}

fn build(shape: &HullShape, kind: SubstructureKind, i: usize) -> Region {
    use SubstructureKind::*;
    match *shape {
        HullShape::Convex { ref hull } => match kind {
            Cravat => Region::from_vertices(hull),
            Necklace => Region::MultiPolygon(triangle(hull, i).union(&triangle(hull, i + 1))),
            Bowtie => Region::MultiPolygon(triangle(hull, i).xor(&triangle(hull, i + 1))),
            Skirt | Pant => unreachable!("{} of a convex quad", kind),
        },
        HullShape::NonConvex { ref hull, interior } => match kind {
            Skirt => Region::from_vertices(hull),
            // the vertex order makes the shape, do not sort
            Pant => Region::from_vertices(&[hull[i], interior, hull[(i + 1) % 3], hull[(i + 2) % 3]]),
            Cravat | Necklace | Bowtie => unreachable!("{} of a non-convex quad", kind),
        },
    }
}

/// Lazily produced `(kind, region)` pairs of one quad.
///
/// Regions are built one at a time on `next`, and kinds excluded by the
/// filter are never built. A fresh iterator over the same quad yields the
/// same regions in the same order.
#[derive(Debug, Clone)]
pub struct Substructures {
    shape: HullShape,
    filter: KindFilter,
    family: &'static [SubstructureKind],
    kind: usize,
    index: usize,
}

impl Substructures {
    pub fn new(quad: &Quad, filter: KindFilter) -> Substructures {
        let family: &'static [SubstructureKind] = if quad.is_convex() {
            &SubstructureKind::CONVEX
        } else {
            &SubstructureKind::NONCONVEX
        };
        Substructures { shape: *quad.shape(), filter, family, kind: 0, index: 0 }
    }
}

impl Iterator for Substructures {
    type Item = (SubstructureKind, Region);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&kind) = self.family.get(self.kind) {
            if !self.filter.contains(kind) || self.index >= kind.region_count() {
                self.kind += 1;
                self.index = 0;
                continue;
            }
            let i = self.index;
            self.index += 1;
            return Some((kind, build(&self.shape, kind, i)));
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining: usize = self
            .family
            .iter()
            .enumerate()
            .skip(self.kind)
            .filter(|(_, k)| self.filter.contains(**k))
            .map(|(j, k)| if j == self.kind { k.region_count().saturating_sub(self.index) } else { k.region_count() })
            .sum();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Substructures {}

/// All substructures of `quad` admitted by `filter`.
pub fn substructures(quad: &Quad, filter: KindFilter) -> Substructures {
    Substructures::new(quad, filter)
}
