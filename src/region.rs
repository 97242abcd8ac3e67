//! Candidate regions and the emptiness test.

use geo::{Area, Contains, LineString, MultiPolygon, Polygon};
use wkt::ToWkt;

use crate::Point;

/// A 2D area produced for one substructure of one quad.
///
/// Hulls and pants are simple polygons; unions and symmetric differences
/// of two triangles come back from the boolean operations as
/// multi-polygons.
#[derive(Debug, Clone, PartialEq)]
pub enum Region {
    Polygon(Polygon<f64>),
    MultiPolygon(MultiPolygon<f64>),
}

impl Region {
    /// Simple polygon through `vertices` in the given order.
    pub fn from_vertices(vertices: &[Point]) -> Region {
        Region::Polygon(Polygon::new(LineString::from(vertices.to_vec()), vec![]))
    }

    /// Whether `p` lies in the interior of the region.
    ///
    /// Points on the boundary are *not* contained; this is the convention
    /// of [`geo::Contains`] and it is what makes a substructure whose
    /// boundary passes through a foreign point still count as empty.
    pub fn contains(&self, p: &Point) -> bool {
        match self {
            Region::Polygon(poly) => poly.contains(p),
            Region::MultiPolygon(multi) => multi.contains(p),
        }
    }

    pub fn polygons(&self) -> &[Polygon<f64>] {
        match self {
            Region::Polygon(poly) => std::slice::from_ref(poly),
            Region::MultiPolygon(multi) => &multi.0,
        }
    }

    pub fn area(&self) -> f64 {
        match self {
            Region::Polygon(poly) => poly.unsigned_area(),
            Region::MultiPolygon(multi) => multi.unsigned_area(),
        }
    }

    pub fn to_wkt(&self) -> String {
        match self {
            Region::Polygon(poly) => poly.wkt_string(),
            Region::MultiPolygon(multi) => multi.wkt_string(),
        }
    }
}

/// True iff none of `others` lies in the interior of `region`.
pub fn is_empty(region: &Region, others: &[Point]) -> bool {
    !others.iter().any(|p| region.contains(p))
}
