//! Classification of four same-colored points by the shape of their hull.

use geo::kernels::{Kernel, Orientation, RobustKernel};
use geo::{ConvexHull, MultiPoint};

use crate::error::{Error, Result};
use crate::Point;

/// Shape of the convex hull of a [`Quad`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HullShape {
    /// All four points are hull vertices, in hull order.
    Convex { hull: [Point; 4] },
    /// Three hull vertices, in hull order, and the point strictly inside.
    NonConvex { hull: [Point; 3], interior: Point },
}

/// Four same-colored points together with their hull classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    points: [Point; 4],
    shape: HullShape,
}

fn orient(a: Point, b: Point, c: Point) -> Orientation {
    <RobustKernel as Kernel<f64>>::orient2d(a.0, b.0, c.0)
}

impl Quad {
    /// Classifies `points` as a convex quadrilateral or a triangle with one
    /// point strictly inside.
    ///
    /// Collinear or coincident configurations are rejected with
    /// [`Error::MalformedQuad`]; so is an "interior" point lying on the
    /// boundary of the triangle.
    pub fn classify(points: [Point; 4]) -> Result<Quad> {
        let malformed = |reason: &'static str| Error::MalformedQuad { points, reason: reason.into() };

        let hull = MultiPoint::from(points.to_vec()).convex_hull();
        let mut ring: Vec<Point> = hull.exterior().points().collect();
        // the exterior ring is closed, the last vertex repeats the first
        if ring.len() > 1 && ring.first() == ring.last() {
            ring.pop();
        }

        let shape = match ring.len() {
            4 => {
                if points.iter().any(|p| !ring.contains(p)) {
                    return Err(malformed("hull does not visit every point"));
                }
                let turn = orient(ring[0], ring[1], ring[2]);
                if turn == Orientation::Collinear
                    || (1..4).any(|i| orient(ring[i], ring[(i + 1) % 4], ring[(i + 2) % 4]) != turn)
                {
                    return Err(malformed("three hull vertices are collinear"));
                }
                HullShape::Convex { hull: [ring[0], ring[1], ring[2], ring[3]] }
            }
            3 => {
                let turn = orient(ring[0], ring[1], ring[2]);
                if turn == Orientation::Collinear {
                    return Err(malformed("hull triangle is degenerate"));
                }
                let mut inside = points.iter().filter(|p| !ring.contains(*p));
                let interior = match (inside.next(), inside.next()) {
                    (Some(&p), None) => p,
                    _ => return Err(malformed("no unique point inside the hull")),
                };
                if (0..3).any(|i| orient(ring[i], ring[(i + 1) % 3], interior) != turn) {
                    return Err(malformed("fourth point lies on the hull boundary"));
                }
                HullShape::NonConvex { hull: [ring[0], ring[1], ring[2]], interior }
            }
            _ => return Err(malformed("hull is neither a triangle nor a quadrilateral")),
        };
        Ok(Quad { points, shape })
    }

    /// The points in the order they were given.
    pub fn points(&self) -> &[Point; 4] {
        &self.points
    }

    pub fn shape(&self) -> &HullShape {
        &self.shape
    }

    pub fn is_convex(&self) -> bool {
        matches!(self.shape, HullShape::Convex { .. })
    }
}
