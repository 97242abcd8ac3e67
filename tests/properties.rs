use garments::{substructures, HullShape, KindFilter, Point, Quad, SubstructureKind};
use proptest::prelude::*;

fn coordinate() -> impl Strategy<Value = f64> {
    (-1000i32..1000).prop_map(|v| v as f64 / 8.)
}

fn four_points() -> impl Strategy<Value = [Point; 4]> {
    prop::array::uniform4((coordinate(), coordinate()).prop_map(|(x, y)| Point::new(x, y)))
}

proptest! {
    #[test]
    fn region_counts_follow_the_hull(points in four_points()) {
        let quad = match Quad::classify(points) {
            Ok(quad) => quad,
            Err(_) => return Ok(()), // degenerate, rejected on purpose
        };
        let count = |k: SubstructureKind| substructures(&quad, KindFilter::only([k])).count();
        match quad.shape() {
            HullShape::Convex { .. } => {
                prop_assert_eq!(count(SubstructureKind::Cravat), 1);
                prop_assert_eq!(count(SubstructureKind::Necklace), 4);
                prop_assert_eq!(count(SubstructureKind::Bowtie), 2);
                prop_assert_eq!(count(SubstructureKind::Skirt) + count(SubstructureKind::Pant), 0);
            }
            HullShape::NonConvex { .. } => {
                prop_assert_eq!(count(SubstructureKind::Skirt), 1);
                prop_assert_eq!(count(SubstructureKind::Pant), 3);
                prop_assert_eq!(substructures(&quad, KindFilter::all()).count(), 4);
            }
        }
    }

    #[test]
    fn generation_is_idempotent(points in four_points()) {
        if let Ok(quad) = Quad::classify(points) {
            let a: Vec<_> = substructures(&quad, KindFilter::all()).collect();
            let b: Vec<_> = substructures(&quad, KindFilter::all()).collect();
            prop_assert_eq!(a, b);
        }
    }

    #[test]
    fn classification_ignores_point_order(points in four_points()) {
        let mut reversed = points;
        reversed.reverse();
        match (Quad::classify(points), Quad::classify(reversed)) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a.is_convex(), b.is_convex()),
            (Err(_), Err(_)) => {}
            _ => prop_assert!(false, "order changed the outcome for {:?}", points),
        }
    }

    #[test]
    fn quad_points_are_not_inside_their_regions(points in four_points()) {
        if let Ok(quad) = Quad::classify(points) {
            // the skirt is the only region that swallows the inner point
            for (kind, region) in substructures(&quad, KindFilter::all()) {
                if kind == SubstructureKind::Skirt {
                    continue;
                }
                for p in quad.points() {
                    prop_assert!(!region.contains(p), "{} contains its own point {:?}", kind, p);
                }
            }
        }
    }
}
