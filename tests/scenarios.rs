use garments::{
    count_empty_substructures, has_empty_substructure, minimize, search, strengthen, ColoredPointSet, FilterLevel,
    KindFilter, Point, SubstructureKind,
};
use SubstructureKind::*;

fn colored(points: &[(f64, f64, &str)]) -> ColoredPointSet {
    ColoredPointSet::from_raw(points.iter().map(|&(x, y, c)| (Point::new(x, y), c)))
}

fn unit_square(color: &str) -> Vec<(f64, f64, &str)> {
    vec![(0., 0., color), (1., 0., color), (1., 1., color), (0., 1., color)]
}

fn kinds(points: &ColoredPointSet, filter: KindFilter) -> Vec<SubstructureKind> {
    search(points, filter).map(|f| f.unwrap().kind).collect()
}

#[test]
fn square_around_its_center() {
    let mut pts = unit_square("red");
    pts.push((0.5, 0.5, "blue"));
    let set = colored(&pts);

    // the center is inside the hull
    assert!(kinds(&set, KindFilter::only([Cravat])).is_empty());
    // but on both diagonals, so it is in neither part of a bowtie
    assert_eq!(kinds(&set, KindFilter::only([Bowtie])), vec![Bowtie, Bowtie]);
    // and a reflex corner of every necklace
    assert_eq!(kinds(&set, KindFilter::only([Necklace])).len(), 4);
}

#[test]
fn square_without_other_colors() {
    let set = colored(&unit_square("red"));
    let findings: Vec<_> = search(&set, KindFilter::all()).collect::<Result<_, _>>().unwrap();
    assert_eq!(findings.len(), 7);
    assert!(findings.iter().all(|f| f.color == "red" && f.points.len() == 4));
}

#[test]
fn triangle_with_inner_point_and_outside_point() {
    let set = colored(&[
        (0., 0., "red"),
        (6., 0., "red"),
        (0., 6., "red"),
        (1., 2., "red"),
        (7., 7., "blue"),
    ]);
    assert_eq!(kinds(&set, KindFilter::only([Pant])), vec![Pant, Pant, Pant]);
    assert_eq!(kinds(&set, KindFilter::only([Skirt])), vec![Skirt]);
    assert!(kinds(&set, KindFilter::only([Cravat, Necklace, Bowtie])).is_empty());
}

#[test]
fn minimize_single_color_pentagon() {
    let set = colored(&[
        (0., 0., "red"),
        (4., 0., "red"),
        (5., 3., "red"),
        (2., 5., "red"),
        (-1., 3., "red"),
    ]);
    // convex position: no skirts or pants anywhere
    let filter = KindFilter::only([Skirt, Pant]);
    assert!(!has_empty_substructure(&set, filter).unwrap());

    let removal = minimize(&set, filter).unwrap().expect("a point can be removed");
    assert_eq!(removal.color, "red");
    assert!(removal.index < 5);
    assert_eq!(removal.reduced.len(), 4);
    assert_eq!(count_empty_substructures(&removal.reduced, filter).unwrap(), 0);
}

#[test]
fn early_stop_on_a_large_instance() {
    // 30 points on a parabola are in convex position; the first quad already is empty
    let pts: Vec<(f64, f64, &str)> = (0..30).map(|i| (i as f64, (i * i) as f64, "red")).collect();
    let set = colored(&pts);
    let mut it = search(&set, KindFilter::all());
    assert!(it.next().unwrap().is_ok());
    assert_eq!(it.quads_examined(), 1);
}

#[test]
fn strengthening_an_empty_free_square() {
    let mut pts = unit_square("red");
    pts.push((0.5, 0.5, "blue"));
    let set = colored(&pts);
    let results = strengthen(&set, KindFilter::only([Cravat])).unwrap();
    let levels: Vec<FilterLevel> = results.iter().map(|s| s.level).collect();
    assert_eq!(levels, vec![FilterLevel::new(2, 0), FilterLevel::new(1, 1)]);
    // necklaces around the center are empty, skirts don't exist for one convex quad
    assert!(!results[0].empty_free);
    assert!(results[1].empty_free);
}
