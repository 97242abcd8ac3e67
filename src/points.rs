//! Colored point sets and the trial overlays used while minimizing or
//! augmenting an instance.

use std::borrow::Cow;

use geo::{BoundingRect, MultiPoint};

use crate::Point;

/// Point records in file order, each with its (untrimmed) color label.
pub type RawColoredPointSet = Vec<(Point, String)>;

/// Points partitioned by color.
///
/// Colors keep the order in which they first appeared, and the points of a
/// color keep their insertion order, so every enumeration over the set is
/// reproducible for a fixed input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColoredPointSet {
    groups: Vec<(String, Vec<Point>)>,
}

impl ColoredPointSet {
    pub fn new() -> ColoredPointSet {
        ColoredPointSet::default()
    }

    /// Partitions raw records by their (whitespace-stripped) color.
    pub fn from_raw<I, S>(raw: I) -> ColoredPointSet
    where
        I: IntoIterator<Item = (Point, S)>,
        S: AsRef<str>,
    {
        let mut set = ColoredPointSet::new();
        for (p, c) in raw {
            set.push(c.as_ref(), p);
        }
        set
    }

    /// Adds `p` under the trimmed `color`.
    ///
    /// The label is not validated: a blank label becomes a color of its
    /// own, named `""`. Point files are checked for blank labels when they
    /// are read (see [`crate::io`]); other callers must check themselves.
    pub fn push(&mut self, color: &str, p: Point) {
        let color = color.trim();
        match self.groups.iter_mut().find(|(c, _)| c == color) {
            Some((_, points)) => points.push(p),
            None => self.groups.push((color.to_owned(), vec![p])),
        }
    }

    /// Removes the `index`-th point of `color`; the color itself stays in
    /// the set even if it becomes empty.
    pub fn remove(&mut self, color: &str, index: usize) -> Option<Point> {
        let (_, points) = self.groups.iter_mut().find(|(c, _)| c == color)?;
        if index < points.len() {
            Some(points.remove(index))
        } else {
            None
        }
    }

    pub fn colors(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(c, _)| c.as_str())
    }

    /// Points of `color`; empty for an unknown color.
    pub fn points(&self, color: &str) -> &[Point] {
        self.groups
            .iter()
            .find(|(c, _)| c == color)
            .map_or(&[][..], |(_, points)| &points[..])
    }

    pub fn groups(&self) -> impl Iterator<Item = (&str, &[Point])> {
        self.groups.iter().map(|(c, ps)| (c.as_str(), &ps[..]))
    }

    /// Every point together with its color, grouped by color.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &str)> {
        self.groups
            .iter()
            .flat_map(|(c, ps)| ps.iter().map(move |&p| (p, c.as_str())))
    }

    /// Total number of points over all colors.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|(_, ps)| ps.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Short summary like `12 red, 9 blue`.
    pub fn stats(&self) -> String {
        self.groups
            .iter()
            .map(|(c, ps)| format!("{} {}", ps.len(), c))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A read-only view of colored points, as consumed by the search driver.
pub trait Coloring {
    fn colors(&self) -> Vec<&str>;

    fn points_of(&self, color: &str) -> Cow<'_, [Point]>;

    /// All points whose color is not `color`.
    fn others_of(&self, color: &str) -> Vec<Point> {
        let mut others = Vec::new();
        for c in self.colors() {
            if c != color {
                others.extend_from_slice(&self.points_of(c));
            }
        }
        others
    }
}

impl Coloring for ColoredPointSet {
    fn colors(&self) -> Vec<&str> {
        ColoredPointSet::colors(self).collect()
    }

    fn points_of(&self, color: &str) -> Cow<'_, [Point]> {
        Cow::Borrowed(self.points(color))
    }
}

/// A single pending modification of a [`ColoredPointSet`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Change<'a> {
    Remove { color: &'a str, index: usize },
    Add { color: &'a str, point: Point },
}

/// A point set seen through one pending [`Change`].
///
/// Only the group touched by the change is copied when it is read; the
/// base set is never modified. Use [`Trial::apply`] to materialize the
/// result once it is confirmed.
#[derive(Debug, Clone, Copy)]
pub struct Trial<'a> {
    base: &'a ColoredPointSet,
    change: Change<'a>,
}

impl<'a> Trial<'a> {
    pub fn new(base: &'a ColoredPointSet, change: Change<'a>) -> Trial<'a> {
        Trial { base, change }
    }

    pub fn change(&self) -> Change<'a> {
        self.change
    }

    pub fn apply(&self) -> ColoredPointSet {
        let mut set = self.base.clone();
        match self.change {
            Change::Remove { color, index } => {
                set.remove(color, index);
            }
            Change::Add { color, point } => set.push(color, point),
        }
        set
    }
}

impl Coloring for Trial<'_> {
    fn colors(&self) -> Vec<&str> {
        let mut colors: Vec<&str> = self.base.colors().collect();
        if let Change::Add { color, .. } = self.change {
            if !colors.contains(&color) {
                colors.push(color);
            }
        }
        colors
    }

    fn points_of(&self, color: &str) -> Cow<'_, [Point]> {
        let points = self.base.points(color);
        match self.change {
            Change::Remove { color: c, index } if c == color && index < points.len() => {
                let mut v = Vec::with_capacity(points.len() - 1);
                v.extend_from_slice(&points[..index]);
                v.extend_from_slice(&points[index + 1..]);
                Cow::Owned(v)
            }
            Change::Add { color: c, point } if c == color => {
                let mut v = Vec::with_capacity(points.len() + 1);
                v.extend_from_slice(points);
                v.push(point);
                Cow::Owned(v)
            }
            _ => Cow::Borrowed(points),
        }
    }
}

/// Axis-aligned extent of a point collection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// `None` if there are no points.
pub fn bounding_box<'p, I>(points: I) -> Option<BoundingBox>
where
    I: IntoIterator<Item = &'p Point>,
{
    let mp: MultiPoint<f64> = points.into_iter().copied().collect();
    mp.bounding_rect().map(|r| BoundingBox {
        min_x: r.min().x,
        max_x: r.max().x,
        min_y: r.min().y,
        max_y: r.max().y,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ColoredPointSet {
        ColoredPointSet::from_raw(vec![
            (Point::new(0., 0.), " red"),
            (Point::new(1., 0.), "blue "),
            (Point::new(2., 3.), "red"),
            (Point::new(-1., 5.), "blue"),
        ])
    }

    #[test]
    fn partition_strips_and_keeps_order() {
        let set = sample();
        assert_eq!(set.colors().collect::<Vec<_>>(), vec!["red", "blue"]);
        assert_eq!(set.points("red"), &[Point::new(0., 0.), Point::new(2., 3.)]);
        assert_eq!(set.points("green"), &[] as &[Point]);
        assert_eq!(set.len(), 4);
        assert_eq!(set.stats(), "2 red, 2 blue");
    }

    #[test]
    fn blank_label_is_a_color_of_its_own() {
        let set = ColoredPointSet::from_raw(vec![(Point::new(0., 0.), "red"), (Point::new(1., 1.), "  ")]);
        assert_eq!(set.colors().collect::<Vec<_>>(), vec!["red", ""]);
        assert_eq!(set.points(""), &[Point::new(1., 1.)]);
        assert_eq!(set.others_of("red"), vec![Point::new(1., 1.)]);
    }

    #[test]
    fn trial_adding_a_new_color_joins_the_others() {
        let set = sample();
        let green = Point::new(7., 7.);
        let trial = Trial::new(&set, Change::Add { color: "green", point: green });
        assert_eq!(Coloring::colors(&trial), vec!["red", "blue", "green"]);
        assert_eq!(
            trial.others_of("red"),
            vec![Point::new(1., 0.), Point::new(-1., 5.), green]
        );
        assert_eq!(trial.others_of("green").len(), 4);
        assert!(set.points("green").is_empty());
    }

    #[test]
    fn trial_leaves_base_untouched() {
        let set = sample();
        let trial = Trial::new(&set, Change::Remove { color: "red", index: 0 });
        assert_eq!(&*trial.points_of("red"), &[Point::new(2., 3.)]);
        assert_eq!(trial.others_of("blue"), vec![Point::new(2., 3.)]);
        assert_eq!(set.points("red").len(), 2);

        let trial = Trial::new(&set, Change::Add { color: "blue", point: Point::new(9., 9.) });
        assert_eq!(trial.points_of("blue").len(), 3);
        assert!(matches!(trial.points_of("red"), Cow::Borrowed(_)));
        let applied = trial.apply();
        assert_eq!(applied.points("blue").last(), Some(&Point::new(9., 9.)));
        assert_eq!(set.points("blue").len(), 2);
    }

    #[test]
    fn bounding_box_works() {
        let set = sample();
        let points: Vec<Point> = set.iter().map(|(p, _)| p).collect();
        let bb = bounding_box(&points).unwrap();
        assert_eq!(bb, BoundingBox { min_x: -1., max_x: 2., min_y: 0., max_y: 5. });
        assert_eq!(bb.width(), 3.);
        assert!(bounding_box(&Vec::<Point>::new()).is_none());
    }
}
