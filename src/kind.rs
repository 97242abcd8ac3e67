//! Substructure kinds, kind filters and the filter lattice.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The named substructures built from four same-colored points.
///
/// `Cravat`, `Necklace` and `Bowtie` arise from convex quads, `Skirt` and
/// `Pant` from a triangle with one point inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubstructureKind {
    Cravat,
    Necklace,
    Bowtie,
    Skirt,
    Pant,
}

impl SubstructureKind {
    pub const ALL: [SubstructureKind; 5] = [
        SubstructureKind::Cravat,
        SubstructureKind::Necklace,
        SubstructureKind::Bowtie,
        SubstructureKind::Skirt,
        SubstructureKind::Pant,
    ];
    pub const CONVEX: [SubstructureKind; 3] =
        [SubstructureKind::Cravat, SubstructureKind::Necklace, SubstructureKind::Bowtie];
    pub const NONCONVEX: [SubstructureKind; 2] = [SubstructureKind::Skirt, SubstructureKind::Pant];

    pub fn name(self) -> &'static str {
        match self {
            SubstructureKind::Cravat => "cravat",
            SubstructureKind::Necklace => "necklace",
            SubstructureKind::Bowtie => "bowtie",
            SubstructureKind::Skirt => "skirt",
            SubstructureKind::Pant => "pant",
        }
    }

    pub fn is_convex(self) -> bool {
        match self {
            SubstructureKind::Cravat | SubstructureKind::Necklace | SubstructureKind::Bowtie => true,
            SubstructureKind::Skirt | SubstructureKind::Pant => false,
        }
    }

    /// How many regions one quad produces for this kind.
    pub fn region_count(self) -> usize {
        match self {
            SubstructureKind::Cravat | SubstructureKind::Skirt => 1,
            SubstructureKind::Necklace => 4,
            SubstructureKind::Bowtie => 2,
            SubstructureKind::Pant => 3,
        }
    }

    /// Position within its family's lattice chain, starting at 1.
    fn level(self) -> u8 {
        match self {
            SubstructureKind::Cravat | SubstructureKind::Skirt => 1,
            SubstructureKind::Necklace | SubstructureKind::Pant => 2,
            SubstructureKind::Bowtie => 3,
        }
    }

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl fmt::Display for SubstructureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SubstructureKind {
    type Err = Error;

    /// Case-insensitive, like the `--only` option of the command line tools.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        SubstructureKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownKind(s.to_owned()))
    }
}

/// The set of kinds a search considers. Never empty: a filter built from
/// no kinds at all admits every kind.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct KindFilter {
    bits: u8,
}

impl KindFilter {
    const ALL_BITS: u8 = 0b1_1111;

    pub fn all() -> KindFilter {
        KindFilter { bits: KindFilter::ALL_BITS }
    }

    pub fn only<I: IntoIterator<Item = SubstructureKind>>(kinds: I) -> KindFilter {
        let bits = kinds.into_iter().fold(0, |b, k| b | k.bit());
        if bits == 0 {
            KindFilter::all()
        } else {
            KindFilter { bits }
        }
    }

    pub fn contains(&self, kind: SubstructureKind) -> bool {
        self.bits & kind.bit() != 0
    }

    pub fn is_all(&self) -> bool {
        self.bits == KindFilter::ALL_BITS
    }

    pub fn kinds(&self) -> impl Iterator<Item = SubstructureKind> + '_ {
        SubstructureKind::ALL.into_iter().filter(move |&k| self.contains(k))
    }

    /// Whether any convex (resp. non-convex) kind is admitted.
    pub fn wants_convex(&self) -> bool {
        SubstructureKind::CONVEX.iter().any(|&k| self.contains(k))
    }
    pub fn wants_nonconvex(&self) -> bool {
        SubstructureKind::NONCONVEX.iter().any(|&k| self.contains(k))
    }
}

impl Default for KindFilter {
    fn default() -> Self {
        KindFilter::all()
    }
}

impl FromIterator<SubstructureKind> for KindFilter {
    fn from_iter<I: IntoIterator<Item = SubstructureKind>>(iter: I) -> Self {
        KindFilter::only(iter)
    }
}

impl fmt::Debug for KindFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.kinds()).finish()
    }
}

impl fmt::Display for KindFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_all() {
            return f.write_str("all");
        }
        let names: Vec<&str> = self.kinds().map(SubstructureKind::name).collect();
        f.write_str(&names.join("+"))
    }
}

/// A point of the filter lattice
/// `{none < cravat < necklace < bowtie} × {none < skirt < pant}`.
///
/// Levels are cumulative: convex level 2 stands for cravats and necklaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FilterLevel {
    pub convex: u8,
    pub nonconvex: u8,
}

impl FilterLevel {
    pub const MAX_CONVEX: u8 = 3;
    pub const MAX_NONCONVEX: u8 = 2;
    pub const TOP: FilterLevel =
        FilterLevel { convex: FilterLevel::MAX_CONVEX, nonconvex: FilterLevel::MAX_NONCONVEX };

    /// Coordinates above the family maximum are clamped to it.
    pub fn new(convex: u8, nonconvex: u8) -> FilterLevel {
        FilterLevel {
            convex: convex.min(FilterLevel::MAX_CONVEX),
            nonconvex: nonconvex.min(FilterLevel::MAX_NONCONVEX),
        }
    }

    /// Per family, the lowest kind `filter` admits, raised along the chain
    /// as long as the next kind is admitted too.
    ///
    /// `cravat+bowtie` sits at convex level 1, `cravat+necklace` at 2 and
    /// a lone `bowtie` at 3. Cumulative filters map back to their own
    /// level, so the all-kinds filter is [`FilterLevel::TOP`].
    pub fn of(filter: &KindFilter) -> FilterLevel {
        let level = |family: &[SubstructureKind]| {
            let mut admitted = family.iter().skip_while(|&&k| !filter.contains(k));
            match admitted.next() {
                Some(lowest) => lowest.level() + admitted.take_while(|&&k| filter.contains(k)).count() as u8,
                None => 0,
            }
        };
        FilterLevel {
            convex: level(&SubstructureKind::CONVEX),
            nonconvex: level(&SubstructureKind::NONCONVEX),
        }
    }

    /// The cumulative filter of this level. The bottom `(0, 0)` has no
    /// kinds and therefore maps to [`KindFilter::all`].
    pub fn filter(&self) -> KindFilter {
        SubstructureKind::ALL
            .into_iter()
            .filter(|&k| {
                let bound = if k.is_convex() { self.convex } else { self.nonconvex };
                k.level() <= bound
            })
            .collect()
    }

    /// Whether `self` is below or equal to `other` in the lattice.
    pub fn is_below(&self, other: &FilterLevel) -> bool {
        self.convex <= other.convex && self.nonconvex <= other.nonconvex
    }

    /// The directly stronger levels: each coordinate not yet at its
    /// maximum, incremented by one. At most two, convex first.
    pub fn successors(&self) -> Vec<FilterLevel> {
        let mut next = Vec::with_capacity(2);
        if self.convex < FilterLevel::MAX_CONVEX {
            next.push(FilterLevel { convex: self.convex + 1, ..*self });
        }
        if self.nonconvex < FilterLevel::MAX_NONCONVEX {
            next.push(FilterLevel { nonconvex: self.nonconvex + 1, ..*self });
        }
        next
    }
}

impl fmt::Display for FilterLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.convex, self.nonconvex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use SubstructureKind::*;

    #[test]
    fn kind_names_round_trip_through_from_str() {
        for k in SubstructureKind::ALL {
            assert_eq!(k.name().parse::<SubstructureKind>().unwrap(), k);
        }
        assert_eq!("Bowtie".parse::<SubstructureKind>().unwrap(), Bowtie);
        assert!(matches!("sock".parse::<SubstructureKind>(), Err(Error::UnknownKind(_))));
    }

    #[test]
    fn empty_filter_means_all() {
        let f = KindFilter::only(vec![]);
        assert!(f.is_all());
        assert_eq!(f.kinds().count(), 5);
        let f = KindFilter::only(vec![Pant, Cravat]);
        assert!(f.contains(Pant) && f.contains(Cravat) && !f.contains(Skirt));
        assert!(f.wants_convex() && f.wants_nonconvex());
        assert_eq!(f.to_string(), "cravat+pant");
        assert!(!KindFilter::only(vec![Skirt]).wants_convex());
    }

    #[test]
    fn filter_level_starts_at_lowest_kind_per_family() {
        assert_eq!(FilterLevel::of(&KindFilter::only(vec![Necklace])), FilterLevel::new(2, 0));
        assert_eq!(FilterLevel::of(&KindFilter::only(vec![Bowtie])), FilterLevel::new(3, 0));
        // a gap in the chain stops the climb
        assert_eq!(FilterLevel::of(&KindFilter::only(vec![Cravat, Bowtie, Skirt])), FilterLevel::new(1, 1));
        assert_eq!(FilterLevel::of(&KindFilter::only(vec![Cravat, Bowtie])), FilterLevel::new(1, 0));
        assert_eq!(FilterLevel::of(&KindFilter::only(vec![Necklace, Bowtie, Pant])), FilterLevel::new(3, 2));
        assert_eq!(FilterLevel::of(&KindFilter::all()), FilterLevel::TOP);
    }

    #[test]
    fn out_of_range_levels_are_clamped() {
        assert_eq!(FilterLevel::new(7, 9), FilterLevel::TOP);
        assert_eq!(FilterLevel::new(4, 1), FilterLevel::new(3, 1));
        assert!(FilterLevel::new(200, 0).successors().iter().all(|l| l.convex == FilterLevel::MAX_CONVEX));
    }

    #[test]
    fn levels_are_cumulative() {
        let f = FilterLevel::new(2, 1).filter();
        assert_eq!(f.kinds().collect::<Vec<_>>(), vec![Cravat, Necklace, Skirt]);
        assert!(FilterLevel::TOP.filter().is_all());
        assert!(FilterLevel::new(0, 0).filter().is_all());
        assert_eq!(FilterLevel::of(&FilterLevel::new(1, 2).filter()), FilterLevel::new(1, 2));
    }

    #[test]
    fn successors_increment_one_coordinate() {
        assert_eq!(
            FilterLevel::new(0, 0).successors(),
            vec![FilterLevel::new(1, 0), FilterLevel::new(0, 1)]
        );
        assert_eq!(FilterLevel::new(3, 1).successors(), vec![FilterLevel::new(3, 2)]);
        assert_eq!(FilterLevel::new(2, 2).successors(), vec![FilterLevel::new(3, 2)]);
        assert!(FilterLevel::TOP.successors().is_empty());
        for s in FilterLevel::new(1, 1).successors() {
            assert!(FilterLevel::new(1, 1).is_below(&s));
        }
    }
}
