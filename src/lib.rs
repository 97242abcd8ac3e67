//! Search for empty monochromatic substructures in colored planar point sets.
//!
//! Every four points of one color span a handful of regions: the hull,
//! unions and symmetric differences of hull triangles for convex quads,
//! the hull triangle and its "pants" for a triangle with a point inside.
//! A region is *empty* if no point of another color lies in its interior.
//! Point sets without empty substructures are counterexamples for the
//! coloring question behind this crate; [`minimize`], [`augment`] and
//! [`strengthen`] help to shrink, grow and stress-test them.
//!
//! The engine is a pure, single-threaded library. [`search`] returns a
//! lazy iterator; stop pulling from it to stop searching. Each quad is
//! evaluated independently from a per-color snapshot of the points, so
//! colors or subset ranges could be fanned out to threads.
//!
//! ```
//! use garments::{search, ColoredPointSet, KindFilter, Point, SubstructureKind};
//!
//! let points = ColoredPointSet::from_raw(vec![
//!     (Point::new(0., 0.), "red"),
//!     (Point::new(2., 0.), "red"),
//!     (Point::new(2., 2.), "red"),
//!     (Point::new(0., 2.), "red"),
//!     (Point::new(1., 1.), "blue"),
//! ]);
//! let cravats = search(&points, KindFilter::only([SubstructureKind::Cravat]));
//! assert_eq!(cravats.count(), 0);
//! ```

pub mod augment;
pub mod check;
pub mod error;
pub mod io;
pub mod kind;
pub mod logging;
pub mod minimize;
pub mod points;
pub mod quad;
pub mod region;
pub mod search;
pub mod strengthen;
pub mod subsets;
pub mod substructures;

pub type Point = geo::Point<f64>;

pub use augment::{augment, random_point, AugmentConfig, Augmentation};
pub use check::{check_dir, check_file, check_instance, filter_from_stem, CheckConfig, CheckOutcome, FileReport};
pub use error::{Error, Result};
pub use io::{read_points, write_points, CsvExport, CsvImport};
pub use kind::{FilterLevel, KindFilter, SubstructureKind};
pub use minimize::{minimize, Removal};
pub use points::{bounding_box, BoundingBox, Change, ColoredPointSet, Coloring, RawColoredPointSet, Trial};
pub use quad::{HullShape, Quad};
pub use region::{is_empty, Region};
pub use search::{
    count_empty_substructures, first_empty_substructure, has_empty_substructure, search, Finding, Search,
};
pub use strengthen::{strengthen, stronger_filters, Strengthening};
pub use substructures::{substructures, Substructures};
