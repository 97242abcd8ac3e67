//! Point files: one `x,y,color` row per point, no header.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::points::{ColoredPointSet, RawColoredPointSet};
use crate::Point;

pub trait CsvImport: Sized {
    fn import_csv<R: Read>(r: R) -> Result<Self>;
}

pub trait CsvExport {
    fn export_csv<W: Write>(&self, w: W) -> Result<()>;
}

/// Coordinates must be finite; `NaN` and the infinities are rejected.
fn parse_coordinate(field: &str, line: usize) -> Result<f64> {
    let field = field.trim();
    let v = field
        .parse::<f64>()
        .map_err(|e| Error::Parse { line, message: format!("bad coordinate `{}`: {}", field, e).into() })?;
    if !v.is_finite() {
        return Err(Error::Parse { line, message: format!("coordinate `{}` is not finite", field).into() });
    }
    Ok(v)
}

impl CsvImport for RawColoredPointSet {
    /// Blank lines are skipped; the color keeps its surrounding whitespace
    /// until the records are partitioned.
    fn import_csv<R: Read>(r: R) -> Result<Self> {
        let mut points = Vec::new();
        for (i, line) in BufReader::new(r).lines().enumerate() {
            let line = line?;
            let lineno = i + 1;
            if line.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split(',').collect();
            if fields.len() != 3 {
                return Err(Error::Parse {
                    line: lineno,
                    message: format!("expected 3 fields, found {}", fields.len()).into(),
                });
            }
            let x = parse_coordinate(fields[0], lineno)?;
            let y = parse_coordinate(fields[1], lineno)?;
            if fields[2].trim().is_empty() {
                return Err(Error::Parse { line: lineno, message: "empty color".into() });
            }
            points.push((Point::new(x, y), fields[2].to_owned()));
        }
        Ok(points)
    }
}

impl CsvImport for ColoredPointSet {
    fn import_csv<R: Read>(r: R) -> Result<Self> {
        let raw = RawColoredPointSet::import_csv(r)?;
        Ok(ColoredPointSet::from_raw(raw))
    }
}

impl CsvExport for ColoredPointSet {
    /// Rows are grouped by color, in the order of [`ColoredPointSet::colors`].
    fn export_csv<W: Write>(&self, mut w: W) -> Result<()> {
        for (p, c) in self.iter() {
            writeln!(w, "{},{},{}", p.x(), p.y(), c)?;
        }
        w.flush()?;
        Ok(())
    }
}

pub fn read_points<P: AsRef<Path>>(path: P) -> Result<ColoredPointSet> {
    ColoredPointSet::import_csv(File::open(path)?)
}

pub fn write_points<P: AsRef<Path>>(points: &ColoredPointSet, path: P) -> Result<()> {
    points.export_csv(BufWriter::new(File::create(path)?))
}
