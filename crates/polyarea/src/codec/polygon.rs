use std::fmt;
use std::str::FromStr;

use super::point::Point;
use crate::error::ParseError;
use crate::io::{parse_str, FmtFlags, ReadText, TextReader, TextWriter, WriteText};

/// Upper bound on up-front allocation from a declared point count.
const PREALLOC_CAP: usize = 1024;

/// Ordered vertex list, text form `<n> <point> ... <point>\n`.
///
/// Invariants:
/// - Any vertex count is accepted, including zero.
/// - Vertex order is significant for equality and for the area sign.
#[derive(Clone, Debug, Default)]
pub struct Polygon {
    pub points: Vec<Point>,
}

impl Polygon {
    #[inline]
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl PartialEq for Polygon {
    fn eq(&self, other: &Self) -> bool {
        self.points.len() == other.points.len()
            && self.points.iter().zip(&other.points).all(|(a, b)| a == b)
    }
}

impl Eq for Polygon {}

impl ReadText for Polygon {
    /// Reads the count, then points until the count is reached or a read
    /// fails. `rhs` is replaced with whatever was gathered, so a failed read
    /// leaves it holding the points parsed before the failure.
    fn read_text(reader: &mut TextReader<'_>, rhs: &mut Self) {
        if !reader.sentry() {
            return;
        }
        let mut count = 0usize;
        reader.size(&mut count);
        let mut points = Vec::with_capacity(count.min(PREALLOC_CAP));
        for _ in 0..count {
            let mut point = Point::default();
            reader.read(&mut point);
            if reader.failed() {
                break;
            }
            points.push(point);
        }
        rhs.points = points;
    }
}

impl WriteText for Polygon {
    fn write_text<W: fmt::Write>(&self, out: &mut TextWriter<W>) -> fmt::Result {
        let mut out = out.guard();
        out.set_flags(FmtFlags::default());
        out.size(self.points.len())?;
        out.char(' ')?;
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                out.char(' ')?;
            }
            out.write(p)?;
        }
        out.char('\n')
    }
}

/// Emits the full record, trailing newline included.
impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = TextWriter::new(String::new());
        out.write(self)?;
        f.pad(&out.into_inner())
    }
}

impl FromStr for Polygon {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_str(s)
    }
}
