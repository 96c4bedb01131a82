use nalgebra::Vector2;
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::io::{parse_str, FmtFlags, ReadText, TextReader, TextWriter, WriteText};

/// Integer lattice point, text form `(x;y)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Widened position vector; products of two coordinates cannot overflow.
    #[inline]
    pub fn to_vec(self) -> Vector2<i128> {
        Vector2::new(i128::from(self.x), i128::from(self.y))
    }
}

impl ReadText for Point {
    fn read_text(reader: &mut TextReader<'_>, rhs: &mut Self) {
        if !reader.sentry() {
            return;
        }
        reader
            .expect('(')
            .int(&mut rhs.x)
            .expect(';')
            .int(&mut rhs.y)
            .expect(')');
    }
}

impl WriteText for Point {
    fn write_text<W: fmt::Write>(&self, out: &mut TextWriter<W>) -> fmt::Result {
        let mut out = out.guard();
        out.set_flags(FmtFlags::default());
        out.char('(')?;
        out.int(self.x)?;
        out.char(';')?;
        out.int(self.y)?;
        out.char(')')
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = TextWriter::new(String::new());
        out.write(self)?;
        f.pad(&out.into_inner())
    }
}

impl FromStr for Point {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_str(s)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}
