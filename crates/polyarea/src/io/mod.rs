//! Text stream primitives shared by the codecs.
//!
//! - `TextReader`: failure-aware literal and scalar extraction.
//! - `TextWriter`/`FmtGuard`: flag-aware insertion with scoped restoration.
//! - `ReadText`/`WriteText`: the seams a type implements to be parsed or
//!   formatted through them.

mod reader;
mod writer;

pub use reader::TextReader;
pub use writer::{FmtFlags, FmtGuard, TextWriter};

use crate::error::ParseResult;
use std::fmt;

/// Stream extraction into an existing value.
///
/// Implementations must leave the reader failed on malformed input; `rhs`
/// may then hold a partial result.
pub trait ReadText {
    fn read_text(reader: &mut TextReader<'_>, rhs: &mut Self);
}

/// Stream insertion.
pub trait WriteText {
    fn write_text<W: fmt::Write>(&self, out: &mut TextWriter<W>) -> fmt::Result;
}

/// Parse a whole string holding exactly one value (surrounding whitespace allowed).
pub fn parse_str<T: ReadText + Default>(s: &str) -> ParseResult<T> {
    let mut reader = TextReader::new(s);
    let mut value = T::default();
    reader.read(&mut value);
    reader.finish()?;
    Ok(value)
}
