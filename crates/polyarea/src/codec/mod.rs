//! Point and polygon text codec.
//!
//! Format
//! - Point: `(<int>;<int>)`, no whitespace inside the parentheses.
//! - Polygon: `<count> <point> <point> ... <point>\n`.
//!
//! Parsing goes through `TextReader` (failure is a stream state, see
//! `io::ReadText`); formatting goes through `TextWriter` and always emits
//! canonical text regardless of the caller's writer flags.

mod point;
mod polygon;

pub use point::Point;
pub use polygon::Polygon;
