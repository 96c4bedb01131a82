//! Polygon text codec and shoelace area.
//!
//! Layout
//! - `io`: failure-aware text reader, flag-scoped text writer, and the
//!   `ReadText`/`WriteText` seams.
//! - `codec`: `Point` (`(x;y)`) and `Polygon` (`n p1 ... pn\n`) on top of `io`.
//! - `area`: `GaussLacing`, `get_area`, `signed_area`, `count_vertexes`.
//!
//! Not a geometry library: there are no intersection, containment, or
//! transformation routines. Dataset handling lives in callers (see the
//! `cli` crate).

pub mod area;
pub mod codec;
pub mod error;
pub mod io;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use area::{count_vertexes, get_area, signed_area, GaussLacing};
pub use codec::{Point, Polygon};
pub use error::{ParseError, ParseResult};
pub use io::{parse_str, FmtFlags, FmtGuard, ReadText, TextReader, TextWriter, WriteText};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::area::{count_vertexes, get_area, signed_area, GaussLacing};
    pub use crate::codec::{Point, Polygon};
    pub use crate::error::{ParseError, ParseResult};
    pub use crate::io::{ReadText, TextReader, TextWriter, WriteText};
}
