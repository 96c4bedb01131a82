//! Parse polygons from stdin and print their areas.
//!
//! Usage:
//!   printf '4 (0;0) (1;0) (1;1) (0;1)\n3 (0;0) (4;0) (0;3)\n' \
//!     | cargo run -p polyarea --example shoelace
//!
//! A malformed record is reported and the rest of its line skipped.

use std::io::Read;

use polyarea::{count_vertexes, get_area, Polygon, TextReader};

fn main() {
    let mut input = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut input) {
        eprintln!("shoelace: {e}");
        return;
    }
    let mut reader = TextReader::new(&input);
    loop {
        let start = reader.position();
        let mut poly = Polygon::default();
        reader.read(&mut poly);
        if reader.failed() {
            if input[start..].trim().is_empty() {
                break;
            }
            if let Some(err) = reader.error() {
                eprintln!("skipped record: {err}");
            }
            reader.clear();
            reader.skip_line();
            continue;
        }
        println!(
            "vertexes={} area={:.1}",
            count_vertexes(&poly),
            get_area(&poly)
        );
    }
}
