use anyhow::{Context, Result};
use polyarea::{count_vertexes, get_area, Polygon, TextReader};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// A polygon accepted from the input, with its 1-based line number.
#[derive(Debug)]
pub struct Record {
    pub line: usize,
    pub polygon: Polygon,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Rejected {
    pub line: usize,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct Dataset {
    pub records: Vec<Record>,
    pub rejected: Vec<Rejected>,
}

/// One output row of `area --json`.
#[derive(Debug, Serialize)]
pub struct AreaRecord {
    pub line: usize,
    pub vertexes: usize,
    pub area: f64,
}

/// Read a polygon file; malformed lines are collected, not fatal.
pub fn load<P: AsRef<Path>>(path: P, min_vertexes: usize) -> Result<Dataset> {
    let path = path.as_ref();
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(parse_dataset(&text, min_vertexes))
}

/// One polygon per non-blank line, nothing else on the line, and at least
/// `min_vertexes` points.
pub fn parse_dataset(text: &str, min_vertexes: usize) -> Dataset {
    let mut out = Dataset::default();
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        if raw.trim().is_empty() {
            continue;
        }
        match parse_line(raw, min_vertexes) {
            Ok(polygon) => {
                tracing::trace!(line, vertexes = polygon.len(), "accepted");
                out.records.push(Record { line, polygon });
            }
            Err(reason) => {
                tracing::warn!(line, reason = %reason, "rejected");
                out.rejected.push(Rejected { line, reason });
            }
        }
    }
    tracing::debug!(
        accepted = out.records.len(),
        rejected = out.rejected.len(),
        "dataset parsed"
    );
    out
}

fn parse_line(raw: &str, min_vertexes: usize) -> Result<Polygon, String> {
    let mut reader = TextReader::new(raw);
    let mut polygon = Polygon::default();
    reader.read(&mut polygon);
    reader.finish().map_err(|e| e.to_string())?;
    if polygon.len() < min_vertexes {
        return Err(format!(
            "expected at least {min_vertexes} vertexes, got {}",
            polygon.len()
        ));
    }
    Ok(polygon)
}

pub fn area_records(data: &Dataset) -> Vec<AreaRecord> {
    data.records
        .iter()
        .map(|r| AreaRecord {
            line: r.line,
            vertexes: count_vertexes(&r.polygon),
            area: get_area(&r.polygon),
        })
        .collect()
}
