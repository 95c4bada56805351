//! Text formats at the edge of the pipeline.
//!
//! Input: a count `N` followed by `N` pairs `x y`, all whitespace separated.
//! Output: the perimeter with one decimal digit and a trailing newline.

use anyhow::{bail, Context, Result};
use hull::Point;
use std::fs;
use std::path::Path;

/// Parse `N x1 y1 ... xN yN`. Coordinates must fit in `i32`; trailing tokens are rejected.
pub fn parse_points(text: &str) -> Result<Vec<Point>> {
    let mut tokens = text.split_whitespace();
    let count_tok = tokens.next().context("missing point count")?;
    let count: usize = count_tok
        .parse()
        .with_context(|| format!("invalid point count {count_tok:?}"))?;
    let mut points = Vec::with_capacity(count);
    for i in 0..count {
        let x = next_coord(&mut tokens, i, "x")?;
        let y = next_coord(&mut tokens, i, "y")?;
        points.push(Point::from((x, y)));
    }
    if let Some(extra) = tokens.next() {
        bail!("unexpected token {extra:?} after {count} points");
    }
    Ok(points)
}

fn next_coord<'a>(tokens: &mut impl Iterator<Item = &'a str>, i: usize, axis: &str) -> Result<i32> {
    let tok = tokens
        .next()
        .with_context(|| format!("point {i}: missing {axis} coordinate"))?;
    tok.parse()
        .with_context(|| format!("point {i}: invalid {axis} coordinate {tok:?}"))
}

pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_points(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Render points in the input format (count line, then one pair per line).
pub fn format_points(points: &[Point]) -> String {
    let mut out = format!("{}\n", points.len());
    for p in points {
        out.push_str(&format!("{} {}\n", p.x(), p.y()));
    }
    out
}

/// One digit after the decimal point, `.` separator, newline terminated.
pub fn format_perimeter(perimeter: f64) -> String {
    format!("{perimeter:.1}\n")
}

pub fn write_text(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, text).with_context(|| format!("writing {}", path.display()))
}
