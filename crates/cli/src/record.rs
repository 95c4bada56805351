//! Run records written next to `perimeter` outputs.
//!
//! `output.txt` gets `output.txt.hull.json`: build info, input size, and the
//! hull that produced the printed value. The record is typed so it can be read
//! back (and diffed) without guessing at keys.

use anyhow::{Context, Result};
use hull::Hull;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::points_io::format_perimeter;

/// Code revision and library version of the binary that ran.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BuildInfo {
    pub code_rev: String,
    pub hull_version: String,
}

impl BuildInfo {
    /// `GIT_COMMIT` from build time, else from the environment, else `"unknown"`.
    pub fn current() -> Self {
        let code_rev = option_env!("GIT_COMMIT")
            .map(str::to_string)
            .or_else(|| std::env::var("GIT_COMMIT").ok())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "unknown".to_string());
        Self {
            code_rev,
            hull_version: hull::VERSION.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputStats {
    pub path: String,
    pub bytes: u64,
    pub points: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HullStats {
    pub vertices: usize,
    pub anchor: [i64; 2],
    pub degenerate: bool,
    pub perimeter: f64,
    /// Exactly what was written to the output file (without the newline).
    pub perimeter_text: String,
}

impl HullStats {
    pub fn of(hull: &Hull) -> Self {
        let anchor = hull.anchor();
        let perimeter = hull.perimeter();
        Self {
            vertices: hull.len(),
            anchor: [anchor.x(), anchor.y()],
            degenerate: hull.is_degenerate(),
            perimeter,
            perimeter_text: format_perimeter(perimeter).trim_end().to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    pub build: BuildInfo,
    pub tag: Option<String>,
    pub input: InputStats,
    pub hull: HullStats,
}

impl RunRecord {
    pub fn new(input: &Path, points: usize, hull: &Hull, tag: Option<String>) -> Result<Self> {
        let bytes = fs::metadata(input)
            .with_context(|| format!("reading metadata of {}", input.display()))?
            .len();
        Ok(Self {
            build: BuildInfo::current(),
            tag,
            input: InputStats {
                path: input.to_string_lossy().into_owned(),
                bytes,
                points,
            },
            hull: HullStats::of(hull),
        })
    }

    /// Write the record next to `output`; returns the record path.
    pub fn write_beside(&self, output: &Path) -> Result<PathBuf> {
        let path = record_path(output);
        fs::write(&path, serde_json::to_vec_pretty(self)?)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }

    pub fn read(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
    }
}

/// `dir/output.txt` → `dir/output.txt.hull.json`.
pub fn record_path(output: &Path) -> PathBuf {
    let mut name = output
        .file_name()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("output"));
    name.push(".hull.json");
    output.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hull::{convex_hull, Point};
    use tempfile::tempdir;

    #[test]
    fn record_path_keeps_full_file_name() {
        assert_eq!(
            record_path(Path::new("/tmp/run/output.txt")),
            Path::new("/tmp/run/output.txt.hull.json")
        );
        assert_eq!(record_path(Path::new("out")), Path::new("out.hull.json"));
    }

    #[test]
    fn hull_stats_describe_the_hull() {
        let pts = [
            Point::new(0, 0),
            Point::new(0, 2),
            Point::new(2, 2),
            Point::new(2, 0),
            Point::new(1, 1),
        ];
        let stats = HullStats::of(&convex_hull(&pts).unwrap());
        assert_eq!(stats.vertices, 4);
        assert_eq!(stats.anchor, [0, 0]);
        assert!(!stats.degenerate);
        assert_eq!(stats.perimeter_text, "8.0");

        let seg = HullStats::of(&convex_hull(&[Point::new(3, 4), Point::new(0, 0)]).unwrap());
        assert!(seg.degenerate);
        assert_eq!(seg.perimeter_text, "10.0");
    }

    #[test]
    fn record_round_trips_through_disk() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.txt");
        let text = "3\n0 0\n4 0\n0 3\n";
        fs::write(&input, text).unwrap();
        let hull = convex_hull(&[Point::new(0, 0), Point::new(4, 0), Point::new(0, 3)]).unwrap();
        let record = RunRecord::new(&input, 3, &hull, Some("triangle".into())).unwrap();
        assert_eq!(record.input.bytes, text.len() as u64);
        assert_eq!(record.build.hull_version, hull::VERSION);

        let path = record.write_beside(&dir.path().join("output.txt")).unwrap();
        assert_eq!(path, dir.path().join("output.txt.hull.json"));
        let back = RunRecord::read(&path).unwrap();
        assert_eq!(back, record);
        assert_eq!(back.tag.as_deref(), Some("triangle"));
        assert_eq!(back.hull.perimeter_text, "12.0");
        assert_eq!(back.input.points, 3);
    }

    #[test]
    fn missing_input_is_reported() {
        let dir = tempdir().unwrap();
        let hull = convex_hull(&[Point::new(1, 1)]).unwrap();
        let err = RunRecord::new(&dir.path().join("nope.txt"), 1, &hull, None).unwrap_err();
        assert!(format!("{err:#}").contains("nope.txt"));
    }
}
