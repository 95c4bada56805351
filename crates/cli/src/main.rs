use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use hull::rand::{draw_points, CloudCfg, CloudShape, ReplayToken};
use hull::{convex_hull, Hull, Point};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod points_io;
mod record;

use points_io::{format_perimeter, format_points, read_points, write_text};
use record::{BuildInfo, RunRecord};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex hull and perimeter of integer point sets")]
struct Cmd {
    /// Optional run label; propagated to logs and run records
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Read points, write the hull perimeter with one decimal digit
    Perimeter {
        #[arg(long, default_value = "input.txt")]
        input: PathBuf,
        #[arg(long, default_value = "output.txt")]
        output: PathBuf,
        /// Skip the `<output>.hull.json` run record
        #[arg(long)]
        no_record: bool,
    },
    /// Print the hull vertices (CCW from the anchor) as JSON
    Hull {
        #[arg(long, default_value = "input.txt")]
        input: PathBuf,
    },
    /// Write a reproducible random point set in the input format
    Sample {
        #[arg(long, default_value_t = 100)]
        count: usize,
        #[arg(long, default_value_t = 1_000)]
        radius: i64,
        #[arg(long, value_enum, default_value_t = Shape::Disk)]
        shape: Shape,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print build info (code revision, library version) as JSON
    Report,
}

#[derive(Clone, Copy, ValueEnum)]
enum Shape {
    Disk,
    Square,
}

impl From<Shape> for CloudShape {
    fn from(s: Shape) -> Self {
        match s {
            Shape::Disk => CloudShape::Disk,
            Shape::Square => CloudShape::Square,
        }
    }
}

#[derive(Serialize)]
struct HullSummary {
    points: usize,
    vertices: Vec<[i64; 2]>,
    perimeter: f64,
    area: f64,
}

impl HullSummary {
    fn new(points: usize, hull: &Hull) -> Self {
        Self {
            points,
            vertices: hull.vertices().iter().map(|p| [p.x(), p.y()]).collect(),
            perimeter: hull.perimeter(),
            area: hull.double_area() as f64 / 2.0,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Perimeter {
            input,
            output,
            no_record,
        } => perimeter(&input, &output, !no_record, cmd.tag).map(|_| ()),
        Action::Hull { input } => {
            let summary = summarize(&input)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
            Ok(())
        }
        Action::Sample {
            count,
            radius,
            shape,
            seed,
            index,
            out,
        } => sample(
            CloudCfg {
                count,
                radius,
                shape: shape.into(),
            },
            ReplayToken { seed, index },
            &out,
        ),
        Action::Report => report(cmd.tag),
    }
}

fn build(points: &[Point], input: &Path) -> Result<Hull> {
    convex_hull(points).with_context(|| format!("building hull of {}", input.display()))
}

fn perimeter(input: &Path, output: &Path, record: bool, tag: Option<String>) -> Result<f64> {
    tracing::info!(input = %input.display(), output = %output.display(), tag = ?tag, "perimeter");
    let points = read_points(input)?;
    let hull = build(&points, input)?;
    let value = hull.perimeter();
    tracing::info!(
        points = points.len(),
        hull_vertices = hull.len(),
        perimeter = value,
        "hull_built"
    );
    write_text(output, &format_perimeter(value))?;

    if record {
        let path = RunRecord::new(input, points.len(), &hull, tag)?.write_beside(output)?;
        tracing::info!(path = %path.display(), "record_written");
    }
    Ok(value)
}

fn summarize(input: &Path) -> Result<HullSummary> {
    tracing::info!(input = %input.display(), "hull");
    let points = read_points(input)?;
    let hull = build(&points, input)?;
    Ok(HullSummary::new(points.len(), &hull))
}

fn sample(cfg: CloudCfg, tok: ReplayToken, out: &Path) -> Result<()> {
    tracing::info!(
        count = cfg.count,
        radius = cfg.radius,
        seed = tok.seed,
        index = tok.index,
        out = %out.display(),
        "sample"
    );
    let points = draw_points(cfg, tok);
    write_text(out, &format_points(&points))
}

#[derive(Serialize)]
struct Report {
    #[serde(flatten)]
    build: BuildInfo,
    tag: Option<String>,
}

fn report(tag: Option<String>) -> Result<()> {
    let report = Report {
        build: BuildInfo::current(),
        tag,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn perimeter_writes_formatted_value_and_record() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.txt");
        let output = dir.path().join("output.txt");
        fs::write(&input, "5\n0 0\n0 2\n2 2\n2 0\n1 1\n").unwrap();
        let value = perimeter(&input, &output, true, Some("square".into())).unwrap();
        assert!((value - 8.0).abs() < 1e-12);
        assert_eq!(fs::read_to_string(&output).unwrap(), "8.0\n");

        let rec = RunRecord::read(&dir.path().join("output.txt.hull.json")).unwrap();
        assert_eq!(rec.tag.as_deref(), Some("square"));
        assert_eq!(rec.input.points, 5);
        assert_eq!(rec.hull.vertices, 4);
        assert_eq!(rec.hull.anchor, [0, 0]);
        assert_eq!(rec.hull.perimeter_text, "8.0");
    }

    #[test]
    fn perimeter_of_degenerate_inputs() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.txt");
        let output = dir.path().join("output.txt");
        fs::write(&input, "2\n0 0\n3 4\n").unwrap();
        perimeter(&input, &output, false, None).unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "10.0\n");
        assert!(!dir.path().join("output.txt.hull.json").exists());

        fs::write(&input, "1\n5 5\n").unwrap();
        perimeter(&input, &output, false, None).unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "0.0\n");
    }

    #[test]
    fn empty_input_is_an_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.txt");
        fs::write(&input, "0\n").unwrap();
        let err = perimeter(&input, &dir.path().join("out.txt"), false, None).unwrap_err();
        assert!(format!("{err:#}").contains("no points"));
    }

    #[test]
    fn sample_then_summarize() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("cloud.txt");
        let cfg = CloudCfg {
            count: 200,
            radius: 40,
            shape: CloudShape::Square,
        };
        sample(cfg, ReplayToken { seed: 3, index: 1 }, &out).unwrap();
        let summary = summarize(&out).unwrap();
        assert_eq!(summary.points, 200);
        assert!(summary.vertices.len() >= 3);
        assert!(summary.area > 0.0);
        assert!(summary.perimeter > 0.0);
    }
}
