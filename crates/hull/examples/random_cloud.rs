//! Print hull sizes and perimeters for a few seeded point clouds.
//!
//! Usage:
//!   cargo run -p hull --example random_cloud -- disk
//!   cargo run -p hull --example random_cloud -- square

use hull::convex_hull;
use hull::rand::{draw_points, CloudCfg, CloudShape, ReplayToken};

fn main() {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "disk".to_string());
    let shape = match mode.as_str() {
        "disk" => CloudShape::Disk,
        "square" => CloudShape::Square,
        _ => {
            eprintln!("usage: random_cloud [disk|square]");
            return;
        }
    };
    let cfg = CloudCfg {
        count: 1_000,
        radius: 500,
        shape,
    };
    for i in 0..5 {
        let pts = draw_points(cfg, ReplayToken { seed: 2025, index: i });
        match convex_hull(&pts) {
            Ok(h) => println!(
                "{mode} sample {i}: n={}, hull={}, perimeter={:.1}",
                pts.len(),
                h.len(),
                h.perimeter()
            ),
            Err(e) => eprintln!("{mode} sample {i}: {e}"),
        }
    }
}
