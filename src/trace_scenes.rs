#![deny(clippy::all)]

use anyhow::{Context, Result};
use lightpath::{logger, Scene, TraceSummary};
use log::LevelFilter;
use std::fs::File;
use std::path::Path;
use std::time::{Duration, Instant};

fn main() -> Result<()> {
    logger::init_logger(LevelFilter::Warn);

    let scenes = [
        "scenes/glass.json",
        "scenes/oblique_water.json",
        "scenes/diamond.json",
        "scenes/mirror.json",
        "scenes/custom_material.json",
    ];
    let iterations = 100;

    for scene in &scenes {
        let scene_path = Path::new(scene);
        let scene_file = File::open(scene_path)
            .with_context(|| format!("unable to open {}", scene_path.display()))?;
        let scene: Scene = serde_json::from_reader(scene_file)
            .with_context(|| format!("failed to parse {}", scene_path.display()))?;
        let tracer = scene.build_tracer()?;

        println!("Tracing {}...", scene_path.display());

        let mut duration_sum = Duration::new(0, 0);
        let mut segments = Vec::new();
        for _ in 0..iterations {
            let now = Instant::now();
            segments = tracer.trace_emitter(&scene.emitter, &scene.medium)?;
            duration_sum += now.elapsed();
        }

        println!("│ Avg time: {:.3?}", duration_sum / iterations);
        println!("└ {}", TraceSummary::from_segments(&segments));
        println!();
    }

    Ok(())
}
