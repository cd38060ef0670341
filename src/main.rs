#![deny(clippy::all)]

use anyhow::{bail, Context, Result};
use clap::{App, Arg};
use lightpath::{logger, utils, HitAnnotation, RaySegment, Scene, TraceSummary, AIR};
use log::{info, LevelFilter};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

#[derive(Serialize)]
struct TraceReport {
    angle: f64,
    segments: Vec<RaySegment>,
    annotation: Option<HitAnnotation>,
    summary: TraceSummary,
}

impl TraceReport {
    fn new(angle: f64, segments: Vec<RaySegment>, scene: &Scene) -> Self {
        Self {
            angle,
            annotation: HitAnnotation::from_segments(&segments, &scene.obstacle),
            summary: TraceSummary::from_segments(&segments),
            segments,
        }
    }
}

fn parse_sweep(value: &str) -> Result<Vec<f64>> {
    let parts = value
        .split(':')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("invalid sweep \"{}\"", value))?;

    match parts[..] {
        [start, end, step] if step > 0.0 && start <= end => Ok(utils::angle_range(start, end, step)),
        [_, _, _] => bail!("sweep needs start <= end and a positive step"),
        _ => bail!("sweep must look like start:end:step"),
    }
}

fn main() -> Result<()> {
    let matches = App::new("lightpath")
        .about("Traces reflection and refraction of a light ray through a rectangular obstacle")
        .arg(
            Arg::with_name("scene")
                .index(1)
                .required(true)
                .takes_value(true)
                .help("input scene as a json file"),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .help(
                    "Write traced segments to file as json\n\
                     If omitted, they are written to stdout",
                ),
        )
        .arg(
            Arg::with_name("angle")
                .long("angle")
                .takes_value(true)
                .allow_hyphen_values(true)
                .help("Override the emitter angle in degrees"),
        )
        .arg(
            Arg::with_name("medium")
                .long("medium")
                .takes_value(true)
                .help("Override the obstacle medium"),
        )
        .arg(
            Arg::with_name("sweep")
                .long("sweep")
                .takes_value(true)
                .allow_hyphen_values(true)
                .conflicts_with("angle")
                .help("Trace every angle of start:end:step in degrees"),
        )
        .arg(
            Arg::with_name("noprogress")
                .long("no-progress")
                .help("Hide progress bar"),
        )
        .arg(
            Arg::with_name("loglevel")
                .long("log-level")
                .takes_value(true)
                .possible_values(&["error", "warn", "info", "debug", "trace"])
                .default_value("warn")
                .help("Log verbosity"),
        )
        .get_matches();

    let level: LevelFilter = matches.value_of("loglevel").unwrap_or("warn").parse()?;
    logger::init_logger(level);

    let scene_path = Path::new(matches.value_of("scene").unwrap_or_default());
    let scene_file = File::open(scene_path)
        .with_context(|| format!("unable to open {}", scene_path.display()))?;
    let use_progress = !matches.is_present("noprogress");

    let mut scene: Scene = serde_json::from_reader(scene_file)
        .with_context(|| format!("failed to parse {}", scene_path.display()))?;
    if let Some(angle) = matches.value_of("angle") {
        scene.emitter.angle = angle
            .parse()
            .with_context(|| format!("invalid angle \"{}\"", angle))?;
    }
    if let Some(medium) = matches.value_of("medium") {
        scene.medium = medium.to_string();
    }

    let tracer = scene.build_tracer()?;

    let now = Instant::now();
    let output = if let Some(sweep) = matches.value_of("sweep") {
        let angles = parse_sweep(sweep)?;
        let traces = tracer.sweep(
            scene.emitter.position,
            &angles,
            AIR,
            &scene.medium,
            use_progress,
        )?;
        info!("traced {} angles in {:.3?}", angles.len(), now.elapsed());

        let reports: Vec<_> = angles
            .into_iter()
            .zip(traces)
            .map(|(angle, segments)| TraceReport::new(angle, segments, &scene))
            .collect();
        serde_json::to_value(reports)?
    } else {
        let segments = tracer.trace_emitter(&scene.emitter, &scene.medium)?;
        let report = TraceReport::new(scene.emitter.angle, segments, &scene);
        info!("{} in {:.3?}", report.summary, now.elapsed());

        serde_json::to_value(report)?
    };

    match matches.value_of("output") {
        Some(filename) => {
            let file = File::create(filename)
                .with_context(|| format!("unable to write {}", filename))?;
            serde_json::to_writer_pretty(BufWriter::new(file), &output)?;
            info!("output written to {}", filename);
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            serde_json::to_writer_pretty(&mut handle, &output)?;
            writeln!(handle)?;
        }
    }

    Ok(())
}
