/// Offline audit of the procedural generator: bounds, density, previews
mod bounds;
mod histogram;
mod preview;
mod report;

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::env;
use std::path::{Path, PathBuf};

use constants::cloud::{DEFAULT_POINT_COUNT, MAX_CLOUD_POINTS};
use particle_cloud::ShapeKind;
use particle_cloud::shape::generate_seeded;

use bounds::CloudBounds;
use histogram::RadialHistogram;
use preview::{Projection, render_preview};
use report::{AuditManifest, PreviewFiles, ShapeReport};

const DEFAULT_SEED: u64 = 7;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 4 {
        eprintln!("Usage: {} <output-dir> [count] [seed]", args[0]);
        std::process::exit(1);
    }

    let output_dir = PathBuf::from(&args[1]);
    let count = match args.get(2) {
        Some(raw) => raw
            .parse::<usize>()
            .map_err(|_| format!("invalid point count: {raw}"))?,
        None => DEFAULT_POINT_COUNT,
    };
    let seed = match args.get(3) {
        Some(raw) => raw
            .parse::<u64>()
            .map_err(|_| format!("invalid seed: {raw}"))?,
        None => DEFAULT_SEED,
    };

    if count == 0 || count > MAX_CLOUD_POINTS {
        eprintln!("Point count must be within 1..={MAX_CLOUD_POINTS}, got {count}");
        std::process::exit(1);
    }

    std::fs::create_dir_all(&output_dir)?;

    println!(
        "Auditing {} shapes ({} points each, seed {})...",
        ShapeKind::ALL.len(),
        count,
        seed
    );

    let progress = MultiProgress::new();
    let shapes = ShapeKind::ALL
        .par_iter()
        .map(|&kind| audit_shape(kind, count, seed, &output_dir, &progress))
        .collect::<Result<Vec<_>, _>>()?;

    let failed: Vec<_> = shapes
        .iter()
        .filter(|report| !report.checks.passed)
        .map(|report| report.shape.label())
        .collect();

    let manifest = AuditManifest {
        point_count: count,
        seed,
        shapes,
    };
    report::write_manifest(&manifest, &output_dir)?;

    if failed.is_empty() {
        println!("Audit complete: all shapes passed");
    } else {
        eprintln!("Audit complete with failures: {}", failed.join(", "));
        std::process::exit(1);
    }

    Ok(())
}

/// Run the full pipeline for one shape: generate, measure, splat, check.
fn audit_shape(
    kind: ShapeKind,
    count: usize,
    seed: u64,
    output_dir: &Path,
    progress: &MultiProgress,
) -> Result<ShapeReport, Box<dyn std::error::Error + Send + Sync>> {
    let positions = generate_seeded(kind, count, seed)?;

    let pb = progress.add(ProgressBar::new(count as u64));
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} points ({percent}%) {msg}")
            .unwrap()
            .progress_chars("▉▊▋▌▍▎▏ "),
    );
    pb.set_message(format!("Auditing {}", kind.label()));

    let mut bounds = CloudBounds::new();
    let mut radii = Vec::with_capacity(count);
    for (idx, point) in positions.chunks_exact(3).enumerate() {
        bounds.update(point[0], point[1], point[2]);
        radii.push((point[0] * point[0] + point[1] * point[1] + point[2] * point[2]).sqrt());

        if idx % 1_000 == 0 {
            pb.set_position(idx as u64);
        }
    }

    let histogram = RadialHistogram::from_radii(&radii);
    let checks = report::evaluate_checks(kind, &positions, &bounds);

    // Shared frame for both projections keeps the two images comparable.
    let extent = bounds.max_abs_extent().max(1.0) * 1.05;
    let slug = kind.label().to_lowercase();

    let mut previews = PreviewFiles {
        front: String::new(),
        top: String::new(),
    };
    for projection in [Projection::FrontXy, Projection::TopXz] {
        let file_name = format!("{slug}_{}.png", projection.file_suffix());
        let image = render_preview(&positions, projection, extent);
        image.save(output_dir.join(&file_name))?;

        match projection {
            Projection::FrontXy => previews.front = file_name,
            Projection::TopXz => previews.top = file_name,
        }
    }

    pb.finish_with_message(format!(
        "{} audited{}",
        kind.label(),
        if checks.passed { "" } else { " (FAILED)" }
    ));

    Ok(ShapeReport {
        shape: kind,
        bounds,
        histogram,
        previews,
        checks,
    })
}
