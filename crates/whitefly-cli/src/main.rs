//! Evaluation harness for whitefly detection output.
//!
//! Walks one or more dataset directories. For every `<stem>.annotation.json`
//! file it loads the ground-truth boxes plus the sibling
//! `<stem>.detections.json` candidate list (an array of `[x, y]` pairs, as
//! produced by a detector run), scores the image, and accumulates dataset
//! totals. Images whose annotation carries the `bad` flag are skipped and
//! excluded from all counts. Prints the overall counts and
//! precision/recall/F-score summary on stdout.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use log::{info, warn, LevelFilter};

use whitefly_core::PixelPoint;
use whitefly_eval::{
    format_counts, format_metrics, load_annotation, score_annotated, AccuracyAccumulator,
    AnnotationError, BadAnnotationError,
};

const ANNOTATION_SUFFIX: &str = ".annotation.json";
const DETECTIONS_SUFFIX: &str = ".detections.json";

#[derive(Parser, Debug)]
#[command(
    name = "whitefly-eval",
    about = "Score whitefly detections against hand-annotated ground truth"
)]
struct Args {
    /// Dataset directories holding *.annotation.json / *.detections.json pairs.
    #[arg(required = true)]
    dirs: Vec<PathBuf>,

    /// Increase log verbosity (-v: debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Annotation(#[from] AnnotationError),
}

/// Annotation file stems in one directory, sorted for stable output.
fn annotated_stems(dir: &Path) -> Result<Vec<PathBuf>, CliError> {
    let mut stems = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if let Some(stem) = name.strip_suffix(ANNOTATION_SUFFIX) {
                stems.push(dir.join(stem));
            }
        }
    }
    stems.sort();
    Ok(stems)
}

/// Read the detection fixture for one image. A missing file means the
/// detector found nothing there.
fn load_detections(path: &Path) -> Result<Vec<PixelPoint>, CliError> {
    if !path.exists() {
        warn!("no detections file at {}; assuming zero", path.display());
        return Ok(Vec::new());
    }
    let raw = fs::read_to_string(path)?;
    let pairs: Vec<(u32, u32)> = serde_json::from_str(&raw)?;
    Ok(pairs.into_iter().map(|(x, y)| PixelPoint::new(x, y)).collect())
}

fn run(args: &Args) -> Result<AccuracyAccumulator, CliError> {
    let mut acc = AccuracyAccumulator::new();

    for dir in &args.dirs {
        let stems = annotated_stems(dir)?;
        let n = stems.len();
        for (i, stem) in stems.iter().enumerate() {
            info!("{} ({}/{})", stem.display(), i + 1, n);

            let annotation =
                load_annotation(format!("{}{ANNOTATION_SUFFIX}", stem.display()))?;
            let detections =
                load_detections(&PathBuf::from(format!("{}{DETECTIONS_SUFFIX}", stem.display())))?;

            match score_annotated(&detections, &annotation) {
                Ok(counts) => {
                    info!("{}: {}", stem.display(), format_counts(&counts));
                    acc.record(counts);
                }
                Err(BadAnnotationError) => {
                    info!("{}: flagged bad, skipped", stem.display());
                }
            }
        }
    }

    Ok(acc)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    whitefly_core::init_with_level(level)?;

    let acc = run(&args)?;
    println!("{}", format_counts(&acc.counts()));
    println!("{}", format_metrics(&acc));
    Ok(())
}
