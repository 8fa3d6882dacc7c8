use image::ImageReader;
use whitefly::{run_pipeline, FilterParams, FixedDetector, PixelPoint};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Some(path) = std::env::args().nth(1) else {
        eprintln!("Usage: filter_candidates <image_path> [x,y ...]");
        return Ok(());
    };

    let img = ImageReader::open(path)?.decode()?.to_rgb8();

    // Candidate centres from the command line stand in for a cascade run.
    let candidates: Vec<PixelPoint> = std::env::args()
        .skip(2)
        .filter_map(|arg| {
            let (x, y) = arg.split_once(',')?;
            Some(PixelPoint::new(x.parse().ok()?, y.parse().ok()?))
        })
        .collect();

    let detector = FixedDetector::new(candidates);
    let kept = run_pipeline(&img, &detector, &FilterParams::default());

    println!("kept {} candidate(s):", kept.len());
    for p in kept {
        println!("  ({}, {})", p.x, p.y);
    }

    Ok(())
}
