use shapescan::samples::{self, SampleKind};
use shapescan::{DetectionPipeline, report};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let pipeline = DetectionPipeline::new();

    for kind in SampleKind::ALL {
        let input = samples::render_buffer(kind, 240, 240);
        let result = pipeline.detect(&input);

        println!("\n##### {} #####", kind.name());
        print!("{}", report::render_text(&result));
    }

    // The same gallery image with a stricter noise floor
    let input = samples::render_buffer(SampleKind::TwoBlobs, 240, 240);
    let strict = pipeline.with_min_region_pixels(5_000).detect(&input);
    println!("\n##### two-blobs, min 5000 px #####");
    println!("{}", report::render_json(&strict)?);

    Ok(())
}
