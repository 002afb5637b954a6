mod common;

use common::*;
use shapescan::detection::features;
use std::time::Duration;

#[test]
fn test_blank_image_has_no_shapes() {
    let img = canvas(50, 40);
    let result = DetectionPipeline::new().detect(&buffer(&img));

    assert!(result.shapes.is_empty());
    assert_eq!((result.image_width, result.image_height), (50, 40));
}

#[test]
fn test_empty_input_returns_empty_result() {
    for (w, h) in [(0, 0), (0, 5), (7, 0)] {
        let input = PixelBuffer::new(w, h, Channels::Rgba, Vec::new()).unwrap();
        let result = DetectionPipeline::new().detect(&input);

        assert!(result.shapes.is_empty());
        assert_eq!(result.processing_time, Duration::ZERO);
        assert_eq!((result.image_width, result.image_height), (w, h));
    }
}

#[test]
fn test_solid_square_reports_one_near_square_region() {
    let mut img = canvas(60, 60);
    fill_block(&mut img, 10, 10, 20, 20);
    let result = DetectionPipeline::new().detect(&buffer(&img));

    assert_eq!(result.shapes.len(), 1);
    let shape = &result.shapes[0];
    assert_eq!(shape.bounding_box, BoundingBox { x: 10, y: 10, width: 19, height: 19 });
    assert_eq!(shape.area, 19 * 19);
    assert_eq!((shape.center.x, shape.center.y), (19.5, 19.5));
    assert!(shape.bounding_box.width.abs_diff(shape.bounding_box.height) < 10);

    // A solid fill scores 4π·400 / 76² ≈ 0.87 against the bounding-box perimeter,
    // which the circle cut-off claims before the side-difference check runs.
    assert_eq!(shape.kind, ShapeKind::Circle);
    let expected = 4.0 * std::f64::consts::PI * 400.0 / (76.0 * 76.0);
    assert!((shape.confidence - expected).abs() < 1e-9);
}

#[test]
fn test_square_outline_is_square() {
    let mut img = canvas(60, 60);
    fill_block(&mut img, 10, 10, 40, 1);
    fill_block(&mut img, 10, 49, 40, 1);
    fill_block(&mut img, 10, 10, 1, 40);
    fill_block(&mut img, 49, 10, 1, 40);
    let result = DetectionPipeline::new().detect(&buffer(&img));

    assert_eq!(result.shapes.len(), 1);
    let shape = &result.shapes[0];
    assert_eq!(shape.kind, ShapeKind::Square);
    assert_eq!(shape.bounding_box, BoundingBox { x: 10, y: 10, width: 39, height: 39 });
    let expected = 4.0 * std::f64::consts::PI * 156.0 / (156.0 * 156.0);
    assert!((shape.confidence - expected).abs() < 1e-9);
}

#[test]
fn test_disk_is_circle_with_clamped_circularity_confidence() {
    let mut img = canvas(64, 64);
    fill_disk(&mut img, 30, 30, 15);
    let input = buffer(&img);
    let pipeline = DetectionPipeline::new();
    let result = pipeline.detect(&input);

    assert_eq!(result.shapes.len(), 1);
    let shape = &result.shapes[0];
    assert_eq!(shape.kind, ShapeKind::Circle);
    assert_eq!(shape.bounding_box, BoundingBox { x: 15, y: 15, width: 30, height: 30 });

    let regions = pipeline.get_regions(&input);
    let f = features::extract(&regions[0]).unwrap();
    assert!(f.circularity >= 0.45);
    assert_eq!(shape.confidence, f.circularity.abs().min(1.0));
}

#[test]
fn test_elongated_block_is_rectangle() {
    let mut img = canvas(140, 40);
    fill_block(&mut img, 10, 10, 120, 20);
    let result = DetectionPipeline::new().detect(&buffer(&img));

    assert_eq!(result.shapes.len(), 1);
    assert_eq!(result.shapes[0].kind, ShapeKind::Rectangle);
    assert_eq!(result.shapes[0].area, 119 * 19);
}

#[test]
fn test_shapes_follow_raster_discovery_order() {
    let mut img = canvas(80, 40);
    fill_block(&mut img, 50, 5, 10, 10);
    fill_block(&mut img, 5, 20, 10, 10);
    let result = DetectionPipeline::new().detect(&buffer(&img));

    assert_eq!(result.shapes.len(), 2);
    assert_eq!(result.shapes[0].bounding_box.x, 50);
    assert_eq!(result.shapes[1].bounding_box.x, 5);

    let mut img = canvas(80, 40);
    fill_block(&mut img, 50, 5, 10, 10);
    fill_block(&mut img, 5, 5, 10, 10);
    let result = DetectionPipeline::new().detect(&buffer(&img));
    assert_eq!(result.shapes[0].bounding_box.x, 5);
    assert_eq!(result.shapes[1].bounding_box.x, 50);
}

#[test]
fn test_noise_floor_boundary() {
    let mut img = canvas(30, 30);
    fill_block(&mut img, 5, 5, 10, 8);
    assert_eq!(DetectionPipeline::new().detect(&buffer(&img)).shapes.len(), 1);

    img.put_pixel(14, 12, WHITE);
    assert_eq!(DetectionPipeline::new().detect(&buffer(&img)).shapes.len(), 0);
}

#[test]
fn test_noise_floor_is_configurable() {
    let mut img = canvas(30, 30);
    fill_block(&mut img, 5, 5, 10, 8);
    let pipeline = DetectionPipeline::new().with_min_region_pixels(81);
    assert!(pipeline.detect(&buffer(&img)).shapes.is_empty());
}

#[test]
fn test_single_row_and_column_are_finite() {
    let mut img = canvas(120, 120);
    fill_block(&mut img, 5, 5, 100, 1);
    fill_block(&mut img, 110, 10, 1, 100);
    let result = DetectionPipeline::new().detect(&buffer(&img));

    assert_eq!(result.shapes.len(), 2);
    for shape in &result.shapes {
        assert!(shape.confidence.is_finite());
        assert_eq!(shape.kind, ShapeKind::Rectangle);
        assert_eq!(shape.area, 0);
    }
    assert_eq!(result.shapes[0].bounding_box.height, 0);
    assert_eq!(result.shapes[1].bounding_box.width, 0);
}

#[test]
fn test_grayscale_uses_unweighted_mean_and_ignores_alpha() {
    let mut img = canvas(60, 30);
    for y in 5..15 {
        for x in 5..15 {
            // mean 120: foreground
            img.put_pixel(x, y, image::Rgba([200, 100, 60, 0]));
        }
        for x in 30..40 {
            // mean 130: background
            img.put_pixel(x, y, image::Rgba([200, 100, 90, 255]));
        }
    }
    let result = DetectionPipeline::new().detect(&buffer(&img));

    assert_eq!(result.shapes.len(), 1);
    assert_eq!(result.shapes[0].bounding_box.x, 5);
}

#[test]
fn test_dimensions_echo_input_regardless_of_content() {
    let mut img = canvas(97, 33);
    fill_block(&mut img, 0, 0, 97, 33);
    let result = DetectionPipeline::new().detect(&buffer(&img));

    assert_eq!((result.image_width, result.image_height), (97, 33));
    assert!(result.processing_time >= Duration::ZERO);
    assert_eq!(result.shapes.len(), 1);
}

#[test]
fn test_trace_exposes_intermediate_buffers() {
    let mut img = canvas(30, 30);
    fill_block(&mut img, 5, 5, 10, 10);
    let trace = DetectionPipeline::new().detect_traced(&buffer(&img));

    assert_eq!(trace.grayscale.channels(), Channels::Gray);
    assert_eq!(trace.binary.sample(5, 5), Some(0));
    assert_eq!(trace.binary.sample(0, 0), Some(255));
    assert_eq!(trace.result.shapes.len(), 1);
}

#[test]
fn test_concurrent_calls_match_sequential() {
    let inputs: Vec<PixelBuffer> = (0..4u32)
        .map(|i| {
            let mut img = canvas(80, 80);
            fill_block(&mut img, 5 + i, 5, 12 + i, 12);
            fill_disk(&mut img, 50, 50, 10 + i as i64);
            buffer(&img)
        })
        .collect();
    let pipeline = DetectionPipeline::new();
    let sequential: Vec<Vec<DetectedShape>> =
        inputs.iter().map(|b| pipeline.detect(b).shapes).collect();

    let parallel: Vec<Vec<DetectedShape>> = std::thread::scope(|s| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|b| s.spawn(move || pipeline.detect(b).shapes))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sequential, parallel);
}
