use std::fmt::Write as _;

use crate::models::DetectionResult;

/// Human-readable summary: one line per shape plus timing
pub fn render_text(result: &DetectionResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Shape Detection Results ===");
    let _ = writeln!(out, "Image: {}x{}", result.image_width, result.image_height);
    let _ = writeln!(out, "Total shapes detected: {}", result.shapes.len());

    if result.shapes.is_empty() {
        let _ = writeln!(out, "No shapes detected.");
    } else {
        let _ = writeln!(out, "\nDetected shapes:");
        for (i, shape) in result.shapes.iter().enumerate() {
            let b = &shape.bounding_box;
            let _ = writeln!(
                out,
                "  {} {:<9} {:>5.1}%  bbox ({}, {}) {}x{}  center ({:.1}, {:.1})  area {}",
                i + 1,
                shape.kind,
                shape.confidence * 100.0,
                b.x,
                b.y,
                b.width,
                b.height,
                shape.center.x,
                shape.center.y,
                shape.area
            );
        }
    }

    let _ = writeln!(
        out,
        "\nProcessing time: {:.2} ms",
        result.processing_time.as_secs_f64() * 1000.0
    );
    out
}

pub fn render_json(result: &DetectionResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}
