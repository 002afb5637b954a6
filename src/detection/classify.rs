use crate::detection::features::RegionFeatures;
use crate::models::ShapeKind;

/// Circularity at or above which a region is a circle
pub const CIRCLE_CIRCULARITY: f64 = 0.45;
/// Maximum |width - height| for the square branch
pub const SQUARE_SIDE_TOLERANCE: u32 = 10;
/// Aspect ratio (either orientation) above which a region is a rectangle
pub const RECTANGLE_ASPECT: f64 = 1.2;

/// Classify a region from its circularity and bounding-box span.
///
/// Pentagon and star are never returned.
pub fn classify(circularity: f64, width: u32, height: u32) -> (ShapeKind, f64) {
    let confidence = circularity.abs().min(1.0);

    let kind = if circularity >= CIRCLE_CIRCULARITY {
        ShapeKind::Circle
    } else if width.abs_diff(height) < SQUARE_SIDE_TOLERANCE {
        ShapeKind::Square
    } else {
        let (w, h) = (width as f64, height as f64);
        if w / h > RECTANGLE_ASPECT || h / w > RECTANGLE_ASPECT {
            ShapeKind::Rectangle
        } else {
            ShapeKind::Triangle
        }
    };

    (kind, confidence)
}

pub fn classify_features(features: &RegionFeatures) -> (ShapeKind, f64) {
    classify(features.circularity, features.bbox.width, features.bbox.height)
}
