mod fixtures;
#[allow(unused_imports)]
pub use fixtures::*;

// Re-export commonly used types from shapescan for tests
#[allow(unused_imports)]
pub use shapescan::{
    BoundingBox, Channels, DetectedShape, DetectionPipeline, DetectionResult, PixelBuffer,
    ShapeKind,
};
