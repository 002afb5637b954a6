pub mod acquisition;
pub mod debug;
pub mod detection;
pub mod models;
pub mod report;
pub mod samples;

pub use acquisition::AcquireError;
pub use detection::{DetectionPipeline, DetectionTrace};
pub use models::{
    BoundingBox, BufferError, Center, Channels, DetectedShape, DetectionResult, PixelBuffer, Point,
    Region, ShapeKind,
};
