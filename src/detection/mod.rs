pub mod preprocessing;
pub mod regions;
pub mod features;
pub mod classify;

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::models::{Channels, DetectedShape, DetectionResult, PixelBuffer, Region};

/// Intermediate buffers kept alongside a result for debugging
#[derive(Debug, Clone)]
pub struct DetectionTrace {
    pub grayscale: PixelBuffer,
    pub binary: PixelBuffer,
    pub result: DetectionResult,
}

/// Main detection pipeline orchestrator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionPipeline {
    // Detection parameters
    pub threshold: u8,
    pub min_region_pixels: usize,
}

impl DetectionPipeline {
    pub fn new() -> Self {
        Self {
            threshold: preprocessing::DEFAULT_THRESHOLD,
            min_region_pixels: regions::NOISE_FLOOR,
        }
    }

    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_min_region_pixels(mut self, min_region_pixels: usize) -> Self {
        self.min_region_pixels = min_region_pixels;
        self
    }

    /// Run the full detection pipeline on an RGBA buffer
    pub fn detect(&self, input: &PixelBuffer) -> DetectionResult {
        self.run(input).result
    }

    /// Same as [`detect`](Self::detect) but also returns the grayscale and binary stages
    pub fn detect_traced(&self, input: &PixelBuffer) -> DetectionTrace {
        self.run(input)
    }

    /// Get the connected regions that survive the noise floor (for debugging)
    pub fn get_regions(&self, input: &PixelBuffer) -> Vec<Region> {
        let gray = preprocessing::to_grayscale(input);
        let binary = preprocessing::binarize(&gray, self.threshold);
        regions::find_regions(&binary, self.min_region_pixels)
    }

    fn run(&self, input: &PixelBuffer) -> DetectionTrace {
        let (width, height) = (input.width(), input.height());
        if input.is_empty() {
            tracing::debug!(width, height, "empty input, skipping detection");
            let empty =
                PixelBuffer::filled(width, height, Channels::Gray, preprocessing::BACKGROUND);
            return DetectionTrace {
                grayscale: empty.clone(),
                binary: empty,
                result: DetectionResult::empty(width, height),
            };
        }

        let started = Instant::now();

        // Step 1: Preprocess image
        let grayscale = preprocessing::to_grayscale(input);
        let binary = preprocessing::binarize(&grayscale, self.threshold);
        tracing::debug!(width, height, threshold = self.threshold, "binarized input");

        // Step 2: Find connected regions
        let found = regions::find_regions(&binary, self.min_region_pixels);

        // Step 3: Measure and classify each region, in discovery order
        let shapes: Vec<DetectedShape> = found
            .iter()
            .filter_map(features::extract)
            .map(|f| {
                let (kind, confidence) = classify::classify_features(&f);
                tracing::debug!(
                    %kind,
                    confidence,
                    circularity = f.circularity,
                    pixels = f.pixel_count,
                    x = f.bbox.x,
                    y = f.bbox.y,
                    w = f.bbox.width,
                    h = f.bbox.height,
                    "classified region"
                );
                DetectedShape {
                    kind,
                    confidence,
                    bounding_box: f.bbox,
                    center: f.center,
                    area: f.area,
                }
            })
            .collect();

        let processing_time = started.elapsed();
        tracing::info!(
            shapes = shapes.len(),
            elapsed_ms = processing_time.as_secs_f64() * 1000.0,
            "detection finished"
        );

        DetectionTrace {
            grayscale,
            binary,
            result: DetectionResult {
                shapes,
                processing_time,
                image_width: width,
                image_height: height,
            },
        }
    }
}

impl Default for DetectionPipeline {
    fn default() -> Self {
        Self::new()
    }
}
