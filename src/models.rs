use std::time::Duration;

use image::{DynamicImage, GrayImage, RgbImage, RgbaImage};
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Errors raised while constructing a [`PixelBuffer`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BufferError {
    #[error("Buffer length {actual} does not match {width}x{height}x{channels} ({expected})")]
    LengthMismatch {
        width: u32,
        height: u32,
        channels: usize,
        expected: usize,
        actual: usize,
    },
}

/// Per-pixel sample layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channels {
    Gray,
    Rgb,
    Rgba,
}

impl Channels {
    pub fn count(self) -> usize {
        match self {
            Channels::Gray => 1,
            Channels::Rgb => 3,
            Channels::Rgba => 4,
        }
    }
}

/// Row-major interleaved 8-bit pixel data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    channels: Channels,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(
        width: u32,
        height: u32,
        channels: Channels,
        data: Vec<u8>,
    ) -> Result<Self, BufferError> {
        let expected = width as usize * height as usize * channels.count();
        if data.len() != expected {
            return Err(BufferError::LengthMismatch {
                width,
                height,
                channels: channels.count(),
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { width, height, channels, data })
    }

    /// Buffer of the given layout with every sample set to `value`
    pub fn filled(width: u32, height: u32, channels: Channels, value: u8) -> Self {
        let len = width as usize * height as usize * channels.count();
        Self { width, height, channels, data: vec![value; len] }
    }

    /// Single-channel buffer whose length is guaranteed by the caller
    pub(crate) fn gray_from_raw(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize);
        Self { width, height, channels: Channels::Gray, data }
    }

    pub fn from_rgba_image(img: &RgbaImage) -> Self {
        Self {
            width: img.width(),
            height: img.height(),
            channels: Channels::Rgba,
            data: img.as_raw().clone(),
        }
    }

    pub fn from_dynamic(img: &DynamicImage) -> Self {
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        Self {
            width,
            height,
            channels: Channels::Rgba,
            data: rgba.into_raw(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> Channels {
        self.channels
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.data.is_empty()
    }

    /// First sample of the pixel at (x, y), `None` outside the buffer
    pub fn sample(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * self.channels.count();
        self.data.get(idx).copied()
    }

    /// Convert to an `image` buffer for saving or drawing
    pub fn to_dynamic(&self) -> Option<DynamicImage> {
        let (w, h, data) = (self.width, self.height, self.data.clone());
        match self.channels {
            Channels::Gray => GrayImage::from_raw(w, h, data).map(DynamicImage::ImageLuma8),
            Channels::Rgb => RgbImage::from_raw(w, h, data).map(DynamicImage::ImageRgb8),
            Channels::Rgba => RgbaImage::from_raw(w, h, data).map(DynamicImage::ImageRgba8),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Fractional image coordinate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Center {
    pub x: f64,
    pub y: f64,
}

/// Points of one 4-connected foreground component, in visit order
#[derive(Debug, Clone, Default)]
pub struct Region {
    pub points: Vec<Point>,
}

impl Region {
    pub fn pixel_count(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Axis-aligned box; width and height are the coordinate span (max - min)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
    Rectangle,
    /// Declared but never produced by the classifier
    Pentagon,
    /// Declared but never produced by the classifier
    Star,
}

impl ShapeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Square => "square",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Pentagon => "pentagon",
            ShapeKind::Star => "star",
        }
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectedShape {
    #[serde(rename = "type")]
    pub kind: ShapeKind,
    pub confidence: f64,
    pub bounding_box: BoundingBox,
    pub center: Center,
    /// Bounding-box area, not the region's pixel count
    pub area: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectionResult {
    pub shapes: Vec<DetectedShape>,
    #[serde(rename = "processing_time_ms", serialize_with = "serialize_millis")]
    pub processing_time: Duration,
    pub image_width: u32,
    pub image_height: u32,
}

impl DetectionResult {
    pub fn empty(image_width: u32, image_height: u32) -> Self {
        Self {
            shapes: Vec::new(),
            processing_time: Duration::ZERO,
            image_width,
            image_height,
        }
    }
}

fn serialize_millis<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_nanos() as f64 / 1_000_000.0)
}
