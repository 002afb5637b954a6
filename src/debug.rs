use std::path::{Path, PathBuf};

use anyhow::Result;
use image::Rgba;
use imageproc::drawing::{draw_cross_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect;

use crate::detection::DetectionTrace;
use crate::models::PixelBuffer;

const BOX_COLOR: Rgba<u8> = Rgba([220, 30, 30, 255]);
const CENTER_COLOR: Rgba<u8> = Rgba([30, 120, 220, 255]);

/// Writes intermediate stages of a detection run as PNG files
#[derive(Clone, Debug)]
pub struct DebugConfig {
    /// Root directory for debug outputs
    pub output_dir: PathBuf,
}

impl DebugConfig {
    /// The directory must be empty or non-existent
    pub fn new(output_dir: PathBuf) -> Result<Self> {
        if output_dir.exists() {
            let entries = std::fs::read_dir(&output_dir)?;
            if entries.count() > 0 {
                return Err(anyhow::anyhow!(
                    "Debug directory is not empty: {}",
                    output_dir.display()
                ));
            }
        } else {
            std::fs::create_dir_all(&output_dir)?;
        }

        Ok(Self { output_dir })
    }

    /// Save input, grayscale, binary and an annotated overlay
    pub fn save_trace(&self, input: &PixelBuffer, trace: &DetectionTrace) -> Result<()> {
        self.save_buffer("00_input.png", input)?;
        self.save_buffer("01_grayscale.png", &trace.grayscale)?;
        self.save_buffer("02_binary.png", &trace.binary)?;
        if input.is_empty() {
            return Ok(());
        }

        let mut overlay = input
            .to_dynamic()
            .ok_or_else(|| anyhow::anyhow!("Input buffer has inconsistent dimensions"))?
            .to_rgba8();
        for shape in &trace.result.shapes {
            let b = &shape.bounding_box;
            let rect = Rect::at(b.x as i32, b.y as i32).of_size(b.width + 1, b.height + 1);
            draw_hollow_rect_mut(&mut overlay, rect, BOX_COLOR);
            draw_cross_mut(
                &mut overlay,
                CENTER_COLOR,
                shape.center.x.round() as i32,
                shape.center.y.round() as i32,
            );
        }
        let path = self.output_dir.join("03_overlay.png");
        overlay
            .save(&path)
            .map_err(|e| anyhow::anyhow!("Failed to save debug image: {}", e))?;
        tracing::debug!(path = %path.display(), "saved debug image");

        Ok(())
    }

    fn save_buffer(&self, name: &str, buf: &PixelBuffer) -> Result<()> {
        if buf.is_empty() {
            tracing::debug!(name, "skipping empty debug image");
            return Ok(());
        }
        let path: PathBuf = self.output_dir.join(name);
        buf.to_dynamic()
            .ok_or_else(|| anyhow::anyhow!("Buffer for {} has inconsistent dimensions", name))?
            .save(&path)
            .map_err(|e| anyhow::anyhow!("Failed to save debug image: {}", e))?;
        tracing::debug!(path = %path.display(), "saved debug image");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.output_dir
    }
}
