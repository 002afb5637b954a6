mod common;

use common::*;
use shapescan::debug::DebugConfig;

#[test]
fn test_debug_dir_must_be_empty() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    std::fs::write(dir.path().join("stale.txt"), "x")?;
    assert!(DebugConfig::new(dir.path().to_path_buf()).is_err());
    Ok(())
}

#[test]
fn test_trace_is_written_to_disk() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let out = dir.path().join("debug");
    let debug = DebugConfig::new(out.clone())?;

    let mut img = canvas(40, 40);
    fill_block(&mut img, 5, 5, 12, 12);
    let input = buffer(&img);
    let trace = DetectionPipeline::new().detect_traced(&input);
    debug.save_trace(&input, &trace)?;

    for name in ["00_input.png", "01_grayscale.png", "02_binary.png", "03_overlay.png"] {
        assert!(out.join(name).exists(), "missing {}", name);
    }

    let binary = image::open(out.join("02_binary.png"))?.to_luma8();
    assert_eq!(binary.get_pixel(6, 6)[0], 0);
    assert_eq!(binary.get_pixel(30, 30)[0], 255);
    Ok(())
}
