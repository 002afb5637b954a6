use shapescan::samples::{self, SampleKind};

fn main() -> anyhow::Result<()> {
    std::fs::create_dir_all("gallery")?;

    for kind in SampleKind::ALL {
        let img = samples::render(kind, 240, 240);
        let path = format!("gallery/{}.png", kind.name());
        img.save(&path)
            .map_err(|e| anyhow::anyhow!("Failed to save {}: {}", path, e))?;
        println!("Created {} (240x240 RGBA)", path);
    }

    Ok(())
}
