//! Android launcher mipmaps resampled from the 512px icon.

use anyhow::{Context, Result};
use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbaImage};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use crate::constants::mipmap::{DENSITIES, LAUNCHER, LAUNCHER_ROUND};

/// Files written for one density bucket
#[derive(Debug, Clone)]
pub struct MipmapOutput {
    pub folder: &'static str,
    pub size: u32,
    pub launcher: PathBuf,
    pub launcher_round: PathBuf,
}

/// Resize `source` for every density and write both launcher variants under `res_dir`.
/// The source must exist and decode before anything is written.
pub fn generate_mipmaps(source: &Path, res_dir: &Path) -> Result<Vec<MipmapOutput>> {
    let icon = image::open(source)
        .with_context(|| format!("Failed to open source icon {}", source.display()))?
        .to_rgba8();

    let mut outputs = Vec::with_capacity(DENSITIES.len());
    for (folder, size) in DENSITIES {
        let out_dir = res_dir.join(folder);
        fs::create_dir_all(&out_dir)
            .with_context(|| format!("Failed to create {}", out_dir.display()))?;

        let png = encode_resized(&icon, size)?;

        // Both variants share one encoding so they stay byte-identical
        let launcher = out_dir.join(LAUNCHER);
        let launcher_round = out_dir.join(LAUNCHER_ROUND);
        fs::write(&launcher, &png)
            .with_context(|| format!("Failed to write {}", launcher.display()))?;
        fs::write(&launcher_round, &png)
            .with_context(|| format!("Failed to write {}", launcher_round.display()))?;

        tracing::info!("Wrote {} launcher icons at {}x{}", folder, size, size);
        outputs.push(MipmapOutput {
            folder,
            size,
            launcher,
            launcher_round,
        });
    }

    Ok(outputs)
}

fn encode_resized(icon: &RgbaImage, size: u32) -> Result<Vec<u8>> {
    let resized = imageops::resize(icon, size, size, FilterType::Lanczos3);
    let mut png = Vec::new();
    resized
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .with_context(|| format!("Failed to encode {}x{} mipmap", size, size))?;
    Ok(png)
}
