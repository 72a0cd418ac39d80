use anyhow::Result;
use std::path::Path;

use shopping_assets::feature_graphic::generate_feature_graphic;
use shopping_assets::{init_logging, load_project};

fn main() -> Result<()> {
    init_logging();
    println!("Generating feature graphic...");

    let (config, paths) = load_project(Path::new("."))?;
    generate_feature_graphic(&paths.icon, &paths.feature_graphic, &config.fonts)?;

    println!("Feature graphic saved to: {}", paths.feature_graphic.display());
    Ok(())
}
