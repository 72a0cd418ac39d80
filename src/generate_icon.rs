use anyhow::Result;
use std::path::Path;

use shopping_assets::icon::generate_icon;
use shopping_assets::{init_logging, load_project};

fn main() -> Result<()> {
    init_logging();
    println!("Generating app icon...");

    let (_, paths) = load_project(Path::new("."))?;
    generate_icon(&paths.icon)?;

    println!("Icon saved to: {}", paths.icon.display());
    Ok(())
}
