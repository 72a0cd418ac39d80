use anyhow::Result;
use std::path::Path;

use shopping_assets::mipmap::generate_mipmaps;
use shopping_assets::{init_logging, load_project};

fn main() -> Result<()> {
    init_logging();

    let (_, paths) = load_project(Path::new("."))?;
    let outputs = generate_mipmaps(&paths.icon, &paths.android_res)?;

    for output in &outputs {
        println!("  {}: {}x{}", output.folder, output.size, output.size);
    }
    println!("\nAll mipmap icons generated!");
    Ok(())
}
