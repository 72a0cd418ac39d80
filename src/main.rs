use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use shopping_assets::config::{AssetPaths, Config};
use shopping_assets::feature_graphic::generate_feature_graphic;
use shopping_assets::icon::generate_icon;
use shopping_assets::mipmap::generate_mipmaps;
use shopping_assets::{init_logging, load_project};

#[derive(Parser)]
#[command(name = "shopping-assets")]
#[command(about = "Generate the Family Shopping List icon, feature graphic and Android mipmaps", long_about = None)]
struct Cli {
    /// Project root that asset paths are resolved against
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw the 512x512 app icon
    Icon,
    /// Draw the 1024x500 Play Store feature graphic
    FeatureGraphic,
    /// Resize the app icon into Android mipmap folders
    Mipmaps,
    /// Icon, then feature graphic, then mipmaps
    All,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let (config, paths) = load_project(&cli.root)?;

    match cli.command {
        Commands::Icon => icon_command(&paths),
        Commands::FeatureGraphic => feature_graphic_command(&config, &paths),
        Commands::Mipmaps => mipmaps_command(&paths),
        Commands::All => {
            icon_command(&paths)?;
            feature_graphic_command(&config, &paths)?;
            mipmaps_command(&paths)
        }
    }
}

fn icon_command(paths: &AssetPaths) -> Result<()> {
    println!("Generating app icon...");
    generate_icon(&paths.icon)?;
    println!("✓ Icon saved to: {}", paths.icon.display());
    Ok(())
}

fn feature_graphic_command(config: &Config, paths: &AssetPaths) -> Result<()> {
    println!("Generating feature graphic...");
    if !paths.icon.exists() {
        println!("  (no icon at {}, drawing banner without it)", paths.icon.display());
    }
    generate_feature_graphic(&paths.icon, &paths.feature_graphic, &config.fonts)?;
    println!("✓ Feature graphic saved to: {}", paths.feature_graphic.display());
    Ok(())
}

fn mipmaps_command(paths: &AssetPaths) -> Result<()> {
    println!("Generating mipmaps from {}...", paths.icon.display());
    let outputs = generate_mipmaps(&paths.icon, &paths.android_res)?;
    for output in &outputs {
        println!("  {}: {}x{}", output.folder, output.size, output.size);
    }
    println!("✓ All mipmap icons generated in {}", paths.android_res.display());
    Ok(())
}
