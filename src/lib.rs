// Library exports for the generator binaries and tests
pub mod bitmap_font;
pub mod canvas;
pub mod config;
pub mod constants;
pub mod feature_graphic;
pub mod icon;
pub mod mipmap;
pub mod text;

use std::path::Path;

use anyhow::Result;
use crate::config::{AssetPaths, Config};

/// Load `asset-gen.yaml` (or defaults) and resolve output paths against `root`
pub fn load_project(root: &Path) -> Result<(Config, AssetPaths)> {
    let config = Config::load_or_default(root)?;
    let paths = AssetPaths::resolve(root, &config.paths);
    Ok((config, paths))
}

/// Install the stderr log subscriber; `RUST_LOG` overrides the default `warn` level
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
