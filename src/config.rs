use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::paths;

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub paths: PathConfig,
    #[serde(default)]
    pub fonts: FontConfig,
}

/// Output locations, relative to the project root unless absolute
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PathConfig {
    #[serde(default = "default_icon_path")]
    pub icon: PathBuf,
    #[serde(default = "default_feature_graphic_path")]
    pub feature_graphic: PathBuf,
    #[serde(default = "default_android_res")]
    pub android_res: PathBuf,
}

fn default_icon_path() -> PathBuf {
    PathBuf::from(paths::ICON)
}

fn default_feature_graphic_path() -> PathBuf {
    PathBuf::from(paths::FEATURE_GRAPHIC)
}

fn default_android_res() -> PathBuf {
    PathBuf::from(paths::ANDROID_RES)
}

impl Default for PathConfig {
    fn default() -> Self {
        PathConfig {
            icon: default_icon_path(),
            feature_graphic: default_feature_graphic_path(),
            android_res: default_android_res(),
        }
    }
}

/// Ordered font candidates per text role; the first existing file wins
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FontConfig {
    #[serde(default = "default_bold_fonts")]
    pub bold: Vec<PathBuf>,
    #[serde(default = "default_regular_fonts")]
    pub regular: Vec<PathBuf>,
    #[serde(default = "default_light_fonts")]
    pub light: Vec<PathBuf>,
}

fn path_list(candidates: &[&str]) -> Vec<PathBuf> {
    candidates.iter().map(PathBuf::from).collect()
}

fn default_bold_fonts() -> Vec<PathBuf> {
    path_list(&[
        "C:/Windows/Fonts/segoeuib.ttf",
        "C:/Windows/Fonts/arialbd.ttf",
        "C:/Windows/Fonts/calibrib.ttf",
        "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
        "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    ])
}

fn default_regular_fonts() -> Vec<PathBuf> {
    path_list(&[
        "C:/Windows/Fonts/segoeui.ttf",
        "C:/Windows/Fonts/arial.ttf",
        "C:/Windows/Fonts/calibri.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
    ])
}

fn default_light_fonts() -> Vec<PathBuf> {
    path_list(&[
        "C:/Windows/Fonts/segoeuil.ttf",
        "C:/Windows/Fonts/calibril.ttf",
        "C:/Windows/Fonts/arial.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans-ExtraLight.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    ])
}

impl Default for FontConfig {
    fn default() -> Self {
        FontConfig {
            bold: default_bold_fonts(),
            regular: default_regular_fonts(),
            light: default_light_fonts(),
        }
    }
}

impl Config {
    pub fn config_path(root: &Path) -> PathBuf {
        root.join(paths::CONFIG_FILE)
    }

    /// Load `asset-gen.yaml` from the project root, or the defaults when it is absent.
    /// Unlike application settings this file is never written back.
    pub fn load_or_default(root: &Path) -> Result<Self> {
        let config_path = Self::config_path(root);

        if !config_path.exists() {
            tracing::debug!("No {} found, using defaults", config_path.display());
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file {}", config_path.display()))?;
        let config = Self::from_yaml(&contents)
            .with_context(|| format!("Failed to load config file {}", config_path.display()))?;

        tracing::debug!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(contents)
            .context("Failed to parse config file")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.paths.icon.as_os_str().is_empty() {
            bail!("paths.icon cannot be empty");
        }
        if self.paths.feature_graphic.as_os_str().is_empty() {
            bail!("paths.feature_graphic cannot be empty");
        }
        if self.paths.android_res.as_os_str().is_empty() {
            bail!("paths.android_res cannot be empty");
        }

        // Outputs are always PNG-encoded
        if !has_png_extension(&self.paths.icon) {
            bail!("paths.icon must end in .png");
        }
        if !has_png_extension(&self.paths.feature_graphic) {
            bail!("paths.feature_graphic must end in .png");
        }

        Ok(())
    }
}

fn has_png_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("png"))
        .unwrap_or(false)
}

/// Output locations resolved against a project root
#[derive(Debug, Clone)]
pub struct AssetPaths {
    pub icon: PathBuf,
    pub feature_graphic: PathBuf,
    pub android_res: PathBuf,
}

impl AssetPaths {
    pub fn resolve(root: &Path, config: &PathConfig) -> Self {
        AssetPaths {
            icon: root.join(&config.icon),
            feature_graphic: root.join(&config.feature_graphic),
            android_res: root.join(&config.android_res),
        }
    }
}
