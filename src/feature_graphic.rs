//! Play Store feature graphic: green banner with the app icon and tagline text.

use anyhow::{Context, Result};
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use std::path::Path;

use crate::canvas::{Canvas, Rect};
use crate::config::FontConfig;
use crate::constants::feature_graphic::*;
use crate::text::Typeface;

const TEXT_X: i32 = 80;
const TITLE_Y: i32 = 130;
const TITLE_LINE_GAP: i32 = 70;
const DIVIDER_Y: i32 = TITLE_Y + 160;
const DIVIDER_LENGTH: i32 = 80;
const DIVIDER_WIDTH: u32 = 3;

/// Typefaces for the three text roles
pub struct Fonts {
    pub title: Typeface,
    pub subtitle: Typeface,
    pub tagline: Typeface,
}

impl Fonts {
    /// Pick the first usable file for each role from the configured candidates
    pub fn resolve(config: &FontConfig) -> Self {
        let fonts = Fonts {
            title: Typeface::resolve(&config.bold, TITLE_SIZE),
            subtitle: Typeface::resolve(&config.regular, SUBTITLE_SIZE),
            tagline: Typeface::resolve(&config.light, TAGLINE_SIZE),
        };

        for (role, face) in [("title", &fonts.title), ("subtitle", &fonts.subtitle), ("tagline", &fonts.tagline)] {
            match face.source() {
                Some(path) => tracing::debug!("{} font: {} at {}px", role, path.display(), face.size()),
                None => tracing::debug!("{} font: built-in typeface at {}px", role, face.size()),
            }
        }
        fonts
    }

    /// Built-in typeface for every role
    pub fn builtin() -> Self {
        Fonts {
            title: Typeface::builtin(TITLE_SIZE),
            subtitle: Typeface::builtin(SUBTITLE_SIZE),
            tagline: Typeface::builtin(TAGLINE_SIZE),
        }
    }
}

/// Top-left corner of the icon on the banner
pub fn icon_origin() -> (i32, i32) {
    let x = WIDTH - ICON_SIZE - ICON_RIGHT_MARGIN;
    let y = (HEIGHT - ICON_SIZE) / 2;
    (x as i32, y as i32)
}

/// Load the app icon if it has been generated; a missing file is not an error
pub fn load_icon(path: &Path) -> Result<Option<RgbaImage>> {
    if !path.exists() {
        tracing::debug!("Icon {} not found, banner will be drawn without it", path.display());
        return Ok(None);
    }

    let icon = image::open(path)
        .with_context(|| format!("Failed to decode icon {}", path.display()))?
        .to_rgba8();
    Ok(Some(icon))
}

/// Render the 1024x500 banner
pub fn render_feature_graphic(icon: Option<&RgbaImage>, fonts: &Fonts) -> Result<RgbaImage> {
    let mut canvas = Canvas::new(WIDTH, HEIGHT);

    draw_gradient(&mut canvas);
    canvas.composite(&glow_layer());

    if let Some(icon) = icon {
        place_icon(&mut canvas, icon);
    }

    draw_text(&mut canvas, fonts)?;

    Ok(canvas.into_image())
}

/// Render the banner and write it to `output`, compositing the icon at `icon_path` when present
pub fn generate_feature_graphic(icon_path: &Path, output: &Path, fonts: &FontConfig) -> Result<()> {
    let icon = load_icon(icon_path)?;
    let fonts = Fonts::resolve(fonts);
    let banner = render_feature_graphic(icon.as_ref(), &fonts)?;

    Canvas::from(banner).save(output)?;
    tracing::info!("Wrote {}x{} feature graphic to {}", WIDTH, HEIGHT, output.display());
    Ok(())
}

fn draw_gradient(canvas: &mut Canvas) {
    for y in 0..HEIGHT {
        let progress = y as f32 / HEIGHT as f32;
        let r = (85.0 - 30.0 * progress) as u8;
        let g = (195.0 - 50.0 * progress) as u8;
        let b = (90.0 - 30.0 * progress) as u8;
        canvas.hline(y as i32, Rgba([r, g, b, 255]));
    }
}

/// White glow centred a third of the way across, fading out at GLOW_RADIUS.
/// Each pixel takes the alpha of the smallest whole radius that reaches it.
fn glow_layer() -> RgbaImage {
    let cx = (WIDTH / 3) as f32;
    let cy = (HEIGHT / 2) as f32;
    let max_radius = GLOW_RADIUS as f32;

    RgbaImage::from_fn(WIDTH, HEIGHT, |x, y| {
        let dx = x as f32 - cx;
        let dy = y as f32 - cy;
        let radius = (dx * dx + dy * dy).sqrt().ceil().max(1.0);
        if radius > max_radius {
            return Rgba([0, 0, 0, 0]);
        }
        let alpha = (GLOW_MAX_ALPHA * (1.0 - radius / max_radius)) as u8;
        Rgba([255, 255, 255, alpha])
    })
}

fn place_icon(canvas: &mut Canvas, icon: &RgbaImage) {
    let icon = imageops::resize(icon, ICON_SIZE, ICON_SIZE, FilterType::Lanczos3);
    let (x, y) = icon_origin();
    let extent = ICON_SIZE as i32;

    let mut shadow = Canvas::new(WIDTH, HEIGHT);
    let shadow_box = Rect::new(x, y, x + extent, y + extent).offset(SHADOW_OFFSET, SHADOW_OFFSET);
    shadow.fill_rounded_rect(shadow_box, SHADOW_RADIUS, Rgba(SHADOW));
    canvas.composite(shadow.image());

    canvas.paste(&icon, x as i64, y as i64);
}

fn draw_text(canvas: &mut Canvas, fonts: &Fonts) -> Result<()> {
    let white = Rgba(WHITE);

    fonts.title.draw_text(canvas, TEXT_X, TITLE_Y, TITLE, white)?;
    fonts.title.draw_text(canvas, TEXT_X, TITLE_Y + TITLE_LINE_GAP, TITLE_SECOND_LINE, white)?;

    let title_width = fonts.title.text_width(TITLE_SECOND_LINE)?;
    let (icon_x, _) = icon_origin();
    if TEXT_X + title_width as i32 > icon_x {
        tracing::warn!("Title is {}px wide and runs under the icon", title_width);
    }

    // Composited so the banner stays opaque under the translucent divider
    let mut divider = Canvas::new(WIDTH, HEIGHT);
    divider.line(
        (TEXT_X, DIVIDER_Y),
        (TEXT_X + DIVIDER_LENGTH, DIVIDER_Y),
        DIVIDER_WIDTH,
        Rgba(DIVIDER),
    );
    canvas.composite(divider.image());

    fonts.subtitle.draw_text(canvas, TEXT_X, DIVIDER_Y + 20, SUBTITLE, Rgba(SUBTITLE_INK))?;
    fonts.tagline.draw_text(canvas, TEXT_X, DIVIDER_Y + 60, TAGLINE, Rgba(TAGLINE_INK))?;

    Ok(())
}
