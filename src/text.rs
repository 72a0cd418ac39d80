//! Typefaces for banner text.
//!
//! Outline fonts are parsed and rasterized with swash. When none of the
//! candidate font files is usable the built-in bitmap typeface stands in.

use anyhow::{Context, Result};
use image::Rgba;
use std::fs;
use std::path::{Path, PathBuf};
use swash::scale::{Render, ScaleContext, Source};
use swash::zeno::Format;
use swash::FontRef;

use crate::bitmap_font;
use crate::canvas::Canvas;

/// Pixel size one built-in cell stands in for
const BUILTIN_CELL_PX: f32 = 10.0;

pub struct Typeface {
    kind: Kind,
    size: f32,
}

enum Kind {
    Outline { data: Vec<u8>, source: PathBuf },
    Builtin { scale: u32 },
}

impl Typeface {
    /// Parse an OpenType/TrueType file for drawing at `size` pixels
    pub fn load(path: &Path, size: f32) -> Result<Self> {
        let data = fs::read(path)
            .with_context(|| format!("Failed to read font {}", path.display()))?;
        FontRef::from_index(&data, 0)
            .with_context(|| format!("Not a usable font file: {}", path.display()))?;

        Ok(Typeface {
            kind: Kind::Outline { data, source: path.to_path_buf() },
            size,
        })
    }

    /// Built-in bitmap typeface scaled to roughly `size` pixels
    pub fn builtin(size: f32) -> Self {
        let scale = (size / BUILTIN_CELL_PX).round().max(1.0) as u32;
        Typeface {
            kind: Kind::Builtin { scale },
            size,
        }
    }

    /// First candidate that exists and parses, else the built-in typeface
    pub fn resolve(candidates: &[PathBuf], size: f32) -> Self {
        for path in candidates {
            if !path.exists() {
                tracing::debug!("Font not found: {}", path.display());
                continue;
            }
            match Typeface::load(path, size) {
                Ok(face) => return face,
                Err(e) => tracing::warn!("Skipping font: {:#}", e),
            }
        }

        Typeface::builtin(size)
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self.kind, Kind::Builtin { .. })
    }

    /// Font file this typeface was loaded from
    pub fn source(&self) -> Option<&Path> {
        match &self.kind {
            Kind::Outline { source, .. } => Some(source.as_path()),
            Kind::Builtin { .. } => None,
        }
    }

    /// Advance width of `text` in pixels
    pub fn text_width(&self, text: &str) -> Result<u32> {
        match &self.kind {
            Kind::Outline { data, .. } => {
                let font = font_ref(data)?;
                let glyph_metrics = font.glyph_metrics(&[]).scale(self.size);
                let charmap = font.charmap();
                let width: f32 = text
                    .chars()
                    .map(|ch| glyph_metrics.advance_width(charmap.map(ch)))
                    .sum();
                Ok(width.round() as u32)
            }
            Kind::Builtin { scale } => {
                let count = text.chars().count() as u32;
                Ok(count * bitmap_font::ADVANCE * scale)
            }
        }
    }

    /// Draw `text` with its top-left at (x, y), where y is the ascender line
    pub fn draw_text(&self, canvas: &mut Canvas, x: i32, y: i32, text: &str, color: Rgba<u8>) -> Result<()> {
        match &self.kind {
            Kind::Outline { data, .. } => self.draw_outline(data, canvas, x, y, text, color),
            Kind::Builtin { scale } => {
                draw_builtin(*scale, canvas, x, y, text, color);
                Ok(())
            }
        }
    }

    fn draw_outline(&self, data: &[u8], canvas: &mut Canvas, x: i32, y: i32, text: &str, color: Rgba<u8>) -> Result<()> {
        let font = font_ref(data)?;
        let metrics = font.metrics(&[]).scale(self.size);
        let glyph_metrics = font.glyph_metrics(&[]).scale(self.size);
        let charmap = font.charmap();
        let baseline = (y as f32 + metrics.ascent).round() as i32;

        let mut context = ScaleContext::new();
        let mut scaler = context.builder(font).size(self.size).hint(false).build();
        let mut render = Render::new(&[Source::Outline]);
        render.format(Format::Alpha);

        let mut pen = x as f32;
        for ch in text.chars() {
            let glyph_id = charmap.map(ch);
            let advance = glyph_metrics.advance_width(glyph_id);

            // Glyph 0 is .notdef; leave a gap instead of drawing a box
            if glyph_id != 0 {
                if let Some(glyph) = render.render(&mut scaler, glyph_id) {
                    let left = pen.round() as i32 + glyph.placement.left;
                    let top = baseline - glyph.placement.top;
                    let width = glyph.placement.width as usize;
                    for (i, coverage) in glyph.data.iter().enumerate() {
                        if *coverage == 0 || width == 0 {
                            continue;
                        }
                        let col = (i % width) as i32;
                        let row = (i / width) as i32;
                        canvas.blend(left + col, top + row, color, *coverage);
                    }
                }
            }

            pen += advance;
        }

        Ok(())
    }
}

fn font_ref(data: &[u8]) -> Result<FontRef<'_>> {
    FontRef::from_index(data, 0).context("Font data failed to parse")
}

fn draw_builtin(scale: u32, canvas: &mut Canvas, x: i32, y: i32, text: &str, color: Rgba<u8>) {
    let scale = scale as i32;
    let mut pen = x;
    for ch in text.chars() {
        let columns = bitmap_font::glyph(ch);
        for col in 0..bitmap_font::GLYPH_WIDTH {
            for row in 0..bitmap_font::GLYPH_HEIGHT {
                if !bitmap_font::is_set(&columns, col, row) {
                    continue;
                }
                let cell_x = pen + col as i32 * scale;
                let cell_y = y + row as i32 * scale;
                for dy in 0..scale {
                    for dx in 0..scale {
                        canvas.blend(cell_x + dx, cell_y + dy, color, u8::MAX);
                    }
                }
            }
        }
        pen += bitmap_font::ADVANCE as i32 * scale;
    }
}
