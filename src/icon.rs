//! App icon: a shopping cart carrying a checklist on a rounded green square.

use anyhow::Result;
use image::{Rgba, RgbaImage};
use std::path::Path;

use crate::canvas::{Canvas, Rect};
use crate::constants::icon::*;

/// Checklist rows drawn inside the cart body
const CHECKLIST: [(i32, bool); 3] = [(200, true), (245, true), (290, false)];
const CHECK_SIZE: i32 = 26;

// Cart body outline: top edge at y=170 spanning 168..415, bottom at y=345 spanning 198..385
const BODY_TOP: i32 = 170;
const BODY_BOTTOM: i32 = 345;
const BODY_TOP_LEFT: i32 = 168;
const BODY_TOP_RIGHT: i32 = 415;
const BODY_BOTTOM_LEFT: i32 = 198;
const BODY_BOTTOM_RIGHT: i32 = 385;

const WHEEL_Y: i32 = 385;
const WHEEL_RADIUS: i32 = 22;
const HUB_RADIUS: i32 = 9;
const WHEEL_XS: [i32; 2] = [215, 368];

/// Render the 512x512 icon
pub fn render_icon() -> RgbaImage {
    let mut canvas = Canvas::new(SIZE, SIZE);

    draw_background(&mut canvas);
    draw_cart(&mut canvas);
    for (y, checked) in CHECKLIST {
        draw_checklist_row(&mut canvas, y, checked);
    }

    canvas.into_image()
}

/// Render the icon and write it to `path`, replacing any existing file
pub fn generate_icon(path: &Path) -> Result<()> {
    let canvas = Canvas::from(render_icon());
    canvas.save(path)?;
    tracing::info!("Wrote {}x{} icon to {}", SIZE, SIZE, path.display());
    Ok(())
}

fn draw_background(canvas: &mut Canvas) {
    let last = SIZE as i32 - 1;
    canvas.fill_rounded_rect(Rect::new(0, 0, last, last), CORNER_RADIUS, Rgba(BACKGROUND));

    // Darken towards the bottom edge
    let mut gradient = Canvas::new(SIZE, SIZE);
    for y in 0..SIZE {
        let alpha = GRADIENT_MAX_ALPHA * y / SIZE;
        gradient.hline(y as i32, Rgba([0, 0, 0, alpha as u8]));
    }
    canvas.composite_atop(gradient.image());
}

fn draw_cart(canvas: &mut Canvas) {
    let white = Rgba(WHITE);

    // Handle bar with a rounded left end, then the diagonal down to the body
    canvas.line((75, 148), (155, 148), 18, white);
    canvas.fill_ellipse(Rect::new(67, 140, 83, 156), white);
    canvas.line((148, 148), (175, 170), 18, white);

    let body = [
        (BODY_TOP_LEFT as f32, BODY_TOP as f32),
        (BODY_TOP_RIGHT as f32, BODY_TOP as f32),
        (BODY_BOTTOM_RIGHT as f32, BODY_BOTTOM as f32),
        (BODY_BOTTOM_LEFT as f32, BODY_BOTTOM as f32),
    ];
    canvas.fill_polygon(&body, white);
    canvas.fill_rounded_rect(Rect::new(BODY_BOTTOM_LEFT, 320, BODY_BOTTOM_RIGHT, 355), 18, white);
    canvas.fill_rect(Rect::new(BODY_TOP_LEFT, BODY_TOP, BODY_TOP_RIGHT, 190), white);
    canvas.fill_ellipse(Rect::new(400, 162, 425, 185), white);

    for x in WHEEL_XS {
        canvas.fill_ellipse(Rect::around(x, WHEEL_Y, WHEEL_RADIUS), white);
        canvas.fill_ellipse(Rect::around(x, WHEEL_Y, HUB_RADIUS), Rgba(WHEEL_HUB));
    }

    // Legs from the body down to the wheel tops
    for x in WHEEL_XS {
        canvas.line((x, BODY_BOTTOM), (x, WHEEL_Y - WHEEL_RADIUS), 10, white);
    }
}

/// Left and right limits of a checklist row, following the slanted cart sides
fn row_extent(y: i32) -> (i32, i32) {
    let progress = (y - BODY_TOP) as f32 / (BODY_BOTTOM - BODY_TOP) as f32;
    let left = BODY_TOP_LEFT as f32 + (BODY_BOTTOM_LEFT - BODY_TOP_LEFT) as f32 * progress + 28.0;
    let right = BODY_TOP_RIGHT as f32 - (BODY_TOP_RIGHT - BODY_BOTTOM_RIGHT) as f32 * progress - 28.0;
    (left as i32, right as i32)
}

fn draw_checklist_row(canvas: &mut Canvas, y: i32, checked: bool) {
    let (box_x, row_right) = row_extent(y);
    let check_box = Rect::new(box_x, y, box_x + CHECK_SIZE, y + CHECK_SIZE);
    let green = Rgba(GREEN_DARK);

    if checked {
        canvas.fill_rounded_rect(check_box, 5, green);

        let tick = Rgba(WHITE_SOLID);
        canvas.line((box_x + 5, y + 13), (box_x + 10, y + 20), 4, tick);
        canvas.line((box_x + 10, y + 20), (box_x + 22, y + 6), 4, tick);

        // Item text, struck through
        canvas.line((box_x + 38, y + 13), (row_right, y + 13), 7, Rgba(GRAY_LINE));
    } else {
        canvas.outline_rounded_rect(check_box, 5, 3, green);
        canvas.line((box_x + 38, y + 13), (row_right, y + 13), 7, green);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_dimensions() {
        let img = render_icon();
        assert_eq!(img.dimensions(), (SIZE, SIZE));
    }

    #[test]
    fn test_corners_are_transparent() {
        let img = render_icon();
        let last = SIZE - 1;
        for (x, y) in [(0, 0), (last, 0), (0, last), (last, last)] {
            assert_eq!(img.get_pixel(x, y)[3], 0, "corner ({}, {})", x, y);
        }
    }

    #[test]
    fn test_background_darkens_downwards() {
        let img = render_icon();
        let top = img.get_pixel(SIZE / 2, 5);
        let bottom = img.get_pixel(SIZE / 2, SIZE - 5);
        assert_eq!(top[3], 255);
        assert_eq!(bottom[3], 255);
        assert!(bottom[1] < top[1]);
        assert_eq!(*top, Rgba(BACKGROUND));
    }

    #[test]
    fn test_cart_body_is_white() {
        let img = render_icon();
        // Inside the body, right of the checklist lines
        assert_eq!(*img.get_pixel(390, 250), Rgba(WHITE));
        // Handle bar
        assert_eq!(*img.get_pixel(110, 148), Rgba(WHITE));
    }

    #[test]
    fn test_wheel_hubs() {
        let img = render_icon();
        for x in WHEEL_XS {
            assert_eq!(*img.get_pixel(x as u32, WHEEL_Y as u32), Rgba(WHEEL_HUB));
            assert_eq!(*img.get_pixel(x as u32, (WHEEL_Y + 15) as u32), Rgba(WHITE));
        }
    }

    #[test]
    fn test_row_extent_follows_cart_sides() {
        assert_eq!(row_extent(200), (201, 381));
        assert_eq!(row_extent(290), (216, 366));
    }

    #[test]
    fn test_checked_rows_fill_their_box() {
        let img = render_icon();
        let (box_x, _) = row_extent(200);
        // Box corner area away from the tick
        assert_eq!(*img.get_pixel(box_x as u32 + 20, 200 + 22), Rgba(GREEN_DARK));
        // Unchecked row keeps a white centre
        let (box_x, _) = row_extent(290);
        assert_eq!(*img.get_pixel(box_x as u32 + 13, 290 + 13), Rgba(WHITE));
        assert_eq!(*img.get_pixel(box_x as u32 + 1, 290 + 13), Rgba(GREEN_DARK));
    }

    #[test]
    fn test_render_is_deterministic() {
        assert_eq!(render_icon(), render_icon());
    }
}
