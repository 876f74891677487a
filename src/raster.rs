//! Drawing primitives on an RGB canvas.
//!
//! All primitives clip to the canvas, so geometry that extends past the edges
//! is drawn partially (or not at all) instead of failing.

use crate::error::IconError;
use crate::geometry::{Circle, Point, Segment};
use image::{ImageBuffer, Rgb, RgbImage};

pub type Canvas = RgbImage;

/// Largest side length a canvas may have (a 8192x8192 RGB canvas is 192 MiB).
pub const MAX_SIZE: u32 = 8192;

/// Check that a square canvas of `size` pixels can be allocated.
pub fn check_size(size: u32) -> Result<u32, IconError> {
    if size == 0 {
        return Err(IconError::EmptyCanvas {
            width: size,
            height: size,
        });
    }
    if size > MAX_SIZE {
        return Err(IconError::CanvasTooLarge {
            size,
            max: MAX_SIZE,
        });
    }
    Ok(size)
}

/// Blend one channel: `start + t * (end - start)`, rounded to nearest.
pub fn lerp_channel(start: u8, end: u8, t: f64) -> u8 {
    let start = f64::from(start);
    let end = f64::from(end);
    (start + t * (end - start)).round().clamp(0.0, 255.0) as u8
}

/// Color of every row of a vertical gradient of the given height.
///
/// Row `y` uses `t = y / height`, so the first row is exactly `top` and the
/// last row lands within one step of `bottom`.
pub fn gradient_rows(
    height: u32,
    top: Rgb<u8>,
    bottom: Rgb<u8>,
) -> Result<Vec<Rgb<u8>>, IconError> {
    if height == 0 {
        return Err(IconError::EmptyCanvas { width: 0, height });
    }

    Ok((0..height)
        .map(|y| {
            let t = f64::from(y) / f64::from(height);
            Rgb([
                lerp_channel(top[0], bottom[0], t),
                lerp_channel(top[1], bottom[1], t),
                lerp_channel(top[2], bottom[2], t),
            ])
        })
        .collect())
}

/// Create a canvas filled with a top-to-bottom linear gradient.
pub fn vertical_gradient(
    width: u32,
    height: u32,
    top: Rgb<u8>,
    bottom: Rgb<u8>,
) -> Result<Canvas, IconError> {
    if width == 0 || height == 0 {
        return Err(IconError::EmptyCanvas { width, height });
    }
    check_size(width.max(height))?;

    let rows = gradient_rows(height, top, bottom)?;
    Ok(ImageBuffer::from_fn(width, height, |_, y| rows[y as usize]))
}

/// Fill a disc, including its edge pixels.
pub fn fill_circle(canvas: &mut Canvas, circle: &Circle, color: Rgb<u8>) {
    let radius = circle.radius;
    let min = Point::new(circle.center.x - radius, circle.center.y - radius);
    let max = Point::new(circle.center.x + radius, circle.center.y + radius);
    paint_where(canvas, min, max, color, |x, y| circle.contains(x, y));
}

/// Stroke a circle's outline, growing inward from its radius.
pub fn stroke_circle(canvas: &mut Canvas, circle: &Circle, width: u32, color: Rgb<u8>) {
    if width == 0 {
        return;
    }
    let radius = circle.radius;
    let min = Point::new(circle.center.x - radius, circle.center.y - radius);
    let max = Point::new(circle.center.x + radius, circle.center.y + radius);
    paint_where(canvas, min, max, color, |x, y| circle.on_stroke(x, y, width));
}

pub fn stroke_segment(canvas: &mut Canvas, segment: &Segment, color: Rgb<u8>) {
    if segment.width == 0 {
        return;
    }
    let (min, max) = segment.bounds();
    paint_where(canvas, min, max, color, |x, y| segment.covers(x, y));
}

/// Paint every pixel inside the inclusive box `min..=max` that passes `hit`.
fn paint_where<F>(canvas: &mut Canvas, min: Point, max: Point, color: Rgb<u8>, hit: F)
where
    F: Fn(i64, i64) -> bool,
{
    let Some((x_range, y_range)) = clip(canvas, min, max) else {
        return;
    };

    for y in y_range {
        for x in x_range.clone() {
            if hit(i64::from(x), i64::from(y)) {
                canvas.put_pixel(x, y, color);
            }
        }
    }
}

/// Intersect an inclusive box with the canvas, returning pixel ranges.
fn clip(
    canvas: &Canvas,
    min: Point,
    max: Point,
) -> Option<(std::ops::Range<u32>, std::ops::Range<u32>)> {
    let width = i64::from(canvas.width());
    let height = i64::from(canvas.height());

    let x0 = min.x.max(0);
    let y0 = min.y.max(0);
    let x1 = (max.x + 1).min(width);
    let y1 = (max.y + 1).min(height);

    if x0 >= x1 || y0 >= y1 {
        return None;
    }

    Some((x0 as u32..x1 as u32, y0 as u32..y1 as u32))
}
