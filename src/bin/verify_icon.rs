use anyhow::{Context, Result};
use image::{io::Reader as ImageReader, Rgb};
use lens_icon_gen::{geometry::Corner, IconRenderer, IconStyle, DEFAULT_OUTPUT};

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

    let img = ImageReader::open(&path)
        .with_context(|| format!("Failed to open {path}"))?
        .decode()
        .with_context(|| format!("Failed to decode {path}"))?;

    println!("Checking icon: {}", path);
    println!("Image dimensions: {}x{}", img.width(), img.height());
    println!("Color type: {:?}", img.color());

    let style = IconStyle {
        size: img.width(),
        ..IconStyle::default()
    };
    let renderer = IconRenderer::new(style.clone());
    let lens = renderer.lens();
    let viewfinder = renderer.viewfinder();
    let rgb_img = img.to_rgb8();

    let center = lens.outer.center;
    let aperture_x = center.x + lens.inner.radius - i64::from(lens.aperture_width / 2);
    let mut samples = vec![
        ("gradient top", (0, 0), style.gradient_top),
        ("lens center", (center.x, center.y), style.lens_fill),
        ("aperture ring", (aperture_x, center.y), style.aperture_color),
        (
            "lens outline",
            (center.x + lens.outer.radius, center.y),
            style.lens_outline,
        ),
    ];
    for corner in Corner::ALL {
        let elbow = viewfinder.bracket(corner).elbow();
        samples.push(("viewfinder elbow", (elbow.x, elbow.y), style.corner_color));
    }

    let mut matched = 0;
    for (label, (x, y), expected) in &samples {
        let actual = u32::try_from(*x)
            .ok()
            .zip(u32::try_from(*y).ok())
            .filter(|&(x, y)| x < rgb_img.width() && y < rgb_img.height())
            .map(|(x, y)| *rgb_img.get_pixel(x, y));

        let ok = actual.is_some_and(|pixel| close_to(pixel, *expected));
        if ok {
            matched += 1;
        }
        println!(
            "  {} {label} at ({x}, {y}): {:?} (expected {:?})",
            if ok { "✓" } else { "✗" },
            actual.map(|p| p.0),
            expected.0
        );
    }

    let bottom = rgb_img.get_pixel(0, img.height() - 1);
    println!("  bottom row: {:?} (gradient ends at {:?})", bottom.0, style.gradient_bottom.0);

    println!("\n{} out of {} samples match the default style", matched, samples.len());
    if matched == samples.len() {
        println!("✓ Icon matches the default style!");
    } else {
        println!("⚠ Icon differs from the default style");
    }

    Ok(())
}

fn close_to(actual: Rgb<u8>, expected: Rgb<u8>) -> bool {
    actual
        .0
        .iter()
        .zip(expected.0.iter())
        .all(|(a, e)| a.abs_diff(*e) <= 1)
}
