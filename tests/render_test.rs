use image::{ImageBuffer, Rgb};
use lens_icon_gen::{
    encode_png,
    geometry::Corner,
    raster::{gradient_rows, stroke_segment, vertical_gradient},
    Canvas, IconRenderer, IconStyle,
};

const BLUE: Rgb<u8> = Rgb([0, 122, 255]);
const PURPLE: Rgb<u8> = Rgb([88, 86, 214]);

#[test]
fn test_gradient_endpoints() {
    for height in [256, 1000, 1024] {
        let canvas = vertical_gradient(4, height, BLUE, PURPLE).unwrap();
        assert_eq!(*canvas.get_pixel(0, 0), BLUE);

        let last = canvas.get_pixel(3, height - 1);
        for channel in 0..3 {
            assert!(
                last[channel].abs_diff(PURPLE[channel]) <= 1,
                "height {height}: channel {channel} ended at {} instead of {}",
                last[channel],
                PURPLE[channel]
            );
        }
    }
}

#[test]
fn test_gradient_is_monotonic_per_channel() {
    let pairs = [
        (BLUE, PURPLE),
        (PURPLE, BLUE),
        (Rgb([0, 0, 0]), Rgb([255, 255, 255])),
        (Rgb([10, 10, 10]), Rgb([10, 10, 10])),
    ];

    for (top, bottom) in pairs {
        let rows = gradient_rows(1024, top, bottom).unwrap();
        for window in rows.windows(2) {
            for channel in 0..3 {
                let (prev, next) = (window[0][channel], window[1][channel]);
                if top[channel] <= bottom[channel] {
                    assert!(next >= prev, "channel {channel} decreased: {prev} -> {next}");
                } else {
                    assert!(next <= prev, "channel {channel} increased: {prev} -> {next}");
                }
            }
        }
    }
}

#[test]
fn test_viewfinder_brackets_are_mirror_images_in_pixels() {
    let renderer = IconRenderer::new(IconStyle::default());
    let viewfinder = renderer.viewfinder();
    let (cx, cy) = (viewfinder.center.x, viewfinder.center.y);
    let white = Rgb([255, 255, 255]);

    let mut canvas: Canvas = ImageBuffer::from_pixel(1024, 1024, Rgb([0, 0, 0]));
    renderer.paint_viewfinder(&mut canvas);

    let mut painted = 0;
    for (x, y, pixel) in canvas.enumerate_pixels() {
        if *pixel != white {
            continue;
        }
        painted += 1;

        let mirror_x = (2 * cx - i64::from(x)) as u32;
        let mirror_y = (2 * cy - i64::from(y)) as u32;
        assert_eq!(*canvas.get_pixel(mirror_x, y), white, "({x}, {y}) mirrored in x");
        assert_eq!(*canvas.get_pixel(x, mirror_y), white, "({x}, {y}) mirrored in y");
    }
    assert!(painted > 0, "viewfinder should paint something");
}

#[test]
fn test_each_bracket_is_a_reflection_of_top_left() {
    let viewfinder = IconRenderer::new(IconStyle::default()).viewfinder();
    let top_left = viewfinder.bracket(Corner::TopLeft);
    let (cx, cy) = (viewfinder.center.x, viewfinder.center.y);

    assert_eq!(top_left.reflect_x(cx), viewfinder.bracket(Corner::TopRight));
    assert_eq!(top_left.reflect_y(cy), viewfinder.bracket(Corner::BottomLeft));
    assert_eq!(
        top_left.reflect_x(cx).reflect_y(cy),
        viewfinder.bracket(Corner::BottomRight)
    );
}

#[test]
fn test_lens_fill_is_opaque_on_rgb_canvas() {
    let canvas = IconRenderer::new(IconStyle::default()).render().unwrap();
    let png = encode_png(&canvas).unwrap();
    let decoded = image::load_from_memory(&png).unwrap();

    assert_eq!(decoded.color(), image::ColorType::Rgb8);
    assert_eq!(*decoded.to_rgb8().get_pixel(512, 512), Rgb([255, 255, 255]));
}

#[test]
fn test_encoding_is_deterministic() {
    let renderer = IconRenderer::new(IconStyle::default());
    let first = encode_png(&renderer.render().unwrap()).unwrap();
    let second = encode_png(&renderer.render().unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_tiny_icons_clip_instead_of_failing() {
    for size in [1, 2, 8, 16] {
        let style = IconStyle {
            size,
            ..IconStyle::default()
        };
        let canvas = IconRenderer::new(style).render().unwrap();
        assert_eq!(canvas.dimensions(), (size, size));
    }
}

#[test]
fn test_stroke_outside_canvas_is_ignored() {
    let mut canvas: Canvas = ImageBuffer::from_pixel(8, 8, Rgb([1, 2, 3]));
    let viewfinder = IconRenderer::new(IconStyle::default()).viewfinder();
    for segment in viewfinder.bracket(Corner::BottomRight).segments() {
        stroke_segment(&mut canvas, &segment, Rgb([255, 255, 255]));
    }
    assert!(canvas.pixels().all(|p| *p == Rgb([1, 2, 3])));
}

#[test]
fn test_extreme_stroke_widths_do_not_panic() {
    let style = IconStyle {
        size: 128,
        aperture_width: u32::MAX,
        corner_width: u32::MAX,
        corner_length: u32::MAX,
        corner_margin: u32::MAX,
        ..IconStyle::default()
    };
    let canvas = IconRenderer::new(style).render().unwrap();
    assert_eq!(canvas.dimensions(), (128, 128));
}
