use crate::error::IconError;
use crate::geometry::{Lens, Viewfinder};
use crate::raster::{self, Canvas};
use crate::style::IconStyle;
use anyhow::Result;
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder,
};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where the icon lands when no output path is given.
pub const DEFAULT_OUTPUT: &str = "FaceRecognitionClient/Assets.xcassets/AppIcon.appiconset/AppIcon.png";

#[derive(Debug, Clone)]
pub struct Args {
    pub output: PathBuf,
    pub style: IconStyle,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            style: IconStyle::default(),
        }
    }
}

/// Paints the app icon: gradient background, camera lens and viewfinder corners.
#[derive(Debug, Clone)]
pub struct IconRenderer {
    style: IconStyle,
}

impl IconRenderer {
    pub fn new(style: IconStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &IconStyle {
        &self.style
    }

    pub fn lens(&self) -> Lens {
        Lens::for_canvas(self.style.size, self.style.aperture_width)
    }

    pub fn viewfinder(&self) -> Viewfinder {
        Viewfinder::around(
            &self.lens(),
            self.style.corner_margin,
            self.style.corner_length,
            self.style.corner_width,
        )
    }

    /// Run every drawing step and return the finished canvas.
    pub fn render(&self) -> Result<Canvas, IconError> {
        let mut canvas = self.paint_background()?;
        self.paint_lens(&mut canvas);
        self.paint_viewfinder(&mut canvas);
        Ok(canvas)
    }

    pub fn paint_background(&self) -> Result<Canvas, IconError> {
        let size = self.style.size;
        debug!(size, "painting gradient background");
        raster::vertical_gradient(
            size,
            size,
            self.style.gradient_top,
            self.style.gradient_bottom,
        )
    }

    /// Outer disc with a 1px outline, then the aperture ring on top.
    pub fn paint_lens(&self, canvas: &mut Canvas) {
        let lens = self.lens();
        debug!(
            outer = lens.outer.radius,
            inner = lens.inner.radius,
            "painting lens"
        );

        raster::fill_circle(canvas, &lens.outer, self.style.lens_fill);
        raster::stroke_circle(canvas, &lens.outer, 1, self.style.lens_outline);
        raster::stroke_circle(
            canvas,
            &lens.inner,
            lens.aperture_width,
            self.style.aperture_color,
        );
    }

    pub fn paint_viewfinder(&self, canvas: &mut Canvas) {
        let viewfinder = self.viewfinder();
        debug!(offset = viewfinder.offset, "painting viewfinder corners");

        for (corner, bracket) in viewfinder.brackets() {
            debug!(?corner, elbow = ?bracket.elbow(), "bracket");
            for segment in bracket.segments() {
                raster::stroke_segment(canvas, &segment, self.style.corner_color);
            }
        }
    }
}

/// Render the icon and write it to `args.output`, reporting progress on stdout.
pub fn generate_icon(args: &Args) -> Result<()> {
    let renderer = IconRenderer::new(args.style.clone());
    let size = renderer.style().size;

    println!("Creating gradient background...");
    let mut canvas = renderer.paint_background()?;

    println!("Drawing camera lens circle...");
    renderer.paint_lens(&mut canvas);

    println!("Adding camera viewfinder corners...");
    renderer.paint_viewfinder(&mut canvas);

    println!("Saving icon to {}...", args.output.display());
    save_png(&canvas, &args.output)?;

    println!("✅ App icon created successfully!");
    println!("   Size: {size}x{size}");
    println!("   Location: {}", args.output.display());
    println!("\nNext steps:");
    println!("1. Open the asset catalog and verify the icon appears");
    println!("2. Build the app to see it on a simulator or device");
    println!("3. Optionally generate the remaining sizes with an icon tool");
    Ok(())
}

/// Encode the canvas as an RGB PNG in memory.
///
/// No timestamps or other metadata are written, so equal canvases always
/// produce equal bytes.
pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>, IconError> {
    let mut buf = Vec::new();
    write_png(canvas, &mut buf)?;
    Ok(buf)
}

/// Write the canvas as a PNG file, replacing any existing file.
///
/// The parent directory must already exist.
pub fn save_png(canvas: &Canvas, path: &Path) -> Result<(), IconError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.is_dir() {
            return Err(IconError::MissingOutputDir(parent.to_path_buf()));
        }
    }

    let encoded = encode_png(canvas)?;
    std::fs::write(path, &encoded).map_err(|source| IconError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), bytes = encoded.len(), "icon written");
    Ok(())
}

// Encode image data as PNG with compression
fn write_png<W: std::io::Write>(canvas: &Canvas, w: W) -> Result<(), IconError> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder
        .write_image(
            canvas.as_raw(),
            canvas.width(),
            canvas.height(),
            ColorType::Rgb8,
        )
        .map_err(IconError::from_encoder)
}
