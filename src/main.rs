use anyhow::{Context, Result};
use clap::Parser;
use lens_icon_gen::{icon_gen, raster, style::parse_color, IconError, IconStyle, DEFAULT_OUTPUT};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "lens-icon-gen",
    about = "Render the camera-lens app icon as a PNG"
)]
struct Args {
    /// Where to write the icon. The parent directory must exist.
    #[clap(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// JSON style file replacing the built-in colors and dimensions
    #[clap(long, value_name = "FILE")]
    style: Option<PathBuf>,

    /// Side length of the icon in pixels
    #[clap(long, value_name = "PX")]
    size: Option<u32>,

    /// Gradient color at the top edge (CSS color format)
    #[clap(long, value_name = "COLOR")]
    top_color: Option<String>,

    /// Gradient color at the bottom edge (CSS color format)
    #[clap(long, value_name = "COLOR")]
    bottom_color: Option<String>,

    /// Log drawing details to stderr
    #[clap(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let log_level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    // Failures are reported, never turned into a panic or a distinct exit code.
    if let Err(err) = run(args) {
        report_failure(&err);
    }
}

fn run(args: Args) -> Result<()> {
    let mut style = match &args.style {
        Some(path) => IconStyle::from_path(path)
            .with_context(|| format!("Failed to load style from {}", path.display()))?,
        None => IconStyle::default(),
    };

    if let Some(size) = args.size {
        style.size = raster::check_size(size).context("Invalid --size")?;
    }
    if let Some(color) = &args.top_color {
        style.gradient_top = parse_color(color).context("Invalid --top-color")?;
    }
    if let Some(color) = &args.bottom_color {
        style.gradient_bottom = parse_color(color).context("Invalid --bottom-color")?;
    }

    icon_gen::generate_icon(&icon_gen::Args {
        output: args.output,
        style,
    })
}

fn report_failure(err: &anyhow::Error) {
    let missing_dependency = err
        .chain()
        .filter_map(|cause| cause.downcast_ref::<IconError>())
        .any(IconError::is_missing_dependency);

    if missing_dependency {
        println!("❌ Error: PNG support is not compiled into the image library");
        println!("\nTo fix it, enable the `png` feature of the `image` dependency:");
        println!("  image = {{ version = \"0.24\", features = [\"png\"] }}");
        println!("\nThen rebuild:");
        println!("  cargo build --release");
    } else {
        println!("❌ Error creating icon: {err}");
        println!("{err:?}");
    }
}
