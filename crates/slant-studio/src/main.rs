use anyhow::{Context, Result, bail};
use clap::Parser;

use slant_engine::logging::{LoggingConfig, init_logging};
use slant_engine::render::pack_draw_list;
use slant_ui::prelude::*;
use slant_ui::widgets::gradient_view::DEFAULT_ANGLE;

/// Configure an angled gradient view and dump what it hands to the rasterizer.
#[derive(Debug, Parser)]
#[command(name = "slant-studio", version)]
struct Args {
    /// Gradient direction in degrees, counter-clockwise from east.
    #[arg(long, default_value_t = DEFAULT_ANGLE, allow_hyphen_values = true)]
    angle: f32,

    /// Start colour, `#rrggbb` or `#rrggbbaa`. Transparent when omitted.
    #[arg(long)]
    start: Option<String>,

    /// End colour, `#rrggbb` or `#rrggbbaa`. Transparent when omitted.
    #[arg(long)]
    end: Option<String>,

    #[arg(long, default_value_t = 320.0)]
    width: f32,

    #[arg(long, default_value_t = 200.0)]
    height: f32,

    /// Print the vector table over 0..=360 in steps of this many degrees
    /// instead of rendering a single frame.
    #[arg(long)]
    sweep: Option<f32>,

    /// `env_logger` filter, e.g. `debug` or `slant_ui=trace`.
    #[arg(long)]
    log: Option<String>,
}

/// Finest `--sweep` step accepted; keeps the table at 36 001 rows or fewer.
const MIN_SWEEP_STEP: f32 = 0.01;

fn parse_color(literal: Option<&str>, which: &str) -> Result<Option<Color>> {
    literal
        .map(|s| Color::from_hex(s).with_context(|| format!("parsing --{which}")))
        .transpose()
}

fn print_sweep(step: f32) -> Result<()> {
    if !(step.is_finite() && step > 0.0) {
        bail!("--sweep step must be a positive number, got {step}");
    }
    if step < MIN_SWEEP_STEP {
        bail!("--sweep step must be at least {MIN_SWEEP_STEP}°, got {step}");
    }

    println!("{:>8}  {:>17}  {:>17}", "angle", "start", "end");
    let count = (360.0 / step).floor() as u32;
    for i in 0..=count {
        let angle = i as f32 * step;
        let v = gradient_vector_for_angle(angle);
        println!(
            "{angle:>8.2}  ({:>6.4}, {:>6.4})  ({:>6.4}, {:>6.4})",
            v.start.x, v.start.y, v.end.x, v.end.y
        );
    }
    Ok(())
}

fn render_frame(args: &Args) -> Result<()> {
    let viewport = Viewport::new(args.width, args.height);
    if !viewport.is_valid() {
        bail!("viewport must be positive and finite, got {}x{}", args.width, args.height);
    }

    let colors = ColorPair {
        start: parse_color(args.start.as_deref(), "start")?,
        end: parse_color(args.end.as_deref(), "end")?,
    };

    let mut view = GradientView::new();
    view.install(Rect::new(0.0, 0.0, viewport.width, viewport.height));
    let vector = view.configure(colors, args.angle);
    log::info!("configured {}° over {}x{}", args.angle, viewport.width, viewport.height);

    println!("vector   start=({:.4}, {:.4}) end=({:.4}, {:.4})",
        vector.start.x, vector.start.y, vector.end.x, vector.end.y);
    if let Some(layer) = view.layer() {
        println!("layer    {layer:?}");
    }

    let mut scene = UiScene::new();
    let root = Element::new(view);
    let instances = pack_draw_list(scene.frame_ref(&root, viewport));
    if instances.is_empty() {
        log::warn!("nothing to rasterize");
    }
    for inst in &instances {
        println!("instance {inst:?}");
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut logging = LoggingConfig::default();
    if let Some(filter) = &args.log {
        logging = logging.with_filter(filter.clone());
    }
    init_logging(logging);

    match args.sweep {
        Some(step) => print_sweep(step),
        None => render_frame(&args),
    }
}
