use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "inkstack", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a JSON command script and write the composite as a PNG.
    Render(RenderArgs),
    /// Replay the built-in draw / erase / undo demo and write the composite as a PNG.
    Demo(DemoArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input script JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Override the script's smoothing mode.
    #[arg(long, value_enum)]
    smoothing: Option<SmoothingChoice>,

    /// Print the layer stack after replay.
    #[arg(long)]
    dump_layers: bool,
}

#[derive(Parser, Debug)]
struct DemoArgs {
    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Number of demo button presses to replay.
    #[arg(long, default_value_t = 4)]
    steps: usize,

    /// Optional background image revealed by erasing.
    #[arg(long)]
    background: Option<PathBuf>,

    /// Smoothing mode for the demo strokes.
    #[arg(long, value_enum)]
    smoothing: Option<SmoothingChoice>,

    /// Print the layer stack after replay.
    #[arg(long)]
    dump_layers: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SmoothingChoice {
    Polyline,
    Quadratic,
}

impl From<SmoothingChoice> for inkstack::SmoothingMode {
    fn from(c: SmoothingChoice) -> Self {
        match c {
            SmoothingChoice::Polyline => inkstack::SmoothingMode::Polyline,
            SmoothingChoice::Quadratic => inkstack::SmoothingMode::QuadraticMidpoint,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Demo(args) => cmd_demo(args),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut script = inkstack::Script::open(&args.in_path)
        .with_context(|| format!("load script '{}'", args.in_path.display()))?;
    script.config = script.config.with_env_overrides();
    if let Some(s) = args.smoothing {
        script.config.smoothing = s.into();
    }

    let base_dir = args.in_path.parent().unwrap_or_else(|| Path::new("."));
    let engine = inkstack::run_script(&script, base_dir)?;
    finish(engine, &args.out, args.dump_layers)
}

fn cmd_demo(args: DemoArgs) -> anyhow::Result<()> {
    let mut script = inkstack::demo_script(args.steps);
    script.config = script.config.with_env_overrides();
    if let Some(s) = args.smoothing {
        script.config.smoothing = s.into();
    }

    let cwd = Path::new(".");
    let mut engine = inkstack::Engine::new(script.config.clone())?;
    if let Some(bg) = &args.background {
        let image = inkstack::Raster::open(bg)
            .with_context(|| format!("load background '{}'", bg.display()))?;
        engine.set_background_image(Some(image));
    }
    for cmd in &script.commands {
        inkstack::apply_command(&mut engine, cmd, cwd)?;
    }
    finish(engine, &args.out, args.dump_layers)
}

fn finish(mut engine: inkstack::Engine, out: &Path, dump_layers: bool) -> anyhow::Result<()> {
    if dump_layers {
        dump_stack(engine.stack());
    }

    let raster = engine.render()?;

    if let Some(parent) = out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    raster.save_png(out)?;

    eprintln!("wrote {}", out.display());
    Ok(())
}

fn dump_stack(stack: &inkstack::LayerStack) {
    eprintln!("layers ({}):", stack.len());
    for (i, entry) in stack.layers().enumerate() {
        match entry {
            inkstack::StackEntry::Background(bg) => match &bg.image {
                Some(img) => eprintln!("  {i}: background {}x{}", img.width, img.height),
                None => eprintln!("  {i}: background (empty)"),
            },
            inkstack::StackEntry::Stroke(s) => eprintln!(
                "  {i}: stroke rgba({}, {}, {}, {}) width {} opacity {} ({} path elements)",
                s.color.r,
                s.color.g,
                s.color.b,
                s.color.a,
                s.stroke_width,
                s.opacity,
                s.path.elements().len()
            ),
            inkstack::StackEntry::Erase(e) => eprintln!(
                "  {i}: erase width {} opacity {} reveals {}x{} ({} path elements)",
                e.stroke_width,
                e.opacity,
                e.revealed.width,
                e.revealed.height,
                e.mask.elements().len()
            ),
        }
    }
}
