use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "wisp", version, about = "Paint a procedural sky with wispy clouds")]
struct Cli {
    /// More log output (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render an image and save it as PNG.
    Render(RenderArgs),
    /// Print the resolved configuration as JSON.
    Config(ConfigArgs),
}

#[derive(Args, Debug)]
struct ConfigSource {
    /// Built-in look to start from.
    #[arg(long, value_enum, default_value_t = PresetChoice::Layered)]
    preset: PresetChoice,

    /// JSON configuration file; replaces the preset.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Output height in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// Ratio between output and working resolution.
    #[arg(long)]
    scale: Option<u32>,

    /// Upscale kernel.
    #[arg(long, value_enum)]
    kernel: Option<KernelChoice>,

    /// Gaussian blur sigma after upscaling.
    #[arg(long, conflicts_with = "no_blur")]
    blur: Option<f32>,

    /// Skip the post-upscale blur.
    #[arg(long)]
    no_blur: bool,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    source: ConfigSource,

    /// Random seed; drawn from entropy (and logged) when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Folder for numbered output files.
    #[arg(long, default_value = "clouds")]
    out_dir: PathBuf,

    /// File name prefix for numbered output files.
    #[arg(long, default_value = "cloud")]
    stem: String,

    /// Exact output path; overrides `--out-dir`/`--stem` and overwrites.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ConfigArgs {
    #[command(flatten)]
    source: ConfigSource,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PresetChoice {
    Retro,
    Layered,
    Billow,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KernelChoice {
    Nearest,
    Bilinear,
    Bicubic,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Config(args) => cmd_config(args),
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_config(src: &ConfigSource) -> anyhow::Result<wisp::SkyConfig> {
    let mut cfg = match &src.config {
        Some(path) => wisp::SkyConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => wisp::SkyConfig::preset(match src.preset {
            PresetChoice::Retro => wisp::Preset::Retro,
            PresetChoice::Layered => wisp::Preset::Layered,
            PresetChoice::Billow => wisp::Preset::Billow,
        }),
    };

    if let Some(w) = src.width {
        cfg.width = w;
    }
    if let Some(h) = src.height {
        cfg.height = h;
    }
    if let Some(s) = src.scale {
        cfg.scale_factor = s;
    }
    if let Some(k) = src.kernel {
        cfg.kernel = match k {
            KernelChoice::Nearest => wisp::UpscaleKernel::Nearest,
            KernelChoice::Bilinear => wisp::UpscaleKernel::Bilinear,
            KernelChoice::Bicubic => wisp::UpscaleKernel::Bicubic,
        };
    }
    if src.no_blur {
        cfg.blur_sigma = None;
    } else if let Some(sigma) = src.blur {
        cfg.blur_sigma = Some(sigma);
    }

    cfg.validate().context("invalid configuration")?;
    Ok(cfg)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let cfg = resolve_config(&args.source)?;
    let seed = args.seed.unwrap_or_else(wisp::entropy_seed);
    tracing::info!(seed, "rendering");

    let target = match args.out {
        Some(path) => wisp::PngTarget::Exact(path),
        None => wisp::PngTarget::Numbered {
            dir: args.out_dir,
            stem: args.stem,
        },
    };
    let mut sink = wisp::PngSink::new(target);
    wisp::render_to_sink(&cfg, &mut wisp::seeded(seed), &mut sink).context("render sky")?;

    for path in sink.written() {
        eprintln!("wrote {} (seed {seed})", path.display());
    }
    Ok(())
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    let cfg = resolve_config(&args.source)?;
    println!("{}", cfg.to_json_pretty()?);
    Ok(())
}
