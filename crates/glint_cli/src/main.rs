//! `glint` - render a demo scene to PPM or an image file.

mod scenes;

use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use glint_renderer::{render, save_image, write_ppm, RenderConfig};
use serde_json::Value;

use scenes::{Scene, SceneName};

#[derive(Debug, Parser)]
#[command(version, about = "Offline path tracer")]
struct Args {
    /// Demo scene to render
    #[arg(long, value_enum, default_value_t = SceneName::ThreeSpheres)]
    scene: SceneName,

    /// JSON file with render settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Image width in pixels
    #[arg(short = 'w', long)]
    width: Option<u32>,

    /// Samples per pixel
    #[arg(short = 's', long)]
    samples: Option<u32>,

    /// Maximum ray bounce depth
    #[arg(long)]
    max_depth: Option<u32>,

    /// Seed for the random streams
    #[arg(long)]
    seed: Option<u64>,

    /// Output file; `.ppm` is written as text, other extensions via `image`.
    /// Writes PPM to stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn read_config_file(path: &Path) -> Result<Value> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}

/// Merge defaults, the config file, the scene and the command line.
///
/// Command-line flags win over the file. Height and background come from the
/// scene unless the file sets them.
fn resolve_config(args: &Args, file: Option<Value>, scene: &Scene) -> Result<RenderConfig> {
    let file = file.unwrap_or_else(|| Value::Object(Default::default()));
    let has_height = file.get("image_height").is_some();
    let has_background = file.get("background").is_some();

    let mut config: RenderConfig =
        serde_json::from_value(file).context("Invalid render settings")?;

    if !has_background {
        config.background = scene.background;
    }
    if let Some(width) = args.width {
        config.image_width = width;
    }
    if let Some(samples) = args.samples {
        config.samples_per_pixel = samples;
    }
    if let Some(max_depth) = args.max_depth {
        config.max_depth = max_depth;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if !has_height {
        config.image_height = (config.image_width as f32 / scene.aspect_ratio) as u32;
    }

    config.validate().context("Invalid render settings")?;
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let file = args.config.as_deref().map(read_config_file).transpose()?;
    // Procedural textures are seeded before the full config is resolved
    let seed = args
        .seed
        .or_else(|| file.as_ref()?.get("seed")?.as_u64())
        .unwrap_or_default();

    let scene = args.scene.build(seed);
    let config = resolve_config(&args, file, &scene)?;

    log::info!("Scene {:?}: {} objects", args.scene, scene.world.len());

    let start = Instant::now();
    let output = render(scene.camera.as_ref(), &scene.world, &config)?;
    let elapsed = start.elapsed();

    log::info!(
        "Render finished in {:.2}s, {} rays cast",
        elapsed.as_secs_f64(),
        output.stats.rays
    );

    match &args.output {
        Some(path) => save_image(path, &output.image, config.gamma)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            write_ppm(&mut writer, &output.image, config.gamma)
                .context("Failed to write PPM to stdout")?;
        }
    }

    Ok(())
}
