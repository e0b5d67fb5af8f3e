use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context, Result};
use clap::Parser;
use island_core::{generate_seeded, load_island_config_from_env, IslandConfig, TextureData};
use tracing::info;

mod summary;

use summary::IslandSummary;

#[derive(Parser, Debug)]
#[command(author, version, about = "Procedural island generator", long_about = None)]
struct Args {
    /// Island config JSON (defaults to ISLAND_CONFIG_PATH, then the builtin config)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for reproducible output; overrides the config
    #[arg(long)]
    seed: Option<u64>,

    /// Grid size override
    #[arg(long)]
    size: Option<u32>,

    /// Write the terrain texture as PNG
    #[arg(long)]
    texture_out: Option<PathBuf>,

    /// Write the JSON summary here instead of stdout
    #[arg(long)]
    summary_out: Option<PathBuf>,

    /// Include every prop placement in the summary
    #[arg(long, default_value_t = false)]
    placements: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = resolve_config(&args)?;

    let result = generate_seeded(&config).context("island generation rejected the config")?;

    if let Some(path) = &args.texture_out {
        write_texture_png(&result.texture, path)?;
        info!(path = %path.display(), "texture.written");
    }

    let summary = IslandSummary::from_result(
        &result,
        |layer, index| {
            config
                .prop_layer(layer)
                .and_then(|cfg| cfg.variants.get(index))
                .cloned()
                .unwrap_or_default()
        },
        args.placements,
    );
    let json = serde_json::to_string_pretty(&summary)?;
    match &args.summary_out {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("Failed to write summary to {}", path.display()))?;
            info!(path = %path.display(), "summary.written");
        }
        None => println!("{json}"),
    }

    Ok(())
}

fn resolve_config(args: &Args) -> Result<IslandConfig> {
    let base: Arc<IslandConfig> = match &args.config {
        Some(path) => Arc::new(
            IslandConfig::from_file(path)
                .with_context(|| format!("Failed to load island config {}", path.display()))?,
        ),
        None => load_island_config_from_env(),
    };

    let mut config = (*base).clone();
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(size) = args.size {
        config.size = size;
    }
    Ok(config)
}

fn write_texture_png(texture: &TextureData, path: &Path) -> Result<()> {
    let image = image::RgbaImage::from_raw(texture.size, texture.size, texture.to_rgba_bytes())
        .context("texture buffer does not match its dimensions")?;
    image
        .save(path)
        .with_context(|| format!("Failed to write texture to {}", path.display()))?;
    Ok(())
}
