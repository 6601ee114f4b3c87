use clap::Parser;
use image::ImageReader;
use std::path::{Path, PathBuf};
use tracing::Level;

use card_index::{CardIndex, DirectoryDisplay, Extraction, Extractor, ExtractorConfig};

#[derive(Parser)]
#[command(name = "card-index")]
#[command(about = "Crop the rank and suit glyphs from photos of playing cards")]
struct Cli {
    /// Rectified card images
    #[arg(value_name = "IMAGE", required = true)]
    images: Vec<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// JSON file overriding detection parameters
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Save rank and suit crops to this directory
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,

    /// Write source, contour, rank and suit views to this directory
    #[arg(long, value_name = "DIR")]
    show: Option<PathBuf>,

    /// Do not wait for Enter after each shown result
    #[arg(long)]
    no_wait: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    let config = match &args.config {
        Some(path) => ExtractorConfig::from_file(path)?,
        None => ExtractorConfig::default(),
    };

    let mut extractor = Extractor::new(args.show.is_some()).with_config(config)?;
    if let Some(dir) = &args.show {
        extractor = extractor.with_display(Box::new(
            DirectoryDisplay::new(dir).with_wait(!args.no_wait),
        ));
    }

    if let Some(dir) = &args.out {
        std::fs::create_dir_all(dir)?;
    }

    let mut missing = 0;
    for path in &args.images {
        let img = ImageReader::open(path)?
            .decode()
            .map_err(|e| anyhow::anyhow!("Failed to decode image {}: {}", path.display(), e))?;

        match extractor.extract(&img) {
            Extraction::Found(index) => {
                println!(
                    "{}: rank {}x{} at ({}, {}), suit {}x{} at ({}, {})",
                    path.display(),
                    index.rank.bounds.width,
                    index.rank.bounds.height,
                    index.rank.bounds.x,
                    index.rank.bounds.y,
                    index.suit.bounds.width,
                    index.suit.bounds.height,
                    index.suit.bounds.x,
                    index.suit.bounds.y,
                );
                if let Some(dir) = &args.out {
                    save_index(dir, path, &index)?;
                }
            }
            Extraction::NotFound(reason) => {
                println!("{}: no card index found ({})", path.display(), reason);
                missing += 1;
            }
        }
    }

    if missing > 0 {
        anyhow::bail!("{} of {} images had no card index", missing, args.images.len());
    }
    Ok(())
}

fn save_index(dir: &Path, source: &Path, index: &CardIndex) -> anyhow::Result<()> {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "card".to_string());

    for (label, image) in [("rank", &index.rank.image), ("suit", &index.suit.image)] {
        let path = dir.join(format!("{}_{}.png", stem, label));
        image
            .save(&path)
            .map_err(|e| anyhow::anyhow!("Failed to save {}: {}", path.display(), e))?;
    }
    Ok(())
}
