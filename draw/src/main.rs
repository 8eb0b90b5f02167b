use glyph_draw::*;

use anyhow::{Context, Result};
use clap::{Parser};
use tracing::{info};

use std::path::{PathBuf};

///
/// Draws a character portrait out of text and saves it
///
#[derive(Parser, Debug)]
#[command(name = "glyph_draw", version)]
#[command(about = "Draws a character portrait using distance formulas and geometric shapes")]
struct Args {
    /// Where to save the portrait
    #[arg(short, long, default_value = "ascii_character_output.txt")]
    output: PathBuf,

    /// Width of the canvas in characters
    #[arg(long, default_value_t = CHARACTER_WIDTH)]
    width: usize,

    /// Height of the canvas in characters
    #[arg(long, default_value_t = CHARACTER_HEIGHT)]
    height: usize,

    /// Don't print the portrait, just save it
    #[arg(short, long)]
    quiet: bool,

    /// Log progress
    #[arg(short, long)]
    verbose: bool,

    /// Log every shape as it's drawn
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug {
        tracing::Level::TRACE
    } else if args.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if !args.quiet {
        println!("Generating ASCII art using distance formulas and geometric shapes...\n");
    }

    let portrait = character_art_sized(args.width, args.height);
    info!("drew {}x{} portrait", portrait.width(), portrait.height());

    if !args.quiet {
        println!("{}", portrait);
    }

    portrait.save_to_file(&args.output)
        .with_context(|| format!("failed to save the portrait to {}", args.output.display()))?;

    if !args.quiet {
        println!("\n\nASCII art saved to: {}", args.output.display());
    }

    Ok(())
}
