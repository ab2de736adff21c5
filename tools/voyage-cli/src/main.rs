//! Voyage CLI - world listing texture tool
//!
//! # Commands
//!
//! - `voyage encode` - Pack a JSON world listing into a listing texture PNG
//! - `voyage inspect` - Decode a listing texture PNG and print its records
//!
//! # Usage
//!
//! ```bash
//! # Generate the deployed 1024x1024 listing texture
//! voyage encode worlds.json --output listing.png
//!
//! # Reproducible output (fixed last-updated stamp)
//! voyage encode worlds.json --output listing.png --timestamp 1659368079
//!
//! # Check what a texture carries
//! voyage inspect listing.png
//! ```
//!
//! The PNG wraps the encoded payload as raw RGBA8 pixels. It must be stored
//! and imported with no recompression, no color-space conversion, and no
//! alpha premultiplication; any lossy transform corrupts the payload.

mod encode;
mod inspect;
mod manifest;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Voyage CLI - world listing texture tool
#[derive(Parser)]
#[command(name = "voyage")]
#[command(about = "Generate and inspect Voyage world listing textures")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack a JSON world listing into a listing texture PNG
    Encode(encode::EncodeArgs),

    /// Decode a listing texture PNG and print its records
    Inspect(inspect::InspectArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode(args) => encode::execute(args),
        Commands::Inspect(args) => inspect::execute(args),
    }
}
