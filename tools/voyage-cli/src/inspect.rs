//! Inspect command: listing texture PNG → decoded record dump

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use voyage_listing::{Record, Tag};

/// Arguments for the inspect command
#[derive(Args)]
pub struct InspectArgs {
    /// Path to the listing texture PNG
    pub texture: PathBuf,

    /// Only print the header summary, not the records
    #[arg(long)]
    pub header_only: bool,
}

/// Execute the inspect command
pub fn execute(args: InspectArgs) -> Result<()> {
    let texture = image::open(&args.texture)
        .with_context(|| format!("Failed to load texture: {}", args.texture.display()))?;

    let rgba = texture.to_rgba8();
    let (width, height) = rgba.dimensions();
    let buffer = rgba.into_raw();

    println!(
        "Texture: {} ({}x{}, {} bytes)",
        args.texture.display(),
        width,
        height,
        buffer.len()
    );

    let listing = voyage_listing::decode(&buffer).context("Failed to decode listing")?;

    println!(
        "Version {} - {} records - updated at epoch {}",
        listing.format_version,
        listing.len(),
        listing.last_updated
    );

    if args.header_only {
        return Ok(());
    }

    for record in &listing.records {
        print_record(record);
    }

    Ok(())
}

fn print_record(record: &Record) {
    println!("World: {}", record.identifier);
    println!("  Name: {}", record.name);
    println!("  Author: {}", record.author);
    println!("  Size: {} bytes", record.size_bytes);
    println!("  Created at: {}", record.created_at);
    println!("  Updated at: {}", record.updated_at);
    println!(
        "  Tags: {:02X} [{}]",
        record.tags.as_bytes()[0],
        tag_tokens(record).join(", ")
    );
}

fn tag_tokens(record: &Record) -> Vec<&'static str> {
    [Tag::Pc, Tag::Quest]
        .into_iter()
        .filter(|&tag| record.tags.contains(tag))
        .map(Tag::token)
        .collect()
}
