//! JSON world listing source document
//!
//! The catalog API hands over every numeric field (size, epochs) as a
//! decimal string; parsing them into the codec's integer types happens
//! here, at the boundary, so the codec itself only ever sees typed values.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use voyage_listing::{Listing, Record, TagMask};

/// Top-level listing document
#[derive(Debug, Deserialize)]
pub struct ListingSource {
    #[serde(default, rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub version: u32,

    pub worlds: Vec<WorldSource>,
}

/// One world entry as the catalog API serves it
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldSource {
    #[serde(default, rename = "type")]
    pub kind: String,

    pub name: String,
    pub author: String,
    pub id: String,

    /// World size in bytes, decimal string
    pub size: String,

    /// Seconds since Unix epoch, decimal string
    pub creation_date: String,

    /// Seconds since Unix epoch, decimal string
    pub update_date: String,

    #[serde(default)]
    pub tags: Vec<String>,
}

impl WorldSource {
    /// Convert to a codec record, parsing the decimal-string numerics
    pub fn to_record(&self) -> Result<Record> {
        Ok(Record {
            name: self.name.clone(),
            author: self.author.clone(),
            identifier: self.id.clone(),
            tags: TagMask::from_tokens(self.tags.iter().map(String::as_str)),
            created_at: parse_decimal(&self.creation_date, "creationDate", &self.id)?,
            updated_at: parse_decimal(&self.update_date, "updateDate", &self.id)?,
            size_bytes: parse_decimal(&self.size, "size", &self.id)?,
        })
    }
}

fn parse_decimal(value: &str, field: &str, id: &str) -> Result<u64> {
    value
        .trim()
        .parse::<u64>()
        .with_context(|| format!("World {id}: {field} is not a decimal integer: {value:?}"))
}

/// Load and parse a listing source document
pub fn load_source(path: &Path) -> Result<ListingSource> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read listing source: {}", path.display()))?;
    let source: ListingSource = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse listing source: {}", path.display()))?;
    Ok(source)
}

/// Build a codec listing from a source document
///
/// `last_updated` is the encode-time stamp for the whole catalog.
pub fn build_listing(source: &ListingSource, last_updated: u64) -> Result<Listing> {
    let mut listing = Listing::new();
    listing.last_updated = last_updated;
    for world in &source.worlds {
        listing.records.push(world.to_record()?);
    }
    Ok(listing)
}
