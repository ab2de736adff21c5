//! Voyage-Listing: world listing texture format codec
//!
//! This crate packs a catalog of world entries (name, author, identifier,
//! size, timestamps, tag bitmask) into the raw pixel bytes of a square RGBA8
//! texture, and reads such a texture back into structured records. Shipping
//! the catalog as an image lets it ride an ordinary image-asset pipeline
//! instead of a conventional file download.
//!
//! # Key Features
//!
//! - **Pure Rust**: no I/O and no image dependencies; the codec works on a
//!   flat byte buffer that callers wrap/unwrap as pixel data
//! - **Slot-aligned layout**: every record sits on a 512-byte boundary, so
//!   record `i` is addressable by a single multiplication
//! - **All-or-nothing**: encode and decode either produce a complete result
//!   or a typed error; oversized fields are rejected, never truncated
//! - **Forward-compatible tags**: unknown tag tokens are ignored on write,
//!   unknown tag bits are preserved on read
//!
//! # Layout
//!
//! The buffer is a sequence of 512-byte slots. Slot 0 is the header:
//!
//! ```text
//! 0x000: magic          u32[4] little-endian ("XMBFEST\0VOYAGE\0\0")
//! 0x010: version        u32
//! 0x014: record count   u32
//! 0x018: last updated   u64 (seconds since Unix epoch)
//! 0x020: reserved       480 bytes, zero
//! ```
//!
//! Record `i` occupies slot `i + 1`:
//!
//! ```text
//! 0x000: name           256 bytes, UTF-16LE code units, zero-padded
//! 0x100: author         128 bytes, UTF-16LE code units, zero-padded
//! 0x180: identifier     64 bytes, ASCII, zero-padded
//! 0x1C0: tag bitmask    32 bytes, bit 0 = LSB of byte 0
//! 0x1E0: created at     u64 (seconds since Unix epoch)
//! 0x1E8: updated at     u64 (seconds since Unix epoch)
//! 0x1F0: size           u64 (bytes)
//! 0x1F8: reserved       8 bytes, zero
//! ```
//!
//! # Storage Requirements
//!
//! The encoded buffer maps 1:1 onto 4-channel pixel quadruplets (byte
//! `4k + c` is channel `c` of pixel `k`, row-major). Whatever wraps the
//! pixel data MUST store it losslessly: no recompression, no color-space
//! conversion, no alpha premultiplication. Any lossy transform corrupts
//! the payload. PNG with straight RGBA8 is safe; JPEG or premultiplied
//! import paths are not.
//!
//! # Usage
//!
//! ```
//! use voyage_listing::{decode, encode, Listing, Record, TagMask};
//!
//! let mut listing = Listing::new();
//! listing.last_updated = 1_659_368_079;
//! listing.records.push(Record {
//!     name: "Great Pug".to_string(),
//!     author: "ave".to_string(),
//!     identifier: "wrld_6caf5200".to_string(),
//!     tags: TagMask::from_tokens(["pc", "quest"]),
//!     created_at: 1_500_000_000,
//!     updated_at: 1_650_000_000,
//!     size_bytes: 52_428_800,
//! });
//!
//! let buffer = encode(&listing, 4 * 1024).unwrap();
//! let parsed = decode(&buffer).unwrap();
//! assert_eq!(parsed, listing);
//! ```

mod decode;
mod encode;
mod error;
mod listing;


pub use decode::decode;
pub use encode::encode;
pub use error::{ListingError, RecordField};
pub use listing::{Listing, Record, Tag, TagMask};

// =============================================================================
// Format Constants
// =============================================================================

/// Header magic: four little-endian words spelling "XMBFEST\0VOYAGE\0\0"
pub const MAGIC: [u32; 4] = [0x4642_4D58, 0x0054_5345, 0x4159_4F56, 0x0000_4547];

/// The only layout version this codec writes and reads
pub const FORMAT_VERSION: u32 = 0;

/// Fixed stride of the header slot and every record slot
pub const SLOT_SIZE: usize = 512;

/// Bytes carried per pixel of the wrapping texture (RGBA8 quadruplets)
pub const BYTES_PER_PIXEL: usize = 4;

// =============================================================================
// Header Layout
// =============================================================================

/// Byte offset of the magic words within the header slot
pub const HEADER_MAGIC_OFFSET: usize = 0;

/// Byte offset of the format version (u32)
pub const HEADER_VERSION_OFFSET: usize = 16;

/// Byte offset of the record count (u32)
pub const HEADER_COUNT_OFFSET: usize = 20;

/// Byte offset of the last-updated stamp (u64)
pub const HEADER_UPDATED_OFFSET: usize = 24;

/// Byte offset of the reserved header tail (zero through end of slot)
pub const HEADER_RESERVED_OFFSET: usize = 32;

// =============================================================================
// Record Layout
// =============================================================================

/// Name slot size (UTF-16 code units, so 128 BMP characters)
pub const NAME_BYTES: usize = 256;

/// Author slot size (UTF-16 code units, so 64 BMP characters)
pub const AUTHOR_BYTES: usize = 128;

/// Identifier slot size (ASCII)
pub const IDENTIFIER_BYTES: usize = 64;

/// Tag bitmask size (256 bits)
pub const TAG_BYTES: usize = 32;

/// Byte offset of the name field within a record slot
pub const RECORD_NAME_OFFSET: usize = 0;

/// Byte offset of the author field
pub const RECORD_AUTHOR_OFFSET: usize = RECORD_NAME_OFFSET + NAME_BYTES;

/// Byte offset of the identifier field
pub const RECORD_IDENTIFIER_OFFSET: usize = RECORD_AUTHOR_OFFSET + AUTHOR_BYTES;

/// Byte offset of the tag bitmask
pub const RECORD_TAGS_OFFSET: usize = RECORD_IDENTIFIER_OFFSET + IDENTIFIER_BYTES;

/// Byte offset of the created-at stamp (u64)
pub const RECORD_CREATED_OFFSET: usize = RECORD_TAGS_OFFSET + TAG_BYTES;

/// Byte offset of the updated-at stamp (u64)
pub const RECORD_UPDATED_OFFSET: usize = RECORD_CREATED_OFFSET + 8;

/// Byte offset of the size field (u64)
pub const RECORD_SIZE_OFFSET: usize = RECORD_UPDATED_OFFSET + 8;

/// Byte offset of the reserved record tail (zero through end of slot)
pub const RECORD_RESERVED_OFFSET: usize = RECORD_SIZE_OFFSET + 8;

/// Maximum number of records a container of `capacity` bytes can hold.
///
/// One slot is always reserved for the header. Returns 0 for capacities
/// smaller than two slots; [`encode`] rejects invalid capacities outright.
pub const fn max_records(capacity: usize) -> usize {
    (capacity / SLOT_SIZE).saturating_sub(1)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod constants_tests {
    use super::*;

    #[test]
    fn test_magic_spells_signature() {
        let mut bytes = [0u8; 16];
        for (i, word) in MAGIC.iter().enumerate() {
            bytes[i * 4..i * 4 + 4].copy_from_slice(&word.to_le_bytes());
        }
        assert_eq!(&bytes, b"XMBFEST\0VOYAGE\0\0");
    }

    #[test]
    fn test_record_fields_fill_slot() {
        assert_eq!(RECORD_AUTHOR_OFFSET, 256);
        assert_eq!(RECORD_IDENTIFIER_OFFSET, 384);
        assert_eq!(RECORD_TAGS_OFFSET, 448);
        assert_eq!(RECORD_CREATED_OFFSET, 480);
        assert_eq!(RECORD_UPDATED_OFFSET, 488);
        assert_eq!(RECORD_SIZE_OFFSET, 496);
        assert_eq!(RECORD_RESERVED_OFFSET, 504);
        assert_eq!(RECORD_RESERVED_OFFSET + 8, SLOT_SIZE);
    }

    #[test]
    fn test_header_fields_fit_slot() {
        assert_eq!(HEADER_VERSION_OFFSET, 16);
        assert_eq!(HEADER_COUNT_OFFSET, 20);
        assert_eq!(HEADER_UPDATED_OFFSET, 24);
        assert_eq!(HEADER_RESERVED_OFFSET, 32);
        assert!(HEADER_RESERVED_OFFSET < SLOT_SIZE);
    }

    #[test]
    fn test_max_records() {
        // The deployed 1024x1024 RGBA8 texture: 8192 slots, one for the header
        assert_eq!(max_records(1024 * 1024 * 4), 8191);
        assert_eq!(max_records(SLOT_SIZE), 0);
        assert_eq!(max_records(2 * SLOT_SIZE), 1);
        assert_eq!(max_records(0), 0);
    }
}
