//! Listing decoder: pixel byte buffer → validated records
//!
//! Four hard gates, in order: minimum length, magic signature, header
//! sanity, then the record loop. A failure at any gate aborts with no
//! partial listing. Decoding is a pure function of the input bytes; any
//! diagnostic logging belongs to the caller.

use crate::error::ListingError;
use crate::listing::{Listing, Record, TagMask};
use crate::{
    AUTHOR_BYTES, FORMAT_VERSION, HEADER_COUNT_OFFSET, HEADER_MAGIC_OFFSET,
    HEADER_UPDATED_OFFSET, HEADER_VERSION_OFFSET, IDENTIFIER_BYTES, MAGIC, NAME_BYTES,
    RECORD_AUTHOR_OFFSET, RECORD_CREATED_OFFSET, RECORD_IDENTIFIER_OFFSET, RECORD_NAME_OFFSET,
    RECORD_SIZE_OFFSET, RECORD_TAGS_OFFSET, RECORD_UPDATED_OFFSET, SLOT_SIZE, TAG_BYTES,
};

/// Decode a listing from the raw bytes of a listing texture.
///
/// `buffer` is the texture's pixel data taken byte-for-byte (byte `4k + c`
/// is channel `c` of pixel `k`, row-major). The buffer may be longer than
/// the encoded content; only the declared record range is read.
///
/// # Arguments
/// * `buffer` - Raw pixel bytes
///
/// # Returns
/// * `Ok(Listing)` - Fresh listing with no aliasing into `buffer`
/// * `Err(ListingError)` - Gate failure, no partial output
pub fn decode(buffer: &[u8]) -> Result<Listing, ListingError> {
    // Gate 1: room for the header slot
    if buffer.len() < SLOT_SIZE {
        return Err(ListingError::TruncatedBuffer {
            needed: SLOT_SIZE as u64,
            actual: buffer.len() as u64,
        });
    }

    // Gate 2: magic signature, compared word for word
    let found = [
        read_u32(buffer, HEADER_MAGIC_OFFSET),
        read_u32(buffer, HEADER_MAGIC_OFFSET + 4),
        read_u32(buffer, HEADER_MAGIC_OFFSET + 8),
        read_u32(buffer, HEADER_MAGIC_OFFSET + 12),
    ];
    if found != MAGIC {
        return Err(ListingError::InvalidMagic {
            expected: MAGIC,
            found,
        });
    }

    // Version dispatch: a future layout becomes a new arm here
    let version = read_u32(buffer, HEADER_VERSION_OFFSET);
    match version {
        FORMAT_VERSION => decode_v0(buffer),
        other => Err(ListingError::UnsupportedVersion { version: other }),
    }
}

/// Decode the version-0 layout. Magic and version have been checked.
fn decode_v0(buffer: &[u8]) -> Result<Listing, ListingError> {
    let count = read_u32(buffer, HEADER_COUNT_OFFSET);
    let last_updated = read_u64(buffer, HEADER_UPDATED_OFFSET);

    // Gate 3: the declared record range must lie inside the buffer.
    // Range check in u64; count is attacker-controlled.
    let needed = (u64::from(count) + 1) * SLOT_SIZE as u64;
    if needed > buffer.len() as u64 {
        return Err(ListingError::TruncatedBuffer {
            needed,
            actual: buffer.len() as u64,
        });
    }

    // Gate 4: record loop
    let mut records = Vec::with_capacity(count as usize);
    for index in 0..count as usize {
        let start = (index + 1) * SLOT_SIZE;
        records.push(read_record(&buffer[start..start + SLOT_SIZE]));
    }

    Ok(Listing {
        format_version: FORMAT_VERSION,
        last_updated,
        records,
    })
}

fn read_record(slot: &[u8]) -> Record {
    let mut tags = [0u8; TAG_BYTES];
    tags.copy_from_slice(&slot[RECORD_TAGS_OFFSET..RECORD_TAGS_OFFSET + TAG_BYTES]);

    Record {
        name: read_utf16(&slot[RECORD_NAME_OFFSET..RECORD_NAME_OFFSET + NAME_BYTES]),
        author: read_utf16(&slot[RECORD_AUTHOR_OFFSET..RECORD_AUTHOR_OFFSET + AUTHOR_BYTES]),
        identifier: read_ascii(
            &slot[RECORD_IDENTIFIER_OFFSET..RECORD_IDENTIFIER_OFFSET + IDENTIFIER_BYTES],
        ),
        // Reserved bits are preserved, not dropped
        tags: TagMask::from_bytes(tags),
        created_at: read_u64(slot, RECORD_CREATED_OFFSET),
        updated_at: read_u64(slot, RECORD_UPDATED_OFFSET),
        size_bytes: read_u64(slot, RECORD_SIZE_OFFSET),
    }
}

/// Decode a zero-padded UTF-16LE slot, stopping at the first zero code unit
fn read_utf16(slot: &[u8]) -> String {
    let units: Vec<u16> = slot
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    let len = units.iter().position(|&u| u == 0).unwrap_or(units.len());
    String::from_utf16_lossy(&units[..len])
}

/// Decode a zero-padded ASCII slot, stopping at the first zero byte
fn read_ascii(slot: &[u8]) -> String {
    let len = slot.iter().position(|&b| b == 0).unwrap_or(slot.len());
    String::from_utf8_lossy(&slot[..len]).into_owned()
}

fn read_u32(buffer: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        buffer[offset],
        buffer[offset + 1],
        buffer[offset + 2],
        buffer[offset + 3],
    ])
}

fn read_u64(buffer: &[u8], offset: usize) -> u64 {
    let low = read_u32(buffer, offset);
    let high = read_u32(buffer, offset + 4);
    (u64::from(high) << 32) | u64::from(low)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_utf16_trims_padding() {
        let mut slot = [0u8; 16];
        slot[0] = 0x48; // 'H'
        slot[2] = 0x69; // 'i'
        assert_eq!(read_utf16(&slot), "Hi");
    }

    #[test]
    fn test_read_utf16_full_slot_without_terminator() {
        // 4 bytes, both units used
        let slot = [0x41, 0x00, 0x42, 0x00];
        assert_eq!(read_utf16(&slot), "AB");
    }

    #[test]
    fn test_read_ascii_trims_padding() {
        assert_eq!(read_ascii(b"wrld_1\0\0\0\0"), "wrld_1");
        assert_eq!(read_ascii(b"full"), "full");
        assert_eq!(read_ascii(b"\0\0\0\0"), "");
    }

    #[test]
    fn test_read_u64_reassembles_halves() {
        let bytes = [0xEF, 0xBE, 0xAD, 0xDE, 0x78, 0x56, 0x34, 0x12];
        assert_eq!(read_u64(&bytes, 0), 0x1234_5678_DEAD_BEEF);
    }
}
