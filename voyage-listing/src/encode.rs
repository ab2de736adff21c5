//! Listing encoder: structured records → slot-aligned byte buffer
//!
//! The returned buffer always has exactly the requested capacity, with the
//! unused tail zero-filled, and is meant to be wrapped byte-for-byte as the
//! RGBA8 pixel data of a texture.

use crate::error::{ListingError, RecordField};
use crate::listing::{Listing, Record};
use crate::{
    AUTHOR_BYTES, FORMAT_VERSION, HEADER_COUNT_OFFSET, HEADER_UPDATED_OFFSET,
    HEADER_VERSION_OFFSET, IDENTIFIER_BYTES, MAGIC, NAME_BYTES, RECORD_AUTHOR_OFFSET,
    RECORD_CREATED_OFFSET, RECORD_IDENTIFIER_OFFSET, RECORD_NAME_OFFSET, RECORD_SIZE_OFFSET,
    RECORD_TAGS_OFFSET, RECORD_UPDATED_OFFSET, SLOT_SIZE, TAG_BYTES, max_records,
};

/// Encode a listing into a container of `capacity` bytes.
///
/// `capacity` must be a positive multiple of [`SLOT_SIZE`]; one slot is
/// reserved for the header and the rest hold one record each. Every record
/// is validated before a single byte is written, so a failure never leaves
/// partial output behind.
///
/// # Arguments
/// * `listing` - Catalog to encode
/// * `capacity` - Total byte size of the target container (width x height x 4
///   for an RGBA8 texture)
///
/// # Returns
/// * `Ok(Vec<u8>)` - Buffer of exactly `capacity` bytes
/// * `Err(ListingError)` - Validation failure, nothing written
pub fn encode(listing: &Listing, capacity: usize) -> Result<Vec<u8>, ListingError> {
    if capacity < SLOT_SIZE || !capacity.is_multiple_of(SLOT_SIZE) {
        return Err(ListingError::InvalidCapacity { capacity });
    }

    // The writer only produces layouts it understands
    if listing.format_version != FORMAT_VERSION {
        return Err(ListingError::UnsupportedVersion {
            version: listing.format_version,
        });
    }

    let max_records = max_records(capacity);
    if listing.records.len() > max_records {
        return Err(ListingError::CapacityExceeded {
            records: listing.records.len(),
            max_records,
        });
    }

    for (index, record) in listing.records.iter().enumerate() {
        validate_record(index, record)?;
    }

    let mut buffer = vec![0u8; capacity];
    write_header(&mut buffer[..SLOT_SIZE], listing);

    for (index, record) in listing.records.iter().enumerate() {
        let start = (index + 1) * SLOT_SIZE;
        write_record(&mut buffer[start..start + SLOT_SIZE], record);
    }

    Ok(buffer)
}

/// Check every fixed-size budget before any write happens
fn validate_record(index: usize, record: &Record) -> Result<(), ListingError> {
    check_utf16_budget(index, RecordField::Name, &record.name, NAME_BYTES)?;
    check_utf16_budget(index, RecordField::Author, &record.author, AUTHOR_BYTES)?;

    if !record.identifier.is_ascii() {
        return Err(ListingError::NonAsciiIdentifier { index });
    }
    if record.identifier.len() > IDENTIFIER_BYTES {
        return Err(ListingError::FieldTooLarge {
            index,
            field: RecordField::Identifier,
            len: record.identifier.len(),
            max: IDENTIFIER_BYTES,
        });
    }

    Ok(())
}

fn check_utf16_budget(
    index: usize,
    field: RecordField,
    text: &str,
    max: usize,
) -> Result<(), ListingError> {
    // Two bytes per code unit; surrogate pairs count as two units
    let len = text.encode_utf16().count() * 2;
    if len > max {
        return Err(ListingError::FieldTooLarge {
            index,
            field,
            len,
            max,
        });
    }
    Ok(())
}

fn write_header(slot: &mut [u8], listing: &Listing) {
    for (i, word) in MAGIC.iter().enumerate() {
        slot[i * 4..i * 4 + 4].copy_from_slice(&word.to_le_bytes());
    }
    slot[HEADER_VERSION_OFFSET..HEADER_VERSION_OFFSET + 4]
        .copy_from_slice(&listing.format_version.to_le_bytes());
    slot[HEADER_COUNT_OFFSET..HEADER_COUNT_OFFSET + 4]
        .copy_from_slice(&(listing.records.len() as u32).to_le_bytes());
    slot[HEADER_UPDATED_OFFSET..HEADER_UPDATED_OFFSET + 8]
        .copy_from_slice(&listing.last_updated.to_le_bytes());
    // Reserved tail stays zero
}

fn write_record(slot: &mut [u8], record: &Record) {
    write_utf16(&mut slot[RECORD_NAME_OFFSET..RECORD_NAME_OFFSET + NAME_BYTES], &record.name);
    write_utf16(
        &mut slot[RECORD_AUTHOR_OFFSET..RECORD_AUTHOR_OFFSET + AUTHOR_BYTES],
        &record.author,
    );

    let id = record.identifier.as_bytes();
    slot[RECORD_IDENTIFIER_OFFSET..RECORD_IDENTIFIER_OFFSET + id.len()].copy_from_slice(id);

    slot[RECORD_TAGS_OFFSET..RECORD_TAGS_OFFSET + TAG_BYTES]
        .copy_from_slice(record.tags.as_bytes());

    slot[RECORD_CREATED_OFFSET..RECORD_CREATED_OFFSET + 8]
        .copy_from_slice(&record.created_at.to_le_bytes());
    slot[RECORD_UPDATED_OFFSET..RECORD_UPDATED_OFFSET + 8]
        .copy_from_slice(&record.updated_at.to_le_bytes());
    slot[RECORD_SIZE_OFFSET..RECORD_SIZE_OFFSET + 8]
        .copy_from_slice(&record.size_bytes.to_le_bytes());
    // Reserved tail stays zero
}

/// Write UTF-16LE code units into a zero-padded fixed slot.
/// The byte budget has already been checked.
fn write_utf16(slot: &mut [u8], text: &str) {
    let mut offset = 0;
    for unit in text.encode_utf16() {
        slot[offset..offset + 2].copy_from_slice(&unit.to_le_bytes());
        offset += 2;
    }
}
