use crate::error::{CodecError, Result};
use std::io::{Cursor, Read, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipArchive, ZipWriter};

/// Cap on decompressed entry size. Inbound payloads are attacker-controlled,
/// so an entry that inflates past this reads as "not found".
pub const MAX_UNPACKED_BYTES: u64 = 16 * 1024 * 1024;

/// Build a zip archive containing exactly one entry, `name`, holding `content`.
///
/// Output is byte-for-byte deterministic for identical `(name, content)`
/// pairs: fixed modification time, fixed permissions, Deflate. Some call
/// paths derive the CID from this packed form, so any run-to-run variation
/// here would break dedup.
pub fn pack_named_file(name: &str, content: &[u8]) -> Result<Vec<u8>> {
    let fixed_time = DateTime::from_date_and_time(1980, 1, 1, 0, 0, 0)
        .map_err(|_| CodecError::InvalidTimestamp)?;
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(fixed_time)
        .unix_permissions(0o644);

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    writer.start_file(name, options)?;
    writer.write_all(content)?;
    let cursor = writer.finish()?;
    Ok(cursor.into_inner())
}

/// Extract the entry `name` from a zip archive.
///
/// Returns `None` when the bytes are not a valid archive, the entry is
/// absent, or the entry inflates past [`MAX_UNPACKED_BYTES`]. Malformed
/// input is an expected case on this path and never raises.
#[must_use]
pub fn unpack_named_file(zip_bytes: &[u8], name: &str) -> Option<Vec<u8>> {
    let mut archive = match ZipArchive::new(Cursor::new(zip_bytes)) {
        Ok(archive) => archive,
        Err(err) => {
            log::debug!("Discarding invalid archive: {err}");
            return None;
        }
    };

    let entry = match archive.by_name(name) {
        Ok(entry) => entry,
        Err(_) => return None,
    };

    // Read through a hard cap rather than trusting the declared size;
    // the header field is attacker-controlled too.
    let mut content = Vec::new();
    let mut limited = entry.take(MAX_UNPACKED_BYTES + 1);
    if limited.read_to_end(&mut content).is_err() {
        log::debug!("Discarding archive entry {name}: truncated or corrupt");
        return None;
    }
    if content.len() as u64 > MAX_UNPACKED_BYTES {
        log::warn!("Discarding archive entry {name}: exceeds decompression cap");
        return None;
    }
    Some(content)
}
