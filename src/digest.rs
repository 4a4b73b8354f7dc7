use xxhash_rust::xxh64::xxh64;

use crate::labels::Labels;
use crate::SEP;

/// Compute the 64-bit digest an index entry is bucketed under.
///
/// The digest input is each label's name and value in caller order, each
/// followed by a `0xFF` separator, then the timestamp reinterpreted as a
/// `u64` in little-endian byte order. The buffer is hashed with xxHash-64,
/// seed 0.
///
/// Separator bytes are not escaped. In the upstream byte-oriented encoding
/// this admits a known ambiguity: two distinct label sets whose
/// concatenated bytes line up identically (the separator shifting between a
/// value's tail and the next name's head) digest to the same value. Rust
/// label text is valid UTF-8 and cannot contain a raw `0xFF` byte, so here
/// the ambiguity cannot be triggered, but the encoding is kept byte-for-byte
/// compatible rather than "fixed" with escaping. Any collision falls through
/// to the equality scan in the store.
pub fn digest(labels: &Labels, timestamp: i64) -> u64 {
    let mut buf = Vec::with_capacity(1024);

    for label in labels {
        buf.extend_from_slice(label.name.as_bytes());
        buf.push(SEP);
        buf.extend_from_slice(label.value.as_bytes());
        buf.push(SEP);
    }
    // CAST: bit-for-bit reinterpretation, negative timestamps wrap.
    buf.extend_from_slice(&(timestamp as u64).to_le_bytes());

    xxh64(&buf, 0)
}
