//! Helper for computing dataset checksums.

/// Compute the checksum of a byte window.
///
/// The TIC checksum is the byte sum of the window folded into printable
/// ASCII: `(sum & 0x3F) + 0x20`. Which bytes make up the window depends on
/// the dialect; see [`crate::view`].
pub fn compute(bytes: &[u8]) -> u8 {
    let sum = bytes.iter().fold(0u8, |acc, b| acc.wrapping_add(*b));
    (sum & 0x3F) + 0x20
}
