//! Slice-based decoder implementation.

use thiserror::Error;

use crate::sans::unframer::Streaming;
use crate::sans::Push;

use super::{Chain, FromDatasets};

/// Errors occurring while decoding from a slice.
#[derive(Debug, Error)]
pub enum Error {
    /// A dataset exceeded the extractor capacity.
    #[error("A dataset overflowed the extractor buffer, dropping {dropped} byte(s).")]
    DatasetOverflow { dropped: usize },
}

/// Decode every dataset of a captured byte stream, publishing to a
/// receiver.
///
/// The capture may start and end anywhere in the stream: bytes before the
/// first frame are skipped, and datasets of a trailing unterminated frame
/// are still published.
///
/// This method is also re-exported as `teleinfo::avec::decode_slice`.
pub fn decode(r: &[u8], o: &mut impl FromDatasets) -> Result<(), Error> {
    let mut unframer = Streaming::new(Chain::new(o));
    unframer.push_bytes(r);

    let dropped = unframer.sink().dropped();
    if dropped != 0 {
        Err(Error::DatasetOverflow { dropped })?;
    }

    Ok(())
}
