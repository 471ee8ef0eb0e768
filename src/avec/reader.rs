//! Reader-based decoder implementation.
//!
//! _Requires Cargo feature `std`._

use std::io::{ErrorKind, Read};

use thiserror::Error;

use crate::sans::unframer::Streaming;
use crate::sans::Push;

use super::{Chain, FromDatasets};

extern crate std;

/// Errors occurring while decoding from a reader.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the supplied reader.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// A dataset exceeded the extractor capacity.
    #[error("A dataset overflowed the extractor buffer, dropping {dropped} byte(s).")]
    DatasetOverflow { dropped: usize },
}

/// Decode every dataset read from a TIC stream, publishing to a receiver.
///
/// Reads until end of stream. The chunking imposed by the reader has no
/// influence on what is published.
///
/// This method is also re-exported as `teleinfo::avec::decode_reader`.
///
/// _Requires Cargo feature `std`._
pub fn decode(r: &mut impl Read, o: &mut impl FromDatasets) -> Result<(), Error> {
    let mut unframer = Streaming::new(Chain::new(o));
    let mut chunk = [0u8; 256];

    loop {
        let read = match r.read(&mut chunk) {
            Ok(0) => break,
            Ok(read) => read,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => Err(err)?,
        };
        unframer.push_bytes(&chunk[..read]);
    }

    let dropped = unframer.sink().dropped();
    if dropped != 0 {
        Err(Error::DatasetOverflow { dropped })?;
    }

    Ok(())
}
