//! Convenience interfaces for decoding captured TIC streams.
//!
//! The functions in this module wire the three [`crate::sans`] stages
//! together, run a whole captured byte stream (or reader) through them, and
//! publish every extracted dataset to the [`FromDatasets`] trait as a
//! decoded [`DatasetView`].

#[cfg(feature = "std")]
pub mod reader;
pub mod slice;

#[cfg(feature = "std")]
pub use reader::decode as decode_reader;
pub use slice::decode as decode_slice;

use crate::sans::extractor::{DatasetExtractor, DatasetSink};
use crate::sans::unframer::FrameSink;
use crate::sans::Push;
use crate::view::DatasetView;

/// Receive decoded datasets from a capture.
pub trait FromDatasets {
    /// Add one decoded dataset to the receiver.
    ///
    /// The view borrows the extractor's internal buffer and has to be
    /// consumed before this method returns; copy the label and data out if
    /// the receiver keeps them.
    fn add_dataset(&mut self, dataset: &DatasetView<'_>);
}

/// Frame sink coupling a dataset extractor to an unframer and publishing
/// each extracted dataset as a decoded view.
struct Chain<'o, O> {
    extractor: DatasetExtractor<Publish<'o, O>>,
    dropped: usize,
}

struct Publish<'o, O> {
    receiver: &'o mut O,
}

impl<'o, O: FromDatasets> Chain<'o, O> {
    fn new(receiver: &'o mut O) -> Self {
        Self {
            extractor: DatasetExtractor::new(Publish { receiver }),
            dropped: 0,
        }
    }

    /// Bytes discarded because a dataset overflowed the extractor buffer.
    fn dropped(&self) -> usize {
        self.dropped
    }
}

impl<O: FromDatasets> FrameSink for Chain<'_, O> {
    fn frame_bytes(&mut self, bytes: &[u8]) {
        let used = self.extractor.push_bytes(bytes);
        self.dropped += bytes.len() - used;
    }

    fn frame_complete(&mut self) {
        // A partial dataset must not survive into the next frame.
        self.extractor.reset();
    }
}

impl<O: FromDatasets> DatasetSink for Publish<'_, O> {
    fn dataset(&mut self, bytes: &[u8]) {
        self.receiver.add_dataset(&DatasetView::new(bytes));
    }
}
