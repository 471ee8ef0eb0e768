//! Rotating record of recently observed frame sizes.

use heapless::HistoryBuffer;

/// How many completed frames the statistics cover.
pub const FRAME_HISTORY_DEPTH: usize = 128;

/// Insertion-ordered sizes of the last completed frames.
///
/// Once [`FRAME_HISTORY_DEPTH`] sizes have been recorded, each new entry
/// evicts the oldest one.
#[derive(Default)]
pub struct FrameSizeHistory {
    sizes: HistoryBuffer<usize, FRAME_HISTORY_DEPTH>,
}

impl FrameSizeHistory {
    pub fn new() -> Self {
        Self {
            sizes: HistoryBuffer::new(),
        }
    }

    /// Record the size of a newly completed frame.
    pub fn record(&mut self, size: usize) {
        self.sizes.write(size);
    }

    /// Number of sizes currently recorded.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.len() == 0
    }

    /// The largest recorded size, or 0 when nothing has been recorded yet.
    pub fn max(&self) -> usize {
        self.sizes.oldest_ordered().copied().max().unwrap_or(0)
    }
}
