//! Dataset boundary detection within a frame payload.
//!
//! Each frame carries zero or more datasets, every one opened by a line
//! feed and closed by a carriage return (the oldest historical dialect
//! closes on a line feed instead, see [`EndMarkers`]). The extractor
//! buffers one dataset at a time and hands its payload, markers excluded,
//! to a [`DatasetSink`] as one contiguous slice.

use super::Push;

/// The line feed opening every dataset.
pub const LF: u8 = 0x0A;
/// The carriage return closing a dataset.
pub const CR: u8 = 0x0D;
/// Largest accepted dataset payload, start and end markers excluded.
pub const MAX_DATASET_SIZE: usize = 128;

/// Which bytes close an in-progress dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndMarkers {
    /// Close on CR only. Fits standard TIC and most historical streams.
    CarriageReturn,
    /// Close on CR or LF. The oldest historical dialect ends its datasets
    /// with a bare line feed; under this selection an LF met inside a
    /// dataset closes it, and the following LF opens the next one.
    CarriageReturnOrLineFeed,
}

impl EndMarkers {
    fn closes(self, byte: u8) -> bool {
        byte == CR || (self == Self::CarriageReturnOrLineFeed && byte == LF)
    }
}

/// Receive complete dataset payloads from an extractor.
#[allow(unused_variables)]
pub trait DatasetSink {
    /// Add one extracted dataset. Called exactly once per completed
    /// dataset, with its whole payload.
    fn dataset(&mut self, bytes: &[u8]) {}
}

/// Locates dataset boundaries in frame payload bytes.
///
/// Feed the payload of a single frame through
/// [`push_bytes`](Push::push_bytes). Between frames,
/// [`reset`](Push::reset) must be called so that a trailing partial
/// dataset of one frame cannot concatenate with the leading bytes of the
/// next.
///
/// A dataset larger than [`MAX_DATASET_SIZE`] is truncated: overflowing
/// bytes are dropped, `push_bytes` returns short, and the dataset is still
/// emitted when its end marker arrives. Consumers should treat the short
/// return as an error signal.
pub struct DatasetExtractor<S> {
    sink: S,
    sync: bool,
    dataset: heapless::Vec<u8, MAX_DATASET_SIZE>,
    end_markers: EndMarkers,
}

impl<S: DatasetSink> DatasetExtractor<S> {
    /// Extractor closing datasets on CR only.
    pub fn new(sink: S) -> Self {
        Self::with_end_markers(sink, EndMarkers::CarriageReturn)
    }

    /// Extractor with an explicit end-marker selection.
    pub fn with_end_markers(sink: S, end_markers: EndMarkers) -> Self {
        Self {
            sink,
            sync: false,
            dataset: heapless::Vec::new(),
            end_markers,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Append dataset bytes, clamped to the free space left in the
    /// buffer. Returns how many were kept.
    fn accept(&mut self, bytes: &[u8]) -> usize {
        let free = self.dataset.capacity() - self.dataset.len();
        let keep = bytes.len().min(free);
        self.dataset.extend_from_slice(&bytes[..keep]).ok();
        keep
    }

    fn complete_dataset(&mut self) {
        self.sink.dataset(&self.dataset);
        self.dataset.clear();
        self.sync = false;
    }
}

impl<S: DatasetSink> Push for DatasetExtractor<S> {
    fn push_bytes(&mut self, buf: &[u8]) -> usize {
        let mut used = 0;
        let mut rest = buf;
        while !rest.is_empty() {
            if !self.sync {
                match rest.iter().position(|&b| b == LF) {
                    Some(at) => {
                        used += at + 1;
                        self.sync = true;
                        self.dataset.clear();
                        rest = &rest[at + 1..];
                    }
                    None => {
                        used += rest.len();
                        rest = &[];
                    }
                }
            } else {
                match rest.iter().position(|&b| self.end_markers.closes(b)) {
                    Some(at) => {
                        used += self.accept(&rest[..at]) + 1;
                        self.complete_dataset();
                        rest = &rest[at + 1..];
                    }
                    None => {
                        used += self.accept(rest);
                        rest = &[];
                    }
                }
            }
        }
        used
    }

    fn is_in_sync(&self) -> bool {
        self.sync
    }

    fn reset(&mut self) {
        self.sync = false;
        self.dataset.clear();
    }
}
