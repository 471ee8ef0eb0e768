//! Frame boundary detection over a raw TIC byte stream.
//!
//! Meters wrap each telemetry frame between an STX and an ETX byte. The
//! unframers in this module locate those boundaries in a continuous stream
//! and deliver the payload in between, markers excluded, to a [`FrameSink`].
//!
//! Two unframers are provided, equivalent at the logical boundary but with
//! different storage trade-offs:
//!
//! - [`Streaming`] forwards payload bytes to the sink as they arrive and
//!   keeps no frame buffer at all.
//! - [`Cached`] accumulates a whole frame and emits it as one contiguous
//!   slice when its ETX is seen, at the cost of a [`MAX_FRAME_SIZE`] buffer.

use super::history::FrameSizeHistory;
use super::Push;

/// The STX byte opening every TIC frame.
pub const STX: u8 = 0x02;
/// The ETX byte closing every TIC frame.
pub const ETX: u8 = 0x03;
/// Largest accepted frame payload, start and end markers excluded.
pub const MAX_FRAME_SIZE: usize = 2048;

/// Receive frame payload bytes and frame boundaries from an unframer.
///
/// The default implementation of each method ignores the event, so a sink
/// only has to implement what it needs.
#[allow(unused_variables)]
pub trait FrameSink {
    /// Add payload bytes of the frame being parsed. Markers are never sent.
    fn frame_bytes(&mut self, bytes: &[u8]) {}

    /// The frame whose bytes were previously added is complete.
    ///
    /// Called exactly once per frame, strictly after every
    /// [`frame_bytes`](FrameSink::frame_bytes) call belonging to it.
    fn frame_complete(&mut self) {}
}

/// Unframer forwarding payload bytes to its sink as they arrive.
///
/// Nothing is buffered: each payload run of a pushed chunk reaches the sink
/// in one [`FrameSink::frame_bytes`] call, so frames of any size pass
/// through. The sink has to reassemble per-frame state itself, keyed on
/// [`FrameSink::frame_complete`].
///
/// Some historical meters restart a frame before terminating the previous
/// one. An STX met mid-frame therefore closes the current frame (the sink
/// sees a normal `frame_complete`) and opens the next one immediately.
pub struct Streaming<S> {
    sink: S,
    sync: bool,
    frame_size: usize,
    history: FrameSizeHistory,
}

impl<S: FrameSink> Streaming<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            sync: false,
            frame_size: 0,
            history: FrameSizeHistory::new(),
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

    /// The largest completed-frame payload among the last
    /// [`FRAME_HISTORY_DEPTH`](super::history::FRAME_HISTORY_DEPTH)
    /// frames, or 0 before the first completed frame.
    pub fn max_frame_size_from_recent_history(&self) -> usize {
        self.history.max()
    }

    fn forward(&mut self, bytes: &[u8]) {
        if !bytes.is_empty() {
            self.frame_size += bytes.len();
            self.sink.frame_bytes(bytes);
        }
    }

    fn complete_frame(&mut self) {
        self.history.record(self.frame_size);
        self.frame_size = 0;
        self.sink.frame_complete();
    }
}

impl<S: FrameSink> Push for Streaming<S> {
    fn push_bytes(&mut self, buf: &[u8]) -> usize {
        let mut rest = buf;
        while !rest.is_empty() {
            if !self.sync {
                rest = match rest.iter().position(|&b| b == STX) {
                    Some(at) => {
                        self.sync = true;
                        self.frame_size = 0;
                        &rest[at + 1..]
                    }
                    None => &[],
                };
            } else {
                match rest.iter().position(|&b| b == ETX || b == STX) {
                    Some(at) => {
                        self.forward(&rest[..at]);
                        if rest[at] == ETX {
                            self.sync = false;
                        }
                        // On a mid-frame STX we stay in sync: the marker
                        // both ends this frame and starts the next one.
                        self.complete_frame();
                        rest = &rest[at + 1..];
                    }
                    None => {
                        self.forward(rest);
                        rest = &[];
                    }
                }
            }
        }
        buf.len()
    }

    fn is_in_sync(&self) -> bool {
        self.sync
    }

    fn reset(&mut self) {
        self.sync = false;
        self.frame_size = 0;
    }
}

/// Unframer accumulating each frame into an internal buffer.
///
/// The whole payload reaches the sink in a single
/// [`FrameSink::frame_bytes`] call when the frame's ETX is seen,
/// immediately followed by [`FrameSink::frame_complete`]. A frame larger
/// than [`MAX_FRAME_SIZE`] is truncated: the overflowing bytes are dropped,
/// [`push_bytes`](Push::push_bytes) returns short, and the frame still
/// completes on its ETX with the truncated payload.
///
/// Unlike [`Streaming`], an STX met mid-frame is kept as a payload byte;
/// only ETX terminates a buffered frame.
pub struct Cached<S> {
    sink: S,
    sync: bool,
    frame: heapless::Vec<u8, MAX_FRAME_SIZE>,
    history: FrameSizeHistory,
}

impl<S: FrameSink> Cached<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            sync: false,
            frame: heapless::Vec::new(),
            history: FrameSizeHistory::new(),
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

    /// The largest completed-frame payload among the last
    /// [`FRAME_HISTORY_DEPTH`](super::history::FRAME_HISTORY_DEPTH)
    /// frames, or 0 before the first completed frame.
    pub fn max_frame_size_from_recent_history(&self) -> usize {
        self.history.max()
    }

    /// Append payload bytes, clamped to the free space left in the frame
    /// buffer. Returns how many were kept.
    fn accept(&mut self, bytes: &[u8]) -> usize {
        let free = self.frame.capacity() - self.frame.len();
        let keep = bytes.len().min(free);
        self.frame.extend_from_slice(&bytes[..keep]).ok();
        keep
    }

    fn complete_frame(&mut self) {
        self.history.record(self.frame.len());
        self.sink.frame_bytes(&self.frame);
        self.sink.frame_complete();
        self.frame.clear();
        self.sync = false;
    }
}

impl<S: FrameSink> Push for Cached<S> {
    fn push_bytes(&mut self, buf: &[u8]) -> usize {
        let mut used = 0;
        let mut rest = buf;
        while !rest.is_empty() {
            if !self.sync {
                match rest.iter().position(|&b| b == STX) {
                    Some(at) => {
                        used += at + 1;
                        self.sync = true;
                        self.frame.clear();
                        rest = &rest[at + 1..];
                    }
                    None => {
                        used += rest.len();
                        rest = &[];
                    }
                }
            } else {
                match rest.iter().position(|&b| b == ETX) {
                    Some(at) => {
                        used += self.accept(&rest[..at]) + 1;
                        self.complete_frame();
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
        self.frame.clear();
    }
}
