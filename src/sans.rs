//! Incremental state machines extracting frames and datasets from a stream.
//!
//! This module is intended for applications that receive TIC bytes
//! piecemeal, typically from a UART, and need fine control over buffering.
//! See [`crate::avec`] for implementations covering common decoding
//! patterns over complete captures.
//!
//! # Architecture
//!
//! Each stage is a struct owning its own fixed-capacity storage and a sink
//! supplied at construction. Bytes are fed through
//! [`push_bytes`](Push::push_bytes), which runs to completion and invokes
//! the sink inline, on the calling thread, before returning. Parse state is
//! preserved across calls, so the stream may be cut into chunks at any
//! boundary without changing what is emitted.
//!
//! The stages are chained by wiring sinks: an [`unframer`] sink feeds a
//! [`extractor::DatasetExtractor`], whose sink in turn hands each dataset
//! payload to [`crate::view::DatasetView::new`]. A sink must never push
//! bytes back into the state machine that invoked it; pushing into a
//! *different* downstream instance is the intended pattern and is safe,
//! because every instance keeps independent state.
//!
//! Input that cannot be stored is dropped rather than failing: bytes
//! outside a frame or dataset are skipped silently, and bytes overflowing a
//! fixed buffer are discarded, observable through the short return of
//! [`push_bytes`](Push::push_bytes).

pub mod checksum;
pub mod extractor;
pub mod history;
pub mod unframer;

/// Common contract of the push-driven state machines.
pub trait Push {
    /// Take new incoming bytes into account.
    ///
    /// Returns the number of bytes used from `buf`. The count falls short
    /// of `buf.len()` only when bytes had to be discarded because an
    /// internal buffer was full; parsing still consumed the whole chunk
    /// and the stream stays synchronised.
    fn push_bytes(&mut self, buf: &[u8]) -> usize;

    /// Are we synchronised, between a start marker and its matching end?
    fn is_in_sync(&self) -> bool;

    /// Discard any partial parse state and wait for the next start marker.
    fn reset(&mut self);
}
