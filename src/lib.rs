#![no_std]

//! A streaming decoder for the French electricity-meter "Télé-Information
//! Client" (TIC) serial protocol.
//!
//! French meters continuously emit framed telemetry over a serial line, in
//! one of two wire dialects (historical and standard). This crate turns that
//! byte stream into structured records through three stacked stages: frames
//! (STX..ETX), datasets (LF..CR) and dataset views (label, optional
//! timestamp, data, all checksum-verified). Each stage is an incremental,
//! resumable state machine driven by pushed byte chunks of arbitrary size,
//! and none of them allocates after construction, making the crate suitable
//! for constrained embedded targets.
//!
//! Most users should begin with the functions in the [`avec`] module. These
//! wire the three stages together and publish every decoded dataset of a
//! captured byte slice (or, with the `std` feature, of a reader) to a
//! receiver. Applications feeding bytes straight from a UART should instead
//! compose the state machines in the [`sans`] module with their own sinks.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable reader-based decoding (default).

pub mod avec;
pub mod sans;
pub mod view;
