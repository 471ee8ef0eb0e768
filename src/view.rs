//! Structural decoding of one extracted dataset.
//!
//! A dataset payload is a label, an optional horodate and a data field,
//! joined by a separator character and closed by a one-byte checksum. The
//! separator doubles as the dialect marker: standard TIC uses a horizontal
//! tab, historical TIC a space. The two dialects also differ in which bytes
//! the checksum covers; the historical sum stops before the separator
//! preceding the checksum, the standard sum runs through it.

pub mod horodate;

pub use horodate::{Horodate, Season};

use crate::sans::checksum;
use crate::sans::extractor::{CR, LF};

/// Horizontal tab, the field separator of standard TIC datasets.
pub const HT: u8 = 0x09;
/// Space, the field separator of historical TIC datasets.
pub const SP: u8 = 0x20;

/// The outcome of parsing one dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DatasetKind {
    /// The payload does not follow either dialect's structure.
    Malformed,
    /// The structure is sound but the checksum byte does not match.
    WrongCrc,
    /// A well-formed historical (space-separated) dataset.
    ValidHistorical,
    /// A well-formed standard (tab-separated) dataset.
    ValidStandard,
}

/// A decoded, borrowed view over one dataset payload.
///
/// The view only holds references into the buffer it was constructed from;
/// it must be consumed before that buffer is overwritten, typically inside
/// the dataset sink that received the payload. Copy the label and data out
/// if a detached record is needed.
#[derive(Clone, Copy, Debug)]
pub struct DatasetView<'a> {
    kind: DatasetKind,
    label: &'a [u8],
    data: &'a [u8],
    horodate: Option<Horodate>,
}

impl<'a> DatasetView<'a> {
    /// Decode a dataset payload.
    ///
    /// A leading LF or trailing CR left over from sloppy extraction is
    /// tolerated and skipped. Structural violations yield
    /// [`DatasetKind::Malformed`] and a checksum mismatch
    /// [`DatasetKind::WrongCrc`]; both leave the label and data empty.
    pub fn new(dataset: &'a [u8]) -> Self {
        match Self::split(dataset) {
            Ok(view) => view,
            Err(kind) => Self {
                kind,
                label: &[],
                data: &[],
                horodate: None,
            },
        }
    }

    fn split(dataset: &'a [u8]) -> Result<Self, DatasetKind> {
        // Smallest parseable shape: one-byte label, separator, one-byte
        // data, separator, checksum.
        if dataset.len() < 5 {
            return Err(DatasetKind::Malformed);
        }

        let mut rest = dataset;
        if rest[0] == LF {
            rest = &rest[1..];
        }

        let (&last, head) = rest.split_last().ok_or(DatasetKind::Malformed)?;
        let mut crc_byte = last;
        rest = head;
        if crc_byte == CR {
            let (&last, head) = rest.split_last().ok_or(DatasetKind::Malformed)?;
            crc_byte = last;
            rest = head;
        }

        // With the checksum gone, the last byte is the separator that
        // selects the dialect.
        let (&separator, head) = rest.split_last().ok_or(DatasetKind::Malformed)?;
        let standard = match separator {
            HT => true,
            SP => false,
            _ => return Err(DatasetKind::Malformed),
        };

        // The historical sum stops before this trailing separator, the
        // standard sum runs through it. Both dialects then drop the
        // separator from the fields being split below.
        let window = if standard { rest } else { head };
        if checksum::compute(window) != crc_byte {
            return Err(DatasetKind::WrongCrc);
        }
        rest = head;

        let at = rest
            .iter()
            .position(|&b| b == separator)
            .ok_or(DatasetKind::Malformed)?;
        let label = &rest[..at];
        rest = &rest[at + 1..];
        if rest.is_empty() {
            return Err(DatasetKind::Malformed);
        }

        // A second separator means the middle field is a horodate and the
        // data follows it, possibly empty. Without one, everything left is
        // the data.
        let (horodate, data) = match rest.iter().position(|&b| b == separator) {
            Some(at) => (Some(Horodate::parse(&rest[..at])), &rest[at + 1..]),
            None => (None, rest),
        };

        Ok(Self {
            kind: if standard {
                DatasetKind::ValidStandard
            } else {
                DatasetKind::ValidHistorical
            },
            label,
            data,
            horodate,
        })
    }

    pub fn kind(&self) -> DatasetKind {
        self.kind
    }

    /// Did the payload decode as a well-formed dataset of either dialect?
    pub fn is_valid(&self) -> bool {
        matches!(
            self.kind,
            DatasetKind::ValidHistorical | DatasetKind::ValidStandard
        )
    }

    /// The label bytes, empty unless [`is_valid`](Self::is_valid).
    pub fn label(&self) -> &'a [u8] {
        self.label
    }

    /// The data bytes. Empty when the view is invalid, and also for valid
    /// datasets carrying a horodate but no value.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// The horodate, if the dataset carried one. The contained horodate
    /// may itself be out of range; check [`Horodate::is_valid`].
    pub fn horodate(&self) -> Option<&Horodate> {
        self.horodate.as_ref()
    }

    /// Does the label match `expected` exactly?
    pub fn label_equals(&self, expected: &str) -> bool {
        self.label == expected.as_bytes()
    }

    /// Decode the data field as an unsigned decimal number.
    ///
    /// Returns [`u32::MAX`] when the view is not valid, the data is
    /// absent, or the data is not a decodable number.
    pub fn data_to_u32(&self) -> u32 {
        if !self.is_valid() {
            return u32::MAX;
        }
        u32_from_digits(self.data)
    }
}

/// Interpret ASCII decimal digits as a `u32`.
///
/// Returns [`u32::MAX`] on empty input, on any non-digit byte, and on
/// arithmetic overflow, checked before it can happen. `u32::MAX` doubles
/// as the error sentinel, so the largest decodable value is
/// `u32::MAX - 1` (`"4294967294"`); the string `"4294967295"` collapses
/// into the sentinel.
pub fn u32_from_digits(digits: &[u8]) -> u32 {
    if digits.is_empty() {
        return u32::MAX;
    }
    let mut value: u32 = 0;
    for &byte in digits {
        if !byte.is_ascii_digit() {
            return u32::MAX;
        }
        value = match value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u32::from(byte - b'0')))
        {
            Some(v) => v,
            None => return u32::MAX,
        };
    }
    value
}
