//! The 13-byte timestamp attached to some datasets.

use core::cmp::Ordering;
use core::fmt;

/// Exact length of a horodate field in bytes.
pub const HORODATE_SIZE: usize = 13;

/// Season announced by the first horodate byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Season {
    /// The emitting device did not announce a season.
    #[default]
    Unknown,
    Winter,
    Summer,
    /// The season byte held an unexpected character.
    Malformed,
}

/// A dataset timestamp: calendar date and time of day, plus the season and
/// clock-quality annotations carried by the first byte.
///
/// Horodates compare on their date and time fields only; the season and
/// degraded-clock annotations never participate in equality or ordering.
#[derive(Clone, Copy, Debug, Default)]
pub struct Horodate {
    /// Whether every field was in range. Out-of-range horodates keep the
    /// fields that decoded before the violation.
    pub is_valid: bool,
    pub season: Season,
    /// The timestamp came from a device running on a degraded realtime
    /// clock.
    pub degraded_clock: bool,
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl Horodate {
    /// Decode a horodate from its raw field bytes.
    ///
    /// The field must be exactly [`HORODATE_SIZE`] bytes: a season byte
    /// (`H`/`h` winter, `E`/`e` summer, lowercase marking a degraded
    /// clock, space for no season) followed by six ASCII digit pairs for
    /// year, month, day, hour, minute and second. Years count from 2000.
    /// Any violation clears [`is_valid`](Self::is_valid) without
    /// discarding the fields already decoded.
    pub fn parse(bytes: &[u8]) -> Self {
        let mut horodate = Self::default();
        if bytes.len() != HORODATE_SIZE {
            return horodate;
        }

        let season_ok = match bytes[0] {
            b'H' => {
                horodate.season = Season::Winter;
                true
            }
            b'h' => {
                horodate.season = Season::Winter;
                horodate.degraded_clock = true;
                true
            }
            b'E' => {
                horodate.season = Season::Summer;
                true
            }
            b'e' => {
                horodate.season = Season::Summer;
                horodate.degraded_clock = true;
                true
            }
            b' ' => true,
            _ => {
                horodate.season = Season::Malformed;
                false
            }
        };

        horodate.is_valid = season_ok && horodate.read_datetime(&bytes[1..]).is_some();
        horodate
    }

    /// Decode the six digit pairs into the date fields, then range-check
    /// them. `None` on the first non-digit pair or out-of-range field.
    fn read_datetime(&mut self, digits: &[u8]) -> Option<()> {
        self.year = 2000 + u16::from(digit_pair(digits, 0)?);
        self.month = digit_pair(digits, 2)?;
        self.day = digit_pair(digits, 4)?;
        self.hour = digit_pair(digits, 6)?;
        self.minute = digit_pair(digits, 8)?;
        self.second = digit_pair(digits, 10)?;

        ((1..=12).contains(&self.month)
            && (1..=31).contains(&self.day)
            && self.hour <= 24
            && self.minute < 60
            && self.second < 60)
            .then_some(())
    }

    fn datetime(&self) -> (u16, u8, u8, u8, u8, u8) {
        (
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        )
    }
}

fn digit_pair(digits: &[u8], at: usize) -> Option<u8> {
    let tens = digits[at];
    let units = digits[at + 1];
    (tens.is_ascii_digit() && units.is_ascii_digit())
        .then(|| (tens - b'0') * 10 + (units - b'0'))
}

impl fmt::Display for Horodate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )?;
        match self.season {
            Season::Winter => f.write_str(" (winter)")?,
            Season::Summer => f.write_str(" (summer)")?,
            Season::Unknown | Season::Malformed => {}
        }
        if self.degraded_clock {
            f.write_str(" (degraded clock)")?;
        }
        Ok(())
    }
}

impl PartialEq for Horodate {
    fn eq(&self, other: &Self) -> bool {
        self.datetime() == other.datetime()
    }
}

impl Eq for Horodate {}

impl PartialOrd for Horodate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Horodate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.datetime().cmp(&other.datetime())
    }
}
