//! Time service trait and desktop implementation.

use folio_types::error::{FolioError, Result};

// ---------------------------------------------------------------------------
// Calendar types
// ---------------------------------------------------------------------------

/// A calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl Date {
    pub const fn new(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Whole years elapsed from `self` until `today`.
    ///
    /// The year only counts once the anniversary has been reached.
    pub fn years_until(&self, today: Date) -> u16 {
        let mut years = today.year.saturating_sub(self.year);
        if (today.month, today.day) < (self.month, self.day) {
            years = years.saturating_sub(1);
        }
        years
    }

    /// English month name, e.g. "July".
    pub fn month_name(&self) -> &'static str {
        const NAMES: [&str; 12] = [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ];
        NAMES
            .get(usize::from(self.month.saturating_sub(1)))
            .copied()
            .unwrap_or("January")
    }

    /// Long US-style date, e.g. "July 11, 2001".
    pub fn long_format(&self) -> String {
        format!("{} {}, {}", self.month_name(), self.day, self.year)
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// A simple wall-clock timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl SystemTime {
    pub fn date(&self) -> Date {
        Date::new(self.year, self.month, self.day)
    }
}

impl std::fmt::Display for SystemTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second,
        )
    }
}

// ---------------------------------------------------------------------------
// Time service
// ---------------------------------------------------------------------------

/// Abstraction over platform time services.
pub trait TimeService {
    /// Current wall-clock time.
    fn now(&self) -> Result<SystemTime>;

    /// A value that changes between calls, for non-cryptographic random
    /// picks (quotes).
    fn entropy(&self) -> u64;
}

// ---------------------------------------------------------------------------
// Desktop implementation
// ---------------------------------------------------------------------------

/// Default platform implementation using `std` facilities.
pub struct DesktopPlatform {
    start_time: std::time::Instant,
}

impl DesktopPlatform {
    pub fn new() -> Self {
        Self {
            start_time: std::time::Instant::now(),
        }
    }
}

impl Default for DesktopPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeService for DesktopPlatform {
    fn now(&self) -> Result<SystemTime> {
        use std::time::SystemTime as StdTime;
        let dur = StdTime::now()
            .duration_since(StdTime::UNIX_EPOCH)
            .map_err(|e| FolioError::Platform(format!("clock before epoch: {e}")))?;
        let secs = dur.as_secs();

        // UTC only.
        let days = secs / 86400;
        let time_of_day = secs % 86400;
        let hour = (time_of_day / 3600) as u8;
        let minute = ((time_of_day % 3600) / 60) as u8;
        let second = (time_of_day % 60) as u8;

        let (year, month, day) = days_to_ymd(days);

        Ok(SystemTime {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    fn entropy(&self) -> u64 {
        let wall = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as u64;
        wall ^ self.start_time.elapsed().as_nanos() as u64
    }
}

// ---------------------------------------------------------------------------
// Date helpers
// ---------------------------------------------------------------------------

const MONTH_DAYS: [u64; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

fn year_len(year: u16) -> u64 {
    if is_leap(year) { 366 } else { 365 }
}

/// Civil (year, month, day) for a count of days since 1970-01-01, UTC.
pub(crate) fn days_to_ymd(mut days: u64) -> (u16, u8, u8) {
    let mut year = 1970u16;
    while days >= year_len(year) {
        days -= year_len(year);
        year += 1;
    }
    let mut month = 1u8;
    for (index, &len) in MONTH_DAYS.iter().enumerate() {
        let len = if index == 1 && is_leap(year) { len + 1 } else { len };
        if days < len {
            break;
        }
        days -= len;
        month += 1;
    }
    (year, month, days as u8 + 1)
}

pub(crate) fn is_leap(year: u16) -> bool {
    year.is_multiple_of(400) || (year.is_multiple_of(4) && !year.is_multiple_of(100))
}
