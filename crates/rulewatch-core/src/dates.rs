//! Lenient publication-date parsing.
//!
//! Parsing never fails: every input maps to a [`DateField`] so callers can
//! see exactly which records were excluded from date-bucketed output and why.

use std::ops::RangeInclusive;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%Y%m%d", "%m/%d/%Y"];
const DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Years accepted as real publication dates. Anything outside is a typo or
/// a sentinel and is treated as unparseable.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1677..=2262;

/// Outcome of leniently parsing a `date` column value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateField {
    Valid(NaiveDate),
    /// A non-blank value that matched no supported format, or whose year is
    /// outside [`SUPPORTED_YEARS`].
    Invalid(String),
    /// Absent, empty, or whitespace-only.
    Missing,
}

impl DateField {
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Self::Missing;
        };
        parse_lenient(raw).map_or_else(|| Self::Invalid(raw.to_string()), Self::Valid)
    }

    #[must_use]
    pub fn valid(&self) -> Option<NaiveDate> {
        match self {
            Self::Valid(d) => Some(*d),
            Self::Invalid(_) | Self::Missing => None,
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

/// Tries each supported format in turn. Timestamps keep only their date.
fn parse_lenient(raw: &str) -> Option<NaiveDate> {
    let date = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|dt| dt.date())
        })?;
    SUPPORTED_YEARS.contains(&date.year()).then_some(date)
}
