use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};

/// Wrapper type to parse a calendar date in the formats users actually type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateArg(pub NaiveDate);

impl FromStr for DateArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d.%m.%Y"];

        let s = s.trim();
        FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
            .map(DateArg)
            .ok_or_else(|| format!("Cannot parse date: {s}"))
    }
}

/// Wrapper type to parse a time of day with optional fractional seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeArg(pub NaiveTime);

impl FromStr for TimeArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const FORMATS: &[&str] = &["%H:%M:%S%.f", "%H:%M:%S", "%H:%M"];

        let s = s.trim();
        FORMATS
            .iter()
            .find_map(|fmt| NaiveTime::parse_from_str(s, fmt).ok())
            .map(TimeArg)
            .ok_or_else(|| format!("Cannot parse time: {s}"))
    }
}
