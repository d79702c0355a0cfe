use crate::{Error, Result};
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Three-month bucket of a year, labeled `Q<n> <year>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Quarter {
    year: i32,
    number: u8,
}

impl Quarter {
    /// `number` must be 1..=4.
    pub fn new(year: i32, number: u8) -> Option<Self> {
        (1..=4).contains(&number).then_some(Self { year, number })
    }

    /// Quarter containing `month` (1-based); out-of-range months clamp.
    pub fn from_month(year: i32, month: u32) -> Self {
        let month = month.clamp(1, 12);
        Self {
            year,
            number: ((month - 1) / 3 + 1) as u8,
        }
    }

    pub fn containing(dt: &DateTime<Utc>) -> Self {
        Self::from_month(dt.year(), dt.month())
    }

    /// The four quarters of `year`, in calendar order.
    pub fn all(year: i32) -> [Quarter; 4] {
        [1, 2, 3, 4].map(|number| Quarter { year, number })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    /// Label without the year, e.g. `Q3`.
    pub fn short_label(&self) -> String {
        format!("Q{}", self.number)
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{} {}", self.number, self.year)
    }
}

impl FromStr for Quarter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidQuarter(s.to_string());

        let (q, year) = s.trim().split_once(' ').ok_or_else(invalid)?;
        let number = q
            .strip_prefix('Q')
            .and_then(|n| n.parse::<u8>().ok())
            .ok_or_else(invalid)?;
        let year = year.trim().parse::<i32>().map_err(|_| invalid())?;

        Quarter::new(year, number).ok_or_else(invalid)
    }
}

impl Serialize for Quarter {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Quarter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
