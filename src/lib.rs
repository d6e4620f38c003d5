mod consts;
mod convert;
mod format;
mod locale;
mod prelude;
mod types;

pub use consts::*;
pub use convert::{
    ConversionError, day_of_death, from_iso, from_string, from_ymd, random_future_date,
    random_future_date_with, to_discordian, to_gregorian, to_iso, today,
};
pub use format::{FormatOptions, format, short_format};
pub use locale::{EN, LOCALES, LocalizedStrings, PT_BR, find_locale, get_locale, locale_tags};
pub use types::{Holyday, Season, SeasonDay, Weekday, is_leap_year};

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A date in the Discordian calendar.
///
/// St. Tib's Day sits outside the season and week cycle, so it is its own
/// variant. Weekday and holyday are derived from the season and day, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "DiscordianRecord", try_from = "DiscordianRecord")]
pub enum DiscordianDate {
    /// A regular day within one of the five seasons
    Day {
        year:   i32,
        season: Season,
        day:    SeasonDay,
    },
    /// The intercalary day following Chaos 59 in leap years
    StTibsDay { year: i32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Empty date string")]
    EmptyInput,
    #[display(fmt = "Invalid day of season: {} (must be 1-{})", "_0", DAYS_PER_SEASON)]
    InvalidSeasonDay(u8),
    #[display(fmt = "Unknown season: {_0}")]
    UnknownSeason(String),
    #[display(fmt = "Unknown weekday: {_0}")]
    UnknownWeekday(String),
    #[display(fmt = "Unknown holyday: {_0}")]
    UnknownHolyday(String),
    #[display(fmt = "Date out of range: {_0}")]
    OutOfRange(String),
    #[display(fmt = "St. Tib's Day does not occur in {_0} YOLD")]
    NotALeapYear(i32),
    #[display(fmt = "Inconsistent Discordian date record: {_0}")]
    InconsistentRecord(String),
}

impl std::error::Error for ParseError {}

impl DiscordianDate {
    /// Creates a regular season day
    ///
    /// # Errors
    /// Returns `ParseError::InvalidSeasonDay` if `day` is not in `1..=73`.
    pub fn new(year: i32, season: Season, day: u8) -> Result<Self, ParseError> {
        Ok(Self::Day {
            year,
            season,
            day: SeasonDay::new(day)?,
        })
    }

    /// Creates St. Tib's Day of the given YOLD year
    ///
    /// # Errors
    /// Returns `ParseError::NotALeapYear` if the matching Gregorian year has no February 29.
    pub fn st_tibs_day(year: i32) -> Result<Self, ParseError> {
        if gregorian_year(year).is_some_and(is_leap_year) {
            Ok(Self::StTibsDay { year })
        } else {
            Err(ParseError::NotALeapYear(year))
        }
    }

    /// Builds a regular day from a 1-based day of the 365-day Discordian year
    pub(crate) const fn from_year_day(year: i32, year_day: u16) -> Self {
        let (season, day) = SeasonDay::from_year_day(year_day);
        Self::Day { year, season, day }
    }

    /// Year of Our Lady of Discord
    pub const fn year(&self) -> i32 {
        match *self {
            Self::Day { year, .. } | Self::StTibsDay { year } => year,
        }
    }

    /// Gregorian year this date falls in, if it is representable
    pub const fn gregorian_year(&self) -> Option<i32> {
        gregorian_year(self.year())
    }

    /// Season of the date. St. Tib's Day reports Chaos, the season it interrupts.
    pub const fn season(&self) -> Season {
        match *self {
            Self::Day { season, .. } => season,
            Self::StTibsDay { .. } => Season::Chaos,
        }
    }

    /// Day within the season.
    ///
    /// On St. Tib's Day this is [`ST_TIBS_DAY_SENTINEL`], which is not a real
    /// season day; check [`is_st_tibs_day`](Self::is_st_tibs_day) or use
    /// [`season_day`](Self::season_day) instead.
    pub const fn day_of_season(&self) -> u8 {
        match *self {
            Self::Day { day, .. } => day.get(),
            Self::StTibsDay { .. } => ST_TIBS_DAY_SENTINEL,
        }
    }

    /// Season day, absent on St. Tib's Day
    pub const fn season_day(&self) -> Option<SeasonDay> {
        match *self {
            Self::Day { day, .. } => Some(day),
            Self::StTibsDay { .. } => None,
        }
    }

    /// 1-based day of the 365-day Discordian year, absent on St. Tib's Day
    pub const fn year_day(&self) -> Option<u16> {
        match *self {
            Self::Day { season, day, .. } => Some(day.year_day(season)),
            Self::StTibsDay { .. } => None,
        }
    }

    pub const fn weekday(&self) -> Option<Weekday> {
        match self.year_day() {
            Some(year_day) => Some(Weekday::for_year_day(year_day)),
            None => None,
        }
    }

    pub const fn holyday(&self) -> Option<Holyday> {
        match *self {
            Self::Day { season, day, .. } => Holyday::for_day(season, day),
            Self::StTibsDay { .. } => None,
        }
    }

    pub const fn is_st_tibs_day(&self) -> bool {
        matches!(self, Self::StTibsDay { .. })
    }

    /// Flat record view with every derived field filled in
    pub fn to_record(&self) -> DiscordianRecord {
        DiscordianRecord::from(*self)
    }

    /// Position within the year used for ordering: St. Tib's Day lands
    /// between Chaos 59 and Chaos 60.
    #[inline]
    fn ordinal_rank(&self) -> u32 {
        match self.year_day() {
            Some(year_day) => u32::from(year_day) * 2,
            None => (ST_TIBS_DAY_ORDINAL - 1) * 2 + 1,
        }
    }
}

const fn gregorian_year(yold: i32) -> Option<i32> {
    yold.checked_sub(YOLD_OFFSET)
}

impl PartialOrd for DiscordianDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DiscordianDate {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.year().cmp(&other.year()) {
            Ordering::Equal => self.ordinal_rank().cmp(&other.ordinal_rank()),
            ord => ord,
        }
    }
}

/// Flat, serializable form of a [`DiscordianDate`].
///
/// `weekday` and `holyday` are `None` on St. Tib's Day, where `season` is
/// Chaos and `day_of_season` carries [`ST_TIBS_DAY_SENTINEL`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscordianRecord {
    pub year:           i32,
    pub season:         Season,
    pub day_of_season:  u8,
    #[serde(default)]
    pub weekday:        Option<Weekday>,
    #[serde(default)]
    pub holyday:        Option<Holyday>,
    #[serde(default)]
    pub is_st_tibs_day: bool,
}

impl From<DiscordianDate> for DiscordianRecord {
    fn from(date: DiscordianDate) -> Self {
        Self {
            year:           date.year(),
            season:         date.season(),
            day_of_season:  date.day_of_season(),
            weekday:        date.weekday(),
            holyday:        date.holyday(),
            is_st_tibs_day: date.is_st_tibs_day(),
        }
    }
}

impl TryFrom<DiscordianRecord> for DiscordianDate {
    type Error = ParseError;

    /// Validates a record. Weekday and holyday may be omitted, but when
    /// present they must match the ones the season day implies.
    fn try_from(record: DiscordianRecord) -> Result<Self, Self::Error> {
        if record.is_st_tibs_day {
            if record.weekday.is_some() || record.holyday.is_some() {
                return Err(ParseError::InconsistentRecord(
                    "St. Tib's Day has no weekday or holyday".to_owned(),
                ));
            }
            if record.season != Season::Chaos || record.day_of_season != ST_TIBS_DAY_SENTINEL {
                return Err(ParseError::InconsistentRecord(format!(
                    "St. Tib's Day is reported as Chaos {ST_TIBS_DAY_SENTINEL}, not {} {}",
                    record.season, record.day_of_season
                )));
            }
            return Self::st_tibs_day(record.year);
        }

        let date = Self::new(record.year, record.season, record.day_of_season)?;
        if let Some(weekday) = record.weekday.filter(|w| Some(*w) != date.weekday()) {
            return Err(ParseError::InconsistentRecord(format!(
                "{} {} is not a {weekday}",
                record.season, record.day_of_season
            )));
        }
        if let Some(holyday) = record.holyday.filter(|h| Some(*h) != date.holyday()) {
            return Err(ParseError::InconsistentRecord(format!(
                "{} {} is not {holyday}",
                record.season, record.day_of_season
            )));
        }
        Ok(date)
    }
}
