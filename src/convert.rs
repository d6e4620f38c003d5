//! Gregorian to Discordian conversion and back.

use chrono::{DateTime, Datelike, Local, Months, NaiveDate, NaiveDateTime, TimeDelta};
use rand::Rng;
use tracing::{debug, trace};

use crate::consts::{
    DAYS_PER_YEAR, FUTURE_MAX_YEARS, FUTURE_MIN_YEARS, MONTHS_PER_YEAR,
    ST_TIBS_DAY_ORDINAL, YOLD_OFFSET,
};
use crate::{DiscordianDate, ParseError, is_leap_year};

/// Output layout of [`to_iso`]
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// ISO 8601 date-times without an offset, tried after plain dates and RFC 3339
const ISO_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Free-form date layouts accepted by [`from_string`] on top of the ISO ones.
/// Month names match full or abbreviated, in any case.
const HUMAN_DATE_FORMATS: &[&str] = &[
    "%B %d, %Y",
    "%B %d %Y",
    "%A, %B %d, %Y",
    "%d %B %Y",
    "%d %B, %Y",
    "%m/%d/%Y",
    "%Y/%m/%d",
];

/// Error type for the Discordian to Gregorian direction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// The Gregorian counterpart of this YOLD year is not representable.
    #[error("Year {0} YOLD is outside the supported Gregorian range")]
    YearOutOfRange(i32),

    /// The random future-date window runs past the supported range.
    #[error("Random date window starting from {0} is outside the supported range")]
    WindowOutOfRange(NaiveDate),

    /// The Discordian date itself is malformed.
    #[error(transparent)]
    ParseError(#[from] ParseError),
}

/// Converts any chrono date to the Discordian calendar.
///
/// The calendar fields of `date` are used as they are, so a
/// `DateTime<Local>` converts the local day and a `DateTime<Utc>` the UTC day.
pub fn to_discordian<D: Datelike + ?Sized>(date: &D) -> DiscordianDate {
    let year = date.year().saturating_add(YOLD_OFFSET);
    let ordinal = date.ordinal();
    let leap = is_leap_year(date.year());

    if leap && ordinal == ST_TIBS_DAY_ORDINAL {
        return DiscordianDate::StTibsDay { year };
    }

    // Drop St. Tib's Day out of the count so the rest of a leap year lines
    // up with the 365-day cycle.
    let adjusted = if leap && ordinal > ST_TIBS_DAY_ORDINAL {
        ordinal - 1
    } else {
        ordinal
    };
    // chrono ordinals are at most 366, so the adjusted day is at most 365.
    let year_day = u16::try_from(adjusted).unwrap_or(DAYS_PER_YEAR);
    DiscordianDate::from_year_day(year, year_day)
}

/// Today's local date in the Discordian calendar
pub fn today() -> DiscordianDate {
    to_discordian(&Local::now().date_naive())
}

/// Parses an ISO 8601 date or date-time and converts it.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM[:SS[.fff]]` and RFC 3339 date-times.
/// The date is taken as written; an offset does not shift it to another day.
///
/// # Errors
/// Returns `ParseError::EmptyInput` for blank input and
/// `ParseError::InvalidFormat` when the text is not an ISO date.
pub fn from_iso(text: &str) -> Result<DiscordianDate, ParseError> {
    let trimmed = non_empty(text)?;
    parse_iso_date(trimmed)
        .map(|date| to_discordian(&date))
        .ok_or_else(|| {
            debug!(input = trimmed, "unrecognized ISO 8601 date");
            ParseError::InvalidFormat(trimmed.to_owned())
        })
}

/// Parses date text in any recognized layout and converts it.
///
/// On top of everything [`from_iso`] accepts, this understands RFC 2822 and
/// common written forms such as `January 5, 2024`, `5 January 2024`,
/// `01/05/2024` (month first) and `2024/01/05`.
///
/// # Errors
/// Returns `ParseError::EmptyInput` for blank input and
/// `ParseError::InvalidFormat` when no layout matches.
pub fn from_string(text: &str) -> Result<DiscordianDate, ParseError> {
    let trimmed = non_empty(text)?;
    parse_iso_date(trimmed)
        .or_else(|| {
            DateTime::parse_from_rfc2822(trimmed)
                .ok()
                .map(|dt| dt.date_naive())
        })
        .or_else(|| {
            HUMAN_DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        })
        .map(|date| to_discordian(&date))
        .ok_or_else(|| {
            debug!(input = trimmed, "unrecognized date text");
            ParseError::InvalidFormat(trimmed.to_owned())
        })
}

/// Converts a Gregorian year, 1-based month and day.
///
/// Out-of-range months and days roll over instead of being rejected:
/// month 13 is January of the next year, month 0 December of the previous
/// one, day 0 the last day of the previous month and day 32 of January is
/// February 1.
///
/// # Errors
/// Returns `ParseError::OutOfRange` only if the normalized date cannot be represented.
pub fn from_ymd(year: i32, month: i32, day: i32) -> Result<DiscordianDate, ParseError> {
    let out_of_range = || ParseError::OutOfRange(format!("{year}-{month}-{day}"));

    let months_per_year = i64::from(MONTHS_PER_YEAR);
    let month0 = i64::from(month) - 1;
    let year_norm = i32::try_from(i64::from(year) + month0.div_euclid(months_per_year))
        .map_err(|_| out_of_range())?;
    let month_norm = u32::try_from(month0.rem_euclid(months_per_year) + 1)
        .map_err(|_| out_of_range())?;

    let date = NaiveDate::from_ymd_opt(year_norm, month_norm, 1)
        .zip(TimeDelta::try_days(i64::from(day) - 1))
        .and_then(|(first, offset)| first.checked_add_signed(offset))
        .ok_or_else(out_of_range)?;
    Ok(to_discordian(&date))
}

/// Converts a Discordian date back to its Gregorian day.
///
/// # Errors
/// Returns `ConversionError::YearOutOfRange` if the Gregorian year is not
/// representable, or `ParseError::NotALeapYear` for a St. Tib's Day built
/// for a year without February 29.
pub fn to_gregorian(date: &DiscordianDate) -> Result<NaiveDate, ConversionError> {
    let yold = date.year();
    let year = date
        .gregorian_year()
        .ok_or(ConversionError::YearOutOfRange(yold))?;
    let leap = is_leap_year(year);

    let ordinal = match date.year_day() {
        None if !leap => return Err(ParseError::NotALeapYear(yold).into()),
        None => ST_TIBS_DAY_ORDINAL,
        Some(year_day) => {
            let ordinal = u32::from(year_day);
            // Put St. Tib's Day back into the count.
            if leap && ordinal >= ST_TIBS_DAY_ORDINAL {
                ordinal + 1
            } else {
                ordinal
            }
        }
    };

    NaiveDate::from_yo_opt(year, ordinal).ok_or(ConversionError::YearOutOfRange(yold))
}

/// Gregorian day of a Discordian date as `YYYY-MM-DD`
///
/// # Errors
/// Fails under the same conditions as [`to_gregorian`].
pub fn to_iso(date: &DiscordianDate) -> Result<String, ConversionError> {
    let gregorian = to_gregorian(date)?;
    // %Y pads to four digits after the sign, so years before 1 CE stay ISO 8601 expanded.
    Ok(gregorian.format(ISO_DATE_FORMAT).to_string())
}

/// A uniformly random day at least 5 and less than 56 years from today.
///
/// Uses the thread-local generator; not suitable for anything secret.
///
/// # Errors
/// Returns `ConversionError::WindowOutOfRange` only near the end of the
/// representable calendar.
pub fn random_future_date() -> Result<DiscordianDate, ConversionError> {
    random_future_date_with(&mut rand::rng(), Local::now().date_naive())
}

/// Alias of [`random_future_date`].
///
/// # Errors
/// See [`random_future_date`].
pub fn day_of_death() -> Result<DiscordianDate, ConversionError> {
    random_future_date()
}

/// Draws a day uniformly from `[today + 5 years, today + 56 years)`.
///
/// Years are added as calendar months, so February 29 lands on February 28
/// in a non-leap target year.
///
/// # Errors
/// Returns `ConversionError::WindowOutOfRange` if the window leaves the
/// representable calendar.
pub fn random_future_date_with(
    rng: &mut impl Rng,
    today: NaiveDate,
) -> Result<DiscordianDate, ConversionError> {
    let start = add_years(today, FUTURE_MIN_YEARS)?;
    let end = add_years(today, FUTURE_MAX_YEARS)?;
    let span = end.signed_duration_since(start).num_days();
    trace!(%start, %end, span, "drawing random future date");

    let offset = rng.random_range(0..span);
    let date = TimeDelta::try_days(offset)
        .and_then(|delta| start.checked_add_signed(delta))
        .ok_or(ConversionError::WindowOutOfRange(today))?;
    Ok(to_discordian(&date))
}

fn add_years(date: NaiveDate, years: u32) -> Result<NaiveDate, ConversionError> {
    date.checked_add_months(Months::new(years * MONTHS_PER_YEAR))
        .ok_or(ConversionError::WindowOutOfRange(date))
}

fn non_empty(text: &str) -> Result<&str, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Err(ParseError::EmptyInput)
    } else {
        Ok(trimmed)
    }
}

fn parse_iso_date(text: &str) -> Option<NaiveDate> {
    text.parse::<NaiveDate>()
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|dt| dt.date_naive())
        })
        .or_else(|| {
            ISO_DATE_TIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
                .map(|dt| dt.date())
        })
}

impl From<NaiveDate> for DiscordianDate {
    fn from(date: NaiveDate) -> Self {
        to_discordian(&date)
    }
}

impl TryFrom<DiscordianDate> for NaiveDate {
    type Error = ConversionError;

    fn try_from(date: DiscordianDate) -> Result<Self, Self::Error> {
        to_gregorian(&date)
    }
}
