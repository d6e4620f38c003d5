/// Offset from the Gregorian year to the Year of Our Lady of Discord
pub const YOLD_OFFSET: i32 = 1166;

/// Number of seasons in a Discordian year
pub const SEASON_COUNT: usize = 5;

/// Length of every season, in days
pub const DAYS_PER_SEASON: u8 = 73;

/// Length of the Discordian week
pub const DAYS_PER_WEEK: u8 = 5;

/// Days in a Discordian year, not counting St. Tib's Day
pub const DAYS_PER_YEAR: u16 = 365;

/// First day of a season, used for lower bounds
pub const MIN_SEASON_DAY: u8 = 1;

/// Gregorian day-of-year of February 29 in a leap year
pub const ST_TIBS_DAY_ORDINAL: u32 = 60;

/// Value reported by `day_of_season()` on St. Tib's Day.
/// It is not a real season day: St. Tib's Day falls between Chaos 59 and Chaos 60.
pub const ST_TIBS_DAY_SENTINEL: u8 = 60;

/// Season day carrying the apostle holyday
pub const APOSTLE_HOLYDAY: u8 = 5;

/// Season day carrying the season ("flux") holyday
pub const FLUX_HOLYDAY: u8 = 50;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Months per Gregorian year
pub(crate) const MONTHS_PER_YEAR: u32 = 12;

/// Lower bound of the random future-date window, in years from today (inclusive)
pub const FUTURE_MIN_YEARS: u32 = 5;
/// Upper bound of the random future-date window, in years from today (exclusive)
pub const FUTURE_MAX_YEARS: u32 = 56;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';

/// Locale tag used when none is given or the requested one is unknown
pub const DEFAULT_LOCALE: &str = "en";
