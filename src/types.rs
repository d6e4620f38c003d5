use crate::consts::{
    APOSTLE_HOLYDAY, CENTURY_CYCLE, DAYS_PER_SEASON, DAYS_PER_WEEK, DAYS_PER_YEAR, FLUX_HOLYDAY,
    GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, SEASON_COUNT,
};
use crate::ParseError;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;
use std::str::FromStr;

/// One of the five 73-day seasons of the Discordian year, in calendar order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
pub enum Season {
    Chaos,
    Discord,
    Confusion,
    Bureaucracy,
    #[display(fmt = "The Aftermath")]
    #[serde(rename = "The Aftermath")]
    TheAftermath,
}

impl Season {
    pub const ALL: [Self; SEASON_COUNT] = [
        Self::Chaos,
        Self::Discord,
        Self::Confusion,
        Self::Bureaucracy,
        Self::TheAftermath,
    ];

    /// Zero-based position of the season within the year
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the season at a zero-based position, if there is one
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < SEASON_COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }
}

impl FromStr for Season {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|season| season.to_string() == s)
            .ok_or_else(|| ParseError::UnknownSeason(s.to_owned()))
    }
}

/// One of the five days of the Discordian week.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
pub enum Weekday {
    Sweetmorn,
    Boomtime,
    Pungenday,
    #[display(fmt = "Prickle-Prickle")]
    #[serde(rename = "Prickle-Prickle")]
    PricklePrickle,
    #[display(fmt = "Setting Orange")]
    #[serde(rename = "Setting Orange")]
    SettingOrange,
}

impl Weekday {
    pub const ALL: [Self; DAYS_PER_WEEK as usize] = [
        Self::Sweetmorn,
        Self::Boomtime,
        Self::Pungenday,
        Self::PricklePrickle,
        Self::SettingOrange,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Weekday of the given 1-based day of the 365-day Discordian year.
    /// The week runs continuously across season boundaries; day 0 counts as day 1.
    pub const fn for_year_day(year_day: u16) -> Self {
        Self::ALL[(year_day.saturating_sub(1) % DAYS_PER_WEEK as u16) as usize]
    }
}

impl FromStr for Weekday {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|weekday| weekday.to_string() == s)
            .ok_or_else(|| ParseError::UnknownWeekday(s.to_owned()))
    }
}

/// The ten holydays: an apostle holyday on day 5 and a flux holyday on day 50
/// of every season.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
pub enum Holyday {
    Mungday,
    Mojoday,
    Syaday,
    Zaraday,
    Maladay,
    Chaoflux,
    Discoflux,
    Confuflux,
    Bureflux,
    Afflux,
}

impl Holyday {
    pub const ALL: [Self; 2 * SEASON_COUNT] = [
        Self::Mungday,
        Self::Mojoday,
        Self::Syaday,
        Self::Zaraday,
        Self::Maladay,
        Self::Chaoflux,
        Self::Discoflux,
        Self::Confuflux,
        Self::Bureflux,
        Self::Afflux,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Apostle holyday falling on day 5 of `season`
    pub const fn apostle(season: Season) -> Self {
        Self::ALL[season.index()]
    }

    /// Season holyday falling on day 50 of `season`
    pub const fn flux(season: Season) -> Self {
        Self::ALL[SEASON_COUNT + season.index()]
    }

    /// Holyday celebrated on the given season day, if any
    pub const fn for_day(season: Season, day: SeasonDay) -> Option<Self> {
        match day.get() {
            APOSTLE_HOLYDAY => Some(Self::apostle(season)),
            FLUX_HOLYDAY => Some(Self::flux(season)),
            _ => None,
        }
    }

    /// Season this holyday belongs to
    pub const fn season(self) -> Season {
        Season::ALL[self.index() % SEASON_COUNT]
    }

    /// Day of its season on which this holyday falls
    pub const fn day(self) -> u8 {
        if self.index() < SEASON_COUNT {
            APOSTLE_HOLYDAY
        } else {
            FLUX_HOLYDAY
        }
    }
}

impl FromStr for Holyday {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|holyday| holyday.to_string() == s)
            .ok_or_else(|| ParseError::UnknownHolyday(s.to_owned()))
    }
}

/// A day of a season, guaranteed to be in the range `1..=DAYS_PER_SEASON` (1..=73)
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SeasonDay(NonZeroU8);

impl SeasonDay {
    /// Creates a new `SeasonDay`, validating that it's non-zero and <= `DAYS_PER_SEASON`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidSeasonDay` if the value is 0 or > `DAYS_PER_SEASON`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidSeasonDay(value))?;
        if value > DAYS_PER_SEASON {
            return Err(ParseError::InvalidSeasonDay(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Splits a 1-based day of the 365-day Discordian year into season and season day.
    /// Values outside `1..=365` are clamped to the first or last day of the year.
    pub(crate) const fn from_year_day(year_day: u16) -> (Season, Self) {
        let zero_based = year_day.saturating_sub(1);
        let zero_based = if zero_based < DAYS_PER_YEAR { zero_based } else { DAYS_PER_YEAR - 1 };
        let season_len = DAYS_PER_SEASON as u16;
        let season = Season::ALL[(zero_based / season_len) as usize];
        // Remainder is below DAYS_PER_SEASON, so the cast is lossless.
        let day = NonZeroU8::MIN.saturating_add((zero_based % season_len) as u8);
        (season, Self(day))
    }

    /// 1-based day of the 365-day Discordian year for this day in `season`
    pub const fn year_day(self, season: Season) -> u16 {
        season.index() as u16 * DAYS_PER_SEASON as u16 + self.get() as u16
    }
}

impl TryFrom<u8> for SeasonDay {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SeasonDay> for u8 {
    fn from(day: SeasonDay) -> Self {
        day.0.get()
    }
}

impl fmt::Display for SeasonDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_display_and_parse() {
        let names = ["Chaos", "Discord", "Confusion", "Bureaucracy", "The Aftermath"];
        for (season, name) in Season::ALL.into_iter().zip(names) {
            assert_eq!(season.to_string(), name);
            assert_eq!(name.parse::<Season>().unwrap(), season);
        }
    }

    #[test]
    fn test_season_parse_unknown() {
        let result = "Aftermath".parse::<Season>();
        assert!(matches!(result, Err(ParseError::UnknownSeason(ref s)) if s == "Aftermath"));
    }

    #[test]
    fn test_season_from_index() {
        assert_eq!(Season::from_index(0), Some(Season::Chaos));
        assert_eq!(Season::from_index(4), Some(Season::TheAftermath));
        assert_eq!(Season::from_index(5), None);
    }

    #[test]
    fn test_season_serde() {
        let json = serde_json::to_string(&Season::TheAftermath).unwrap();
        assert_eq!(json, "\"The Aftermath\"");

        let parsed: Season = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Season::TheAftermath);
    }

    #[test]
    fn test_weekday_display_and_parse() {
        let names = [
            "Sweetmorn",
            "Boomtime",
            "Pungenday",
            "Prickle-Prickle",
            "Setting Orange",
        ];
        for (weekday, name) in Weekday::ALL.into_iter().zip(names) {
            assert_eq!(weekday.to_string(), name);
            assert_eq!(name.parse::<Weekday>().unwrap(), weekday);
        }
        assert!(matches!(
            "Sunday".parse::<Weekday>(),
            Err(ParseError::UnknownWeekday(_))
        ));
    }

    #[test]
    fn test_weekday_cycles_across_seasons() {
        assert_eq!(Weekday::for_year_day(0), Weekday::Sweetmorn);
        assert_eq!(Weekday::for_year_day(1), Weekday::Sweetmorn);
        assert_eq!(Weekday::for_year_day(5), Weekday::SettingOrange);
        assert_eq!(Weekday::for_year_day(6), Weekday::Sweetmorn);
        // Chaos 73 and Discord 1 are consecutive weekdays.
        assert_eq!(Weekday::for_year_day(73), Weekday::Pungenday);
        assert_eq!(Weekday::for_year_day(74), Weekday::PricklePrickle);
        assert_eq!(Weekday::for_year_day(365), Weekday::SettingOrange);
    }

    #[test]
    fn test_holyday_per_season() {
        struct TestCase {
            season:  Season,
            apostle: Holyday,
            flux:    Holyday,
        }

        let cases = [
            TestCase {
                season:  Season::Chaos,
                apostle: Holyday::Mungday,
                flux:    Holyday::Chaoflux,
            },
            TestCase {
                season:  Season::Discord,
                apostle: Holyday::Mojoday,
                flux:    Holyday::Discoflux,
            },
            TestCase {
                season:  Season::Confusion,
                apostle: Holyday::Syaday,
                flux:    Holyday::Confuflux,
            },
            TestCase {
                season:  Season::Bureaucracy,
                apostle: Holyday::Zaraday,
                flux:    Holyday::Bureflux,
            },
            TestCase {
                season:  Season::TheAftermath,
                apostle: Holyday::Maladay,
                flux:    Holyday::Afflux,
            },
        ];

        for case in &cases {
            assert_eq!(Holyday::apostle(case.season), case.apostle);
            assert_eq!(Holyday::flux(case.season), case.flux);
            assert_eq!(case.apostle.season(), case.season);
            assert_eq!(case.flux.season(), case.season);
            assert_eq!(case.apostle.day(), 5);
            assert_eq!(case.flux.day(), 50);
        }
    }

    #[test]
    fn test_holyday_for_day() {
        let day = |d| SeasonDay::new(d).unwrap();
        assert_eq!(Holyday::for_day(Season::Chaos, day(5)), Some(Holyday::Mungday));
        assert_eq!(Holyday::for_day(Season::Chaos, day(50)), Some(Holyday::Chaoflux));
        assert_eq!(Holyday::for_day(Season::Discord, day(4)), None);
        assert_eq!(Holyday::for_day(Season::Discord, day(51)), None);
        assert_eq!(Holyday::for_day(Season::TheAftermath, day(73)), None);
    }

    #[test]
    fn test_holyday_parse() {
        assert_eq!("Afflux".parse::<Holyday>().unwrap(), Holyday::Afflux);
        assert!(matches!(
            "Mungday ".parse::<Holyday>(),
            Err(ParseError::UnknownHolyday(_))
        ));
    }

    #[test]
    fn test_season_day_new_valid() {
        assert!(SeasonDay::new(1).is_ok());
        assert!(SeasonDay::new(37).is_ok());
        assert!(SeasonDay::new(73).is_ok());
    }

    #[test]
    fn test_season_day_new_invalid() {
        assert!(matches!(
            SeasonDay::new(0),
            Err(ParseError::InvalidSeasonDay(0))
        ));
        assert!(matches!(
            SeasonDay::new(74),
            Err(ParseError::InvalidSeasonDay(74))
        ));
    }

    #[test]
    fn test_season_day_try_from_and_into() {
        let day: SeasonDay = 50.try_into().unwrap();
        assert_eq!(day.get(), 50);
        let value: u8 = day.into();
        assert_eq!(value, 50);
        assert_eq!(day.to_string(), "50");

        let result: Result<SeasonDay, _> = 200.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_season_day_serde() {
        let day = SeasonDay::new(73).unwrap();
        let json = serde_json::to_string(&day).unwrap();
        assert_eq!(json, "73");

        let parsed: SeasonDay = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, day);
        assert!(serde_json::from_str::<SeasonDay>("74").is_err());
    }

    #[test]
    fn test_year_day_split_and_join() {
        struct TestCase {
            year_day: u16,
            season:   Season,
            day:      u8,
        }

        let cases = [
            TestCase { year_day: 1, season: Season::Chaos, day: 1 },
            TestCase { year_day: 73, season: Season::Chaos, day: 73 },
            TestCase { year_day: 74, season: Season::Discord, day: 1 },
            TestCase { year_day: 147, season: Season::Confusion, day: 1 },
            TestCase { year_day: 220, season: Season::Bureaucracy, day: 1 },
            TestCase { year_day: 293, season: Season::TheAftermath, day: 1 },
            TestCase { year_day: 365, season: Season::TheAftermath, day: 73 },
        ];

        for case in &cases {
            let (season, day) = SeasonDay::from_year_day(case.year_day);
            assert_eq!(season, case.season, "season of year day {}", case.year_day);
            assert_eq!(day.get(), case.day, "day of year day {}", case.year_day);
            assert_eq!(day.year_day(season), case.year_day);
        }
    }

    #[test]
    fn test_year_day_out_of_range_clamps() {
        let (season, day) = SeasonDay::from_year_day(0);
        assert_eq!((season, day.get()), (Season::Chaos, 1));

        let (season, day) = SeasonDay::from_year_day(366);
        assert_eq!((season, day.get()), (Season::TheAftermath, 73));

        let (season, day) = SeasonDay::from_year_day(u16::MAX);
        assert_eq!((season, day.get()), (Season::TheAftermath, 73));
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year:        i32,
            is_leap:     bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        2024,
                is_leap:     true,
                description: "divisible by 4",
            },
            TestCase {
                year:        2023,
                is_leap:     false,
                description: "not divisible by 4",
            },
            TestCase {
                year:        1900,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2100,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2000,
                is_leap:     true,
                description: "divisible by 400",
            },
            TestCase {
                year:        -4,
                is_leap:     true,
                description: "proleptic year before 1 BCE",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description
            );
        }
    }
}
