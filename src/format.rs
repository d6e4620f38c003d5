//! Human-readable rendering of Discordian dates.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::DiscordianDate;
use crate::consts::DEFAULT_LOCALE;
use crate::locale::get_locale;

/// Options for [`format`].
///
/// Deserializes from camelCase keys with every key optional, e.g.
/// `{"locale": "pt-BR", "includeWeekday": false}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormatOptions {
    /// Locale tag; unknown tags render in English
    pub locale:          String,
    pub include_holyday: bool,
    pub include_weekday: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            locale:          DEFAULT_LOCALE.to_owned(),
            include_holyday: true,
            include_weekday: true,
        }
    }
}

impl FormatOptions {
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    #[must_use]
    pub const fn include_weekday(mut self, include: bool) -> Self {
        self.include_weekday = include;
        self
    }

    #[must_use]
    pub const fn include_holyday(mut self, include: bool) -> Self {
        self.include_holyday = include;
        self
    }
}

/// Renders a date such as `Setting Orange, Chaos 5, 3190 YOLD - Mungday`.
///
/// St. Tib's Day always renders as `St. Tib's Day, 3190 YOLD`; the weekday
/// and holyday options do not apply to it.
pub fn format(date: &DiscordianDate, options: &FormatOptions) -> String {
    let strings = get_locale(&options.locale);

    let DiscordianDate::Day { year, season, day } = *date else {
        return format!("{}, {} {}", strings.st_tibs_day, date.year(), strings.yold);
    };

    let mut parts = Vec::with_capacity(3);
    if let Some(weekday) = date.weekday().filter(|_| options.include_weekday) {
        parts.push(strings.weekday(weekday).to_owned());
    }
    parts.push(format!("{} {day}", strings.season(season)));
    parts.push(format!("{year} {}", strings.yold));

    let mut out = parts.join(", ");
    if let Some(holyday) = date.holyday().filter(|_| options.include_holyday) {
        out.push_str(" - ");
        out.push_str(strings.holyday(holyday));
    }
    out
}

/// Season, day and year only, e.g. `Chaos 5, 3190 YOLD`
pub fn short_format(date: &DiscordianDate, locale: &str) -> String {
    let options = FormatOptions::default()
        .with_locale(locale)
        .include_weekday(false)
        .include_holyday(false);
    format(date, &options)
}

impl fmt::Display for DiscordianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format(self, &FormatOptions::default()))
    }
}
