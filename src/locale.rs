//! Display strings per locale.

use tracing::debug;

use crate::consts::{DAYS_PER_WEEK, DEFAULT_LOCALE, SEASON_COUNT};
use crate::{Holyday, Season, Weekday};

/// Display text for every calendar name in one language.
///
/// Labels are indexed in the order of `Season::ALL`, `Weekday::ALL` and `Holyday::ALL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocalizedStrings {
    pub seasons:     [&'static str; SEASON_COUNT],
    pub weekdays:    [&'static str; DAYS_PER_WEEK as usize],
    pub holydays:    [&'static str; 2 * SEASON_COUNT],
    pub st_tibs_day: &'static str,
    /// Era abbreviation written after the year
    pub yold:        &'static str,
}

impl LocalizedStrings {
    #[inline]
    pub const fn season(&self, season: Season) -> &'static str {
        self.seasons[season.index()]
    }

    #[inline]
    pub const fn weekday(&self, weekday: Weekday) -> &'static str {
        self.weekdays[weekday.index()]
    }

    #[inline]
    pub const fn holyday(&self, holyday: Holyday) -> &'static str {
        self.holydays[holyday.index()]
    }
}

pub static EN: LocalizedStrings = LocalizedStrings {
    seasons:     ["Chaos", "Discord", "Confusion", "Bureaucracy", "The Aftermath"],
    weekdays:    [
        "Sweetmorn",
        "Boomtime",
        "Pungenday",
        "Prickle-Prickle",
        "Setting Orange",
    ],
    holydays:    [
        "Mungday",
        "Mojoday",
        "Syaday",
        "Zaraday",
        "Maladay",
        "Chaoflux",
        "Discoflux",
        "Confuflux",
        "Bureflux",
        "Afflux",
    ],
    st_tibs_day: "St. Tib's Day",
    yold:        "YOLD",
};

pub static PT_BR: LocalizedStrings = LocalizedStrings {
    seasons:     ["Caos", "Discórdia", "Confusão", "Burocracia", "As Consequências"],
    weekdays:    [
        "Docemanhã",
        "Tempobum",
        "Pungente",
        "Espinho-Espinho",
        "Laranja Poente",
    ],
    holydays:    [
        "Dia de Mung",
        "Dia de Mojo",
        "Dia de Sya",
        "Dia de Zara",
        "Dia de Mala",
        "Fluxo do Caos",
        "Fluxo da Discórdia",
        "Fluxo da Confusão",
        "Fluxo da Burocracia",
        "Fluxo das Consequências",
    ],
    st_tibs_day: "Dia de São Tib",
    // Ano de Nossa Senhora da Discórdia
    yold:        "ANSD",
};

/// Registered locales by tag. The first entry is the default.
pub static LOCALES: [(&str, &LocalizedStrings); 2] = [(DEFAULT_LOCALE, &EN), ("pt-BR", &PT_BR)];

/// Looks up a locale by exact tag
pub fn find_locale(tag: &str) -> Option<&'static LocalizedStrings> {
    LOCALES
        .iter()
        .find(|(name, _)| *name == tag)
        .map(|(_, strings)| *strings)
}

/// Looks up a locale by exact tag, falling back to English for unknown tags
pub fn get_locale(tag: &str) -> &'static LocalizedStrings {
    find_locale(tag).unwrap_or_else(|| {
        debug!(locale = tag, "unknown locale, using {DEFAULT_LOCALE}");
        &EN
    })
}

/// Tags of every registered locale
pub fn locale_tags() -> impl Iterator<Item = &'static str> {
    LOCALES.iter().map(|(tag, _)| *tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_locale_exact_match() {
        assert_eq!(find_locale("en"), Some(&EN));
        assert_eq!(find_locale("pt-BR"), Some(&PT_BR));
        assert_eq!(find_locale("pt-br"), None);
        assert_eq!(find_locale("pt"), None);
        assert_eq!(find_locale(""), None);
    }

    #[test]
    fn test_get_locale_falls_back_to_english() {
        assert_eq!(get_locale("pt-BR"), &PT_BR);
        assert_eq!(get_locale("unknown-locale"), &EN);
        assert_eq!(get_locale(""), &EN);
    }

    #[test]
    fn test_locale_tags() {
        let tags: Vec<_> = locale_tags().collect();
        assert_eq!(tags, ["en", "pt-BR"]);
    }

    #[test]
    fn test_english_labels_match_canonical_names() {
        for season in Season::ALL {
            assert_eq!(EN.season(season), season.to_string());
        }
        for weekday in Weekday::ALL {
            assert_eq!(EN.weekday(weekday), weekday.to_string());
        }
        for holyday in Holyday::ALL {
            assert_eq!(EN.holyday(holyday), holyday.to_string());
        }
    }

    #[test]
    fn test_portuguese_labels() {
        assert_eq!(PT_BR.season(Season::Chaos), "Caos");
        assert_eq!(PT_BR.season(Season::TheAftermath), "As Consequências");
        assert_eq!(PT_BR.weekday(Weekday::SettingOrange), "Laranja Poente");
        assert_eq!(PT_BR.holyday(Holyday::Mungday), "Dia de Mung");
        assert_eq!(PT_BR.holyday(Holyday::Afflux), "Fluxo das Consequências");
        assert_eq!(PT_BR.yold, "ANSD");
    }

    #[test]
    fn test_every_label_is_filled() {
        for (tag, strings) in &LOCALES {
            let labels = strings
                .seasons
                .iter()
                .chain(&strings.weekdays)
                .chain(&strings.holydays)
                .chain([&strings.st_tibs_day, &strings.yold]);
            for label in labels {
                assert!(!label.is_empty(), "empty label in {tag}");
            }
        }
    }
}
