use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use unic_langid::{LanguageIdentifier, langid};

#[derive(Debug, Error, PartialEq, Eq)]
#[error("'{0}' is not a supported language")]
pub struct UnknownLanguage(pub String);

/// A UI language supported by the application.
///
/// The set is closed on purpose: language codes enter the system as raw
/// strings (host locale, query parameters, user input) and are normalized
/// into this enum at the boundary. Anything outside the set is rejected
/// there instead of being forwarded to the translation backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    English,
    Arabic,
}

/// Text direction of the document, derived from the active [`Language`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Arabic];

    /// The ISO 639-1 code used on the wire and in `lang` attributes.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Arabic => "ar",
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Language::English => Direction::Ltr,
            Language::Arabic => Direction::Rtl,
        }
    }

    pub fn locale(self) -> LanguageIdentifier {
        match self {
            Language::English => langid!("en"),
            Language::Arabic => langid!("ar"),
        }
    }

    /// Parses an exact two-letter code.
    pub fn from_code(code: &str) -> Option<Language> {
        Language::ALL
            .into_iter()
            .find(|language| language.code() == code)
    }

    /// Matches a full locale on its primary language subtag, so `ar-EG`
    /// resolves to [`Language::Arabic`].
    pub fn from_locale(locale: &LanguageIdentifier) -> Option<Language> {
        Language::from_code(locale.language.as_str())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<LanguageIdentifier>()
            .ok()
            .and_then(|locale| Language::from_locale(&locale))
            .ok_or_else(|| UnknownLanguage(s.to_owned()))
    }
}

impl Direction {
    /// The value written to the document root's `dir` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
