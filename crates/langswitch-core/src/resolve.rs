use crate::Language;
use unic_langid::LanguageIdentifier;

/// Resolves the initial UI language from a host-reported locale tag.
///
/// A tag whose primary language subtag is supported selects that language;
/// anything else (unsupported, unparsable, or absent) falls back to
/// [`Language::English`].
pub fn resolve_initial(reported: Option<&str>) -> Language {
    reported
        .and_then(|tag| tag.parse::<LanguageIdentifier>().ok())
        .and_then(|locale| Language::from_locale(&locale))
        .unwrap_or_default()
}

/// Reads the host locale and resolves the initial language from it.
pub fn detect() -> Language {
    resolve_initial(sys_locale::get_locale().as_deref())
}
