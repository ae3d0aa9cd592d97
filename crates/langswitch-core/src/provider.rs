use crate::Language;
use fluent_bundle::FluentValue;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("language '{0}' has not been registered with the provider")]
    LanguageNotRegistered(Language),
    #[error("an underlying translation backend error occurred: {0}")]
    Backend(#[from] anyhow::Error),
}

/// The translation backend consumed by the language service.
///
/// The service registers the supported language set and a default at
/// startup, asks the backend which locale the host reports, and activates
/// one language at a time. String lookup always goes through the backend.
pub trait TranslationProvider: Send + Sync {
    /// Registers the set of languages the application supports.
    fn register_languages(&mut self, languages: &[Language]);

    /// Sets the language used as a fallback for missing messages.
    fn set_default_language(&mut self, language: Language);

    /// The raw locale tag reported by the host, if any.
    fn browser_language(&self) -> Option<String>;

    /// Makes `language` the active language for subsequent lookups.
    fn activate(&mut self, language: Language) -> Result<(), ProviderError>;

    /// The currently active language, once one has been activated.
    fn active_language(&self) -> Option<Language>;

    /// Looks up and formats the message with the given id.
    fn localize<'a>(
        &self,
        id: &str,
        args: Option<&HashMap<&str, FluentValue<'a>>>,
    ) -> Option<String>;
}

/// A source of translation strings for one language, discoverable at link
/// time. Crates contribute resources with `inventory::submit!`.
pub trait TranslationResource: Send + Sync {
    fn language(&self) -> Language;
    fn ftl_source(&self) -> &'static str;
}

inventory::collect!(&'static dyn TranslationResource);
