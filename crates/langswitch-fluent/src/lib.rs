#![doc = include_str!("../README.md")]

use fluent_bundle::{FluentArgs, FluentResource, FluentValue, bundle::FluentBundle};
use langswitch_core::{Language, ProviderError, TranslationProvider, TranslationResource};
use std::collections::HashMap;
use std::sync::Arc;

const EN_FTL: &str = include_str!("../i18n/en.ftl");
const AR_FTL: &str = include_str!("../i18n/ar.ftl");

type SyncFluentBundle =
    FluentBundle<Arc<FluentResource>, intl_memoizer::concurrent::IntlLangMemoizer>;

struct BuiltinResource {
    language: Language,
    source: &'static str,
}

impl TranslationResource for BuiltinResource {
    fn language(&self) -> Language {
        self.language
    }

    fn ftl_source(&self) -> &'static str {
        self.source
    }
}

inventory::submit! {
    &BuiltinResource { language: Language::English, source: EN_FTL } as &dyn TranslationResource
}

inventory::submit! {
    &BuiltinResource { language: Language::Arabic, source: AR_FTL } as &dyn TranslationResource
}

/// A `TranslationProvider` holding one concurrent Fluent bundle per
/// supported language.
///
/// Bundles are built once at construction from every linked
/// [`TranslationResource`]; the built-in English and Arabic resources are
/// always present.
pub struct FluentProvider {
    bundles: HashMap<Language, SyncFluentBundle>,
    registered: Vec<Language>,
    default_language: Language,
    active: Option<Language>,
}

impl Default for FluentProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl FluentProvider {
    /// Builds the provider from all translation resources discovered
    /// through `inventory`.
    pub fn new() -> Self {
        let mut bundles: HashMap<Language, SyncFluentBundle> = HashMap::new();

        for resource in inventory::iter::<&'static dyn TranslationResource>() {
            let language = resource.language();
            let parsed = match FluentResource::try_new(resource.ftl_source().to_owned()) {
                Ok(parsed) => Arc::new(parsed),
                Err((_, errors)) => {
                    log::error!("Failed to parse FTL resource for '{}': {:?}", language, errors);
                    continue;
                },
            };

            let bundle = bundles
                .entry(language)
                .or_insert_with(|| FluentBundle::new_concurrent(vec![language.locale()]));
            if let Err(errors) = bundle.add_resource(parsed) {
                log::error!("Failed to add FTL resource for '{}': {:?}", language, errors);
            }
        }

        Self {
            bundles,
            registered: Vec::new(),
            default_language: Language::default(),
            active: None,
        }
    }

    fn format<'a>(
        &self,
        language: Language,
        id: &str,
        args: Option<&HashMap<&str, FluentValue<'a>>>,
    ) -> Option<String> {
        let bundle = self.bundles.get(&language)?;
        let message = bundle.get_message(id)?;
        let pattern = message.value()?;

        let fluent_args = args.map(|args| {
            let mut fluent_args = FluentArgs::new();
            for (key, value) in args {
                fluent_args.set(*key, value.clone());
            }
            fluent_args
        });

        let mut errors = Vec::new();
        let formatted = bundle.format_pattern(pattern, fluent_args.as_ref(), &mut errors);

        if errors.is_empty() {
            Some(formatted.into_owned())
        } else {
            log::error!(
                "Formatting errors while localizing '{}' in '{}': {:?}",
                id,
                language,
                errors
            );
            None
        }
    }
}

impl TranslationProvider for FluentProvider {
    fn register_languages(&mut self, languages: &[Language]) {
        self.registered = languages.to_vec();
    }

    fn set_default_language(&mut self, language: Language) {
        self.default_language = language;
    }

    fn browser_language(&self) -> Option<String> {
        sys_locale::get_locale()
    }

    fn activate(&mut self, language: Language) -> Result<(), ProviderError> {
        if !self.registered.contains(&language) {
            return Err(ProviderError::LanguageNotRegistered(language));
        }
        if !self.bundles.contains_key(&language) {
            return Err(ProviderError::Backend(anyhow::anyhow!(
                "no translation bundle loaded for '{language}'"
            )));
        }
        self.active = Some(language);
        Ok(())
    }

    fn active_language(&self) -> Option<Language> {
        self.active
    }

    fn localize<'a>(
        &self,
        id: &str,
        args: Option<&HashMap<&str, FluentValue<'a>>>,
    ) -> Option<String> {
        let active = self.active.unwrap_or(self.default_language);
        if let Some(message) = self.format(active, id, args) {
            return Some(message);
        }
        // Missing messages fall back to the default language's bundle.
        if active != self.default_language {
            return self.format(self.default_language, id, args);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> FluentProvider {
        let mut provider = FluentProvider::new();
        provider.register_languages(&Language::ALL);
        provider.set_default_language(Language::English);
        provider
    }

    #[test]
    fn localize_follows_active_language() {
        let mut provider = provider();

        provider.activate(Language::English).unwrap();
        assert_eq!(
            provider.localize("language-name", None),
            Some("English".to_owned())
        );

        provider.activate(Language::Arabic).unwrap();
        assert_eq!(
            provider.localize("language-name", None),
            Some("العربية".to_owned())
        );
    }

    #[test]
    fn localize_formats_arguments() {
        let mut provider = provider();
        provider.activate(Language::English).unwrap();

        let mut args = HashMap::new();
        args.insert("name", FluentValue::from("Samir"));

        let greeting = provider.localize("greeting", Some(&args)).unwrap();
        assert!(greeting.contains("Samir"), "got: {greeting}");
    }

    #[test]
    fn unregistered_language_is_rejected() {
        let mut provider = FluentProvider::new();
        provider.register_languages(&[Language::English]);

        assert!(matches!(
            provider.activate(Language::Arabic),
            Err(ProviderError::LanguageNotRegistered(Language::Arabic))
        ));
        assert_eq!(provider.active_language(), None);
    }

    #[test]
    fn missing_message_falls_back_to_default_language() {
        let mut provider = provider();
        provider.activate(Language::Arabic).unwrap();

        // `beta-notice` only exists in the English resource.
        assert_eq!(
            provider.localize("beta-notice", None),
            Some("This build is a beta preview.".to_owned())
        );
    }

    #[test]
    fn unknown_message_is_none() {
        let mut provider = provider();
        provider.activate(Language::English).unwrap();
        assert_eq!(provider.localize("does-not-exist", None), None);
    }
}
