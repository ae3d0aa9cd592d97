use fluent_bundle::FluentValue;
use langswitch_core::{DocumentRoot, Language, TranslationProvider, resolve};
use std::collections::HashMap;

/// Handle returned by [`LanguageService::subscribe`], used to cancel the
/// subscription later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn Fn(Language) + Send + Sync>;

/// The single owner of the active UI language.
///
/// All reads and writes of the current language go through one instance;
/// UI surfaces are pure consumers of its state. Every switch activates the
/// language on the translation provider, sets both `dir` and `lang` on the
/// document root, and then notifies subscribers inline, in registration
/// order, exactly once per call.
pub struct LanguageService {
    provider: Box<dyn TranslationProvider>,
    document: Box<dyn DocumentRoot>,
    current: Language,
    subscribers: Vec<(SubscriptionId, Callback)>,
    next_subscription: u64,
}

impl LanguageService {
    /// Creates the service and performs the initial switch.
    ///
    /// The supported set and the English default are registered with the
    /// provider, then the initial language is resolved from the locale the
    /// provider reports for the host. A host locale outside the supported
    /// set falls back to English.
    pub fn new(provider: Box<dyn TranslationProvider>, document: Box<dyn DocumentRoot>) -> Self {
        let mut service = Self {
            provider,
            document,
            current: Language::default(),
            subscribers: Vec::new(),
            next_subscription: 0,
        };

        service.provider.register_languages(&Language::ALL);
        service.provider.set_default_language(Language::default());

        let initial = resolve::resolve_initial(service.provider.browser_language().as_deref());
        service.switch_language(initial);
        service
    }

    /// Makes `language` the active language.
    ///
    /// A provider activation failure is logged and the switch proceeds; the
    /// service state, document attributes, and subscribers stay consistent
    /// with each other either way.
    pub fn switch_language(&mut self, language: Language) {
        if let Err(e) = self.provider.activate(language) {
            log::warn!("Translation provider failed to activate '{}': {}", language, e);
        }

        self.current = language;
        self.document.set_dir(language.direction());
        self.document.set_lang(language);

        for (_, callback) in &self.subscribers {
            callback(language);
        }
    }

    pub fn current_language(&self) -> Language {
        self.current
    }

    /// Registers a language observer.
    ///
    /// The callback is invoked immediately with the current language, then
    /// once per subsequent [`switch_language`](Self::switch_language) call.
    /// Callbacks run inline on the switching thread and must not reenter
    /// the service.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(Language) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;

        callback(self.current);
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(existing, _)| *existing != id);
    }

    /// Looks up a message through the translation provider.
    ///
    /// If the message is not found, a warning is logged and the id is
    /// returned as the message.
    pub fn localize<'a>(
        &self,
        id: &str,
        args: Option<&HashMap<&str, FluentValue<'a>>>,
    ) -> String {
        match self.provider.localize(id, args) {
            Some(message) => message,
            None => {
                log::warn!("Translation for '{}' not found.", id);
                id.to_owned()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use langswitch_core::{Direction, InMemoryDocumentRoot, ProviderError};
    use std::sync::{Arc, Mutex};

    struct FakeProvider {
        reported: Option<String>,
        registered: Vec<Language>,
        default_language: Option<Language>,
        active: Option<Language>,
        activations: Arc<Mutex<Vec<Language>>>,
    }

    impl FakeProvider {
        fn reporting(reported: Option<&str>) -> (Self, Arc<Mutex<Vec<Language>>>) {
            let activations = Arc::new(Mutex::new(Vec::new()));
            let provider = Self {
                reported: reported.map(str::to_owned),
                registered: Vec::new(),
                default_language: None,
                active: None,
                activations: activations.clone(),
            };
            (provider, activations)
        }
    }

    impl TranslationProvider for FakeProvider {
        fn register_languages(&mut self, languages: &[Language]) {
            self.registered = languages.to_vec();
        }

        fn set_default_language(&mut self, language: Language) {
            self.default_language = Some(language);
        }

        fn browser_language(&self) -> Option<String> {
            self.reported.clone()
        }

        fn activate(&mut self, language: Language) -> Result<(), ProviderError> {
            if !self.registered.contains(&language) {
                return Err(ProviderError::LanguageNotRegistered(language));
            }
            self.active = Some(language);
            self.activations.lock().unwrap().push(language);
            Ok(())
        }

        fn active_language(&self) -> Option<Language> {
            self.active
        }

        fn localize<'a>(
            &self,
            _id: &str,
            _args: Option<&HashMap<&str, FluentValue<'a>>>,
        ) -> Option<String> {
            None
        }
    }

    fn service_with_locale(reported: Option<&str>) -> (LanguageService, InMemoryDocumentRoot) {
        let (provider, _) = FakeProvider::reporting(reported);
        let document = InMemoryDocumentRoot::new();
        let service = LanguageService::new(Box::new(provider), Box::new(document.clone()));
        (service, document)
    }

    #[test]
    fn arabic_host_locale_selects_arabic() {
        let (service, document) = service_with_locale(Some("ar"));

        assert_eq!(service.current_language(), Language::Arabic);
        assert_eq!(document.dir(), Some(Direction::Rtl));
        assert_eq!(document.lang(), Some(Language::Arabic));
    }

    #[test]
    fn regional_arabic_host_locale_selects_arabic() {
        let (service, _) = service_with_locale(Some("ar-EG"));
        assert_eq!(service.current_language(), Language::Arabic);
    }

    #[test]
    fn unsupported_host_locale_falls_back_to_english() {
        let (service, document) = service_with_locale(Some("fr"));

        assert_eq!(service.current_language(), Language::English);
        assert_eq!(document.dir(), Some(Direction::Ltr));
        assert_eq!(document.lang(), Some(Language::English));
    }

    #[test]
    fn construction_registers_and_activates_once() {
        let (provider, activations) = FakeProvider::reporting(None);
        let document = InMemoryDocumentRoot::new();
        let _service = LanguageService::new(Box::new(provider), Box::new(document.clone()));

        assert_eq!(*activations.lock().unwrap(), vec![Language::English]);
        assert_eq!(document.dir(), Some(Direction::Ltr));
    }

    #[test]
    fn switch_updates_state_and_document() {
        let (mut service, document) = service_with_locale(None);

        service.switch_language(Language::Arabic);
        assert_eq!(service.current_language(), Language::Arabic);
        assert_eq!(document.dir(), Some(Direction::Rtl));
        assert_eq!(document.lang(), Some(Language::Arabic));

        service.switch_language(Language::English);
        assert_eq!(service.current_language(), Language::English);
        assert_eq!(document.dir(), Some(Direction::Ltr));
        assert_eq!(document.lang(), Some(Language::English));
    }

    #[test]
    fn subscribe_emits_current_then_once_per_switch() {
        let (mut service, _) = service_with_locale(None);
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = seen.clone();
        service.subscribe(move |language| sink.lock().unwrap().push(language));
        assert_eq!(*seen.lock().unwrap(), vec![Language::English]);

        service.switch_language(Language::Arabic);
        service.switch_language(Language::English);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![Language::English, Language::Arabic, Language::English]
        );
    }

    #[test]
    fn subscribers_are_notified_in_registration_order() {
        let (mut service, _) = service_with_locale(None);
        let order = Arc::new(Mutex::new(Vec::new()));

        let first = order.clone();
        service.subscribe(move |_| first.lock().unwrap().push("first"));
        let second = order.clone();
        service.subscribe(move |_| second.lock().unwrap().push("second"));

        order.lock().unwrap().clear();
        service.switch_language(Language::Arabic);
        assert_eq!(*order.lock().unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let (mut service, _) = service_with_locale(None);
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = seen.clone();
        let id = service.subscribe(move |language| sink.lock().unwrap().push(language));
        service.unsubscribe(id);

        service.switch_language(Language::Arabic);
        assert_eq!(*seen.lock().unwrap(), vec![Language::English]);
    }

    #[test]
    fn switching_twice_is_idempotent() {
        let (mut service, document) = service_with_locale(None);

        service.switch_language(Language::English);
        let once = (service.current_language(), document.dir(), document.lang());

        service.switch_language(Language::English);
        let twice = (service.current_language(), document.dir(), document.lang());

        assert_eq!(once, twice);
    }

    #[test]
    fn provider_failure_does_not_block_the_switch() {
        // The fake rejects activation when nothing is registered; build one
        // by hand so registration never happens.
        let (provider, activations) = FakeProvider::reporting(None);
        let document = InMemoryDocumentRoot::new();
        let mut service = LanguageService {
            provider: Box::new(provider),
            document: Box::new(document.clone()),
            current: Language::default(),
            subscribers: Vec::new(),
            next_subscription: 0,
        };

        service.switch_language(Language::Arabic);

        assert!(activations.lock().unwrap().is_empty());
        assert_eq!(service.current_language(), Language::Arabic);
        assert_eq!(document.dir(), Some(Direction::Rtl));
    }

    #[test]
    fn localize_falls_back_to_the_id() {
        let (service, _) = service_with_locale(None);
        assert_eq!(service.localize("missing-message", None), "missing-message");
    }
}
