//! Process-wide facade over a single [`LanguageService`].
//!
//! UI surfaces that cannot thread a service handle through (menus, event
//! handlers) go through this module instead. [`init`] should be called once
//! at the beginning of the application's lifecycle.

use crate::service::{LanguageService, SubscriptionId};
use fluent_bundle::FluentValue;
use langswitch_core::{DocumentRoot, Language, TranslationProvider};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};

static LANGUAGE_SERVICE: OnceLock<Arc<RwLock<LanguageService>>> = OnceLock::new();

/// Initializes the process-wide language service.
///
/// Construction performs the initial switch: the supported set is
/// registered with the provider and the host locale decides the starting
/// language. Calling this more than once logs a warning and has no effect
/// after the first successful call.
pub fn init(provider: Box<dyn TranslationProvider>, document: Box<dyn DocumentRoot>) {
    let service = LanguageService::new(provider, document);
    if LANGUAGE_SERVICE.set(Arc::new(RwLock::new(service))).is_err() {
        log::warn!("Language service already initialized.");
    }
}

/// Switches the active language for the whole process.
///
/// Logs an error if the service has not been initialized by calling
/// [`init`] first.
pub fn switch_language(language: Language) {
    if let Some(service_arc) = LANGUAGE_SERVICE.get() {
        let mut service = service_arc.write().expect("lock poisoned");
        service.switch_language(language);
    } else {
        log::error!("Language service not initialized. Call init() first.");
    }
}

/// The currently active language, or `None` before [`init`].
pub fn current_language() -> Option<Language> {
    LANGUAGE_SERVICE
        .get()
        .map(|service_arc| service_arc.read().expect("lock poisoned").current_language())
}

/// Subscribes to language changes on the process-wide service.
///
/// Returns `None` (with an error log) when the service has not been
/// initialized. Callbacks run inline on the switching thread while the
/// service is locked and must not reenter this module.
pub fn subscribe<F>(callback: F) -> Option<SubscriptionId>
where
    F: Fn(Language) + Send + Sync + 'static,
{
    if let Some(service_arc) = LANGUAGE_SERVICE.get() {
        let mut service = service_arc.write().expect("lock poisoned");
        Some(service.subscribe(callback))
    } else {
        log::error!("Language service not initialized. Call init() first.");
        None
    }
}

/// Cancels a subscription made through [`subscribe`].
pub fn unsubscribe(id: SubscriptionId) {
    if let Some(service_arc) = LANGUAGE_SERVICE.get() {
        let mut service = service_arc.write().expect("lock poisoned");
        service.unsubscribe(id);
    }
}

/// Localizes a message through the process-wide service.
///
/// If the message is not found or the service is not initialized, a warning
/// is logged and the id is returned as the message.
pub fn localize<'a>(id: &str, args: Option<&HashMap<&str, FluentValue<'a>>>) -> String {
    if let Some(service_arc) = LANGUAGE_SERVICE.get() {
        let service = service_arc.read().expect("lock poisoned");
        service.localize(id, args)
    } else {
        log::warn!("Translation for '{}' requested before init().", id);
        id.to_owned()
    }
}
