#![doc = include_str!("../README.md")]

pub mod global;
mod service;
#[cfg(feature = "web")]
pub mod web;

pub use langswitch_core::{
    Direction, DocumentRoot, InMemoryDocumentRoot, Language, ProviderError, TranslationProvider,
    UnknownLanguage,
};
pub use service::{LanguageService, SubscriptionId};
