//! Core types for the langswitch workspace.
//!
//! This crate provides the closed [`Language`] set, the derived text
//! [`Direction`], host-locale resolution, and the traits that decouple the
//! language service from its collaborators (translation backend, document
//! environment) without relying on singletons.

pub mod document;
pub mod language;
pub mod provider;
pub mod resolve;

// Re-export the key types and traits for easy top-level access.
pub use document::{DocumentRoot, InMemoryDocumentRoot};
pub use language::{Direction, Language, UnknownLanguage};
pub use provider::{ProviderError, TranslationProvider, TranslationResource};
