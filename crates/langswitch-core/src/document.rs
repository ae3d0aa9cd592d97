use crate::{Direction, Language};
use std::sync::{Arc, RwLock};

/// The mutable `dir`/`lang` attributes of the document root element.
///
/// The real browser document is one implementation; headless hosts and
/// tests use [`InMemoryDocumentRoot`].
pub trait DocumentRoot: Send + Sync {
    fn set_dir(&mut self, direction: Direction);
    fn set_lang(&mut self, language: Language);
}

#[derive(Debug, Default)]
struct Attributes {
    dir: Option<Direction>,
    lang: Option<Language>,
}

/// An in-memory document root.
///
/// Clones share the same attribute cell, so a caller can hand one clone to
/// the language service and keep another to observe the attributes it sets.
#[derive(Debug, Default, Clone)]
pub struct InMemoryDocumentRoot(Arc<RwLock<Attributes>>);

impl InMemoryDocumentRoot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dir(&self) -> Option<Direction> {
        self.0.read().expect("lock poisoned").dir
    }

    pub fn lang(&self) -> Option<Language> {
        self.0.read().expect("lock poisoned").lang
    }
}

impl DocumentRoot for InMemoryDocumentRoot {
    fn set_dir(&mut self, direction: Direction) {
        self.0.write().expect("lock poisoned").dir = Some(direction);
    }

    fn set_lang(&mut self, language: Language) {
        self.0.write().expect("lock poisoned").lang = Some(language);
    }
}
