//! Browser document bindings.
//!
//! `web_sys::Element` is not `Send`, so the live document cannot implement
//! [`DocumentRoot`](langswitch_core::DocumentRoot) directly. Instead, wasm
//! hosts mirror the service state from a subscription callback:
//!
//! ```ignore
//! langswitch::global::subscribe(langswitch::web::sync_document);
//! ```

use langswitch_core::Language;

/// Writes the language's `dir` and `lang` attributes onto the current
/// document's root element.
///
/// Logs an error when no document is reachable (non-browser host) or the
/// attribute writes fail.
pub fn sync_document(language: Language) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        log::error!("No document root element available to sync language onto.");
        return;
    };

    if let Err(err) = root.set_attribute("dir", language.direction().as_str()) {
        log::error!("Failed to set 'dir' attribute: {:?}", err);
    }
    if let Err(err) = root.set_attribute("lang", language.code()) {
        log::error!("Failed to set 'lang' attribute: {:?}", err);
    }
}
