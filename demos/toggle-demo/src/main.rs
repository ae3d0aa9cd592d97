use fluent_bundle::FluentValue;
use langswitch::{Language, global};
use langswitch_core::InMemoryDocumentRoot;
use langswitch_fluent::FluentProvider;
use std::collections::HashMap;

fn main() {
    let document = InMemoryDocumentRoot::new();
    global::init(Box::new(FluentProvider::new()), Box::new(document.clone()));

    global::subscribe(|language| println!("-- language changed to '{language}'"));

    for language in [Language::English, Language::Arabic, Language::English] {
        global::switch_language(language);
        run(&document);
    }
}

fn run(document: &InMemoryDocumentRoot) {
    println!("{}", global::localize("app-title", None));

    let mut args = HashMap::new();
    args.insert("name", FluentValue::from("Alice"));
    println!("{}", global::localize("greeting", Some(&args)));

    if let Some(dir) = document.dir() {
        println!("document dir: {dir}");
    }
    println!();
}
