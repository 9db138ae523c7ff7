//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::models::Entry;
use crate::roster::Roster;
use crate::symbols::SymbolTable;
use crate::ui::App;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Build an entry field by field.
pub fn entry(
    name: &[&str],
    pronunciation: &[&str],
    category: &[&str],
    sex: &str,
    traits: &[&str],
) -> Entry {
    Entry {
        name: strings(name),
        pronunciation: strings(pronunciation),
        category: strings(category),
        sex: sex.to_string(),
        traits: strings(traits),
    }
}

/// A roster of `len` distinct placeholder characters.
pub fn fixture_roster(len: usize) -> Roster {
    let entries = (0..len)
        .map(|index| {
            let name = format!("Char{}", index);
            entry(&[name.as_str()], &["tok"], &["Tag"], "male", &["Trait"])
        })
        .collect();
    Roster::new(entries).unwrap()
}

pub fn fixture_app(len: usize) -> App {
    App::new(fixture_roster(len), SymbolTable::build())
}

/// App over the shipped characters.
pub fn builtin_app() -> App {
    let symbols = SymbolTable::build();
    App::new(Roster::builtin(&symbols), symbols)
}
