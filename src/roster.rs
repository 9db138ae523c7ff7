//! The fixed list of characters the picker offers. Data is compiled in; the
//! only runtime work is splicing decoded glyphs into the pronunciations.

use std::ops::Index;

use crate::error::RosterError;
use crate::models::Entry;
use crate::symbols::{Glyph, SymbolTable};

/// Ordered, non-empty, read-only list of entries.
#[derive(Debug, Clone)]
pub struct Roster {
    entries: Vec<Entry>,
}

impl Roster {
    pub fn new(entries: Vec<Entry>) -> Result<Self, RosterError> {
        if entries.is_empty() {
            return Err(RosterError::Empty);
        }
        Ok(Self { entries })
    }

    /// The characters shipped with the app.
    pub fn builtin(symbols: &SymbolTable) -> Self {
        let morrigan_pron = [
            "M",
            symbols.resolve(Glyph::Omega),
            symbols.resolve(Glyph::Acute),
            "r",
            symbols.resolve(Glyph::Schwa),
            "gy",
            symbols.resolve(Glyph::Grave),
            "n",
        ]
        .concat();

        Self {
            entries: vec![
                Entry {
                    name: strings(&["Hound"]),
                    pronunciation: strings(&["haund"]),
                    category: strings(&["Changeling"]),
                    sex: "Female".to_string(),
                    traits: strings(&["Shapeshifts into a large, black Wolf"]),
                },
                Entry {
                    name: strings(&["Morrigan"]),
                    pronunciation: vec![morrigan_pron],
                    category: strings(&["Reaper"]),
                    sex: "Female".to_string(),
                    traits: strings(&["Wields a scythe", "Killing Touch"]),
                },
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed roster; kept alongside `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }
}

impl Index<usize> for Roster {
    type Output = Entry;

    fn index(&self, index: usize) -> &Entry {
        &self.entries[index]
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_roster_is_rejected() {
        assert_eq!(Roster::new(Vec::new()).unwrap_err(), RosterError::Empty);
    }

    #[test]
    fn test_builtin_keeps_authored_order() {
        let roster = Roster::builtin(&SymbolTable::build());
        let names: Vec<String> = roster.iter().map(Entry::display_name).collect();
        assert_eq!(names, ["Hound", "Morrigan"]);
        assert_eq!(roster[1].traits, ["Wields a scythe", "Killing Touch"]);
        assert!(roster.get(2).is_none());
    }

    #[test]
    fn test_builtin_pronunciation_uses_glyphs() {
        let roster = Roster::builtin(&SymbolTable::build());
        assert_eq!(
            roster[1].pronunciation,
            ["M\u{03C9}\u{0301}r\u{0259}gy\u{0300}n"]
        );
    }
}
