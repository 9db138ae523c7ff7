//! Character records shown by the picker. An [`Entry`] is a plain data holder;
//! the session clones one into its detail slot when it is opened, and an
//! all-empty entry stands for "nothing open".

use crate::symbols::{Glyph, SymbolTable};

/// One character sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    /// Name tokens, joined with spaces for display.
    pub name: Vec<String>,
    /// Pronunciation syllables, joined with a middle dot for display.
    pub pronunciation: Vec<String>,
    /// Category tags. Displayed sorted.
    pub category: Vec<String>,
    /// Free-text sex, looked up lower-cased in the symbol table.
    pub sex: String,
    /// Free-form traits. Displayed sorted.
    pub traits: Vec<String>,
}

/// The five fields of an [`Entry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldName {
    Name,
    Pronunciation,
    Category,
    Sex,
    Traits,
}

impl FieldName {
    pub const ALL: [FieldName; 5] = [
        FieldName::Name,
        FieldName::Pronunciation,
        FieldName::Category,
        FieldName::Sex,
        FieldName::Traits,
    ];

    /// Short key a field is addressed by.
    pub fn key(self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Pronunciation => "pron",
            FieldName::Category => "category",
            FieldName::Sex => "sex",
            FieldName::Traits => "extra",
        }
    }

    pub fn from_key(key: &str) -> Option<FieldName> {
        FieldName::ALL.into_iter().find(|field| field.key() == key)
    }

    /// Heading used in the detail view, e.g. `Category` or `Extra`.
    pub fn label(self) -> String {
        title_case(self.key())
    }

    /// Whether list values are shown in ascending order rather than as authored.
    pub fn is_sorted(self) -> bool {
        matches!(self, FieldName::Category | FieldName::Traits)
    }
}

/// A borrowed field value: either one string or an ordered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Scalar(&'a str),
    List(&'a [String]),
}

impl FieldValue<'_> {
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Scalar(value) => value.is_empty(),
            FieldValue::List(values) => values.is_empty(),
        }
    }
}

impl Entry {
    pub fn field(&self, field: FieldName) -> FieldValue<'_> {
        match field {
            FieldName::Name => FieldValue::List(&self.name),
            FieldName::Pronunciation => FieldValue::List(&self.pronunciation),
            FieldName::Category => FieldValue::List(&self.category),
            FieldName::Sex => FieldValue::Scalar(&self.sex),
            FieldName::Traits => FieldValue::List(&self.traits),
        }
    }

    /// True when any field carries data. The default entry reports false and is
    /// used as the "nothing open" marker.
    pub fn exists(&self) -> bool {
        FieldName::ALL
            .into_iter()
            .any(|field| !self.field(field).is_empty())
    }

    /// Glyph for the lower-cased `sex` key; keys the table does not know fall
    /// back to neuter.
    pub fn sex_symbol<'a>(&self, symbols: &'a SymbolTable) -> &'a str {
        symbols
            .lookup(&self.sex.to_lowercase())
            .unwrap_or_else(|| symbols.resolve(Glyph::Neuter))
    }

    pub fn display_name(&self) -> String {
        self.name.join(" ")
    }
}

/// Upper-case the first letter of every whitespace-separated word.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if at_word_start && ch.is_alphabetic() {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        at_word_start = ch.is_whitespace();
    }
    out
}
