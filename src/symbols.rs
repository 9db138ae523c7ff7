//! Special characters used by the character sheets. Each glyph is authored as a
//! `\uXXXX` escape literal and decoded once when the table is built, so a typo
//! in a literal shows up as a logged error at startup rather than a panic.

use std::collections::HashMap;

use crate::error::SymbolError;

/// Semantic names for every special character the app knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Dot,
    Male,
    Female,
    Neuter,
    Acute,
    Grave,
    Omega,
    Schwa,
}

impl Glyph {
    pub const ALL: [Glyph; 8] = [
        Glyph::Dot,
        Glyph::Male,
        Glyph::Female,
        Glyph::Neuter,
        Glyph::Acute,
        Glyph::Grave,
        Glyph::Omega,
        Glyph::Schwa,
    ];

    /// Lower-case key the glyph is known by.
    pub fn key(self) -> &'static str {
        match self {
            Glyph::Dot => "dot",
            Glyph::Male => "male",
            Glyph::Female => "female",
            Glyph::Neuter => "neuter",
            Glyph::Acute => "acute",
            Glyph::Grave => "grave",
            Glyph::Omega => "omega",
            Glyph::Schwa => "schwa",
        }
    }

    /// The escape literal decoded into this glyph.
    fn literal(self) -> &'static str {
        match self {
            Glyph::Dot => r"\u00B7",
            Glyph::Male => r"\u2642",
            Glyph::Female => r"\u2640",
            Glyph::Neuter => r"\u26A5",
            Glyph::Acute => r"\u0301",
            Glyph::Grave => r"\u0300",
            Glyph::Omega => r"\u03C9",
            Glyph::Schwa => r"\u0259",
        }
    }

    pub fn from_key(key: &str) -> Option<Glyph> {
        Glyph::ALL.into_iter().find(|glyph| glyph.key() == key)
    }
}

/// Decoded glyphs keyed by [`Glyph`].
#[derive(Debug, Clone)]
pub struct SymbolTable {
    glyphs: HashMap<Glyph, String>,
}

impl SymbolTable {
    /// Decode every glyph literal. Failures are logged and leave that glyph
    /// resolving to an empty string.
    pub fn build() -> Self {
        Self::from_literals(Glyph::ALL.into_iter().map(|glyph| (glyph, glyph.literal())))
    }

    fn from_literals<'a>(literals: impl IntoIterator<Item = (Glyph, &'a str)>) -> Self {
        let glyphs = literals
            .into_iter()
            .map(|(glyph, literal)| {
                let decoded = decode_escape(literal).unwrap_or_else(|err| {
                    log::error!("failed to decode glyph `{}`: {}", glyph.key(), err);
                    String::new()
                });
                (glyph, decoded)
            })
            .collect();
        Self { glyphs }
    }

    pub fn resolve(&self, glyph: Glyph) -> &str {
        self.glyphs.get(&glyph).map(String::as_str).unwrap_or("")
    }

    /// Resolve a textual key. Unknown keys yield `None`; callers pick their own
    /// fallback.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        Glyph::from_key(key).map(|glyph| self.resolve(glyph))
    }
}

/// Turn `\uXXXX` escapes into the characters they name. Anything that is not
/// an escape is copied through unchanged.
pub fn decode_escape(literal: &str) -> Result<String, SymbolError> {
    let mut decoded = String::with_capacity(literal.len());
    let mut chars = literal.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            decoded.push(ch);
            continue;
        }

        if chars.next() != Some('u') {
            return Err(SymbolError::MalformedEscape {
                literal: literal.to_string(),
            });
        }
        let digits: String = chars.by_ref().take(4).collect();
        if digits.chars().count() < 4 {
            return Err(SymbolError::MalformedEscape {
                literal: literal.to_string(),
            });
        }
        // `from_str_radix` alone would accept a leading sign.
        let code = digits
            .chars()
            .all(|c| c.is_ascii_hexdigit())
            .then(|| u32::from_str_radix(&digits, 16).ok())
            .flatten()
            .ok_or_else(|| SymbolError::InvalidHex {
                literal: literal.to_string(),
                digits: digits.clone(),
            })?;
        let decoded_char = char::from_u32(code).ok_or_else(|| SymbolError::InvalidScalar {
            literal: literal.to_string(),
            code,
        })?;
        decoded.push(decoded_char);
    }

    Ok(decoded)
}
