use std::collections::HashMap;

use phf::phf_ordered_map;

use crate::error::SymbolError;

/// Every token ends with this character, and no token contains it anywhere else.
pub const TOKEN_TERMINATOR: char = ';';

/// Numeric symbols run from "0" to this value inclusive.
pub const MAX_NUMERIC_SYMBOL: u32 = 999;

// Declaration order matters: it is the order entries are inserted into the table.
//
// A few of these look wrong but are relied upon by data encoded in the wild:
// `?` uses a `%` prefix, `<` and `>` have each other's HTML names, and the empty
// symbol can be decoded but never produced.
#[rustfmt::skip]
pub(crate) static FIXED_SYMBOLS: phf::OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "A" => "&00;", "B" => "&01;", "C" => "&02;", "D" => "&03;", "E" => "&04;",
    "F" => "&05;", "G" => "&06;", "H" => "&07;", "I" => "&08;", "J" => "&09;",
    "K" => "&10;", "L" => "&11;", "M" => "&12;", "N" => "&13;", "O" => "&14;",
    "P" => "&15;", "Q" => "&16;", "R" => "&17;", "S" => "&18;", "T" => "&19;",
    "U" => "&20;", "V" => "&21;", "W" => "&22;", "X" => "&23;", "Y" => "&24;",
    "Z" => "&25;",
    "a" => "&001;", "b" => "&002;", "c" => "&003;", "d" => "&004;", "e" => "&005;",
    "f" => "&006;", "g" => "&007;", "h" => "&008;", "i" => "&009;", "j" => "&010;",
    "k" => "&011;", "l" => "&012;", "m" => "&013;", "n" => "&014;", "o" => "&015;",
    "p" => "&016;", "q" => "&017;", "r" => "&018;", "s" => "&019;", "t" => "&020;",
    "u" => "&021;", "v" => "&022;", "w" => "&023;", "x" => "&024;", "y" => "&025;",
    "z" => "&026;",
    "{" => "&co;", "}" => "&cc;", "#" => "&hs;", "@" => "&at;", "." => "&st;",
    "," => "&cm;", "/" => "&fs;", "\\" => "&bs;", "%" => "&pc;", "'" => "&sq;",
    "\"" => "&dq;", "(" => "&bo;", ")" => "&bc;", "[" => "&so;", "]" => "&sc;",
    ":" => "&fc;", ";" => "&sm;", " " => "&ws;", ".com" => "&com;", "$" => "&dl;",
    "-" => "&hyph;", "_" => "&und;", "=" => "&equ;", "+" => "&plus;", "|" => "&orsign;",
    "&" => "&amp;", "*" => "&ast;", "^" => "&pow;", "~" => "&crt;", "?" => "%qa;",
    "" => "&nt;", "<" => "&gt;", ">" => "&lt;", "\n" => "&nl;", "\t" => "&tbsp;",
    "`" => "&bctk;",
};

lazy_static! {
    static ref STANDARD_SYMBOL_TABLE: SymbolTable = SymbolTableBuilder::standard()
        .build()
        .expect("the standard symbols have unique, well-formed tokens");
}

/// ## SymbolTable
///
/// An immutable, bidirectional mapping between plaintext symbols and their tokens.
///
/// Symbols are usually single characters, but the table also holds the literal `.com`,
/// the empty string and the decimal numbers `0` through `999`. Encoding looks one
/// character up at a time, so only single-character symbols are ever produced by
/// [`SymbolTable::encode`]; every symbol can be reached by [`SymbolTable::decode`].
///
/// Entries keep their insertion order, which is what [`SymbolTable::iter`] reports.
#[derive(Clone, Debug, PartialEq)]
pub struct SymbolTable {
    entries: Vec<(String, String)>,
    by_symbol: HashMap<String, usize>,
    by_token: HashMap<String, usize>,
}

impl SymbolTable {
    /// The table shared by [`crate::encrypt`] and [`crate::decrypt`].
    pub fn standard() -> &'static SymbolTable {
        &STANDARD_SYMBOL_TABLE
    }

    pub fn builder() -> SymbolTableBuilder {
        SymbolTableBuilder::new()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn token_of(&self, symbol: &str) -> Option<&str> {
        self.by_symbol
            .get(symbol)
            .map(|&index| self.entries[index].1.as_str())
    }

    /// `token` must include its terminating `;`.
    pub fn symbol_of(&self, token: &str) -> Option<&str> {
        self.by_token
            .get(token)
            .map(|&index| self.entries[index].0.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(symbol, token)| (symbol.as_str(), token.as_str()))
    }
}

/// Collects symbol/token pairs and checks them once in [`SymbolTableBuilder::build`].
#[derive(Clone, Debug, Default)]
pub struct SymbolTableBuilder {
    entries: Vec<(String, String)>,
}

impl SymbolTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A builder preloaded with the fixed symbols followed by the numbers 0 to 999.
    pub fn standard() -> Self {
        let mut builder = Self::new();
        for (symbol, token) in FIXED_SYMBOLS.entries() {
            builder.insert(*symbol, *token);
        }
        for n in 0..=MAX_NUMERIC_SYMBOL {
            builder.insert(n.to_string(), format!("&&{}{}", n, TOKEN_TERMINATOR));
        }
        builder
    }

    pub fn insert<S, T>(&mut self, symbol: S, token: T) -> &mut Self
    where
        S: Into<String>,
        T: Into<String>,
    {
        self.entries.push((symbol.into(), token.into()));
        self
    }

    pub fn build(&self) -> Result<SymbolTable, SymbolError> {
        let mut by_symbol: HashMap<String, usize> = HashMap::with_capacity(self.entries.len());
        let mut by_token: HashMap<String, usize> = HashMap::with_capacity(self.entries.len());

        for (index, (symbol, token)) in self.entries.iter().enumerate() {
            if !is_well_formed(token) {
                return Err(SymbolError::MalformedToken {
                    symbol: symbol.clone(),
                    token: token.clone(),
                });
            }
            if let Some(&existing) = by_symbol.get(symbol.as_str()) {
                let existing: &(String, String) = &self.entries[existing];
                return Err(SymbolError::DuplicateSymbol {
                    symbol: symbol.clone(),
                    existing: existing.1.clone(),
                });
            }
            if let Some(&existing) = by_token.get(token.as_str()) {
                let existing: &(String, String) = &self.entries[existing];
                return Err(SymbolError::DuplicateToken {
                    symbol: symbol.clone(),
                    token: token.clone(),
                    existing: existing.0.clone(),
                });
            }
            by_symbol.insert(symbol.clone(), index);
            by_token.insert(token.clone(), index);
        }

        log::trace!("built symbol table with {} entries", self.entries.len());

        Ok(SymbolTable {
            entries: self.entries.clone(),
            by_symbol,
            by_token,
        })
    }
}

// Decoding splits on the terminator, so a token is only reachable if the terminator is its
// last character and appears nowhere else, with a non-empty body in front of it.
fn is_well_formed(token: &str) -> bool {
    match token.strip_suffix(TOKEN_TERMINATOR) {
        Some(body) => !body.is_empty() && !body.contains(TOKEN_TERMINATOR),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn standard_table_size() {
        let table = SymbolTable::standard();
        assert_eq!(FIXED_SYMBOLS.len(), 26 + 26 + 36);
        assert_eq!(table.len(), 26 + 26 + 36 + 1000);
    }

    #[test]
    fn standard_table_order() {
        let table = SymbolTable::standard();
        let entries: Vec<_> = table.iter().collect();
        assert_eq!(entries[0], ("A", "&00;"));
        assert_eq!(entries[26], ("a", "&001;"));
        assert_eq!(entries[87], ("`", "&bctk;"));
        assert_eq!(entries[88], ("0", "&&0;"));
        assert_eq!(entries[table.len() - 1], ("999", "&&999;"));
    }

    #[test]
    fn quirky_entries_are_preserved() {
        let table = SymbolTable::standard();
        assert_eq!(table.token_of("?"), Some("%qa;"));
        assert_eq!(table.token_of("<"), Some("&gt;"));
        assert_eq!(table.token_of(">"), Some("&lt;"));
        assert_eq!(table.token_of(""), Some("&nt;"));
        assert_eq!(table.token_of(".com"), Some("&com;"));
        assert_eq!(table.symbol_of("&nt;"), Some(""));
    }

    #[test]
    fn numeric_entries() {
        let table = SymbolTable::standard();
        assert_eq!(table.token_of("0"), Some("&&0;"));
        assert_eq!(table.token_of("42"), Some("&&42;"));
        assert_eq!(table.symbol_of("&&999;"), Some("999"));
        assert_eq!(table.token_of("007"), None);
        assert_eq!(table.token_of("1000"), None);
    }

    #[test]
    fn lookups_agree_in_both_directions() {
        let table = SymbolTable::standard();
        for (symbol, token) in table.iter() {
            assert_eq!(table.token_of(symbol), Some(token));
            assert_eq!(table.symbol_of(token), Some(symbol));
        }
    }

    #[test]
    fn rejects_duplicate_symbol() {
        let error = SymbolTable::builder()
            .insert("a", "&x;")
            .insert("a", "&y;")
            .build()
            .unwrap_err();
        assert_eq!(
            error,
            SymbolError::DuplicateSymbol {
                symbol: "a".to_string(),
                existing: "&x;".to_string(),
            }
        );
    }

    #[test]
    fn rejects_duplicate_token() {
        let error = SymbolTableBuilder::standard()
            .insert("!", "&00;")
            .build()
            .unwrap_err();
        assert_eq!(
            error,
            SymbolError::DuplicateToken {
                symbol: "!".to_string(),
                token: "&00;".to_string(),
                existing: "A".to_string(),
            }
        );
    }

    #[test]
    fn rejects_malformed_tokens() {
        for token in &["&x", ";", "&x;y;", ""] {
            let error = SymbolTable::builder().insert("x", *token).build();
            assert_eq!(
                error,
                Err(SymbolError::MalformedToken {
                    symbol: "x".to_string(),
                    token: token.to_string(),
                })
            );
        }
    }

    #[test]
    fn extends_standard_table() {
        let table = SymbolTableBuilder::standard()
            .insert("!", "&ex;")
            .build()
            .unwrap();
        assert_eq!(table.len(), SymbolTable::standard().len() + 1);
        assert_eq!(table.token_of("!"), Some("&ex;"));
    }
}
