//! Encoding and decoding of text through a [`SymbolTable`].

use crate::error::DecodeError;
use crate::symbols::{SymbolTable, TOKEN_TERMINATOR};

//////////////////////////////////////////////////////////////////////////////

/// Encodes `input` with the standard symbol table.
///
/// Each character is replaced by its token, or kept as is when the table has no entry for it.
/// Characters are looked up one at a time, so `"12"` becomes `"&&1;&&2;"` rather than the
/// token for twelve.
pub fn encrypt(input: &str) -> String {
    SymbolTable::standard().encode(input)
}

/// Decodes `input` with the standard symbol table, dropping anything it does not recognise.
///
/// Only text built entirely from mapped characters is guaranteed to survive
/// `decrypt(&encrypt(text))`. A character that passed through [`encrypt`] unchanged merges
/// with the token after it, and the whole fragment is dropped here.
pub fn decrypt(input: &str) -> String {
    SymbolTable::standard().decode(input)
}

/// Like [`decrypt`], but fails on the first fragment that is not a known token.
pub fn decrypt_strict(input: &str) -> Result<String, DecodeError> {
    SymbolTable::standard().decode_strict(input)
}

/// Exact comparison used to confirm that a decoded string matches the original.
pub fn validate_dc(data: &str, dc: &str) -> bool {
    data == dc
}

// Empty fragments come from leading, trailing or repeated terminators and carry no token.
pub(crate) fn fragments(input: &str) -> impl Iterator<Item = &str> {
    input
        .split(TOKEN_TERMINATOR)
        .filter(|fragment| !fragment.is_empty())
}

impl SymbolTable {
    pub fn encode(&self, input: &str) -> String {
        let mut encoded = String::with_capacity(input.len() * 4);
        let mut buffer = [0u8; 4];
        for c in input.chars() {
            match self.token_of(c.encode_utf8(&mut buffer)) {
                Some(token) => encoded.push_str(token),
                None => encoded.push(c),
            }
        }
        encoded
    }

    pub fn decode(&self, input: &str) -> String {
        let mut decoded = String::with_capacity(input.len() / 3);
        let mut token = String::new();
        for fragment in fragments(input) {
            match self.lookup_fragment(fragment, &mut token) {
                Some(symbol) => decoded.push_str(symbol),
                None => log::debug!("dropping unknown token {:?}", token),
            }
        }
        decoded
    }

    pub fn decode_strict(&self, input: &str) -> Result<String, DecodeError> {
        let mut decoded = String::with_capacity(input.len() / 3);
        let mut token = String::new();
        for (index, fragment) in fragments(input).enumerate() {
            match self.lookup_fragment(fragment, &mut token) {
                Some(symbol) => decoded.push_str(symbol),
                None => return Err(DecodeError::UnknownToken { token, index }),
            }
        }
        Ok(decoded)
    }

    // The split consumed the terminator, so it is put back before the lookup. This also
    // completes a final fragment that was never terminated.
    fn lookup_fragment(&self, fragment: &str, token: &mut String) -> Option<&str> {
        token.clear();
        token.push_str(fragment);
        token.push(TOKEN_TERMINATOR);
        log::trace!("looking up {:?}", token);
        self.symbol_of(token)
    }
}
