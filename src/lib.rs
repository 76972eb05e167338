// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The SarahEncrypt substitution codec.
//!
//! Letters, digits and a fixed set of punctuation and whitespace characters are each replaced
//! by a `;`-terminated token such as `&00;` (for `A`) or `&&5;` (for `5`). Other characters
//! are copied through unchanged. Decoding splits on `;` and silently drops fragments it does
//! not recognise; [`decrypt_strict`] reports them instead.

#[macro_use]
extern crate lazy_static;

pub mod error;
pub mod obfuscated;
pub mod symbols;
pub mod text;


pub use error::{DecodeError, SymbolError};
pub use symbols::{SymbolTable, SymbolTableBuilder};
pub use text::{decrypt, decrypt_strict, encrypt, validate_dc};
