use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SymbolError {
    #[error("symbol {symbol:?} is already mapped to token {existing:?}")]
    DuplicateSymbol { symbol: String, existing: String },
    #[error("token {token:?} for symbol {symbol:?} is already used by symbol {existing:?}")]
    DuplicateToken {
        symbol: String,
        token: String,
        existing: String,
    },
    #[error("token {token:?} for symbol {symbol:?} must end with its only `;`")]
    MalformedToken { symbol: String, token: String },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DecodeError {
    #[error("fragment {index} ({token:?}) does not match any known token")]
    UnknownToken { token: String, index: usize },
}
