//! The machine alphabet.
//!
//! Every substitution in the machine is a permutation of the 26 symbols
//! `A..=Z`. Positions are alphabet indices and all positional arithmetic is
//! performed modulo [`SIZE`].

use crate::error::EnigmaError;

/// Number of symbols in the alphabet.
pub const SIZE: usize = 26;

/// The alphabet in positional order.
pub const SYMBOLS: [char; SIZE] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Returns the position of `symbol` in the alphabet.
///
/// # Errors
///
/// [`EnigmaError::InvalidSymbol`] if `symbol` is not one of `A..=Z`.
/// Lowercase letters are rejected, callers normalize case themselves.
pub fn index_of(symbol: char) -> Result<usize, EnigmaError> {
    if symbol.is_ascii_uppercase() {
        Ok(symbol as usize - 'A' as usize)
    } else {
        Err(EnigmaError::InvalidSymbol { symbol })
    }
}

/// Returns the symbol at `position`, wrapping modulo [`SIZE`].
pub fn symbol_at(position: usize) -> char {
    SYMBOLS[position % SIZE]
}

/// Returns true if `symbol` is a member of the alphabet.
pub fn contains(symbol: char) -> bool {
    symbol.is_ascii_uppercase()
}
