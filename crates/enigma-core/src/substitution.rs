//! Substitution tables.
//!
//! A [`SubstitutionTable`] is a permutation of the alphabet. Rotors and
//! reflectors are both built from one. The inverse permutation is computed at
//! construction so lookups in either direction are a single index.

use std::fmt;

use crate::{
    alphabet::{self, SIZE},
    error::EnigmaError,
};

/// Bijective mapping from alphabet position to alphabet symbol.
///
/// # Invariants
///
/// - Every symbol appears exactly once as an output.
/// - `forward[inverse[i]] == i` and `inverse[forward[i]] == i` for all `i`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SubstitutionTable {
    /// Output position for each input position.
    forward: [usize; SIZE],
    /// Input position for each output position.
    inverse: [usize; SIZE],
}

impl SubstitutionTable {
    /// Build a table from its wiring string.
    ///
    /// The wiring lists the output symbol for `A`, `B`, ... in order, so
    /// `"EKMF..."` maps `A` to `E`, `B` to `K` and so on.
    ///
    /// # Errors
    ///
    /// [`EnigmaError::InvalidConfiguration`] if `wiring` is not exactly 26
    /// symbols, contains a non-alphabet symbol, or repeats a symbol.
    pub fn new(wiring: &str) -> Result<Self, EnigmaError> {
        let length = wiring.chars().count();
        if length != SIZE {
            return Err(EnigmaError::config(format!(
                "wiring {wiring:?} has {length} symbols, expected {SIZE}"
            )));
        }

        let mut forward = [0; SIZE];
        let mut inverse = [SIZE; SIZE];

        for (input, symbol) in wiring.chars().enumerate() {
            let output = alphabet::index_of(symbol).map_err(|_| {
                EnigmaError::config(format!("wiring {wiring:?} contains {symbol:?}"))
            })?;

            if inverse[output] != SIZE {
                return Err(EnigmaError::config(format!(
                    "wiring {wiring:?} is not a permutation: {symbol:?} appears twice"
                )));
            }

            forward[input] = output;
            inverse[output] = input;
        }

        Ok(Self { forward, inverse })
    }

    /// The identity permutation.
    pub fn identity() -> Self {
        let mut forward = [0; SIZE];
        for (position, slot) in forward.iter_mut().enumerate() {
            *slot = position;
        }
        Self { forward, inverse: forward }
    }

    /// Output symbol for input `position` (wrapped modulo the alphabet size).
    pub fn symbol_at(&self, position: usize) -> char {
        alphabet::symbol_at(self.forward[position % SIZE])
    }

    /// Input position that maps to `symbol`.
    ///
    /// # Errors
    ///
    /// [`EnigmaError::InvalidSymbol`] if `symbol` is not in the alphabet.
    pub fn index_of(&self, symbol: char) -> Result<usize, EnigmaError> {
        Ok(self.inverse[alphabet::index_of(symbol)?])
    }

    /// Substitute `symbol` through the table.
    ///
    /// # Errors
    ///
    /// [`EnigmaError::InvalidSymbol`] if `symbol` is not in the alphabet.
    pub fn substitute(&self, symbol: char) -> Result<char, EnigmaError> {
        Ok(self.symbol_at(alphabet::index_of(symbol)?))
    }

    /// Returns true if applying the table twice is the identity.
    pub fn is_involution(&self) -> bool {
        self.forward == self.inverse
    }

    /// Symbols the table maps to themselves.
    pub fn fixed_points(&self) -> Vec<char> {
        self.forward
            .iter()
            .enumerate()
            .filter(|&(input, &output)| input == output)
            .map(|(input, _)| alphabet::symbol_at(input))
            .collect()
    }

    /// The wiring string this table was built from.
    pub fn wiring(&self) -> String {
        self.forward.iter().map(|&output| alphabet::symbol_at(output)).collect()
    }
}

impl fmt::Debug for SubstitutionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SubstitutionTable").field(&self.wiring()).finish()
    }
}
