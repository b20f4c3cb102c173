//! Plugboard.
//!
//! The plugboard swaps pairs of symbols on the way into and out of the rotor
//! stack. Unpaired symbols pass through unchanged, so the mapping is a partial
//! involution that may have fixed points.

use std::str::FromStr;

use crate::{
    alphabet::{self, SIZE},
    error::EnigmaError,
    substitution::SubstitutionTable,
};

/// Maximum number of cables: every cable consumes two symbols.
pub const MAX_PAIRS: usize = SIZE / 2;

/// Involutive partial substitution built from symbol pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    table: SubstitutionTable,
}

impl Plugboard {
    /// Plugboard with no cables.
    pub fn empty() -> Self {
        Self { table: SubstitutionTable::identity() }
    }

    /// Build a plugboard from cable pairs.
    ///
    /// # Errors
    ///
    /// [`EnigmaError::InvalidConfiguration`] if a pair contains a non-alphabet
    /// symbol, joins a symbol to itself, or reuses a symbol already plugged.
    pub fn new(pairs: &[(char, char)]) -> Result<Self, EnigmaError> {
        let mut mapping = alphabet::SYMBOLS;

        for &(a, b) in pairs {
            let a_index = plug_index(a)?;
            let b_index = plug_index(b)?;

            if a_index == b_index {
                return Err(EnigmaError::config(format!(
                    "plugboard pair {a}{b} joins {a} to itself"
                )));
            }

            for (symbol, index) in [(a, a_index), (b, b_index)] {
                if mapping[index] != symbol {
                    return Err(EnigmaError::config(format!(
                        "plugboard symbol {symbol} appears in more than one pair"
                    )));
                }
            }

            mapping[a_index] = b;
            mapping[b_index] = a;
        }

        let wiring: String = mapping.iter().collect();
        Ok(Self { table: SubstitutionTable::new(&wiring)? })
    }

    /// Swap `symbol` with its partner.
    ///
    /// Unpaired symbols, including symbols outside the alphabet, are returned
    /// unchanged. Validating input is the machine's job.
    pub fn swap(&self, symbol: char) -> char {
        self.table.substitute(symbol).unwrap_or(symbol)
    }

    /// Configured pairs, each with its lower symbol first, in alphabet order.
    pub fn pairs(&self) -> Vec<(char, char)> {
        alphabet::SYMBOLS
            .iter()
            .map(|&symbol| (symbol, self.swap(symbol)))
            .filter(|&(a, b)| a < b)
            .collect()
    }

    /// Number of cables in use.
    pub fn pair_count(&self) -> usize {
        (SIZE - self.table.fixed_points().len()) / 2
    }
}

impl Default for Plugboard {
    fn default() -> Self {
        Self::empty()
    }
}

impl FromStr for Plugboard {
    type Err = EnigmaError;

    /// Parse the conventional notation: whitespace separated pairs such as
    /// `"AB CD EF"`. Case is ignored and an empty string means no cables.
    fn from_str(notation: &str) -> Result<Self, Self::Err> {
        let pairs = notation
            .split_whitespace()
            .map(|token| {
                let mut symbols = token.chars().map(|c| c.to_ascii_uppercase());
                match (symbols.next(), symbols.next(), symbols.next()) {
                    (Some(a), Some(b), None) => Ok((a, b)),
                    _ => Err(EnigmaError::config(format!(
                        "plugboard pair {token:?} must be exactly two symbols"
                    ))),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(&pairs)
    }
}

fn plug_index(symbol: char) -> Result<usize, EnigmaError> {
    alphabet::index_of(symbol)
        .map_err(|_| EnigmaError::config(format!("plugboard symbol {symbol:?} is not in A-Z")))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn empty_plugboard_passes_everything_through() {
        let plugboard = Plugboard::empty();
        for symbol in alphabet::SYMBOLS {
            assert_eq!(plugboard.swap(symbol), symbol);
        }
        assert_eq!(plugboard.pair_count(), 0);
    }

    #[test]
    fn swaps_both_directions() {
        let plugboard = Plugboard::new(&[('A', 'B'), ('X', 'Q')]).unwrap();
        assert_eq!(plugboard.swap('A'), 'B');
        assert_eq!(plugboard.swap('B'), 'A');
        assert_eq!(plugboard.swap('Q'), 'X');
        assert_eq!(plugboard.swap('X'), 'Q');
        assert_eq!(plugboard.swap('C'), 'C');
        assert_eq!(plugboard.pair_count(), 2);
    }

    #[test]
    fn non_alphabet_passes_through() {
        let plugboard = Plugboard::new(&[('A', 'B')]).unwrap();
        assert_eq!(plugboard.swap('a'), 'a');
        assert_eq!(plugboard.swap('7'), '7');
    }

    #[test]
    fn rejects_reused_symbol() {
        let err = Plugboard::new(&[('A', 'B'), ('B', 'C')]).unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("more than one pair"));
    }

    #[test]
    fn rejects_repeated_pair() {
        assert!(Plugboard::new(&[('A', 'B'), ('A', 'B')]).is_err());
        assert!(Plugboard::new(&[('A', 'B'), ('B', 'A')]).is_err());
    }

    #[test]
    fn rejects_self_pair() {
        let err = Plugboard::new(&[('E', 'E')]).unwrap_err();
        assert!(err.to_string().contains("to itself"));
    }

    #[test]
    fn rejects_foreign_symbol() {
        assert!(Plugboard::new(&[('A', '1')]).is_err());
        assert!(Plugboard::new(&[('a', 'B')]).is_err());
    }

    #[test]
    fn parses_notation() {
        let plugboard: Plugboard = "ab CD  ez".parse().unwrap();
        assert_eq!(plugboard.pairs(), vec![('A', 'B'), ('C', 'D'), ('E', 'Z')]);
    }

    #[test]
    fn parses_empty_notation() {
        let plugboard: Plugboard = "".parse().unwrap();
        assert_eq!(plugboard, Plugboard::empty());
    }

    #[test]
    fn rejects_malformed_notation() {
        assert!("ABC".parse::<Plugboard>().is_err());
        assert!("A B".parse::<Plugboard>().is_err());
    }

    #[test]
    fn pairs_are_normalized() {
        let plugboard = Plugboard::new(&[('Z', 'E'), ('B', 'A')]).unwrap();
        assert_eq!(plugboard.pairs(), vec![('A', 'B'), ('E', 'Z')]);
    }

    #[test]
    fn full_board_of_thirteen_pairs() {
        let pairs: Vec<_> = alphabet::SYMBOLS.chunks(2).map(|c| (c[0], c[1])).collect();
        let plugboard = Plugboard::new(&pairs).unwrap();
        assert_eq!(plugboard.pair_count(), MAX_PAIRS);
    }

    /// Strategy for a valid pairing: shuffle the alphabet and pair off a prefix.
    fn pairing_strategy() -> impl Strategy<Value = Vec<(char, char)>> {
        (Just(alphabet::SYMBOLS.to_vec()).prop_shuffle(), 0..=MAX_PAIRS).prop_map(
            |(symbols, count)| symbols.chunks(2).take(count).map(|c| (c[0], c[1])).collect(),
        )
    }

    proptest! {
        #[test]
        fn swap_is_self_inverse(pairs in pairing_strategy(), symbol in any::<char>()) {
            let plugboard = Plugboard::new(&pairs).unwrap();
            prop_assert_eq!(plugboard.swap(plugboard.swap(symbol)), symbol);
        }

        #[test]
        fn pair_count_matches_input(pairs in pairing_strategy()) {
            let plugboard = Plugboard::new(&pairs).unwrap();
            prop_assert_eq!(plugboard.pair_count(), pairs.len());
        }
    }
}
