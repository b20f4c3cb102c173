//! Reflector.

use std::fmt;

use crate::{error::EnigmaError, substitution::SubstitutionTable};

/// Fixed reflecting wheel at the end of the rotor stack.
///
/// # Invariants
///
/// - `reflect(reflect(s)) == s` for every symbol.
/// - `reflect(s) != s` for every symbol.
#[derive(Clone, PartialEq, Eq)]
pub struct Reflector {
    name: String,
    table: SubstitutionTable,
}

impl Reflector {
    /// Build a reflector from its wiring string.
    ///
    /// # Errors
    ///
    /// [`EnigmaError::InvalidConfiguration`] if the wiring is not a
    /// permutation, is not an involution, or maps any symbol to itself.
    pub fn new(name: impl Into<String>, wiring: &str) -> Result<Self, EnigmaError> {
        let name = name.into();
        let table = SubstitutionTable::new(wiring)?;

        if !table.is_involution() {
            return Err(EnigmaError::config(format!(
                "reflector {name} wiring {wiring:?} is not an involution"
            )));
        }

        let fixed = table.fixed_points();
        if !fixed.is_empty() {
            return Err(EnigmaError::config(format!(
                "reflector {name} maps {fixed:?} to themselves"
            )));
        }

        Ok(Self { name, table })
    }

    /// Model name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Wiring string.
    pub fn wiring(&self) -> String {
        self.table.wiring()
    }

    /// Reflect `symbol` back into the rotor stack.
    ///
    /// # Errors
    ///
    /// [`EnigmaError::InvalidSymbol`] if `symbol` is not in the alphabet.
    pub fn reflect(&self, symbol: char) -> Result<char, EnigmaError> {
        self.table.substitute(symbol)
    }
}

impl fmt::Debug for Reflector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Reflector").field(&self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet;

    const UKW_B: &str = "YRUHQSLDPXNGOKMIEBFZCWVJAT";

    #[test]
    fn reflects_pairs() {
        let reflector = Reflector::new("B", UKW_B).unwrap();
        assert_eq!(reflector.reflect('A'), Ok('Y'));
        assert_eq!(reflector.reflect('Y'), Ok('A'));
        assert_eq!(reflector.name(), "B");
        assert_eq!(reflector.wiring(), UKW_B);
    }

    #[test]
    fn involution_without_fixed_points() {
        let reflector = Reflector::new("B", UKW_B).unwrap();
        for symbol in alphabet::SYMBOLS {
            let reflected = reflector.reflect(symbol).unwrap();
            assert_ne!(reflected, symbol);
            assert_eq!(reflector.reflect(reflected), Ok(symbol));
        }
    }

    #[test]
    fn rejects_rotor_wiring() {
        let err = Reflector::new("I", "EKMFLGDQVZNTOWYHXUSPAIBRCJ").unwrap_err();
        assert!(err.to_string().contains("not an involution"));
    }

    #[test]
    fn rejects_fixed_point() {
        // Twelve swapped pairs with Y and Z left unwired.
        let err = Reflector::new("bad", "BADCFEHGJILKNMPORQTSVUXWYZ").unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("themselves"));
    }

    #[test]
    fn rejects_identity() {
        assert!(Reflector::new("id", "ABCDEFGHIJKLMNOPQRSTUVWXYZ").is_err());
    }

    #[test]
    fn rejects_invalid_symbol() {
        let reflector = Reflector::new("B", UKW_B).unwrap();
        assert_eq!(reflector.reflect('-'), Err(EnigmaError::InvalidSymbol { symbol: '-' }));
    }
}
