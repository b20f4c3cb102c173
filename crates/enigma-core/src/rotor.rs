//! Rotors.
//!
//! A [`RotorSpec`] is the immutable description of a rotor model: its wiring
//! and the window letters at which it carries into the next rotor. A
//! [`Rotor`] is one physical wheel in a machine: a shared spec plus the
//! position currently showing in the window.
//!
//! # Invariants
//!
//! - `position` is always in `[0, SIZE)`; stepping wraps with `%`.
//! - For a fixed position, [`Rotor::encode_backward`] is the exact inverse of
//!   [`Rotor::encode_forward`].
//! - Notches are window letters (absolute alphabet positions), never outputs
//!   of the wiring.

use std::{fmt, sync::Arc};

use crate::{
    alphabet::{self, SIZE},
    error::EnigmaError,
    substitution::SubstitutionTable,
};

/// Set of window letters at which a rotor carries.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NotchSet {
    /// Bit `i` set means position `i` is a notch.
    bits: u32,
}

impl NotchSet {
    /// Notch set with no notches.
    pub fn none() -> Self {
        Self::default()
    }

    /// Build a notch set from window letters, e.g. `"ZM"`.
    ///
    /// # Errors
    ///
    /// [`EnigmaError::InvalidConfiguration`] if a letter is not in the
    /// alphabet.
    pub fn new(letters: &str) -> Result<Self, EnigmaError> {
        letters.chars().try_fold(Self::none(), |set, letter| {
            let position = alphabet::index_of(letter).map_err(|_| {
                EnigmaError::config(format!("notch {letter:?} is not in A-Z"))
            })?;
            Ok(Self { bits: set.bits | (1 << position) })
        })
    }

    /// Returns true if `position` is a notch.
    pub fn contains(&self, position: usize) -> bool {
        position < SIZE && self.bits & (1 << position) != 0
    }

    /// Returns true if there are no notches.
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Notch letters in alphabet order.
    pub fn letters(&self) -> String {
        (0..SIZE).filter(|&p| self.contains(p)).map(alphabet::symbol_at).collect()
    }
}

impl fmt::Debug for NotchSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NotchSet").field(&self.letters()).finish()
    }
}

/// Immutable description of a rotor model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotorSpec {
    /// Model name, e.g. `"III"`.
    pub name: String,
    /// Internal wiring.
    pub wiring: SubstitutionTable,
    /// Window letters at which this rotor carries.
    pub notches: NotchSet,
}

impl RotorSpec {
    /// Build a rotor model from its wiring string and notch letters.
    ///
    /// # Errors
    ///
    /// [`EnigmaError::InvalidConfiguration`] if the wiring is not a
    /// permutation or a notch is not in the alphabet.
    pub fn new(name: impl Into<String>, wiring: &str, notches: &str) -> Result<Self, EnigmaError> {
        Ok(Self {
            name: name.into(),
            wiring: SubstitutionTable::new(wiring)?,
            notches: NotchSet::new(notches)?,
        })
    }
}

/// One rotor in a machine.
#[derive(Clone, PartialEq, Eq)]
pub struct Rotor {
    spec: Arc<RotorSpec>,
    position: usize,
}

impl Rotor {
    /// Place a rotor at `position`.
    ///
    /// # Errors
    ///
    /// [`EnigmaError::InvalidConfiguration`] if `position >= SIZE`.
    pub fn new(spec: Arc<RotorSpec>, position: usize) -> Result<Self, EnigmaError> {
        if position >= SIZE {
            return Err(EnigmaError::config(format!(
                "rotor {} position {position} out of range 0..{SIZE}",
                spec.name
            )));
        }
        Ok(Self { spec, position })
    }

    /// Place a rotor with `symbol` showing in the window.
    ///
    /// # Errors
    ///
    /// [`EnigmaError::InvalidSymbol`] if `symbol` is not in the alphabet.
    pub fn at_symbol(spec: Arc<RotorSpec>, symbol: char) -> Result<Self, EnigmaError> {
        let position = alphabet::index_of(symbol)?;
        Ok(Self { spec, position })
    }

    /// The rotor model.
    pub fn spec(&self) -> &Arc<RotorSpec> {
        &self.spec
    }

    /// Current offset in `[0, SIZE)`.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Letter showing in the window.
    pub fn window(&self) -> char {
        alphabet::symbol_at(self.position)
    }

    pub(crate) fn set_position(&mut self, position: usize) {
        self.position = position % SIZE;
    }

    /// Returns true if the window letter is one of the model's notches.
    pub fn is_at_notch(&self) -> bool {
        self.spec.notches.contains(self.position)
    }

    /// Advance by one position, wrapping from `Z` to `A`.
    pub fn step(&mut self) {
        self.position = (self.position + 1) % SIZE;
    }

    /// Substitute on the way in, towards the reflector.
    ///
    /// # Errors
    ///
    /// [`EnigmaError::InvalidSymbol`] if `symbol` is not in the alphabet.
    pub fn encode_forward(&self, symbol: char) -> Result<char, EnigmaError> {
        let contact = alphabet::index_of(symbol)?;
        Ok(self.spec.wiring.symbol_at((contact + self.position) % SIZE))
    }

    /// Substitute on the way back from the reflector.
    ///
    /// # Errors
    ///
    /// [`EnigmaError::InvalidSymbol`] if `symbol` is not in the alphabet.
    pub fn encode_backward(&self, symbol: char) -> Result<char, EnigmaError> {
        let contact = self.spec.wiring.index_of(symbol)?;
        Ok(alphabet::symbol_at((contact + SIZE - self.position) % SIZE))
    }
}

impl fmt::Debug for Rotor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rotor")
            .field("model", &self.spec.name)
            .field("window", &self.window())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn rotor_i() -> Arc<RotorSpec> {
        Arc::new(RotorSpec::new("I", "EKMFLGDQVZNTOWYHXUSPAIBRCJ", "Q").unwrap())
    }

    fn rotor_vi() -> Arc<RotorSpec> {
        Arc::new(RotorSpec::new("VI", "JPGVOUMFYQBENHZRDKASXLICTW", "ZM").unwrap())
    }

    #[test]
    fn forward_at_position_zero_is_wiring() {
        let rotor = Rotor::new(rotor_i(), 0).unwrap();
        assert_eq!(rotor.encode_forward('A'), Ok('E'));
        assert_eq!(rotor.encode_forward('B'), Ok('K'));
        assert_eq!(rotor.encode_backward('E'), Ok('A'));
    }

    #[test]
    fn forward_applies_offset() {
        // Position 1 reads one contact further along the wiring.
        let rotor = Rotor::new(rotor_i(), 1).unwrap();
        assert_eq!(rotor.encode_forward('A'), Ok('K'));
        assert_eq!(rotor.encode_backward('K'), Ok('A'));
    }

    #[test]
    fn backward_wraps_below_zero() {
        // Wiring index of E is 0; position 3 must wrap to 23, not underflow.
        let rotor = Rotor::new(rotor_i(), 3).unwrap();
        assert_eq!(rotor.encode_backward('E'), Ok('X'));
    }

    #[test]
    fn step_wraps_z_to_a() {
        let mut rotor = Rotor::at_symbol(rotor_i(), 'Y').unwrap();
        rotor.step();
        assert_eq!(rotor.window(), 'Z');
        rotor.step();
        assert_eq!(rotor.window(), 'A');
        assert_eq!(rotor.position(), 0);
    }

    #[test]
    fn step_visits_every_position_once_per_revolution() {
        let mut rotor = Rotor::new(rotor_i(), 7).unwrap();
        let mut seen = [false; SIZE];
        for _ in 0..SIZE {
            rotor.step();
            assert!(!seen[rotor.position()], "position {} repeated", rotor.position());
            seen[rotor.position()] = true;
        }
        assert!(seen.iter().all(|&s| s));
        assert_eq!(rotor.position(), 7);
    }

    #[test]
    fn notch_uses_window_letter() {
        let mut rotor = Rotor::at_symbol(rotor_i(), 'P').unwrap();
        assert!(!rotor.is_at_notch());
        rotor.step();
        assert_eq!(rotor.window(), 'Q');
        assert!(rotor.is_at_notch());
        rotor.step();
        assert!(!rotor.is_at_notch());
    }

    #[test]
    fn notch_ignores_wiring_output() {
        // Rotor I wires H to Q. Only the window letter Q counts.
        let rotor = Rotor::at_symbol(rotor_i(), 'H').unwrap();
        assert_eq!(rotor.spec().wiring.symbol_at(rotor.position()), 'Q');
        assert!(!rotor.is_at_notch());
        let rotor = Rotor::at_symbol(rotor_i(), 'Q').unwrap();
        assert!(rotor.is_at_notch());
    }

    #[test]
    fn double_notch_rotor() {
        let notched: Vec<char> = (0..SIZE)
            .map(|p| Rotor::new(rotor_vi(), p).unwrap())
            .filter(Rotor::is_at_notch)
            .map(|r| r.window())
            .collect();
        assert_eq!(notched, vec!['M', 'Z']);
    }

    #[test]
    fn rejects_out_of_range_position() {
        let err = Rotor::new(rotor_i(), SIZE).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn rejects_invalid_window_symbol() {
        let err = Rotor::at_symbol(rotor_i(), 'q').unwrap_err();
        assert_eq!(err, EnigmaError::InvalidSymbol { symbol: 'q' });
    }

    #[test]
    fn rejects_invalid_input_symbol() {
        let rotor = Rotor::new(rotor_i(), 0).unwrap();
        assert!(rotor.encode_forward('!').is_err());
        assert!(rotor.encode_backward('!').is_err());
    }

    #[test]
    fn notch_set_letters() {
        assert_eq!(NotchSet::new("ZM").unwrap().letters(), "MZ");
        assert!(NotchSet::none().is_empty());
        assert!(NotchSet::new("1").is_err());
    }

    proptest! {
        #[test]
        fn backward_inverts_forward(position in 0..SIZE, input in 0..SIZE) {
            let rotor = Rotor::new(rotor_vi(), position).unwrap();
            let symbol = alphabet::symbol_at(input);
            let there = rotor.encode_forward(symbol).unwrap();
            prop_assert_eq!(rotor.encode_backward(there).unwrap(), symbol);
        }

        #[test]
        fn forward_inverts_backward(position in 0..SIZE, input in 0..SIZE) {
            let rotor = Rotor::new(rotor_i(), position).unwrap();
            let symbol = alphabet::symbol_at(input);
            let back = rotor.encode_backward(symbol).unwrap();
            prop_assert_eq!(rotor.encode_forward(back).unwrap(), symbol);
        }
    }
}
