//! Machine state and the per-symbol encode pass.
//!
//! The machine owns its rotors and plugboard and shares the reflector and
//! rotor models with any other machine built from the same catalog.
//!
//! # Stepping
//!
//! Before every symbol the rotors advance. Notch checks use positions sampled
//! at the start of the pass, so the order in which rotors are mutated never
//! changes the outcome:
//!
//! ```text
//! rotor[0] (fast)    always steps
//! rotor[1] (middle)  steps if rotor[0] is at its notch after stepping,
//!                    or if rotor[1] was at its notch (double step)
//! rotor[2] (slow)    steps if rotor[1] was at its notch
//! rotor[3..]         never step
//! ```
//!
//! # Encode pass
//!
//! ```text
//! plugboard -> rotor[0..n] forward -> reflector -> rotor[n..0] backward -> plugboard
//! ```

use std::sync::Arc;

use crate::{
    alphabet, error::EnigmaError, plugboard::Plugboard, reflector::Reflector, rotor::Rotor,
};

/// Number of rotors that take part in stepping. Any further rotors are static.
pub const STEPPING_ROTORS: usize = 3;

/// A configured rotor cipher machine.
///
/// Encoding and decoding are the same operation: a second machine with the
/// same configuration and starting window turns ciphertext back into
/// plaintext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnigmaMachine {
    /// Rotors ordered fastest first.
    rotors: Vec<Rotor>,
    reflector: Arc<Reflector>,
    plugboard: Plugboard,
}

impl EnigmaMachine {
    /// Assemble a machine.
    ///
    /// `rotors` are ordered fastest (rightmost) first.
    ///
    /// # Errors
    ///
    /// [`EnigmaError::InvalidConfiguration`] if fewer than
    /// [`STEPPING_ROTORS`] rotors are supplied.
    pub fn new(
        rotors: Vec<Rotor>,
        reflector: Arc<Reflector>,
        plugboard: Plugboard,
    ) -> Result<Self, EnigmaError> {
        if rotors.len() < STEPPING_ROTORS {
            return Err(EnigmaError::config(format!(
                "machine needs at least {STEPPING_ROTORS} rotors, got {}",
                rotors.len()
            )));
        }

        let machine = Self { rotors, reflector, plugboard };

        tracing::debug!(
            rotors = ?machine.rotors.iter().map(|r| r.spec().name.as_str()).collect::<Vec<_>>(),
            reflector = machine.reflector.name(),
            window = %machine.window(),
            plugs = machine.plugboard.pair_count(),
            "machine assembled"
        );

        Ok(machine)
    }

    /// Rotors, fastest first.
    pub fn rotors(&self) -> &[Rotor] {
        &self.rotors
    }

    /// Number of rotors, including static ones.
    pub fn rotor_count(&self) -> usize {
        self.rotors.len()
    }

    /// The reflector.
    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    /// The plugboard.
    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    /// Rotor positions, fastest first.
    pub fn positions(&self) -> Vec<usize> {
        self.rotors.iter().map(Rotor::position).collect()
    }

    /// Window letters, fastest first.
    pub fn window(&self) -> String {
        self.rotors.iter().map(Rotor::window).collect()
    }

    /// Move every rotor to a new position.
    ///
    /// # Errors
    ///
    /// [`EnigmaError::InvalidConfiguration`] if the number of positions does
    /// not match the rotor count or any position is out of range. The machine
    /// is unchanged on error.
    pub fn set_positions(&mut self, positions: &[usize]) -> Result<(), EnigmaError> {
        if positions.len() != self.rotors.len() {
            return Err(EnigmaError::config(format!(
                "{} positions given for {} rotors",
                positions.len(),
                self.rotors.len()
            )));
        }
        if let Some(&bad) = positions.iter().find(|&&p| p >= alphabet::SIZE) {
            return Err(EnigmaError::config(format!(
                "rotor position {bad} out of range 0..{}",
                alphabet::SIZE
            )));
        }

        for (rotor, &position) in self.rotors.iter_mut().zip(positions) {
            rotor.set_position(position);
        }
        Ok(())
    }

    /// Move every rotor so `window` shows, fastest first.
    ///
    /// # Errors
    ///
    /// [`EnigmaError::InvalidSymbol`] for a non-alphabet letter, or
    /// [`EnigmaError::InvalidConfiguration`] if the length does not match
    /// the rotor count. The machine is unchanged on error.
    pub fn set_window(&mut self, window: &str) -> Result<(), EnigmaError> {
        let positions =
            window.chars().map(alphabet::index_of).collect::<Result<Vec<_>, _>>()?;
        self.set_positions(&positions)
    }

    /// Advance the rotors as if one symbol had been keyed.
    pub fn step(&mut self) {
        let [fast, middle, slow, ..] = self.rotors.as_mut_slice() else {
            return;
        };

        let middle_at_notch = middle.is_at_notch();

        fast.step();
        let fast_at_notch = fast.is_at_notch();

        if fast_at_notch || middle_at_notch {
            middle.step();
        }
        if middle_at_notch {
            slow.step();
        }

        tracing::trace!(window = %self.window(), "stepped");
    }

    /// Encode one symbol.
    ///
    /// The rotors step first, then the symbol passes through the machine.
    ///
    /// # Errors
    ///
    /// [`EnigmaError::InvalidSymbol`] if `symbol` is not in the alphabet. The
    /// rotors do not move on error.
    pub fn encode(&mut self, symbol: char) -> Result<char, EnigmaError> {
        alphabet::index_of(symbol)?;
        self.step();
        self.substitute(symbol)
    }

    /// Encode a string of symbols.
    ///
    /// # Errors
    ///
    /// [`EnigmaError::InvalidSymbol`] naming the first non-alphabet symbol.
    /// Input is checked before any symbol is encoded, so the machine is
    /// unchanged on error.
    pub fn encode_str(&mut self, text: &str) -> Result<String, EnigmaError> {
        if let Some(symbol) = text.chars().find(|&c| !alphabet::contains(c)) {
            return Err(EnigmaError::InvalidSymbol { symbol });
        }
        text.chars().map(|symbol| self.encode(symbol)).collect()
    }

    /// One pass through the machine at the current rotor positions.
    fn substitute(&self, symbol: char) -> Result<char, EnigmaError> {
        let mut signal = self.plugboard.swap(symbol);

        for rotor in &self.rotors {
            signal = rotor.encode_forward(signal)?;
        }

        signal = self.reflector.reflect(signal)?;

        for rotor in self.rotors.iter().rev() {
            signal = rotor.encode_backward(signal)?;
        }

        Ok(self.plugboard.swap(signal))
    }
}
