//! Rotor and reflector catalogs.
//!
//! A [`Catalog`] maps model names to immutable [`RotorSpec`]s and
//! [`Reflector`]s. It is built once and hands out `Arc` clones, so any number
//! of machines (on any number of threads) can share the same wiring data.
//!
//! [`Catalog::historical`] registers the standard wheels of the three-rotor
//! service machines, the naval rotors VI to VIII with their two notches, the
//! static Beta and Gamma fourth wheels, and the wide and thin reflectors.

use std::{collections::BTreeMap, sync::Arc};

use crate::{
    config::MachineConfig,
    error::EnigmaError,
    machine::EnigmaMachine,
    plugboard::Plugboard,
    reflector::Reflector,
    rotor::{Rotor, RotorSpec},
};

/// `(name, wiring, notches)` for each historical rotor.
const HISTORICAL_ROTORS: &[(&str, &str, &str)] = &[
    ("I", "EKMFLGDQVZNTOWYHXUSPAIBRCJ", "Q"),
    ("II", "AJDKSIRUXBLHWTMCQGZNPYFVOE", "E"),
    ("III", "BDFHJLCPRTXVZNYEIWGAKMUSQO", "V"),
    ("IV", "ESOVPZJAYQUIRHXLNFTGKDCMWB", "J"),
    ("V", "VZBRGITYUPSDNHLXAWMJQOFECK", "Z"),
    ("VI", "JPGVOUMFYQBENHZRDKASXLICTW", "ZM"),
    ("VII", "NZJHGRCXMYSWBOUFAIVLPEKQDT", "ZM"),
    ("VIII", "FKQHTLXOCBJSPDZRAMEWNIUYGV", "ZM"),
    ("Beta", "LEYJVCNIXWPBQMDRTAKZGFUHOS", ""),
    ("Gamma", "FSOKANUERHMBTIYCWLQPZXVGJD", ""),
];

/// `(name, wiring)` for each historical reflector.
const HISTORICAL_REFLECTORS: &[(&str, &str)] = &[
    ("A", "EJMZALYXVBWFCRQUONTSPIKHGD"),
    ("B", "YRUHQSLDPXNGOKMIEBFZCWVJAT"),
    ("C", "FVPJIAOYEDRZXWGCTKUQSBNMHL"),
    ("B-thin", "ENKQAUYWJICOPBLMDXZVFTHRGS"),
    ("C-thin", "RDOBJNTKVEHMLFCWZAXGYIPSUQ"),
];

/// Named rotor and reflector models.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Keyed by normalized name.
    rotors: BTreeMap<String, Arc<RotorSpec>>,
    /// Keyed by normalized name.
    reflectors: BTreeMap<String, Arc<Reflector>>,
}

impl Catalog {
    /// Empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog of the historical rotors and reflectors.
    ///
    /// # Errors
    ///
    /// Returns [`EnigmaError::InvalidConfiguration`] only if one of the
    /// built-in tables is malformed.
    pub fn historical() -> Result<Self, EnigmaError> {
        let mut catalog = Self::new();
        for &(name, wiring, notches) in HISTORICAL_ROTORS {
            catalog = catalog.with_rotor(RotorSpec::new(name, wiring, notches)?);
        }
        for &(name, wiring) in HISTORICAL_REFLECTORS {
            catalog = catalog.with_reflector(Reflector::new(name, wiring)?);
        }
        Ok(catalog)
    }

    /// Register a rotor model, replacing any model with the same name.
    #[must_use]
    pub fn with_rotor(mut self, spec: RotorSpec) -> Self {
        self.rotors.insert(normalize(&spec.name), Arc::new(spec));
        self
    }

    /// Register a reflector, replacing any reflector with the same name.
    #[must_use]
    pub fn with_reflector(mut self, reflector: Reflector) -> Self {
        self.reflectors.insert(normalize(reflector.name()), Arc::new(reflector));
        self
    }

    /// Look up a rotor model.
    ///
    /// Names are matched case-insensitively.
    ///
    /// # Errors
    ///
    /// [`EnigmaError::InvalidConfiguration`] if no such model is registered.
    pub fn rotor(&self, name: &str) -> Result<Arc<RotorSpec>, EnigmaError> {
        self.rotors
            .get(&normalize(name))
            .cloned()
            .ok_or_else(|| EnigmaError::config(format!("unknown rotor model {name:?}")))
    }

    /// Look up a reflector.
    ///
    /// Names are matched case-insensitively, and the wide reflectors also
    /// answer to `"B (wide)"` and `"C (wide)"`, the thin ones to `"B (thin)"`
    /// and `"C (thin)"`.
    ///
    /// # Errors
    ///
    /// [`EnigmaError::InvalidConfiguration`] if no such reflector is
    /// registered.
    pub fn reflector(&self, name: &str) -> Result<Arc<Reflector>, EnigmaError> {
        self.reflectors
            .get(&normalize(name))
            .cloned()
            .ok_or_else(|| EnigmaError::config(format!("unknown reflector {name:?}")))
    }

    /// Registered rotor model names.
    pub fn rotor_names(&self) -> Vec<&str> {
        self.rotors.values().map(|spec| spec.name.as_str()).collect()
    }

    /// Registered reflector names.
    pub fn reflector_names(&self) -> Vec<&str> {
        self.reflectors.values().map(|reflector| reflector.name()).collect()
    }

    /// Build a machine from a configuration.
    ///
    /// # Errors
    ///
    /// [`EnigmaError::InvalidConfiguration`] for unknown models, too few
    /// rotors, or an invalid plugboard; [`EnigmaError::InvalidSymbol`] for a
    /// start position outside the alphabet.
    pub fn build(&self, config: &MachineConfig) -> Result<EnigmaMachine, EnigmaError> {
        let rotors = config
            .rotors
            .iter()
            .map(|setting| Rotor::at_symbol(self.rotor(&setting.model)?, setting.position))
            .collect::<Result<Vec<_>, _>>()?;

        EnigmaMachine::new(rotors, self.reflector(&config.reflector)?, Plugboard::new(&config.plugboard)?)
    }
}

/// Lookup key: uppercase, with `" (wide)"` dropped and `" (thin)"` written as
/// `"-THIN"`.
fn normalize(name: &str) -> String {
    let upper = name.trim().to_ascii_uppercase();
    if let Some(base) = upper.strip_suffix("(WIDE)") {
        return base.trim_end().to_string();
    }
    if let Some(base) = upper.strip_suffix("(THIN)") {
        return format!("{}-THIN", base.trim_end());
    }
    upper
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet;

    #[test]
    fn historical_catalog_is_complete() {
        let catalog = Catalog::historical().unwrap();
        assert_eq!(catalog.rotor_names().len(), 10);
        assert_eq!(catalog.reflector_names().len(), 5);
    }

    #[test]
    fn every_reflector_is_fixed_point_free_involution() {
        let catalog = Catalog::historical().unwrap();
        for name in catalog.reflector_names() {
            let reflector = catalog.reflector(name).unwrap();
            for symbol in alphabet::SYMBOLS {
                let reflected = reflector.reflect(symbol).unwrap();
                assert_ne!(reflected, symbol, "reflector {name} fixes {symbol}");
                assert_eq!(reflector.reflect(reflected).unwrap(), symbol);
            }
        }
    }

    #[test]
    fn naval_rotors_have_two_notches() {
        let catalog = Catalog::historical().unwrap();
        for name in ["VI", "VII", "VIII"] {
            assert_eq!(catalog.rotor(name).unwrap().notches.letters(), "MZ");
        }
        assert!(catalog.rotor("beta").unwrap().notches.is_empty());
    }

    #[test]
    fn lookup_is_case_insensitive_with_aliases() {
        let catalog = Catalog::historical().unwrap();
        assert_eq!(catalog.rotor("iii").unwrap().name, "III");
        assert_eq!(catalog.reflector("b").unwrap().name(), "B");
        assert_eq!(catalog.reflector("B (wide)").unwrap().name(), "B");
        assert_eq!(catalog.reflector("C (thin)").unwrap().name(), "C-thin");
        assert_eq!(catalog.reflector("b-thin").unwrap().name(), "B-thin");
    }

    #[test]
    fn lookups_share_specs() {
        let catalog = Catalog::historical().unwrap();
        let a = catalog.rotor("I").unwrap();
        let b = catalog.rotor("I").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn unknown_models_are_configuration_errors() {
        let catalog = Catalog::historical().unwrap();
        assert!(catalog.rotor("IX").unwrap_err().is_configuration());
        assert!(catalog.reflector("D").unwrap_err().is_configuration());
    }

    #[test]
    fn custom_models_can_be_registered() {
        let catalog = Catalog::new()
            .with_rotor(RotorSpec::new("Shift", "BCDEFGHIJKLMNOPQRSTUVWXYZA", "A").unwrap());
        assert_eq!(catalog.rotor("shift").unwrap().wiring.symbol_at(0), 'B');
        assert!(catalog.reflector("B").is_err());
    }
}
