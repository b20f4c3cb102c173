//! Machine configuration.
//!
//! [`MachineConfig`] is plain data naming catalog models, so it can come from
//! command-line arguments, a file, or a hardcoded table. Structural checks
//! happen when a [`Catalog`](crate::Catalog) builds the machine.

use serde::{Deserialize, Serialize};

use crate::{error::EnigmaError, plugboard::Plugboard};

/// One rotor slot: which model, and the letter showing in the window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotorSetting {
    /// Catalog model name, e.g. `"III"`.
    pub model: String,
    /// Initial window letter.
    pub position: char,
}

impl RotorSetting {
    /// Create a rotor setting.
    pub fn new(model: impl Into<String>, position: char) -> Self {
        Self { model: model.into(), position }
    }
}

/// Full machine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Rotor slots, fastest first.
    pub rotors: Vec<RotorSetting>,
    /// Catalog reflector name.
    pub reflector: String,
    /// Plugboard cable pairs.
    #[serde(default)]
    pub plugboard: Vec<(char, char)>,
}

impl MachineConfig {
    /// Assemble a configuration from the conventional written forms.
    ///
    /// - `models`: comma separated model names, fastest first (`"I,II,III"`)
    /// - `window`: one letter per rotor, fastest first (`"AAA"`), case ignored
    /// - `reflector`: reflector name (`"B"`)
    /// - `plugboard`: space separated pairs (`"AB CD"`), may be empty
    ///
    /// # Errors
    ///
    /// [`EnigmaError::InvalidConfiguration`] if the window length does not
    /// match the number of models or the plugboard notation is malformed.
    pub fn parse(
        models: &str,
        window: &str,
        reflector: &str,
        plugboard: &str,
    ) -> Result<Self, EnigmaError> {
        let models: Vec<&str> =
            models.split(',').map(str::trim).filter(|m| !m.is_empty()).collect();
        let window: Vec<char> = window.trim().chars().map(|c| c.to_ascii_uppercase()).collect();

        if models.len() != window.len() {
            return Err(EnigmaError::config(format!(
                "{} rotor models but {} window letters",
                models.len(),
                window.len()
            )));
        }

        let plugboard = plugboard.parse::<Plugboard>()?.pairs();

        Ok(Self {
            rotors: models
                .into_iter()
                .zip(window)
                .map(|(model, position)| RotorSetting::new(model, position))
                .collect(),
            reflector: reflector.trim().to_string(),
            plugboard,
        })
    }
}

impl Default for MachineConfig {
    /// Rotors I, II, III at `AAA`, reflector B, no plugs.
    fn default() -> Self {
        Self {
            rotors: vec![
                RotorSetting::new("I", 'A'),
                RotorSetting::new("II", 'A'),
                RotorSetting::new("III", 'A'),
            ],
            reflector: "B".to_string(),
            plugboard: Vec::new(),
        }
    }
}
