//! Text front end for the rotor cipher machine.
//!
//! Turns free-form text into machine input, runs it through a machine built
//! from a [`MachineConfig`], and formats the result. The `enigma` binary is a
//! thin clap wrapper around [`run`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::io::Read;

use enigma_core::{Catalog, EnigmaError, MachineConfig};
use thiserror::Error;

/// Errors from the command-line front end.
#[derive(Debug, Error)]
pub enum CliError {
    /// Machine rejected its configuration or the input text.
    #[error(transparent)]
    Machine(#[from] EnigmaError),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Everything needed to process one message.
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    /// Machine configuration.
    pub machine: MachineConfig,
    /// Output group size, 0 for no grouping.
    pub group: usize,
}

/// Encode (or decode) `input` with a fresh machine.
///
/// # Errors
///
/// [`CliError::Machine`] if the configuration is invalid or the text contains
/// a symbol other than a letter or whitespace.
pub fn run(catalog: &Catalog, config: &RunConfig, input: &str) -> Result<String, CliError> {
    let mut machine = catalog.build(&config.machine)?;
    let text = normalize(input);

    tracing::debug!(symbols = text.len(), window = %machine.window(), "encoding message");

    let output = machine.encode_str(&text)?;

    tracing::debug!(window = %machine.window(), "message encoded");

    Ok(group(&output, config.group))
}

/// Use `text` if given, otherwise read all of `reader`.
///
/// # Errors
///
/// [`CliError::Io`] if reading fails or the input is not UTF-8.
pub fn read_input(text: Option<String>, mut reader: impl Read) -> Result<String, CliError> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buffer = String::new();
            reader.read_to_string(&mut buffer)?;
            Ok(buffer)
        },
    }
}

/// Uppercase ASCII letters and drop whitespace. Anything else is left for the
/// machine to reject.
pub fn normalize(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).map(|c| c.to_ascii_uppercase()).collect()
}

/// Split `text` into space separated groups of `size` symbols.
pub fn group(text: &str, size: usize) -> String {
    if size == 0 {
        return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    chars.chunks(size).map(|chunk| chunk.iter().collect::<String>()).collect::<Vec<_>>().join(" ")
}

/// One line per catalog entry, for `--list`.
pub fn describe_catalog(catalog: &Catalog) -> Vec<String> {
    let mut lines = Vec::new();

    for name in catalog.rotor_names() {
        if let Ok(spec) = catalog.rotor(name) {
            let notches = spec.notches.letters();
            let notches = if notches.is_empty() { "-".to_string() } else { notches };
            lines.push(format!("rotor     {name:<8} {}  notches {notches}", spec.wiring.wiring()));
        }
    }

    for name in catalog.reflector_names() {
        if let Ok(reflector) = catalog.reflector(name) {
            lines.push(format!("reflector {name:<8} {}", reflector.wiring()));
        }
    }

    lines
}
