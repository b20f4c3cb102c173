//! Enigma Core
//!
//! Simulation of an electromechanical rotor cipher machine: plugboard, a stack
//! of stepping rotors, and a reflector.
//!
//! # Design
//!
//! The engine is a deterministic state machine. The only mutable state is the
//! rotor positions of each [`EnigmaMachine`]; rotor models and reflectors are
//! immutable and shared through `Arc`, so one [`Catalog`] can feed machines on
//! any number of threads.
//!
//! Encoding is its own inverse: a second machine with the same configuration
//! and starting window decodes what the first one encoded.
//!
//! # Components
//!
//! - [`alphabet`]: the 26 symbols and positional arithmetic
//! - [`SubstitutionTable`]: permutation with O(1) lookups both ways
//! - [`Plugboard`]: partial involution applied before and after the rotors
//! - [`Rotor`] / [`RotorSpec`]: positional substitution, notches, stepping
//! - [`Reflector`]: fixed-point-free involution
//! - [`EnigmaMachine`]: stepping and the per-symbol encode pass
//! - [`Catalog`] / [`MachineConfig`]: historical models and configuration
//!
//! # Example
//!
//! ```
//! use enigma_core::{Catalog, MachineConfig};
//!
//! let catalog = Catalog::historical()?;
//! let config = MachineConfig::parse("I,II,III", "AAA", "B", "")?;
//!
//! let mut sender = catalog.build(&config)?;
//! let mut receiver = catalog.build(&config)?;
//!
//! let ciphertext = sender.encode_str("HELLOWORLD")?;
//! assert_eq!(ciphertext, "QHHHQRMQUQ");
//! assert_eq!(receiver.encode_str(&ciphertext)?, "HELLOWORLD");
//! # Ok::<(), enigma_core::EnigmaError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod alphabet;
pub mod catalog;
pub mod config;
mod error;
pub mod machine;
pub mod plugboard;
pub mod reflector;
pub mod rotor;
pub mod substitution;

pub use catalog::Catalog;
pub use config::{MachineConfig, RotorSetting};
pub use error::EnigmaError;
pub use machine::{EnigmaMachine, STEPPING_ROTORS};
pub use plugboard::Plugboard;
pub use reflector::Reflector;
pub use rotor::{NotchSet, Rotor, RotorSpec};
pub use substitution::SubstitutionTable;
