//! Fuzz target for configuration parsing and validation
//!
//! Feed arbitrary text to every constructor that validates configuration.
//!
//! # Invariants
//!
//! - An accepted wiring is a bijection
//! - An accepted reflector is an involution with no fixed point
//! - An accepted plugboard is self-inverse
//! - A machine built from arbitrary settings encodes reciprocally
//! - NEVER panic on malformed input

#![no_main]

use arbitrary::Arbitrary;
use enigma_core::{Catalog, MachineConfig, Plugboard, Reflector, SubstitutionTable, alphabet};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Arbitrary)]
struct FuzzInput {
    wiring: String,
    models: String,
    window: String,
    reflector: String,
    plugboard: String,
    message: String,
}

fuzz_target!(|input: FuzzInput| {
    if let Ok(table) = SubstitutionTable::new(&input.wiring) {
        for position in 0..alphabet::SIZE {
            assert_eq!(table.index_of(table.symbol_at(position)), Ok(position));
        }
    }

    if let Ok(reflector) = Reflector::new("fuzz", &input.wiring) {
        for symbol in alphabet::SYMBOLS {
            let Ok(reflected) = reflector.reflect(symbol) else {
                panic!("reflector rejected {symbol}");
            };
            assert_ne!(reflected, symbol);
            assert_eq!(reflector.reflect(reflected), Ok(symbol));
        }
    }

    if let Ok(plugboard) = input.plugboard.parse::<Plugboard>() {
        for symbol in input.message.chars() {
            assert_eq!(plugboard.swap(plugboard.swap(symbol)), symbol);
        }
    }

    let Ok(config) =
        MachineConfig::parse(&input.models, &input.window, &input.reflector, &input.plugboard)
    else {
        return;
    };
    let Ok(catalog) = Catalog::historical() else {
        panic!("built-in catalog must be valid");
    };
    let Ok(mut sender) = catalog.build(&config) else {
        return;
    };
    let mut receiver = sender.clone();

    match sender.encode_str(&input.message) {
        Ok(ciphertext) => assert_eq!(receiver.encode_str(&ciphertext), Ok(input.message)),
        Err(_) => assert_eq!(sender, receiver),
    }
});
