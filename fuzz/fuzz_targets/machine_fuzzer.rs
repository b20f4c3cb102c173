//! Fuzz target for [`EnigmaMachine`] encoding and stepping
//!
//! Drive a machine built from arbitrary catalog selections with arbitrary
//! events and check the machine-level invariants after every one.
//!
//! # Strategy
//!
//! - Configurations: any catalog rotors (including static fourth wheels), any
//!   reflector, any window, plugboard pairs from raw bytes
//! - Events: valid and invalid symbols, bare steps, repositioning with
//!   arbitrary windows
//!
//! # Invariants
//!
//! - Invalid symbols MUST be rejected and MUST NOT move the rotors
//! - A symbol NEVER encodes to itself
//! - A clone taken before an encode decodes its output (reciprocity)
//! - The fast rotor advances exactly one position per encode
//! - Rotors beyond the third NEVER move
//! - Failed repositioning leaves the window unchanged
//! - NEVER panic

#![no_main]

use arbitrary::Arbitrary;
use enigma_core::{Catalog, EnigmaMachine, MachineConfig, RotorSetting, STEPPING_ROTORS, alphabet};
use libfuzzer_sys::fuzz_target;

const ROTORS: &[&str] = &["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "Beta", "Gamma"];
const REFLECTORS: &[&str] = &["A", "B", "C", "B-thin", "C-thin"];

#[derive(Debug, Clone, Arbitrary)]
enum MachineEvent {
    Encode(char),
    EncodeLetter(u8),
    Step,
    SetWindow(String),
}

#[derive(Debug, Clone, Arbitrary)]
struct FuzzInput {
    /// Catalog rotor indices, fastest first (3 or 4 used).
    rotors: [u8; 4],
    /// Whether to fit a static fourth wheel.
    four_rotors: bool,
    /// Window positions.
    window: [u8; 4],
    reflector: u8,
    /// Raw plugboard pairs; invalid pairings are fine, they must just fail.
    plugs: Vec<(u8, u8)>,
    events: Vec<MachineEvent>,
}

fuzz_target!(|input: FuzzInput| {
    let Ok(catalog) = Catalog::historical() else {
        panic!("built-in catalog must be valid");
    };

    let count = if input.four_rotors { 4 } else { STEPPING_ROTORS };
    let config = MachineConfig {
        rotors: (0..count)
            .map(|i| {
                RotorSetting::new(
                    ROTORS[input.rotors[i] as usize % ROTORS.len()],
                    alphabet::symbol_at(input.window[i] as usize),
                )
            })
            .collect(),
        reflector: REFLECTORS[input.reflector as usize % REFLECTORS.len()].to_string(),
        plugboard: input
            .plugs
            .iter()
            .map(|&(a, b)| (alphabet::symbol_at(a as usize), alphabet::symbol_at(b as usize)))
            .collect(),
    };

    let Ok(mut machine) = catalog.build(&config) else {
        // Only the plugboard can be invalid here.
        assert!(!config.plugboard.is_empty());
        return;
    };

    for event in input.events {
        let before = machine.positions();
        let repositioned = matches!(event, MachineEvent::SetWindow(_));

        match event {
            MachineEvent::Encode(symbol) => check_encode(&mut machine, symbol, &before),
            MachineEvent::EncodeLetter(byte) => {
                check_encode(&mut machine, alphabet::symbol_at(byte as usize), &before)
            },
            MachineEvent::Step => {
                machine.step();
                assert_eq!(machine.positions()[0], (before[0] + 1) % alphabet::SIZE);
            },
            MachineEvent::SetWindow(window) => {
                if machine.set_window(&window).is_err() {
                    assert_eq!(machine.positions(), before);
                } else {
                    assert_eq!(machine.window(), window);
                }
            },
        }

        if !repositioned {
            assert_eq!(machine.positions()[STEPPING_ROTORS..], before[STEPPING_ROTORS..]);
        }
    }
});

fn check_encode(machine: &mut EnigmaMachine, symbol: char, before: &[usize]) {
    let mut receiver = machine.clone();

    match machine.encode(symbol) {
        Ok(output) => {
            assert!(alphabet::contains(symbol));
            assert_ne!(output, symbol, "{symbol} encoded to itself");
            assert_eq!(receiver.encode(output), Ok(symbol), "reciprocity broken");
            assert_eq!(machine.positions()[0], (before[0] + 1) % alphabet::SIZE);
        },
        Err(_) => {
            assert!(!alphabet::contains(symbol));
            assert_eq!(machine.positions(), before);
        },
    }
}
