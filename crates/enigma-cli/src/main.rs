//! Enigma command-line binary.
//!
//! # Usage
//!
//! ```bash
//! # Encode with rotors I, II, III (fastest first) at AAA, reflector B
//! enigma HELLOWORLD
//!
//! # Decode: same settings, feed the ciphertext back in
//! enigma --rotors II,IV,V --positions BLA --plugboard "AV BS CG" < message.txt
//!
//! # Show the available rotor and reflector models
//! enigma --list
//! ```

use std::io::{self, Write};

use clap::Parser;
use enigma_cli::{RunConfig, describe_catalog, read_input, run};
use enigma_core::{Catalog, MachineConfig};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Rotor cipher machine
#[derive(Parser, Debug)]
#[command(name = "enigma")]
#[command(about = "Encode or decode text with a rotor cipher machine")]
#[command(version)]
struct Args {
    /// Text to process (reads stdin when omitted)
    text: Option<String>,

    /// Rotor models, fastest first, comma separated
    #[arg(short, long, default_value = "I,II,III")]
    rotors: String,

    /// Initial window letters, fastest first
    #[arg(short, long, default_value = "AAA")]
    positions: String,

    /// Reflector model
    #[arg(short = 'u', long, default_value = "B")]
    reflector: String,

    /// Plugboard pairs, e.g. "AB CD EF"
    #[arg(short = 'k', long, default_value = "")]
    plugboard: String,

    /// Split output into groups of this many letters (0 disables grouping)
    #[arg(short, long, default_value = "0")]
    group: usize,

    /// List catalog models and exit
    #[arg(long)]
    list: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)).with(filter).init();

    let catalog = Catalog::historical()?;
    let mut stdout = io::stdout().lock();

    if args.list {
        for line in describe_catalog(&catalog) {
            writeln!(stdout, "{line}")?;
        }
        return Ok(());
    }

    let machine =
        MachineConfig::parse(&args.rotors, &args.positions, &args.reflector, &args.plugboard)?;
    let config = RunConfig { machine, group: args.group };

    tracing::info!(
        rotors = %args.rotors,
        window = %args.positions,
        reflector = %args.reflector,
        "machine configured"
    );

    let input = read_input(args.text, io::stdin().lock())?;

    let output = run(&catalog, &config, &input)?;
    writeln!(stdout, "{output}")?;

    Ok(())
}
