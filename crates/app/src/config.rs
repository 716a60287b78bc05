//! Configuration for the gen-drv application.
//!
//! The command line takes at most one argument: the DRV as 16 hex digits.
//! With no argument a random DRV is generated from a time-based seed, and the
//! seed is printed so the run can be reproduced.

use gen_drv_core::{hex, parse_drv_hex, Error, Result, DRV_SIZE_BYTES};

use crate::input_gen;

/// Where the DRV input comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Parsed from the command line
    Hex([u8; DRV_SIZE_BYTES]),

    /// Generated from a seeded PRNG
    Random { seed: u64 },
}

/// Complete configuration for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: InputSource,
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Print usage and exit successfully
    Help,

    /// Generate a DRV
    Generate(Config),
}

impl Config {
    /// Parse configuration from command-line arguments (program name excluded).
    pub fn from_args(args: &[String]) -> Result<Action> {
        match args {
            [] => Ok(Action::Generate(Config {
                input: InputSource::Random {
                    seed: input_gen::time_seed(),
                },
            })),
            [arg] => match arg.as_str() {
                "--help" | "-h" => Ok(Action::Help),
                drv => Ok(Action::Generate(Config {
                    input: InputSource::Hex(parse_drv_hex(drv)?),
                })),
            },
            _ => Err(Error::Usage("Wrong Usage".to_string())),
        }
    }

    /// Resolve the input bytes.
    pub fn input_bytes(&self) -> [u8; DRV_SIZE_BYTES] {
        match self.input {
            InputSource::Hex(bytes) => bytes,
            InputSource::Random { seed } => input_gen::generate_drv_input(seed),
        }
    }

    /// Print the resolved input in human-readable form.
    ///
    /// `input` is the result of [`Config::input_bytes`], resolved once by the
    /// caller.
    pub fn print(&self, input: &[u8; DRV_SIZE_BYTES]) {
        match self.input {
            InputSource::Hex(_) => {
                tracing::info!(input = %hex::format_drv_hex(input), "using DRV from command line");
            }
            InputSource::Random { seed } => {
                println!();
                println!("Generating random string as input string not provided (seed {})", seed);
                tracing::info!(seed, input = %hex::format_drv_hex(input), "generated random DRV");
            }
        }
    }
}

pub fn print_help() {
    println!();
    println!("Usage: gen-drv [string]");
    println!("string : 8 byte string");
    println!("e.g. gen-drv 1111111122222222");
}
