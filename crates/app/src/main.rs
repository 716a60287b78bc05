//! gen-drv: generate a DRV value with its Hamming code embedded.
//!
//! ```text
//! gen-drv                    # random DRV
//! gen-drv 1111111122222222   # DRV from hex
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`
//! (e.g. `RUST_LOG=gen_drv_core=debug` dumps the register before and after
//! encoding).

mod config;
mod input_gen;

use std::process::ExitCode;

use gen_drv_core::{hamming, BitVector, DrvReport, DRV_SIZE_BYTES};
use tracing_subscriber::EnvFilter;

use crate::config::{Action, Config};

/// Exit status for a completed run or `--help`.
const EXIT_OK: u8 = 0;

/// Exit status for every usage and input error.
const EXIT_ERROR: u8 = 1;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    ExitCode::from(run(&args))
}

/// Run the tool on `args` (program name excluded) and return the exit status.
fn run(args: &[String]) -> u8 {
    let config = match Config::from_args(args) {
        Ok(Action::Help) => {
            config::print_help();
            return EXIT_OK;
        }
        Ok(Action::Generate(config)) => config,
        Err(e) => {
            eprintln!();
            eprintln!("Error: {}", e);
            if e.shows_usage() {
                config::print_help();
            }
            return EXIT_ERROR;
        }
    };

    let drv = generate(&config);

    println!();
    DrvReport::from_bytes(&drv).print();

    EXIT_OK
}

/// Resolve the input once, log it, and encode it.
fn generate(config: &Config) -> [u8; DRV_SIZE_BYTES] {
    let input = config.input_bytes();
    config.print(&input);

    let mut bits = BitVector::from_bytes(&input);
    hamming::generate_code_bits(&mut bits);
    bits.to_bytes()
}
