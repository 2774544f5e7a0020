//! Wordforge CLI binary.

use clap::Parser;
use std::process;
use wordforge::cli::{args::*, commands::*};

fn main() {
    let args = WordforgeArgs::parse();

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
