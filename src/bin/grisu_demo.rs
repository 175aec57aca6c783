//! Minimal demo: convert one double and print the result.

use std::env;
use std::process;

use tracing_subscriber::EnvFilter;

// the reference input of the original demo; entered in source because any
// command-line value has to survive a string-to-double conversion first
const DEFAULT_INPUT: f64 = 1000000001.01010101015252;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let value = match env::args().nth(1) {
        Some(arg) => match arg.parse() {
            Ok(v) => v,
            Err(err) => {
                eprintln!("grisu_demo: {arg:?}: {err}");
                process::exit(2);
            }
        },
        None => DEFAULT_INPUT,
    };

    match grisu::to_exp_string(value) {
        Ok(repr) => println!("{repr}"),
        Err(err) => {
            eprintln!("grisu_demo: {value}: {err}");
            process::exit(1);
        }
    }
}
