//! `delegation-list` — encode and decode NDN delegation lists.
//!
//! Usage:
//!   delegation-list encode [--content] [--policy replace|append|skip]
//!   delegation-list decode [--unsorted]
//!
//! `encode` reads `<preference> <name>` lines from stdin and prints hex.
//! `decode` reads hex from stdin and prints the list.
//! Set `RUST_LOG` to control log output on stderr.

use ndn_delegation::cli::{decode, encode, CliError, EncodeOptions};
use ndn_delegation::InsertConflictResolution;
use ndn_tlv::constants::CONTENT;
use std::io::{self, Read, Write};
use tracing_subscriber::EnvFilter;

fn run(args: &[String]) -> Result<String, CliError> {
    let command = args.get(1).map(String::as_str).unwrap_or("");

    let mut options = EncodeOptions::default();
    let mut want_sort = true;
    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--content" => options.tlv_type = CONTENT,
            "--append" => options.on_conflict = InsertConflictResolution::Append,
            "--skip" => options.on_conflict = InsertConflictResolution::Skip,
            "--policy" => {
                i += 1;
                if let Some(p) = args.get(i) {
                    options.on_conflict = p.parse()?;
                }
            }
            "--unsorted" => want_sort = false,
            _ => {}
        }
        i += 1;
    }

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    match command {
        "encode" => encode(&input, &options),
        "decode" => Ok(decode(&input, want_sort)?.to_string()),
        other => Err(CliError::UnknownCommand(other.to_string())),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    match run(&args) {
        Ok(out) => {
            let mut stdout = io::stdout();
            if let Err(e) = writeln!(stdout, "{out}") {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
