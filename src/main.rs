use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use rand::Rng;

use obrc::{aggregate, default_workers, render, ByteSource, Error, Result};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("obrc: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let path: PathBuf = env::args_os().nth(1).ok_or(Error::MissingPath)?.into();
    let source = ByteSource::map_file(&path)?;

    // Output order is by name, not hash, so a fresh seed per process never
    // changes the result.
    let seed: u64 = rand::rng().random();

    let table = aggregate(&source, default_workers(), seed)?;
    io::stdout().write_all(&render(&table))?;

    Ok(())
}
