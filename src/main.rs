use std::io::BufRead;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use colored::Colorize;

use mikor::cli::args::Cli;
use mikor::error::MikorError;
use mikor::output::format_resolution;
use mikor::resolver::resolve;

/// Sample phrases shown by `--examples`.
const EXAMPLE_PHRASES: [&str; 5] = ["5", "5-kor", "5 előtt", "hat körül", "két óra múlva"];

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), MikorError> {
    let cli = Cli::parse();
    let format = cli.output;

    if cli.examples {
        for phrase in EXAMPLE_PHRASES {
            let resolution = resolve(phrase, Local::now().naive_local());
            println!("\"{phrase}\"");
            println!("{}", format_resolution(phrase, &resolution, format)?);
        }
        return Ok(());
    }

    if cli.phrases.is_empty() {
        // One phrase per stdin line.
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = line?;
            let phrase = line.trim();
            let resolution = resolve(phrase, Local::now().naive_local());
            println!("{}", format_resolution(phrase, &resolution, format)?);
        }
        return Ok(());
    }

    for phrase in &cli.phrases {
        let resolution = resolve(phrase, Local::now().naive_local());
        println!("{}", format_resolution(phrase, &resolution, format)?);
    }
    Ok(())
}
