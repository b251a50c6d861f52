// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use leptjson::Value;

/// Parse a single JSON value and report its type.
#[derive(Parser, Debug)]
#[command(name = "leptjson", version, about)]
struct Args {
    /// JSON text to parse. Read from stdin when neither this nor --file is given.
    text: Option<String>,

    /// Read the JSON text from a file instead.
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,
}

fn read_input(args: &Args) -> Result<String, String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    let mut s = String::new();
    match &args.file {
        Some(path) => {
            let mut f = fs::File::open(path).map_err(|e| {
                format!("Unable to open file '{}': {}", path.display(), e)
            })?;
            f.read_to_string(&mut s).map_err(|e| {
                format!("Unable to read file '{}': {}", path.display(), e)
            })?;
        }
        None => {
            io::stdin()
                .read_to_string(&mut s)
                .map_err(|e| format!("Unable to read stdin: {e}"))?;
        }
    }
    Ok(s)
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let input = match read_input(&args) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    match leptjson::parse(&input) {
        Ok(value) => {
            println!("type: {}", value.get_type());
            if let Value::Number(n) = value {
                println!("number: {n}");
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
