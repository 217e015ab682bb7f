//! Command-line interface for Punycode conversion.

use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};

/// punycode - Convert internationalized domain names to and from ASCII
#[derive(Parser, Debug)]
#[command(name = "punycode")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode a Unicode label as Punycode (no xn-- prefix)
    Encode {
        /// Labels to encode; reads stdin, one per line, when omitted
        inputs: Vec<String>,
    },
    /// Decode a Punycode label (no xn-- prefix)
    Decode {
        /// Labels to decode; reads stdin, one per line, when omitted
        inputs: Vec<String>,
    },
    /// Convert a domain name or email address to ASCII
    ToAscii {
        /// Names to convert; reads stdin, one per line, when omitted
        inputs: Vec<String>,
    },
    /// Convert a domain name or email address to Unicode
    ToUnicode {
        /// Names to convert; reads stdin, one per line, when omitted
        inputs: Vec<String>,
    },
}

type Convert = fn(&str) -> punycode::Result<String>;

fn converter(command: Command) -> (Convert, Vec<String>) {
    match command {
        Command::Encode { inputs } => (punycode::encode_str as Convert, inputs),
        Command::Decode { inputs } => (punycode::decode_to_string as Convert, inputs),
        Command::ToAscii { inputs } => (punycode::to_ascii as Convert, inputs),
        Command::ToUnicode { inputs } => (punycode::to_unicode as Convert, inputs),
    }
}

fn convert_or_exit(convert: Convert, input: &str, out: &mut impl Write) {
    match convert(input) {
        Ok(converted) => {
            let _ = writeln!(out, "{}", converted);
        }
        Err(e) => {
            eprintln!("Error converting '{}': {}", input, e);
            std::process::exit(1);
        }
    }
}

fn main() {
    let args = Args::parse();

    let (convert, inputs) = converter(args.command);

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    if !inputs.is_empty() {
        for input in &inputs {
            convert_or_exit(convert, input, &mut stdout);
        }
        return;
    }

    // Read from stdin
    for line in io::stdin().lock().lines() {
        match line {
            Ok(s) => convert_or_exit(convert, &s, &mut stdout),
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                std::process::exit(1);
            }
        }
    }
}
