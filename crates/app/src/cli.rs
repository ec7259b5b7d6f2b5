//! Command-line invocation parsing and execution.
//!
//! The binary keeps a deliberately small contract: `encode`, `decode`
//! and `help` commands matched case-insensitively, an operand form that
//! prints one line to stdout, and a streaming form that transforms all
//! of stdin into raw stdout bytes. stdout carries data only; every
//! diagnostic goes to stderr.

use std::io::{self, Read, Write};

use zbase32_core::{decode, encode};

/// Usage text, shown for `help` and appended to invocation errors.
pub const USAGE: &str = "\
zbase32: Z-Base-32 binary-to-text codec

USAGE:
    zbase32 encode <text>      Encode the operand, print the symbols
    zbase32 decode <text>      Decode the operand, print the raw bytes
    zbase32 encode             Encode stdin to stdout
    zbase32 decode             Decode stdin to stdout
    zbase32 help               Print this help

EXAMPLES:
    zbase32 encode foo         Prints: c3zs6
    printf foo | zbase32 encode
    printf c3zs6 | zbase32 decode";

/// A parsed command line.
///
/// `operand: None` selects streaming mode (stdin -> stdout).
#[derive(Debug, Clone, PartialEq)]
pub enum Invocation {
    Encode { operand: Option<String> },
    Decode { operand: Option<String> },
    Help,
}

impl Invocation {
    /// Parse the argument vector (without the program name).
    ///
    /// Commands match case-insensitively, and `help` is recognized
    /// before the operand shape is inspected, so `zbase32 help encode`
    /// still prints usage.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        if args.is_empty() || args.len() > 2 {
            return Err(format!("expected 1 or 2 arguments, got {}", args.len()));
        }

        let command = args[0].as_str();
        let operand = args.get(1).cloned();

        if command.eq_ignore_ascii_case("help") {
            Ok(Invocation::Help)
        } else if command.eq_ignore_ascii_case("encode") {
            Ok(Invocation::Encode { operand })
        } else if command.eq_ignore_ascii_case("decode") {
            Ok(Invocation::Decode { operand })
        } else {
            Err(format!("unknown command: {command}"))
        }
    }
}

/// Execute a parsed invocation.
///
/// Operand results are line-oriented (trailing newline); streaming
/// results are written raw.
pub fn run(invocation: Invocation) -> Result<(), String> {
    match invocation {
        Invocation::Help => {
            println!("{USAGE}");
            Ok(())
        }
        Invocation::Encode {
            operand: Some(text),
        } => {
            let symbols = encode_all(text.as_bytes())?;
            println!("{symbols}");
            Ok(())
        }
        Invocation::Encode { operand: None } => {
            let input = read_stdin()?;
            let symbols = encode_all(&input)?;
            write_stdout(symbols.as_bytes())
        }
        Invocation::Decode {
            operand: Some(text),
        } => {
            let mut bytes = decode(text.as_bytes()).map_err(|e| e.to_string())?;
            bytes.push(b'\n');
            write_stdout(&bytes)
        }
        Invocation::Decode { operand: None } => {
            let mut input = read_stdin()?;
            // Line-oriented producers end their output with a newline;
            // strip line breaks so `echo c3zs6 | zbase32 decode` works.
            input.retain(|&b| b != b'\n' && b != b'\r');
            let bytes = decode(&input).map_err(|e| e.to_string())?;
            write_stdout(&bytes)
        }
    }
}

/// Encode a whole buffer, every bit significant.
fn encode_all(input: &[u8]) -> Result<String, String> {
    // Saturating keeps absurd lengths in the codec's typed error path
    // instead of overflowing here.
    let bits = input.len().saturating_mul(8);
    encode(input, bits).map_err(|e| e.to_string())
}

fn read_stdin() -> Result<Vec<u8>, String> {
    let mut input = Vec::new();
    io::stdin()
        .read_to_end(&mut input)
        .map_err(|e| format!("reading stdin: {e}"))?;
    Ok(input)
}

fn write_stdout(bytes: &[u8]) -> Result<(), String> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(bytes)
        .and_then(|()| stdout.flush())
        .map_err(|e| format!("writing stdout: {e}"))
}
