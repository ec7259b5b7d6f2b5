//! Thin entry point: parse the command line, run it, map errors to
//! exit codes. Invocation-shape errors get the usage text on stderr;
//! runtime errors get a one-line report.

mod cli;

use std::process::ExitCode;

fn main() -> ExitCode {
    let invocation = collect_args().and_then(|args| cli::Invocation::from_args(&args));

    let invocation = match invocation {
        Ok(invocation) => invocation,
        Err(reason) => {
            eprintln!("error: {reason}");
            eprintln!();
            eprintln!("{}", cli::USAGE);
            return ExitCode::FAILURE;
        }
    };

    if let Err(reason) = cli::run(invocation) {
        eprintln!("error: {reason}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Collect argv as UTF-8. `env::args` panics on non-UTF-8 arguments;
/// these are reported through the usage path instead.
fn collect_args() -> Result<Vec<String>, String> {
    std::env::args_os()
        .skip(1)
        .map(|arg| {
            arg.into_string()
                .map_err(|raw| format!("argument {raw:?} is not valid UTF-8"))
        })
        .collect()
}
