//! `nif`: generate a Portuguese fiscal identification number, or complete
//! and correct one given on the command line.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use nif::cli;

/// Generate or fix Portuguese fiscal identification numbers
#[derive(Parser, Debug)]
#[command(name = "nif", version)]
#[command(about = "Generate a valid NIF, or complete and fix the one given")]
struct Args {
    /// NIF digits; missing digits are filled at random and the check digit is corrected
    nif: Option<String>,

    /// Further arguments are ignored
    #[arg(hide = true)]
    _ignored: Vec<String>,

    /// Log to stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let outcome = cli::run(args.nif.as_deref());
    println!("{}", outcome.message);
    if outcome.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn no_argument() {
        let args = Args::try_parse_from(["nif"]).unwrap();
        assert_eq!(args.nif, None);
    }

    #[test]
    fn extra_arguments_are_ignored() {
        let args = Args::try_parse_from(["nif", "1234567", "999", "abc"]).unwrap();
        assert_eq!(args.nif.as_deref(), Some("1234567"));
    }

    #[test]
    fn verbosity_counts() {
        let args = Args::try_parse_from(["nif", "-vv", "123"]).unwrap();
        assert_eq!(args.verbose, 2);
        assert_eq!(args.nif.as_deref(), Some("123"));
    }
}
