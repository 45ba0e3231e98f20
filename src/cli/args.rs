use clap::error::ErrorKind;
use clap::Parser;

use super::exit::Exit;

/// Splits a secret read from stdin into indexed share lines on stdout.
#[derive(Parser, Debug)]
#[command(
    name = "sss256-split",
    version,
    about = "Split a secret into N shares, any T of which reconstruct it"
)]
pub struct SplitArgs {
    /// Number of shares required to reconstruct the secret.
    #[arg(short = 't', long, value_parser = clap::value_parser!(u8).range(2..=255))]
    pub threshold: u8,
    /// Total number of shares to write.
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u8).range(2..=255))]
    pub shares: u8,
}

/// Reconstructs a secret from threshold many share lines on stdin.
#[derive(Parser, Debug)]
#[command(
    name = "sss256-combine",
    version,
    about = "Reconstruct a secret from T shares"
)]
pub struct CombineArgs {
    /// Number of shares to read.
    #[arg(short = 't', long, value_parser = clap::value_parser!(u8).range(2..=255))]
    pub threshold: u8,
}

/// Runs the argument parser and maps its outcome onto the exit-code
/// contract. Help and version output count as success.
pub fn parse_args<A: Parser>() -> Result<A, Exit> {
    A::try_parse().map_err(|err| {
        let exit = match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => Exit::Ok,
            ErrorKind::UnknownArgument => Exit::UnknownArgument,
            ErrorKind::InvalidValue
            | ErrorKind::ValueValidation
            | ErrorKind::InvalidUtf8
            | ErrorKind::MissingRequiredArgument
            | ErrorKind::NoEquals
            | ErrorKind::TooFewValues
            | ErrorKind::TooManyValues
            | ErrorKind::WrongNumberOfValues => Exit::InvalidArgumentValue,
            _ => Exit::ArgParserFailed,
        };
        let _ = err.print();
        exit
    })
}
