use std::io::{self, Write};
use std::process::ExitCode;

use sss256::cli::args::{self, CombineArgs};
use sss256::cli::{Exit, Retain};
use sss256::share::{parse, reconstruct, ParseError};

fn main() -> ExitCode {
    let stderr = io::stderr();
    let mut log = Retain::new(stderr.lock());
    let exit = match run(&mut log) {
        Exit::Ok if log.failed() => Exit::StderrFailed,
        other => other,
    };
    exit.into()
}

fn run<W: Write>(log: &mut W) -> Exit {
    let args = match args::parse_args::<CombineArgs>() {
        Ok(args) => args,
        Err(exit) => return exit,
    };
    let threshold = usize::from(args.threshold);

    let stdin = io::stdin();
    let mut input = io::BufReader::new(stdin.lock());
    let coord = match parse(&mut input, log, threshold) {
        Ok(coord) => coord,
        Err(ParseError::Malformed) => return Exit::ParseFailed,
        Err(ParseError::ShareTooLong) => return Exit::ShareTooLong,
        Err(ParseError::Read(err)) => {
            let _ = writeln!(log, "Reading from standard input failed: {err}.");
            return Exit::StdinFailed;
        }
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    if let Err(err) = reconstruct(&coord, threshold, &mut out).and_then(|()| out.flush()) {
        let _ = writeln!(log, "Writing to standard output failed: {err}.");
        return Exit::StdoutFailed;
    }
    Exit::Ok
}
