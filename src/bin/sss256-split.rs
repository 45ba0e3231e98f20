use std::io::{self, Read, Write};
use std::process::ExitCode;

use zeroize::Zeroize;

use sss256::cli::args::{self, SplitArgs};
use sss256::cli::{entropy, Exit, Retain};
use sss256::share::{digest, encode};

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
    let args = match args::parse_args::<SplitArgs>() {
        Ok(args) => args,
        Err(exit) => return exit,
    };
    if args.threshold > args.shares {
        let _ = writeln!(log, "The threshold must not exceed the number of shares.");
        return Exit::ThresholdExceedsShares;
    }

    let mut secret = Vec::new();
    if let Err(err) = io::stdin().lock().read_to_end(&mut secret) {
        let _ = writeln!(log, "Reading from standard input failed: {err}.");
        return Exit::StdinFailed;
    }
    if secret.is_empty() {
        let _ = writeln!(log, "The secret must not be empty.");
        return Exit::EmptySecret;
    }

    let degree = usize::from(args.threshold) - 1;
    let coeff_len = match secret.len().checked_mul(degree) {
        Some(len) => len,
        None => {
            let _ = writeln!(log, "Out of memory.");
            return Exit::OutOfMemory;
        }
    };
    let mut coeffs = Vec::new();
    if coeffs.try_reserve_exact(coeff_len).is_err() {
        let _ = writeln!(log, "Out of memory.");
        return Exit::OutOfMemory;
    }
    coeffs.resize(coeff_len, 0);

    if let Err(err) = entropy::fill(&mut coeffs) {
        let _ = writeln!(log, "Acquiring random coefficients failed: {err}.");
        return Exit::NoEntropy;
    }

    let _ = writeln!(
        log,
        "Splitting the secret into {} shares with a threshold of {}.",
        args.shares, args.threshold
    );
    let _ = digest(log, &coeffs);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let written = encode(&secret, &coeffs, args.shares, &mut out).and_then(|()| out.flush());
    secret.zeroize();
    coeffs.zeroize();
    if let Err(err) = written {
        let _ = writeln!(log, "Writing to standard output failed: {err}.");
        return Exit::StdoutFailed;
    }
    Exit::Ok
}
