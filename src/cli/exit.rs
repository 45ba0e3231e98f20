use std::process::ExitCode;

/// Process exit codes shared by both tools.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Ok = 0,
    UnknownArgument = 1,
    InvalidArgumentValue = 2,
    ThresholdExceedsShares = 3,
    EmptySecret = 4,
    ShareTooLong = 5,
    ParseFailed = 6,
    ArgParserFailed = 7,
    OutOfMemory = 8,
    StdinFailed = 9,
    StdoutFailed = 10,
    StderrFailed = 11,
    NoEntropy = 12,
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> ExitCode {
        ExitCode::from(exit as u8)
    }
}
