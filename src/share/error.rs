use std::io;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The diagnostic has already been written to the log writer.
    #[error("share input is malformed")]
    Malformed,
    /// The first share never terminated within the line-length bound.
    #[error("share is too long")]
    ShareTooLong,
    #[error("reading share input failed: {0}")]
    Read(#[from] io::Error),
}
