use std::io::{self, Write};

use sss256::cli::Retain;

/// Writer that accepts a limited number of bytes and then fails.
struct FailAfter {
    limit: usize,
    written: Vec<u8>,
}

impl Write for FailAfter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written.len() + buf.len() > self.limit {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        }
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn passes_writes_through_until_the_sink_fails() {
    let mut sink = Retain::new(FailAfter { limit: 8, written: Vec::new() });
    assert_eq!(sink.write(b"12345678").unwrap(), 8);
    assert!(!sink.failed());
}

#[test]
fn latches_the_first_failure_and_keeps_reporting_success() {
    let mut sink = Retain::new(FailAfter { limit: 4, written: Vec::new() });
    assert_eq!(sink.write(b"1234").unwrap(), 4);
    assert_eq!(sink.write(b"overflow").unwrap(), 8);
    assert!(sink.failed());
    assert_eq!(sink.write(b"more").unwrap(), 4);
    assert!(sink.flush().is_ok());
    let err = sink.take_error().unwrap();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    assert!(!sink.failed());
}

#[test]
fn write_macros_need_no_error_handling() {
    let mut sink = Retain::new(FailAfter { limit: 0, written: Vec::new() });
    let result = writeln!(sink, "diagnostic {}", 1);
    assert!(result.is_ok());
    assert!(sink.failed());
}
