use std::io::{self, Write};

/// Write adapter whose writes always report success; the first underlying
/// failure is latched and readable at teardown. Diagnostic paths write
/// through this without error plumbing, and the driver turns a latched
/// failure into its own exit code at the end.
pub struct Retain<W: Write> {
    inner: W,
    error: Option<io::Error>,
}

impl<W: Write> Retain<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, error: None }
    }

    pub fn failed(&self) -> bool {
        self.error.is_some()
    }

    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }
}

impl<W: Write> Write for Retain<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.error.is_none() {
            if let Err(e) = self.inner.write_all(buf) {
                self.error = Some(e);
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.error.is_none() {
            if let Err(e) = self.inner.flush() {
                self.error = Some(e);
            }
        }
        Ok(())
    }
}
