use std::io::{self, Read, Write};

use super::error::ParseError;

const SEPARATOR: u8 = b'-';
const TERMINATOR: u8 = b'\n';

const C0_MNEMONICS: [&str; 32] = [
    "NUL", "SOH", "STX", "ETX", "EOT", "ENQ", "ACK", "BEL", "BS", "HT", "LF",
    "VT", "FF", "CR", "SO", "SI", "DLE", "DC1", "DC2", "DC3", "DC4", "NAK",
    "SYN", "ETB", "CAN", "EM", "SUB", "ESC", "FS", "GS", "RS", "US",
];

#[derive(Clone, Copy)]
enum Want {
    HexDigit,
    Separator,
    Terminator,
}

impl Want {
    fn name(self) -> &'static str {
        match self {
            Want::HexDigit => "hex digit",
            Want::Separator => "'-'",
            Want::Terminator => "newline",
        }
    }
}

#[inline]
fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// 1-based byte offset of byte `byte` of token `token` within its line. Every
/// token is two bytes wide except the single-byte separator, so positions
/// past it sit one byte earlier than `2 * token` would suggest.
#[inline]
fn column(token: usize, byte: usize) -> usize {
    2 * token + byte + 1 - usize::from(token >= 2)
}

/// Reads exactly `threshold` share lines and packs them into a coordinate
/// array: the first T bytes are the share indices in line order, followed by
/// one column of T data bytes per secret byte. Bytes past the final newline
/// are left unread.
///
/// Diagnostics are written to `log` before an error is returned; failures of
/// the log writer itself are suppressed.
pub fn parse<R: Read, W: Write>(
    input: &mut R,
    log: &mut W,
    threshold: usize,
) -> Result<Vec<u8>, ParseError> {
    assert!(
        (2..=255).contains(&threshold),
        "threshold must be in [2, 255]"
    );
    let mut parser = Parser {
        input,
        log,
        threshold,
        // one token per data byte plus index and terminator; keeps
        // threshold * (1 + data_len) within a usize
        max_token: usize::MAX / threshold - 1,
        coord: vec![0u8; threshold],
        data_len: 0,
        line: 0,
    };
    for line in 0..threshold {
        parser.line = line;
        parser.parse_line()?;
    }
    Ok(parser.coord)
}

struct Parser<'a, R, W> {
    input: &'a mut R,
    log: &'a mut W,
    threshold: usize,
    max_token: usize,
    coord: Vec<u8>,
    /// Data bytes per line; 0 until the first line fixes it.
    data_len: usize,
    /// 0-based index of the line being parsed.
    line: usize,
}

impl<R: Read, W: Write> Parser<'_, R, W> {
    fn parse_line(&mut self) -> Result<(), ParseError> {
        let index = self.hex_token(0)?;
        self.check_index(index)?;
        self.coord[self.line] = index;
        self.expect_byte(Want::Separator, SEPARATOR, 1)?;
        if self.data_len == 0 {
            self.first_line_data()
        } else {
            self.known_line_data()
        }
    }

    /// The first line fixes the data length: a newline at a token boundary
    /// past the first data token ends the line.
    fn first_line_data(&mut self) -> Result<(), ParseError> {
        let mut token = 2;
        loop {
            if token > self.max_token {
                let _ = writeln!(self.log, "The share on line {} is too long.", self.line + 1);
                return Err(ParseError::ShareTooLong);
            }
            match self.next_byte()? {
                Some(TERMINATOR) if token >= 3 => {
                    self.data_len = token - 2;
                    return Ok(());
                }
                Some(b) => {
                    let hi = match hex_value(b) {
                        Some(v) => v,
                        None => return Err(self.fail(Want::HexDigit, Some(b), token, 0)),
                    };
                    let lo = self.hex_digit(token, 1)?;
                    self.store_first_line(token, hi << 4 | lo);
                    token += 1;
                }
                None => return Err(self.fail(Want::HexDigit, None, token, 0)),
            }
        }
    }

    fn known_line_data(&mut self) -> Result<(), ParseError> {
        for p in 0..self.data_len {
            let value = self.hex_token(p + 2)?;
            self.coord[self.threshold * (p + 1) + self.line] = value;
        }
        self.expect_byte(Want::Terminator, TERMINATOR, self.data_len + 2)
    }

    /// Grows the coordinate array as data tokens arrive, keeping the
    /// column-major layout valid once the length is known.
    fn store_first_line(&mut self, token: usize, value: u8) {
        let row = token - 1;
        let needed = self.threshold * (row + 1);
        if self.coord.len() < needed {
            self.coord.resize(needed, 0);
        }
        self.coord[self.threshold * row + self.line] = value;
    }

    fn check_index(&mut self, index: u8) -> Result<(), ParseError> {
        if index == 0 {
            let _ = writeln!(
                self.log,
                "Share on line {} has the invalid index 0x00.",
                self.line + 1
            );
            return Err(ParseError::Malformed);
        }
        for prev in 0..self.line {
            if self.coord[prev] == index {
                let _ = writeln!(
                    self.log,
                    "Shares on lines {} and {} have the same index 0x{:02x}.",
                    prev + 1,
                    self.line + 1,
                    index
                );
                return Err(ParseError::Malformed);
            }
        }
        Ok(())
    }

    fn hex_token(&mut self, token: usize) -> Result<u8, ParseError> {
        let hi = self.hex_digit(token, 0)?;
        let lo = self.hex_digit(token, 1)?;
        Ok(hi << 4 | lo)
    }

    fn hex_digit(&mut self, token: usize, byte: usize) -> Result<u8, ParseError> {
        match self.next_byte()? {
            Some(b) => match hex_value(b) {
                Some(v) => Ok(v),
                None => Err(self.fail(Want::HexDigit, Some(b), token, byte)),
            },
            None => Err(self.fail(Want::HexDigit, None, token, byte)),
        }
    }

    fn expect_byte(&mut self, want: Want, expected: u8, token: usize) -> Result<(), ParseError> {
        match self.next_byte()? {
            Some(b) if b == expected => Ok(()),
            other => Err(self.fail(want, other, token, 0)),
        }
    }

    fn next_byte(&mut self) -> Result<Option<u8>, ParseError> {
        let mut buf = [0u8; 1];
        loop {
            match self.input.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(ParseError::Read(e)),
            }
        }
    }

    fn fail(&mut self, want: Want, found: Option<u8>, token: usize, byte: usize) -> ParseError {
        let _ = write!(self.log, "Expected {}, but ", want.name());
        match found {
            None => {
                let _ = write!(self.log, "reached the end of input ");
            }
            Some(0x7f) => {
                let _ = write!(self.log, "found control code DEL (hex 0x7f) ");
            }
            Some(b) if b < 0x20 => {
                let _ = write!(
                    self.log,
                    "found control code {} (hex 0x{:02x}) ",
                    C0_MNEMONICS[b as usize], b
                );
            }
            Some(b) if b < 0x80 => {
                let _ = write!(self.log, "found '{}' ", b as char);
            }
            Some(b) => {
                let _ = write!(self.log, "found non-ASCII byte 0x{:02x} ", b);
            }
        }
        let _ = writeln!(
            self.log,
            "on line {}, column {}.",
            self.line + 1,
            column(token, byte)
        );
        ParseError::Malformed
    }
}
