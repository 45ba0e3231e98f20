use std::io::{self, Write};

/// Writes a one-line summary of a coefficient buffer: up to six bytes from
/// its head and tail plus the mean bit count per byte, rounded half-up to
/// two fractional digits.
pub fn digest<W: Write>(out: &mut W, coeffs: &[u8]) -> io::Result<()> {
    assert!(!coeffs.is_empty(), "coefficient buffer must not be empty");
    out.write_all(b"Random coefficients are 0x")?;
    let shown = coeffs.len().min(6);
    for k in 0..shown {
        if coeffs.len() > shown && k == shown / 2 {
            out.write_all(b"..")?;
        }
        let off = if k < shown / 2 { 0 } else { coeffs.len() - shown };
        write!(out, "{:02x}", coeffs[off + k])?;
    }
    let ones: u64 = coeffs.iter().map(|&b| u64::from(b.count_ones())).sum();
    let len = coeffs.len() as u64;
    let centi = (100 * ones + 4 * len) / (8 * len);
    writeln!(out, " with a bit average of {}.{:02}.", centi / 100, centi % 100)
}
