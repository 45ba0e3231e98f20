use std::io::{self, Write};

use crate::gf::gf256::GF256;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

#[inline]
fn push_hex(line: &mut Vec<u8>, byte: u8) {
    line.push(HEX_DIGITS[(byte >> 4) as usize]);
    line.push(HEX_DIGITS[(byte & 0x0f) as usize]);
}

/// Writes one share line `ii-hh..hh\n` for every index 1..=`share_count`.
///
/// `coeffs` holds one row of T-1 random coefficients per secret byte, highest
/// degree first; the threshold T is implied by its length. Each share byte is
/// the Horner evaluation of that row at the share index, folded onto the
/// secret byte as the constant term.
pub fn encode<W: Write>(
    secret: &[u8],
    coeffs: &[u8],
    share_count: u8,
    out: &mut W,
) -> io::Result<()> {
    assert!(!secret.is_empty(), "secret must not be empty");
    assert!(
        coeffs.len() % secret.len() == 0,
        "coefficient buffer must hold whole rows"
    );
    let degree = coeffs.len() / secret.len();
    let threshold = degree + 1;
    assert!(threshold >= 2, "threshold must be at least 2");
    assert!(
        threshold <= share_count as usize,
        "threshold must not exceed the share count"
    );

    let mut line = Vec::with_capacity(2 + 1 + 2 * secret.len() + 1);
    for i in 1..=share_count {
        line.clear();
        push_hex(&mut line, i);
        line.push(b'-');
        for (p, &s) in secret.iter().enumerate() {
            let row = &coeffs[p * degree..(p + 1) * degree];
            let mut y = GF256::zero();
            for &c in row {
                y = GF256::mul(GF256::add(y, c), i);
            }
            push_hex(&mut line, GF256::add(y, s));
        }
        line.push(b'\n');
        out.write_all(&line)?;
    }
    Ok(())
}
