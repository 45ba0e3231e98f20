use once_cell::sync::Lazy;

/// Rijndael reducing polynomial x^8 + x^4 + x^3 + x + 1.
pub const REDUCING_POLY: u16 = 0x11B;

pub struct Gf256Tables {
    pub exp: [u8; 509],
    pub log: [u8; 256],
}

/// Discrete log/exp tables with base {03}. The exp table is duplicated past
/// index 254 so that `exp[log a + log b]` never needs a reduction: log values
/// are at most 254, so their sum is at most 508. `log[0]` is a sentinel and
/// must never be read.
pub static GF256_TABLES: Lazy<Gf256Tables> = Lazy::new(|| {
    let mut exp = [0u8; 509];
    let mut log = [0u8; 256];
    let mut a: u8 = 1;
    for e in 0..255 {
        exp[e] = a;
        log[a as usize] = e as u8;
        // a <- a * {03}, reducing by 0x1b when the high bit falls out
        let carry = if a & 0x80 != 0 { 0x1b } else { 0 };
        a = a ^ (a << 1) ^ carry;
    }
    assert_eq!(a, 1, "{{03}} must cycle back to {{01}} after 255 steps");
    for i in 255..509 {
        exp[i] = exp[i - 255];
    }
    Gf256Tables { exp, log }
});

pub enum GF256 {}

impl GF256 {
    #[inline] pub fn zero() -> u8 { 0 }
    #[inline] pub fn one()  -> u8 { 1 }

    #[inline] pub fn add(a: u8, b: u8) -> u8 { a ^ b }
    #[inline] pub fn sub(a: u8, b: u8) -> u8 { a ^ b }

    #[inline]
    pub fn mul(a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 { return 0; }
        let la = GF256_TABLES.log[a as usize] as usize;
        let lb = GF256_TABLES.log[b as usize] as usize;
        GF256_TABLES.exp[la + lb]
    }

    /// Multiplicative inverse. Calling this with 0 is a contract violation
    /// and aborts.
    #[inline]
    pub fn inv(a: u8) -> u8 {
        assert!(a != 0, "zero has no multiplicative inverse");
        GF256_TABLES.exp[255 - GF256_TABLES.log[a as usize] as usize]
    }
}
