use std::io::{self, Write};

use crate::gf::gf256::GF256;

/// Interpolates every data column of the packed coordinate array at x = 0
/// and writes the recovered secret bytes in order.
///
/// The parser guarantees distinct non-zero indices; both are re-asserted here
/// because `inv` is only defined for non-zero elements.
pub fn reconstruct<W: Write>(coord: &[u8], threshold: usize, out: &mut W) -> io::Result<()> {
    let t = threshold;
    assert!(coord.len() >= 2 * t, "coordinate array must hold at least one data column");
    assert!(
        coord.len() % t == 0,
        "coordinate array length must be a multiple of the threshold"
    );
    let xs = &coord[..t];
    for (i, &x) in xs.iter().enumerate() {
        assert!(x != 0, "share index must be non-zero");
        assert!(!xs[..i].contains(&x), "share indices must be distinct");
    }

    let columns = coord.len() / t - 1;
    for p in 0..columns {
        let ys = &coord[t * (p + 1)..t * (p + 2)];
        let mut s = GF256::zero();
        for (i, &y) in ys.iter().enumerate() {
            let mut basis = GF256::one();
            for (j, &xj) in xs.iter().enumerate() {
                if j == i {
                    continue;
                }
                // x_j - x_i is non-zero since the indices are distinct
                let denom = GF256::sub(xj, xs[i]);
                basis = GF256::mul(basis, GF256::mul(xj, GF256::inv(denom)));
            }
            s = GF256::add(s, GF256::mul(y, basis));
        }
        out.write_all(&[s])?;
    }
    Ok(())
}
