use rand::rngs::OsRng;
use rand::RngCore;

/// Bytes requested from the operating system per call, so a failure can be
/// classified without having handed out a partial buffer.
const CHUNK: usize = 256;

#[derive(Debug, thiserror::Error)]
pub enum EntropyError {
    #[error("the system's entropy pool is not initialized yet")]
    PoolUninitialized,
    #[error("reading random bytes from the operating system failed: {0}")]
    Failed(rand::Error),
}

/// Fills `buf` with bytes from the operating system CSPRNG.
pub fn fill(buf: &mut [u8]) -> Result<(), EntropyError> {
    for chunk in buf.chunks_mut(CHUNK) {
        OsRng.try_fill_bytes(chunk).map_err(classify)?;
    }
    Ok(())
}

fn classify(err: rand::Error) -> EntropyError {
    if is_pool_uninitialized(&err) {
        EntropyError::PoolUninitialized
    } else {
        EntropyError::Failed(err)
    }
}

// EINTR from the getrandom syscall means the kernel pool is not seeded yet.
#[cfg(unix)]
fn is_pool_uninitialized(err: &rand::Error) -> bool {
    err.raw_os_error() == Some(libc::EINTR)
}

#[cfg(not(unix))]
fn is_pool_uninitialized(_err: &rand::Error) -> bool {
    false
}
