//! Shamir's Secret Sharing over GF(2^8) with the Rijndael reducing
//! polynomial. A secret of L bytes is split into N share lines of the form
//! `ii-hh..hh`; any T of them reconstruct the secret, fewer reveal nothing
//! about any byte.
//!
//! Deliberately not provided: resistance against timing or cache side
//! channels (the field core is table-based and branchy), integrity or
//! authentication of shares (a corrupted share silently yields a corrupted
//! secret), and locking secret material into non-swappable memory.

pub mod cli;
pub mod gf;
pub mod share;
