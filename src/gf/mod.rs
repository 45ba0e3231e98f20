pub mod gf256;
pub use gf256::*;
