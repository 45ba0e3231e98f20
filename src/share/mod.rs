pub mod digest;
pub mod encode;
pub mod error;
pub mod parse;
pub mod reconstruct;

pub use digest::digest;
pub use encode::encode;
pub use error::ParseError;
pub use parse::parse;
pub use reconstruct::reconstruct;
