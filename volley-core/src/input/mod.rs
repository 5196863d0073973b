//! Player input

pub mod decoder;

pub use decoder::{DecodedInput, InputDecoder, ModeFlags};
