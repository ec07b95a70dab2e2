//! Collection of generic internal data types that are used widely.

#[macro_use]
mod macros;

pub mod buf;
pub mod errors;

pub use buf::Buf32;
pub use errors::ParseError;

/// Position of a block in the chain, counted from genesis.
pub type BlockHeight = u64;
