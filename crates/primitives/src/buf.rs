//! Fixed-width byte buffers.

use crate::macros::internal::{impl_buf_core, impl_buf_fmt, impl_buf_hex, impl_buf_serde};

/// A 32-byte buffer, the width of every digest this workspace handles.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Buf32(pub [u8; 32]);

impl_buf_core!(Buf32, 32);
impl_buf_hex!(Buf32, 32);
impl_buf_fmt!(Buf32, 32);
impl_buf_serde!(Buf32, 32);
