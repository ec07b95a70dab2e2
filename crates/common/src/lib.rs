//! Utilities shared by the waypoint binaries.

pub mod logging;
