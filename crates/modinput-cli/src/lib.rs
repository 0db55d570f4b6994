//! Library side of the `modinput` binary.

pub mod logging;
pub mod session;
