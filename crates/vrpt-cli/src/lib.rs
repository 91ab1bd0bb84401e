//! Library side of the `vrpt-convert` binary.

pub mod commands;
pub mod logging;
pub mod summary;
