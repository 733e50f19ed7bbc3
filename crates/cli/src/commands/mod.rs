//! Command implementations for the dv CLI

pub mod mkdir;
pub mod remote;
