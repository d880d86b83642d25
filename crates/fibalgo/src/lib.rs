//! FibAlgo library: application logic for the `fibalgo` binary.

pub mod app;
pub mod config;
pub mod errors;
