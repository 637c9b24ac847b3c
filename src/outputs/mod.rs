//! Output generation.
//!
//! # Submodules
//!
//! - [`json`]: success and failure envelopes printed on stdout
//!
//! Logs never go to stdout, so the envelope is always the only thing a caller
//! has to parse.

pub mod json;
