//! Error types for consumers of the token stream.
//!
//! Scanning itself never fails: unmatched characters come back as
//! ordinary `Illegal` tokens. This module provides the error
//! representation for callers (including the CLI driver) that decide to
//! treat an illegal character as fatal, plus driver-level failures such
//! as an unreadable source file.

pub mod errors;

#[cfg(test)]
mod tests;
