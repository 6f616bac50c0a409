//! Integration test crate for DiarScore.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It depends on both diarscore crates to verify the batch pipeline
//! works end to end over real files.

#[cfg(test)]
mod pipeline;
