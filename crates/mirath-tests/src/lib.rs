//! Cross-crate scenario tests for Mirath.
//!
//! The integration tests here drive the full engine through the
//! `ShareCalculator` trait on worked cases and check the conservation
//! invariants on generated rosters.

pub mod helpers;
