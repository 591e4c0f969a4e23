//! # mirath-core
//! Foundation types and traits for the Mirath estate distribution engine.

pub mod constants;
pub mod error;
pub mod fraction;
pub mod roster;
pub mod traits;
pub mod types;
pub mod validation;
