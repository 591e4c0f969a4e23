//! # mirath-engine — Fara'id estate distribution engine.
//!
//! Four pure stages, run in order by [`DistributionEngine`]:
//! - **Net estate**: gross estate less debts, funeral costs and bequest,
//!   floored at zero.
//! - **Fixed shares**: one rule per relationship category, evaluated
//!   against a [`RosterContext`](mirath_core::roster::RosterContext)
//!   computed once per distribution.
//! - **Residuary (Asabah)**: the first present class in a fixed priority
//!   order takes the remainder, males weighted 2:1 over females.
//! - **Awl correction**: oversubscribed results are scaled uniformly down
//!   to the net estate. An undersubscribed remainder is left unclaimed.

pub mod correction;
pub mod engine;
pub mod estate;
pub mod fixed;
pub mod residuary;

pub use correction::reconcile;
pub use engine::DistributionEngine;
pub use estate::net_estate;
pub use fixed::{fixed_claim, fixed_fraction, fixed_shares};
pub use residuary::{controlling_class, residuary, RESIDUARY_ORDER};
