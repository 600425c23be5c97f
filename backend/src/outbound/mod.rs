//! Outbound adapters implementing the domain ports against infrastructure.

pub mod persistence;
