//! Revenue leakage audits for local business listings.
//!
//! Raw listing records pass through [`workflows::listings::normalize`] into a
//! canonical [`workflows::listings::BusinessProfile`], get scored by
//! [`workflows::leakage::assess`] and converted into money by
//! [`workflows::leakage::estimate_impact`].

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
