//! Untrusted listing intake and the normalization boundary.
//!
//! Loosely typed provider records stop here. Everything past [`normalize`]
//! works with the closed [`BusinessProfile`] shape.

mod coerce;
mod import;
mod keys;
mod normalizer;
mod profile;
mod raw;
mod source;

pub use import::{ListingImportError, ListingImporter};
pub use normalizer::normalize;
pub use profile::{BusinessProfile, UNKNOWN_ADDRESS, UNKNOWN_NAME, UNKNOWN_PHONE};
pub use raw::RawListing;
pub use source::{ListingQuery, ListingSource, SampleListingSource};
