use super::keys;
use super::raw::RawListing;
use serde::{Deserialize, Serialize};

pub const UNKNOWN_NAME: &str = "Unknown Business";
pub const UNKNOWN_ADDRESS: &str = "Unknown";
pub const UNKNOWN_PHONE: &str = "N/A";

/// Canonical, fully populated view of a listing. Every field always holds a
/// type-correct value; missing upstream data has already been defaulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub identifier: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub rating: f64,
    pub review_count: u32,
    pub photo_count: u32,
    pub has_website: bool,
    pub posts_active: bool,
    pub is_claimed: bool,
}

impl BusinessProfile {
    /// Re-expresses the profile using the upstream key names, so that feeding
    /// the result back through the normalizer reproduces `self`.
    pub fn to_raw(&self) -> RawListing {
        RawListing::new()
            .with(keys::IDENTIFIER[0], self.identifier.clone())
            .with(keys::NAME[0], self.name.clone())
            .with(keys::ADDRESS, self.address.clone())
            .with(keys::PHONE, self.phone.clone())
            .with(keys::RATING, self.rating)
            .with(keys::REVIEWS[0], self.review_count)
            .with(keys::PHOTOS_PRIMARY, self.photo_count)
            .with(keys::WEBSITE, self.has_website)
            .with(keys::POSTS_ACTIVE, self.posts_active)
            .with(keys::CLAIMED, self.is_claimed)
    }
}
