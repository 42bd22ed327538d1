//! Upstream field names, in resolution order where several are accepted.

pub(crate) const IDENTIFIER: &[&str] = &["place_id", "data_id"];
pub(crate) const NAME: &[&str] = &["business_name", "title", "name"];
pub(crate) const ADDRESS: &str = "address";
pub(crate) const PHONE: &str = "phone";
pub(crate) const RATING: &str = "rating";
pub(crate) const REVIEWS: &[&str] = &["reviews", "review_count"];
pub(crate) const PHOTOS_PRIMARY: &str = "photos_count";
pub(crate) const PHOTOS_LEGACY: &str = "photos";
pub(crate) const PHOTOS_LINK: &str = "photos_link";
pub(crate) const PHOTOS_LINK_COUNT: &str = "count";
pub(crate) const WEBSITE: &str = "website";
pub(crate) const BOOKING_LINK: &str = "booking_link";
pub(crate) const ORDER_LINK: &str = "order_online_link";
pub(crate) const LINKS: &str = "links";
pub(crate) const POSTS_ACTIVE: &str = "posts_active";
pub(crate) const CLAIMED: &str = "claimed";
