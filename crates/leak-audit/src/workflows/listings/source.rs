use super::import::ListingImportError;
use super::raw::RawListing;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Search the listing source is asked to answer, e.g. "Dentist" in "Austin".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingQuery {
    pub keyword: String,
    pub location: String,
}

impl ListingQuery {
    pub fn new(keyword: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            location: location.into(),
        }
    }
}

/// Supplier of untrusted listing records. Fetching, paging and any
/// provider-side filtering are entirely the implementor's business.
pub trait ListingSource: Send + Sync {
    fn fetch(&self, query: &ListingQuery) -> Result<Vec<RawListing>, ListingImportError>;
}

/// Canned listings for demos and offline runs: one healthy business, one
/// leaking badly and one borderline case.
#[derive(Debug, Default, Clone, Copy)]
pub struct SampleListingSource;

impl ListingSource for SampleListingSource {
    fn fetch(&self, query: &ListingQuery) -> Result<Vec<RawListing>, ListingImportError> {
        let ListingQuery { keyword, location } = query;
        let slug = |value: &str| {
            value
                .split_whitespace()
                .collect::<Vec<_>>()
                .join("-")
                .to_ascii_lowercase()
        };
        let prefix = format!("sample-{}-{}", slug(keyword.as_str()), slug(location.as_str()));

        let samples = [
            json!({
                "place_id": format!("{prefix}-1"),
                "business_name": format!("{keyword} Kings of {location}"),
                "rating": 4.9,
                "reviews": 150,
                "address": format!("101 Main St, {location}"),
                "phone": "+1 555-0101",
                "website": "https://example.com",
                "photos_count": 50,
                "posts_active": true
            }),
            json!({
                "place_id": format!("{prefix}-2"),
                "business_name": format!("{location} {keyword} Center"),
                "rating": 3.8,
                "reviews": 12,
                "address": format!("204 Side St, {location}"),
                "phone": "+1 555-0202",
                "website": null,
                "photos_count": 4,
                "posts_active": false
            }),
            json!({
                "place_id": format!("{prefix}-3"),
                "business_name": format!("Budget {keyword}"),
                "rating": 4.2,
                "reviews": 30,
                "address": format!("88 Broad Ave, {location}"),
                "phone": "+1 555-0303",
                "website": "https://example.com",
                "photos_count": 12,
                "posts_active": false
            }),
        ];

        samples
            .into_iter()
            .map(|sample| {
                RawListing::try_from(sample).map_err(|_| {
                    ListingImportError::UnexpectedShape("sample listing must be an object")
                })
            })
            .collect()
    }
}
