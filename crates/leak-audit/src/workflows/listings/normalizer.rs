use super::coerce;
use super::keys;
use super::profile::{BusinessProfile, UNKNOWN_ADDRESS, UNKNOWN_NAME, UNKNOWN_PHONE};
use super::raw::RawListing;
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

/// Reconciles an untrusted listing into a [`BusinessProfile`].
///
/// Never fails. Missing or malformed fields degrade to defaults that the
/// leakage rules treat as risk: an unreadable rating becomes `0.0` and an
/// unknown photo count becomes `0`. "Absent upstream" and "genuinely zero"
/// are deliberately indistinguishable after this point. The one exception is
/// the claimed flag, which defaults to `true` so that silence is not
/// penalized.
pub fn normalize(raw: &RawListing) -> BusinessProfile {
    BusinessProfile {
        identifier: resolve_identifier(raw),
        name: first_text(raw, keys::NAME).unwrap_or_else(|| UNKNOWN_NAME.to_string()),
        address: raw
            .get(keys::ADDRESS)
            .and_then(coerce::text)
            .unwrap_or_else(|| UNKNOWN_ADDRESS.to_string()),
        phone: raw
            .get(keys::PHONE)
            .and_then(coerce::text)
            .unwrap_or_else(|| UNKNOWN_PHONE.to_string()),
        rating: resolve_rating(raw),
        review_count: keys::REVIEWS
            .iter()
            .find_map(|key| raw.get(key).and_then(coerce::count))
            .unwrap_or(0),
        photo_count: resolve_photo_count(raw),
        has_website: resolve_has_website(raw),
        posts_active: raw
            .get(keys::POSTS_ACTIVE)
            .and_then(coerce::flag)
            .unwrap_or(false),
        is_claimed: raw
            .get(keys::CLAIMED)
            .and_then(coerce::flag)
            .unwrap_or(true),
    }
}

fn first_text(raw: &RawListing, candidates: &[&str]) -> Option<String> {
    candidates
        .iter()
        .find_map(|key| raw.get(key).and_then(coerce::text))
}

fn resolve_identifier(raw: &RawListing) -> String {
    if let Some(identifier) = first_text(raw, keys::IDENTIFIER) {
        return identifier;
    }

    let synthesized = format!("local-{}", Uuid::new_v4());
    debug!(identifier = %synthesized, "listing has no upstream id; synthesized one");
    synthesized
}

fn resolve_rating(raw: &RawListing) -> f64 {
    raw.get(keys::RATING)
        .and_then(coerce::number)
        .map(|rating| rating.clamp(0.0, 5.0))
        .unwrap_or(0.0)
}

/// Zero from one field falls through to the next (primary, legacy, then the
/// provider's `photos_link.count`); zero from all of them is a real "no
/// photos" answer.
fn resolve_photo_count(raw: &RawListing) -> u32 {
    let candidates: [Option<&Value>; 3] = [
        raw.get(keys::PHOTOS_PRIMARY),
        raw.get(keys::PHOTOS_LEGACY),
        raw.nested(keys::PHOTOS_LINK, keys::PHOTOS_LINK_COUNT),
    ];

    candidates
        .into_iter()
        .flatten()
        .filter_map(coerce::count)
        .find(|count| *count > 0)
        .unwrap_or(0)
}

fn resolve_has_website(raw: &RawListing) -> bool {
    let candidates: [Option<&Value>; 4] = [
        raw.get(keys::WEBSITE),
        raw.get(keys::BOOKING_LINK),
        raw.get(keys::ORDER_LINK),
        raw.nested(keys::LINKS, keys::WEBSITE),
    ];

    candidates.into_iter().flatten().any(coerce::link_present)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawListing {
        RawListing::try_from(value).expect("test listing is an object")
    }

    #[test]
    fn empty_listing_is_fully_defaulted() {
        let profile = normalize(&RawListing::new());

        assert!(profile.identifier.starts_with("local-"));
        assert_eq!(profile.name, UNKNOWN_NAME);
        assert_eq!(profile.address, UNKNOWN_ADDRESS);
        assert_eq!(profile.phone, UNKNOWN_PHONE);
        assert_eq!(profile.rating, 0.0);
        assert_eq!(profile.review_count, 0);
        assert_eq!(profile.photo_count, 0);
        assert!(!profile.has_website);
        assert!(!profile.posts_active);
        assert!(profile.is_claimed);
    }

    #[test]
    fn coerces_string_numbers() {
        let profile = normalize(&raw(json!({
            "place_id": "ChIJ-123",
            "title": "Harbor Dental",
            "rating": "4.6",
            "reviews": "1,204",
            "photos_count": "37"
        })));

        assert_eq!(profile.identifier, "ChIJ-123");
        assert_eq!(profile.name, "Harbor Dental");
        assert_eq!(profile.rating, 4.6);
        assert_eq!(profile.review_count, 1204);
        assert_eq!(profile.photo_count, 37);
    }

    #[test]
    fn unparseable_rating_defaults_to_zero() {
        let profile = normalize(&raw(json!({ "rating": "excellent" })));
        assert_eq!(profile.rating, 0.0);
    }

    #[test]
    fn rating_is_clamped_into_star_range() {
        assert_eq!(normalize(&raw(json!({ "rating": 7.5 }))).rating, 5.0);
        assert_eq!(normalize(&raw(json!({ "rating": -1 }))).rating, 0.0);
    }

    #[test]
    fn photo_count_falls_back_to_legacy_field() {
        let profile = normalize(&raw(json!({ "photos_count": 0, "photos": 14 })));
        assert_eq!(profile.photo_count, 14);

        let profile = normalize(&raw(json!({ "photos_count": "n/a", "photos": "9" })));
        assert_eq!(profile.photo_count, 9);

        let profile = normalize(&raw(json!({ "photos_count": 22, "photos": 3 })));
        assert_eq!(profile.photo_count, 22);

        let profile = normalize(&raw(json!({ "photos_count": 0, "photos": 0 })));
        assert_eq!(profile.photo_count, 0);
    }

    #[test]
    fn photo_count_reads_provider_photos_link() {
        let profile = normalize(&raw(json!({
            "photos_link": { "count": "18", "link": "https://maps.example.com/photos" }
        })));
        assert_eq!(profile.photo_count, 18);

        let profile = normalize(&raw(json!({
            "photos": 0,
            "photos_link": { "count": 6 }
        })));
        assert_eq!(profile.photo_count, 6);

        let profile = normalize(&raw(json!({
            "photos_count": 25,
            "photos_link": { "count": 6 }
        })));
        assert_eq!(profile.photo_count, 25);

        let profile = normalize(&raw(json!({ "photos_link": "https://maps.example.com" })));
        assert_eq!(profile.photo_count, 0);
    }

    #[test]
    fn website_resolves_through_alternate_links() {
        let cases = [
            json!({ "website": "https://example.com" }),
            json!({ "website": "", "booking_link": "https://book.example.com" }),
            json!({ "website": null, "order_online_link": "https://order.example.com" }),
            json!({ "links": { "website": "https://example.com" } }),
        ];

        for case in cases {
            assert!(normalize(&raw(case.clone())).has_website, "{case}");
        }

        let profile = normalize(&raw(json!({
            "website": "  ",
            "booking_link": null,
            "links": { "directions": "https://maps.example.com" }
        })));
        assert!(!profile.has_website);
    }

    #[test]
    fn claimed_defaults_true_but_honors_explicit_false() {
        assert!(normalize(&raw(json!({ "claimed": null }))).is_claimed);
        assert!(normalize(&raw(json!({ "claimed": "unknown" }))).is_claimed);
        assert!(!normalize(&raw(json!({ "claimed": false }))).is_claimed);
        assert!(!normalize(&raw(json!({ "claimed": "no" }))).is_claimed);
    }

    #[test]
    fn numeric_place_ids_are_stringified() {
        let profile = normalize(&raw(json!({ "data_id": 99812 })));
        assert_eq!(profile.identifier, "99812");
    }

    #[test]
    fn synthesized_identifiers_differ_between_listings() {
        let first = normalize(&RawListing::new());
        let second = normalize(&RawListing::new());
        assert_ne!(first.identifier, second.identifier);
    }

    #[test]
    fn renormalizing_a_profile_is_a_no_op() {
        let original = normalize(&raw(json!({
            "business_name": "Budget Plumbing",
            "rating": "4.2",
            "reviews": 30,
            "photos": 12,
            "booking_link": "https://book.example.com",
            "posts_active": "no",
            "unexpected": { "nested": true }
        })));

        assert_eq!(normalize(&original.to_raw()), original);

        let sparse = normalize(&RawListing::new());
        assert_eq!(normalize(&sparse.to_raw()), sparse);
    }
}
