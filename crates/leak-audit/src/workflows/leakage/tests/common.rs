use crate::workflows::leakage::ImpactParameters;
use crate::workflows::listings::BusinessProfile;

/// A listing that clears every rule.
pub(crate) fn healthy_profile() -> BusinessProfile {
    BusinessProfile {
        identifier: "place-healthy".to_string(),
        name: "Dentist Kings of Austin".to_string(),
        address: "101 Main St, Austin".to_string(),
        phone: "+1 555-0101".to_string(),
        rating: 4.9,
        review_count: 150,
        photo_count: 50,
        has_website: true,
        posts_active: true,
        is_claimed: true,
    }
}

/// Trips rules 1 through 5 but is claimed.
pub(crate) fn leaking_profile() -> BusinessProfile {
    BusinessProfile {
        identifier: "place-leaking".to_string(),
        name: "Austin Dentist Center".to_string(),
        address: "204 Side St, Austin".to_string(),
        phone: "+1 555-0202".to_string(),
        rating: 3.8,
        review_count: 12,
        photo_count: 4,
        has_website: false,
        posts_active: false,
        is_claimed: true,
    }
}

pub(crate) fn default_parameters() -> ImpactParameters {
    ImpactParameters {
        average_transaction_value: 500.0,
        estimated_monthly_contacts: 50,
    }
}
