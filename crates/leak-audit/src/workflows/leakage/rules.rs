use super::domain::{Issue, Severity};
use crate::workflows::listings::BusinessProfile;

pub(crate) const MIN_REVIEWS: u32 = 50;
pub(crate) const MIN_RATING: f64 = 4.3;
pub(crate) const MIN_PHOTOS: u32 = 10;

/// A single weighted heuristic. Rules never look at each other's outcome.
pub(crate) struct LeakRule {
    pub(crate) area: &'static str,
    pub(crate) weight: u8,
    pub(crate) severity: Severity,
    pub(crate) suggested_fix: &'static str,
    triggered: fn(&BusinessProfile) -> bool,
    describe: fn(&BusinessProfile) -> String,
}

impl LeakRule {
    pub(crate) fn evaluate(&self, profile: &BusinessProfile) -> Option<Issue> {
        (self.triggered)(profile).then(|| Issue {
            area: self.area,
            severity: self.severity,
            description: (self.describe)(profile),
            suggested_fix: self.suggested_fix,
        })
    }
}

/// Evaluation order is the order issues are reported in.
pub(crate) static LEAK_RULES: [LeakRule; 6] = [
    LeakRule {
        area: "Trust & Review Gaps",
        weight: 15,
        severity: Severity::High,
        suggested_fix: "Launch an automated review request campaign.",
        triggered: |profile| profile.review_count < MIN_REVIEWS,
        describe: |profile| {
            format!(
                "Only {} reviews found (threshold is {MIN_REVIEWS}).",
                profile.review_count
            )
        },
    },
    LeakRule {
        area: "Reputation",
        weight: 15,
        severity: Severity::High,
        suggested_fix:
            "Respond to negative feedback publicly and dilute it with fresh positive reviews.",
        triggered: |profile| profile.rating < MIN_RATING,
        describe: |profile| {
            format!(
                "Rating is {} (trust threshold is {MIN_RATING}).",
                profile.rating
            )
        },
    },
    LeakRule {
        area: "Low Click-Through Rate",
        weight: 10,
        severity: Severity::High,
        suggested_fix: "Upload 10+ high-quality team and interior photos.",
        triggered: |profile| profile.photo_count < MIN_PHOTOS,
        describe: |profile| {
            format!(
                "Only {} photos. The listing looks inactive.",
                profile.photo_count
            )
        },
    },
    LeakRule {
        area: "Inactive Engagement Signals",
        weight: 10,
        severity: Severity::Medium,
        suggested_fix: "Publish one offer per week to keep activity signals fresh.",
        triggered: |profile| !profile.posts_active,
        describe: |_| "No active posts detected.".to_string(),
    },
    LeakRule {
        area: "Missed Calls & Walk-ins",
        weight: 15,
        severity: Severity::Critical,
        suggested_fix: "Link a landing page or website.",
        triggered: |profile| !profile.has_website,
        describe: |_| "No website, booking or ordering link.".to_string(),
    },
    LeakRule {
        area: "Ownership Risk",
        weight: 20,
        severity: Severity::Critical,
        suggested_fix: "Claim the listing to prevent competitor edits.",
        triggered: |profile| !profile.is_claimed,
        describe: |_| "Business profile is unclaimed.".to_string(),
    },
];

/// Runs every rule once, in table order, returning the uncapped weight sum
/// and the issues of the rules that fired.
pub(crate) fn score_profile(profile: &BusinessProfile) -> (u32, Vec<Issue>) {
    let mut total: u32 = 0;
    let mut issues = Vec::new();

    for rule in &LEAK_RULES {
        if let Some(issue) = rule.evaluate(profile) {
            total += u32::from(rule.weight);
            issues.push(issue);
        }
    }

    (total, issues)
}
