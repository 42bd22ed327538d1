mod summary;
pub mod views;

pub use summary::{AuditBatch, AuditReport};
pub use views::{AuditReportView, BatchSummary, IssueView, MostExposedEntry, TierCountEntry};
