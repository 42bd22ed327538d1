pub mod leakage;
pub mod listings;
