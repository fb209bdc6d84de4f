// Ticker reference data
// Resolves the display metadata attached to analysis reports

use crate::models::CompanyProfile;

/// Source of ticker display metadata
///
/// The engine only needs a company name and sector per ticker. Embedders
/// with a real security-master service implement this over their own
/// lookup; `StaticReference` keeps reports well-formed without one.
pub trait ReferenceData {
    fn profile(&self, ticker: &str) -> CompanyProfile;
}

/// Built-in directory with one canonical entry and a generic fallback
pub struct StaticReference;

impl ReferenceData for StaticReference {
    fn profile(&self, ticker: &str) -> CompanyProfile {
        if ticker == "AAPL" {
            CompanyProfile {
                name: "Apple Inc.".to_string(),
                sector: "Technology".to_string(),
            }
        } else {
            CompanyProfile {
                name: "Unknown Company".to_string(),
                sector: "General".to_string(),
            }
        }
    }
}
