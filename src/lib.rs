// Core modules
pub mod analysis;
pub mod indicators;
pub mod models;
pub mod portfolio;
pub mod reference;
pub mod screening;
pub mod synthetic;

// Re-export commonly used types
pub use analysis::{analyze, analyze_with_reference, Analysis, AnalysisOutcome, StockReport};
pub use models::*;
pub use reference::{ReferenceData, StaticReference};
