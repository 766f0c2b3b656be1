//! Core type definitions for lab-value extraction
//!
//! - [`Category`]: Clinical category groups, in dictionary precedence order
//! - [`Measurement`]: One extracted (item, value, unit) record
//! - [`ExtractorConfig`]: Strategy toggles for the extractor

mod category;
mod config;
mod measurement;

pub use category::Category;
pub use config::ExtractorConfig;
pub use measurement::Measurement;
