//! Clausescan Domain Layer
//!
//! Core types shared by every Clausescan crate: the clause records produced by
//! an analysis and the trait boundary to generative-text providers.
//!
//! ## Key Concepts
//!
//! - **ClauseRecord**: a critical clause with its category and explanation
//! - **ClauseEntry**: one element of a model reply, well-formed or not
//! - **AnalysisResult**: the ordered entries for one document
//! - **TextGenerator**: the seam to the external model
//!
//! ## Architecture
//!
//! - Only serialization dependencies
//! - No I/O
//! - Infrastructure implementations live in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod clause;
pub mod traits;

// Re-exports for convenience
pub use clause::{AnalysisResult, ClauseEntry, ClauseRecord};
pub use traits::TextGenerator;
