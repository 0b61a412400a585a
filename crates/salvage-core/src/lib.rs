//! salvage-core
//!
//! Pure domain types for the limb-salvage assessment engine: the frozen
//! clinical snapshot, the computed result, and store key conventions.
//! No scoring logic lives here; see `salvage-rules`.

pub mod error;
pub mod models;
pub mod store_keys;
