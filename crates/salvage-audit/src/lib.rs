//! salvage-audit
//!
//! Application-level audit trail. Events are emitted through `tracing` so
//! they land wherever the host process ships its logs.

pub mod events;

pub use events::AuditEvent;
