//! clinica-audit
//!
//! Application-level audit trail. Events are emitted through `tracing` so
//! they land in the same structured log stream as everything else.

pub mod events;

pub use events::AuditEvent;
