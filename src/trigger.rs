//! Invocation trigger.

/// Why the engine is running.
///
/// Immutable once the engine is constructed; several syscalls (e.g. witness
/// checks) consult it to decide whether they are permitted at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum TriggerType {
    /// Running as part of normal application/contract invocation.
    Application,
    /// Running a transaction's or witness's verification script.
    Verification,
    /// Running as a side effect of a block being persisted (system trigger).
    OnPersist,
    /// Running after a block has been persisted (system trigger).
    PostPersist,
}
