//! Outbound adapters implementing domain ports for storage.
//!
//! Adapters are thin translators between domain types and their backing
//! store. They contain no business logic.
//!
//! - **memory**: process-local user repository guarded by a lock.

pub mod memory;
