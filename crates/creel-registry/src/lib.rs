//! Bulk-release allocation registry with generation-checked handles.
//!
//! A [`Registry`] records every heap allocation made through it — single
//! values and arrays alike — together with the destruction action for each
//! allocation's concrete type, and releases all of them in one call. It
//! targets the repeating setup/run/teardown pattern: allocate during setup,
//! use freely during the run, tear everything down at once.
//!
//! # Architecture
//!
//! ```text
//! Registry (owner)
//! ├── Vec<Entry>        (insertion order == allocation order)
//! │   └── Entry         (Box<dyn Any> storage + kind + type name)
//! ├── RegistryId        (foreign-handle detection)
//! └── Generation        (stale-handle detection, bumped on release)
//! ```
//!
//! # Handle safety
//!
//! Allocation calls return `Copy` handles scoped to the current release
//! cycle. After [`Registry::release_all`] every outstanding handle goes
//! stale and further access fails with a checked
//! [`RegistryError::StaleHandle`] — use-after-release is an error value
//! here, not undefined behaviour.
//!
//! # Release order
//!
//! Entries are destroyed in reverse-of-insertion (LIFO) order, both on
//! [`Registry::release_all`] and on registry drop. This is a documented
//! contract: later allocations may reference earlier ones.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod entry;
pub mod error;
pub mod handle;
pub mod registry;

// Public re-exports for the primary API surface.
pub use config::RegistryConfig;
pub use entry::{Entry, EntryKind};
pub use error::RegistryError;
pub use handle::{ArrayHandle, ValueHandle};
pub use registry::Registry;
