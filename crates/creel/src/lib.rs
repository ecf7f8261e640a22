//! Creel: a bulk-release allocation registry for setup/run/teardown
//! workloads.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Creel sub-crates. For most users, adding `creel` as a single
//! dependency is sufficient.
//!
//! A [`Registry`](prelude::Registry) records every heap allocation made
//! through it — single values and primitive array blocks — together with
//! the destruction action for each allocation's concrete type, and
//! releases all of them in one call, newest first. Handles are scoped to
//! the release cycle that minted them: after `release_all`, using an old
//! handle is a checked error, not undefined behaviour.
//!
//! # Quick start
//!
//! ```rust
//! use creel::prelude::*;
//!
//! struct Sensor {
//!     threshold: i32,
//!     gain: f64,
//! }
//!
//! let mut registry = Registry::new();
//!
//! // One registry, reused across repeated setup/run/teardown cycles.
//! for _cycle in 0..2 {
//!     // Setup: allocations are recorded as they are made.
//!     let samples = registry.alloc_array::<i32>(100).unwrap();
//!     let weights = registry.alloc_array::<f64>(200).unwrap();
//!     let sensor = registry
//!         .alloc_value(Sensor { threshold: 42, gain: 3.14 })
//!         .unwrap();
//!
//!     // Run: read and write through the handles.
//!     let block = registry.array_mut(samples).unwrap();
//!     for (i, v) in block.iter_mut().enumerate() {
//!         *v = i as i32;
//!     }
//!     assert_eq!(registry.array(samples).unwrap()[99], 99);
//!     assert_eq!(registry.array(weights).unwrap().len(), 200);
//!     assert_eq!(registry.get(sensor).unwrap().threshold, 42);
//!
//!     // Teardown: everything goes at once, newest first.
//!     registry.release_all();
//!     assert!(registry.is_empty());
//!     assert!(matches!(
//!         registry.get(sensor),
//!         Err(RegistryError::StaleHandle { .. })
//!     ));
//! }
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`registry`] | `creel-registry` | `Registry`, handles, config, errors |
//! | [`types`] | `creel-core` | IDs, generations, the `Element` trait |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Registry, entries, handles, config, and errors (`creel-registry`).
///
/// Most users only need [`registry::Registry`] and the handle types from
/// this module — they are also available in the [`prelude`].
pub use creel_registry as registry;

/// Core types and traits (`creel-core`).
///
/// Contains [`types::RegistryId`], [`types::Generation`], and the sealed
/// [`types::Element`] marker trait that restricts the array path to plain
/// value types.
pub use creel_core as types;

/// Common imports for typical Creel usage.
///
/// ```rust
/// use creel::prelude::*;
/// ```
///
/// This imports the registry, its handle types, the config, and the error
/// enum.
pub mod prelude {
    // Core types
    pub use creel_core::{Element, Generation, RegistryId};

    // Registry API
    pub use creel_registry::{
        ArrayHandle, Registry, RegistryConfig, RegistryError, ValueHandle,
    };
}
