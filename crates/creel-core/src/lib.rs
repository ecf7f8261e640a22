//! Core types and traits for the Creel allocation registry.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Creel workspace:
//! registry instance IDs, release-cycle generations, and the marker
//! trait for array element types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod element;
pub mod id;

pub use element::Element;
pub use id::{Generation, RegistryId};
