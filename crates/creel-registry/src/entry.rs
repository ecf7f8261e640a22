//! The unit of tracked allocation.
//!
//! An [`Entry`] pairs type-erased owned storage with the destruction
//! action bound at registration time. Erasure goes through `Box<dyn Any>`:
//! the box's vtable carries the concrete type's drop glue, so destroying
//! the entry destroys the allocation correctly without the registry
//! knowing its type. Value entries erase a `T`; array entries erase a
//! `Vec<T>`, whose drop destroys the whole block — the two destruction
//! actions stay distinct by construction.

use std::any::Any;
use std::fmt;

use creel_core::Element;

/// What kind of allocation an [`Entry`] holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    /// A single value.
    Value,
    /// A contiguous array block.
    Array {
        /// Number of elements in the block.
        len: usize,
    },
}

/// An owned, type-erased allocation record.
///
/// Entries are created by [`Registry`](crate::Registry) allocation calls
/// and owned exclusively by the registry until released. Dropping an entry
/// runs the destruction action for its concrete type exactly once.
pub struct Entry {
    /// Type-erased owned storage. Dropping the box runs the bound
    /// destruction action.
    storage: Box<dyn Any>,
    kind: EntryKind,
    /// Concrete type name captured at registration, for diagnostics.
    type_name: &'static str,
}

impl Entry {
    /// Wrap a single value.
    pub(crate) fn from_value<T: 'static>(value: T) -> Self {
        Self {
            storage: Box::new(value),
            kind: EntryKind::Value,
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Wrap a pre-built array block.
    pub(crate) fn from_array<T: Element>(block: Vec<T>) -> Self {
        let len = block.len();
        Self {
            storage: Box::new(block),
            kind: EntryKind::Array { len },
            type_name: std::any::type_name::<T>(),
        }
    }

    /// What kind of allocation this entry holds.
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// The concrete type name captured at registration.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub(crate) fn value_ref<T: 'static>(&self) -> Option<&T> {
        self.storage.downcast_ref::<T>()
    }

    pub(crate) fn value_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.storage.downcast_mut::<T>()
    }

    pub(crate) fn array_ref<T: Element>(&self) -> Option<&[T]> {
        self.storage.downcast_ref::<Vec<T>>().map(Vec::as_slice)
    }

    pub(crate) fn array_mut<T: Element>(&mut self) -> Option<&mut [T]> {
        self.storage.downcast_mut::<Vec<T>>().map(Vec::as_mut_slice)
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("kind", &self.kind)
            .field("type", &self.type_name)
            .finish()
    }
}
