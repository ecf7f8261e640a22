//! The allocation registry.
//!
//! [`Registry`] is the owning component: every allocation made through it
//! is recorded as an [`Entry`] and destroyed during [`Registry::release_all`]
//! (or registry drop). Callers interact through generation-scoped handles;
//! a handle from a finished release cycle is rejected with a checked error
//! rather than reaching freed storage.
//!
//! The lifecycle per cycle is:
//! 1. `alloc_value()` / `alloc_value_with()` / `alloc_array()` — register
//!    allocations during setup
//! 2. `get()` / `get_mut()` / `array()` / `array_mut()` — use them during
//!    the run phase
//! 3. `release_all()` — destroy every entry, newest first, and start the
//!    next cycle

use std::fmt;

use indexmap::IndexMap;

use creel_core::{Element, Generation, RegistryId};

use crate::config::RegistryConfig;
use crate::entry::Entry;
use crate::error::RegistryError;
use crate::handle::{ArrayHandle, ValueHandle};

/// A bulk-release allocation registry.
///
/// Owns every allocation made through it and destroys all of them in one
/// call, in reverse-of-insertion (LIFO) order — later allocations may
/// reference earlier ones, so the newest entry is destroyed first. Dropping
/// the registry performs the same release implicitly.
///
/// The registry is reusable: after [`Registry::release_all`] it accepts new
/// allocations, and handles from the finished cycle fail with
/// [`RegistryError::StaleHandle`].
///
/// Single-threaded by contract and by construction: entry storage is not
/// `Send`, so the registry cannot cross thread boundaries.
pub struct Registry {
    /// Instance ID carried by every minted handle.
    id: RegistryId,
    /// Current release cycle. Bumped by each non-empty release.
    generation: Generation,
    /// Insertion order == allocation order.
    entries: Vec<Entry>,
    config: RegistryConfig,
}

impl Registry {
    /// Create an empty registry with the default configuration.
    pub fn new() -> Self {
        Self {
            id: RegistryId::next(),
            generation: Generation::INITIAL,
            entries: Vec::new(),
            config: RegistryConfig::default(),
        }
    }

    /// Create an empty registry with the given configuration.
    ///
    /// Returns `Err(RegistryError::InvalidConfig)` if the config is
    /// rejected by [`RegistryConfig::validate`].
    pub fn with_config(config: RegistryConfig) -> Result<Self, RegistryError> {
        config.validate()?;
        Ok(Self {
            id: RegistryId::next(),
            generation: Generation::INITIAL,
            entries: Vec::new(),
            config,
        })
    }

    /// Register a single heap-allocated value.
    ///
    /// The value is moved to the heap, recorded with a destruction action
    /// bound to `T`, and a handle for it is returned. The allocation stays
    /// live until [`Registry::release_all`] or registry drop.
    ///
    /// Fails with [`RegistryError::CapacityExceeded`] at the configured
    /// entry limit; on any error no entry is added.
    pub fn alloc_value<T: 'static>(&mut self, value: T) -> Result<ValueHandle<T>, RegistryError> {
        self.check_capacity()?;
        let slot = self.entries.len();
        self.entries.push(Entry::from_value(value));
        Ok(ValueHandle::new(self.id, self.generation, slot))
    }

    /// Register a value produced by a fallible constructor.
    ///
    /// Runs `build` and registers its output. If the constructor signals an
    /// error, it is surfaced as [`RegistryError::ConstructorFailed`] and the
    /// registry is unchanged — no entry is added and nothing partially
    /// constructed outlives the call.
    pub fn alloc_value_with<T, E, F>(&mut self, build: F) -> Result<ValueHandle<T>, RegistryError>
    where
        T: 'static,
        E: fmt::Display,
        F: FnOnce() -> Result<T, E>,
    {
        self.check_capacity()?;
        let value = build().map_err(|e| RegistryError::ConstructorFailed {
            reason: e.to_string(),
        })?;
        let slot = self.entries.len();
        self.entries.push(Entry::from_value(value));
        Ok(ValueHandle::new(self.id, self.generation, slot))
    }

    /// Register a contiguous array block of `len` default-initialised
    /// elements.
    ///
    /// Elements are addressable `0..len-1` through [`Registry::array`] and
    /// [`Registry::array_mut`]. For every [`Element`] type default
    /// initialisation is zero initialisation.
    ///
    /// Fails with [`RegistryError::EmptyArray`] if `len == 0`, with
    /// [`RegistryError::AllocationFailed`] if the block's memory cannot be
    /// reserved, and with [`RegistryError::CapacityExceeded`] at the
    /// configured entry limit. On any error no entry is added.
    pub fn alloc_array<T: Element>(
        &mut self,
        len: usize,
    ) -> Result<ArrayHandle<T>, RegistryError> {
        if len == 0 {
            return Err(RegistryError::EmptyArray);
        }
        self.check_capacity()?;

        let mut block: Vec<T> = Vec::new();
        block
            .try_reserve_exact(len)
            .map_err(|_| RegistryError::AllocationFailed {
                requested_bytes: len * std::mem::size_of::<T>(),
            })?;
        block.resize(len, T::default());

        let slot = self.entries.len();
        self.entries.push(Entry::from_array(block));
        Ok(ArrayHandle::new(self.id, self.generation, slot, len))
    }

    /// Read a registered value.
    pub fn get<T: 'static>(&self, handle: ValueHandle<T>) -> Result<&T, RegistryError> {
        let entry = self.entry_for(handle.registry, handle.generation, handle.slot)?;
        Ok(entry
            .value_ref::<T>()
            .expect("a live value handle resolves to the entry it was minted for"))
    }

    /// Mutably access a registered value.
    pub fn get_mut<T: 'static>(&mut self, handle: ValueHandle<T>) -> Result<&mut T, RegistryError> {
        let entry = self.entry_for_mut(handle.registry, handle.generation, handle.slot)?;
        Ok(entry
            .value_mut::<T>()
            .expect("a live value handle resolves to the entry it was minted for"))
    }

    /// Read a registered array block as a slice of exactly `handle.len()`
    /// elements.
    pub fn array<T: Element>(&self, handle: ArrayHandle<T>) -> Result<&[T], RegistryError> {
        let entry = self.entry_for(handle.registry, handle.generation, handle.slot)?;
        Ok(entry
            .array_ref::<T>()
            .expect("a live array handle resolves to the entry it was minted for"))
    }

    /// Mutably access a registered array block.
    ///
    /// The slice has exactly `handle.len()` elements; the block cannot be
    /// resized through it.
    pub fn array_mut<T: Element>(
        &mut self,
        handle: ArrayHandle<T>,
    ) -> Result<&mut [T], RegistryError> {
        let entry = self.entry_for_mut(handle.registry, handle.generation, handle.slot)?;
        Ok(entry
            .array_mut::<T>()
            .expect("a live array handle resolves to the entry it was minted for"))
    }

    /// Destroy every held entry and empty the registry.
    ///
    /// Entries are destroyed in reverse-of-insertion (LIFO) order, each
    /// destruction action running exactly once. All handles from the
    /// finished cycle go stale; the registry is immediately ready for a new
    /// setup/run/teardown cycle.
    ///
    /// Calling this on an empty registry is a no-op, not an error.
    pub fn release_all(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        // LIFO: a Vec drops front-to-back, so pop explicitly.
        while let Some(entry) = self.entries.pop() {
            drop(entry);
        }
        self.generation = self.generation.next();
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The current release cycle.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// This registry's instance ID.
    pub fn id(&self) -> RegistryId {
        self.id
    }

    /// Get a reference to the registry config.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Census of live entries by concrete type name, in first-seen order.
    ///
    /// A diagnostic aid: iteration order is deterministic (insertion
    /// order), so the census is stable across runs of the same allocation
    /// sequence.
    pub fn live_types(&self) -> IndexMap<&'static str, usize> {
        let mut census = IndexMap::new();
        for entry in &self.entries {
            *census.entry(entry.type_name()).or_insert(0) += 1;
        }
        census
    }

    fn check_capacity(&self) -> Result<(), RegistryError> {
        if self.entries.len() >= self.config.max_entries {
            return Err(RegistryError::CapacityExceeded {
                entries: self.entries.len(),
                max_entries: self.config.max_entries,
            });
        }
        Ok(())
    }

    fn entry_for(
        &self,
        registry: RegistryId,
        generation: Generation,
        slot: usize,
    ) -> Result<&Entry, RegistryError> {
        self.check_handle(registry, generation)?;
        Ok(self
            .entries
            .get(slot)
            .expect("slot is in range while its generation is current"))
    }

    fn entry_for_mut(
        &mut self,
        registry: RegistryId,
        generation: Generation,
        slot: usize,
    ) -> Result<&mut Entry, RegistryError> {
        self.check_handle(registry, generation)?;
        Ok(self
            .entries
            .get_mut(slot)
            .expect("slot is in range while its generation is current"))
    }

    fn check_handle(
        &self,
        registry: RegistryId,
        generation: Generation,
    ) -> Result<(), RegistryError> {
        if registry != self.id {
            return Err(RegistryError::ForeignHandle {
                handle_registry: registry,
                registry: self.id,
            });
        }
        if generation != self.generation {
            return Err(RegistryError::StaleHandle {
                handle_generation: generation,
                current: self.generation,
            });
        }
        Ok(())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Registry {
    /// Implicit release: destroys remaining entries in the same LIFO order
    /// as [`Registry::release_all`].
    fn drop(&mut self) {
        self.release_all();
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("id", &self.id)
            .field("generation", &self.generation)
            .field("entries", &self.entries.len())
            .finish()
    }
}
