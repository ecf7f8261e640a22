//! Benchmark workloads and utilities for the Creel allocation registry.
//!
//! Provides a deterministic mixed workload builder used by both the
//! criterion benches and the runnable example:
//!
//! - [`fill_mixed`]: interleaved value and array allocations
//! - [`Reading`]: a small composite standing in for caller-defined types

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use creel_registry::Registry;

/// A small composite type standing in for caller-defined setup state.
pub struct Reading {
    /// Sequence number of the reading.
    pub id: u64,
    /// Scale factor applied during the run phase.
    pub scale: f64,
}

/// Fill `registry` with a deterministic mixed workload.
///
/// Registers `values` [`Reading`] values and `arrays` zeroed `f32` blocks
/// of `array_len` elements each, interleaved so release order exercises
/// both entry kinds. Returns the number of entries registered.
///
/// # Panics
///
/// Panics if the registry's capacity is exceeded — benchmark profiles are
/// expected to fit their registry.
pub fn fill_mixed(
    registry: &mut Registry,
    values: usize,
    arrays: usize,
    array_len: usize,
) -> usize {
    let mut remaining_values = values;
    let mut remaining_arrays = arrays;
    let mut id = 0u64;

    while remaining_values > 0 || remaining_arrays > 0 {
        if remaining_values >= remaining_arrays && remaining_values > 0 {
            registry
                .alloc_value(Reading {
                    id,
                    scale: id as f64 * 0.1,
                })
                .unwrap();
            remaining_values -= 1;
        } else {
            registry.alloc_array::<f32>(array_len).unwrap();
            remaining_arrays -= 1;
        }
        id += 1;
    }
    values + arrays
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_mixed_registers_expected_count() {
        let mut registry = Registry::new();
        let total = fill_mixed(&mut registry, 10, 5, 16);
        assert_eq!(total, 15);
        assert_eq!(registry.len(), 15);
    }

    #[test]
    fn fill_mixed_census_covers_both_kinds() {
        let mut registry = Registry::new();
        fill_mixed(&mut registry, 4, 4, 8);

        let census = registry.live_types();
        assert_eq!(census.len(), 2);
        assert_eq!(census.values().sum::<usize>(), 8);
    }

    #[test]
    fn fill_mixed_is_repeatable_across_cycles() {
        let mut registry = Registry::new();
        for _ in 0..3 {
            fill_mixed(&mut registry, 6, 2, 4);
            assert_eq!(registry.len(), 8);
            registry.release_all();
            assert!(registry.is_empty());
        }
    }
}
