//! End-to-end setup/run/teardown example.
//!
//! Demonstrates: one long-lived registry reused across cycles → allocate
//! arrays and a composite during setup → use them during the run → release
//! everything at once.

use creel_registry::Registry;

struct Sensor {
    threshold: i32,
    gain: f64,
}

fn main() {
    println!("=== Creel Teardown Cycle Example ===\n");

    let mut registry = Registry::new();

    for cycle in 1..=3u32 {
        println!("Cycle {cycle}: setup");

        let samples = registry.alloc_array::<i32>(100).unwrap();
        let weights = registry.alloc_array::<f64>(200).unwrap();
        let sensor = registry
            .alloc_value(Sensor {
                threshold: 42,
                gain: 3.14,
            })
            .unwrap();

        for (name, count) in registry.live_types() {
            println!("  registered {count} x {name}");
        }

        // Run phase: fill the blocks and fold them through the sensor.
        {
            let block = registry.array_mut(samples).unwrap();
            for (i, v) in block.iter_mut().enumerate() {
                *v = i as i32;
            }
        }
        {
            let block = registry.array_mut(weights).unwrap();
            for (i, v) in block.iter_mut().enumerate() {
                *v = i as f64 * 0.1;
            }
        }

        let s = registry.get(sensor).unwrap();
        let above: usize = registry
            .array(samples)
            .unwrap()
            .iter()
            .filter(|&&v| v > s.threshold)
            .count();
        let weighted: f64 = registry
            .array(weights)
            .unwrap()
            .iter()
            .map(|w| w * s.gain)
            .sum();

        println!("  run: {above} samples above threshold, weighted sum {weighted:.2}");

        registry.release_all();
        println!(
            "  teardown: {} entries live, generation {}\n",
            registry.len(),
            registry.generation()
        );
    }

    println!("Done.");
}
