// demos/error_handling_demo.rs
use gbm_paths::mc::engine::{generate_paths, SimulationParameters};

fn main() {
    println!("Error Handling Demo for gbm-paths");
    println!("=================================\n");

    // Test 1: Invalid initial price
    println!("1. Testing negative initial price...");

    let params = SimulationParameters {
        s0: -100.0, // Negative initial price
        ..Default::default()
    };

    match generate_paths(&params) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 2: Negative volatility
    println!("\n2. Testing negative volatility...");

    let params = SimulationParameters {
        sigma: -0.2,
        ..Default::default()
    };

    match generate_paths(&params) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 3: Seed overflow between paths
    println!("\n3. Testing base seed near u64::MAX...");

    let params = SimulationParameters {
        base_seed: u64::MAX - 10,
        paths: 100,
        ..Default::default()
    };

    match generate_paths(&params) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 4: Drift so extreme the projection overflows
    println!("\n4. Testing extreme drift...");

    let params = SimulationParameters {
        mu: 1e8,
        steps: 100,
        paths: 4,
        ..Default::default()
    };

    match generate_paths(&params) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 5: Extreme but valid parameters still succeed
    println!("\n5. Testing extreme but valid parameters...");

    let params = SimulationParameters {
        s0: 1e-6,
        mu: -5.0,
        sigma: 3.0,
        steps: 10,
        paths: 100,
        base_seed: 1,
    };

    match generate_paths(&params) {
        Ok(batch) => println!(
            "   ✓ Generated {} paths of {} steps",
            batch.path_count(),
            batch.steps()
        ),
        Err(e) => println!("   Unexpected error: {}", e),
    }
}
