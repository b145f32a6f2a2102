// scripts/benchmark.rs
use gbm_paths::math_utils::Timer;
use gbm_paths::mc::engine::{generate_paths, SimulationParameters};
use std::env;
use std::fs::{self, File};
use std::io::Write;

#[derive(Debug)]
struct SystemInfo {
    os: String,
    cpu_cores: usize,
    rayon_threads: usize,
    rustc_flags: String,
}

impl SystemInfo {
    fn gather() -> Self {
        Self {
            os: env::consts::OS.to_string(),
            cpu_cores: num_cpus::get(),
            rayon_threads: rayon::current_num_threads(),
            rustc_flags: env::var("RUSTFLAGS").unwrap_or_else(|_| "default".to_string()),
        }
    }
}

struct BenchResult {
    paths: usize,
    steps: usize,
    elapsed_ms: f64,
    draws_per_sec: f64,
}

fn bench_case(paths: usize, steps: usize) -> BenchResult {
    let params = SimulationParameters {
        s0: 100.0,
        mu: 0.05,
        sigma: 0.2,
        steps,
        paths,
        base_seed: 42,
    };

    // Warm-up run so thread-pool startup is not billed to the measurement
    let _ = generate_paths(&params).expect("Valid parameters");

    let mut timer = Timer::new();
    timer.start();
    let batch = generate_paths(&params).expect("Valid parameters");
    let elapsed_ms = timer.elapsed_ms();

    assert_eq!(batch.path_count(), paths);

    let draws = (paths * steps) as f64;
    BenchResult {
        paths,
        steps,
        elapsed_ms,
        draws_per_sec: draws / (elapsed_ms / 1000.0),
    }
}

fn main() {
    let info = SystemInfo::gather();
    println!("gbm-paths benchmark");
    println!("===================");
    println!(
        "os: {} | cores: {} | rayon threads: {} | RUSTFLAGS: {}",
        info.os, info.cpu_cores, info.rayon_threads, info.rustc_flags
    );
    println!(
        "started: {}\n",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );

    // Largest case holds ~200 MB of path data; batches are kept in memory
    let grid = [
        (1_000, 252),
        (10_000, 252),
        (100_000, 252),
        (1_000_000, 1),
        (25_000, 1_000),
    ];

    println!(
        "{:>10} {:>6} {:>12} {:>16}",
        "paths", "steps", "elapsed_ms", "draws_per_sec"
    );

    let mut results = Vec::new();
    for &(paths, steps) in &grid {
        let r = bench_case(paths, steps);
        println!(
            "{:>10} {:>6} {:>12.2} {:>16.0}",
            r.paths, r.steps, r.elapsed_ms, r.draws_per_sec
        );
        results.push(r);
    }

    // Persist the run next to previous ones for comparison
    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    fs::create_dir_all("bench").expect("Could not create bench directory");
    let filename = format!("bench/gbm_paths_{}.csv", timestamp);
    let mut file = File::create(&filename).expect("Could not create file");
    writeln!(file, "paths,steps,elapsed_ms,draws_per_sec").expect("Could not write header");
    for r in &results {
        writeln!(
            file,
            "{},{},{:.3},{:.0}",
            r.paths, r.steps, r.elapsed_ms, r.draws_per_sec
        )
        .expect("Could not write row");
    }

    println!("\nResults written to {}", filename);
}
