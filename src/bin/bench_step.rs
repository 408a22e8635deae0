#[cfg(feature = "mimalloc-global")]
#[global_allocator]
static GLOBAL_ALLOCATOR: mimalloc::MiMalloc = mimalloc::MiMalloc;

use rand::RngCore;
use rand::SeedableRng;
use sparse_life::{calculate_next, Coord, Generation};
use std::time::Instant;

const LIVE_DENSITY: f64 = 0.35;

fn random_soup(side: i64, density: f64, seed: u64) -> Generation {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let threshold = (u64::MAX as f64 * density) as u64;
    let mut cells = Vec::new();
    for y in 0..side {
        for x in 0..side {
            if rng.next_u64() <= threshold {
                cells.push(Coord::new(x, y));
            }
        }
    }
    Generation::from_cells(cells)
}

fn bench_step(side: i64, iterations: u64) -> (f64, usize) {
    let mut generation = random_soup(side, LIVE_DENSITY, 0x5EED_1234_ABCD_EF01);

    let start = Instant::now();
    for _ in 0..iterations {
        generation = calculate_next(&generation);
    }
    let duration = start.elapsed();

    (duration.as_secs_f64() * 1000.0, generation.len())
}

fn main() {
    let scales: &[(i64, u64)] = &[(16, 200), (32, 100), (64, 50), (128, 20), (256, 10)];

    println!(
        "{:<10} {:>8} {:>12} {:>10} {:>10}",
        "Soup", "Iters", "Total(ms)", "Avg(ms)", "Pop"
    );
    println!("{}", "-".repeat(54));

    for &(side, iters) in scales {
        let (total_ms, pop) = bench_step(side, iters);
        let avg_ms = total_ms / iters as f64;
        println!(
            "{:<10} {:>8} {:>12.1} {:>10.4} {:>10}",
            format!("{}x{}", side, side),
            iters,
            total_ms,
            avg_ms,
            pop
        );
    }
}
