/// Simple custom benchmarking without criterion
use std::time::Instant;

use bevy::prelude::*;
use flowfield2d::solver::step;
use flowfield2d::{FieldParams, FieldPreset};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn time_it<F: FnMut()>(name: &str, iterations: usize, mut f: F) {
    // Warmup
    for _ in 0..5 {
        f();
    }

    let start = Instant::now();
    for _ in 0..iterations {
        f();
    }
    let elapsed = start.elapsed();

    let avg_ms = elapsed.as_secs_f64() * 1000.0 / iterations as f64;
    println!("{}: {:.3}ms avg ({} iterations)", name, avg_ms, iterations);
}

fn main() {
    println!("\n=== flowfield2d Benchmarks ===\n");

    let bounds = Vec2::new(1280.0, 720.0);
    let params = FieldParams::new(0.5, 0.8);
    let mut rng = StdRng::seed_from_u64(42);

    println!("--- Step ---");
    for &count in &[50, 150, 1000] {
        let preset = FieldPreset::demo().with_count(count);
        let mut particles = preset.seed(bounds, &params, &mut rng);
        let obstacles = preset.layout_obstacles(bounds);

        time_it(&format!("step (n={})", count), 200, || {
            step(&mut particles, &obstacles, &params, bounds, &mut rng);
        });
    }

    println!("\n--- Link scan (O(n^2) pair pass) ---");
    for &count in &[50, 150, 1000] {
        let preset = FieldPreset::demo().with_count(count);
        let particles = preset.seed(bounds, &params, &mut rng);
        let link_distance = preset.link_distance;

        time_it(&format!("link scan (n={})", count), 200, || {
            let mut links = 0usize;
            for i in 0..particles.len() {
                for j in (i + 1)..particles.len() {
                    if particles[i].position.distance(particles[j].position) < link_distance {
                        links += 1;
                    }
                }
            }
            std::hint::black_box(links);
        });
    }
}
