use std::hint::black_box;
use std::time::{Duration, Instant};

use algoprep::{two_sum, two_sum_brute_force, two_sum_sorted, IndexPair};
use color_eyre::eyre::{bail, Result};

const SIZE: usize = 10_000;
const ITERATIONS: usize = 8;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cases: [(&[i32], i32, IndexPair); 5] = [
        (&[2, 7, 11, 15], 9, IndexPair::new(0, 1)),
        (&[3, 2, 4], 6, IndexPair::new(1, 2)),
        (&[3, 3], 6, IndexPair::new(0, 1)),
        (&[-1, -2, -3, -4, -5], -8, IndexPair::new(2, 4)),
        (&[0, 4, 3, 0], 0, IndexPair::new(0, 3)),
    ];

    println!("Two sum test cases:");

    let mut failures = 0;
    for (i, &(nums, target, expected)) in cases.iter().enumerate() {
        println!("  case {}: nums = {:?}, target = {}", i + 1, nums, target);

        let results = [
            ("hash map", two_sum(nums, target)),
            ("brute force", two_sum_brute_force(nums, target)),
            ("sorted two-pointer", two_sum_sorted(nums, target)),
        ];

        for (name, result) in results {
            if result == Ok(expected) {
                println!("    {name:<18} ok ({}, {})", expected.first, expected.second);
            } else {
                failures += 1;
                println!("    {name:<18} FAILED ({result:?}, expected {expected:?})");
            }
        }
    }

    let large: Vec<i32> = (0..SIZE as i32).collect();
    let target = 2 * SIZE as i32 - 3;

    let hash_elapsed = measure(|| {
        black_box(two_sum(black_box(&large), target)).ok();
    });
    let brute_elapsed = measure(|| {
        black_box(two_sum_brute_force(black_box(&large), target)).ok();
    });

    println!();
    println!("Performance comparison ({SIZE} elements, {ITERATIONS} runs each):");
    println!(
        "  hash map:    {:.3}ms per run",
        hash_elapsed.as_secs_f64() * 1000.0 / ITERATIONS as f64
    );
    println!(
        "  brute force: {:.3}ms per run",
        brute_elapsed.as_secs_f64() * 1000.0 / ITERATIONS as f64
    );
    println!(
        "  speedup:     {:.2}x",
        brute_elapsed.as_secs_f64() / hash_elapsed.as_secs_f64()
    );

    if failures > 0 {
        bail!("{failures} strategy check(s) failed");
    }

    Ok(())
}

fn measure<F: FnMut()>(mut f: F) -> Duration {
    let start = Instant::now();
    for _ in 0..ITERATIONS {
        f();
    }
    start.elapsed()
}
