//! Basic example demonstrating the `cpu_usage` package.
//!
//! Takes a CPU usage snapshot, burns some processor time on purpose, then takes
//! a second snapshot to show the counters growing.
//!
//! Run with: `cargo run --example cpu_usage_basic`.
#![expect(
    clippy::arithmetic_side_effects,
    clippy::unchecked_duration_subtraction,
    reason = "this is example code that does not need production-level safety"
)]

use std::hint::black_box;

use cpu_usage::CpuUsage;

fn main() -> Result<(), cpu_usage::Error> {
    let usage = CpuUsage::new();

    let before = usage.snapshot()?;
    println!("at startup: {before}");

    // Burn some CPU time so the second snapshot has something to show.
    let mut accumulator = 0_u64;
    for i in 0..5_000_000_u64 {
        accumulator = accumulator.wrapping_mul(31).wrapping_add(i);
    }
    black_box(accumulator);

    let after = usage.snapshot()?;
    println!("after work: {after}");

    let consumed = after.total_time() - before.total_time();
    println!("the work consumed {consumed:?} of CPU time");

    Ok(())
}
