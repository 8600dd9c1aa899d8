#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! On-demand snapshots of the CPU time consumed by the current process.
//!
//! This package answers one question: how much processor time has the current process
//! accumulated so far, split into user-mode and kernel-mode time? Each query produces
//! an immutable [`UsageSnapshot`] with the user time, the system time and their sum.
//!
//! This is part of the [Folo project](https://github.com/folo-rs/folo) that provides mechanisms for
//! high-performance hardware-aware programming in Rust.
//!
//! # Example
//!
//! ```
//! use cpu_usage::CpuUsage;
//!
//! # fn main() -> Result<(), cpu_usage::Error> {
//! let usage = CpuUsage::new();
//!
//! let snapshot = usage.snapshot()?;
//!
//! println!("user:   {:?}", snapshot.user_time());
//! println!("system: {:?}", snapshot.system_time());
//! println!("total:  {:?}", snapshot.total_time());
//! # Ok(())
//! # }
//! ```
//!
//! # Measuring a piece of work
//!
//! CPU time only ever accumulates, so the difference between two snapshots tells you
//! how much processor time the process consumed in between:
//!
//! ```
//! use cpu_usage::CpuUsage;
//!
//! # fn main() -> Result<(), cpu_usage::Error> {
//! let usage = CpuUsage::new();
//!
//! let before = usage.snapshot()?;
//!
//! let mut sum: u64 = 0;
//! for i in 0..10_000_u64 {
//!     sum = sum.wrapping_add(i);
//! }
//! std::hint::black_box(sum);
//!
//! let after = usage.snapshot()?;
//! assert!(after.total_time() >= before.total_time());
//! # Ok(())
//! # }
//! ```
//!
//! # Threading
//!
//! The accounting is maintained by the operating system per process, covering all
//! threads. [`CpuUsage`] holds no mutable state, so it may be shared freely and
//! queried concurrently from any number of threads.

mod error;
mod pal;
mod snapshot;
mod usage;

pub use error::*;
pub use snapshot::*;
pub use usage::*;
