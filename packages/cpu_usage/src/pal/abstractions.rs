//! Platform abstraction trait definitions.

use std::fmt::Debug;
use std::io;
use std::time::Duration;

/// The CPU time a process has accumulated, as reported by one query of the
/// operating system's accounting facility.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct ProcessTimes {
    /// Time spent executing in user mode.
    pub(crate) user: Duration,

    /// Time the kernel spent executing on the process's behalf.
    pub(crate) system: Duration,
}

/// Provides process CPU time accounting.
///
/// This trait abstracts the underlying platform-specific resource usage query,
/// allowing for both real implementations (using system calls) and fake
/// implementations (for testing).
pub(crate) trait Platform: Debug + Send + Sync + 'static {
    /// Queries the CPU time the current process has accumulated so far.
    ///
    /// Fails if the operating system cannot report resource usage for the process.
    fn process_times(&self) -> io::Result<ProcessTimes>;
}
