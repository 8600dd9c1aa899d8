use crate::pal::{Platform, PlatformFacade};
use crate::{Error, Result, UsageSnapshot};

/// Queries the operating system for the CPU time the current process has consumed.
///
/// Each call to [`snapshot()`][Self::snapshot] performs one resource usage query and
/// returns an immutable [`UsageSnapshot`]. The query is a pure read of kernel-maintained
/// counters: it holds no locks, retains no state and never blocks on I/O, so a single
/// `CpuUsage` instance may be shared and queried concurrently from any number of threads.
///
/// The counters only ever grow, so the total time of a later snapshot is never smaller
/// than that of an earlier one.
///
/// # Example
///
/// ```
/// use cpu_usage::CpuUsage;
///
/// # fn main() -> Result<(), cpu_usage::Error> {
/// let usage = CpuUsage::new();
///
/// let snapshot = usage.snapshot()?;
/// println!("consumed so far: {snapshot}");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct CpuUsage {
    platform: PlatformFacade,
}

impl CpuUsage {
    /// Creates a provider backed by the operating system's accounting facility.
    #[must_use]
    pub fn new() -> Self {
        Self {
            platform: PlatformFacade::real(),
        }
    }

    /// Creates a provider backed by a specific platform.
    ///
    /// This method is primarily used for testing purposes to inject a fake platform
    /// that does not rely on actual system calls.
    #[cfg(test)]
    pub(crate) fn with_platform(platform: PlatformFacade) -> Self {
        Self { platform }
    }

    /// Takes a snapshot of the CPU time the current process has accumulated so far.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ResourceUnavailable`] if the operating system cannot report
    /// resource usage for the process. No partial or zeroed snapshot is ever returned.
    pub fn snapshot(&self) -> Result<UsageSnapshot> {
        let times = self
            .platform
            .process_times()
            .map_err(|source| Error::ResourceUnavailable { source })?;

        Ok(UsageSnapshot::new(times.user, times.system))
    }
}

impl Default for CpuUsage {
    fn default() -> Self {
        Self::new()
    }
}
