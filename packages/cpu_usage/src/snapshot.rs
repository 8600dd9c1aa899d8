use std::fmt;
use std::time::Duration;

/// A single immutable read of the cumulative CPU time counters of the current process.
///
/// A snapshot is produced by [`CpuUsage::snapshot()`][crate::CpuUsage::snapshot] and
/// never changes afterwards. The counters cover the whole lifetime of the process up
/// to the moment of the query, across all of its threads.
///
/// # Example
///
/// ```
/// use cpu_usage::CpuUsage;
///
/// # fn main() -> Result<(), cpu_usage::Error> {
/// let usage = CpuUsage::new();
/// let snapshot = usage.snapshot()?;
///
/// assert_eq!(
///     snapshot.total_time(),
///     snapshot.user_time() + snapshot.system_time()
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct UsageSnapshot {
    user_time: Duration,
    system_time: Duration,
}

impl UsageSnapshot {
    pub(crate) fn new(user_time: Duration, system_time: Duration) -> Self {
        Self {
            user_time,
            system_time,
        }
    }

    /// Time the process spent executing its own instructions in user mode.
    #[must_use]
    pub fn user_time(self) -> Duration {
        self.user_time
    }

    /// Time the kernel spent executing on the process's behalf, such as when
    /// handling system calls.
    #[must_use]
    pub fn system_time(self) -> Duration {
        self.system_time
    }

    /// The sum of user and system time.
    ///
    /// This is computed from the two parts at read time, so it is always exactly
    /// their sum.
    #[must_use]
    pub fn total_time(self) -> Duration {
        self.user_time.checked_add(self.system_time).expect(
            "CPU time accumulation overflows Duration - this indicates an unrealistic scenario",
        )
    }

    /// [`user_time()`][Self::user_time] as fractional seconds.
    #[must_use]
    pub fn user_seconds(self) -> f64 {
        self.user_time.as_secs_f64()
    }

    /// [`system_time()`][Self::system_time] as fractional seconds.
    #[must_use]
    pub fn system_seconds(self) -> f64 {
        self.system_time.as_secs_f64()
    }

    /// [`total_time()`][Self::total_time] as fractional seconds.
    #[must_use]
    pub fn total_seconds(self) -> f64 {
        self.total_time().as_secs_f64()
    }
}

impl fmt::Display for UsageSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "user {:?} + system {:?} = total {:?}",
            self.user_time,
            self.system_time,
            self.total_time()
        )
    }
}
