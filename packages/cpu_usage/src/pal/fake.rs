//! Fake platform implementation for testing.

use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::pal::abstractions::{Platform, ProcessTimes};

/// Internal state for the fake platform that can be shared between clones.
#[derive(Debug)]
struct FakePlatformState {
    times: ProcessTimes,
    available: bool,
}

/// Fake implementation of the platform abstraction for testing.
///
/// This implementation allows tests to control the reported CPU time values
/// instead of relying on actual system calls, as well as to simulate a failing
/// accounting facility. Multiple clones of the same `FakePlatform` share the
/// same underlying state, allowing tests to modify values after platform
/// creation to simulate time progression.
#[derive(Clone, Debug)]
pub(crate) struct FakePlatform {
    state: Arc<Mutex<FakePlatformState>>,
}

impl FakePlatform {
    /// Creates a new fake platform with zero time values.
    pub(crate) fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(FakePlatformState {
                times: ProcessTimes {
                    user: Duration::ZERO,
                    system: Duration::ZERO,
                },
                available: true,
            })),
        }
    }

    /// Sets the user CPU time value.
    ///
    /// This affects all clones of this platform, allowing tests to simulate
    /// time progression between queries.
    pub(crate) fn set_user_time(&self, time: Duration) {
        self.state
            .lock()
            .expect("FakePlatform state lock should not be poisoned")
            .times
            .user = time;
    }

    /// Sets the system CPU time value.
    ///
    /// This affects all clones of this platform, allowing tests to simulate
    /// time progression between queries.
    pub(crate) fn set_system_time(&self, time: Duration) {
        self.state
            .lock()
            .expect("FakePlatform state lock should not be poisoned")
            .times
            .system = time;
    }

    /// Makes all further queries fail, simulating an accounting facility that
    /// the operating system cannot provide.
    pub(crate) fn set_unavailable(&self) {
        self.state
            .lock()
            .expect("FakePlatform state lock should not be poisoned")
            .available = false;
    }
}

impl Platform for FakePlatform {
    fn process_times(&self) -> io::Result<ProcessTimes> {
        let state = self
            .state
            .lock()
            .expect("FakePlatform state lock should not be poisoned");

        if !state.available {
            return Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "simulated resource usage query failure",
            ));
        }

        Ok(state.times)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn initializes_with_zero_times() {
        let platform = FakePlatform::new();

        let times = platform.process_times().expect("fake platform starts available");
        assert_eq!(times.user, Duration::ZERO);
        assert_eq!(times.system, Duration::ZERO);
    }

    #[test]
    fn sets_user_time() {
        let platform = FakePlatform::new();
        platform.set_user_time(Duration::from_millis(150));

        let times = platform.process_times().expect("fake platform starts available");
        assert_eq!(times.user, Duration::from_millis(150));
    }

    #[test]
    fn sets_system_time() {
        let platform = FakePlatform::new();
        platform.set_system_time(Duration::from_millis(250));

        let times = platform.process_times().expect("fake platform starts available");
        assert_eq!(times.system, Duration::from_millis(250));
    }

    #[test]
    fn shared_state_between_clones() {
        let platform1 = FakePlatform::new();
        let platform2 = platform1.clone();

        // Setting time on one clone affects the other.
        platform1.set_user_time(Duration::from_millis(100));
        let times = platform2.process_times().expect("fake platform starts available");
        assert_eq!(times.user, Duration::from_millis(100));

        platform2.set_system_time(Duration::from_millis(200));
        let times = platform1.process_times().expect("fake platform starts available");
        assert_eq!(times.system, Duration::from_millis(200));
    }

    #[test]
    fn unavailable_platform_fails_queries() {
        let platform = FakePlatform::new();
        platform.set_unavailable();

        let result = platform.process_times();
        assert!(result.is_err());
    }

    #[test]
    fn unavailability_is_shared_between_clones() {
        let platform1 = FakePlatform::new();
        let platform2 = platform1.clone();

        platform1.set_unavailable();

        assert!(platform2.process_times().is_err());
    }
}
