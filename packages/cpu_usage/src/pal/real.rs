//! Real platform implementation using system calls.

use std::io;
use std::time::Duration;

use crate::pal::abstractions::{Platform, ProcessTimes};

/// Real implementation of the platform abstraction, backed by the operating
/// system's process accounting facility.
///
/// You would only use a different implementation in unit tests that need to
/// control the reported values. Even then, whenever possible, tests should use
/// the real platform for maximum realism.
#[derive(Clone, Debug, Default)]
pub(crate) struct RealPlatform;

#[cfg(unix)]
impl Platform for RealPlatform {
    fn process_times(&self) -> io::Result<ProcessTimes> {
        use std::mem;

        // SAFETY: All-zero is a valid initial value for this type.
        let mut usage: libc::rusage = unsafe { mem::zeroed() };

        // SAFETY: We are passing a valid pointer to a live rusage value,
        // no other safety requirements.
        let result = unsafe { libc::getrusage(libc::RUSAGE_SELF, &raw mut usage) };

        if result != 0 {
            return Err(io::Error::last_os_error());
        }

        Ok(ProcessTimes {
            user: timeval_to_duration(usage.ru_utime),
            system: timeval_to_duration(usage.ru_stime),
        })
    }
}

#[cfg(windows)]
impl Platform for RealPlatform {
    fn process_times(&self) -> io::Result<ProcessTimes> {
        use windows::Win32::Foundation::FILETIME;
        use windows::Win32::System::Threading::{GetCurrentProcess, GetProcessTimes};

        let mut creation_time = FILETIME::default();
        let mut exit_time = FILETIME::default();
        let mut kernel_time = FILETIME::default();
        let mut user_time = FILETIME::default();

        // SAFETY: We are passing the current process pseudo handle and valid
        // pointers to live FILETIME values, no other safety requirements.
        unsafe {
            GetProcessTimes(
                GetCurrentProcess(),
                &raw mut creation_time,
                &raw mut exit_time,
                &raw mut kernel_time,
                &raw mut user_time,
            )
        }
        .map_err(io::Error::other)?;

        Ok(ProcessTimes {
            user: filetime_to_duration(user_time),
            system: filetime_to_duration(kernel_time),
        })
    }
}

#[cfg(unix)]
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::arithmetic_side_effects,
    reason = "never going to happen with CPU times within real-universe ranges"
)]
fn timeval_to_duration(value: libc::timeval) -> Duration {
    // The kernel reports seconds plus microseconds, with the microseconds
    // always below one second.
    Duration::new(value.tv_sec as u64, value.tv_usec as u32 * 1000)
}

#[cfg(windows)]
fn filetime_to_duration(value: windows::Win32::Foundation::FILETIME) -> Duration {
    // FILETIME counts 100-nanosecond intervals.
    let ticks = (u64::from(value.dwHighDateTime) << 32) | u64::from(value.dwLowDateTime);

    Duration::from_nanos(ticks.saturating_mul(100))
}
