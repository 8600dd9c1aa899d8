//! Platform abstraction layer for process CPU time accounting.
//!
//! This module provides a platform abstraction that allows switching between the
//! real operating system accounting facility and fake implementations for testing
//! purposes.

mod abstractions;
mod facade;
#[cfg(test)]
mod fake;
mod real;

pub(crate) use abstractions::Platform;
pub(crate) use facade::PlatformFacade;
#[cfg(test)]
pub(crate) use fake::FakePlatform;
