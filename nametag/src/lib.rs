//! Thread naming for profilers and tracing tools.
//!
//! Nametag attaches a human-readable label ("gpu-copy-worker-3") to the calling
//! operating-system thread and reads labels back later, uniformly across
//! platforms. The label is recorded by the operating system, so debuggers,
//! profilers and `ps`-like tools see it too.
//!
//! The platform backend is selected once, at build time, from the compilation
//! target: desktop and mobile targets use the native thread description calls
//! (`nametag-std`), everything else degrades to a documented no-op
//! (`nametag-noop`) — naming is diagnostic and must never affect program
//! correctness. There is no runtime configuration surface.
//!
//! # Example
//!
//! ```rust
//! nametag::set_current_thread_name("gpu-copy-3").unwrap();
//!
//! let name = nametag::current_thread_name().unwrap();
//! assert_eq!(name.as_str(), "gpu-copy-3");
//! ```

#![forbid(unsafe_code)]
#![no_std]

use core::sync::atomic::{AtomicBool, Ordering};

pub use nametag_api::thread::{THREAD_NAME_CAPACITY, ThreadAbstraction, ThreadName};
pub use nametag_api::{Error, Result};

/// The platform backends and the abstraction they implement.
pub mod backend {
    #[doc(inline)]
    pub use nametag_api as api;

    #[doc(inline)]
    #[cfg(not(any(
        target_os = "linux",
        target_os = "android",
        target_os = "macos",
        target_os = "ios",
        windows
    )))]
    pub use nametag_noop as noop;

    #[doc(inline)]
    #[cfg(any(
        target_os = "linux",
        target_os = "android",
        target_os = "macos",
        target_os = "ios",
        windows
    ))]
    pub use nametag_std as std;
}

/// The platform backend selected for this compilation target.
#[cfg(any(
    target_os = "linux",
    target_os = "android",
    target_os = "macos",
    target_os = "ios",
    windows
))]
pub use nametag_std::thread::Thread as Platform;

/// The platform backend selected for this compilation target.
#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_os = "macos",
    target_os = "ios",
    windows
)))]
pub use nametag_noop::thread::Thread as Platform;

/// Handle type of the selected platform backend.
pub type ThreadHandle = <Platform as ThreadAbstraction>::Handle;

/// Set once the first naming failure has been logged.
static WARNED: AtomicBool = AtomicBool::new(false);

/// Attaches `name` to the calling thread as its diagnostic label.
///
/// Overwrites any previous label. Names longer than the platform limit are
/// truncated at a character boundary, never rejected.
///
/// # Errors
///
/// See [`Error`]. Errors here are worth returning but rarely worth acting on:
/// the label is diagnostic, and callers are expected to proceed without it.
/// The first failure in a process is additionally logged at warn level.
pub fn set_current_thread_name(name: &str) -> Result<()> {
    let result = Platform::set_current_thread_name(name);
    if let Err(error) = result {
        if !WARNED.swap(true, Ordering::Relaxed) {
            log::warn!("failed to name thread {name:?}: {error}");
        }
    }
    result
}

/// Returns the label currently attached to the thread behind `handle`.
///
/// # Errors
///
/// [`Error::Unsupported`] if the platform can only read the calling thread's
/// name and `handle` refers to another thread; [`Error::NotFound`] if the
/// thread no longer exists.
pub fn thread_name(handle: &ThreadHandle) -> Result<ThreadName> {
    Platform::thread_name(handle)
}

/// Returns the label currently attached to the calling thread.
pub fn current_thread_name() -> Result<ThreadName> {
    Platform::current_thread_name()
}

/// Returns a handle for the calling thread, usable with [`thread_name`].
pub fn current_thread() -> ThreadHandle {
    Platform::current_thread()
}

/// Returns the operating system's numeric identifier for the current thread.
///
/// This is the id OS-level tools report for the thread, so trace events can
/// carry it alongside the names set through this crate.
pub fn current_thread_id() -> u64 {
    Platform::current_thread_id()
}
