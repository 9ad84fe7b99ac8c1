//! Thread naming stubs for platforms with no naming primitive.

use nametag_api::thread::ThreadName;
pub use nametag_api::thread::ThreadAbstraction;

use crate::Result;

/// Implements the [`ThreadAbstraction`] trait as a documented no-op.
///
/// This backend serves targets whose operating system offers no way to attach
/// a description to a thread. Every write succeeds silently, every read
/// returns the empty name, and thread ids come from a process-local counter
/// instead of the OS.
#[derive(Debug)]
pub struct Thread;

/// Stands in for a thread handle; carries no information.
#[derive(Debug, Clone, Copy)]
pub struct ThreadHandle(());

impl ThreadAbstraction for Thread {
    type Handle = ThreadHandle;

    const MAX_NAME_LEN: usize = 0;

    #[cfg(not(target_os = "none"))]
    fn current_thread_id() -> u64 {
        use std::cell::Cell;
        use std::sync::atomic::{AtomicU64, Ordering};

        /// Global counter for generating unique thread ids.
        static NEXT_THREAD_ID: AtomicU64 = AtomicU64::new(1);

        std::thread_local! {
            /// Thread-local storage for the current thread's id.
            static THREAD_ID: Cell<u64> = const { Cell::new(0) };
        }

        THREAD_ID.with(|id| {
            let current = id.get();
            if current == 0 {
                // `Relaxed` here is enough because we don't care about what values various threads
                // see, just that they're unique (assuming that creating 2^64 threads is impractical
                // so overflow can't happen).
                let new_id = NEXT_THREAD_ID.fetch_add(1, Ordering::Relaxed);
                id.set(new_id);
                new_id
            } else {
                current
            }
        })
    }

    #[cfg(target_os = "none")]
    fn current_thread_id() -> u64 {
        1
    }

    fn current_thread() -> ThreadHandle {
        ThreadHandle(())
    }

    fn set_current_thread_name(_name: &str) -> Result<()> {
        Ok(())
    }

    fn thread_name(_handle: &ThreadHandle) -> Result<ThreadName> {
        Ok(ThreadName::new())
    }
}

// Tests the `std` target only.
#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_succeed_and_reads_are_empty() {
        Thread::set_current_thread_name("anything").unwrap();
        assert_eq!(Thread::current_thread_name().unwrap().as_str(), "");
    }

    #[test]
    fn thread_id_consistency() {
        assert_eq!(Thread::current_thread_id(), Thread::current_thread_id());
    }

    #[test]
    fn thread_id_uniqueness() {
        let main_id = Thread::current_thread_id();
        let other_id = std::thread::spawn(Thread::current_thread_id)
            .join()
            .unwrap();

        assert_ne!(main_id, other_id);
    }
}
