//! Abstractions for attaching diagnostic names to operating-system threads.
//!
//! The main purpose of this module is to provide the definition of [`ThreadAbstraction`], the trait that has to be
//! implemented to interact with the underlying operating system when naming threads. A thread name is a short
//! human-readable label ("gpu-copy-worker-3") that profilers and debuggers use to correlate captured events with
//! logical thread roles. The label is stored by the operating system, so it is visible to any OS-level tool that
//! queries thread names, not just to this crate.
//!
//! Names are diagnostic only: no operation here creates, joins, or schedules threads, and a failure to attach a
//! name must never affect program correctness.
//!
//! # Example
//!
//! Code naming its threads should rely on the [`ThreadAbstraction`] trait, and never use specific implementations.
//! The concrete implementation for the targeted environment is selected once, at build time.
//!
//! ```rust
//! use nametag_api::thread::ThreadAbstraction;
//! use nametag_std::thread::Thread;
//!
//! Thread::set_current_thread_name("gpu-copy-3").unwrap();
//!
//! let name = Thread::current_thread_name().unwrap();
//! assert_eq!(name.as_str(), "gpu-copy-3");
//! ```

use crate::Result;

/// Capacity in bytes of [`ThreadName`]; no platform read returns more.
///
/// Chosen to cover the largest fixed platform limit (Apple's 64-byte
/// `MAXTHREADNAMESIZE` buffer). Platforms without a fixed limit clamp reads
/// to this capacity.
pub const THREAD_NAME_CAPACITY: usize = 64;

/// A thread name, stored inline.
///
/// Thread naming sits on the hot path of profiler instrumentation, so names
/// never touch the heap; they are bounded text in a stack buffer.
pub type ThreadName = heapless::String<THREAD_NAME_CAPACITY>;

/// `ThreadAbstraction` is used to name threads and query thread identity in a platform-agnostic manner.
///
/// Every method issues at most one synchronous call into the operating system and touches only OS-managed
/// per-thread state, so implementations are safe to call concurrently from any number of threads without
/// locking.
pub trait ThreadAbstraction {
    /// Identifies a live operating-system thread for name queries.
    ///
    /// A handle is a plain identifier: it owns nothing, and it is only
    /// meaningful while the thread it refers to is alive.
    type Handle: core::fmt::Debug + Copy + Send + 'static;

    /// Longest name, in bytes, the platform records for a thread.
    ///
    /// Names passed to [`set_current_thread_name`](Self::set_current_thread_name) are truncated to this length
    /// (at a character boundary) before they reach the operating system — truncation, never rejection.
    /// The no-op backend reports `0`.
    const MAX_NAME_LEN: usize;

    /// Returns the operating system's numeric identifier for the current thread.
    ///
    /// This is the id OS-level tools report for the thread, so it can be
    /// included in spans and trace events to correlate them with the names set
    /// through this trait.
    fn current_thread_id() -> u64;

    /// Returns a handle for the calling thread.
    fn current_thread() -> Self::Handle;

    /// Attaches `name` to the calling thread as its diagnostic label.
    ///
    /// Overwrites any previous label; there is no history. Setting the same
    /// name twice is idempotent, though the OS call is still issued each time.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidName`](crate::Error::InvalidName) if `name` contains an interior NUL byte, which no
    /// platform's native text encoding can represent. Over-long names are not an error; see
    /// [`MAX_NAME_LEN`](Self::MAX_NAME_LEN).
    fn set_current_thread_name(name: &str) -> Result<()>;

    /// Returns the label currently attached to the thread behind `handle`.
    ///
    /// A thread that never had a name set reads back as whatever the platform
    /// seeded: the empty string on most platforms, the inherited process
    /// image name on Linux. It is never an error and never garbage.
    ///
    /// # Errors
    ///
    /// [`Error::Unsupported`](crate::Error::Unsupported) if the platform can only read the calling thread's
    /// name and `handle` refers to another thread; [`Error::NotFound`](crate::Error::NotFound) if the thread
    /// no longer exists.
    fn thread_name(handle: &Self::Handle) -> Result<ThreadName>;

    /// Returns the label currently attached to the calling thread.
    fn current_thread_name() -> Result<ThreadName> {
        Self::thread_name(&Self::current_thread())
    }
}

#[doc(hidden)]
#[cfg(feature = "test-suites")]
#[cfg_attr(coverage_nightly, coverage(off))]
pub mod test_suite {
    #![expect(missing_docs, reason = "tests")]
    //! Conformance test suite for thread naming backends.
    //!
    //! Each function spawns its own threads so that suites stay independent of
    //! the test harness thread and of each other.

    use std::string::String;
    use std::sync::mpsc;

    use crate::Error;
    use crate::thread::ThreadAbstraction;

    pub fn test_round_trip<T: ThreadAbstraction + 'static>() {
        std::thread::spawn(|| {
            T::set_current_thread_name("gpu-copy-3").unwrap();
            assert_eq!(T::current_thread_name().unwrap().as_str(), "gpu-copy-3");
        })
        .join()
        .unwrap();
    }

    pub fn test_idempotence<T: ThreadAbstraction + 'static>() {
        std::thread::spawn(|| {
            T::set_current_thread_name("idempotent").unwrap();
            T::set_current_thread_name("idempotent").unwrap();
            assert_eq!(T::current_thread_name().unwrap().as_str(), "idempotent");
        })
        .join()
        .unwrap();
    }

    pub fn test_truncation<T: ThreadAbstraction + 'static>() {
        std::thread::spawn(|| {
            let long: String = "x".repeat(T::MAX_NAME_LEN + 16);
            T::set_current_thread_name(&long).unwrap();

            let read = T::current_thread_name().unwrap();
            assert!(!read.is_empty());
            assert!(read.len() <= T::MAX_NAME_LEN);
            assert!(long.starts_with(read.as_str()));
        })
        .join()
        .unwrap();
    }

    pub fn test_unnamed_default<T: ThreadAbstraction + 'static>() {
        std::thread::spawn(|| {
            // Whatever the platform seeds a fresh thread with, reading it must succeed.
            T::current_thread_name().unwrap();
        })
        .join()
        .unwrap();
    }

    pub fn test_invalid_name_rejected<T: ThreadAbstraction + 'static>() {
        std::thread::spawn(|| {
            assert_eq!(
                T::set_current_thread_name("nul\0inside"),
                Err(Error::InvalidName)
            );
        })
        .join()
        .unwrap();
    }

    pub fn test_cross_thread_isolation<T: ThreadAbstraction + 'static>() {
        let first = std::thread::spawn(|| {
            T::set_current_thread_name("isolation-a").unwrap();
            T::current_thread_name().unwrap()
        });
        let second = std::thread::spawn(|| {
            T::set_current_thread_name("isolation-b").unwrap();
            T::current_thread_name().unwrap()
        });

        assert_eq!(first.join().unwrap().as_str(), "isolation-a");
        assert_eq!(second.join().unwrap().as_str(), "isolation-b");
    }

    /// Only for backends whose platform can read another live thread's name.
    pub fn test_cross_thread_read<T: ThreadAbstraction + 'static>() {
        let (handle_sender, handle_receiver) = mpsc::channel();
        let (done_sender, done_receiver) = mpsc::channel::<()>();

        let worker = std::thread::spawn(move || {
            T::set_current_thread_name("peer-thread").unwrap();
            handle_sender.send(T::current_thread()).unwrap();
            // Stay alive until the observer has read the name.
            done_receiver.recv().unwrap();
        });

        let handle = handle_receiver.recv().unwrap();
        assert_eq!(T::thread_name(&handle).unwrap().as_str(), "peer-thread");

        done_sender.send(()).unwrap();
        worker.join().unwrap();
    }

    /// Only for no-op backends: writes succeed, reads come back empty.
    pub fn test_noop_backend<T: ThreadAbstraction + 'static>() {
        std::thread::spawn(|| {
            T::set_current_thread_name("anything at all").unwrap();
            assert_eq!(T::current_thread_name().unwrap().as_str(), "");
        })
        .join()
        .unwrap();
    }

    pub fn test_thread_id_unique<T: ThreadAbstraction + 'static>() {
        let main_id = T::current_thread_id();

        let other_id = std::thread::spawn(T::current_thread_id).join().unwrap();

        assert_ne!(main_id, other_id);
        assert_eq!(main_id, T::current_thread_id());
    }
}
