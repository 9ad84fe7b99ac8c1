//! Thread naming through the platform's native thread description calls.

use nametag_api::thread::ThreadName;
pub use nametag_api::thread::ThreadAbstraction;

use crate::{Error, Result};

/// Implements the [`ThreadAbstraction`] trait through the operating system's
/// native thread naming primitive.
#[derive(Debug)]
pub struct Thread;

/// Identifies a live operating-system thread for name queries.
///
/// A handle is a plain identifier; it owns nothing, and it is only meaningful
/// while the thread it refers to is alive.
#[derive(Debug, Clone, Copy)]
pub struct ThreadHandle(imp::RawHandle);

impl ThreadAbstraction for Thread {
    type Handle = ThreadHandle;

    const MAX_NAME_LEN: usize = imp::MAX_NAME_LEN;

    fn current_thread_id() -> u64 {
        imp::current_thread_id()
    }

    fn current_thread() -> ThreadHandle {
        ThreadHandle(imp::current())
    }

    fn set_current_thread_name(name: &str) -> Result<()> {
        if name.as_bytes().contains(&0) {
            // No native encoding can carry an interior NUL.
            return Err(Error::InvalidName);
        }
        imp::set_current_name(truncated(name, imp::MAX_NAME_LEN))
    }

    fn thread_name(handle: &ThreadHandle) -> Result<ThreadName> {
        imp::name(handle.0)
    }
}

/// Clamps `name` to `limit` bytes without splitting a character.
fn truncated(name: &str, limit: usize) -> &str {
    if name.len() <= limit {
        return name;
    }
    let mut end = limit;
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    &name[..end]
}

/// Converts a NUL-terminated staging buffer into an owned name.
#[cfg(unix)]
fn name_from_buffer(buffer: &[u8]) -> Result<ThreadName> {
    let length = buffer
        .iter()
        .position(|&byte| byte == 0)
        .unwrap_or(buffer.len());
    let text = core::str::from_utf8(&buffer[..length]).map_err(|_| Error::InvalidName)?;

    let mut name = ThreadName::new();
    // The staging buffers are no larger than the name capacity.
    name.push_str(text).map_err(|()| Error::InvalidName)?;
    Ok(name)
}

#[cfg(target_os = "linux")]
mod imp {
    use crate::{Error, Result, sys};
    use nametag_api::thread::ThreadName;

    pub(super) type RawHandle = libc::pthread_t;

    /// `TASK_COMM_LEN - 1`; the kernel rejects anything longer outright, so
    /// names are clamped before the call.
    pub(super) const MAX_NAME_LEN: usize = 15;

    pub(super) fn current_thread_id() -> u64 {
        // The pthread wrapper for gettid only appeared in glibc 2.30, so go
        // through the raw syscall.
        // SAFETY: `syscall(SYS_gettid)` has no preconditions for the calling thread.
        (unsafe { libc::syscall(libc::SYS_gettid) }) as u64
    }

    pub(super) fn current() -> RawHandle {
        // SAFETY: `pthread_self` has no preconditions.
        unsafe { libc::pthread_self() }
    }

    pub(super) fn set_current_name(name: &str) -> Result<()> {
        let mut buffer = [0u8; MAX_NAME_LEN + 1];
        buffer[..name.len()].copy_from_slice(name.as_bytes());

        // SAFETY: `buffer` is NUL-terminated and within `TASK_COMM_LEN`.
        let status = unsafe { sys::pthread_setname_np(current(), buffer.as_ptr().cast()) };
        match status {
            0 => Ok(()),
            code => Err(Error::NativeFailure(code)),
        }
    }

    pub(super) fn name(handle: RawHandle) -> Result<ThreadName> {
        let mut buffer = [0u8; MAX_NAME_LEN + 1];
        // SAFETY: `buffer` outlives the call and its length is passed alongside.
        let status =
            unsafe { sys::pthread_getname_np(handle, buffer.as_mut_ptr().cast(), buffer.len()) };
        match status {
            0 => super::name_from_buffer(&buffer),
            libc::ESRCH => Err(Error::NotFound),
            code => Err(Error::NativeFailure(code)),
        }
    }
}

#[cfg(target_os = "android")]
mod imp {
    use crate::{Error, Result, sys};
    use nametag_api::thread::ThreadName;

    pub(super) type RawHandle = libc::pid_t;

    /// `TASK_COMM_LEN - 1`, as on Linux.
    pub(super) const MAX_NAME_LEN: usize = 15;

    pub(super) fn current_thread_id() -> u64 {
        // SAFETY: `gettid` has no preconditions.
        (unsafe { libc::gettid() }) as u64
    }

    pub(super) fn current() -> RawHandle {
        // SAFETY: `gettid` has no preconditions.
        unsafe { libc::gettid() }
    }

    pub(super) fn set_current_name(name: &str) -> Result<()> {
        let mut buffer = [0u8; MAX_NAME_LEN + 1];
        buffer[..name.len()].copy_from_slice(name.as_bytes());

        // SAFETY: `buffer` is NUL-terminated and within `TASK_COMM_LEN`.
        let status =
            unsafe { sys::pthread_setname_np(libc::pthread_self(), buffer.as_ptr().cast()) };
        match status {
            0 => Ok(()),
            code => Err(Error::NativeFailure(code)),
        }
    }

    pub(super) fn name(handle: RawHandle) -> Result<ThreadName> {
        // Older bionic lacks `pthread_getname_np`, and `prctl` can only read
        // the calling thread's name.
        if handle != current() {
            return Err(Error::Unsupported);
        }

        let mut buffer = [0u8; MAX_NAME_LEN + 1];
        // SAFETY: `PR_GET_NAME` writes at most 16 bytes into `buffer`.
        let status = unsafe {
            libc::prctl(
                libc::PR_GET_NAME,
                buffer.as_mut_ptr(),
                0 as libc::c_ulong,
                0 as libc::c_ulong,
                0 as libc::c_ulong,
            )
        };
        if status != 0 {
            let code = std::io::Error::last_os_error().raw_os_error().unwrap_or(0);
            return Err(Error::NativeFailure(code));
        }
        super::name_from_buffer(&buffer)
    }
}

#[cfg(any(target_os = "macos", target_os = "ios"))]
mod imp {
    use crate::{Error, Result, sys};
    use nametag_api::thread::ThreadName;

    pub(super) type RawHandle = libc::pthread_t;

    /// `MAXTHREADNAMESIZE` minus the terminating NUL.
    pub(super) const MAX_NAME_LEN: usize = 63;

    pub(super) fn current_thread_id() -> u64 {
        let mut tid: u64 = 0;
        // SAFETY: thread `0` selects the calling thread and the out pointer is valid.
        let status = unsafe { libc::pthread_threadid_np(0, &mut tid) };
        debug_assert_eq!(status, 0, "pthread_threadid_np failed: {status}");
        tid
    }

    pub(super) fn current() -> RawHandle {
        // SAFETY: `pthread_self` has no preconditions.
        unsafe { libc::pthread_self() }
    }

    pub(super) fn set_current_name(name: &str) -> Result<()> {
        let mut buffer = [0u8; MAX_NAME_LEN + 1];
        buffer[..name.len()].copy_from_slice(name.as_bytes());

        // SAFETY: `buffer` is NUL-terminated and within `MAXTHREADNAMESIZE`.
        let status = unsafe { sys::pthread_setname_np(buffer.as_ptr().cast()) };
        match status {
            0 => Ok(()),
            code => Err(Error::NativeFailure(code)),
        }
    }

    pub(super) fn name(handle: RawHandle) -> Result<ThreadName> {
        let mut buffer = [0u8; MAX_NAME_LEN + 1];
        // SAFETY: `buffer` outlives the call and its length is passed alongside.
        let status =
            unsafe { sys::pthread_getname_np(handle, buffer.as_mut_ptr().cast(), buffer.len()) };
        match status {
            0 => super::name_from_buffer(&buffer),
            libc::ESRCH => Err(Error::NotFound),
            code => Err(Error::NativeFailure(code)),
        }
    }
}

#[cfg(windows)]
mod imp {
    use nametag_api::thread::{THREAD_NAME_CAPACITY, ThreadName};
    use windows_sys::Win32::Foundation::{CloseHandle, ERROR_INVALID_PARAMETER, GetLastError};
    use windows_sys::Win32::System::Threading::{
        GetCurrentThread, GetCurrentThreadId, OpenThread, THREAD_QUERY_LIMITED_INFORMATION,
    };
    use windows_sys::core::PWSTR;

    use crate::{Error, Result, sys};

    /// The thread identifier, not a `HANDLE`: the pseudo handle returned by
    /// `GetCurrentThread` is only meaningful on the calling thread, so reads
    /// open a real handle from the identifier instead.
    pub(super) type RawHandle = u32;

    /// The OS stores descriptions of arbitrary length; reads clamp at the
    /// name capacity, so writes are clamped to match.
    pub(super) const MAX_NAME_LEN: usize = THREAD_NAME_CAPACITY;

    pub(super) fn current_thread_id() -> u64 {
        // SAFETY: `GetCurrentThreadId` has no preconditions.
        u64::from(unsafe { GetCurrentThreadId() })
    }

    pub(super) fn current() -> RawHandle {
        // SAFETY: `GetCurrentThreadId` has no preconditions.
        unsafe { GetCurrentThreadId() }
    }

    pub(super) fn set_current_name(name: &str) -> Result<()> {
        let mut wide = [0u16; MAX_NAME_LEN + 1];
        for (index, unit) in name.encode_utf16().enumerate() {
            wide[index] = unit;
        }

        // SAFETY: the pseudo handle always refers to the calling thread and `wide` is NUL-terminated.
        let status = unsafe { sys::SetThreadDescription(GetCurrentThread(), wide.as_ptr()) };
        if status < 0 {
            return Err(Error::NativeFailure(status));
        }
        Ok(())
    }

    pub(super) fn name(handle: RawHandle) -> Result<ThreadName> {
        // SAFETY: `OpenThread` validates the identifier; there are no other preconditions.
        let thread = unsafe { OpenThread(THREAD_QUERY_LIMITED_INFORMATION, 0, handle) };
        if thread.is_null() {
            // SAFETY: `GetLastError` has no preconditions.
            let error = unsafe { GetLastError() };
            return Err(if error == ERROR_INVALID_PARAMETER {
                Error::NotFound
            } else {
                Error::NativeFailure(error as i32)
            });
        }

        let mut description: PWSTR = core::ptr::null_mut();
        // SAFETY: `thread` is a live handle with query access and `description` is a valid out pointer.
        let status = unsafe { sys::GetThreadDescription(thread, &mut description) };
        // SAFETY: `thread` was opened above and is not used past this point.
        unsafe { CloseHandle(thread) };

        if status < 0 {
            return Err(Error::NativeFailure(status));
        }
        if description.is_null() {
            return Ok(ThreadName::new());
        }

        // SAFETY: on success the OS hands out a NUL-terminated UTF-16 buffer,
        // borrowed until released below.
        let name = unsafe { copy_description(description) };
        // SAFETY: the buffer came from `GetThreadDescription` and is released
        // exactly once, through its matching free primitive.
        unsafe { sys::LocalFree(description.cast()) };
        name
    }

    /// Copies the OS-owned description into an owned name, clamping at capacity.
    ///
    /// # Safety
    ///
    /// `description` must be a valid NUL-terminated UTF-16 string, readable
    /// until the call returns.
    unsafe fn copy_description(description: PWSTR) -> Result<ThreadName> {
        let mut length = 0;
        // SAFETY: the string is NUL-terminated per the caller's contract and
        // we stop at the terminator.
        while unsafe { *description.add(length) } != 0 {
            length += 1;
        }
        // SAFETY: the units up to `length` were just probed as readable.
        let units = unsafe { core::slice::from_raw_parts(description, length) };

        let mut name = ThreadName::new();
        for unit in char::decode_utf16(units.iter().copied()) {
            let Ok(character) = unit else {
                return Err(Error::InvalidName);
            };
            if name.push(character).is_err() {
                break;
            }
        }
        Ok(name)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn thread_id_consistent_within_thread() {
        assert_eq!(Thread::current_thread_id(), Thread::current_thread_id());
    }

    #[test]
    fn thread_id_unique_across_threads() {
        let main_id = Thread::current_thread_id();
        let other_id = std::thread::spawn(Thread::current_thread_id)
            .join()
            .unwrap();

        assert_ne!(
            main_id, other_id,
            "distinct threads should report distinct ids"
        );
    }

    #[test]
    fn handle_refers_to_calling_thread() {
        std::thread::spawn(|| {
            Thread::set_current_thread_name("handle-check").unwrap();
            let handle = Thread::current_thread();
            assert_eq!(
                Thread::thread_name(&handle).unwrap().as_str(),
                "handle-check"
            );
        })
        .join()
        .unwrap();
    }
}
