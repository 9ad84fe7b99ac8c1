//! Native declarations for the thread description primitives.
//!
//! The naming calls are declared locally rather than pulled from the bindings crates,
//! because several toolchain baselines ship bindings that predate them:
//! `pthread_getname_np` is missing from older bionic and musl bindings, and the
//! Windows description pair only reached the import libraries with the 10.0.14393
//! SDK. Declaring them here lets the backend call them unconditionally.
//!
//! The signatures must stay byte-for-byte equivalent to the authoritative native
//! headers (`pthread.h`, `processthreadsapi.h`). Revisit this module whenever the
//! minimum supported SDK or bindings baseline is raised.

#[cfg(any(target_os = "linux", target_os = "android"))]
unsafe extern "C" {
    pub(crate) fn pthread_setname_np(
        thread: libc::pthread_t,
        name: *const libc::c_char,
    ) -> libc::c_int;

    #[cfg(target_os = "linux")]
    pub(crate) fn pthread_getname_np(
        thread: libc::pthread_t,
        name: *mut libc::c_char,
        len: libc::size_t,
    ) -> libc::c_int;
}

#[cfg(any(target_os = "macos", target_os = "ios"))]
unsafe extern "C" {
    // Apple's variant renames the calling thread only, so it takes no thread argument.
    pub(crate) fn pthread_setname_np(name: *const libc::c_char) -> libc::c_int;

    pub(crate) fn pthread_getname_np(
        thread: libc::pthread_t,
        name: *mut libc::c_char,
        len: libc::size_t,
    ) -> libc::c_int;
}

#[cfg(windows)]
#[link(name = "kernel32")]
unsafe extern "system" {
    pub(crate) fn SetThreadDescription(
        thread: windows_sys::Win32::Foundation::HANDLE,
        description: windows_sys::core::PCWSTR,
    ) -> windows_sys::core::HRESULT;

    pub(crate) fn GetThreadDescription(
        thread: windows_sys::Win32::Foundation::HANDLE,
        description: *mut windows_sys::core::PWSTR,
    ) -> windows_sys::core::HRESULT;

    // The matching free primitive for buffers returned by `GetThreadDescription`.
    pub(crate) fn LocalFree(memory: *mut core::ffi::c_void) -> *mut core::ffi::c_void;
}
