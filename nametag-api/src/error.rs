/// A result with the [`Error`] error.
pub type Result<T> = core::result::Result<T, Error>;

/// An error that may happen while naming a thread or reading a name back.
///
/// Platform backends normalize their native failure modes into this taxonomy,
/// so callers never need per-platform error handling. Thread names are purely
/// diagnostic; callers are expected to treat any of these as non-fatal and
/// proceed without the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The operation is not available on this platform, or not for this handle.
    Unsupported,
    /// The name cannot be represented in the platform's native text encoding.
    InvalidName,
    /// The underlying operating system call reported a failure.
    ///
    /// Carries the raw platform status code (an `errno` value, a pthread
    /// return code, or a Windows `HRESULT`) for diagnostics.
    NativeFailure(i32),
    /// The handle refers to a thread that no longer exists.
    NotFound,
}

impl core::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Unsupported => write!(f, "operation not supported on this platform or handle"),
            Error::InvalidName => write!(f, "name not representable in the native text encoding"),
            Error::NativeFailure(code) => write!(f, "native call failed with status {code}"),
            Error::NotFound => write!(f, "no such thread"),
        }
    }
}
