//! Fallback thread naming backend for platforms without a naming primitive.
//!
//! Thread names are purely diagnostic, so a platform that cannot record one must
//! not fail the caller: writes report success without recording anything, and
//! reads return the empty name.

#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

#[cfg(not(target_os = "none"))]
extern crate std;

pub mod thread;

pub use nametag_api::{Error, Result};
