//! The Nametag thread naming abstraction layer API.

#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

#[cfg(any(test, feature = "test-suites"))]
extern crate std;

mod error;
pub mod thread;

pub use error::{Error, Result};
