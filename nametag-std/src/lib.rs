//! Std thread naming backend for Nametag.
//!
//! This implements the naming primitives through each desktop platform's native thread
//! description calls, so the labels are visible to debuggers, profilers and `ps`-like
//! tools, not just to this crate.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod sys;
pub mod thread;

pub use nametag_api::{Error, Result};

#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_os = "macos",
    target_os = "ios",
    windows
)))]
compile_error!(
    "nametag-std supports Linux, Android, Apple and Windows targets; use nametag-noop elsewhere"
);
