//! Common test infrastructure for the symbol table tests
//!
//! Provides a small replay harness that drives the table the way the
//! semantic analysis pass does, plus example declaration traces.

#![allow(dead_code)]

pub mod fixtures;
pub mod harness;

pub use harness::*;

/// Route `log` output through the test harness
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
