//! Ten-pin bowling score tracker (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `tenpin::{core,registry,report,types}` and hosts the
//! command-line front end.

pub mod cli;

pub use tenpin_core as core;
pub use tenpin_registry as registry;
pub use tenpin_report as report;
pub use tenpin_types as types;
