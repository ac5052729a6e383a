//! Reformat server library.
//!
//! Exposed as a library so integration tests can build the router
//! in-process with a mock engine injected.

pub mod api;
pub mod metrics;
pub mod state;
