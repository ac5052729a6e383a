//! Test doubles for external collaborators.
//!
//! Only the conversion engine is external to this crate, so only it gets
//! a mock. Compiled into the crate so downstream test fixtures can
//! inject it alongside the real router.

mod mock_engine;

pub use mock_engine::{MockEngine, RecordedDispatch};
