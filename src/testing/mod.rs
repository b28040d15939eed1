//! Test support.

pub mod mock;

pub use mock::MockTransport;
