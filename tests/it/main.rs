//! Single test binary entry point.
//!
//! All integration tests are compiled into one binary to keep linking cheap.
//!
//! Structure:
//! - unit: Single-component tests through the public API
//! - integration: CSV-to-frame workflows and concurrent frame use

mod integration;
