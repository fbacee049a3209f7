//! Integration tests for microframe.
//!
//! These tests load frames from files and exercise complete workflows.

mod concurrency_tests;
mod csv_frame_tests;
