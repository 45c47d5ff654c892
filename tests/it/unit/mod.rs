//! Unit tests for movingpixels.

mod logging_tests;
mod perf_tests;
