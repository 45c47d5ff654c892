//! Unit tests for perf module.

use movingpixels::perf::{timed, timed_step, StepTimer};

#[test]
fn test_step_timer_creation() {
    // Test that StepTimer can be created and dropped without panicking
    // The timer should not report because the budget is high
    let timer = StepTimer::start("test_operation", 1000.0);
    assert_eq!(timer.label(), "test_operation");
    drop(timer);
}

#[test]
fn test_frame_timer() {
    let timer = StepTimer::frame("frame");
    assert!(timer.elapsed_ms() >= 0.0);
}

#[test]
fn test_timed() {
    let (result, elapsed) = timed(|| (1..=10).sum::<i32>());
    assert_eq!(result, 55);
    assert!(elapsed >= 0.0);
}

#[test]
fn test_timed_step_below_budget() {
    let value = timed_step("quick", 1000.0, || vec![1, 2, 3]);
    assert_eq!(value.len(), 3);
}
