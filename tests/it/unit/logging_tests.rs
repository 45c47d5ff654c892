//! Unit tests for logging module.

use movingpixels::logging;

#[test]
fn test_init_is_idempotent() {
    // Another test may have installed the subscriber already
    let _ = logging::init();
    assert!(!logging::init());
}
