//! Timing of input handling.
//!
//! Drag steps and handle hit tests run for every pointer event while pixels
//! float. Each is wrapped in a [`StepTimer`] that reports through `tracing`
//! when the step takes longer than its budget.
//!
//! Finer-grained timing is compiled in with the `profiling` feature:
//!
//! ```ignore
//! use movingpixels::profile_scope;
//!
//! fn hit_test() {
//!     profile_scope!("hit_test");        // 1ms budget
//!     profile_scope!("hit_test", 0.5);   // explicit budget
//! }
//! ```

use crate::constants::TARGET_FRAME_MS;
use std::time::Instant;

/// Budget used by [`profile_scope!`] when none is given
pub const PROFILE_BUDGET_MS: f64 = 1.0;

/// Time the rest of the enclosing block when the `profiling` feature is on.
/// Expands to nothing otherwise.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        $crate::profile_scope!($name, $crate::perf::PROFILE_BUDGET_MS);
    };
    ($name:expr, $budget_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _step_timer = $crate::perf::StepTimer::start($name, $budget_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $budget_ms);
    };
}

/// Reports a step on drop if it ran over `budget_ms`.
pub struct StepTimer {
    label: &'static str,
    started: Instant,
    budget_ms: f64,
}

impl StepTimer {
    pub fn start(label: &'static str, budget_ms: f64) -> Self {
        Self {
            label,
            started: Instant::now(),
            budget_ms,
        }
    }

    /// Timer with a one-frame budget at 60 FPS
    pub fn frame(label: &'static str) -> Self {
        Self::start(label, TARGET_FRAME_MS)
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn elapsed_ms(&self) -> f64 {
        millis_since(self.started)
    }
}

impl Drop for StepTimer {
    fn drop(&mut self) {
        report_over_budget(self.label, self.elapsed_ms(), self.budget_ms);
    }
}

/// Run `f`, returning its result and how long it took in milliseconds.
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, f64) {
    let started = Instant::now();
    let value = f();
    (value, millis_since(started))
}

/// Run `f` and report it if it ran over `budget_ms`.
pub fn timed_step<T>(label: &str, budget_ms: f64, f: impl FnOnce() -> T) -> T {
    let (value, elapsed_ms) = timed(f);
    report_over_budget(label, elapsed_ms, budget_ms);
    value
}

fn millis_since(started: Instant) -> f64 {
    started.elapsed().as_secs_f64() * 1000.0
}

fn report_over_budget(label: &str, elapsed_ms: f64, budget_ms: f64) {
    if elapsed_ms <= budget_ms {
        return;
    }

    #[cfg(feature = "profiling")]
    tracing::trace!(step = label, budget_ms, "[PERF] {elapsed_ms:.2}ms");

    tracing::warn!(
        step = label,
        elapsed_ms = format!("{elapsed_ms:.2}"),
        budget_ms = format!("{budget_ms:.2}"),
        "Step over budget"
    );
}
