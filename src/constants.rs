//! Crate-wide constants.
//!
//! Centralizes magic numbers used by the moving-pixels state and its helpers.

// ============================================================================
// Status Bar
// ============================================================================

/// How long the transform status text stays visible, in milliseconds
pub const STATUS_TEXT_MSECS: u32 = 100;

// ============================================================================
// Transform Handles
// ============================================================================

/// Default edge length of a transform handle graphic, in screen pixels
pub const DEFAULT_HANDLE_SIZE: i32 = 5;

/// Largest handle size accepted from settings
pub const MAX_HANDLE_SIZE: i32 = 64;

/// Scale handle hit box, as a multiple of the handle size
pub const SCALE_HIT_FACTOR: i32 = 2;

/// Rotate handle hit box, as a multiple of the handle size
pub const ROTATE_HIT_FACTOR: i32 = 3;

// ============================================================================
// Color Conversion
// ============================================================================

/// Index used for the transparent color in indexed images
pub const MASK_INDEX: u8 = 0;

/// Luma weights (percent) for RGB -> grayscale conversion
pub const LUMA_WEIGHTS: (u32, u32, u32) = (30, 59, 11);

// ============================================================================
// Performance
// ============================================================================

/// Target frame time for 60 FPS
pub const TARGET_FRAME_MS: f64 = 16.67;

/// Threshold for warning about a slow drag step
pub const SLOW_DRAG_MS: f64 = 8.0;

// ============================================================================
// Settings
// ============================================================================

/// Directory name under the platform config dir
pub const SETTINGS_DIR_NAME: &str = "movingpixels";

/// Settings file name
pub const SETTINGS_FILE_NAME: &str = "settings.json";
