//! Tuning constants shared by the browser layer.
//!
//! The app has no runtime configuration surface beyond the persisted theme
//! preference, so everything else is fixed at compile time.

/// Relative path of the portfolio document, fetched once per page load.
pub const DATA_PATH: &str = "data.json";

/// localStorage key holding the persisted theme preference.
pub const THEME_STORAGE_KEY: &str = "theme-preference";

/// Upper bound on the particle count regardless of viewport width.
pub const PARTICLE_CAP: usize = 50;

/// One particle per this many pixels of viewport width, up to the cap.
pub const PARTICLE_DENSITY_DIVISOR: f64 = 30.0;

/// Pointer repulsion kicks in inside this radius (px).
pub const REPEL_RADIUS: f64 = 100.0;

/// Repulsion strength, proportional to the pointer offset.
pub const REPEL_FACTOR: f64 = 0.001;

/// Fraction of the remaining distance the cursor follower covers per frame.
pub const CURSOR_EASE: f64 = 0.1;

/// Toast auto-hide delay (ms).
pub const TOAST_MS: i32 = 3000;

/// Typewriter effect: per-character delay and start delay (ms).
pub const TYPE_CHAR_MS: i32 = 80;
pub const TYPE_START_MS: i32 = 1000;

/// Counter animation: total duration, per-counter stagger, start delay (ms).
pub const COUNTER_MS: f64 = 2000.0;
pub const COUNTER_STAGGER_MS: i32 = 200;
pub const COUNTER_START_MS: i32 = 2000;

/// Back-to-top button becomes visible past this scroll offset (px).
pub const BACK_TO_TOP_OFFSET: f64 = 300.0;
