//! Entry content inspection
//!
//! - `classifier`: text vs binary heuristic
//! - `fingerprint`: SHA-256 content identity used for equality checks

pub mod classifier;
pub mod fingerprint;

/// Length of the abbreviated fingerprint shown on the console
pub const SHORT_FINGERPRINT_LENGTH: usize = 7;
