//! Canonical rule constants.

/// Standard Glinski array restricted to kings and knights, in setup notation.
///
/// White: king g1, knights d1 and h1. Black: king g10, knights d9 and h9.
pub const STARTING_POSITION_SETUP: &str = "///N7n///K8k/N7n";
