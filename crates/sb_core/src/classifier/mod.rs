//! Movement classifier - gesture predicates over landmark windows
//!
//! `predicates` holds the pure threshold tests; `gestures` applies their
//! `_with` forms to a fighter's buffers with the configured thresholds and
//! control modes.

mod gestures;
pub mod predicates;

pub use gestures::{GestureClassifier, GestureFlags};
pub use predicates::{
    is_attacking_left, is_attacking_left_with, is_attacking_right, is_attacking_right_with,
    is_defending, is_jumping, is_jumping_with, is_moving_left, is_moving_left_with,
    is_moving_right, is_moving_right_with, net_delta,
};
