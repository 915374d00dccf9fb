//! Gesture predicates over a single window
//!
//! Every windowed test looks only at the net displacement between the oldest
//! and newest sample. Screen y grows downward, so an upward head motion is a
//! negative y delta.

use crate::geometry::{Axis, Point2D};

/// Upward head travel (px) across the head window that counts as a jump
pub const JUMP_THRESHOLD: f32 = 30.0;

/// Head drift (px) across the window that counts as a step
pub const MOVE_THRESHOLD: f32 = 5.0;

/// Hand travel (px) across the hand window that counts as a punch
pub const ATTACK_THRESHOLD: f32 = 50.0;

/// Newest minus oldest along `axis`; `None` for an empty window.
#[inline]
pub fn net_delta(window: &[Point2D], axis: Axis) -> Option<f32> {
    let oldest = window.first()?;
    let newest = window.last()?;
    Some(newest.along(axis) - oldest.along(axis))
}

#[inline]
fn delta_below(window: &[Point2D], axis: Axis, limit: f32) -> bool {
    net_delta(window, axis).is_some_and(|d| d < limit)
}

#[inline]
fn delta_above(window: &[Point2D], axis: Axis, limit: f32) -> bool {
    net_delta(window, axis).is_some_and(|d| d > limit)
}

pub fn is_jumping(head_window: &[Point2D]) -> bool {
    is_jumping_with(head_window, JUMP_THRESHOLD)
}

pub fn is_jumping_with(head_window: &[Point2D], threshold: f32) -> bool {
    delta_below(head_window, Axis::Y, -threshold)
}

pub fn is_moving_left(window: &[Point2D]) -> bool {
    is_moving_left_with(window, MOVE_THRESHOLD)
}

pub fn is_moving_left_with(window: &[Point2D], threshold: f32) -> bool {
    delta_below(window, Axis::X, -threshold)
}

pub fn is_moving_right(window: &[Point2D]) -> bool {
    is_moving_right_with(window, MOVE_THRESHOLD)
}

pub fn is_moving_right_with(window: &[Point2D], threshold: f32) -> bool {
    delta_above(window, Axis::X, threshold)
}

pub fn is_attacking_left(left_hand_window: &[Point2D]) -> bool {
    is_attacking_left_with(left_hand_window, ATTACK_THRESHOLD)
}

pub fn is_attacking_left_with(left_hand_window: &[Point2D], threshold: f32) -> bool {
    delta_below(left_hand_window, Axis::X, -threshold)
}

pub fn is_attacking_right(right_hand_window: &[Point2D]) -> bool {
    is_attacking_right_with(right_hand_window, ATTACK_THRESHOLD)
}

pub fn is_attacking_right_with(right_hand_window: &[Point2D], threshold: f32) -> bool {
    delta_above(right_hand_window, Axis::X, threshold)
}

/// Hands crossed (left x past right x) and raised above the head line.
///
/// Uses single newest samples, not windowed deltas.
pub fn is_defending(left_hand: Point2D, right_hand: Point2D, head: Point2D) -> bool {
    left_hand.x > right_hand.x && head.y > (left_hand.y + right_hand.y) / 2.0
}
