//! Gesture classifier thresholds and control modes

use serde::{Deserialize, Serialize};

use crate::classifier::predicates::{ATTACK_THRESHOLD, JUMP_THRESHOLD, MOVE_THRESHOLD};
use crate::signal::{HAND_WINDOW, HEAD_WINDOW};

/// How a vision fighter walks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementMode {
    /// Net head displacement over the window (small threshold)
    #[default]
    HeadDelta,
    /// Head position relative to the left/right bands of the camera frame
    HeadRegion,
    Disabled,
}

/// How a vision fighter raises a guard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefenseMode {
    /// Hands crossed and raised above the head line
    #[default]
    CrossedHands,
    /// Both hands held inside a box in front of the chest
    ChestZone,
}

/// Screen boundary trigger: a hand pushed past the edge requests an attack.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundaryAttack {
    /// Left hand x below this requests attack-left (default: 100)
    pub left_x: f32,
    /// Right hand x above this requests attack-right (default: 700)
    pub right_x: f32,
}

impl Default for BoundaryAttack {
    fn default() -> Self {
        Self { left_x: 100.0, right_x: 700.0 }
    }
}

/// Chest box relative to the head center
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChestZone {
    pub half_width: f32,
    pub top_offset: f32,
    pub bottom_offset: f32,
}

impl Default for ChestZone {
    fn default() -> Self {
        Self { half_width: 70.0, top_offset: 30.0, bottom_offset: 100.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Hand window length (default: 15)
    pub hand_window: usize,
    /// Head window length (default: 30)
    pub head_window: usize,
    /// Upward head travel that counts as a jump (default: 30)
    pub jump_threshold: f32,
    /// Head drift that counts as a step (default: 5)
    pub move_threshold: f32,
    /// Hand travel that counts as a punch (default: 50)
    pub attack_threshold: f32,
    pub movement: MovementMode,
    /// Head-delta steps map to the opposite screen direction, since the
    /// camera faces the player. Hand tests are never mirrored. (default: true)
    pub mirror_movement: bool,
    pub defense: DefenseMode,
    pub chest_zone: ChestZone,
    /// Left/right camera bands for head-region movement (default: 0.4 / 0.6)
    pub region_left: f32,
    pub region_right: f32,
    pub boundary_attack: Option<BoundaryAttack>,
    /// Skip inference until the head window has filled once (default: true)
    pub warmup: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            hand_window: HAND_WINDOW,
            head_window: HEAD_WINDOW,
            jump_threshold: JUMP_THRESHOLD,
            move_threshold: MOVE_THRESHOLD,
            attack_threshold: ATTACK_THRESHOLD,
            movement: MovementMode::HeadDelta,
            mirror_movement: true,
            defense: DefenseMode::CrossedHands,
            chest_zone: ChestZone::default(),
            region_left: 0.4,
            region_right: 0.6,
            boundary_attack: None,
            warmup: true,
        }
    }
}
